use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Configuration pages reachable from the admin sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    ServiceSettings,
    TeamSettings,
    SqlSettings,
    EmailSettings,
    ImageSettings,
    LogSettings,
    RateSettings,
    PrivacySettings,
    GitlabSettings,
    CloudronSettings,
    LdapSettings,
    LegalAndSupportSettings,
    TeamUsers,
    TeamAnalytics,
    License,
    Logs,
}

impl Section {
    pub fn as_str(&self) -> &'static str {
        match self {
            Section::ServiceSettings => "service_settings",
            Section::TeamSettings => "team_settings",
            Section::SqlSettings => "sql_settings",
            Section::EmailSettings => "email_settings",
            Section::ImageSettings => "image_settings",
            Section::LogSettings => "log_settings",
            Section::RateSettings => "rate_settings",
            Section::PrivacySettings => "privacy_settings",
            Section::GitlabSettings => "gitlab_settings",
            Section::CloudronSettings => "cloudron_settings",
            Section::LdapSettings => "ldap_settings",
            Section::LegalAndSupportSettings => "legal_and_support_settings",
            Section::TeamUsers => "team_users",
            Section::TeamAnalytics => "team_analytics",
            Section::License => "license",
            Section::Logs => "logs",
        }
    }

    /// Sidebar label
    pub fn label(&self) -> &'static str {
        match self {
            Section::ServiceSettings => "Service Settings",
            Section::TeamSettings => "Team Settings",
            Section::SqlSettings => "SQL Settings",
            Section::EmailSettings => "Email Settings",
            Section::ImageSettings => "File Settings",
            Section::LogSettings => "Log Settings",
            Section::RateSettings => "Rate Limit Settings",
            Section::PrivacySettings => "Privacy Settings",
            Section::GitlabSettings => "GitLab Settings",
            Section::CloudronSettings => "Cloudron Settings",
            Section::LdapSettings => "LDAP Settings",
            Section::LegalAndSupportSettings => "Legal and Support Settings",
            Section::TeamUsers => "Users",
            Section::TeamAnalytics => "Statistics",
            Section::License => "Edition and License",
            Section::Logs => "Logs",
        }
    }

    /// Team-scoped pages are only active together with a matching team.
    pub fn is_team_scoped(&self) -> bool {
        matches!(self, Section::TeamUsers | Section::TeamAnalytics)
    }

    pub fn all() -> Vec<Section> {
        vec![
            Section::ServiceSettings,
            Section::TeamSettings,
            Section::SqlSettings,
            Section::EmailSettings,
            Section::ImageSettings,
            Section::LogSettings,
            Section::RateSettings,
            Section::PrivacySettings,
            Section::GitlabSettings,
            Section::CloudronSettings,
            Section::LdapSettings,
            Section::LegalAndSupportSettings,
            Section::TeamUsers,
            Section::TeamAnalytics,
            Section::License,
            Section::Logs,
        ]
    }

    /// The SETTINGS group in sidebar order, LDAP included.
    pub fn settings_entries() -> Vec<Section> {
        Section::all()
            .into_iter()
            .take_while(|s| *s != Section::TeamUsers)
            .collect()
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSection(pub String);

impl std::fmt::Display for UnknownSection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown admin console section '{}'", self.0)
    }
}

impl std::error::Error for UnknownSection {}

impl FromStr for Section {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::all()
            .into_iter()
            .find(|section| section.as_str() == s)
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}
