use anyhow::Context;
use serde::{Deserialize, Serialize};

use super::client_config::{ClientConfig, FeatureGates, LicenseInfo};
use super::teams::{SelectedTeams, TeamDirectory};

/// Initial data the server embeds in the admin console page.
///
/// `teams` stays `None` until the directory is known; the sidebar shows a
/// loading placeholder in that case.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConsoleBootstrap {
    #[serde(default)]
    pub config: ClientConfig,
    #[serde(default)]
    pub license: LicenseInfo,
    #[serde(default)]
    pub teams: Option<TeamDirectory>,
    #[serde(default)]
    pub selected_teams: SelectedTeams,
}

impl ConsoleBootstrap {
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("failed to parse admin console bootstrap")
    }

    pub fn feature_gates(&self) -> FeatureGates {
        FeatureGates::new(&self.config, &self.license)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_bootstrap() {
        let bootstrap = ConsoleBootstrap::from_json(
            r#"{
                "config": {"BuildEnterpriseReady": "true", "SiteName": "Chat"},
                "license": {"IsLicensed": "false"},
                "teams": {"t1": {"id": "t1", "name": "Acme"}},
                "selected_teams": {"t1": "true"}
            }"#,
        )
        .unwrap();

        assert_eq!(bootstrap.config.site_name, "Chat");
        assert_eq!(bootstrap.teams.as_ref().map(|t| t.len()), Some(1));
        assert!(bootstrap.selected_teams.contains("t1"));

        let gates = bootstrap.feature_gates();
        assert!(gates.show_license());
        assert!(!gates.show_ldap());
    }

    #[test]
    fn test_empty_bootstrap_means_loading() {
        let bootstrap = ConsoleBootstrap::from_json("{}").unwrap();
        assert!(bootstrap.teams.is_none());
        assert!(bootstrap.selected_teams.is_empty());
        assert_eq!(bootstrap.feature_gates(), FeatureGates::default());
    }

    #[test]
    fn test_malformed_bootstrap_reports_context() {
        let err = ConsoleBootstrap::from_json("{not json").unwrap_err();
        assert!(format!("{err:#}").starts_with("failed to parse admin console bootstrap"));
    }
}
