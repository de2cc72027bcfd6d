//! Browser location entries for admin console pages.
//!
//! Paths look like `/admin_console/{section}/{team}?session_token_index={n}`.
//! The team segment is empty for pages that are not team-scoped, and the
//! `session_token_index` of the current URL is carried over unchanged.

use super::section::{Section, UnknownSection};
use super::state::NavTarget;

pub const CONSOLE_ROOT: &str = "/admin_console";
pub const SESSION_TOKEN_PARAM: &str = "session_token_index";

/// One history entry to push for a navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationEntry {
    pub target: NavTarget,
    pub session_token_index: Option<String>,
}

impl LocationEntry {
    pub fn for_target(target: NavTarget, session_token_index: Option<String>) -> Self {
        Self {
            target,
            session_token_index,
        }
    }

    /// Path plus query for `history.pushState`.
    pub fn url(&self) -> String {
        let team = self
            .target
            .team
            .as_deref()
            .map(|t| urlencoding::encode(t).into_owned())
            .unwrap_or_default();
        let index = self.session_token_index.as_deref().unwrap_or_default();
        format!(
            "{}/{}/{}?{}={}",
            CONSOLE_ROOT,
            self.target.section.as_str(),
            team,
            SESSION_TOKEN_PARAM,
            index
        )
    }

    /// JSON stored as the history entry state.
    pub fn state_json(&self) -> String {
        serde_json::to_string(&self.target).unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocationError {
    NotConsolePath(String),
    UnknownSection(UnknownSection),
    MissingTeam(Section),
}

impl std::fmt::Display for LocationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LocationError::NotConsolePath(path) => {
                write!(f, "'{}' is not an admin console path", path)
            }
            LocationError::UnknownSection(err) => write!(f, "{}", err),
            LocationError::MissingTeam(section) => {
                write!(f, "section '{}' needs a team id", section)
            }
        }
    }
}

impl std::error::Error for LocationError {}

impl From<UnknownSection> for LocationError {
    fn from(err: UnknownSection) -> Self {
        LocationError::UnknownSection(err)
    }
}

/// Reads a console pathname back into a navigation target.
///
/// The bare console root maps to the default page.
pub fn parse_location(path: &str) -> Result<NavTarget, LocationError> {
    let rest = path
        .strip_prefix(CONSOLE_ROOT)
        .filter(|rest| rest.is_empty() || rest.starts_with('/'))
        .ok_or_else(|| LocationError::NotConsolePath(path.to_string()))?;

    let mut segments = rest.split('/').filter(|s| !s.is_empty());
    let section = match segments.next() {
        Some(raw) => raw.parse::<Section>()?,
        None => return Ok(NavTarget::fallback()),
    };
    let team = segments
        .next()
        .map(|raw| {
            urlencoding::decode(raw)
                .map(|t| t.into_owned())
                .unwrap_or_else(|_| raw.to_string())
        });

    match (section.is_team_scoped(), team) {
        (true, None) => Err(LocationError::MissingTeam(section)),
        (true, Some(team)) => Ok(NavTarget {
            section,
            team: Some(team),
        }),
        (false, _) => Ok(NavTarget::new(section, None)),
    }
}

/// The passthrough session index from a `location.search` string.
///
/// Only the `session_token_index` pair is looked at; the value is returned
/// as it appears in the URL, still encoded. Other parameters may be in any
/// shape.
pub fn session_token_index(search: &str) -> Option<String> {
    search
        .trim_start_matches('?')
        .split('&')
        .map(|pair| pair.split_once('=').unwrap_or((pair, "")))
        .find(|(key, _)| *key == SESSION_TOKEN_PARAM)
        .map(|(_, value)| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_for_plain_section() {
        let entry = LocationEntry::for_target(
            NavTarget::new(Section::SqlSettings, None),
            Some("2".to_string()),
        );
        assert_eq!(entry.url(), "/admin_console/sql_settings/?session_token_index=2");
    }

    #[test]
    fn test_url_for_team_section() {
        let entry = LocationEntry::for_target(NavTarget::new(Section::TeamUsers, Some("t1")), None);
        assert_eq!(entry.url(), "/admin_console/team_users/t1?session_token_index=");
    }

    #[test]
    fn test_url_parses_back() {
        let target = NavTarget::new(Section::TeamAnalytics, Some("team one"));
        let entry = LocationEntry::for_target(target.clone(), Some("0".to_string()));
        let url = entry.url();
        let path = url.split('?').next().unwrap();
        assert_eq!(parse_location(path), Ok(target));
    }

    #[test]
    fn test_parse_location_variants() {
        assert_eq!(parse_location("/admin_console"), Ok(NavTarget::fallback()));
        assert_eq!(parse_location("/admin_console/"), Ok(NavTarget::fallback()));
        assert_eq!(
            parse_location("/admin_console/logs/"),
            Ok(NavTarget::new(Section::Logs, None))
        );
        assert_eq!(
            parse_location("/admin_console/license/ignored"),
            Ok(NavTarget::new(Section::License, None))
        );
        assert_eq!(
            parse_location("/admin_console/team_users/t1/"),
            Ok(NavTarget::new(Section::TeamUsers, Some("t1")))
        );
    }

    #[test]
    fn test_parse_location_errors() {
        assert_eq!(
            parse_location("/channels/town-square"),
            Err(LocationError::NotConsolePath("/channels/town-square".to_string()))
        );
        assert!(matches!(
            parse_location("/admin_consoleX/logs"),
            Err(LocationError::NotConsolePath(_))
        ));
        assert_eq!(
            parse_location("/admin_console/billing"),
            Err(LocationError::UnknownSection(UnknownSection("billing".to_string())))
        );
        assert_eq!(
            parse_location("/admin_console/team_analytics/"),
            Err(LocationError::MissingTeam(Section::TeamAnalytics))
        );
    }

    #[test]
    fn test_session_token_index() {
        assert_eq!(
            session_token_index("?session_token_index=3&x=1"),
            Some("3".to_string())
        );
        assert_eq!(session_token_index(""), None);
        assert_eq!(session_token_index("?other=1"), None);
        assert_eq!(session_token_index("?session_token_indexx=1"), None);
    }

    #[test]
    fn test_session_token_index_next_to_unrelated_params() {
        for search in [
            "?session_token_index=3&filter[]=a",
            "?filter[]=a&session_token_index=3",
            "?session_token_index=3&a[b]=1",
            "?session_token_index=3&x=1&x=2",
            "?x=%ZZ&session_token_index=3",
        ] {
            assert_eq!(session_token_index(search), Some("3".to_string()), "{}", search);
        }
    }

    #[test]
    fn test_session_token_index_kept_verbatim() {
        let index = session_token_index("?session_token_index=a+b%2F1");
        assert_eq!(index.as_deref(), Some("a+b%2F1"));

        let entry = LocationEntry::for_target(NavTarget::new(Section::Logs, None), index);
        assert_eq!(entry.url(), "/admin_console/logs/?session_token_index=a+b%2F1");
    }

    #[test]
    fn test_state_json() {
        let entry = LocationEntry::for_target(NavTarget::new(Section::Logs, None), None);
        assert_eq!(entry.state_json(), r#"{"section":"logs","team":null}"#);
    }
}
