use super::section::Section;

/// Whether the sidebar entry `(candidate, candidate_team)` matches the current
/// navigation `(current, current_team)`.
///
/// Team-scoped sections additionally require a current team equal to the
/// candidate team; without a current team they never match.
pub fn is_active(
    candidate: Section,
    candidate_team: Option<&str>,
    current: Option<Section>,
    current_team: Option<&str>,
) -> bool {
    if current != Some(candidate) {
        return false;
    }
    if !candidate.is_team_scoped() {
        return true;
    }
    match current_team {
        Some(team) => candidate_team == Some(team),
        None => false,
    }
}

/// CSS class for an entry: `"active"` or empty.
pub fn active_class(
    candidate: Section,
    candidate_team: Option<&str>,
    current: Option<Section>,
    current_team: Option<&str>,
) -> &'static str {
    if is_active(candidate, candidate_team, current, current_team) {
        "active"
    } else {
        ""
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_sections_ignore_team() {
        for section in Section::all().into_iter().filter(|s| !s.is_team_scoped()) {
            assert!(is_active(section, Some("t1"), Some(section), Some("t2")));
            assert!(is_active(section, None, Some(section), Some("t2")));
            assert!(is_active(section, Some("t1"), Some(section), None));
            assert!(is_active(section, None, Some(section), None));
        }
    }

    #[test]
    fn test_team_scoped_sections_need_same_team() {
        for section in [Section::TeamUsers, Section::TeamAnalytics] {
            assert!(is_active(section, Some("t1"), Some(section), Some("t1")));
            assert!(!is_active(section, Some("t1"), Some(section), Some("t2")));
            assert!(!is_active(section, Some("t1"), Some(section), None));
            assert!(!is_active(section, None, Some(section), None));
        }
    }

    #[test]
    fn test_different_or_empty_section_never_active() {
        assert!(!is_active(Section::Logs, None, Some(Section::License), None));
        assert!(!is_active(Section::Logs, None, None, None));
        assert!(!is_active(
            Section::TeamAnalytics,
            Some("t1"),
            Some(Section::TeamUsers),
            Some("t1")
        ));
    }

    #[test]
    fn test_active_class() {
        assert_eq!(
            active_class(Section::TeamUsers, Some("t1"), Some(Section::TeamUsers), Some("t1")),
            "active"
        );
        assert_eq!(
            active_class(Section::TeamAnalytics, Some("t1"), Some(Section::TeamUsers), Some("t1")),
            ""
        );
    }
}
