//! What the sidebar shows for a given console state.
//!
//! The view in `layout::left::sidebar` renders this model one to one.

use contracts::system::client_config::FeatureGates;
use contracts::system::teams::TeamDirectory;

use super::section::Section;
use super::state::{ConsoleState, NavState, NavTarget};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    pub target: NavTarget,
    pub label: String,
    pub class: &'static str,
}

impl MenuEntry {
    fn new(nav: &NavState, section: Section, team: Option<&str>, label: String) -> Self {
        Self {
            target: NavTarget::new(section, team),
            label,
            class: nav.active_class(section, team),
        }
    }

    pub fn is_active(&self) -> bool {
        !self.class.is_empty()
    }
}

/// Submenu of one selected team.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamSubmenu {
    pub team_id: String,
    pub name: String,
    /// Class of the team-name link; active when either child is.
    pub header_class: String,
    pub users: MenuEntry,
    pub statistics: MenuEntry,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TeamsBlock {
    Loading,
    Teams(Vec<TeamSubmenu>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarModel {
    pub settings: Vec<MenuEntry>,
    /// `TEAMS (n)` counter, `*` while the directory is loading.
    pub team_count: String,
    pub teams: TeamsBlock,
    pub other: Vec<MenuEntry>,
}

impl SidebarModel {
    pub fn build(
        state: &ConsoleState,
        directory: Option<&TeamDirectory>,
        gates: FeatureGates,
    ) -> Self {
        let nav = &state.nav;

        let settings = Section::settings_entries()
            .into_iter()
            .filter(|section| *section != Section::LdapSettings || gates.show_ldap())
            .map(|section| MenuEntry::new(nav, section, None, section.label().to_string()))
            .collect();

        let (team_count, teams) = match directory {
            None => ("*".to_string(), TeamsBlock::Loading),
            Some(directory) => {
                let submenus = state
                    .selected_teams
                    .visible_in(directory)
                    .map(|team| team_submenu(nav, &team.id, team.label()))
                    .collect();
                (directory.len().to_string(), TeamsBlock::Teams(submenus))
            }
        };

        let mut other = Vec::new();
        if gates.show_license() {
            other.push(MenuEntry::new(
                nav,
                Section::License,
                None,
                Section::License.label().to_string(),
            ));
        }
        other.push(MenuEntry::new(
            nav,
            Section::Logs,
            None,
            Section::Logs.label().to_string(),
        ));

        Self {
            settings,
            team_count,
            teams,
            other,
        }
    }

    #[cfg(test)]
    pub fn contains(&self, section: Section) -> bool {
        self.settings
            .iter()
            .chain(self.other.iter())
            .any(|entry| entry.target.section == section)
    }
}

fn team_submenu(nav: &NavState, team_id: &str, name: &str) -> TeamSubmenu {
    let users = MenuEntry::new(
        nav,
        Section::TeamUsers,
        Some(team_id),
        format!("- {}", Section::TeamUsers.label()),
    );
    let statistics = MenuEntry::new(
        nav,
        Section::TeamAnalytics,
        Some(team_id),
        format!("- {}", Section::TeamAnalytics.label()),
    );

    let header_class = ["nav__sub-menu-item", users.class, statistics.class]
        .into_iter()
        .filter(|c| !c.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    TeamSubmenu {
        team_id: team_id.to_string(),
        name: name.to_string(),
        header_class,
        users,
        statistics,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::admin_console::SidebarMsg;
    use contracts::system::teams::Team;

    fn acme_directory() -> TeamDirectory {
        let mut teams = TeamDirectory::new();
        teams.insert("t1".into(), Team::new("t1", "Acme"));
        teams
    }

    fn gates(build: bool, licensed: bool) -> FeatureGates {
        FeatureGates {
            build_enterprise_ready: build,
            is_licensed: licensed,
        }
    }

    #[test]
    fn test_acme_users_page() {
        let mut state = ConsoleState::new(["t1"].into_iter().collect());
        state.apply(SidebarMsg::SelectTab(NavTarget::new(Section::TeamUsers, Some("t1"))));
        let teams = acme_directory();

        let model = SidebarModel::build(&state, Some(&teams), gates(false, false));

        assert_eq!(model.team_count, "1");
        let TeamsBlock::Teams(submenus) = &model.teams else {
            panic!("directory is loaded");
        };
        assert_eq!(submenus.len(), 1);
        let acme = &submenus[0];
        assert_eq!(acme.name, "Acme");
        assert!(acme.users.is_active());
        assert!(!acme.statistics.is_active());
        assert_eq!(acme.header_class, "nav__sub-menu-item active");
        assert_eq!(acme.users.label, "- Users");
        assert_eq!(acme.statistics.label, "- Statistics");
        assert!(model.settings.iter().all(|e| !e.is_active()));
    }

    #[test]
    fn test_no_enterprise_build_hides_ldap_and_license() {
        let state = ConsoleState::default();
        for licensed in [false, true] {
            let model = SidebarModel::build(&state, None, gates(false, licensed));
            assert!(!model.contains(Section::LdapSettings));
            assert!(!model.contains(Section::License));
            assert!(model.contains(Section::Logs));
        }
    }

    #[test]
    fn test_enterprise_build_without_license() {
        let model = SidebarModel::build(&ConsoleState::default(), None, gates(true, false));
        assert!(model.contains(Section::License));
        assert!(!model.contains(Section::LdapSettings));
    }

    #[test]
    fn test_enterprise_build_with_license() {
        let model = SidebarModel::build(&ConsoleState::default(), None, gates(true, true));
        assert!(model.contains(Section::License));
        assert!(model.contains(Section::LdapSettings));
        assert_eq!(model.other[0].target.section, Section::License);
    }

    #[test]
    fn test_team_submenu_uses_display_name() {
        let state = ConsoleState::new(["t1", "t2"].into_iter().collect());
        let mut teams = acme_directory();
        let mut beta = Team::new("t2", "beta");
        beta.display_name = "Beta Team".into();
        teams.insert("t2".into(), beta);

        let model = SidebarModel::build(&state, Some(&teams), gates(false, false));

        let TeamsBlock::Teams(submenus) = &model.teams else {
            panic!("directory is loaded");
        };
        let names: Vec<&str> = submenus.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Acme", "Beta Team"]);
    }

    #[test]
    fn test_loading_directory() {
        let state = ConsoleState::new(["t1"].into_iter().collect());
        let model = SidebarModel::build(&state, None, gates(false, false));
        assert_eq!(model.team_count, "*");
        assert_eq!(model.teams, TeamsBlock::Loading);
    }

    #[test]
    fn test_stale_selected_team_is_skipped() {
        let state = ConsoleState::new(["gone", "t1"].into_iter().collect());
        let teams = acme_directory();

        let model = SidebarModel::build(&state, Some(&teams), gates(false, false));

        let TeamsBlock::Teams(submenus) = &model.teams else {
            panic!("directory is loaded");
        };
        assert_eq!(submenus.len(), 1);
        assert_eq!(submenus[0].team_id, "t1");
        assert!(state.selected_teams.contains("gone"));
    }

    #[test]
    fn test_plain_section_active_class() {
        let mut state = ConsoleState::default();
        state.apply(SidebarMsg::SelectTab(NavTarget::new(Section::EmailSettings, None)));

        let model = SidebarModel::build(&state, None, gates(false, false));

        let active: Vec<Section> = model
            .settings
            .iter()
            .filter(|e| e.is_active())
            .map(|e| e.target.section)
            .collect();
        assert_eq!(active, vec![Section::EmailSettings]);
    }
}
