use serde::{Deserialize, Serialize};

use super::membership::{self, SelectedTeams};
use super::section::Section;
use super::selection;

/// A navigation request: a page plus the team it is scoped to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavTarget {
    pub section: Section,
    #[serde(default)]
    pub team: Option<String>,
}

impl NavTarget {
    pub fn new(section: Section, team: Option<&str>) -> Self {
        Self {
            section,
            team: team.map(str::to_string),
        }
    }

    /// Where the console lands when nothing better is known.
    pub fn fallback() -> Self {
        Self::new(Section::ServiceSettings, None)
    }
}

/// Current page and team context.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavState {
    pub section: Option<Section>,
    pub team: Option<String>,
}

impl NavState {
    pub fn go_to(&mut self, target: &NavTarget) {
        self.section = Some(target.section);
        self.team = target.team.clone();
    }

    #[cfg(test)]
    pub fn is_active(&self, section: Section, team: Option<&str>) -> bool {
        selection::is_active(section, team, self.section, self.team.as_deref())
    }

    pub fn active_class(&self, section: Section, team: Option<&str>) -> &'static str {
        selection::active_class(section, team, self.section, self.team.as_deref())
    }
}

/// Requests the sidebar sends up to the console controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SidebarMsg {
    SelectTab(NavTarget),
    AddTeam(String),
    RemoveTeam(String),
}

impl SidebarMsg {
    /// A page change caused by this message rewrites the current history
    /// entry instead of adding one (the sidebar pushes its own clicks).
    pub fn replaces_location(&self) -> bool {
        matches!(self, SidebarMsg::RemoveTeam(_))
    }
}

/// State owned by the console controller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConsoleState {
    pub nav: NavState,
    pub selected_teams: SelectedTeams,
}

impl ConsoleState {
    pub fn new(selected_teams: SelectedTeams) -> Self {
        Self {
            nav: NavState::default(),
            selected_teams,
        }
    }

    /// Applies one sidebar message. Returns the page the console moved to,
    /// if the message changed it.
    pub fn apply(&mut self, msg: SidebarMsg) -> Option<NavTarget> {
        match msg {
            SidebarMsg::SelectTab(target) => {
                self.nav.go_to(&target);
                Some(target)
            }
            SidebarMsg::AddTeam(team_id) => {
                membership::add_team(&mut self.selected_teams, &team_id);
                None
            }
            SidebarMsg::RemoveTeam(team_id) => {
                if let Some(fallback) =
                    membership::remove_team(&mut self.selected_teams, &self.nav, &team_id)
                {
                    self.nav.go_to(&fallback);
                    return Some(fallback);
                }
                None
            }
        }
    }

    /// Moves to a location that is already in the history (deep link,
    /// back/forward). The team of a team-scoped page gets a submenu so the
    /// highlighted entry is visible.
    pub fn restore(&mut self, target: &NavTarget) {
        if target.section.is_team_scoped() {
            if let Some(team) = target.team.as_deref() {
                membership::add_team(&mut self.selected_teams, team);
            }
        }
        self.nav.go_to(target);
    }
}
