//! Bookkeeping for the per-team submenus.

pub use contracts::system::teams::SelectedTeams;

use super::section::Section;
use super::state::{NavState, NavTarget};

/// Marks `team_id` as having a submenu. Navigation is not touched.
pub fn add_team(selected: &mut SelectedTeams, team_id: &str) -> bool {
    selected.insert(team_id)
}

/// Unmarks `team_id` and returns the navigation fallback when the removed
/// team was backing the current `team_users` page.
///
/// The set is updated before the fallback is evaluated.
pub fn remove_team(
    selected: &mut SelectedTeams,
    nav: &NavState,
    team_id: &str,
) -> Option<NavTarget> {
    selected.remove(team_id);

    let backs_current_users_page =
        nav.section == Some(Section::TeamUsers) && nav.team.as_deref() == Some(team_id);
    backs_current_users_page.then(NavTarget::fallback)
}
