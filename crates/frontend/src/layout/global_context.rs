use contracts::system::bootstrap::ConsoleBootstrap;
use contracts::system::client_config::{ClientConfig, FeatureGates};
use contracts::system::teams::TeamDirectory;
use leptos::logging::log;
use leptos::prelude::*;

use crate::admin_console::location::parse_location;
use crate::admin_console::{ConsoleState, NavTarget, SidebarMsg};
use crate::shared::history;

/// Console controller: the single owner of navigation and team submenus.
///
/// The sidebar never mutates this state directly; it sends `SidebarMsg`s
/// through `dispatch`.
#[derive(Clone, Copy)]
pub struct AdminConsoleContext {
    pub state: RwSignal<ConsoleState>,
    pub teams: RwSignal<Option<TeamDirectory>>,
    pub config: StoredValue<ClientConfig>,
    pub gates: FeatureGates,
    pub left_open: RwSignal<bool>,
}

impl AdminConsoleContext {
    pub fn new(bootstrap: ConsoleBootstrap) -> Self {
        let gates = bootstrap.feature_gates();
        Self {
            state: RwSignal::new(ConsoleState::new(bootstrap.selected_teams)),
            teams: RwSignal::new(bootstrap.teams),
            config: StoredValue::new(bootstrap.config),
            gates,
            left_open: RwSignal::new(true),
        }
    }

    /// Applies a sidebar message in one update, so a removal and its
    /// navigation fallback reach the view together.
    ///
    /// A removal fallback replaces the current URL, so reloading does not
    /// bring the removed team back.
    pub fn dispatch(&self, msg: SidebarMsg) {
        log!("🔷 dispatch: {:?}", msg);
        let replace = msg.replaces_location();
        let mut moved = None;
        self.state.update(|state| moved = state.apply(msg));
        if let Some(target) = moved {
            log!("➡️ page: {} team: {:?}", target.section, target.team);
            if replace {
                history::replace_location(&target);
            }
        }
    }

    pub fn team_name(&self, team_id: &str) -> Option<String> {
        self.teams.with(|teams| {
            teams
                .as_ref()
                .and_then(|teams| teams.get(team_id))
                .map(|team| team.label().to_string())
        })
    }

    /// Opens the page named by the current URL and follows back/forward
    /// navigation afterwards. Runs once when the layout is created.
    pub fn init_router_integration(&self) {
        let pathname = history::current_pathname();
        let target = match parse_location(&pathname) {
            Ok(target) => target,
            Err(err) => {
                log::warn!("{}; opening {}", err, NavTarget::fallback().section);
                NavTarget::fallback()
            }
        };
        self.state.update(|state| state.restore(&target));

        let this = *self;
        let _ = window_event_listener(leptos::ev::popstate, move |ev: web_sys::PopStateEvent| {
            let target = history::target_from_state(&ev.state())
                .or_else(|| parse_location(&history::current_pathname()).ok());
            match target {
                Some(target) => {
                    log!("🔶 popstate: {} team: {:?}", target.section, target.team);
                    this.state.update(|state| state.restore(&target));
                }
                None => log::warn!("popstate without a console location, ignored"),
            }
        });
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}
