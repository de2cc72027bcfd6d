//! Admin console sidebar: settings pages, per-team submenus and the
//! optional enterprise entries.

use contracts::system::client_config::{ClientConfig, FeatureGates};
use contracts::system::teams::TeamDirectory;
use leptos::ev::MouseEvent;
use leptos::html::Div;
use leptos::prelude::*;

use super::select_team_modal::SelectTeamModal;
use super::sidebar_header::AdminSidebarHeader;
use crate::admin_console::menu::{MenuEntry, TeamSubmenu, TeamsBlock};
use crate::admin_console::{ConsoleState, NavTarget, SidebarModel, SidebarMsg, TeamSelectGate};
use crate::shared::history;
use crate::shared::icons::icon;

/// Below this viewport width the native scrollbar is kept.
const SCROLLBAR_MIN_WIDTH: f64 = 768.0;

#[component]
pub fn AdminSidebar(
    #[prop(into)] state: Signal<ConsoleState>,
    #[prop(into)] teams: Signal<Option<TeamDirectory>>,
    config: ClientConfig,
    gates: FeatureGates,
    /// Receives every selection and team change.
    on_msg: Callback<SidebarMsg>,
) -> impl IntoView {
    let gate = RwSignal::new(TeamSelectGate::default());

    let model = Memo::new(move |_| {
        state.with(|state| teams.with(|teams| SidebarModel::build(state, teams.as_ref(), gates)))
    });

    // Select the page first, then record where we are.
    let navigate = move |target: NavTarget| {
        on_msg.run(SidebarMsg::SelectTab(target.clone()));
        history::record_location(&target);
    };

    let show_team_select = move |ev: MouseEvent| {
        ev.prevent_default();
        gate.update(|g| g.show());
    };

    let on_team_chosen = Callback::new(move |team_id: String| {
        let mut chosen = None;
        gate.update(|g| chosen = g.choose(&team_id));
        if let Some(team_id) = chosen {
            on_msg.run(SidebarMsg::AddTeam(team_id));
        }
    });

    let on_team_select_dismissed = Callback::new(move |_: ()| {
        gate.update(|g| g.dismiss());
    });

    let container_ref = NodeRef::<Div>::new();

    // One-time scrollbar enhancement after the first render.
    Effect::new(move |applied: Option<bool>| {
        if applied == Some(true) {
            return true;
        }
        let Some(container) = container_ref.get() else {
            return false;
        };
        let wide = web_sys::window()
            .and_then(|w| w.inner_width().ok())
            .and_then(|w| w.as_f64())
            .map(|w| w > SCROLLBAR_MIN_WIDTH)
            .unwrap_or(false);
        if wide {
            if let Err(err) = container.class_list().add_1("nav-pills__container--scrollable") {
                log::warn!("failed to enable sidebar scrollbar: {:?}", err);
            }
        }
        true
    });

    view! {
        <div>
            <AdminSidebarHeader config=config />
            <div class="nav-pills__container" node_ref=container_ref>
                <ul class="nav nav-pills nav-stacked">
                    <li>
                        <ul class="nav nav__sub-menu">
                            <li>
                                <h4>
                                    <span class="icon">{icon("settings")}</span>
                                    <span>"SETTINGS"</span>
                                </h4>
                            </li>
                        </ul>
                        <ul class="nav nav__sub-menu padded">
                            {move || {
                                model
                                    .get()
                                    .settings
                                    .into_iter()
                                    .map(|entry| view! { <li>{entry_link(entry, navigate)}</li> })
                                    .collect_view()
                            }}
                        </ul>

                        <ul class="nav nav__sub-menu">
                            <li>
                                <h4>
                                    <span class="icon">{icon("users")}</span>
                                    <span>{move || format!("TEAMS ({})", model.get().team_count)}</span>
                                    <span class="menu-icon--right">
                                        <a href="#" title="Add team from sidebar menu" on:click=show_team_select>
                                            {icon("plus")}
                                        </a>
                                    </span>
                                </h4>
                            </li>
                        </ul>
                        <ul class="nav nav__sub-menu padded">
                            <li>
                                {move || match model.get().teams {
                                    TeamsBlock::Loading => view! { "Loading" }.into_any(),
                                    TeamsBlock::Teams(submenus) => submenus
                                        .into_iter()
                                        .map(|submenu| team_submenu(submenu, navigate, on_msg))
                                        .collect_view()
                                        .into_any(),
                                }}
                            </li>
                        </ul>

                        <ul class="nav nav__sub-menu">
                            <li>
                                <h4>
                                    <span class="icon">{icon("file-text")}</span>
                                    <span>"OTHER"</span>
                                </h4>
                            </li>
                        </ul>
                        <ul class="nav nav__sub-menu padded">
                            {move || {
                                model
                                    .get()
                                    .other
                                    .into_iter()
                                    .map(|entry| view! { <li>{entry_link(entry, navigate)}</li> })
                                    .collect_view()
                            }}
                        </ul>
                    </li>
                </ul>
            </div>

            <SelectTeamModal
                teams=teams
                show=Signal::derive(move || gate.get().is_open())
                on_submit=on_team_chosen
                on_dismiss=on_team_select_dismissed
            />
        </div>
    }
}

fn entry_link<N>(entry: MenuEntry, navigate: N) -> impl IntoView
where
    N: Fn(NavTarget) + Copy + Send + Sync + 'static,
{
    let current = entry.is_active().then_some("page");
    let MenuEntry {
        target,
        label,
        class,
    } = entry;

    view! {
        <a
            href="#"
            class=class
            aria-current=current
            on:click=move |ev: MouseEvent| {
                ev.prevent_default();
                navigate(target.clone());
            }
        >
            {label}
        </a>
    }
}

fn team_submenu<N>(submenu: TeamSubmenu, navigate: N, on_msg: Callback<SidebarMsg>) -> impl IntoView
where
    N: Fn(NavTarget) + Copy + Send + Sync + 'static,
{
    let TeamSubmenu {
        team_id,
        name,
        header_class,
        users,
        statistics,
    } = submenu;
    let header_target = users.target.clone();

    view! {
        <ul class="nav nav__sub-menu">
            <li>
                <a
                    href="#"
                    class=header_class
                    on:click=move |ev: MouseEvent| {
                        ev.prevent_default();
                        navigate(header_target.clone());
                    }
                >
                    {name}
                    <span
                        class="menu-icon--right menu__close"
                        title="Remove team from sidebar menu"
                        style="cursor: pointer;"
                        on:click=move |ev: MouseEvent| {
                            ev.prevent_default();
                            // the enclosing link would navigate to the removed team
                            ev.stop_propagation();
                            on_msg.run(SidebarMsg::RemoveTeam(team_id.clone()));
                        }
                    >
                        "×"
                    </span>
                </a>
            </li>
            <li>
                <ul class="nav nav__inner-menu">
                    <li>{entry_link(users, navigate)}</li>
                    <li>{entry_link(statistics, navigate)}</li>
                </ul>
            </li>
        </ul>
    }
}
