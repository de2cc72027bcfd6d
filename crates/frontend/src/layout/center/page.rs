use leptos::prelude::*;

use crate::admin_console::NavState;
use crate::layout::global_context::AdminConsoleContext;

/// Heading of the page the console is on. Team-scoped pages are prefixed
/// with the team name, or the raw id while the directory is loading.
pub fn page_title(nav: &NavState, team_name: Option<&str>) -> String {
    let Some(section) = nav.section else {
        return String::new();
    };
    if !section.is_team_scoped() {
        return section.label().to_string();
    }
    match team_name.or(nav.team.as_deref()) {
        Some(team) => format!("{} {}", team, section.label()),
        None => section.label().to_string(),
    }
}

/// Page area. The settings forms themselves are mounted by the host page
/// into `#admin-console-page`, keyed by `data-section`.
#[component]
pub fn ConsolePage() -> impl IntoView {
    let ctx = leptos::context::use_context::<AdminConsoleContext>()
        .expect("AdminConsoleContext context not found");

    let title = move || {
        ctx.state.with(|state| {
            let team_name = state.nav.team.as_deref().and_then(|id| ctx.team_name(id));
            page_title(&state.nav, team_name.as_deref())
        })
    };
    let section_id = move || {
        ctx.state
            .with(|state| state.nav.section.map(|s| s.as_str()).unwrap_or_default())
    };
    let team_id = move || ctx.state.with(|state| state.nav.team.clone().unwrap_or_default());

    view! {
        <div class="admin-console__page">
            <div class="page__header">
                <button
                    class="button button--ghost"
                    aria-label="Toggle sidebar"
                    on:click=move |_| ctx.toggle_left()
                >
                    {"☰"}
                </button>
                <h3 class="page__title">{title}</h3>
            </div>
            <div id="admin-console-page" data-section=section_id data-team=team_id></div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::admin_console::Section;

    fn nav(section: Section, team: Option<&str>) -> NavState {
        NavState {
            section: Some(section),
            team: team.map(str::to_string),
        }
    }

    #[test]
    fn test_page_title() {
        assert_eq!(page_title(&NavState::default(), None), "");
        assert_eq!(page_title(&nav(Section::RateSettings, None), None), "Rate Limit Settings");
        assert_eq!(
            page_title(&nav(Section::TeamUsers, Some("t1")), Some("Acme")),
            "Acme Users"
        );
        assert_eq!(
            page_title(&nav(Section::TeamAnalytics, Some("t1")), None),
            "t1 Statistics"
        );
    }
}
