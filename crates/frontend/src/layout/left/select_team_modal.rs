use contracts::system::teams::{teams_by_name, TeamDirectory};
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance, Select};

use crate::shared::modal_frame::ModalFrame;

/// Dialog for picking a team whose submenu should be added to the sidebar.
#[component]
pub fn SelectTeamModal(
    #[prop(into)] teams: Signal<Option<TeamDirectory>>,
    #[prop(into)] show: Signal<bool>,
    /// Chosen team id.
    on_submit: Callback<String>,
    on_dismiss: Callback<()>,
) -> impl IntoView {
    let selected = RwSignal::new(String::new());

    let options = move || {
        teams.with(|teams| {
            teams
                .as_ref()
                .map(|teams| {
                    teams_by_name(teams)
                        .into_iter()
                        .map(|team| (team.id.clone(), team.label().to_string()))
                        .collect::<Vec<_>>()
                })
                .unwrap_or_default()
        })
    };

    let submit = move |_: leptos::ev::MouseEvent| {
        let team_id = selected.get_untracked();
        if team_id.is_empty() {
            return;
        }
        selected.set(String::new());
        on_submit.run(team_id);
    };

    let dismiss = move |_: leptos::ev::MouseEvent| {
        selected.set(String::new());
        on_dismiss.run(());
    };

    view! {
        <Show when=move || show.get()>
            <ModalFrame on_close=on_dismiss modal_class="select-team-modal">
                <div class="modal-header">
                    <h2 class="modal-title">"Select Team"</h2>
                </div>
                <div class="modal-body">
                    <Select value=selected>
                        <option value="">"-- Select a team --"</option>
                        <For
                            each=options
                            key=|(id, _)| id.clone()
                            children=move |(id, name): (String, String)| {
                                view! { <option value=id>{name}</option> }
                            }
                        />
                    </Select>
                </div>
                <div class="modal-footer">
                    <Button appearance=ButtonAppearance::Secondary on_click=dismiss>
                        "Cancel"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=submit
                        disabled=Signal::derive(move || selected.get().is_empty())
                    >
                        "Add"
                    </Button>
                </div>
            </ModalFrame>
        </Show>
    }
}
