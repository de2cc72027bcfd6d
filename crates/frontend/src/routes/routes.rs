use crate::admin_console::SidebarMsg;
use crate::layout::center::ConsolePage;
use crate::layout::global_context::AdminConsoleContext;
use crate::layout::left::AdminSidebar;
use crate::layout::Shell;
use leptos::prelude::*;

#[component]
fn MainLayout() -> impl IntoView {
    let ctx = leptos::context::use_context::<AdminConsoleContext>()
        .expect("AdminConsoleContext context not found");

    // Initialize router integration. This runs once when the component is created.
    ctx.init_router_integration();

    let on_msg = Callback::new(move |msg: SidebarMsg| ctx.dispatch(msg));

    view! {
        <Shell
            left=move || {
                view! {
                    <AdminSidebar
                        state=ctx.state
                        teams=ctx.teams
                        config=ctx.config.get_value()
                        gates=ctx.gates
                        on_msg=on_msg
                    />
                }
                .into_any()
            }
            center=|| view! { <ConsolePage /> }.into_any()
        />
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! { <MainLayout /> }
}
