use crate::layout::global_context::AdminConsoleContext;
use crate::routes::routes::AppRoutes;
use crate::shared::bootstrap::load_bootstrap;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Config, license and teams are read once and injected from here on.
    provide_context(AdminConsoleContext::new(load_bootstrap()));

    view! {
        <AppRoutes />
    }
}
