use crate::layout::global_context::AdminConsoleContext;
use leptos::prelude::*;

#[component]
pub fn Left(children: Children) -> impl IntoView {
    let ctx = leptos::context::use_context::<AdminConsoleContext>()
        .expect("AdminConsoleContext context not found");
    let is_open = move || ctx.left_open.get();

    view! {
        <div data-zone="left" class="sidebar--left sidebar--collapsable" class:hidden=move || !is_open()>
            {children()}
        </div>
    }
}
