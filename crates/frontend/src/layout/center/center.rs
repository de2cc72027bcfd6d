use crate::layout::global_context::AdminConsoleContext;
use leptos::prelude::*;

#[component]
pub fn Center(children: Children) -> impl IntoView {
    let ctx = leptos::context::use_context::<AdminConsoleContext>()
        .expect("AdminConsoleContext context not found");

    view! {
        <div
            data-zone="center"
            class="admin-console__center"
            class:admin-console__center--wide=move || !ctx.left_open.get()
            style="flex: 1; overflow: auto;"
        >
            {children()}
        </div>
    }
}
