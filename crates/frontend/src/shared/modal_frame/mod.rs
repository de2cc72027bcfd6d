use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Overlay plus centered surface for dialogs.
///
/// Renders no header or buttons of its own; the dialog brings them.
#[component]
pub fn ModalFrame(
    /// Called on overlay click.
    on_close: Callback<()>,
    /// Extra class for the surface (`div.modal`).
    #[prop(optional, into)]
    modal_class: Option<String>,
    children: Children,
) -> impl IntoView {
    let pressed_on_overlay = RwSignal::new(false);

    let is_overlay_target = |ev: &ev::MouseEvent| match (ev.target(), ev.current_target()) {
        (Some(target), Some(current)) => target == current,
        _ => false,
    };

    // Press and release both have to land on the overlay, so a text
    // selection dragged out of the dialog does not close it.
    let on_overlay_mouse_down = move |ev: ev::MouseEvent| {
        pressed_on_overlay.set(is_overlay_target(&ev));
    };

    let on_overlay_click = move |ev: ev::MouseEvent| {
        let should_close = pressed_on_overlay.get_untracked() && is_overlay_target(&ev);
        pressed_on_overlay.set(false);
        if should_close {
            // next tick: the overlay is unmounted by this very close
            spawn_local(async move {
                TimeoutFuture::new(0).await;
                on_close.run(());
            });
        }
    };

    let surface_class = match modal_class {
        Some(extra) => format!("modal {extra}"),
        None => "modal".to_string(),
    };

    view! {
        <div
            class="modal-overlay"
            on:mousedown=on_overlay_mouse_down
            on:click=on_overlay_click
        >
            <div class=surface_class on:click=|ev: ev::MouseEvent| ev.stop_propagation()>
                {children()}
            </div>
        </div>
    }
}
