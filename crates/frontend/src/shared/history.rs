//! Thin wrappers over `window.location` / `window.history`.
//!
//! Browser failures are logged and swallowed: a missing history entry never
//! blocks navigation inside the console.

use wasm_bindgen::JsValue;
use web_sys::window;

use crate::admin_console::location::{self, LocationEntry};
use crate::admin_console::NavTarget;

pub fn current_pathname() -> String {
    window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_default()
}

pub fn current_search() -> String {
    window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

/// Pushes one history entry for `target`, carrying over the
/// `session_token_index` of the current URL.
pub fn record_location(target: &NavTarget) {
    write_location(target, false);
}

/// Rewrites the current history entry to `target` without adding one.
pub fn replace_location(target: &NavTarget) {
    write_location(target, true);
}

fn write_location(target: &NavTarget, replace: bool) {
    let entry = LocationEntry::for_target(
        target.clone(),
        location::session_token_index(&current_search()),
    );
    let url = entry.url();
    let state = JsValue::from_str(&entry.state_json());

    match window().map(|w| w.history()) {
        Some(Ok(history)) => {
            let result = if replace {
                history.replace_state_with_url(&state, "", Some(&url))
            } else {
                history.push_state_with_url(&state, "", Some(&url))
            };
            if let Err(err) = result {
                log::warn!("history update failed for {}: {:?}", url, err);
            }
        }
        Some(Err(err)) => log::warn!("history unavailable: {:?}", err),
        None => log::warn!("no window, location {} not recorded", url),
    }
}

/// Reads the `NavTarget` stored by `record_location` back from a popstate
/// event state, if it is one of ours.
pub fn target_from_state(state: &JsValue) -> Option<NavTarget> {
    state
        .as_string()
        .and_then(|json| serde_json::from_str(&json).ok())
}
