//! Initial console data embedded by the server.
//!
//! ```html
//! <script id="admin-console-bootstrap" type="application/json">{ ... }</script>
//! ```

use contracts::system::bootstrap::ConsoleBootstrap;
use web_sys::window;

pub const BOOTSTRAP_ELEMENT_ID: &str = "admin-console-bootstrap";

/// Reads the bootstrap document from the page. A missing or broken document
/// yields the empty bootstrap, which renders the loading state.
pub fn load_bootstrap() -> ConsoleBootstrap {
    let text = window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.get_element_by_id(BOOTSTRAP_ELEMENT_ID))
        .and_then(|el| el.text_content());

    match text {
        Some(text) => parse_or_default(&text),
        None => {
            log::warn!("#{} not found, starting without data", BOOTSTRAP_ELEMENT_ID);
            ConsoleBootstrap::default()
        }
    }
}

fn parse_or_default(text: &str) -> ConsoleBootstrap {
    match ConsoleBootstrap::from_json(text) {
        Ok(bootstrap) => {
            log::info!(
                "bootstrap: {} teams, {} selected",
                bootstrap.teams.as_ref().map(|t| t.len()).unwrap_or(0),
                bootstrap.selected_teams.len()
            );
            bootstrap
        }
        Err(err) => {
            log::error!("{:#}", err);
            ConsoleBootstrap::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_broken_bootstrap_falls_back_to_loading() {
        let bootstrap = parse_or_default("<html>");
        assert_eq!(bootstrap, ConsoleBootstrap::default());
        assert!(bootstrap.teams.is_none());
    }

    #[test]
    fn test_bootstrap_is_parsed() {
        let bootstrap = parse_or_default(
            r#"{"teams":{"t1":{"id":"t1","name":"Acme"}},"selected_teams":{"t1":"true"}}"#,
        );
        assert_eq!(bootstrap.teams.map(|t| t.len()), Some(1));
        assert!(bootstrap.selected_teams.contains("t1"));
    }
}
