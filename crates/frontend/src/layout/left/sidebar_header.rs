use contracts::system::client_config::ClientConfig;
use leptos::prelude::*;

/// Title block on top of the admin sidebar.
#[component]
pub fn AdminSidebarHeader(config: ClientConfig) -> impl IntoView {
    let site_name = if config.site_name.is_empty() {
        "System Console".to_string()
    } else {
        format!("{} System Console", config.site_name)
    };
    let version = (!config.version.is_empty()).then(|| {
        let build = if config.build_number.is_empty() {
            String::new()
        } else {
            format!(" ({})", config.build_number)
        };
        format!("v{}{}", config.version, build)
    });

    view! {
        <div class="team__header theme">
            <span class="team__name">{site_name}</span>
            {version.map(|v| view! { <span class="team__version">{v}</span> })}
        </div>
    }
}
