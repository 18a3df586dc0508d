use chrono::{DateTime, Utc};
use yew::prelude::*;

use crate::utils::time::format_relative;

#[derive(Properties, PartialEq)]
pub struct RefreshIndicatorProps {
    pub is_refreshing: bool,
    pub last_updated: Option<DateTime<Utc>>,
    pub error: Option<String>,
    pub enabled: bool,
    pub on_refresh: Callback<()>,
    pub on_toggle: Callback<()>,
}

/// Live/paused badge with last update time and manual controls.
#[function_component(RefreshIndicator)]
pub fn refresh_indicator(props: &RefreshIndicatorProps) -> Html {
    let (live_class, live_icon, live_label) = if props.enabled {
        ("refresh-live enabled", "●", "Live")
    } else {
        ("refresh-live paused", "○", "Paused")
    };

    let on_refresh = {
        let on_refresh = props.on_refresh.clone();
        Callback::from(move |_| on_refresh.emit(()))
    };
    let on_toggle = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |_| on_toggle.emit(()))
    };

    let spinner_class = classes!("refresh-icon", props.is_refreshing.then_some("spinning"));
    let toggle_label = if props.enabled {
        "Pause live updates"
    } else {
        "Resume live updates"
    };

    html! {
        <div class="refresh-indicator">
            <span class={live_class}>
                <span class="refresh-live-icon">{live_icon}</span>
                {live_label}
            </span>

            if let Some(last_updated) = props.last_updated {
                <span class="refresh-updated">
                    {format!("Updated {}", format_relative(last_updated, Utc::now()))}
                </span>
            }

            if let Some(error) = &props.error {
                <span class="refresh-error" title={error.clone()}>{"Error"}</span>
            }

            <button
                class="refresh-button"
                onclick={on_refresh}
                disabled={props.is_refreshing}
                aria-label="Refresh now"
                title="Refresh now"
            >
                <span class={spinner_class}>{"⟳"}</span>
            </button>

            <button
                class="refresh-toggle"
                onclick={on_toggle}
                aria-label={toggle_label}
                title={toggle_label}
            >
                {if props.enabled { "⏸" } else { "▶" }}
            </button>
        </div>
    }
}
