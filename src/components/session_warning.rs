use chrono::{DateTime, Utc};
use yew::prelude::*;

use crate::hooks::use_session::use_session_status;

#[derive(Properties, PartialEq)]
pub struct SessionWarningProps {
    pub expires_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// Banner shown when the session is about to expire or has expired.
#[function_component(SessionWarning)]
pub fn session_warning(props: &SessionWarningProps) -> Html {
    let status = use_session_status(props.expires_at, props.created_at);

    match status {
        Some(status) if status.is_expired => html! {
            <div class="session-warning expired">
                <p>{"Your session has expired. Please sign in again."}</p>
            </div>
        },
        Some(status) if status.is_expiring_soon => html! {
            <div class="session-warning">
                <p>{format!("Your session expires in {} minute(s).", status.time_remaining)}</p>
            </div>
        },
        _ => html! {},
    }
}
