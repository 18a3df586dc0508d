use chrono::{DateTime, Utc};
use yew::prelude::*;

use super::use_real_time_data::use_real_time_data;
use crate::models::session::SessionStatus;
use crate::polling::sources::SessionWatchSource;

/// Session expiry status, re-evaluated every minute.
#[hook]
pub fn use_session_status(
    expires_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
) -> Option<SessionStatus> {
    let handle = use_real_time_data((expires_at, created_at), |(expires_at, created_at)| {
        SessionWatchSource::create(*expires_at, *created_at)
    });
    handle.state.data
}
