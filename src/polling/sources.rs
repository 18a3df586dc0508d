use chrono::{DateTime, Utc};

use crate::config::Config;
use crate::models::error::AppError;
use crate::models::exam::ExamListItem;
use crate::models::session::SessionStatus;
use crate::models::stats::DashboardStats;
use crate::services::dashboard_api::fetch_dashboard_stats;
use crate::services::exam_api::fetch_exam_list;

use super::{PollingConfigUpdate, PollingDataSource};

/// Aggregate dashboard counters for one user, refreshed every 30 seconds.
pub struct DashboardStatsSource;

impl DashboardStatsSource {
    pub fn config() -> PollingConfigUpdate {
        PollingConfigUpdate::new()
            .interval_ms(Config::DASHBOARD_STATS_INTERVAL_MS)
            .enabled(true)
    }

    /// Builds an inactive source; the user id only parameterises the producer.
    pub fn create(user_id: impl Into<String>) -> PollingDataSource<DashboardStats> {
        let user_id: String = user_id.into();
        PollingDataSource::new(
            move || {
                let user_id = user_id.clone();
                async move { fetch_dashboard_stats(&user_id).await }
            },
            Self::config(),
        )
        .named("dashboard_stats")
    }
}

/// Most recent exams for one user, refreshed every 15 seconds since exams
/// may still be processing.
pub struct ExamListSource;

impl ExamListSource {
    pub fn config() -> PollingConfigUpdate {
        PollingConfigUpdate::new()
            .interval_ms(Config::EXAM_LIST_INTERVAL_MS)
            .enabled(true)
    }

    pub fn create(user_id: impl Into<String>, limit: usize) -> PollingDataSource<Vec<ExamListItem>> {
        let user_id: String = user_id.into();
        PollingDataSource::new(
            move || {
                let user_id = user_id.clone();
                async move { fetch_exam_list(&user_id, limit).await }
            },
            Self::config(),
        )
        .named("exam_list")
    }
}

/// Re-evaluates the identity provider session once a minute.
pub struct SessionWatchSource;

impl SessionWatchSource {
    pub const INTERVAL_MS: u32 = 60_000;

    pub fn create(
        expires_at: Option<DateTime<Utc>>,
        created_at: DateTime<Utc>,
    ) -> PollingDataSource<SessionStatus> {
        PollingDataSource::new(
            move || async move {
                Ok::<_, AppError>(SessionStatus::evaluate(expires_at, created_at, Utc::now()))
            },
            PollingConfigUpdate::new()
                .interval_ms(Self::INTERVAL_MS)
                .max_retries(0),
        )
        .named("session_watch")
    }
}
