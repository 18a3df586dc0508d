use yew::prelude::*;

use super::use_real_time_data::{RealTimeHandle, use_real_time_data};
use crate::models::stats::DashboardStats;
use crate::polling::sources::DashboardStatsSource;

/// Dashboard counters for `user_id`, polled every 30 seconds.
#[hook]
pub fn use_dashboard_stats(user_id: AttrValue) -> RealTimeHandle<DashboardStats> {
    use_real_time_data(user_id, |user_id| DashboardStatsSource::create(user_id.as_str()))
}
