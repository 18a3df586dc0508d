use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use tracing::debug;

use crate::models::{
    error::AppError,
    stats::{Activity, ActivityKind, DashboardStats},
};
use crate::polling::runtime;

/// Simulated round trip of the stats endpoint.
const STATS_LATENCY_MS: u32 = 1_000;

/// Fetches aggregate dashboard counters for `user_id`.
///
/// Backed by generated data until the stats endpoint exists; the delay
/// mimics a network round trip so the loading states are exercised.
pub async fn fetch_dashboard_stats(user_id: &str) -> Result<DashboardStats, AppError> {
    if user_id.trim().is_empty() {
        return Err(AppError::AuthError("Missing user id".to_string()));
    }

    runtime::sleep(STATS_LATENCY_MS).await;

    let stats = generate_dashboard_stats(&mut rand::thread_rng(), Utc::now());
    debug!(user_id, total_exams = stats.total_exams, "dashboard stats fetched");
    Ok(stats)
}

/// Builds a plausible set of dashboard counters.
pub fn generate_dashboard_stats<R: Rng>(rng: &mut R, now: DateTime<Utc>) -> DashboardStats {
    let total_exams: u32 = rng.gen_range(10..30);
    let completed_exams = rng.gen_range(5..20_u32).min(total_exams);
    let processing_exams = rng.gen_range(0..5_u32).min(total_exams - completed_exams);
    let error_exams = rng
        .gen_range(0..2_u32)
        .min(total_exams - completed_exams - processing_exams);

    DashboardStats {
        total_exams,
        completed_exams,
        processing_exams,
        error_exams,
        credits_remaining: rng.gen_range(50..150),
        average_score: Some(rng.gen_range(0.0..100.0)),
        recent_activity: generate_recent_activity(rng, now),
    }
}

fn generate_recent_activity<R: Rng>(rng: &mut R, now: DateTime<Utc>) -> Vec<Activity> {
    let kinds = [
        (ActivityKind::ExamCompleted, "Grading finished for"),
        (ActivityKind::ExamStarted, "Grading started for"),
        (ActivityKind::CreditUsed, "Credits used for"),
    ];
    let titles = ["Math Quiz #3", "Science Test", "History Assessment"];

    let mut activity: Vec<Activity> = (0..rng.gen_range(0..4))
        .map(|index| {
            let (kind, verb) = kinds[rng.gen_range(0..kinds.len())];
            let title = titles[rng.gen_range(0..titles.len())];
            Activity {
                id: format!("activity-{}", index + 1),
                kind,
                message: format!("{verb} {title}"),
                timestamp: now - Duration::minutes(rng.gen_range(1..24 * 60)),
            }
        })
        .collect();

    activity.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    activity
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_generated_counts_are_consistent() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let stats = generate_dashboard_stats(&mut rng, Utc::now());
            assert!(
                stats.completed_exams + stats.processing_exams + stats.error_exams
                    <= stats.total_exams
            );
            assert!((50..150).contains(&stats.credits_remaining));
            let score = stats.average_score.unwrap();
            assert!((0.0..100.0).contains(&score));
        }
    }

    #[test]
    fn test_recent_activity_newest_first() {
        let mut rng = StdRng::seed_from_u64(11);
        let now = Utc::now();
        for _ in 0..50 {
            let activity = generate_recent_activity(&mut rng, now);
            assert!(activity.len() < 4);
            assert!(activity.windows(2).all(|w| w[0].timestamp >= w[1].timestamp));
            assert!(activity.iter().all(|a| a.timestamp < now));
        }
    }
}
