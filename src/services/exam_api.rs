use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use tracing::debug;

use crate::config::Config;
use crate::models::{
    error::AppError,
    exam::{ExamListItem, ExamStatus},
};
use crate::polling::runtime;

// MOCK CATALOGUE
const TITLES: [&str; 10] = [
    "Mathematics Final Exam",
    "Physics Quiz Chapter 3",
    "English Literature Essay",
    "History Assessment - WWI",
    "Biology Lab Report",
    "Chemistry Midterm",
    "Spanish Vocabulary Test",
    "Geography Quiz",
    "Art History Essay",
    "Computer Science Project",
];
const SUBJECTS: [&str; 4] = ["math", "science", "language", "history"];
const GRADE_LEVELS: [&str; 3] = ["elementary", "middle", "high"];
const STATUSES: [ExamStatus; 4] = [
    ExamStatus::Completed,
    ExamStatus::Processing,
    ExamStatus::Draft,
    ExamStatus::Error,
];

/// Fetches the most recent exams of `user_id`, at most `limit` of them.
///
/// The endpoint rejects a `limit` outside `1..=EXAM_LIST_MAX_LIMIT`.
///
/// Generated data with a randomised 500-1500 ms delay until the exams
/// endpoint is wired up.
pub async fn fetch_exam_list(user_id: &str, limit: usize) -> Result<Vec<ExamListItem>, AppError> {
    if user_id.trim().is_empty() {
        return Err(AppError::AuthError("Missing user id".to_string()));
    }
    if !(1..=Config::EXAM_LIST_MAX_LIMIT).contains(&limit) {
        return Err(AppError::ApiError(format!(
            "limit must be between 1 and {}, got {limit}",
            Config::EXAM_LIST_MAX_LIMIT
        )));
    }

    let latency_ms = rand::thread_rng().gen_range(500..1_500);
    runtime::sleep(latency_ms).await;

    let exams = generate_exams(&mut rand::thread_rng(), Utc::now(), limit);
    debug!(user_id, count = exams.len(), "exam list fetched");
    Ok(exams)
}

/// Builds between 5 and 14 mock exams, truncated to `limit`.
pub fn generate_exams<R: Rng>(rng: &mut R, now: DateTime<Utc>, limit: usize) -> Vec<ExamListItem> {
    let count = rng.gen_range(5..15);

    (0..count)
        .map(|index| ExamListItem {
            id: format!("exam-{}", index + 1),
            title: TITLES[index % TITLES.len()].to_string(),
            subject: SUBJECTS[rng.gen_range(0..SUBJECTS.len())].to_string(),
            grade_level: GRADE_LEVELS[rng.gen_range(0..GRADE_LEVELS.len())].to_string(),
            status: STATUSES[rng.gen_range(0..STATUSES.len())],
            created_at: now - Duration::minutes(rng.gen_range(0..30 * 24 * 60)),
            submission_count: rng.gen_range(0..30),
            average_score: rng.gen_bool(0.7).then(|| rng.gen_range(0.0..100.0)),
            total_points: rng.gen_range(50..150),
        })
        .take(limit)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_generate_respects_limit() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..100 {
            assert!(generate_exams(&mut rng, Utc::now(), 3).len() <= 3);
        }
        assert!(generate_exams(&mut rng, Utc::now(), 0).is_empty());
    }

    #[tokio::test]
    async fn test_fetch_rejects_invalid_limit() {
        let error = fetch_exam_list("user_1", 0).await.unwrap_err();
        assert_eq!(error.to_string(), "API error: limit must be between 1 and 50, got 0");

        let error = fetch_exam_list("user_1", 51).await.unwrap_err();
        assert!(matches!(error, AppError::ApiError(_)));
    }

    #[tokio::test]
    async fn test_fetch_requires_user() {
        let error = fetch_exam_list(" ", 10).await.unwrap_err();
        assert!(matches!(error, AppError::AuthError(_)));
    }

    #[test]
    fn test_generated_exams_have_unique_ids() {
        let mut rng = StdRng::seed_from_u64(5);
        let exams = generate_exams(&mut rng, Utc::now(), 20);
        assert!((5..15).contains(&exams.len()));

        let mut ids: Vec<_> = exams.iter().map(|e| e.id.as_str()).collect();
        ids.dedup();
        assert_eq!(ids.len(), exams.len());
    }
}
