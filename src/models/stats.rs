use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    ExamCompleted,
    ExamStarted,
    CreditUsed,
}

impl ActivityKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            ActivityKind::ExamCompleted => "activity-completed",
            ActivityKind::ExamStarted => "activity-started",
            ActivityKind::CreditUsed => "activity-credit",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub id: String,
    pub kind: ActivityKind,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

/// Aggregate counters shown on the dashboard overview.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_exams: u32,
    pub completed_exams: u32,
    pub processing_exams: u32,
    pub error_exams: u32,
    pub credits_remaining: u32,
    pub average_score: Option<f64>,
    pub recent_activity: Vec<Activity>,
}

impl DashboardStats {
    /// Completed exams as a whole percentage of all exams.
    pub fn completion_rate(&self) -> u32 {
        let total = self.total_exams.max(1);
        (f64::from(self.completed_exams) / f64::from(total) * 100.0).round() as u32
    }

    pub fn has_processing_exams(&self) -> bool {
        self.processing_exams > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(total: u32, completed: u32, processing: u32) -> DashboardStats {
        DashboardStats {
            total_exams: total,
            completed_exams: completed,
            processing_exams: processing,
            error_exams: 0,
            credits_remaining: 80,
            average_score: Some(72.5),
            recent_activity: vec![],
        }
    }

    #[test]
    fn test_completion_rate_rounds() {
        assert_eq!(stats(3, 2, 0).completion_rate(), 67);
        assert_eq!(stats(20, 5, 0).completion_rate(), 25);
    }

    #[test]
    fn test_completion_rate_with_no_exams() {
        assert_eq!(stats(0, 0, 0).completion_rate(), 0);
    }

    #[test]
    fn test_processing_flag() {
        assert!(stats(10, 5, 1).has_processing_exams());
        assert!(!stats(10, 5, 0).has_processing_exams());
    }

    #[test]
    fn test_activity_kind_serializes_snake_case() {
        let json = serde_json::to_string(&ActivityKind::ExamCompleted).unwrap();
        assert_eq!(json, "\"exam_completed\"");
    }
}
