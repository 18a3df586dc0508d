use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::error::AppError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExamStatus {
    Draft,
    Processing,
    Completed,
    Error,
}

impl ExamStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ExamStatus::Draft => "Draft",
            ExamStatus::Processing => "Processing",
            ExamStatus::Completed => "Completed",
            ExamStatus::Error => "Error",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            ExamStatus::Draft => "exam-status-draft",
            ExamStatus::Processing => "exam-status-processing",
            ExamStatus::Completed => "exam-status-completed",
            ExamStatus::Error => "exam-status-error",
        }
    }
}

impl std::str::FromStr for ExamStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "draft" => Ok(ExamStatus::Draft),
            "processing" => Ok(ExamStatus::Processing),
            "completed" => Ok(ExamStatus::Completed),
            "error" => Ok(ExamStatus::Error),
            _ => Err(AppError::DataError(format!("Invalid exam status: {s}"))),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExamListItem {
    pub id: String,
    pub title: String,
    pub subject: String,
    pub grade_level: String,
    pub status: ExamStatus,
    pub created_at: DateTime<Utc>,
    pub submission_count: u32,
    pub average_score: Option<f64>,
    pub total_points: u32,
}

/// Number of exams still being graded.
pub fn processing_count(exams: &[ExamListItem]) -> usize {
    exams
        .iter()
        .filter(|exam| exam.status == ExamStatus::Processing)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exam(id: &str, status: ExamStatus) -> ExamListItem {
        ExamListItem {
            id: id.to_string(),
            title: "Chemistry Midterm".to_string(),
            subject: "science".to_string(),
            grade_level: "high".to_string(),
            status,
            created_at: Utc::now(),
            submission_count: 12,
            average_score: None,
            total_points: 100,
        }
    }

    #[test]
    fn test_processing_count() {
        let exams = vec![
            exam("exam-1", ExamStatus::Processing),
            exam("exam-2", ExamStatus::Completed),
            exam("exam-3", ExamStatus::Processing),
        ];
        assert_eq!(processing_count(&exams), 2);
        assert_eq!(processing_count(&[]), 0);
    }

    #[test]
    fn test_status_from_str() {
        assert_eq!("Completed".parse::<ExamStatus>().unwrap(), ExamStatus::Completed);
        assert!("archived".parse::<ExamStatus>().is_err());
    }

    #[test]
    fn test_exam_deserialization() {
        let json = r#"{
            "id": "exam-1",
            "title": "Geography Quiz",
            "subject": "history",
            "grade_level": "middle",
            "status": "processing",
            "created_at": "2025-10-04T00:00:00Z",
            "submission_count": 18,
            "average_score": 74.5,
            "total_points": 60
        }"#;

        let exam: ExamListItem = serde_json::from_str(json).unwrap();
        assert_eq!(exam.status, ExamStatus::Processing);
        assert_eq!(exam.average_score, Some(74.5));
    }
}
