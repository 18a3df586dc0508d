pub mod dashboard_api;
pub mod exam_api;
