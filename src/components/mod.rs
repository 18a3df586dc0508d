pub mod credit_display;
pub mod dashboard_stats;
pub mod exam_list;
pub mod refresh_indicator;
pub mod session_warning;
pub mod status;
pub mod theme_toggle;

pub use credit_display::CreditDisplay;
pub use dashboard_stats::DashboardStats;
pub use exam_list::ExamList;
pub use refresh_indicator::RefreshIndicator;
pub use session_warning::SessionWarning;
pub use theme_toggle::ThemeToggle;
