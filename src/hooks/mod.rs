pub mod use_dashboard_stats;
pub mod use_exam_list;
pub mod use_real_time_data;
pub mod use_session;
pub mod use_store;
pub mod use_theme;
