/// Configuration constants for the application
pub struct Config;

impl Config {
    /// Enable automatic data refresh polling
    pub const ENABLE_AUTO_REFRESH: bool = true;

    /// Default polling interval in milliseconds (30 seconds)
    pub const POLLING_INTERVAL_MS: u32 = 30_000;

    /// Default number of automatic retries after a failed fetch
    pub const MAX_RETRIES: u32 = 3;

    /// Default delay before each automatic retry in milliseconds
    pub const RETRY_DELAY_MS: u32 = 2_000;

    /// Smallest interval or delay a source will arm a timer with
    pub const MIN_TIMER_MS: u32 = 1;

    /// Dashboard statistics refresh interval (30 seconds)
    pub const DASHBOARD_STATS_INTERVAL_MS: u32 = 30_000;

    /// Exam list refresh interval (15 seconds, exams may still be processing)
    pub const EXAM_LIST_INTERVAL_MS: u32 = 15_000;

    /// Number of exams shown in the recent exams list
    pub const EXAM_LIST_DEFAULT_LIMIT: usize = 10;
    /// Largest page the exams endpoint accepts
    pub const EXAM_LIST_MAX_LIMIT: usize = 50;

    /// localStorage key for the persisted part of the app store
    pub const STORE_KEY: &'static str = "qimma-store";

    /// Session lifetime assumed when the identity provider reports no expiry
    pub const SESSION_FALLBACK_MINUTES: i64 = 60;

    /// Sessions closer than this to expiry show a warning
    pub const SESSION_WARNING_MINUTES: i64 = 5;

    /// Average credits consumed by grading one exam
    pub const AVERAGE_CREDITS_PER_EXAM: f64 = 3.5;

    /// Emit debug-level logs
    pub const DEBUG_LOGGING: bool = cfg!(debug_assertions);
}
