use chrono::{DateTime, Utc};

/// Observable state of a polling source.
///
/// `loading` and `is_refreshing` are never both true: the first marks a
/// fetch with nothing to show yet, the second a fetch behind existing data.
#[derive(Clone, Debug, PartialEq)]
pub struct PollingState<T> {
    /// Last successfully fetched value.
    pub data: Option<T>,
    pub loading: bool,
    pub is_refreshing: bool,
    /// Message from the most recent failed attempt.
    pub error: Option<String>,
    /// Time of the most recent successful fetch.
    pub last_updated: Option<DateTime<Utc>>,
    /// Consecutive failures since the last success.
    pub retry_count: u32,
}

impl<T> Default for PollingState<T> {
    fn default() -> Self {
        Self {
            data: None,
            loading: true,
            is_refreshing: false,
            error: None,
            last_updated: None,
            retry_count: 0,
        }
    }
}

impl<T> PollingState<T> {
    /// Returns true once a value has been fetched
    pub fn has_data(&self) -> bool {
        self.data.is_some()
    }

    /// Returns true when no fetch is running
    pub fn is_idle(&self) -> bool {
        !self.loading && !self.is_refreshing
    }

    pub(crate) fn begin_fetch(&mut self, is_refresh: bool) {
        self.loading = !is_refresh;
        self.is_refreshing = is_refresh;
        self.error = None;
    }

    pub(crate) fn record_success(&mut self, data: T, now: DateTime<Utc>) {
        self.data = Some(data);
        self.loading = false;
        self.is_refreshing = false;
        self.error = None;
        self.last_updated = Some(now);
        self.retry_count = 0;
    }

    pub(crate) fn record_failure(&mut self, message: String) {
        self.retry_count = self.retry_count.saturating_add(1);
        self.loading = false;
        self.is_refreshing = false;
        self.error = Some(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = PollingState::<u32>::default();
        assert!(state.loading);
        assert!(!state.is_refreshing);
        assert!(!state.has_data());
        assert_eq!(state.error, None);
        assert_eq!(state.last_updated, None);
        assert_eq!(state.retry_count, 0);
    }

    #[test]
    fn test_failure_keeps_previous_data() {
        let mut state = PollingState::default();
        state.record_success(7, Utc::now());
        state.begin_fetch(true);
        state.record_failure("boom".to_string());

        assert_eq!(state.data, Some(7));
        assert_eq!(state.error.as_deref(), Some("boom"));
        assert_eq!(state.retry_count, 1);
        assert!(state.is_idle());
    }

    #[test]
    fn test_begin_fetch_clears_error() {
        let mut state = PollingState::<u32>::default();
        state.record_failure("boom".to_string());
        state.begin_fetch(false);

        assert!(state.loading);
        assert_eq!(state.error, None);
        assert_eq!(state.retry_count, 1);
    }

    #[test]
    fn test_success_resets_retry_count() {
        let mut state = PollingState::default();
        state.record_failure("first".to_string());
        state.record_failure("second".to_string());
        state.record_success("ok", Utc::now());

        assert_eq!(state.retry_count, 0);
        assert!(state.last_updated.is_some());
        assert_eq!(state.error, None);
    }
}
