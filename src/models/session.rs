use chrono::{DateTime, Duration, Utc};

use crate::config::Config;

/// Expiry status of the identity provider session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionStatus {
    pub expires_at: DateTime<Utc>,
    pub is_expired: bool,
    pub is_expiring_soon: bool,
    /// Whole minutes left, never negative.
    pub time_remaining: i64,
}

impl SessionStatus {
    /// Evaluates the session at `now`. Without a reported expiry the session
    /// is assumed to last one hour from `created_at`.
    pub fn evaluate(
        expires_at: Option<DateTime<Utc>>,
        created_at: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> Self {
        let expires_at = expires_at
            .unwrap_or_else(|| created_at + Duration::minutes(Config::SESSION_FALLBACK_MINUTES));
        let time_remaining = (expires_at - now).num_minutes().max(0);

        Self {
            expires_at,
            is_expired: expires_at <= now,
            is_expiring_soon: expires_at <= now + Duration::minutes(Config::SESSION_WARNING_MINUTES),
            time_remaining,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 10, 4, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_active_session() {
        let status = SessionStatus::evaluate(Some(now() + Duration::minutes(30)), now(), now());
        assert!(!status.is_expired);
        assert!(!status.is_expiring_soon);
        assert_eq!(status.time_remaining, 30);
    }

    #[test]
    fn test_expiring_soon() {
        let status = SessionStatus::evaluate(
            Some(now() + Duration::seconds(4 * 60 + 30)),
            now(),
            now(),
        );
        assert!(!status.is_expired);
        assert!(status.is_expiring_soon);
        assert_eq!(status.time_remaining, 4);
    }

    #[test]
    fn test_expired_session_clamps_remaining() {
        let status = SessionStatus::evaluate(Some(now() - Duration::minutes(2)), now(), now());
        assert!(status.is_expired);
        assert!(status.is_expiring_soon);
        assert_eq!(status.time_remaining, 0);
    }

    #[test]
    fn test_fallback_expiry_from_creation() {
        let created = now() - Duration::minutes(50);
        let status = SessionStatus::evaluate(None, created, now());
        assert_eq!(status.expires_at, now() + Duration::minutes(10));
        assert_eq!(status.time_remaining, 10);
        assert!(!status.is_expiring_soon);
    }
}
