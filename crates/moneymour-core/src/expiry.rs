//! Expiry timestamps for the `Expires-at` header.
//!
//! The window is advisory: nothing here rejects a stale value.

use chrono::{DateTime, Duration, Utc};

use crate::types::ExpiresAt;

/// Seconds a freshly generated timestamp stays valid.
pub const EXPIRY_WINDOW_SECS: i64 = 60;

/// `now + 60s` as epoch seconds.
pub fn now_plus_window() -> ExpiresAt {
    expires_at_from(Utc::now())
}

/// `now + 60s` for an explicit instant. Times before the epoch clamp to 0.
pub fn expires_at_from(now: DateTime<Utc>) -> ExpiresAt {
    let expires = now + Duration::seconds(EXPIRY_WINDOW_SECS);
    ExpiresAt::from_epoch_seconds(u64::try_from(expires.timestamp()).unwrap_or(0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn adds_sixty_seconds() {
        let now = Utc.timestamp_opt(1_572_281_688, 0).unwrap();
        assert_eq!(expires_at_from(now).as_str(), "1572281748");
    }

    #[test]
    fn drops_fractional_seconds() {
        let now = Utc.timestamp_opt(1_572_281_688, 999_999_999).unwrap();
        assert_eq!(expires_at_from(now).as_str(), "1572281748");
    }

    #[test]
    fn now_plus_window_tracks_clock() {
        let before = Utc::now().timestamp() as u64;
        let value = now_plus_window().epoch_seconds().unwrap();
        let after = Utc::now().timestamp() as u64;
        assert!(value >= before + 60 && value <= after + 60, "got {value}");
    }

    #[test]
    fn never_decreases() {
        let mut last = now_plus_window().epoch_seconds().unwrap();
        for _ in 0..100 {
            let next = now_plus_window().epoch_seconds().unwrap();
            assert!(next >= last);
            last = next;
        }
    }
}
