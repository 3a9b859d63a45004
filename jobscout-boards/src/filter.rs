//! Client-side filters shared by every board.
//!
//! The APIs we talk to have uneven server-side filtering, so recency and
//! location are always re-checked here against the caller's request.
use chrono::{DateTime, Duration, Utc};

/// Whether `posted_at` falls within the last `days` days of `now`.
///
/// The boundary is inclusive: a posting exactly `days` days old is kept.
/// `days = None` disables the filter entirely.
pub fn within_days(posted_at: DateTime<Utc>, days: Option<u32>, now: DateTime<Utc>) -> bool {
    match days {
        None => true,
        Some(days) => posted_at >= now - Duration::days(i64::from(days)),
    }
}

/// Case-insensitive substring match of the wanted location against a job's
/// location string. No wanted location means everything matches.
pub fn location_matches(wanted: Option<&str>, have: &str) -> bool {
    match wanted {
        None => true,
        Some(wanted) => have.to_lowercase().contains(&wanted.to_lowercase()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 23, 12, 0, 0).unwrap()
    }

    #[test]
    fn recent_posting_is_kept() {
        let posted = now() - Duration::days(2);
        assert!(within_days(posted, Some(7), now()));
    }

    #[test]
    fn old_posting_is_dropped() {
        let posted = now() - Duration::days(8);
        assert!(!within_days(posted, Some(7), now()));
    }

    #[test]
    fn boundary_at_exactly_n_days_is_inclusive() {
        let posted = now() - Duration::days(7);
        assert!(within_days(posted, Some(7), now()));
        // One second past the window falls out.
        assert!(!within_days(posted - Duration::seconds(1), Some(7), now()));
    }

    #[test]
    fn none_disables_recency_filtering() {
        let ancient = now() - Duration::days(3650);
        assert!(within_days(ancient, None, now()));
    }

    #[test]
    fn location_substring_is_case_insensitive() {
        assert!(location_matches(Some("new york"), "New York, NY"));
        assert!(location_matches(Some("NY"), "Albany, ny"));
        assert!(!location_matches(Some("Boston"), "New York, NY"));
    }

    #[test]
    fn missing_location_filter_matches_everything() {
        assert!(location_matches(None, "Anywhere"));
        assert!(location_matches(None, ""));
    }
}
