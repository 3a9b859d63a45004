//! Common types shared across Jobscout crates.
//!
//! This crate defines the [`JobListing`] record that every board client
//! produces and every exporter consumes, plus the [`observability`] helpers
//! used to initialise tracing. It is intentionally lightweight so that all
//! crates can depend on it without heavy transitive costs.
//!
//! # Examples
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use jobscout_common::JobListing;
//!
//! let listing = JobListing {
//!     title: "Backend Engineer".into(),
//!     company: "Acme".into(),
//!     location: "Philadelphia, PA".into(),
//!     posted_at: Utc.with_ymd_and_hms(2026, 8, 20, 12, 0, 0).unwrap(),
//!     description: String::new(),
//!     url: "https://example.com/jobs/1".into(),
//! };
//! assert_eq!(listing.posted_day(), "2026-08-20");
//! ```
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub mod observability;

/// A single job posting as normalised from a board's API response.
///
/// Listings are created by a board client, filtered, then printed or
/// serialised. There is no persistence: both JSON and CSV exports carry every
/// field, so exporting and re-reading yields an equivalent record set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobListing {
    pub title: String,
    pub company: String,
    pub location: String,
    /// Publication timestamp. Records whose date cannot be parsed are
    /// dropped by the board clients rather than surfaced with a bogus date.
    pub posted_at: DateTime<Utc>,
    /// Plain-text description snippet, HTML already stripped.
    pub description: String,
    pub url: String,
}

impl JobListing {
    /// Publication date rendered as `YYYY-MM-DD` for table output.
    pub fn posted_day(&self) -> String {
        self.posted_at.format("%Y-%m-%d").to_string()
    }
}

/// Sort listings newest-first, the order every output format uses.
pub fn sort_newest_first(listings: &mut [JobListing]) {
    listings.sort_by(|a, b| b.posted_at.cmp(&a.posted_at));
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn listing(title: &str, day: u32) -> JobListing {
        JobListing {
            title: title.into(),
            company: "Acme".into(),
            location: "Remote".into(),
            posted_at: Utc.with_ymd_and_hms(2026, 8, day, 9, 30, 0).unwrap(),
            description: String::new(),
            url: format!("https://example.com/{title}"),
        }
    }

    #[test]
    fn sorts_newest_first() {
        let mut jobs = vec![listing("old", 1), listing("new", 20), listing("mid", 10)];
        sort_newest_first(&mut jobs);
        let titles: Vec<_> = jobs.iter().map(|j| j.title.as_str()).collect();
        assert_eq!(titles, ["new", "mid", "old"]);
    }

    #[test]
    fn posted_day_formats_date_only() {
        assert_eq!(listing("x", 5).posted_day(), "2026-08-05");
    }
}
