//! The search capability every board client implements, plus the site
//! registry the CLI resolves `--site` against.
use async_trait::async_trait;
use jobscout_common::JobListing;
use jobscout_http::HttpError;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Parameters of a single search invocation.
#[derive(Debug, Clone)]
pub struct SearchRequest {
    /// Free-text keywords, e.g. "software engineer".
    pub query: String,
    /// Optional location filter, matched case-insensitively as a substring.
    pub location: Option<String>,
    /// Maximum posting age in days. `None` disables recency filtering.
    /// A listing posted exactly `days` days ago is kept.
    pub days: Option<u32>,
    /// Cap on the number of returned listings.
    pub max_results: Option<usize>,
}

#[derive(Debug, Error)]
pub enum BoardError {
    #[error(transparent)]
    Http(#[from] HttpError),
    #[error("{site} is not supported: {reason}")]
    Unsupported { site: Site, reason: &'static str },
}

/// A job board that can be queried for recent postings.
///
/// Implementations fetch from one site's public API, normalise records into
/// [`JobListing`], and apply the request's recency/location/cap rules before
/// returning. Boards are queried one at a time; nothing here is concurrent.
#[async_trait]
pub trait JobBoard: Send + Sync {
    fn site(&self) -> Site;

    async fn search(&self, req: &SearchRequest) -> Result<Vec<JobListing>, BoardError>;
}

/// Registry of recognised `--site` values.
///
/// `Indeed` and `Linkedin` are listed so the CLI can explain *why* they are
/// unavailable instead of claiming the site is unknown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Site {
    Themuse,
    Remotive,
    Indeed,
    Linkedin,
}

impl Site {
    pub const ALL: [Site; 4] = [Site::Themuse, Site::Remotive, Site::Indeed, Site::Linkedin];

    pub fn as_str(&self) -> &'static str {
        match self {
            Site::Themuse => "themuse",
            Site::Remotive => "remotive",
            Site::Indeed => "indeed",
            Site::Linkedin => "linkedin",
        }
    }

    /// Why this site has no working client, if it doesn't.
    pub fn unsupported_reason(&self) -> Option<&'static str> {
        match self {
            Site::Themuse | Site::Remotive => None,
            Site::Indeed => Some(
                "Indeed restricts automated access; use their official API or a licensed feed",
            ),
            Site::Linkedin => Some(
                "LinkedIn forbids scraping in its terms of service; use their official API",
            ),
        }
    }
}

impl fmt::Display for Site {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Site {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.to_ascii_lowercase();
        Site::ALL
            .into_iter()
            .find(|site| site.as_str() == lowered)
            .ok_or_else(|| {
                let known: Vec<&str> = Site::ALL.iter().map(|s| s.as_str()).collect();
                format!("unknown site '{s}'; available sites: {}", known.join(", "))
            })
    }
}
