//! Client for The Muse jobs API.
//!
//! Fetches page by page until the page count is exhausted, a page comes back
//! empty, or the request's result cap is reached. Recency and location are
//! re-checked client-side because the API's own location matching is loose.
use crate::board::{BoardError, JobBoard, SearchRequest, Site};
use crate::extract::{parse_publication_date, strip_html};
use crate::filter::{location_matches, within_days};
use crate::themuse::types::{MuseJob, MusePage};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use jobscout_common::JobListing;
use jobscout_http::{HttpClient, RequestOpts};
use std::borrow::Cow;
use std::time::Duration;

const SEARCH_PATH: &str = "api/public/jobs";

/// Location names that count as a match even when they don't contain the
/// wanted substring, so remote-friendly roles aren't hidden by a city filter.
const REMOTE_KEYWORDS: [&str; 2] = ["remote", "flexible"];

pub struct ThemuseClient {
    http: HttpClient,
    api_key: Option<String>,
}

impl ThemuseClient {
    pub fn new(endpoint: &str) -> Result<Self, BoardError> {
        let http = HttpClient::new(endpoint).map_err(BoardError::Http)?;
        Ok(Self {
            http,
            api_key: None,
        })
    }

    pub fn with_api_key(mut self, key: Option<String>) -> Self {
        self.api_key = key;
        self
    }

    pub fn with_timeout(mut self, dur: Duration) -> Self {
        self.http = self.http.with_timeout(dur);
        self
    }

    pub fn with_retries(mut self, n: usize) -> Self {
        self.http = self.http.with_retries(n);
        self
    }

    async fn fetch_page(&self, req: &SearchRequest, page: u32) -> Result<MusePage, BoardError> {
        let mut params: Vec<(&str, Cow<'_, str>)> = vec![("page", page.to_string().into())];
        if !req.query.is_empty() {
            params.push(("q", Cow::Borrowed(req.query.as_str())));
        }
        if let Some(location) = &req.location {
            params.push(("location", Cow::Borrowed(location.as_str())));
        }
        if let Some(key) = &self.api_key {
            params.push(("api_key", Cow::Borrowed(key.as_str())));
        }

        let page: MusePage = self
            .http
            .get_json(
                SEARCH_PATH,
                RequestOpts {
                    query: Some(params),
                    ..Default::default()
                },
            )
            .await?;
        Ok(page)
    }
}

#[async_trait]
impl JobBoard for ThemuseClient {
    fn site(&self) -> Site {
        Site::Themuse
    }

    async fn search(&self, req: &SearchRequest) -> Result<Vec<JobListing>, BoardError> {
        let now = Utc::now();
        let mut collected: Vec<JobListing> = Vec::new();
        let mut page = 1u32;
        let mut total_pages: Option<u32> = None;

        loop {
            if let Some(total) = total_pages {
                if page > total {
                    break;
                }
            }

            let fetched = self.fetch_page(req, page).await?;
            if fetched.results.is_empty() {
                break;
            }
            if total_pages.is_none() {
                total_pages = fetched.page_count;
            }

            collect_listings(&fetched.results, req, now, &mut collected);
            tracing::debug!(
                page,
                page_jobs = fetched.results.len(),
                collected = collected.len(),
                "themuse.page"
            );

            if let Some(max) = req.max_results {
                if collected.len() >= max {
                    collected.truncate(max);
                    break;
                }
            }
            page += 1;
        }

        tracing::info!(total = collected.len(), "themuse.search.done");
        Ok(collected)
    }
}

/// Normalise one page of API jobs into listings, applying the request's
/// recency and location rules. Jobs without a parseable date are skipped.
fn collect_listings(
    jobs: &[MuseJob],
    req: &SearchRequest,
    now: DateTime<Utc>,
    out: &mut Vec<JobListing>,
) {
    for job in jobs {
        let Some(posted_at) = parse_publication_date(&job.publication_date) else {
            tracing::debug!(title = %job.name, raw = %job.publication_date, "themuse.skip.bad_date");
            continue;
        };
        if !within_days(posted_at, req.days, now) {
            continue;
        }
        if let Some(wanted) = req.location.as_deref() {
            let names = job.locations.iter().map(|l| l.name.as_str());
            if !location_accepted(wanted, names) {
                continue;
            }
        }

        out.push(JobListing {
            title: job.name.trim().to_string(),
            company: job.company.name.trim().to_string(),
            location: job
                .locations
                .first()
                .map(|l| l.name.clone())
                .unwrap_or_default(),
            posted_at,
            description: strip_html(&job.contents),
            url: job.refs.landing_page.clone(),
        });
    }
}

/// At least one of the job's location names must contain the wanted string;
/// remote/flexible locations are accepted regardless.
fn location_accepted<'a>(wanted: &str, mut names: impl Iterator<Item = &'a str>) -> bool {
    names.any(|name| {
        let lowered = name.to_lowercase();
        location_matches(Some(wanted), name) || REMOTE_KEYWORDS.iter().any(|kw| lowered.contains(kw))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 23, 12, 0, 0).unwrap()
    }

    fn page_fixture() -> MusePage {
        serde_json::from_str(
            r#"{
              "page_count": 3,
              "results": [
                {
                  "name": "Senior Rust Engineer",
                  "company": { "name": "Ferrous Corp" },
                  "locations": [{ "name": "New York, NY" }],
                  "publication_date": "2026-08-21T09:00:00.000Z",
                  "contents": "<p>Write <b>fast</b> services.</p>",
                  "refs": { "landing_page": "https://example.com/jobs/1" }
                },
                {
                  "name": "Stale Posting",
                  "company": { "name": "Old Co" },
                  "locations": [{ "name": "New York, NY" }],
                  "publication_date": "2026-07-01T09:00:00.000Z",
                  "refs": { "landing_page": "https://example.com/jobs/2" }
                },
                {
                  "name": "Remote Platform Engineer",
                  "company": { "name": "Anywhere Inc" },
                  "locations": [{ "name": "Flexible / Remote" }],
                  "publication_date": "2026-08-22T10:00:00.000Z",
                  "refs": { "landing_page": "https://example.com/jobs/3" }
                },
                {
                  "name": "Broken Date",
                  "company": { "name": "Glitch LLC" },
                  "locations": [{ "name": "New York, NY" }],
                  "publication_date": "soon",
                  "refs": { "landing_page": "https://example.com/jobs/4" }
                }
              ]
            }"#,
        )
        .expect("fixture parses")
    }

    fn request(days: Option<u32>, location: Option<&str>) -> SearchRequest {
        SearchRequest {
            query: "engineer".into(),
            location: location.map(String::from),
            days,
            max_results: None,
        }
    }

    #[test]
    fn recency_filter_drops_old_and_unparseable() {
        let page = page_fixture();
        let mut out = Vec::new();
        collect_listings(&page.results, &request(Some(7), None), fixed_now(), &mut out);
        let titles: Vec<_> = out.iter().map(|j| j.title.as_str()).collect();
        assert_eq!(titles, ["Senior Rust Engineer", "Remote Platform Engineer"]);
    }

    #[test]
    fn days_none_keeps_old_postings_but_not_bad_dates() {
        let page = page_fixture();
        let mut out = Vec::new();
        collect_listings(&page.results, &request(None, None), fixed_now(), &mut out);
        assert_eq!(out.len(), 3);
        assert!(out.iter().all(|j| j.title != "Broken Date"));
    }

    #[test]
    fn location_filter_accepts_remote_roles() {
        let page = page_fixture();
        let mut out = Vec::new();
        collect_listings(
            &page.results,
            &request(Some(7), Some("new york")),
            fixed_now(),
            &mut out,
        );
        let titles: Vec<_> = out.iter().map(|j| j.title.as_str()).collect();
        // The remote role matches via the remote/flexible keywords.
        assert_eq!(titles, ["Senior Rust Engineer", "Remote Platform Engineer"]);
    }

    #[test]
    fn location_filter_excludes_other_cities() {
        let page = page_fixture();
        let mut out = Vec::new();
        collect_listings(
            &page.results,
            &request(None, Some("Philadelphia")),
            fixed_now(),
            &mut out,
        );
        let titles: Vec<_> = out.iter().map(|j| j.title.as_str()).collect();
        assert_eq!(titles, ["Remote Platform Engineer"]);
    }

    #[test]
    fn html_is_stripped_from_descriptions() {
        let page = page_fixture();
        let mut out = Vec::new();
        collect_listings(&page.results, &request(Some(7), None), fixed_now(), &mut out);
        assert_eq!(out[0].description, "Write fast services.");
    }
}
