//! Client for the Remotive remote-jobs API.
use crate::board::{BoardError, JobBoard, SearchRequest, Site};
use crate::extract::{parse_publication_date, strip_html};
use crate::filter::{location_matches, within_days};
use crate::remotive::types::{RemotiveJob, RemotiveResponse};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use jobscout_common::JobListing;
use jobscout_http::{HttpClient, RequestOpts};
use std::borrow::Cow;
use std::time::Duration;

const SEARCH_PATH: &str = "api/remote-jobs";

pub struct RemotiveClient {
    http: HttpClient,
}

impl RemotiveClient {
    pub fn new(endpoint: &str) -> Result<Self, BoardError> {
        let http = HttpClient::new(endpoint).map_err(BoardError::Http)?;
        Ok(Self { http })
    }

    pub fn with_timeout(mut self, dur: Duration) -> Self {
        self.http = self.http.with_timeout(dur);
        self
    }

    pub fn with_retries(mut self, n: usize) -> Self {
        self.http = self.http.with_retries(n);
        self
    }
}

#[async_trait]
impl JobBoard for RemotiveClient {
    fn site(&self) -> Site {
        Site::Remotive
    }

    async fn search(&self, req: &SearchRequest) -> Result<Vec<JobListing>, BoardError> {
        let mut params: Vec<(&str, Cow<'_, str>)> = Vec::new();
        if !req.query.is_empty() {
            params.push(("search", Cow::Borrowed(req.query.as_str())));
        }

        let resp: RemotiveResponse = self
            .http
            .get_json(
                SEARCH_PATH,
                RequestOpts {
                    query: Some(params),
                    ..Default::default()
                },
            )
            .await?;

        let listings = collect_listings(&resp.jobs, req, Utc::now());
        tracing::info!(
            fetched = resp.jobs.len(),
            total = listings.len(),
            "remotive.search.done"
        );
        Ok(listings)
    }
}

/// Apply the request's filters and cap to the API's single result set.
fn collect_listings(jobs: &[RemotiveJob], req: &SearchRequest, now: DateTime<Utc>) -> Vec<JobListing> {
    let mut out = Vec::new();
    for job in jobs {
        let Some(posted_at) = parse_publication_date(&job.publication_date) else {
            tracing::debug!(title = %job.title, raw = %job.publication_date, "remotive.skip.bad_date");
            continue;
        };
        if !within_days(posted_at, req.days, now) {
            continue;
        }
        let job_location = job.candidate_required_location.trim();
        if !location_matches(req.location.as_deref(), job_location) {
            continue;
        }

        out.push(JobListing {
            title: job.title.trim().to_string(),
            company: job.company_name.trim().to_string(),
            location: job_location.to_string(),
            posted_at,
            description: strip_html(&job.description),
            url: job.url.trim().to_string(),
        });

        if let Some(max) = req.max_results {
            if out.len() >= max {
                break;
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 23, 12, 0, 0).unwrap()
    }

    fn jobs_fixture() -> Vec<RemotiveJob> {
        let resp: RemotiveResponse = serde_json::from_str(
            r#"{
              "jobs": [
                {
                  "title": "Rust Backend Developer",
                  "company_name": "Remotely",
                  "candidate_required_location": "Worldwide",
                  "publication_date": "2026-08-22T08:15:00",
                  "description": "<p>Own the <i>ingest</i> pipeline.</p>",
                  "url": "https://remotive.com/jobs/100"
                },
                {
                  "title": "USA-only SRE",
                  "company_name": "StatesCo",
                  "candidate_required_location": "USA Only",
                  "publication_date": "2026-08-21T08:15:00",
                  "description": "",
                  "url": "https://remotive.com/jobs/101"
                },
                {
                  "title": "Ancient Listing",
                  "company_name": "Archive",
                  "candidate_required_location": "Worldwide",
                  "publication_date": "2026-01-05T08:15:00",
                  "description": "",
                  "url": "https://remotive.com/jobs/102"
                },
                {
                  "title": "Exactly A Week Old",
                  "company_name": "Boundary",
                  "candidate_required_location": "Worldwide",
                  "publication_date": "2026-08-16T12:00:00",
                  "description": "",
                  "url": "https://remotive.com/jobs/103"
                }
              ]
            }"#,
        )
        .expect("fixture parses");
        resp.jobs
    }

    fn request(days: Option<u32>, location: Option<&str>, max: Option<usize>) -> SearchRequest {
        SearchRequest {
            query: "rust".into(),
            location: location.map(String::from),
            days,
            max_results: max,
        }
    }

    #[test]
    fn filters_by_recency_with_inclusive_boundary() {
        let out = collect_listings(&jobs_fixture(), &request(Some(7), None, None), fixed_now());
        let titles: Vec<_> = out.iter().map(|j| j.title.as_str()).collect();
        // The exactly-seven-days-old posting stays in.
        assert_eq!(
            titles,
            ["Rust Backend Developer", "USA-only SRE", "Exactly A Week Old"]
        );
    }

    #[test]
    fn filters_by_candidate_location_substring() {
        let out = collect_listings(&jobs_fixture(), &request(None, Some("usa"), None), fixed_now());
        let titles: Vec<_> = out.iter().map(|j| j.title.as_str()).collect();
        assert_eq!(titles, ["USA-only SRE"]);
    }

    #[test]
    fn max_results_caps_even_when_api_returns_more() {
        let out = collect_listings(&jobs_fixture(), &request(None, None, Some(2)), fixed_now());
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn descriptions_come_back_as_plain_text() {
        let out = collect_listings(&jobs_fixture(), &request(Some(7), None, None), fixed_now());
        assert_eq!(out[0].description, "Own the ingest pipeline.");
    }
}
