use serde::Deserialize;

/// Envelope of `/api/remote-jobs`.
#[derive(Debug, Clone, Deserialize)]
pub struct RemotiveResponse {
    #[serde(default)]
    pub jobs: Vec<RemotiveJob>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RemotiveJob {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub company_name: String,
    /// Where the candidate must be located, not where the company sits.
    #[serde(default)]
    pub candidate_required_location: String,
    /// Bare `YYYY-MM-DDTHH:MM:SS` timestamp without an offset.
    #[serde(default)]
    pub publication_date: String,
    /// HTML description body.
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub url: String,
}
