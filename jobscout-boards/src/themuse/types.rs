use serde::Deserialize;

/// One page of `/api/public/jobs` results.
#[derive(Debug, Clone, Deserialize)]
pub struct MusePage {
    #[serde(default)]
    pub results: Vec<MuseJob>,
    /// Total page count, reported on every page. 1-indexed.
    #[serde(default)]
    pub page_count: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MuseJob {
    /// Job title.
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub company: MuseCompany,
    #[serde(default)]
    pub locations: Vec<MuseLocation>,
    #[serde(default)]
    pub publication_date: String,
    /// HTML description body.
    #[serde(default)]
    pub contents: String,
    #[serde(default)]
    pub refs: MuseRefs,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MuseCompany {
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MuseLocation {
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MuseRefs {
    /// Public landing page for the posting.
    #[serde(default)]
    pub landing_page: String,
}
