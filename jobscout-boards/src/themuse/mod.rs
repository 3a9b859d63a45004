//! The Muse public jobs API.
//!
//! `https://www.themuse.com/api/public/jobs` serves paginated results for a
//! keyword/location query without authentication; an optional `api_key`
//! raises the rate limit. The client walks pages and applies the shared
//! client-side filters on top of the API's own matching.
pub mod client;
pub mod types;

pub use client::ThemuseClient;
