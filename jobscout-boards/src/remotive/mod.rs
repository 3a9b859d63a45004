//! Remotive remote-jobs API.
//!
//! `https://remotive.com/api/remote-jobs` answers a keyword search with the
//! full result set in one response; there is no pagination. Location here
//! means the *candidate's required* location (e.g. "Worldwide", "USA Only").
pub mod client;
pub mod types;

pub use client::RemotiveClient;
