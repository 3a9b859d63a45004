//! Job-board clients and the capability they share.
//!
//! Each supported board lives in its own submodule with an HTTP client
//! wrapper and strongly typed response models; [`board`] defines the
//! [`JobBoard`] search capability, the [`Site`] registry, and the shared
//! error type. [`filter`] holds the recency/location rules applied
//! client-side so every board treats them identically.
pub mod board;
pub mod extract;
pub mod filter;
pub mod remotive;
pub mod themuse;

pub use board::{BoardError, JobBoard, SearchRequest, Site};
pub use remotive::RemotiveClient;
pub use themuse::ThemuseClient;
