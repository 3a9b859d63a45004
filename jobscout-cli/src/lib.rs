//! Output side of the jobscout binary: console table and file exporters.
//!
//! Kept as a library so the exporters can be integration-tested without
//! going through the binary.
pub mod export;
pub mod table;
