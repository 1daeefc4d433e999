//! Pegasus Evidence: keeps the incident ledger current with server-observed
//! evidence, without manual refresh.
//!
//! The external detection pipeline writes captures as structured filenames;
//! this crate parses them into incident records, fetches the listing over
//! HTTP and re-fetches it on a fixed period behind a cancellable handle.

pub mod client;
pub mod parser;
pub mod poller;

pub use client::{EvidenceClient, FeedError};
pub use parser::{parse_filename, parse_listing, FALLBACK_TIMESTAMP};
pub use poller::{EvidencePoller, POLL_PERIOD};
