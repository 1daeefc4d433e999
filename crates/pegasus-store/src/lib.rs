//! Pegasus Store: single source of truth for session, tasks and incidents.
//!
//! Constructed once at startup and handed by reference to every consumer,
//! replacing the hidden application-root globals of the original shell.

pub mod kv;
pub mod ledger;
pub mod session;
pub mod tasks;

pub use kv::{FileKv, KvStore, MemoryKv};
pub use ledger::IncidentLedger;
pub use session::SessionStore;
pub use tasks::TaskStore;
