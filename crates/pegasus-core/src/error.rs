//! Unified error model
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PegasusError {
    /// Durable key/value persistence failed
    #[error("STORE/{0}")]
    Store(String),
}
