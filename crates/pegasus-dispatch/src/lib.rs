//! Pegasus Dispatch: the workflows that assign field units to detected
//! emergencies and defective cameras.

pub mod alerts;
pub mod health;
pub mod mission;

pub use alerts::AlertBanner;
pub use health::HealthBoard;
pub use mission::{DispatchBoard, MissionPhase};
