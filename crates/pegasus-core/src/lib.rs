//! Pegasus Core: shared data model, error taxonomy and geo reference data.
//!
//! Every other crate in the workspace builds on these types. Nothing here
//! performs I/O; the stores and the evidence feed live in their own crates.

pub mod data_model;
pub mod error;
pub mod geo;
pub mod source;

pub use data_model::{
    Camera, CameraStatus, Detection, EmergencyAlert, EmergencyKind, FrameAnalysis, FrameStats,
    GeoPoint, GlobalAlert, IncidentDetails, IncidentRecord, IncidentStatus, OfficialTask,
    ResolvedIncident, Role, Severity, TaskInput, TaskKind, TaskStatus, Violation, ViolationKind,
    ViolationSeverity,
};
pub use error::PegasusError;
pub use source::{DetectionSource, FleetSource};

/// Version of the Pegasus client core
pub const PEGASUS_VERSION: &str = "0.1.0";
