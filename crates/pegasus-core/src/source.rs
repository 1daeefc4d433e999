//! Backend seams: traits the views consume for fleet and detection data.
//!
//! The mock generators implement these today; a real inference client can
//! replace them without touching any consumer.

use crate::data_model::{Camera, FrameAnalysis};

/// Produces the camera fleet for a selected region
pub trait FleetSource: Send + Sync {
    fn fleet(&self, state: &str, district: &str) -> Vec<Camera>;
}

/// Produces per-frame detection output for the playback overlay
pub trait DetectionSource: Send + Sync {
    fn analyze_frame(&self, width: f64, height: f64, frame: u64) -> FrameAnalysis;
}
