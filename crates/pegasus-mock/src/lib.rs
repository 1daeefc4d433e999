//! Pegasus Mock: deterministic generators standing in for the inference
//! backend. Everything is seeded, so fixtures reproduce exactly across runs,
//! and the whole crate sits behind the `FleetSource` and `DetectionSource`
//! seams so a real backend client can replace it without touching consumers.

pub mod detections;
pub mod entities;
pub mod fleet;
pub mod rng;

pub use detections::generate_detections;
pub use entities::{mock_emergencies, mock_maintenance};
pub use fleet::generate_fleet;

use pegasus_core::{Camera, DetectionSource, FleetSource, FrameAnalysis};

/// Seeded backend implementing both source seams
pub struct MockBackend {
    seed: u64,
}

impl MockBackend {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl FleetSource for MockBackend {
    fn fleet(&self, state: &str, district: &str) -> Vec<Camera> {
        generate_fleet(state, district, self.seed)
    }
}

impl DetectionSource for MockBackend {
    fn analyze_frame(&self, width: f64, height: f64, frame: u64) -> FrameAnalysis {
        // Distinct stream per frame, still reproducible from the base seed
        generate_detections(width, height, self.seed ^ frame.wrapping_mul(0x9E37_79B9_7F4A_7C15))
    }
}
