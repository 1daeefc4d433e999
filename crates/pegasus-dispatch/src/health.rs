//! Camera health board: fleet view for the selected region plus the
//! "inform police" flow that turns a defective node into a repair task.

use chrono::Utc;
use pegasus_core::{Camera, FleetSource, GeoPoint, TaskInput, TaskKind};
use std::sync::Arc;

pub struct HealthBoard {
    source: Arc<dyn FleetSource>,
    state: String,
    district: String,
    cameras: Vec<Camera>,
    selected: Option<String>,
}

impl HealthBoard {
    pub fn new(source: Arc<dyn FleetSource>, state: &str, district: &str) -> Self {
        let cameras = source.fleet(state, district);
        let selected = cameras.first().map(|c| c.id.clone());
        Self {
            source,
            state: state.to_string(),
            district: district.to_string(),
            cameras,
            selected,
        }
    }

    pub fn region(&self) -> (&str, &str) {
        (&self.state, &self.district)
    }

    pub fn cameras(&self) -> &[Camera] {
        &self.cameras
    }

    pub fn selected_camera(&self) -> Option<&Camera> {
        let id = self.selected.as_deref()?;
        self.cameras.iter().find(|c| c.id == id)
    }

    /// Switch region: regenerates the fleet and selects the first node
    pub fn set_region(&mut self, state: &str, district: &str) {
        self.state = state.to_string();
        self.district = district.to_string();
        self.cameras = self.source.fleet(state, district);
        self.selected = self.cameras.first().map(|c| c.id.clone());
    }

    pub fn select_camera(&mut self, id: &str) -> bool {
        if !self.cameras.iter().any(|c| c.id == id) {
            return false;
        }
        self.selected = Some(id.to_string());
        true
    }

    /// "Inform police" on a camera: produces a repair-task input for the
    /// shared task store and removes the node from the tracking grid. If the
    /// removed node was selected, selection moves to the first remaining one.
    pub fn report_camera(&mut self, id: &str) -> Option<TaskInput> {
        let pos = self.cameras.iter().position(|c| c.id == id)?;
        let cam = self.cameras.remove(pos);
        if self.selected.as_deref() == Some(id) {
            self.selected = self.cameras.first().map(|c| c.id.clone());
        }
        tracing::info!(camera = %cam.id, "camera reported, node removed from grid");
        Some(TaskInput {
            id: format!("TASK-{}", Utc::now().timestamp_millis()),
            camera_id: cam.id,
            camera_name: cam.name,
            location: GeoPoint { lat: cam.lat, lng: cam.lng },
            kind: TaskKind::Repair,
        })
    }
}
