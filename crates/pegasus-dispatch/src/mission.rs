//! Per-emergency mission state machine.
//!
//! One board per official session. Emergencies queue up alongside local
//! maintenance tasks; selecting one kind clears the other, so at most one of
//! {active emergency, active maintenance task} is ever non-null.

use chrono::{DateTime, Local, Utc};
use pegasus_core::{EmergencyAlert, EmergencyKind, OfficialTask, ResolvedIncident};

/// Where the active emergency sits in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissionPhase {
    /// Nothing selected, or a maintenance task is active instead
    Idle,
    /// An emergency is selected, decision pending
    Selected,
    /// Mission accepted, unit en route
    Accepted,
    /// Success confirmation still on screen; `acknowledge` clears it
    Celebrating,
}

pub struct DispatchBoard {
    emergencies: Vec<EmergencyAlert>,
    maintenance: Vec<OfficialTask>,
    active_emergency: Option<String>,
    active_task: Option<String>,
    phase: MissionPhase,
    accepted_at: Option<DateTime<Utc>>,
}

impl DispatchBoard {
    pub fn new(emergencies: Vec<EmergencyAlert>, maintenance: Vec<OfficialTask>) -> Self {
        let active_task = maintenance.first().map(|t| t.id.clone());
        Self {
            emergencies,
            maintenance,
            active_emergency: None,
            active_task,
            phase: MissionPhase::Idle,
            accepted_at: None,
        }
    }

    pub fn emergencies(&self) -> &[EmergencyAlert] {
        &self.emergencies
    }

    pub fn maintenance(&self) -> &[OfficialTask] {
        &self.maintenance
    }

    pub fn phase(&self) -> MissionPhase {
        self.phase
    }

    pub fn active_emergency(&self) -> Option<&EmergencyAlert> {
        let id = self.active_emergency.as_deref()?;
        self.emergencies.iter().find(|e| e.id == id)
    }

    pub fn active_task(&self) -> Option<&OfficialTask> {
        let id = self.active_task.as_deref()?;
        self.maintenance.iter().find(|t| t.id == id)
    }

    /// Activate an emergency from the list or map. Clears any active
    /// maintenance selection; the two modes are mutually exclusive.
    pub fn select_emergency(&mut self, id: &str) -> bool {
        if !self.emergencies.iter().any(|e| e.id == id) {
            return false;
        }
        self.active_emergency = Some(id.to_string());
        self.active_task = None;
        self.phase = MissionPhase::Selected;
        self.accepted_at = None;
        true
    }

    /// Activate a maintenance task, clearing any emergency selection
    pub fn select_task(&mut self, id: &str) -> bool {
        if !self.maintenance.iter().any(|t| t.id == id) {
            return false;
        }
        self.active_task = Some(id.to_string());
        self.active_emergency = None;
        self.phase = MissionPhase::Idle;
        self.accepted_at = None;
        true
    }

    pub fn accept_mission(&mut self) {
        if self.phase != MissionPhase::Selected || self.active_emergency.is_none() {
            return;
        }
        self.phase = MissionPhase::Accepted;
        self.accepted_at = Some(Utc::now());
        if let Some(emg) = self.active_emergency() {
            tracing::info!(emergency = %emg.id, "mission accepted");
        }
    }

    /// Deselect without touching the queue; the emergency stays available
    pub fn reject_mission(&mut self) {
        if self.phase != MissionPhase::Selected {
            return;
        }
        self.active_emergency = None;
        self.phase = MissionPhase::Idle;
    }

    /// Close out the active mission as a success. Removes the emergency from
    /// the queue, advances selection to the next queued one, and returns the
    /// resolved-incident record for the ledger. The board stays in
    /// `Celebrating` until `acknowledge` is called.
    pub fn mission_success(&mut self, resolved_by: &str) -> Option<ResolvedIncident> {
        if self.phase != MissionPhase::Accepted {
            return None;
        }
        let emg = self.remove_active_emergency()?;
        let record = self.close_out(emg, resolved_by);
        self.advance_emergency();
        self.phase = MissionPhase::Celebrating;
        Some(record)
    }

    /// Close out the active mission as a failure: removes and advances like
    /// success, but with no confirmation phase and no ledger record.
    pub fn mission_failure(&mut self) {
        if self.phase != MissionPhase::Accepted {
            return;
        }
        if let Some(emg) = self.remove_active_emergency() {
            tracing::info!(emergency = %emg.id, "mission failed");
        }
        self.advance_emergency();
        self.phase = if self.active_emergency.is_some() {
            MissionPhase::Selected
        } else {
            MissionPhase::Idle
        };
    }

    /// Dismiss the success confirmation
    pub fn acknowledge(&mut self) {
        if self.phase != MissionPhase::Celebrating {
            return;
        }
        self.phase = if self.active_emergency.is_some() {
            MissionPhase::Selected
        } else {
            MissionPhase::Idle
        };
    }

    /// Remove a maintenance task from the local queue. Returns false when the
    /// id is not local, in which case the caller forwards the completion to
    /// the shared task store. Selection only moves while no emergency is
    /// active, keeping the two modes mutually exclusive.
    pub fn complete_maintenance(&mut self, id: &str) -> bool {
        let before = self.maintenance.len();
        self.maintenance.retain(|t| t.id != id);
        let removed = self.maintenance.len() != before;
        if self.active_emergency.is_none()
            && (self.active_task.as_deref() == Some(id) || (removed && self.active_task.is_none()))
        {
            self.active_task = self.maintenance.first().map(|t| t.id.clone());
        }
        removed
    }

    fn remove_active_emergency(&mut self) -> Option<EmergencyAlert> {
        let id = self.active_emergency.take()?;
        let pos = self.emergencies.iter().position(|e| e.id == id)?;
        Some(self.emergencies.remove(pos))
    }

    fn advance_emergency(&mut self) {
        self.active_emergency = self.emergencies.first().map(|e| e.id.clone());
        self.accepted_at = None;
    }

    fn close_out(&mut self, emg: EmergencyAlert, resolved_by: &str) -> ResolvedIncident {
        let now = Utc::now();
        let duration = match self.accepted_at {
            Some(t0) => {
                let secs = (now - t0).num_seconds().max(0);
                format!("{}:{:02}s", secs / 60, secs % 60)
            }
            None => "0:00s".to_string(),
        };
        tracing::info!(emergency = %emg.id, by = resolved_by, "mission succeeded");
        ResolvedIncident {
            id: emg.id,
            kind: kind_label(emg.kind).to_string(),
            zone: emg.address,
            intensity: intensity_of(emg.kind).to_string(),
            resolved_at: Local::now().format("%H:%M:%S").to_string(),
            resolved_by: resolved_by.to_string(),
            duration,
        }
    }
}

fn kind_label(kind: EmergencyKind) -> &'static str {
    match kind {
        EmergencyKind::Accident => "Accident",
        EmergencyKind::Fire => "Fire",
        EmergencyKind::Medical => "Medical",
    }
}

fn intensity_of(kind: EmergencyKind) -> &'static str {
    match kind {
        EmergencyKind::Accident => "CRITICAL",
        EmergencyKind::Fire => "HIGH",
        EmergencyKind::Medical => "MEDIUM",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pegasus_core::{GeoPoint, TaskKind, TaskStatus};

    fn emergency(id: &str, kind: EmergencyKind) -> EmergencyAlert {
        EmergencyAlert {
            id: id.to_string(),
            kind,
            location: GeoPoint { lat: 12.9850, lng: 77.6050 },
            address: "MG Road Junction, Bangalore".to_string(),
            description: "Multi-vehicle collision reported by AI Node 42".to_string(),
        }
    }

    fn maintenance(id: &str) -> OfficialTask {
        OfficialTask {
            id: id.to_string(),
            camera_id: "CAM-402".to_string(),
            camera_name: "Indiranagar 100ft Rd Node".to_string(),
            location: GeoPoint { lat: 12.9719, lng: 77.6412 },
            kind: TaskKind::Repair,
            status: TaskStatus::Pending,
            assigned_at: "Today, 10:15 AM".to_string(),
            completed_at: None,
        }
    }

    fn board() -> DispatchBoard {
        DispatchBoard::new(
            vec![
                emergency("EMG-101", EmergencyKind::Accident),
                emergency("EMG-102", EmergencyKind::Accident),
                emergency("EMG-103", EmergencyKind::Fire),
            ],
            vec![maintenance("MNT-402"), maintenance("MNT-415")],
        )
    }

    #[test]
    fn test_selecting_emergency_clears_maintenance_selection() {
        let mut board = board();
        assert!(board.active_task().is_some());

        board.select_emergency("EMG-101");
        assert!(board.active_task().is_none());
        assert_eq!(board.active_emergency().unwrap().id, "EMG-101");
        assert_eq!(board.phase(), MissionPhase::Selected);
    }

    #[test]
    fn test_selecting_task_clears_emergency_selection() {
        let mut board = board();
        board.select_emergency("EMG-101");
        board.select_task("MNT-415");

        assert!(board.active_emergency().is_none());
        assert_eq!(board.active_task().unwrap().id, "MNT-415");
    }

    #[test]
    fn test_at_most_one_selection_mode() {
        let mut board = board();
        for step in 0..4 {
            if step % 2 == 0 {
                board.select_emergency("EMG-102");
            } else {
                board.select_task("MNT-402");
            }
            let both = board.active_emergency().is_some() && board.active_task().is_some();
            assert!(!both);
        }
    }

    #[test]
    fn test_success_removes_advances_and_records() {
        let mut board = board();
        board.select_emergency("EMG-101");
        board.accept_mission();
        assert_eq!(board.phase(), MissionPhase::Accepted);

        let record = board.mission_success("Unit Alpha-3").unwrap();
        assert_eq!(record.id, "EMG-101");
        assert_eq!(record.kind, "Accident");
        assert_eq!(record.intensity, "CRITICAL");
        assert_eq!(record.resolved_by, "Unit Alpha-3");

        assert_eq!(board.emergencies().len(), 2);
        assert_eq!(board.active_emergency().unwrap().id, "EMG-102");
        assert_eq!(board.phase(), MissionPhase::Celebrating);

        board.acknowledge();
        assert_eq!(board.phase(), MissionPhase::Selected);
    }

    #[test]
    fn test_failure_removes_and_advances_without_record() {
        let mut board = board();
        board.select_emergency("EMG-102");
        board.accept_mission();
        board.mission_failure();

        assert_eq!(board.emergencies().len(), 2);
        // Advances to the head of the remaining queue
        assert_eq!(board.active_emergency().unwrap().id, "EMG-101");
        assert_eq!(board.phase(), MissionPhase::Selected);
    }

    #[test]
    fn test_reject_keeps_emergency_queued() {
        let mut board = board();
        board.select_emergency("EMG-103");
        board.reject_mission();

        assert!(board.active_emergency().is_none());
        assert_eq!(board.phase(), MissionPhase::Idle);
        assert!(board.emergencies().iter().any(|e| e.id == "EMG-103"));
    }

    #[test]
    fn test_success_requires_accepted_phase() {
        let mut board = board();
        board.select_emergency("EMG-101");
        // Not accepted yet
        assert!(board.mission_success("Unit Alpha-3").is_none());
        assert_eq!(board.emergencies().len(), 3);
    }

    #[test]
    fn test_draining_the_queue_goes_idle() {
        let mut board = DispatchBoard::new(
            vec![emergency("EMG-101", EmergencyKind::Medical)],
            Vec::new(),
        );
        board.select_emergency("EMG-101");
        board.accept_mission();
        let record = board.mission_success("Unit Bravo-1").unwrap();
        assert_eq!(record.intensity, "MEDIUM");

        board.acknowledge();
        assert!(board.active_emergency().is_none());
        assert_eq!(board.phase(), MissionPhase::Idle);
        assert!(board.emergencies().is_empty());
    }

    #[test]
    fn test_complete_maintenance_keeps_emergency_exclusive() {
        let mut board = board();
        board.select_emergency("EMG-101");

        assert!(board.complete_maintenance("MNT-402"));
        assert_eq!(board.active_emergency().unwrap().id, "EMG-101");
        assert!(board.active_task().is_none());
    }

    #[test]
    fn test_external_complete_during_emergency_selects_nothing() {
        let mut board = board();
        board.select_emergency("EMG-101");

        // Not a local id; nothing removed, and no selection may appear
        assert!(!board.complete_maintenance("TASK-1700000000000"));
        assert_eq!(board.active_emergency().unwrap().id, "EMG-101");
        assert!(board.active_task().is_none());
    }

    #[test]
    fn test_complete_maintenance_local_vs_external() {
        let mut board = board();
        assert!(board.complete_maintenance("MNT-402"));
        assert_eq!(board.maintenance().len(), 1);
        assert_eq!(board.active_task().unwrap().id, "MNT-415");

        // External ids are not local; the caller forwards them to the store
        assert!(!board.complete_maintenance("TASK-1700000000000"));
    }
}
