//! Data model: tasks, incidents, cameras, emergencies and overlay records.
//!
//! Serde field names follow the persisted browser format (`cameraId`,
//! `assignedAt`, `type`, ...) so snapshots written by earlier builds keep
//! their meaning bit-for-bit.

use serde::{Deserialize, Serialize};

/// A latitude/longitude pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

/// Authenticated user role; a session without a role is logged out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Official,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Official => "official",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "admin" => Some(Role::Admin),
            "official" => Some(Role::Official),
            _ => None,
        }
    }
}

/// Kind of field work dispatched to an official
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskKind {
    Repair,
    Inspection,
    Emergency,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    Pending,
    Completed,
}

/// A unit of field work dispatched from admin to an official.
///
/// Tasks are never deleted, only filtered by status for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfficialTask {
    pub id: String,
    pub camera_id: String,
    pub camera_name: String,
    pub location: GeoPoint,
    #[serde(rename = "type")]
    pub kind: TaskKind,
    pub status: TaskStatus,
    pub assigned_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<String>,
}

impl OfficialTask {
    pub fn is_pending(&self) -> bool {
        self.status == TaskStatus::Pending
    }
}

/// Input for task creation; status and assignment time are stamped by the store
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskInput {
    pub id: String,
    pub camera_id: String,
    pub camera_name: String,
    pub location: GeoPoint,
    #[serde(rename = "type")]
    pub kind: TaskKind,
}

/// Record of an emergency dispatch that concluded. Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedIncident {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub zone: String,
    pub intensity: String,
    pub resolved_at: String,
    pub resolved_by: String,
    pub duration: String,
}

/// Severity label shown next to every incident row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Safe,
    Warning,
    Danger,
}

impl Severity {
    /// Map a dispatch intensity label onto the display severity
    pub fn from_intensity(intensity: &str) -> Self {
        match intensity {
            "CRITICAL" => Severity::Danger,
            "HIGH" => Severity::Warning,
            _ => Severity::Safe,
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Severity::Safe => write!(f, "Safe"),
            Severity::Warning => write!(f, "Warning"),
            Severity::Danger => write!(f, "Danger"),
        }
    }
}

/// Triage state of an incident row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IncidentStatus {
    Open,
    Dispatched,
    Resolved,
}

impl IncidentStatus {
    pub fn is_pending(&self) -> bool {
        matches!(self, IncidentStatus::Open | IncidentStatus::Dispatched)
    }
}

/// Detail block attached to an incident row. Synthesized presentation
/// placeholders, not ground truth from the detection pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncidentDetails {
    pub vehicle_ids: Vec<String>,
    pub speed: String,
    pub impact_force: String,
    pub weather_condition: String,
    pub road_condition: String,
    pub ai_confidence: String,
}

/// One row of the incident ledger, either parsed from an evidence filename
/// or projected from a resolved dispatch.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncidentRecord {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub timestamp: String,
    pub severity: Severity,
    pub status: IncidentStatus,
    pub officer: String,
    pub duration: String,
    pub location: String,
    pub image: String,
    pub is_new: bool,
    pub details: IncidentDetails,
}

/// Operational state of a camera node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CameraStatus {
    Active,
    PartiallyDamaged,
    Defected,
}

/// A camera node in the surveillance fleet
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Camera {
    pub id: String,
    pub name: String,
    pub status: CameraStatus,
    pub health: String,
    pub uptime: String,
    pub signal: u32,
    pub lat: f64,
    pub lng: f64,
    pub temp: String,
    pub firmware: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmergencyKind {
    Accident,
    Fire,
    Medical,
}

/// An emergency awaiting dispatch, as surfaced on the official's map
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmergencyAlert {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: EmergencyKind,
    pub location: GeoPoint,
    pub address: String,
    pub description: String,
}

/// High-visibility banner entry shown to admins
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlobalAlert {
    pub id: String,
    pub message: String,
    pub node: String,
}

/// A synthetic bounding box drawn over the playback canvas
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Detection {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
    pub label: String,
    pub confidence: f64,
    pub speed: u32,
    pub track_id: u32,
    pub color: String,
    pub is_violation: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ViolationKind {
    RedLight,
    NoHelmet,
    WrongWay,
    Speeding,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ViolationSeverity {
    Critical,
    Warning,
}

/// A standalone violation marker on the overlay
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Violation {
    #[serde(rename = "type")]
    pub kind: ViolationKind,
    pub x: f64,
    pub y: f64,
    pub severity: ViolationSeverity,
}

/// HUD statistics for one analyzed frame
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameStats {
    pub vehicles: u32,
    pub persons: u32,
    pub violations: u32,
    pub avg_speed: u32,
    pub safety_index: u32,
    pub system_status: String,
}

/// Full synthetic analysis of one frame: boxes, violations and HUD stats
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameAnalysis {
    pub detections: Vec<Detection>,
    pub violations: Vec<Violation>,
    pub stats: FrameStats,
}
