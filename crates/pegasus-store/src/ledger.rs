//! Resolved-incident ledger and the merged incident table.
//!
//! Session-scoped: resolved dispatches are never persisted across reloads.
//! The incident view combines ledger rows with externally fetched evidence
//! records at render time, resolved rows first.

use pegasus_core::{
    IncidentDetails, IncidentRecord, IncidentStatus, ResolvedIncident, Severity,
};

#[derive(Default)]
pub struct IncidentLedger {
    entries: Vec<ResolvedIncident>,
}

impl IncidentLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepend a resolved dispatch. Newest-first ordering is an invariant:
    /// entries[i] was added no earlier than entries[j] for i < j.
    pub fn add(&mut self, record: ResolvedIncident) {
        tracing::info!(incident = %record.id, zone = %record.zone, "dispatch resolved");
        self.entries.insert(0, record);
    }

    pub fn entries(&self) -> &[ResolvedIncident] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Project ledger entries into table rows. `fallback_image` stands in for
    /// rows that have no evidence capture of their own.
    pub fn rows(&self, fallback_image: &str) -> Vec<IncidentRecord> {
        self.entries
            .iter()
            .map(|inc| IncidentRecord {
                id: inc.id.clone(),
                kind: inc.kind.clone(),
                timestamp: format!("Today {}", inc.resolved_at),
                severity: Severity::from_intensity(&inc.intensity),
                status: IncidentStatus::Resolved,
                officer: inc.resolved_by.clone(),
                duration: inc.duration.clone(),
                location: inc.zone.clone(),
                image: fallback_image.to_string(),
                is_new: true,
                details: IncidentDetails {
                    vehicle_ids: vec!["Unknown".to_string()],
                    speed: "N/A".to_string(),
                    impact_force: "N/A".to_string(),
                    weather_condition: "Clear".to_string(),
                    road_condition: "Dry".to_string(),
                    ai_confidence: "90%".to_string(),
                },
            })
            .collect()
    }
}

/// The merged incident table: resolved rows first, then the evidence feed.
pub fn combined_rows(resolved: Vec<IncidentRecord>, feed: &[IncidentRecord]) -> Vec<IncidentRecord> {
    let mut rows = resolved;
    rows.extend_from_slice(feed);
    rows
}

/// Header counters for the incident view
pub fn critical_count(rows: &[IncidentRecord]) -> usize {
    rows.iter().filter(|r| r.severity == Severity::Danger).count()
}

pub fn pending_count(rows: &[IncidentRecord]) -> usize {
    rows.iter().filter(|r| r.status.is_pending()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolved(id: &str, intensity: &str) -> ResolvedIncident {
        ResolvedIncident {
            id: id.to_string(),
            kind: "Accident".to_string(),
            zone: "MG Road Junction, Bangalore".to_string(),
            intensity: intensity.to_string(),
            resolved_at: "14:02:51".to_string(),
            resolved_by: "Unit Alpha-3".to_string(),
            duration: "4:12s".to_string(),
        }
    }

    #[test]
    fn test_newest_first_ordering() {
        let mut ledger = IncidentLedger::new();
        ledger.add(resolved("R1", "HIGH"));
        ledger.add(resolved("R2", "CRITICAL"));

        assert_eq!(ledger.entries()[0].id, "R2");
        assert_eq!(ledger.entries()[1].id, "R1");
    }

    #[test]
    fn test_rows_project_intensity_to_severity() {
        let mut ledger = IncidentLedger::new();
        ledger.add(resolved("R1", "CRITICAL"));
        ledger.add(resolved("R2", "HIGH"));
        ledger.add(resolved("R3", "LOW"));

        let rows = ledger.rows("/evidence/none.jpg");
        assert_eq!(rows[0].severity, Severity::Safe);
        assert_eq!(rows[1].severity, Severity::Warning);
        assert_eq!(rows[2].severity, Severity::Danger);
        assert!(rows.iter().all(|r| r.status == IncidentStatus::Resolved));
        assert!(rows.iter().all(|r| r.is_new));
    }

    #[test]
    fn test_combined_rows_resolved_first() {
        let mut ledger = IncidentLedger::new();
        ledger.add(resolved("R1", "HIGH"));

        let feed = vec![IncidentRecord {
            id: "INC-2000".to_string(),
            kind: "Collision".to_string(),
            timestamp: "Today".to_string(),
            severity: Severity::Danger,
            status: IncidentStatus::Open,
            officer: "Sgt. Baker".to_string(),
            duration: "0:35s".to_string(),
            location: "CAM-001 - Detection Zone".to_string(),
            image: "/evidence/a.jpg".to_string(),
            is_new: false,
            details: IncidentDetails {
                vehicle_ids: vec!["veh42".to_string()],
                speed: "42 km/h".to_string(),
                impact_force: "Moderate".to_string(),
                weather_condition: "Clear".to_string(),
                road_condition: "Dry".to_string(),
                ai_confidence: "94%".to_string(),
            },
        }];

        let rows = combined_rows(ledger.rows("/evidence/a.jpg"), &feed);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].id, "R1");
        assert_eq!(rows[1].id, "INC-2000");

        assert_eq!(critical_count(&rows), 1);
        assert_eq!(pending_count(&rows), 1);
    }
}
