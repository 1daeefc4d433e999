//! Evidence filename grammar.
//!
//! Captures are named `evidence_{subtype}_{vehicleId..}_{timestamp}.jpg` by
//! the external generator; the grammar here must match it segment for
//! segment. Malformed names degrade to fallback field values, never errors.
//!
//! Triage fields (status, officer, confidence) are synthesized from the
//! record's position in the listing, not from content. Ids are
//! `INC-{2000+index}` and are only stable within one fetch cycle; any
//! consumer keying on them across refreshes will see identity flicker. That
//! is the external contract today, kept rather than fixed.

use pegasus_core::{IncidentDetails, IncidentRecord, IncidentStatus, Severity};

/// Shown when a capture name carries no timestamp segment
pub const FALLBACK_TIMESTAMP: &str = "Today";

/// Parse one capture filename into an incident record. `index` is the
/// position in the current listing; `base_url` prefixes the image path.
pub fn parse_filename(filename: &str, index: usize, base_url: &str) -> IncidentRecord {
    let base = filename.strip_suffix(".jpg").unwrap_or(filename);
    let parts: Vec<&str> = base.split('_').collect();

    let kind = match parts.get(1) {
        Some(&"safety") => "Safety Observation".to_string(),
        Some(&"collision") => "Collision".to_string(),
        Some(&"illegal") => "Illegal Boarding".to_string(),
        Some(raw) if !raw.is_empty() => capitalize(raw),
        _ => "Incident".to_string(),
    };

    // The first segment starting with "202" marks the timestamp suffix
    let date_index = parts.iter().position(|p| p.starts_with("202"));

    let (vehicle_id, raw_timestamp) = match date_index {
        Some(idx) => (join_or_unknown(&parts, 2, idx), parts[idx..].join("_")),
        None => (join_or_unknown(&parts, 2, parts.len()), String::new()),
    };

    let timestamp = if raw_timestamp.is_empty() {
        FALLBACK_TIMESTAMP.to_string()
    } else {
        display_timestamp(&raw_timestamp)
    };

    let lower = kind.to_lowercase();
    let severity = if lower.contains("collision") {
        Severity::Danger
    } else if lower.contains("boarding") {
        Severity::Warning
    } else {
        Severity::Safe
    };

    let is_collision = kind.contains("Collision");

    IncidentRecord {
        id: format!("INC-{}", 2000 + index),
        kind,
        timestamp,
        severity,
        status: match index % 3 {
            0 => IncidentStatus::Resolved,
            1 => IncidentStatus::Dispatched,
            _ => IncidentStatus::Open,
        },
        officer: match index % 4 {
            0 => "Sgt. Baker".to_string(),
            1 => "Cpl. Lee".to_string(),
            _ => "Officer Ray".to_string(),
        },
        duration: "0:35s".to_string(),
        location: "CAM-001 - Detection Zone".to_string(),
        image: format!("{}/evidence/{}", base_url, filename),
        is_new: false,
        details: IncidentDetails {
            vehicle_ids: vec![vehicle_id],
            speed: if is_collision { "42 km/h" } else { "15 km/h" }.to_string(),
            impact_force: if is_collision { "Moderate" } else { "N/A" }.to_string(),
            weather_condition: "Clear".to_string(),
            road_condition: "Dry".to_string(),
            ai_confidence: "94%".to_string(),
        },
    }
}

/// Parse a full listing and reverse it: the server returns oldest-first,
/// display wants newest-first.
pub fn parse_listing(filenames: &[String], base_url: &str) -> Vec<IncidentRecord> {
    let mut records: Vec<IncidentRecord> = filenames
        .iter()
        .enumerate()
        .map(|(index, name)| parse_filename(name, index, base_url))
        .collect();
    records.reverse();
    records
}

fn join_or_unknown(parts: &[&str], from: usize, to: usize) -> String {
    let joined = parts
        .get(from..to)
        .map(|segs| segs.join("_"))
        .unwrap_or_default();
    if joined.is_empty() {
        "unknown".to_string()
    } else {
        joined
    }
}

fn capitalize(raw: &str) -> String {
    let mut chars = raw.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Display transform for the raw timestamp token: every `-` becomes `:`,
/// then the first two `:` are turned back into `-`. Quirky, but it is what
/// the table has always shown.
fn display_timestamp(raw: &str) -> String {
    let swapped = raw.replace('-', ":");
    let mut out = String::with_capacity(swapped.len());
    let mut restored = 0;
    for c in swapped.chars() {
        if c == ':' && restored < 2 {
            out.push('-');
            restored += 1;
        } else {
            out.push(c);
        }
    }
    out
}
