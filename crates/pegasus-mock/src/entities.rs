//! Fixed emergency and maintenance fixtures seeding the official's board.

use pegasus_core::{
    EmergencyAlert, EmergencyKind, GeoPoint, OfficialTask, TaskKind, TaskStatus,
};

pub fn mock_emergencies() -> Vec<EmergencyAlert> {
    vec![
        EmergencyAlert {
            id: "EMG-101".to_string(),
            kind: EmergencyKind::Accident,
            location: GeoPoint { lat: 12.9850, lng: 77.6050 },
            address: "MG Road Junction, Bangalore".to_string(),
            description: "Multi-vehicle collision reported by AI Node 42".to_string(),
        },
        EmergencyAlert {
            id: "EMG-102".to_string(),
            kind: EmergencyKind::Accident,
            location: GeoPoint { lat: 12.9340, lng: 77.6101 },
            address: "Koramangala 5th Block".to_string(),
            description: "Pedestrian incident at intersection".to_string(),
        },
        EmergencyAlert {
            id: "EMG-103".to_string(),
            kind: EmergencyKind::Fire,
            location: GeoPoint { lat: 12.9500, lng: 77.5800 },
            address: "Lalbagh West Gate".to_string(),
            description: "Electrical fire detected in local substation".to_string(),
        },
    ]
}

pub fn mock_maintenance() -> Vec<OfficialTask> {
    vec![
        OfficialTask {
            id: "MNT-402".to_string(),
            camera_id: "CAM-402".to_string(),
            camera_name: "Indiranagar 100ft Rd Node".to_string(),
            location: GeoPoint { lat: 12.9719, lng: 77.6412 },
            kind: TaskKind::Repair,
            status: TaskStatus::Pending,
            assigned_at: "Today, 10:15 AM".to_string(),
            completed_at: None,
        },
        OfficialTask {
            id: "MNT-415".to_string(),
            camera_id: "CAM-415".to_string(),
            camera_name: "Whitefield Main St Crossing".to_string(),
            location: GeoPoint { lat: 12.9698, lng: 77.7499 },
            kind: TaskKind::Repair,
            status: TaskStatus::Pending,
            assigned_at: "Today, 11:30 AM".to_string(),
            completed_at: None,
        },
    ]
}
