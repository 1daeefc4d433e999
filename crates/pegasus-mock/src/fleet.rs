//! Synthetic camera fleet per region.
//!
//! Eight nodes per district. The first is defected, the second partially
//! damaged, the rest active, so every region demonstrates the full status
//! range. All per-node fields derive from a region-keyed seed, so the same
//! (state, district) pair always yields the same fleet.

use crate::rng::SplitMix64;
use pegasus_core::geo::district_center;
use pegasus_core::{Camera, CameraStatus, GeoPoint};

const FLEET_SIZE: u32 = 8;
const ACTIVE_GRADES: [&str; 3] = ["A+", "A", "A-"];

/// Fallback center when the region is unknown (Bengaluru Urban)
const DEFAULT_CENTER: GeoPoint = GeoPoint { lat: 12.9716, lng: 77.5946 };

/// Derive a per-region stream from the base seed
fn region_seed(seed: u64, state: &str, district: &str) -> u64 {
    let mut hasher = blake3::Hasher::new();
    hasher.update(&seed.to_le_bytes());
    hasher.update(state.as_bytes());
    hasher.update(b"/");
    hasher.update(district.as_bytes());
    let digest = hasher.finalize();
    u64::from_le_bytes(digest.as_bytes()[..8].try_into().unwrap_or([0; 8]))
}

pub fn generate_fleet(state: &str, district: &str, seed: u64) -> Vec<Camera> {
    let center = district_center(state, district).unwrap_or(DEFAULT_CENTER);
    let mut rng = SplitMix64::new(region_seed(seed, state, district));

    (0..FLEET_SIZE)
        .map(|i| {
            let status = match i {
                0 => CameraStatus::Defected,
                1 => CameraStatus::PartiallyDamaged,
                _ => CameraStatus::Active,
            };
            Camera {
                id: format!("CAM-{:03}", i + 1),
                name: format!("{} Junction {}", district, i + 1),
                lat: center.lat + (rng.next_f64() - 0.5) * 0.06,
                lng: center.lng + (rng.next_f64() - 0.5) * 0.06,
                health: match status {
                    CameraStatus::Active => ACTIVE_GRADES[rng.below(3) as usize].to_string(),
                    CameraStatus::PartiallyDamaged => "C".to_string(),
                    CameraStatus::Defected => "F".to_string(),
                },
                uptime: match status {
                    CameraStatus::Defected => "0%".to_string(),
                    CameraStatus::PartiallyDamaged => "65%".to_string(),
                    CameraStatus::Active => format!("{:.1}%", 95.0 + rng.next_f64() * 4.9),
                },
                signal: match status {
                    CameraStatus::Defected => 0,
                    CameraStatus::PartiallyDamaged => 45,
                    CameraStatus::Active => 85 + rng.below(15),
                },
                temp: match status {
                    CameraStatus::Defected => "CRITICAL".to_string(),
                    CameraStatus::PartiallyDamaged => "48°C".to_string(),
                    CameraStatus::Active => format!("{:.0}°C", 35.0 + rng.next_f64() * 8.0),
                },
                firmware: if status == CameraStatus::Defected {
                    "OFFLINE".to_string()
                } else {
                    format!("v{}.{}.{}", 2 + rng.below(3), rng.below(10), rng.below(10))
                },
                status,
            }
        })
        .collect()
}
