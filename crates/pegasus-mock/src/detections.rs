//! Synthetic per-frame detection output for the playback overlay.
//!
//! Mimics the shape of a real inference pass: bounding boxes with class,
//! confidence, speed and track id, occasional violation markers, and the
//! HUD statistics derived from them.

use crate::rng::SplitMix64;
use pegasus_core::{
    Detection, FrameAnalysis, FrameStats, Violation, ViolationKind, ViolationSeverity,
};

const CLASSES: [&str; 6] = ["car", "truck", "bus", "motorcycle", "person", "bicycle"];

const VIOLATION_KINDS: [ViolationKind; 4] = [
    ViolationKind::RedLight,
    ViolationKind::NoHelmet,
    ViolationKind::WrongWay,
    ViolationKind::Speeding,
];

fn class_color(class: &str) -> &'static str {
    match class {
        "car" => "#00E8FF",
        "truck" => "#FFB800",
        "bus" => "#00FF85",
        "motorcycle" => "#FF1F8A",
        "person" => "#A855F7",
        "bicycle" => "#EC4899",
        _ => "#00E8FF",
    }
}

fn is_vehicle(class: &str) -> bool {
    matches!(class, "car" | "truck" | "bus" | "motorcycle")
}

pub fn generate_detections(width: f64, height: f64, seed: u64) -> FrameAnalysis {
    let mut rng = SplitMix64::new(seed);
    let count = 3 + rng.below(8);

    let mut detections = Vec::with_capacity(count as usize);
    let mut violations = Vec::new();

    for _ in 0..count {
        let class = CLASSES[rng.below(CLASSES.len() as u32) as usize];
        let x = rng.next_f64() * (width - 180.0) + 20.0;
        let y = rng.next_f64() * (height - 120.0) + 20.0;
        let w = rng.next_f64() * 100.0 + 100.0;
        let h = rng.next_f64() * 80.0 + 80.0;

        detections.push(Detection {
            x,
            y,
            w,
            h,
            label: class.to_string(),
            confidence: 0.75 + rng.next_f64() * 0.24,
            speed: if class == "person" { 0 } else { 20 + rng.below(60) },
            track_id: rng.below(1000),
            color: class_color(class).to_string(),
            is_violation: rng.chance(0.15),
        });

        if rng.chance(0.10) {
            violations.push(Violation {
                kind: VIOLATION_KINDS[rng.below(4) as usize],
                x: x + w / 2.0,
                y: y + h / 2.0,
                severity: if rng.chance(0.30) {
                    ViolationSeverity::Critical
                } else {
                    ViolationSeverity::Warning
                },
            });
        }
    }

    let stats = frame_stats(&detections, &violations);
    FrameAnalysis { detections, violations, stats }
}

fn frame_stats(detections: &[Detection], violations: &[Violation]) -> FrameStats {
    let vehicles = detections.iter().filter(|d| is_vehicle(&d.label)).count() as u32;
    let persons = detections.iter().filter(|d| d.label == "person").count() as u32;
    let avg_speed = if vehicles > 0 {
        let total: u32 = detections.iter().filter(|d| d.speed > 0).map(|d| d.speed).sum();
        (total as f64 / f64::from(vehicles)).round() as u32
    } else {
        0
    };
    let safety_index = 100u32.saturating_sub(violations.len() as u32 * 15);
    FrameStats {
        vehicles,
        persons,
        violations: violations.len() as u32,
        avg_speed,
        safety_index,
        system_status: if safety_index > 80 {
            "OPTIMAL".to_string()
        } else if safety_index > 60 {
            "WARNING".to_string()
        } else {
            "CRITICAL".to_string()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detection_count_and_box_bounds() {
        for seed in 0..20 {
            let frame = generate_detections(1920.0, 1080.0, seed);
            assert!((3..=10).contains(&frame.detections.len()));
            for d in &frame.detections {
                assert!(d.x >= 20.0 && d.x <= 1920.0 - 160.0);
                assert!(d.y >= 20.0 && d.y <= 1080.0 - 100.0);
                assert!((100.0..200.0).contains(&d.w));
                assert!((80.0..160.0).contains(&d.h));
                assert!((0.75..0.99).contains(&d.confidence));
                assert!(d.track_id < 1000);
            }
        }
    }

    #[test]
    fn test_persons_have_zero_speed_vehicles_do_not() {
        for seed in 0..20 {
            let frame = generate_detections(1280.0, 720.0, seed);
            for d in &frame.detections {
                if d.label == "person" {
                    assert_eq!(d.speed, 0);
                } else {
                    assert!((20..80).contains(&d.speed));
                }
            }
        }
    }

    #[test]
    fn test_colors_follow_class_palette() {
        let frame = generate_detections(1920.0, 1080.0, 3);
        for d in &frame.detections {
            assert_eq!(d.color, class_color(&d.label));
        }
    }

    #[test]
    fn test_stats_consistent_with_detections() {
        for seed in 0..20 {
            let frame = generate_detections(1920.0, 1080.0, seed);
            let vehicles = frame
                .detections
                .iter()
                .filter(|d| is_vehicle(&d.label))
                .count() as u32;
            assert_eq!(frame.stats.vehicles, vehicles);
            assert_eq!(frame.stats.violations, frame.violations.len() as u32);
            assert!(frame.stats.safety_index <= 100);
            let expected = if frame.stats.safety_index > 80 {
                "OPTIMAL"
            } else if frame.stats.safety_index > 60 {
                "WARNING"
            } else {
                "CRITICAL"
            };
            assert_eq!(frame.stats.system_status, expected);
        }
    }

    #[test]
    fn test_same_seed_same_frame() {
        let a = generate_detections(1920.0, 1080.0, 77);
        let b = generate_detections(1920.0, 1080.0, 77);
        assert_eq!(a.detections.len(), b.detections.len());
        for (x, y) in a.detections.iter().zip(&b.detections) {
            assert_eq!(x.x, y.x);
            assert_eq!(x.label, y.label);
            assert_eq!(x.track_id, y.track_id);
        }
    }
}
