//! Maps a winning index onto wheel geometry.
//!
//! Segment `i` occupies `[i * sector, (i + 1) * sector)` degrees measured
//! clockwise from the pointer, in configuration order. The canvas renderer
//! lays the wheel out the same way, so any reordering must go through both.

use serde::{Deserialize, Serialize};

use crate::constants::FULL_ROTATIONS;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct RotationPlan {
    pub sector_angle: f64,
    /// Centre of the winning sector, in layout degrees.
    pub target_angle: f64,
    /// Clockwise rotation, in degrees, that leaves the target under the pointer.
    pub final_rotation: f64,
}

pub fn sector_angle(segment_count: usize) -> f64 {
    360.0 / segment_count as f64
}

pub fn plan_rotation(segment_count: usize, winner_index: usize, full_rotations: u32) -> RotationPlan {
    let sector = sector_angle(segment_count);
    let target_angle = winner_index as f64 * sector + sector / 2.0;
    RotationPlan {
        sector_angle: sector,
        target_angle,
        final_rotation: full_rotations as f64 * 360.0 + (360.0 - target_angle),
    }
}

pub fn default_plan(segment_count: usize, winner_index: usize) -> RotationPlan {
    plan_rotation(segment_count, winner_index, FULL_ROTATIONS)
}

/// Index of the segment sitting under the pointer after rotating the wheel
/// clockwise by `rotation` degrees.
pub fn segment_under_pointer(segment_count: usize, rotation: f64) -> Option<usize> {
    if segment_count == 0 || !rotation.is_finite() {
        return None;
    }
    let layout_angle = (-rotation).rem_euclid(360.0);
    let index = (layout_angle / sector_angle(segment_count)).floor() as usize;
    Some(index.min(segment_count - 1))
}

// Decelerating curve: 1 - (1-t)^4
pub fn ease_out(progress: f64) -> f64 {
    let t = progress.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(4)
}

pub fn animated_rotation(start: f64, end: f64, elapsed_ms: f64, duration_ms: f64) -> f64 {
    if duration_ms <= 0.0 {
        return end;
    }
    start + (end - start) * ease_out(elapsed_ms / duration_ms)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_for_default_wheel() {
        let plan = plan_rotation(8, 0, 5);
        assert_eq!(plan.sector_angle, 45.0);
        assert_eq!(plan.target_angle, 22.5);
        assert_eq!(plan.final_rotation, 1800.0 + 337.5);

        let last = plan_rotation(8, 7, 5);
        assert_eq!(last.target_angle, 337.5);
        assert_eq!(last.final_rotation, 1822.5);
    }

    #[test]
    fn test_pointer_lands_on_winner() {
        for count in 3..=12 {
            for index in 0..count {
                let plan = default_plan(count, index);
                assert_eq!(segment_under_pointer(count, plan.final_rotation), Some(index));
            }
        }
    }

    #[test]
    fn test_pointer_at_rest() {
        assert_eq!(segment_under_pointer(8, 0.0), Some(0));
        assert_eq!(segment_under_pointer(8, 10.0), Some(7));
        assert_eq!(segment_under_pointer(0, 10.0), None);
    }

    #[test]
    fn test_ease_out_endpoints() {
        assert_eq!(ease_out(0.0), 0.0);
        assert_eq!(ease_out(1.0), 1.0);
        assert_eq!(ease_out(2.0), 1.0);
        assert!(ease_out(0.5) > 0.5);
    }

    #[test]
    fn test_animated_rotation() {
        assert_eq!(animated_rotation(0.0, 720.0, 0.0, 5000.0), 0.0);
        assert_eq!(animated_rotation(0.0, 720.0, 5000.0, 5000.0), 720.0);
        assert_eq!(animated_rotation(0.0, 720.0, 9000.0, 5000.0), 720.0);
        assert_eq!(animated_rotation(0.0, 720.0, 10.0, 0.0), 720.0);
    }
}
