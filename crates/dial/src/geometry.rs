use crate::error::WheelError;
use serde::{Deserialize, Serialize};
use std::f64::consts::{PI, TAU};

pub const SEGMENT_COUNT: usize = 10;
pub const SEGMENT_ANGLE: f64 = TAU / SEGMENT_COUNT as f64;
/// Seconds of velocity projected forward when picking a snap point.
pub const SNAP_PROJECTION: f64 = 0.05;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Reduces any angle to `[0, TAU)`.
///
/// `f64::rem_euclid` can return exactly `TAU` for tiny negative inputs, so the
/// wrap is done by hand. Values already in range come back bit-for-bit.
pub fn normalize_angle(angle: f64) -> f64 {
    let rem = angle % TAU;
    let rem = if rem < 0.0 { rem + TAU } else { rem };
    if rem >= TAU { 0.0 } else { rem }
}

/// Angle of `pointer` around `center`, counter-clockwise positive.
///
/// Screen Y grows downward, so the vertical component is flipped.
pub fn pointer_angle(center: Point, pointer: Point) -> f64 {
    let (dx, dy) = (pointer.x - center.x, -(pointer.y - center.y));
    dy.atan2(dx)
}

/// Folds a difference of two normalized angles into `[-PI, PI]` so a drag
/// across the 0/TAU seam moves the short way round.
pub fn unwrap_delta(delta: f64) -> f64 {
    if delta.abs() > PI {
        if delta > 0.0 { delta - TAU } else { delta + TAU }
    } else {
        delta
    }
}

/// Whole turns contained in `angle`, as an angle.
pub fn full_turns(angle: f64) -> f64 {
    (angle / TAU).floor() * TAU
}

pub fn segment_center(index: usize) -> f64 {
    normalize_angle(index as f64 * SEGMENT_ANGLE + SEGMENT_ANGLE / 2.0)
}

pub fn snap_points() -> [f64; SEGMENT_COUNT] {
    std::array::from_fn(segment_center)
}

/// Picks the point closest to `value` projected along `velocity`. The first
/// candidate wins a tie.
pub fn snap_point(value: f64, velocity: f64, points: &[f64]) -> Result<f64, WheelError> {
    let projected = value + SNAP_PROJECTION * velocity;
    if !projected.is_finite() {
        return Err(WheelError::NonFiniteAngle);
    }

    points
        .iter()
        .copied()
        .min_by(|a, b| (projected - a).abs().total_cmp(&(projected - b).abs()))
        .ok_or(WheelError::EmptySnapSet)
}

/// `max(lower, min(value, upper))`. Unlike `f64::clamp` this never panics
/// when the bounds are inverted.
pub fn clamp(value: f64, lower: f64, upper: f64) -> f64 {
    lower.max(value.min(upper))
}

/// Overscroll resistance curve borrowed from Flutter's scroll physics.
pub fn friction(overscroll_fraction: f64) -> f64 {
    0.52 * (1.0 - overscroll_fraction).powi(2)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn circular_distance(a: f64, b: f64) -> f64 {
        let d = (a - b).abs() % TAU;
        d.min(TAU - d)
    }

    #[test]
    fn test_normalize_range() {
        let inputs = [
            0.0, 1.0, -1.0, TAU, -TAU, 3.5 * TAU, -7.25 * TAU, 1e6, -1e6, -1e-17, PI,
        ];
        for a in inputs {
            let n = normalize_angle(a);
            assert!((0.0..TAU).contains(&n), "normalize({a}) = {n}");
        }
    }

    #[test]
    fn test_normalize_periodic() {
        for a in [0.3, -2.1, 5.9, 12.0, -40.0] {
            for k in -5..=5 {
                let shifted = normalize_angle(a + k as f64 * TAU);
                assert!(circular_distance(shifted, normalize_angle(a)) < EPS);
            }
        }
    }

    #[test]
    fn test_normalize_idempotent() {
        for a in [0.0, 0.1, -0.1, 6.28, -123.456, 1e9, -1e-17] {
            let once = normalize_angle(a);
            assert_eq!(normalize_angle(once), once);
        }
    }

    #[test]
    fn test_normalize_negative() {
        assert!((normalize_angle(-PI / 2.0) - 1.5 * PI).abs() < EPS);
        assert_eq!(normalize_angle(-1e-17), 0.0);
    }

    #[test]
    fn test_normalize_propagates_nan() {
        assert!(normalize_angle(f64::NAN).is_nan());
    }

    #[test]
    fn test_pointer_angle_screen_axes() {
        let c = Point::new(100.0, 100.0);
        assert!(pointer_angle(c, Point::new(150.0, 100.0)).abs() < EPS);
        // above the center on screen is +90 degrees
        assert!((pointer_angle(c, Point::new(100.0, 50.0)) - PI / 2.0).abs() < EPS);
        assert!((pointer_angle(c, Point::new(100.0, 150.0)) + PI / 2.0).abs() < EPS);
    }

    #[test]
    fn test_unwrap_delta_stays_within_half_turn() {
        assert!((unwrap_delta(TAU - 0.1) + 0.1).abs() < EPS);
        assert!((unwrap_delta(-(TAU - 0.1)) - 0.1).abs() < EPS);
        assert_eq!(unwrap_delta(1.0), 1.0);
        assert_eq!(unwrap_delta(PI), PI);
    }

    #[test]
    fn test_full_turns() {
        assert_eq!(full_turns(0.5), 0.0);
        assert!((full_turns(3.0 * TAU + 0.2) - 3.0 * TAU).abs() < EPS);
        assert!((full_turns(-0.2) + TAU).abs() < EPS);
    }

    #[test]
    fn test_snap_points_are_segment_centers() {
        let points = snap_points();
        assert!((points[0] - PI / 10.0).abs() < EPS);
        assert!((points[9] - (TAU - PI / 10.0)).abs() < EPS);
        for w in points.windows(2) {
            assert!((w[1] - w[0] - SEGMENT_ANGLE).abs() < EPS);
        }
    }

    #[test]
    fn test_snap_point_idempotent_at_points() {
        let points = snap_points();
        for p in points {
            assert_eq!(snap_point(p, 0.0, &points), Ok(p));
        }
    }

    #[test]
    fn test_snap_point_tie_takes_first() {
        assert_eq!(snap_point(1.0, 0.0, &[0.5, 1.5]), Ok(0.5));
        assert_eq!(snap_point(1.0, 0.0, &[1.5, 0.5]), Ok(1.5));
    }

    #[test]
    fn test_snap_point_projects_velocity() {
        // 0.9 + 0.05 * 10 = 1.4
        assert_eq!(snap_point(0.9, 10.0, &[0.5, 1.5]), Ok(1.5));
    }

    #[test]
    fn test_snap_point_errors() {
        assert_eq!(snap_point(1.0, 0.0, &[]), Err(WheelError::EmptySnapSet));
        assert_eq!(
            snap_point(f64::NAN, 0.0, &snap_points()),
            Err(WheelError::NonFiniteAngle)
        );
    }

    #[test]
    fn test_clamp_and_friction() {
        assert_eq!(clamp(5.0, 0.0, 1.0), 1.0);
        assert_eq!(clamp(-5.0, 0.0, 1.0), 0.0);
        assert_eq!(clamp(0.5, 0.0, 1.0), 0.5);
        assert_eq!(clamp(0.5, 1.0, 0.0), 1.0);
        assert!((friction(0.0) - 0.52).abs() < EPS);
        assert_eq!(friction(1.0), 0.0);
        assert!((friction(0.5) - 0.13).abs() < EPS);
    }
}
