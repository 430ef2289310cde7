//! Round-trip validation: sample a deterministic point grid, push it through
//! a forward and an inverse transform, and check it lands back where it
//! started. Used as the acceptance oracle for computed transforms.

use nalgebra::Point2;

use crate::config::FrameSize;
use crate::transform::FrameTransform;

/// Deterministic `(density + 1)²` lattice spanning the frame, borders
/// included. `density = 10` yields 121 points.
///
/// A `density` of 0 degenerates to the single top-left corner.
pub fn grid_points(size: FrameSize, density: u32) -> Vec<Point2<f32>> {
    let n = density as usize;
    let step_x = size.width as f32 / density.max(1) as f32;
    let step_y = size.height as f32 / density.max(1) as f32;

    let mut points = Vec::with_capacity((n + 1) * (n + 1));
    for j in 0..=n {
        for i in 0..=n {
            points.push(Point2::new(i as f32 * step_x, j as f32 * step_y));
        }
    }
    points
}

/// Largest forward-then-inverse deviation over `points`, in pixels.
///
/// Returns `None` when any mapped coordinate is non-finite, which is how a
/// singular or degenerate matrix pair surfaces instead of silently
/// propagating NaN.
pub fn round_trip_error(
    forward: &FrameTransform,
    inverse: &FrameTransform,
    points: &[Point2<f32>],
) -> Option<f32> {
    let mut worst = 0.0_f32;
    for &p in points {
        let back = inverse.apply(forward.apply(p));
        if !back.x.is_finite() || !back.y.is_finite() {
            return None;
        }
        let err = (back.x - p.x).hypot(back.y - p.y);
        worst = worst.max(err);
    }
    Some(worst)
}

/// True iff every sampled point survives forward∘inverse within
/// `tolerance` pixels.
pub fn validate_round_trip(
    forward: &FrameTransform,
    inverse: &FrameTransform,
    points: &[Point2<f32>],
    tolerance: f32,
) -> bool {
    match round_trip_error(forward, inverse, points) {
        Some(err) => err <= tolerance,
        None => false,
    }
}
