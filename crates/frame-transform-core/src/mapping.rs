//! Point mapping: apply a computed [`FrameTransform`] to landmark
//! coordinates, one at a time or in batches.
//!
//! These are the per-frame hot paths. Both variants are pure and share no
//! mutable state, so concurrent callers with different matrices need no
//! synchronization.

use nalgebra::Point2;

use crate::transform::FrameTransform;

/// Map a single source-space point into target space.
#[inline]
pub fn map_point(transform: &FrameTransform, point: Point2<f32>) -> Point2<f32> {
    transform.apply(point)
}

/// Map a batch of points, preserving order and cardinality.
#[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip_all, fields(n = points.len())))]
pub fn map_points(transform: &FrameTransform, points: &[Point2<f32>]) -> Vec<Point2<f32>> {
    points.iter().map(|&p| transform.apply(p)).collect()
}

/// Batch variant writing into a caller-owned buffer.
///
/// The buffer is cleared first; per-frame callers can reuse it to keep the
/// render loop allocation-free.
pub fn map_points_into(
    transform: &FrameTransform,
    points: &[Point2<f32>],
    out: &mut Vec<Point2<f32>>,
) {
    out.clear();
    out.extend(points.iter().map(|&p| transform.apply(p)));
}
