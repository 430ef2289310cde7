//! Landmark-to-overlay mapping.
//!
//! [`OverlayMapper`] precomputes the forward and inverse matrices for one
//! configuration so the per-frame loop only pays for point mapping. Rebuild
//! it whenever the configuration changes (device rotation, camera switch,
//! surface resize) — it observes nothing itself.

use nalgebra::Point2;

use frame_transform_core::{
    compute_transform, map_point, map_points, FrameTransform, TransformConfig, TransformResult,
};

/// Errors building an [`OverlayMapper`].
#[derive(thiserror::Error, Debug)]
pub enum OverlayError {
    #[error("source or target size has a non-positive dimension")]
    InvalidConfig,
    #[error("computed transform is not invertible")]
    NotInvertible,
}

/// Precomputed forward/inverse transform pair for one configuration.
#[derive(Clone, Copy, Debug)]
pub struct OverlayMapper {
    forward: FrameTransform,
    inverse: FrameTransform,
    result: TransformResult,
}

impl OverlayMapper {
    pub fn new(config: &TransformConfig) -> Result<Self, OverlayError> {
        let result = compute_transform(config);
        if !result.valid {
            return Err(OverlayError::InvalidConfig);
        }
        let inverse = result.matrix.inverse().ok_or(OverlayError::NotInvertible)?;
        Ok(Self {
            forward: result.matrix,
            inverse,
            result,
        })
    }

    /// Map one detected landmark from sensor space into overlay space.
    #[inline]
    pub fn map(&self, landmark: Point2<f32>) -> Point2<f32> {
        map_point(&self.forward, landmark)
    }

    /// Map a full landmark set, preserving order.
    pub fn map_all(&self, landmarks: &[Point2<f32>]) -> Vec<Point2<f32>> {
        map_points(&self.forward, landmarks)
    }

    /// Map an overlay-space point back into sensor space (hit testing).
    #[inline]
    pub fn unmap(&self, point: Point2<f32>) -> Point2<f32> {
        map_point(&self.inverse, point)
    }

    pub fn forward(&self) -> &FrameTransform {
        &self.forward
    }

    pub fn inverse(&self) -> &FrameTransform {
        &self.inverse
    }

    /// The metrics of the underlying computed transform.
    pub fn result(&self) -> &TransformResult {
        &self.result
    }
}
