//! Transform computation: from a [`TransformConfig`] to the affine matrix
//! mapping source pixels onto the target surface.

use log::warn;
use nalgebra::{Matrix3, Point2, Vector3};
use serde::{Deserialize, Serialize};

use crate::config::{CropRect, FitMode, FrameSize, MirrorMode, TransformConfig};
use crate::rotation::normalize_rotation;

/// 2D affine transform between pixel spaces.
///
/// Stored as a full 3×3 matrix with an affine last row. Points are `f32`
/// (sub-pixel landmark coordinates), the matrix is `f64`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FrameTransform {
    pub m: Matrix3<f64>,
}

impl FrameTransform {
    pub fn new(m: Matrix3<f64>) -> Self {
        Self { m }
    }

    pub fn identity() -> Self {
        Self::new(Matrix3::identity())
    }

    pub fn zero() -> Self {
        Self::new(Matrix3::zeros())
    }

    pub fn from_array(rows: [[f64; 3]; 3]) -> Self {
        Self::new(Matrix3::from_row_slice(&[
            rows[0][0], rows[0][1], rows[0][2], rows[1][0], rows[1][1], rows[1][2], rows[2][0],
            rows[2][1], rows[2][2],
        ]))
    }

    pub fn to_array(&self) -> [[f64; 3]; 3] {
        [
            [self.m[(0, 0)], self.m[(0, 1)], self.m[(0, 2)]],
            [self.m[(1, 0)], self.m[(1, 1)], self.m[(1, 2)]],
            [self.m[(2, 0)], self.m[(2, 1)], self.m[(2, 2)]],
        ]
    }

    /// Map one point from source space into target space.
    #[inline]
    pub fn apply(&self, p: Point2<f32>) -> Point2<f32> {
        let v = self.m * Vector3::new(p.x as f64, p.y as f64, 1.0);
        Point2::new(v[0] as f32, v[1] as f32)
    }

    /// The inverse transform, or `None` when the matrix is singular.
    pub fn inverse(&self) -> Option<Self> {
        self.m.try_inverse().map(Self::new)
    }

    /// All coefficients finite (no NaN/infinity leaked in).
    pub fn is_finite(&self) -> bool {
        self.m.iter().all(|c| c.is_finite())
    }
}

/// Output of [`compute_transform`]: the matrix plus derived metrics.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransformResult {
    pub matrix: FrameTransform,
    /// Net clockwise rotation of the frame, in `[0, 360)`. Sum of display
    /// and sensor rotation; independent of facing.
    pub effective_rotation: i32,
    pub scale_x: f32,
    pub scale_y: f32,
    /// Present only for [`FitMode::CenterCrop`].
    pub crop_rect: Option<CropRect>,
    /// False when the configuration cannot yield a well-defined transform
    /// (non-positive dimensions). Check before using the matrix.
    pub valid: bool,
}

impl TransformResult {
    fn invalid(effective_rotation: i32) -> Self {
        Self {
            matrix: FrameTransform::zero(),
            effective_rotation,
            scale_x: 1.0,
            scale_y: 1.0,
            crop_rect: None,
            valid: false,
        }
    }
}

// Exact trig at quarter turns keeps the identity configuration bit-exact
// and the compass cases free of 1e-16 noise.
fn rotation_trig(degrees: i32) -> (f64, f64) {
    match degrees {
        0 => (1.0, 0.0),
        90 => (0.0, 1.0),
        180 => (-1.0, 0.0),
        270 => (0.0, -1.0),
        d => {
            let r = f64::from(d).to_radians();
            (r.cos(), r.sin())
        }
    }
}

/// Compute the affine mapping described by `config`.
///
/// The matrix composes, in order: translation of the source center to the
/// origin, rotation by the effective rotation, fit-policy scaling, the
/// mirror axis flip, and translation to the target center. Invalid sizes
/// produce `valid = false` with a zero matrix instead of panicking; the
/// surface may simply not be laid out yet.
#[cfg_attr(feature = "tracing", tracing::instrument(level = "debug", skip_all))]
pub fn compute_transform(config: &TransformConfig) -> TransformResult {
    let effective_rotation =
        normalize_rotation(config.display_rotation + config.sensor_orientation);

    if !config.is_valid() {
        warn!(
            "transform config rejected: source {}x{}, target {}x{}",
            config.source_size.width,
            config.source_size.height,
            config.target_size.width,
            config.target_size.height
        );
        return TransformResult::invalid(effective_rotation);
    }

    let swaps_axes = effective_rotation == 90 || effective_rotation == 270;
    let eff_source = if swaps_axes {
        config.source_size.transposed()
    } else {
        config.source_size
    };

    let (sw, sh) = (
        f64::from(config.source_size.width),
        f64::from(config.source_size.height),
    );
    let (ew, eh) = (f64::from(eff_source.width), f64::from(eff_source.height));
    let (tw, th) = (
        f64::from(config.target_size.width),
        f64::from(config.target_size.height),
    );

    let (scale_x, scale_y, crop_rect) = match config.fit_mode {
        FitMode::Fill => (tw / ew, th / eh, None),
        FitMode::CenterCrop => {
            let s = (tw / ew).max(th / eh);
            (s, s, Some(centered_crop(config.source_size, s, tw, th, swaps_axes)))
        }
        FitMode::CenterInside => {
            let s = (tw / ew).min(th / eh);
            (s, s, None)
        }
    };

    let (mirror_x, mirror_y) = match config.mirror_mode {
        MirrorMode::None => (1.0, 1.0),
        MirrorMode::Horizontal => (-1.0, 1.0),
        MirrorMode::Vertical => (1.0, -1.0),
        MirrorMode::Auto if config.front_facing => (-1.0, 1.0),
        MirrorMode::Auto => (1.0, 1.0),
    };

    let (cos, sin) = rotation_trig(effective_rotation);

    let center_source = Matrix3::new(1.0, 0.0, -sw / 2.0, 0.0, 1.0, -sh / 2.0, 0.0, 0.0, 1.0);
    let rotate = Matrix3::new(cos, -sin, 0.0, sin, cos, 0.0, 0.0, 0.0, 1.0);
    let scale = Matrix3::new(scale_x, 0.0, 0.0, 0.0, scale_y, 0.0, 0.0, 0.0, 1.0);
    let mirror = Matrix3::new(mirror_x, 0.0, 0.0, 0.0, mirror_y, 0.0, 0.0, 0.0, 1.0);
    let center_target = Matrix3::new(1.0, 0.0, tw / 2.0, 0.0, 1.0, th / 2.0, 0.0, 0.0, 1.0);

    let m = center_target * mirror * scale * rotate * center_source;

    TransformResult {
        matrix: FrameTransform::new(m),
        effective_rotation,
        scale_x: scale_x as f32,
        scale_y: scale_y as f32,
        crop_rect,
        valid: true,
    }
}

/// Source-space region that survives a `CenterCrop` fit at scale `s`.
///
/// The visible extent is computed in post-rotation axes and swapped back
/// into unrotated source axes when the rotation swapped them.
fn centered_crop(source: FrameSize, s: f64, tw: f64, th: f64, swaps_axes: bool) -> CropRect {
    let (sw, sh) = (f64::from(source.width), f64::from(source.height));
    let (ew, eh) = if swaps_axes { (sh, sw) } else { (sw, sh) };

    let visible_w = (tw / s).min(ew);
    let visible_h = (th / s).min(eh);
    let (crop_w, crop_h) = if swaps_axes {
        (visible_h, visible_w)
    } else {
        (visible_w, visible_h)
    };

    CropRect {
        x: ((sw - crop_w) / 2.0) as f32,
        y: ((sh - crop_h) / 2.0) as f32,
        width: crop_w as f32,
        height: crop_h as f32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: Point2<f32>, b: Point2<f32>, tol: f32) {
        let dx = (a.x - b.x).abs();
        let dy = (a.y - b.y).abs();
        assert!(
            dx < tol && dy < tol,
            "expected ({:.4},{:.4}) ~ ({:.4},{:.4}) within {}",
            a.x,
            a.y,
            b.x,
            b.y,
            tol
        );
    }

    fn config(source: (u32, u32), target: (u32, u32)) -> TransformConfig {
        let mut cfg = TransformConfig::new(
            FrameSize::new(source.0, source.1),
            FrameSize::new(target.0, target.1),
        );
        cfg.mirror_mode = MirrorMode::None;
        cfg
    }

    #[test]
    fn identity_configuration_yields_identity_matrix() {
        let result = compute_transform(&config((640, 480), (640, 480)));
        assert!(result.valid);
        assert_eq!(result.effective_rotation, 0);
        assert_eq!(result.scale_x, 1.0);
        assert_eq!(result.scale_y, 1.0);
        assert_eq!(result.matrix, FrameTransform::identity());
        assert!(result.crop_rect.is_none());
    }

    #[test]
    fn effective_rotation_sums_display_and_sensor() {
        let mut cfg = config((640, 480), (640, 480));
        cfg.sensor_orientation = 90;
        cfg.display_rotation = 90;
        assert_eq!(compute_transform(&cfg).effective_rotation, 180);
    }

    #[test]
    fn effective_rotation_is_facing_independent() {
        let mut cfg = config((640, 480), (480, 640));
        cfg.sensor_orientation = 270;
        cfg.display_rotation = 180;
        cfg.front_facing = true;
        assert_eq!(compute_transform(&cfg).effective_rotation, 90);
        cfg.front_facing = false;
        assert_eq!(compute_transform(&cfg).effective_rotation, 90);
    }

    #[test]
    fn arbitrary_rotation_inputs_are_normalized() {
        let mut cfg = config((640, 480), (640, 480));
        cfg.display_rotation = -90;
        assert_eq!(compute_transform(&cfg).effective_rotation, 270);
        cfg.display_rotation = 0;
        cfg.sensor_orientation = 450;
        assert_eq!(compute_transform(&cfg).effective_rotation, 90);
    }

    #[test]
    fn quarter_turn_swaps_axes_for_fill_scaling() {
        let mut cfg = config((640, 480), (480, 640));
        cfg.display_rotation = 90;
        let result = compute_transform(&cfg);
        assert_eq!(result.effective_rotation, 90);
        assert_eq!(result.scale_x, 1.0);
        assert_eq!(result.scale_y, 1.0);
        // Source origin lands on the target's top-right corner under a
        // clockwise quarter turn.
        assert_close(
            result.matrix.apply(Point2::new(0.0, 0.0)),
            Point2::new(480.0, 0.0),
            1e-4,
        );
    }

    #[test]
    fn fill_scales_axes_independently() {
        let result = compute_transform(&config((640, 480), (320, 480)));
        assert_eq!(result.scale_x, 0.5);
        assert_eq!(result.scale_y, 1.0);
        assert!(result.crop_rect.is_none());
    }

    #[test]
    fn center_crop_uses_max_scale_and_reports_crop() {
        let mut cfg = config((640, 480), (480, 480));
        cfg.fit_mode = FitMode::CenterCrop;
        let result = compute_transform(&cfg);
        assert_eq!(result.scale_x, result.scale_y);
        assert_eq!(result.scale_x, 1.0);

        let crop = result.crop_rect.expect("center crop reports a crop rect");
        assert_eq!(crop.x, 80.0);
        assert_eq!(crop.y, 0.0);
        assert_eq!(crop.width, 480.0);
        assert_eq!(crop.height, 480.0);
    }

    #[test]
    fn center_crop_rect_swaps_back_under_rotation() {
        let mut cfg = config((640, 480), (480, 480));
        cfg.fit_mode = FitMode::CenterCrop;
        cfg.display_rotation = 90;
        let crop = compute_transform(&cfg).crop_rect.expect("crop rect");
        // Visible square is 480x480 in rotated axes, which is 480x480 in
        // source axes too; it stays centered horizontally.
        assert_eq!(crop.x, 80.0);
        assert_eq!(crop.y, 0.0);
        assert_eq!(crop.width, 480.0);
        assert_eq!(crop.height, 480.0);
    }

    #[test]
    fn center_inside_uses_min_scale_without_crop() {
        let mut cfg = config((640, 480), (480, 480));
        cfg.fit_mode = FitMode::CenterInside;
        let result = compute_transform(&cfg);
        assert_eq!(result.scale_x, result.scale_y);
        assert_eq!(result.scale_x, 0.75);
        assert!(result.crop_rect.is_none());
        // Letterboxed content is centered: the frame center maps to the
        // target center.
        assert_close(
            result.matrix.apply(Point2::new(320.0, 240.0)),
            Point2::new(240.0, 240.0),
            1e-4,
        );
    }

    #[test]
    fn degenerate_source_stays_finite() {
        let mut cfg = config((1, 1), (640, 480));
        cfg.fit_mode = FitMode::CenterInside;
        let result = compute_transform(&cfg);
        assert!(result.valid);
        assert_eq!(result.scale_x, result.scale_y);
        assert!(result.scale_x > 0.0 && result.scale_x.is_finite());
        assert!(result.matrix.is_finite());
    }

    #[test]
    fn non_positive_dimensions_invalidate_the_result() {
        let result = compute_transform(&config((0, 480), (640, 480)));
        assert!(!result.valid);
        assert_eq!(result.matrix, FrameTransform::zero());
        assert!(result.crop_rect.is_none());
        assert!(result.scale_x > 0.0 && result.scale_y > 0.0);

        let result = compute_transform(&config((640, 480), (640, 0)));
        assert!(!result.valid);
    }

    #[test]
    fn horizontal_mirror_reflects_about_target_center() {
        let mut cfg = config((640, 480), (640, 480));
        cfg.mirror_mode = MirrorMode::Horizontal;
        let result = compute_transform(&cfg);
        let mapped = result.matrix.apply(Point2::new(0.2 * 640.0, 100.0));
        assert_close(mapped, Point2::new(640.0 - 0.2 * 640.0, 100.0), 1e-4);
    }

    #[test]
    fn auto_mirror_applies_only_to_front_cameras() {
        let mut cfg = config((640, 480), (640, 480));
        cfg.mirror_mode = MirrorMode::Auto;
        cfg.front_facing = true;
        let front = compute_transform(&cfg);
        assert_close(
            front.matrix.apply(Point2::new(128.0, 100.0)),
            Point2::new(512.0, 100.0),
            1e-4,
        );

        cfg.front_facing = false;
        let back = compute_transform(&cfg);
        assert_eq!(back.matrix, FrameTransform::identity());
    }

    #[test]
    fn inverse_round_trips_points() {
        let mut cfg = config((1280, 720), (1080, 1920));
        cfg.fit_mode = FitMode::CenterCrop;
        cfg.display_rotation = 90;
        cfg.front_facing = true;
        cfg.mirror_mode = MirrorMode::Auto;

        let result = compute_transform(&cfg);
        let forward = result.matrix;
        let inverse = forward.inverse().expect("invertible");

        for p in [
            Point2::new(0.0_f32, 0.0),
            Point2::new(640.0, 360.0),
            Point2::new(1280.0, 720.0),
            Point2::new(17.5, 693.25),
        ] {
            assert_close(inverse.apply(forward.apply(p)), p, 1e-2);
        }
    }

    #[test]
    fn zero_matrix_has_no_inverse() {
        assert!(FrameTransform::zero().inverse().is_none());
    }

    #[test]
    fn array_round_trip() {
        let rows = [[0.0, -1.0, 480.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]];
        assert_eq!(FrameTransform::from_array(rows).to_array(), rows);
    }
}
