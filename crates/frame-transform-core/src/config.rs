use serde::{Deserialize, Serialize};

/// Pixel dimensions of a camera frame or a display surface.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct FrameSize {
    pub width: u32,
    pub height: u32,
}

impl FrameSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Both dimensions strictly positive.
    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// The same size with axes swapped (a quarter-turn footprint).
    #[inline]
    pub fn transposed(self) -> Self {
        Self {
            width: self.height,
            height: self.width,
        }
    }

    pub fn aspect_ratio(self) -> f32 {
        self.width as f32 / self.height as f32
    }
}

/// Policy reconciling source and target aspect ratios.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FitMode {
    /// Scale each axis independently to exactly cover the target. May
    /// distort the aspect ratio.
    Fill,
    /// Uniform scale covering the whole target; content overflowing the
    /// target is cropped (the crop region is reported on the result).
    CenterCrop,
    /// Uniform scale fitting the whole frame inside the target
    /// (letterboxed). Nothing is cropped.
    CenterInside,
}

/// Coordinate flip applied on top of rotation and scaling.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MirrorMode {
    None,
    Horizontal,
    Vertical,
    /// Mirror horizontally for front-facing cameras, not at all otherwise.
    #[default]
    Auto,
}

/// Immutable input describing one source-frame to target-surface mapping.
///
/// Rotations are integer degrees; display rotation is conventionally one of
/// the four compass values but arbitrary integers are tolerated and
/// normalized, as is the sensor mounting angle.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransformConfig {
    pub source_size: FrameSize,
    pub target_size: FrameSize,
    /// Camera sensor mounting angle relative to the device's natural
    /// orientation, in degrees.
    #[serde(default)]
    pub sensor_orientation: i32,
    /// Current display rotation relative to natural orientation, in degrees.
    #[serde(default)]
    pub display_rotation: i32,
    #[serde(default)]
    pub front_facing: bool,
    pub fit_mode: FitMode,
    #[serde(default)]
    pub mirror_mode: MirrorMode,
}

impl TransformConfig {
    /// Upright back camera, `Fill` fit, automatic mirroring.
    pub fn new(source_size: FrameSize, target_size: FrameSize) -> Self {
        Self {
            source_size,
            target_size,
            sensor_orientation: 0,
            display_rotation: 0,
            front_facing: false,
            fit_mode: FitMode::Fill,
            mirror_mode: MirrorMode::Auto,
        }
    }

    /// Whether this configuration can yield a well-defined transform.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.source_size.is_valid() && self.target_size.is_valid()
    }
}

/// Source-space rectangle consumed by [`FitMode::CenterCrop`].
///
/// Expressed in unrotated source pixels; always centered in the frame.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CropRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}
