//! High-level facade crate for the `frame-transform-*` workspace.
//!
//! This crate provides:
//! - stable, convenient re-exports of the core transform engine
//! - the platform-boundary mapping between opaque display-rotation codes and
//!   the degree-based core
//! - [`OverlayMapper`], a precomputed forward/inverse pair for pushing
//!   detected landmarks into overlay coordinates every frame.
//!
//! ## Quickstart
//!
//! ```
//! use frame_transform::{
//!     FitMode, FrameSize, LensFacing, OverlayMapper, SurfaceRotation, TransformConfig,
//! };
//! use nalgebra::Point2;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut config = TransformConfig::new(FrameSize::new(1280, 720), FrameSize::new(1080, 1920));
//! config.sensor_orientation = 90;
//! config.display_rotation = SurfaceRotation::from_code(0).unwrap().degrees();
//! config.front_facing = LensFacing::Front.is_front();
//! config.fit_mode = FitMode::CenterCrop;
//!
//! let mapper = OverlayMapper::new(&config)?;
//! let on_screen = mapper.map(Point2::new(640.0, 360.0));
//! println!("landmark lands at ({:.1}, {:.1})", on_screen.x, on_screen.y);
//! # Ok(())
//! # }
//! ```
//!
//! ## API map
//! - `frame_transform::core`: the full engine (rotation arithmetic,
//!   transform computation, point mapping, round-trip validation).
//! - [`surface`]: display-rotation codes and lens facing, kept out of the
//!   degree-based core.
//! - [`overlay`]: landmark-to-overlay mapping built on a computed transform.

pub use frame_transform_core as core;

pub mod overlay;
pub mod surface;

pub use frame_transform_core::{
    compute_transform, grid_points, map_point, map_points, map_points_into, normalize_rotation,
    rotation_delta, rotations_equivalent, validate_round_trip, CropRect, FitMode, FrameSize,
    FrameTransform, MirrorMode, TransformConfig, TransformResult,
};

pub use overlay::{OverlayError, OverlayMapper};
pub use surface::{LensFacing, SurfaceRotation};
