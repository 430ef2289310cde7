//! Core engine mapping camera-sensor pixel coordinates to display/overlay
//! pixel coordinates.
//!
//! The engine reconciles four independent rotation sources (device
//! orientation, sensor mounting angle, display rotation, camera facing) with
//! an aspect-ratio fit policy, and produces a single affine matrix plus
//! derived scale/crop metrics. Everything here is a pure function of its
//! inputs: no caching, no mutable state, safe to call concurrently from
//! frame-processing threads.
//!
//! This crate is intentionally small and purely geometric. It does *not*
//! know about platform rotation codes, camera capture, or rendering — those
//! live with the callers (see the `frame-transform` facade crate).

mod config;
mod logger;
mod mapping;
mod rotation;
mod transform;
mod validate;

pub use config::{CropRect, FitMode, FrameSize, MirrorMode, TransformConfig};
pub use mapping::{map_point, map_points, map_points_into};
pub use rotation::{normalize_rotation, rotation_delta, rotations_equivalent};
pub use transform::{compute_transform, FrameTransform, TransformResult};
pub use validate::{grid_points, round_trip_error, validate_round_trip};

#[cfg(feature = "tracing")]
pub use logger::init_tracing;

pub use logger::init_logging;
