//! Platform-boundary rotation codes.
//!
//! Display stacks hand out rotation as an opaque ordinal code rather than an
//! angle. The translation to degrees lives here so the core engine stays
//! purely degree-based.

use serde::{Deserialize, Serialize};

use frame_transform_core::normalize_rotation;

/// Display rotation as reported by the windowing layer, one quarter turn
/// per code.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SurfaceRotation {
    #[default]
    Rotation0,
    Rotation90,
    Rotation180,
    Rotation270,
}

impl SurfaceRotation {
    /// Translate a platform ordinal code (0–3). Unknown codes map to `None`.
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::Rotation0),
            1 => Some(Self::Rotation90),
            2 => Some(Self::Rotation180),
            3 => Some(Self::Rotation270),
            _ => None,
        }
    }

    /// The ordinal code this variant came from.
    pub fn code(self) -> i32 {
        match self {
            Self::Rotation0 => 0,
            Self::Rotation90 => 1,
            Self::Rotation180 => 2,
            Self::Rotation270 => 3,
        }
    }

    /// Rotation angle in degrees, for the core's `display_rotation` field.
    pub fn degrees(self) -> i32 {
        self.code() * 90
    }

    /// Classify an angle in degrees. Normalizes first; `None` unless the
    /// normalized angle is an exact quarter turn.
    pub fn from_degrees(degrees: i32) -> Option<Self> {
        match normalize_rotation(degrees) {
            0 => Some(Self::Rotation0),
            90 => Some(Self::Rotation90),
            180 => Some(Self::Rotation180),
            270 => Some(Self::Rotation270),
            _ => None,
        }
    }
}

/// Which way the active camera faces.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LensFacing {
    Front,
    Back,
}

impl LensFacing {
    /// For the core's `front_facing` flag.
    pub fn is_front(self) -> bool {
        matches!(self, Self::Front)
    }
}
