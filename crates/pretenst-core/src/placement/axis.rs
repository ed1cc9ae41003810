//! Prototype tracking axis

use std::fmt;
use std::str::FromStr;

use glam::DVec3;
use serde::{Deserialize, Serialize};

use super::PlacementError;

/// Local axis of a prototype that gets aligned with an interval
///
/// The mapping to reference vectors is fixed: `Y` tracks the canonical Z
/// vector and `Z` tracks the canonical Y vector, matching how the
/// prototypes are authored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TrackAxis {
    X,
    #[default]
    Y,
    Z,
}

impl TrackAxis {
    pub const ALL: &'static [TrackAxis] = &[TrackAxis::X, TrackAxis::Y, TrackAxis::Z];

    /// Unit vector rotated onto the interval direction
    pub fn reference_vector(&self) -> DVec3 {
        match self {
            TrackAxis::X => DVec3::X,
            TrackAxis::Y => DVec3::Z,
            TrackAxis::Z => DVec3::Y,
        }
    }

    /// Host label (`POS_X`, `POS_Y`, `POS_Z`)
    pub fn label(&self) -> &'static str {
        match self {
            TrackAxis::X => "POS_X",
            TrackAxis::Y => "POS_Y",
            TrackAxis::Z => "POS_Z",
        }
    }
}

impl FromStr for TrackAxis {
    type Err = PlacementError;

    /// Accepts exactly `POS_X`/`POS_Y`/`POS_Z` or the bare `X`/`Y`/`Z`
    fn from_str(label: &str) -> Result<Self, Self::Err> {
        match label {
            "POS_X" | "X" => Ok(TrackAxis::X),
            "POS_Y" | "Y" => Ok(TrackAxis::Y),
            "POS_Z" | "Z" => Ok(TrackAxis::Z),
            _ => Err(PlacementError::InvalidAxis(label.to_string())),
        }
    }
}

impl fmt::Display for TrackAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
