//! Instance placement
//!
//! Computes the transform of a prototype copy for each joint and interval.
//! Joints are placed at their position with a uniform scale. Intervals are
//! placed at their midpoint, rotated so the prototype's tracking axis points
//! from alpha to omega, and stretched along their local z axis to half the
//! interval's span.

mod axis;

use glam::{DMat4, DQuat, DVec3};
use serde::{Deserialize, Serialize};

use crate::fabric::{Joint, ResolvedInterval};

pub use axis::TrackAxis;

/// Errors that can occur while placing an instance
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PlacementError {
    #[error("Cannot convert tracking axis \"{0}\"")]
    InvalidAxis(String),

    #[error("Interval {interval} has no direction (coincident or non-finite endpoints)")]
    DegenerateInterval { interval: usize },
}

/// Position, orientation and scale of one instance
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub translation: DVec3,
    pub rotation: DQuat,
    pub scale: DVec3,
}

impl Default for Placement {
    fn default() -> Self {
        Self {
            translation: DVec3::ZERO,
            rotation: DQuat::IDENTITY,
            scale: DVec3::ONE,
        }
    }
}

impl Placement {
    /// Instance-to-world matrix (scale, then rotate, then translate)
    pub fn to_matrix(&self) -> DMat4 {
        DMat4::from_scale_rotation_translation(self.scale, self.rotation, self.translation)
    }

    /// Map a point from instance space to world space
    pub fn transform_point(&self, point: DVec3) -> DVec3 {
        self.translation + self.rotation * (self.scale * point)
    }
}

/// Place a joint using its own radius
pub fn joint_placement(joint: &Joint) -> Placement {
    joint_placement_with_radius(joint, joint.radius)
}

/// Place a joint with an explicit radius
pub fn joint_placement_with_radius(joint: &Joint, radius: f64) -> Placement {
    Placement {
        translation: joint.position,
        rotation: DQuat::IDENTITY,
        scale: DVec3::splat(radius),
    }
}

/// Place an interval using its own radius
pub fn interval_placement(
    interval: &ResolvedInterval<'_>,
    track_axis: TrackAxis,
) -> Result<Placement, PlacementError> {
    interval_placement_with_radius(interval, track_axis, interval.interval.radius)
}

/// Place an interval for a host tracking-axis label such as `POS_Y`
pub fn interval_placement_for_label(
    interval: &ResolvedInterval<'_>,
    track_axis: &str,
) -> Result<Placement, PlacementError> {
    interval_placement(interval, track_axis.parse()?)
}

/// Place an interval with an explicit radius
///
/// The long-axis scale is half the measured distance between the endpoints,
/// so a unit-length prototype centred on its origin spans the interval.
pub fn interval_placement_with_radius(
    interval: &ResolvedInterval<'_>,
    track_axis: TrackAxis,
    radius: f64,
) -> Result<Placement, PlacementError> {
    let arrow = interval.arrow();
    // Divide by the largest component first so the length cannot overflow
    let magnitude = arrow.abs().max_element();
    if !arrow.is_finite() || magnitude == 0.0 {
        return Err(PlacementError::DegenerateInterval {
            interval: interval.interval.index,
        });
    }
    let reduced = arrow / magnitude;
    let span = magnitude * reduced.length();

    let rotation =
        DQuat::from_rotation_arc(track_axis.reference_vector(), reduced.normalize());

    Ok(Placement {
        translation: interval.midpoint(),
        rotation: rotation.normalize(),
        scale: DVec3::new(radius, radius, span / 2.0),
    })
}

/// Marker at the middle of an interval, unrotated and unscaled
pub fn midpoint_placement(interval: &ResolvedInterval<'_>) -> Placement {
    Placement {
        translation: interval.midpoint(),
        ..Placement::default()
    }
}
