//! Joint, Interval and Fabric definitions

use std::collections::HashMap;

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::import::ImportError;

/// Identifier of a joint, unique within a fabric
pub type JointIndex = u32;

/// A point node of the structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Joint {
    pub index: JointIndex,
    pub position: DVec3,
    /// Radius used when scaling the joint's visual instance
    pub radius: f64,
}

impl Joint {
    pub fn new(index: JointIndex, position: DVec3, radius: f64) -> Self {
        Self {
            index,
            position,
            radius,
        }
    }
}

/// An edge between two joints, either a push or a pull
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    /// Position of the interval in its fabric (0-based)
    pub index: usize,
    /// Key of the first endpoint
    pub alpha: JointIndex,
    /// Key of the second endpoint
    pub omega: JointIndex,
    #[serde(rename = "type")]
    pub interval_type: String,
    pub role: String,
    /// Compression member when true, tension member otherwise
    pub is_push: bool,
    pub strain: f64,
    pub stiffness: f64,
    pub linear_density: f64,
    pub ideal_length: f64,
    pub length: f64,
    pub radius: f64,
}

/// An interval together with the joints it connects
#[derive(Debug, Clone, Copy)]
pub struct ResolvedInterval<'a> {
    pub interval: &'a Interval,
    pub alpha: &'a Joint,
    pub omega: &'a Joint,
}

impl ResolvedInterval<'_> {
    /// Vector from alpha to omega
    pub fn arrow(&self) -> DVec3 {
        self.omega.position - self.alpha.position
    }

    pub fn midpoint(&self) -> DVec3 {
        self.alpha.position.lerp(self.omega.position, 0.5)
    }

    /// Distance between the two endpoints
    pub fn span(&self) -> f64 {
        self.arrow().length()
    }
}

/// A complete tensegrity structure
///
/// The fabric is the sole owner of its joints. Intervals refer to them by
/// [`JointIndex`] and are resolved through [`Fabric::resolve`].
#[derive(Debug, Clone, Default)]
pub struct Fabric {
    name: Option<String>,
    joints: Vec<Joint>,
    /// Joint index -> position in `joints` (for O(1) lookup)
    lookup: HashMap<JointIndex, usize>,
    intervals: Vec<Interval>,
}

impl Fabric {
    /// Assemble a fabric, validating joint keys and interval references
    ///
    /// Interval indices are reassigned to their position in `intervals`.
    pub fn from_parts(
        name: Option<String>,
        joints: Vec<Joint>,
        mut intervals: Vec<Interval>,
    ) -> Result<Self, ImportError> {
        let mut lookup = HashMap::with_capacity(joints.len());
        for (slot, joint) in joints.iter().enumerate() {
            if lookup.insert(joint.index, slot).is_some() {
                return Err(ImportError::DuplicateJoint(joint.index));
            }
        }

        for (index, interval) in intervals.iter_mut().enumerate() {
            interval.index = index;
            for joint in [interval.alpha, interval.omega] {
                if !lookup.contains_key(&joint) {
                    return Err(ImportError::UnresolvedReference {
                        interval: index,
                        joint,
                    });
                }
            }
        }

        Ok(Self {
            name,
            joints,
            lookup,
            intervals,
        })
    }

    /// Name recorded by the exporter, if any
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Joints in input order
    pub fn joints(&self) -> &[Joint] {
        &self.joints
    }

    /// Intervals in input order
    pub fn intervals(&self) -> &[Interval] {
        &self.intervals
    }

    /// Get a joint by its index
    pub fn joint(&self, index: JointIndex) -> Option<&Joint> {
        self.lookup.get(&index).map(|&slot| &self.joints[slot])
    }

    /// Look up both endpoints of an interval
    pub fn resolve<'a>(
        &'a self,
        interval: &'a Interval,
    ) -> Result<ResolvedInterval<'a>, ImportError> {
        let alpha = self
            .joint(interval.alpha)
            .ok_or(ImportError::UnresolvedReference {
                interval: interval.index,
                joint: interval.alpha,
            })?;
        let omega = self
            .joint(interval.omega)
            .ok_or(ImportError::UnresolvedReference {
                interval: interval.index,
                joint: interval.omega,
            })?;
        Ok(ResolvedInterval {
            interval,
            alpha,
            omega,
        })
    }

    /// Iterate over all intervals with their endpoints resolved
    pub fn resolved_intervals(
        &self,
    ) -> impl Iterator<Item = Result<ResolvedInterval<'_>, ImportError>> {
        self.intervals.iter().map(|interval| self.resolve(interval))
    }

    /// Iterate over compression members
    pub fn pushes(&self) -> impl Iterator<Item = &Interval> {
        self.intervals.iter().filter(|i| i.is_push)
    }

    /// Iterate over tension members
    pub fn pulls(&self) -> impl Iterator<Item = &Interval> {
        self.intervals.iter().filter(|i| !i.is_push)
    }
}
