//! Import options
//!
//! Options can be saved and loaded as RON so that a host keeps the same
//! import settings between sessions.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_COLLECTION_PREFIX, FIXED_JOINT_RADIUS, FIXED_PULL_RADIUS, FIXED_PUSH_RADIUS,
};
use crate::fabric::{Interval, Joint};

/// Where instance radii come from
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum RadiusMode {
    /// Use the radius stored on each joint and interval
    #[default]
    FromInput,
    /// Ignore the document and use one radius per member kind
    Fixed { joint: f64, push: f64, pull: f64 },
}

impl RadiusMode {
    /// Fixed radii with the legacy importer's values
    pub fn fixed() -> Self {
        RadiusMode::Fixed {
            joint: FIXED_JOINT_RADIUS,
            push: FIXED_PUSH_RADIUS,
            pull: FIXED_PULL_RADIUS,
        }
    }

    pub fn joint_radius(&self, joint: &Joint) -> f64 {
        match *self {
            RadiusMode::FromInput => joint.radius,
            RadiusMode::Fixed { joint: radius, .. } => radius,
        }
    }

    pub fn interval_radius(&self, interval: &Interval) -> f64 {
        match *self {
            RadiusMode::FromInput => interval.radius,
            RadiusMode::Fixed { push, pull, .. } => {
                if interval.is_push {
                    push
                } else {
                    pull
                }
            }
        }
    }
}

/// Import options for fabric loading and scene assembly
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportOptions {
    /// Source of joint and interval radii
    pub radius: RadiusMode,
    /// Prefix of generated collection names; also selects what gets cleaned up
    pub collection_prefix: String,
    /// Emit a marker instance at the midpoint of every push
    pub push_lights: bool,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            radius: RadiusMode::FromInput,
            collection_prefix: DEFAULT_COLLECTION_PREFIX.to_string(),
            push_lights: true,
        }
    }
}

impl ImportOptions {
    /// Name of the collection generated for a given fabric file name
    pub fn collection_name(&self, file_name: &str) -> String {
        format!("{}: {}", self.collection_prefix, file_name)
    }

    /// Save options to a RON file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), OptionsError> {
        let content = self.to_ron_string()?;
        std::fs::write(path.as_ref(), content).map_err(|e| OptionsError::Io(e.to_string()))?;
        Ok(())
    }

    pub fn to_ron_string(&self) -> Result<String, OptionsError> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .map_err(|e| OptionsError::Serialize(e.to_string()))
    }

    /// Load options from a RON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, OptionsError> {
        let content =
            std::fs::read_to_string(path.as_ref()).map_err(|e| OptionsError::Io(e.to_string()))?;
        Self::from_ron_str(&content)
    }

    pub fn from_ron_str(content: &str) -> Result<Self, OptionsError> {
        ron::from_str(content).map_err(|e| OptionsError::Deserialize(e.to_string()))
    }
}

/// Option file errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum OptionsError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Serialization error: {0}")]
    Serialize(String),
    #[error("Deserialization error: {0}")]
    Deserialize(String),
}
