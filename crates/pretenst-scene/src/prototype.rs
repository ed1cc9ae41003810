//! Prototype objects copied once per joint or interval

use std::collections::HashMap;

use pretenst_core::TrackAxis;
use serde::{Deserialize, Serialize};

/// Prototype for compression members
pub const PUSH_PROTOTYPE: &str = "Push";

/// Prototype for tension members
pub const PULL_PROTOTYPE: &str = "Pull";

/// Marker placed at the middle of every push
pub const PUSH_LIGHT_PROTOTYPE: &str = "PushLight";

/// Prototype for joints
pub const JOINT_PROTOTYPE: &str = "Joint";

/// A template object in the host's prototype scene
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prototype {
    pub name: String,
    /// Local axis aligned with an interval's direction
    pub track_axis: TrackAxis,
}

impl Prototype {
    pub fn new(name: impl Into<String>, track_axis: TrackAxis) -> Self {
        Self {
            name: name.into(),
            track_axis,
        }
    }
}

/// Prototypes available to an import, keyed by name
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrototypeLibrary {
    prototypes: HashMap<String, Prototype>,
}

impl Default for PrototypeLibrary {
    /// Push, Pull, PushLight and Joint, all tracking `Y`
    fn default() -> Self {
        let mut library = Self::empty();
        for name in [
            PUSH_PROTOTYPE,
            PULL_PROTOTYPE,
            PUSH_LIGHT_PROTOTYPE,
            JOINT_PROTOTYPE,
        ] {
            library.insert(Prototype::new(name, TrackAxis::Y));
        }
        library
    }
}

impl PrototypeLibrary {
    pub fn empty() -> Self {
        Self {
            prototypes: HashMap::new(),
        }
    }

    /// Add or replace a prototype
    pub fn insert(&mut self, prototype: Prototype) -> Option<Prototype> {
        self.prototypes.insert(prototype.name.clone(), prototype)
    }

    pub fn get(&self, name: &str) -> Option<&Prototype> {
        self.prototypes.get(name)
    }

    pub fn len(&self) -> usize {
        self.prototypes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prototypes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_library() {
        let library = PrototypeLibrary::default();
        assert_eq!(library.len(), 4);
        for name in [PUSH_PROTOTYPE, PULL_PROTOTYPE, PUSH_LIGHT_PROTOTYPE, JOINT_PROTOTYPE] {
            assert_eq!(library.get(name).map(|p| p.track_axis), Some(TrackAxis::Y));
        }
    }

    #[test]
    fn test_insert_replaces() {
        let mut library = PrototypeLibrary::default();
        let previous = library.insert(Prototype::new(PUSH_PROTOTYPE, TrackAxis::X));
        assert_eq!(previous.map(|p| p.track_axis), Some(TrackAxis::Y));
        assert_eq!(library.get(PUSH_PROTOTYPE).unwrap().track_axis, TrackAxis::X);
        assert_eq!(library.len(), 4);
        assert!(PrototypeLibrary::empty().is_empty());
    }
}
