//! Generated instances, collections and the scene holding them

use pretenst_core::{JointIndex, Placement};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// What an instance was generated from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InstanceSource {
    Joint(JointIndex),
    Interval(usize),
    /// Midpoint marker of a push interval
    PushLight(usize),
}

/// A placed copy of a prototype
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Instance {
    pub id: Uuid,
    pub name: String,
    /// Name of the prototype this instance copies
    pub prototype: String,
    pub source: InstanceSource,
    pub placement: Placement,
}

impl Instance {
    /// Create an instance named after its source and prototype
    ///
    /// Joints become `J{index}-{prototype}`, intervals `I{index}-{prototype}`
    /// and push markers `IL{index}-{prototype}`.
    pub fn new(prototype: impl Into<String>, source: InstanceSource, placement: Placement) -> Self {
        let prototype = prototype.into();
        let name = match source {
            InstanceSource::Joint(index) => format!("J{}-{}", index, prototype),
            InstanceSource::Interval(index) => format!("I{}-{}", index, prototype),
            InstanceSource::PushLight(index) => format!("IL{}-{}", index, prototype),
        };
        Self {
            id: Uuid::new_v4(),
            name,
            prototype,
            source,
            placement,
        }
    }
}

/// Instances generated by one import
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Collection {
    pub id: Uuid,
    pub name: String,
    pub instances: Vec<Instance>,
}

impl Collection {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            instances: Vec::new(),
        }
    }

    pub fn link(&mut self, instance: Instance) {
        self.instances.push(instance);
    }

    pub fn instance(&self, name: &str) -> Option<&Instance> {
        self.instances.iter().find(|i| i.name == name)
    }

    /// Count instances copied from a prototype
    pub fn count_of(&self, prototype: &str) -> usize {
        self.instances
            .iter()
            .filter(|i| i.prototype == prototype)
            .count()
    }
}

/// Top-level container of collections
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Scene {
    collections: Vec<Collection>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Link a collection into the scene, returns its ID
    pub fn link(&mut self, collection: Collection) -> Uuid {
        let id = collection.id;
        self.collections.push(collection);
        id
    }

    pub fn collections(&self) -> &[Collection] {
        &self.collections
    }

    /// Get a collection by name
    pub fn collection(&self, name: &str) -> Option<&Collection> {
        self.collections.iter().find(|c| c.name == name)
    }

    /// Get a collection by ID
    pub fn get(&self, id: Uuid) -> Option<&Collection> {
        self.collections.iter().find(|c| c.id == id)
    }

    /// Remove a collection by ID, dropping its instances
    pub fn remove(&mut self, id: Uuid) -> Option<Collection> {
        let position = self.collections.iter().position(|c| c.id == id)?;
        Some(self.collections.remove(position))
    }

    /// Remove every collection whose name starts with `prefix`
    ///
    /// Returns the number of collections removed. An empty prefix matches
    /// every collection.
    pub fn remove_with_prefix(&mut self, prefix: &str) -> usize {
        if prefix.is_empty() {
            tracing::warn!(
                "Empty collection prefix, removing all {} collections",
                self.collections.len()
            );
        }
        let before = self.collections.len();
        self.collections.retain(|collection| {
            let matches = collection.name.starts_with(prefix);
            if matches {
                tracing::info!(
                    "Deleting collection '{}' ({} instances)",
                    collection.name,
                    collection.instances.len()
                );
            }
            !matches
        });
        before - self.collections.len()
    }
}
