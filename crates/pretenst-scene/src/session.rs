//! Import sessions
//!
//! A session turns a loaded fabric into a collection of placed prototype
//! instances and swaps it into a scene. Everything is computed before the
//! scene is touched, so a failed import leaves the scene as it was.

use std::path::Path;

use pretenst_core::{
    Fabric, ImportError, ImportOptions, PlacementError, interval_placement_with_radius,
    joint_placement_with_radius, load, midpoint_placement,
};
use uuid::Uuid;

use crate::collection::{Collection, Instance, InstanceSource, Scene};
use crate::prototype::{
    JOINT_PROTOTYPE, PULL_PROTOTYPE, PUSH_LIGHT_PROTOTYPE, PUSH_PROTOTYPE, Prototype,
    PrototypeLibrary,
};

/// Errors that can occur during scene assembly
#[derive(Debug, Clone, thiserror::Error)]
pub enum SceneError {
    #[error("Prototype not found: {0}")]
    MissingPrototype(String),

    #[error(transparent)]
    Import(#[from] ImportError),

    #[error(transparent)]
    Placement(#[from] PlacementError),
}

/// Summary of a completed import
#[derive(Debug, Clone, PartialEq)]
pub struct ImportReport {
    pub collection_id: Uuid,
    pub collection_name: String,
    pub joints: usize,
    pub intervals: usize,
    pub instances: usize,
    /// Collections from earlier imports that were removed
    pub removed_collections: usize,
}

/// Prototypes and options used for one or more imports
#[derive(Debug, Clone, Default)]
pub struct ImportSession {
    pub library: PrototypeLibrary,
    pub options: ImportOptions,
}

impl ImportSession {
    pub fn new(library: PrototypeLibrary, options: ImportOptions) -> Self {
        Self { library, options }
    }

    /// Load a fabric file and replace earlier imports in `scene` with it
    pub fn import_file(
        &self,
        scene: &mut Scene,
        path: impl AsRef<Path>,
    ) -> Result<ImportReport, SceneError> {
        let path = path.as_ref();
        let fabric = load(path)?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "unnamed".to_string());

        let report = self.import_fabric(scene, &fabric, &file_name)?;
        tracing::info!(
            "Pretenst: Loaded {} intervals from {}.",
            report.intervals,
            path.display()
        );
        Ok(report)
    }

    /// Replace earlier imports in `scene` with an already loaded fabric
    pub fn import_fabric(
        &self,
        scene: &mut Scene,
        fabric: &Fabric,
        file_name: &str,
    ) -> Result<ImportReport, SceneError> {
        let collection = self.assemble(fabric, self.options.collection_name(file_name))?;
        let collection_name = collection.name.clone();
        let instances = collection.instances.len();

        let removed_collections = scene.remove_with_prefix(&self.options.collection_prefix);
        let collection_id = scene.link(collection);

        Ok(ImportReport {
            collection_id,
            collection_name,
            joints: fabric.joints().len(),
            intervals: fabric.intervals().len(),
            instances,
            removed_collections,
        })
    }

    /// Build the collection for a fabric without touching any scene
    ///
    /// Intervals come first (each push followed by its marker when enabled),
    /// then joints, all in fabric order.
    pub fn assemble(
        &self,
        fabric: &Fabric,
        collection_name: impl Into<String>,
    ) -> Result<Collection, SceneError> {
        let mut collection = Collection::new(collection_name);
        let radius = self.options.radius;

        for resolved in fabric.resolved_intervals() {
            let resolved = resolved?;
            let interval = resolved.interval;
            let prototype = self.prototype(if interval.is_push {
                PUSH_PROTOTYPE
            } else {
                PULL_PROTOTYPE
            })?;

            let placement = interval_placement_with_radius(
                &resolved,
                prototype.track_axis,
                radius.interval_radius(interval),
            )?;
            collection.link(Instance::new(
                prototype.name.as_str(),
                InstanceSource::Interval(interval.index),
                placement,
            ));

            if interval.is_push && self.options.push_lights {
                let light = self.prototype(PUSH_LIGHT_PROTOTYPE)?;
                collection.link(Instance::new(
                    light.name.as_str(),
                    InstanceSource::PushLight(interval.index),
                    midpoint_placement(&resolved),
                ));
            }
        }

        let joint_prototype = self.prototype(JOINT_PROTOTYPE)?;
        for joint in fabric.joints() {
            collection.link(Instance::new(
                joint_prototype.name.as_str(),
                InstanceSource::Joint(joint.index),
                joint_placement_with_radius(joint, radius.joint_radius(joint)),
            ));
        }

        tracing::debug!(
            "Assembled collection '{}' with {} instances",
            collection.name,
            collection.instances.len()
        );

        Ok(collection)
    }

    fn prototype(&self, name: &str) -> Result<&Prototype, SceneError> {
        self.library
            .get(name)
            .ok_or_else(|| SceneError::MissingPrototype(name.to_string()))
    }
}
