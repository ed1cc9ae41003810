//! Fabric JSON import
//!
//! Reads the JSON document written by the fabric exporter and converts it
//! into a [`Fabric`]. The document holds a `joints` array and an
//! `intervals` array; every interval names its two endpoints by joint index.

mod options;

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use glam::DVec3;
use serde::Deserialize;

use crate::fabric::{Fabric, Interval, Joint, JointIndex};

pub use options::{ImportOptions, OptionsError, RadiusMode};

/// Errors that can occur during fabric import
#[derive(Debug, Clone, thiserror::Error)]
pub enum ImportError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("Malformed input: {0}")]
    MalformedInput(String),

    #[error("Interval {interval} refers to unknown joint {joint}")]
    UnresolvedReference { interval: usize, joint: JointIndex },

    #[error("Joint index {0} appears more than once")]
    DuplicateJoint(JointIndex),
}

/// Top-level document
#[derive(Debug, Deserialize)]
struct FabricRecord {
    #[serde(default)]
    name: Option<String>,
    joints: Vec<JointRecord>,
    intervals: Vec<IntervalRecord>,
}

#[derive(Debug, Deserialize)]
struct JointRecord {
    index: IndexRecord,
    x: f64,
    y: f64,
    z: f64,
    radius: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct IntervalRecord {
    joints: Vec<IndexRecord>,
    is_push: bool,
    #[serde(rename = "type")]
    interval_type: String,
    strain: f64,
    stiffness: f64,
    linear_density: f64,
    role: String,
    ideal_length: f64,
    length: f64,
    radius: f64,
}

/// Joint index as written by either exporter generation
///
/// Older exports wrote indices as strings.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum IndexRecord {
    Number(JointIndex),
    Text(String),
}

impl IndexRecord {
    fn resolve(&self) -> Result<JointIndex, ImportError> {
        match self {
            IndexRecord::Number(index) => Ok(*index),
            IndexRecord::Text(text) => text.trim().parse().map_err(|_| {
                ImportError::MalformedInput(format!("invalid joint index \"{}\"", text))
            }),
        }
    }
}

/// Radius of a joint or interval record; must be finite and positive
fn check_radius(radius: f64, record: impl FnOnce() -> String) -> Result<f64, ImportError> {
    if radius.is_finite() && radius > 0.0 {
        Ok(radius)
    } else {
        Err(ImportError::MalformedInput(format!(
            "{} has radius {}, expected a positive number",
            record(),
            radius
        )))
    }
}

impl JointRecord {
    fn into_joint(self) -> Result<Joint, ImportError> {
        let index = self.index.resolve()?;
        let radius = check_radius(self.radius, || format!("joint {}", index))?;
        Ok(Joint::new(index, DVec3::new(self.x, self.y, self.z), radius))
    }
}

impl IntervalRecord {
    fn into_interval(self, index: usize) -> Result<Interval, ImportError> {
        let (alpha, omega) = match self.joints.as_slice() {
            [alpha, omega, ..] => (alpha.resolve()?, omega.resolve()?),
            _ => {
                return Err(ImportError::MalformedInput(format!(
                    "interval {} needs two joints, found {}",
                    index,
                    self.joints.len()
                )));
            }
        };
        let radius = check_radius(self.radius, || format!("interval {}", index))?;

        Ok(Interval {
            index,
            alpha,
            omega,
            interval_type: self.interval_type,
            role: self.role,
            is_push: self.is_push,
            strain: self.strain,
            stiffness: self.stiffness,
            linear_density: self.linear_density,
            ideal_length: self.ideal_length,
            length: self.length,
            radius,
        })
    }
}

/// Load a fabric from a JSON file
pub fn load(path: impl AsRef<Path>) -> Result<Fabric, ImportError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| ImportError::Io(e.to_string()))?;
    let fabric = load_from_reader(BufReader::new(file))?;

    tracing::info!(
        "Loaded fabric from {}: {} joints, {} intervals",
        path.display(),
        fabric.joints().len(),
        fabric.intervals().len()
    );

    Ok(fabric)
}

/// Load a fabric from any reader producing JSON
pub fn load_from_reader(reader: impl Read) -> Result<Fabric, ImportError> {
    let record: FabricRecord = serde_json::from_reader(reader).map_err(malformed)?;
    build_fabric(record)
}

/// Load a fabric from a JSON string
pub fn load_from_str(json: &str) -> Result<Fabric, ImportError> {
    let record: FabricRecord = serde_json::from_str(json).map_err(malformed)?;
    build_fabric(record)
}

/// Load a fabric from JSON bytes (for WASM support)
pub fn load_from_bytes(data: &[u8]) -> Result<Fabric, ImportError> {
    let record: FabricRecord = serde_json::from_slice(data).map_err(malformed)?;
    build_fabric(record)
}

fn malformed(error: serde_json::Error) -> ImportError {
    if error.is_io() {
        ImportError::Io(error.to_string())
    } else {
        ImportError::MalformedInput(error.to_string())
    }
}

fn build_fabric(record: FabricRecord) -> Result<Fabric, ImportError> {
    let joints = record
        .joints
        .into_iter()
        .map(JointRecord::into_joint)
        .collect::<Result<Vec<_>, _>>()?;

    let intervals = record
        .intervals
        .into_iter()
        .enumerate()
        .map(|(index, interval)| interval.into_interval(index))
        .collect::<Result<Vec<_>, _>>()?;

    tracing::debug!(
        "Resolving {} intervals against {} joints",
        intervals.len(),
        joints.len()
    );

    Fabric::from_parts(record.name, joints, intervals)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCENARIO: &str = r#"{
        "joints": [
            { "index": 0, "x": 0, "y": 0, "z": 0, "radius": 1 },
            { "index": 1, "x": 0, "y": 0, "z": 2, "radius": 1 }
        ],
        "intervals": [
            { "joints": [0, 1], "isPush": true, "type": "Push", "strain": 0.01,
              "stiffness": 1.0, "linearDensity": 1.0, "role": "Push",
              "idealLength": 2, "length": 2, "radius": 0.5 }
        ]
    }"#;

    fn interval_json(alpha: &str, omega: &str, is_push: bool) -> String {
        format!(
            r#"{{ "joints": [{alpha}, {omega}], "isPush": {is_push}, "type": "T",
                 "strain": 0, "stiffness": 1, "linearDensity": 1, "role": "R",
                 "idealLength": 1, "length": 1, "radius": 0.1 }}"#
        )
    }

    #[test]
    fn test_load_scenario() {
        let fabric = load_from_str(SCENARIO).unwrap();
        assert_eq!(fabric.joints().len(), 2);
        assert_eq!(fabric.intervals().len(), 1);

        let interval = &fabric.intervals()[0];
        assert_eq!(interval.index, 0);
        assert_eq!(interval.alpha, 0);
        assert_eq!(interval.omega, 1);
        assert!(interval.is_push);
        assert_eq!(interval.interval_type, "Push");
        assert_eq!(interval.strain, 0.01);
        assert_eq!(interval.radius, 0.5);
        assert_eq!(interval.length, 2.0);
        assert_eq!(fabric.joint(1).unwrap().position, DVec3::new(0.0, 0.0, 2.0));
    }

    #[test]
    fn test_load_preserves_order_and_reindexes() {
        let intervals = [
            interval_json("2", "3", false),
            interval_json("3", "1", true),
            interval_json("1", "2", false),
        ]
        .join(",");
        let json = format!(
            r#"{{
                "joints": [
                    {{ "index": 3, "x": 0, "y": 0, "z": 3, "radius": 1 }},
                    {{ "index": 1, "x": 0, "y": 0, "z": 1, "radius": 1 }},
                    {{ "index": 2, "x": 0, "y": 0, "z": 2, "radius": 1 }}
                ],
                "intervals": [{intervals}]
            }}"#
        );

        let fabric = load_from_str(&json).unwrap();
        let joint_order: Vec<JointIndex> = fabric.joints().iter().map(|j| j.index).collect();
        assert_eq!(joint_order, vec![3, 1, 2]);

        let ends: Vec<(usize, JointIndex, JointIndex)> = fabric
            .intervals()
            .iter()
            .map(|i| (i.index, i.alpha, i.omega))
            .collect();
        assert_eq!(ends, vec![(0, 2, 3), (1, 3, 1), (2, 1, 2)]);
    }

    #[test]
    fn test_load_string_indices() {
        let json = format!(
            r#"{{
                "name": "legacy",
                "joints": [
                    {{ "index": "1", "x": 0, "y": 0, "z": 0, "radius": 1 }},
                    {{ "index": "2", "x": 1, "y": 0, "z": 0, "radius": 1 }}
                ],
                "intervals": [{}]
            }}"#,
            interval_json("\"1\"", "\"2\"", true)
        );

        let fabric = load_from_str(&json).unwrap();
        assert_eq!(fabric.name(), Some("legacy"));
        assert_eq!(fabric.intervals()[0].alpha, 1);
        assert_eq!(fabric.intervals()[0].omega, 2);
    }

    #[test]
    fn test_load_truncated() {
        let truncated = &SCENARIO[..SCENARIO.len() / 2];
        assert!(matches!(
            load_from_str(truncated),
            Err(ImportError::MalformedInput(_))
        ));
    }

    #[test]
    fn test_load_missing_key() {
        let json = r#"{
            "joints": [ { "index": 0, "x": 0, "y": 0, "radius": 1 } ],
            "intervals": []
        }"#;
        assert!(matches!(
            load_from_str(json),
            Err(ImportError::MalformedInput(_))
        ));

        let json = r#"{ "joints": [] }"#;
        assert!(matches!(
            load_from_str(json),
            Err(ImportError::MalformedInput(_))
        ));
    }

    #[test]
    fn test_load_bad_index_text() {
        let json = r#"{
            "joints": [ { "index": "one", "x": 0, "y": 0, "z": 0, "radius": 1 } ],
            "intervals": []
        }"#;
        assert!(matches!(
            load_from_str(json),
            Err(ImportError::MalformedInput(_))
        ));
    }

    #[test]
    fn test_load_single_joint_reference() {
        let json = r#"{
            "joints": [ { "index": 0, "x": 0, "y": 0, "z": 0, "radius": 1 } ],
            "intervals": [ { "joints": [0], "isPush": false, "type": "T",
                "strain": 0, "stiffness": 1, "linearDensity": 1, "role": "R",
                "idealLength": 1, "length": 1, "radius": 0.1 } ]
        }"#;
        assert!(matches!(
            load_from_str(json),
            Err(ImportError::MalformedInput(_))
        ));
    }

    #[test]
    fn test_load_rejects_nonpositive_radius() {
        let joints = |radius: &str| {
            format!(
                r#"{{ "index": 0, "x": 0, "y": 0, "z": 0, "radius": 1 }},
                   {{ "index": 1, "x": 0, "y": 0, "z": 2, "radius": {radius} }}"#
            )
        };

        for radius in ["-3", "0"] {
            let json = format!(r#"{{ "joints": [{}], "intervals": [] }}"#, joints(radius));
            match load_from_str(&json) {
                Err(ImportError::MalformedInput(message)) => {
                    assert!(message.contains("joint 1"), "{message}")
                }
                other => panic!("radius {radius} accepted: {other:?}"),
            }
        }

        let interval = interval_json("0", "1", true).replace("0.1", "-0.5");
        let json = format!(
            r#"{{ "joints": [{}], "intervals": [{interval}] }}"#,
            joints("1")
        );
        match load_from_str(&json) {
            Err(ImportError::MalformedInput(message)) => {
                assert!(message.contains("interval 0"), "{message}")
            }
            other => panic!("negative interval radius accepted: {other:?}"),
        }
    }

    #[test]
    fn test_load_unresolved_reference() {
        let json = format!(
            r#"{{
                "joints": [
                    {{ "index": 0, "x": 0, "y": 0, "z": 0, "radius": 1 }},
                    {{ "index": 1, "x": 0, "y": 0, "z": 2, "radius": 1 }}
                ],
                "intervals": [{}]
            }}"#,
            interval_json("0", "5", true)
        );
        assert!(matches!(
            load_from_str(&json),
            Err(ImportError::UnresolvedReference {
                interval: 0,
                joint: 5
            })
        ));
    }

    #[test]
    fn test_load_file() {
        use std::fs;
        use tempfile::tempdir;

        let temp = tempdir().unwrap();
        let path = temp.path().join("fabric.json");
        fs::write(&path, SCENARIO).unwrap();

        let fabric = load(&path).unwrap();
        assert_eq!(fabric.intervals().len(), 1);

        let bytes = fs::read(&path).unwrap();
        assert_eq!(load_from_bytes(&bytes).unwrap().joints().len(), 2);
    }

    #[test]
    fn test_load_missing_file() {
        let result = load("/nonexistent/fabric.json");
        assert!(matches!(result, Err(ImportError::Io(_))));
    }
}
