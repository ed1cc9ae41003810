//! Global constants for pretenst-core

/// Joint radius used by [`crate::RadiusMode::Fixed`] by default
pub const FIXED_JOINT_RADIUS: f64 = 0.01;

/// Push (compression) radius used by [`crate::RadiusMode::Fixed`] by default
pub const FIXED_PUSH_RADIUS: f64 = 0.05;

/// Pull (tension) radius used by [`crate::RadiusMode::Fixed`] by default
pub const FIXED_PULL_RADIUS: f64 = 0.01;

/// Prefix of every collection generated by an import
pub const DEFAULT_COLLECTION_PREFIX: &str = "Pretenst";
