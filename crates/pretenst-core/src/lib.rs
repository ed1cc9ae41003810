//! Pretenst Core
//!
//! Loads tensegrity fabrics exported as JSON and computes where each
//! joint and interval instance goes in a 3D scene:
//! - Fabric: joints, intervals and the joint lookup
//! - Import: JSON loader and import options
//! - Placement: position, orientation and scale per instance

pub mod constants;
pub mod fabric;
pub mod import;
pub mod placement;

pub use constants::*;
pub use fabric::*;
pub use import::*;
pub use placement::*;
