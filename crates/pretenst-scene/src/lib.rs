//! Pretenst Scene
//!
//! Host-neutral scene assembly for imported fabrics:
//! - Prototype: template objects and their tracking axes
//! - Collection: generated instances grouped per import, and the scene holding them
//! - Session: loads a fabric and links a fresh collection into a scene

pub mod collection;
pub mod prototype;
pub mod session;

pub use collection::*;
pub use prototype::*;
pub use session::*;
