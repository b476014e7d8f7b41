//! Models module for the annotator
//!
//! Geometry primitives and the annotation/link records exchanged with
//! the annotator UI.

pub mod annotation;
pub mod geometry;
pub mod serde_helpers;

// Re-export commonly used types
pub use annotation::*;
pub use geometry::*;
