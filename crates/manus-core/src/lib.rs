//! MANUS Core - Hand tracking data model
//!
//! This crate defines the types shared throughout MANUS:
//! - Geometric primitives (Vector3, Vector4)
//! - The hand hierarchy (Hand, Palm, Digit, Bone)
//! - Canonical digit and bone orderings (DigitKind, BoneKind)
//! - Error types

pub mod error;
pub mod hand;
pub mod vector;

pub use error::*;
pub use hand::*;
pub use vector::*;
