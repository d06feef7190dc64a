//! MANUS Render - 2D skeleton rendering
//!
//! Projects 3D joint positions onto an owned RGB buffer and draws the
//! connective topology of each hand: bones, inter-digit links, and the
//! wrist/arm segment. Two mutually exclusive styles exist, dot markers only
//! (`Dots`) or the full wireframe (`Skeleton`).
//!
//! Rendering is a pure transformation of already-materialized records; the
//! buffer is exclusively owned here and handed out by shared reference.

pub mod canvas;
pub mod skeleton;

pub use canvas::*;
pub use skeleton::*;
