//! MANUS Runtime - wiring between a tracking source and a display surface
//!
//! The tracking source pushes frames from its own thread; the viewer loop
//! polls a single-slot cell for the most recent one, renders it, and hands
//! the buffer to a display surface. Only the latest frame is guaranteed
//! visible; intermediate frames may be dropped.

pub mod capture;
pub mod slot;
pub mod source;
pub mod tracker;
pub mod viewer;

pub use capture::*;
pub use slot::*;
pub use source::*;
pub use tracker::*;
pub use viewer::*;
