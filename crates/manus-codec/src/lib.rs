//! MANUS Codec - Bidirectional flatten/reconstruct over the hand hierarchy
//!
//! A nested [`Hand`](manus_core::Hand) record flattens into an ordered flat
//! sequence of scalars for downstream numeric consumption, and an equivalent
//! record can be rebuilt from that sequence. The schema tables in
//! [`schema`] are the single source of truth for both directions: field
//! order, nesting, and the canonical digit/bone enumeration order.

pub mod flatten;
pub mod reconstruct;
pub mod schema;
pub mod wire;

pub use flatten::*;
pub use reconstruct::*;
pub use schema::*;
pub use wire::*;
