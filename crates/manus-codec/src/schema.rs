//! Schema registry - ordered field tables for each record kind
//!
//! Each table is an ordered list of leaf accessors. Table order IS the
//! flattening order, and the reconstruction codec runs the same tables'
//! setters in the same order, so the two directions cannot diverge. The
//! dotted path strings exist for diagnostics only; resolution is through
//! the typed fn pointers.
//!
//! Fields deliberately absent from the tables (hand type, arm, identifiers)
//! are never flattened and never reconstructed.

use manus_core::{Bone, BoneKind, Digit, DigitKind, Hand, ManusError, ManusResult, Palm, Vector3};

/// One scalar leaf reachable from a record of kind `T`.
pub struct FieldSpec<T: 'static> {
    /// Dotted field path, for diagnostics
    pub path: &'static str,
    /// Read the leaf scalar
    pub get: fn(&T) -> ManusResult<f32>,
    /// Write the leaf scalar, materializing intermediate nodes as needed
    pub set: fn(&mut T, f32),
}

fn joint_axis(joint: Option<Vector3>, pick: fn(Vector3) -> f32, path: &'static str) -> ManusResult<f32> {
    joint.map(pick).ok_or(ManusError::SchemaMismatch { kind: "bone", path })
}

/// Scalar fields contributed by a Hand record itself
pub const HAND_SCHEMA: &[FieldSpec<Hand>] = &[
    FieldSpec {
        path: "confidence",
        get: |h| Ok(h.confidence),
        set: |h, v| h.confidence = v,
    },
    FieldSpec {
        path: "pinch_distance",
        get: |h| Ok(h.pinch_distance),
        set: |h, v| h.pinch_distance = v,
    },
    FieldSpec {
        path: "grab_angle",
        get: |h| Ok(h.grab_angle),
        set: |h, v| h.grab_angle = v,
    },
    FieldSpec {
        path: "pinch_strength",
        get: |h| Ok(h.pinch_strength),
        set: |h, v| h.pinch_strength = v,
    },
    FieldSpec {
        path: "grab_strength",
        get: |h| Ok(h.grab_strength),
        set: |h, v| h.grab_strength = v,
    },
];

/// Scalar fields contributed by a Palm record
pub const PALM_SCHEMA: &[FieldSpec<Palm>] = &[
    FieldSpec {
        path: "position.x",
        get: |p| Ok(p.position.x),
        set: |p, v| p.position.x = v,
    },
    FieldSpec {
        path: "position.y",
        get: |p| Ok(p.position.y),
        set: |p, v| p.position.y = v,
    },
    FieldSpec {
        path: "position.z",
        get: |p| Ok(p.position.z),
        set: |p, v| p.position.z = v,
    },
    FieldSpec {
        path: "stabilized_position.x",
        get: |p| Ok(p.stabilized_position.x),
        set: |p, v| p.stabilized_position.x = v,
    },
    FieldSpec {
        path: "stabilized_position.y",
        get: |p| Ok(p.stabilized_position.y),
        set: |p, v| p.stabilized_position.y = v,
    },
    FieldSpec {
        path: "stabilized_position.z",
        get: |p| Ok(p.stabilized_position.z),
        set: |p, v| p.stabilized_position.z = v,
    },
    FieldSpec {
        path: "velocity.x",
        get: |p| Ok(p.velocity.x),
        set: |p, v| p.velocity.x = v,
    },
    FieldSpec {
        path: "velocity.y",
        get: |p| Ok(p.velocity.y),
        set: |p, v| p.velocity.y = v,
    },
    FieldSpec {
        path: "velocity.z",
        get: |p| Ok(p.velocity.z),
        set: |p, v| p.velocity.z = v,
    },
    FieldSpec {
        path: "normal.x",
        get: |p| Ok(p.normal.x),
        set: |p, v| p.normal.x = v,
    },
    FieldSpec {
        path: "normal.y",
        get: |p| Ok(p.normal.y),
        set: |p, v| p.normal.y = v,
    },
    FieldSpec {
        path: "normal.z",
        get: |p| Ok(p.normal.z),
        set: |p, v| p.normal.z = v,
    },
    FieldSpec {
        path: "width",
        get: |p| Ok(p.width),
        set: |p, v| p.width = v,
    },
    FieldSpec {
        path: "direction.x",
        get: |p| Ok(p.direction.x),
        set: |p, v| p.direction.x = v,
    },
    FieldSpec {
        path: "direction.y",
        get: |p| Ok(p.direction.y),
        set: |p, v| p.direction.y = v,
    },
    FieldSpec {
        path: "direction.z",
        get: |p| Ok(p.direction.z),
        set: |p, v| p.direction.z = v,
    },
    FieldSpec {
        path: "orientation.x",
        get: |p| Ok(p.orientation.x),
        set: |p, v| p.orientation.x = v,
    },
    FieldSpec {
        path: "orientation.y",
        get: |p| Ok(p.orientation.y),
        set: |p, v| p.orientation.y = v,
    },
    FieldSpec {
        path: "orientation.z",
        get: |p| Ok(p.orientation.z),
        set: |p, v| p.orientation.z = v,
    },
    FieldSpec {
        path: "orientation.w",
        get: |p| Ok(p.orientation.w),
        set: |p, v| p.orientation.w = v,
    },
];

/// Scalar fields contributed by a Digit record itself (its bones follow
/// separately, in [`BoneKind::ALL`] order)
pub const DIGIT_SCHEMA: &[FieldSpec<Digit>] = &[FieldSpec {
    path: "is_extended",
    get: |d| Ok(if d.is_extended { 1.0 } else { 0.0 }),
    set: |d, v| d.is_extended = v != 0.0,
}];

/// Scalar fields contributed by a Bone record
pub const BONE_SCHEMA: &[FieldSpec<Bone>] = &[
    FieldSpec {
        path: "prev_joint.x",
        get: |b| joint_axis(b.prev_joint, |j| j.x, "prev_joint.x"),
        set: |b, v| b.prev_joint.get_or_insert(Vector3::ZERO).x = v,
    },
    FieldSpec {
        path: "prev_joint.y",
        get: |b| joint_axis(b.prev_joint, |j| j.y, "prev_joint.y"),
        set: |b, v| b.prev_joint.get_or_insert(Vector3::ZERO).y = v,
    },
    FieldSpec {
        path: "prev_joint.z",
        get: |b| joint_axis(b.prev_joint, |j| j.z, "prev_joint.z"),
        set: |b, v| b.prev_joint.get_or_insert(Vector3::ZERO).z = v,
    },
    FieldSpec {
        path: "next_joint.x",
        get: |b| joint_axis(b.next_joint, |j| j.x, "next_joint.x"),
        set: |b, v| b.next_joint.get_or_insert(Vector3::ZERO).x = v,
    },
    FieldSpec {
        path: "next_joint.y",
        get: |b| joint_axis(b.next_joint, |j| j.y, "next_joint.y"),
        set: |b, v| b.next_joint.get_or_insert(Vector3::ZERO).y = v,
    },
    FieldSpec {
        path: "next_joint.z",
        get: |b| joint_axis(b.next_joint, |j| j.z, "next_joint.z"),
        set: |b, v| b.next_joint.get_or_insert(Vector3::ZERO).z = v,
    },
    FieldSpec {
        path: "width",
        get: |b| Ok(b.width),
        set: |b, v| b.width = v,
    },
    FieldSpec {
        path: "rotation.x",
        get: |b| Ok(b.rotation.x),
        set: |b, v| b.rotation.x = v,
    },
    FieldSpec {
        path: "rotation.y",
        get: |b| Ok(b.rotation.y),
        set: |b, v| b.rotation.y = v,
    },
    FieldSpec {
        path: "rotation.z",
        get: |b| Ok(b.rotation.z),
        set: |b, v| b.rotation.z = v,
    },
    FieldSpec {
        path: "rotation.w",
        get: |b| Ok(b.rotation.w),
        set: |b, v| b.rotation.w = v,
    },
];

/// Number of scalars a fully flattened Hand contributes
pub const FLAT_HAND_LEN: usize = HAND_SCHEMA.len()
    + PALM_SCHEMA.len()
    + DigitKind::COUNT * (DIGIT_SCHEMA.len() + BoneKind::COUNT * BONE_SCHEMA.len());
