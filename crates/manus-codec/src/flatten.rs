//! Flatten codec - nested records to flat scalar sequences

use manus_core::{BoneKind, DigitKind, Hand, ManusResult};

use crate::schema::{FieldSpec, BONE_SCHEMA, DIGIT_SCHEMA, FLAT_HAND_LEN, HAND_SCHEMA, PALM_SCHEMA};

/// Append one record's schema-covered scalars to `out`, in table order.
///
/// Pure apart from the push into `out`; output count always equals the
/// table length on success.
pub fn flatten_record<T>(record: &T, schema: &[FieldSpec<T>], out: &mut Vec<f32>) -> ManusResult<()> {
    for field in schema {
        out.push((field.get)(record)?);
    }
    Ok(())
}

/// Flatten a full Hand: hand fields, palm fields, then each digit in
/// [`DigitKind::ALL`] order with its bones in [`BoneKind::ALL`] order.
///
/// The concatenation order is part of the codec contract;
/// [`reconstruct_hand`](crate::reconstruct_hand) consumes in exactly this
/// order.
pub fn flatten_hand(hand: &Hand) -> ManusResult<Vec<f32>> {
    let mut out = Vec::with_capacity(FLAT_HAND_LEN);

    flatten_record(hand, HAND_SCHEMA, &mut out)?;
    flatten_record(&hand.palm, PALM_SCHEMA, &mut out)?;

    for digit_kind in DigitKind::ALL {
        let digit = hand.digit(digit_kind);
        flatten_record(digit, DIGIT_SCHEMA, &mut out)?;
        for bone_kind in BoneKind::ALL {
            flatten_record(digit.bone(bone_kind), BONE_SCHEMA, &mut out)?;
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use manus_core::{Bone, ManusError, Vector3, Vector4};

    fn sample_bone(base: f32) -> Bone {
        Bone {
            prev_joint: Some(Vector3::new(base, base + 1.0, base + 2.0)),
            next_joint: Some(Vector3::new(base + 3.0, base + 4.0, base + 5.0)),
            width: base + 6.0,
            rotation: Vector4::new(base + 7.0, base + 8.0, base + 9.0, base + 10.0),
        }
    }

    fn sample_hand() -> Hand {
        let mut hand = Hand {
            confidence: 0.9,
            pinch_distance: 30.0,
            grab_angle: 1.5,
            pinch_strength: 0.2,
            grab_strength: 0.1,
            ..Default::default()
        };
        hand.palm.position = Vector3::new(1.0, 2.0, 3.0);
        hand.palm.width = 85.0;
        for (d, digit_kind) in DigitKind::ALL.into_iter().enumerate() {
            let digit = hand.digit_mut(digit_kind);
            digit.is_extended = d % 2 == 0;
            for (b, bone_kind) in BoneKind::ALL.into_iter().enumerate() {
                *digit.bone_mut(bone_kind) = sample_bone((d * 100 + b * 20) as f32);
            }
        }
        hand
    }

    #[test]
    fn test_flatten_hand_length() {
        let flat = flatten_hand(&sample_hand()).unwrap();
        assert_eq!(flat.len(), FLAT_HAND_LEN);
    }

    #[test]
    fn test_flatten_order_starts_with_hand_fields() {
        let flat = flatten_hand(&sample_hand()).unwrap();
        assert_eq!(flat[0], 0.9);
        assert_eq!(flat[1], 30.0);
        assert_eq!(flat[4], 0.1);
        // palm.position follows immediately
        assert_eq!(flat[5], 1.0);
        assert_eq!(flat[6], 2.0);
        assert_eq!(flat[7], 3.0);
    }

    #[test]
    fn test_flatten_digit_blocks_follow_canonical_order() {
        let flat = flatten_hand(&sample_hand()).unwrap();
        let digit_block = DIGIT_SCHEMA.len() + BoneKind::COUNT * BONE_SCHEMA.len();
        let digits_start = HAND_SCHEMA.len() + PALM_SCHEMA.len();

        // thumb block starts with is_extended then metacarpal.prev_joint.x
        assert_eq!(flat[digits_start], 1.0);
        assert_eq!(flat[digits_start + 1], 0.0);
        // index digit block: base value 100 for its metacarpal
        let index_start = digits_start + digit_block;
        assert_eq!(flat[index_start], 0.0);
        assert_eq!(flat[index_start + 1], 100.0);
    }

    #[test]
    fn test_flatten_absent_joint_is_schema_mismatch() {
        let mut hand = sample_hand();
        hand.digit_mut(DigitKind::Ring).bone_mut(BoneKind::Distal).next_joint = None;

        let err = flatten_hand(&hand).unwrap_err();
        assert_eq!(
            err,
            ManusError::SchemaMismatch {
                kind: "bone",
                path: "next_joint.x"
            }
        );
    }

    #[test]
    fn test_flatten_is_repeatable() {
        let hand = sample_hand();
        assert_eq!(flatten_hand(&hand).unwrap(), flatten_hand(&hand).unwrap());
    }
}
