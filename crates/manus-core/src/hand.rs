//! The hand hierarchy: Hand, Palm, Digit, Bone
//!
//! Records are immutable value aggregates produced per captured frame by a
//! tracking source, or synthesized by the reconstruction codec. There is no
//! cross-frame identity.

use crate::{Vector3, Vector4};

/// The five digits of a hand, in canonical order.
///
/// This ordering is the contract shared by flattening and reconstruction;
/// both sides iterate `DigitKind::ALL` and nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DigitKind {
    Thumb,
    Index,
    Middle,
    Ring,
    Pinky,
}

impl DigitKind {
    /// All digits in canonical order
    pub const ALL: [DigitKind; 5] = [
        DigitKind::Thumb,
        DigitKind::Index,
        DigitKind::Middle,
        DigitKind::Ring,
        DigitKind::Pinky,
    ];

    pub const COUNT: usize = 5;
}

/// The four bones of a digit, in canonical order (knuckle outwards).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoneKind {
    Metacarpal,
    Proximal,
    Intermediate,
    Distal,
}

impl BoneKind {
    /// All bones in canonical order
    pub const ALL: [BoneKind; 4] = [
        BoneKind::Metacarpal,
        BoneKind::Proximal,
        BoneKind::Intermediate,
        BoneKind::Distal,
    ];

    pub const COUNT: usize = 4;
}

/// Which hand a record describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HandType {
    #[default]
    Left,
    Right,
}

/// One skeletal segment.
///
/// A joint is `None` only when the tracking source delivered no sample for
/// it, never as a function of its value.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bone {
    pub prev_joint: Option<Vector3>,
    pub next_joint: Option<Vector3>,
    pub width: f32,
    pub rotation: Vector4,
}

/// One digit: extension state plus four bones indexed by [`BoneKind`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Digit {
    pub is_extended: bool,
    pub bones: [Bone; 4],
}

impl Digit {
    pub fn bone(&self, kind: BoneKind) -> &Bone {
        &self.bones[kind as usize]
    }

    pub fn bone_mut(&mut self, kind: BoneKind) -> &mut Bone {
        &mut self.bones[kind as usize]
    }
}

/// Palm state
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Palm {
    pub position: Vector3,
    pub stabilized_position: Vector3,
    pub velocity: Vector3,
    pub normal: Vector3,
    pub width: f32,
    pub direction: Vector3,
    pub orientation: Vector4,
}

/// A full tracked hand.
///
/// `digits` is indexed by [`DigitKind`]; `arm` is the wrist-to-elbow
/// segment. `hand_type` and the arm are not part of the flattening schema,
/// so reconstructed hands carry defaults for them.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Hand {
    pub confidence: f32,
    pub pinch_distance: f32,
    pub grab_angle: f32,
    pub pinch_strength: f32,
    pub grab_strength: f32,
    pub palm: Palm,
    pub digits: [Digit; 5],
    pub arm: Bone,
    pub hand_type: HandType,
}

impl Hand {
    pub fn digit(&self, kind: DigitKind) -> &Digit {
        &self.digits[kind as usize]
    }

    pub fn digit_mut(&mut self, kind: DigitKind) -> &mut Digit {
        &mut self.digits[kind as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_order_is_thumb_to_pinky() {
        assert_eq!(DigitKind::ALL[0], DigitKind::Thumb);
        assert_eq!(DigitKind::ALL[4], DigitKind::Pinky);
        assert_eq!(DigitKind::ALL.len(), DigitKind::COUNT);
    }

    #[test]
    fn test_bone_order_is_metacarpal_to_distal() {
        assert_eq!(BoneKind::ALL[0], BoneKind::Metacarpal);
        assert_eq!(BoneKind::ALL[3], BoneKind::Distal);
        assert_eq!(BoneKind::ALL.len(), BoneKind::COUNT);
    }

    #[test]
    fn test_kind_indexing_matches_discriminants() {
        let mut hand = Hand::default();
        hand.digits[2].is_extended = true;
        assert!(hand.digit(DigitKind::Middle).is_extended);

        let mut digit = Digit::default();
        digit.bones[1].width = 9.0;
        assert_eq!(digit.bone(BoneKind::Proximal).width, 9.0);
    }

    #[test]
    fn test_default_hand_has_absent_joints() {
        let hand = Hand::default();
        assert!(hand.arm.prev_joint.is_none());
        assert!(hand.arm.next_joint.is_none());
        assert!(hand.digit(DigitKind::Thumb).bone(BoneKind::Distal).next_joint.is_none());
    }
}
