//! Reconstruct codec - flat scalar sequences back to nested records
//!
//! Consumption order mirrors the flatten composition exactly: hand fields,
//! palm fields, then digits in [`DigitKind::ALL`] order with bones in
//! [`BoneKind::ALL`] order. Each record starts from its zero value and is
//! filled by the schema setters; intermediate `Option` nodes are
//! materialized on first touch.

use manus_core::{BoneKind, Digit, DigitKind, Hand, ManusError, ManusResult};

use crate::schema::{FieldSpec, BONE_SCHEMA, DIGIT_SCHEMA, HAND_SCHEMA, PALM_SCHEMA};

/// Front-to-back cursor over a flat scalar sequence.
pub struct FlatReader<'a> {
    data: &'a [f32],
    pos: usize,
}

impl<'a> FlatReader<'a> {
    pub fn new(data: &'a [f32]) -> Self {
        Self { data, pos: 0 }
    }

    /// Scalars not yet consumed
    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    /// Scalars consumed so far
    pub fn consumed(&self) -> usize {
        self.pos
    }

    /// Consume the next scalar
    pub fn next(&mut self) -> ManusResult<f32> {
        let value = self.data.get(self.pos).copied().ok_or(ManusError::Underflow {
            needed: 1,
            remaining: 0,
        })?;
        self.pos += 1;
        Ok(value)
    }
}

/// Rebuild one record kind from the reader, consuming exactly
/// `schema.len()` scalars.
pub fn reconstruct_record<T: Default>(
    reader: &mut FlatReader<'_>,
    schema: &[FieldSpec<T>],
) -> ManusResult<T> {
    if reader.remaining() < schema.len() {
        return Err(ManusError::Underflow {
            needed: schema.len(),
            remaining: reader.remaining(),
        });
    }

    let mut record = T::default();
    for field in schema {
        (field.set)(&mut record, reader.next()?);
    }
    Ok(record)
}

fn reconstruct_digit(reader: &mut FlatReader<'_>) -> ManusResult<Digit> {
    let mut digit = reconstruct_record(reader, DIGIT_SCHEMA)?;
    for bone_kind in BoneKind::ALL {
        *digit.bone_mut(bone_kind) = reconstruct_record(reader, BONE_SCHEMA)?;
    }
    Ok(digit)
}

/// Rebuild a Hand from a flat sequence produced by
/// [`flatten_hand`](crate::flatten_hand).
///
/// The sequence must be exactly exhausted: a short input fails with
/// `Underflow`, leftover scalars fail with `Overflow`. Fields outside the
/// schema (hand type, arm, identifiers) come back as defaults and are not
/// part of the round-trip guarantee.
pub fn reconstruct_hand(data: &[f32]) -> ManusResult<Hand> {
    let mut reader = FlatReader::new(data);

    let mut hand: Hand = reconstruct_record(&mut reader, HAND_SCHEMA)?;
    hand.palm = reconstruct_record(&mut reader, PALM_SCHEMA)?;

    for digit_kind in DigitKind::ALL {
        *hand.digit_mut(digit_kind) = reconstruct_digit(&mut reader)?;
    }

    if reader.remaining() != 0 {
        return Err(ManusError::Overflow {
            leftover: reader.remaining(),
        });
    }

    Ok(hand)
}
