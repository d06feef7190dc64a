//! Capture-time round-trip verification
//!
//! Flattens each right hand, rebuilds it, flattens again and compares
//! element-wise. Schema-covered fields must survive the trip exactly; any
//! divergence means the two codec directions disagree on order or count.

use manus_codec::{flatten_hand, reconstruct_hand};
use manus_core::{Hand, HandType, ManusError, ManusResult};

use crate::source::TrackingFrame;

/// Verify one hand and return its flat vector.
pub fn verify_hand(hand: &Hand) -> ManusResult<Vec<f32>> {
    let flat = flatten_hand(hand)?;
    let rebuilt = reconstruct_hand(&flat)?;
    let flat_again = flatten_hand(&rebuilt)?;

    if let Some(index) = flat
        .iter()
        .zip(flat_again.iter())
        .position(|(a, b)| a != b)
    {
        return Err(ManusError::RoundTripMismatch { index });
    }

    Ok(flat)
}

/// Verify every right hand in a frame; left hands are skipped.
pub fn verify_frame(frame: &TrackingFrame) -> ManusResult<Vec<Vec<f32>>> {
    frame
        .hands
        .iter()
        .filter(|hand| hand.hand_type == HandType::Right)
        .map(verify_hand)
        .collect()
}
