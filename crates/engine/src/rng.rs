//! RNG module - deterministic seed-to-shape mapping
//!
//! A linear-congruential step with fixed constants. No internal state: every
//! call is seed-in/value-out, so replaying the same action sequence always
//! reproduces the same piece sequence.

use gridfall_types::Shape;

const LCG_A: u64 = 1103515245;
const LCG_C: u64 = 12345;
const LCG_M: u64 = 1 << 31;

/// One LCG step: `(a * seed + c) mod m`.
pub fn hash(seed: u32) -> u32 {
    ((LCG_A * seed as u64 + LCG_C) % LCG_M) as u32
}

/// Map a hashed seed into the 7 shape indices.
///
/// `seed == m - 1` would land exactly on 7, so the result is clamped to keep
/// the map total over the whole seed domain.
pub fn scale(seed: u32) -> usize {
    let unit = seed as f64 / (LCG_M - 1) as f64;
    ((unit * 7.0) as usize).min(6)
}

/// Draw the shape a seed encodes.
pub fn shape_for(seed: u32) -> Shape {
    Shape::from_index(scale(seed))
}
