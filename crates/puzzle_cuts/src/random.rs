//! Draw helpers over the shared random stream.
//!
//! Every stage reads from one [`RngCore`] handle in a fixed order. Each helper consumes a
//! fixed number of raw words no matter its arguments, so the position of a draw in the
//! stream depends only on how many draws came before it:
//!
//! - [`random_offset`]: one `next_u64`.
//! - [`flip_coin`]: one `next_u32`.
use rand::RngCore;

/// Uniform integer in `[-radius, radius]`.
///
/// Uses a widening multiply instead of a modulo so small spans carry no bias.
#[inline]
pub fn random_offset(rng: &mut dyn RngCore, radius: u32) -> i64 {
    let span = 2 * radius as u128 + 1;
    let draw = ((rng.next_u64() as u128 * span) >> 64) as i64;
    draw - radius as i64
}

/// Fair coin taken from the high bit of one 32-bit draw.
#[inline]
pub fn flip_coin(rng: &mut dyn RngCore) -> bool {
    rng.next_u32() >> 31 == 1
}
