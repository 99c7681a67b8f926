//! ## Bit Math
//!
//! Bit scanning over 256-bit words, as done by the on-chain BitMath library.

use alloy_primitives::U256;

/// Returns the index of the most significant set bit of `x`.
///
/// ## Panics
///
/// Panics with `ZERO` if `x` is zero.
#[inline]
pub fn most_significant_bit(x: U256) -> u8 {
    assert!(!x.is_zero(), "ZERO");
    (U256::BITS - 1 - x.leading_zeros()) as u8
}
