//! ## Price and tick conversions
//! Utility functions for converting [`i32`] ticks into [`Price`] prices.

use crate::{
    constants::Q192,
    entities::{Price, Token},
    error::Error,
    utils::{get_sqrt_ratio_at_tick, u256_to_big_uint},
};
use alloy_primitives::U256;

/// Returns a price object corresponding to the input tick and the base/quote token.
/// Inputs must be tokens because the address order is used to interpret the price represented by
/// the tick.
///
/// ## Arguments
///
/// * `base_token`: the base token of the price
/// * `quote_token`: the quote token of the price
/// * `tick`: the tick for which to return the price
///
/// ## Errors
///
/// [`Error::InvalidTick`] if the tick is out of range, or the errors of [`Token::sorts_before`].
#[inline]
pub fn tick_to_price(
    base_token: Token,
    quote_token: Token,
    tick: i32,
) -> Result<Price<Token, Token>, Error> {
    let sqrt_ratio_x96 = u256_to_big_uint(U256::from(get_sqrt_ratio_at_tick(tick)?));
    let ratio_x192 = &sqrt_ratio_x96 * &sqrt_ratio_x96;
    let q192 = u256_to_big_uint(Q192);
    Ok(if base_token.sorts_before(&quote_token)? {
        Price::new(base_token, quote_token, q192, ratio_x192)
    } else {
        Price::new(base_token, quote_token, ratio_x192, q192)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{token, utils::MAX_TICK};
    use once_cell::sync::Lazy;

    static TOKEN0: Lazy<Token> = Lazy::new(|| {
        token!(
            30,
            "0000000000000000000000000000000000000000",
            18,
            "T0",
            "token0"
        )
    });
    static TOKEN1: Lazy<Token> = Lazy::new(|| {
        token!(
            30,
            "1111111111111111111111111111111111111111",
            18,
            "T1",
            "token1"
        )
    });
    static TOKEN2_6DECIMALS: Lazy<Token> = Lazy::new(|| {
        token!(
            30,
            "2222222222222222222222222222222222222222",
            6,
            "T2",
            "token2"
        )
    });

    #[test]
    fn tick_to_price_test_1() {
        assert_eq!(
            tick_to_price(TOKEN1.clone(), TOKEN0.clone(), -74959)
                .unwrap()
                .to_significant(5, None),
            "1800"
        );
    }

    #[test]
    fn tick_to_price_test_2() {
        assert_eq!(
            tick_to_price(TOKEN0.clone(), TOKEN1.clone(), -74959)
                .unwrap()
                .to_significant(5, None),
            "0.00055556"
        );
    }

    #[test]
    fn tick_to_price_test_3() {
        assert_eq!(
            tick_to_price(TOKEN0.clone(), TOKEN1.clone(), 74959)
                .unwrap()
                .to_significant(5, None),
            "1800"
        );
    }

    #[test]
    fn tick_to_price_test_4() {
        assert_eq!(
            tick_to_price(TOKEN1.clone(), TOKEN0.clone(), 74959)
                .unwrap()
                .to_significant(5, None),
            "0.00055556"
        );
    }

    #[test]
    fn tick_to_price_test_5() {
        assert_eq!(
            tick_to_price(TOKEN0.clone(), TOKEN2_6DECIMALS.clone(), -276225)
                .unwrap()
                .to_significant(5, None),
            "1.01"
        );
    }

    #[test]
    fn tick_to_price_test_6() {
        assert_eq!(
            tick_to_price(TOKEN2_6DECIMALS.clone(), TOKEN0.clone(), -276225)
                .unwrap()
                .to_significant(5, None),
            "0.99015"
        );
    }

    #[test]
    fn tick_to_price_test_7() {
        assert_eq!(
            tick_to_price(TOKEN0.clone(), TOKEN2_6DECIMALS.clone(), -276423)
                .unwrap()
                .to_significant(5, None),
            "0.99015"
        );
    }

    #[test]
    fn tick_to_price_test_8() {
        assert_eq!(
            tick_to_price(TOKEN2_6DECIMALS.clone(), TOKEN0.clone(), -276423)
                .unwrap()
                .to_significant(5, None),
            "1.0099"
        );
    }

    #[test]
    fn tick_to_price_fails_for_invalid_inputs() {
        assert_eq!(
            tick_to_price(TOKEN0.clone(), TOKEN1.clone(), MAX_TICK + 1),
            Err(Error::InvalidTick(MAX_TICK + 1))
        );
        assert_eq!(
            tick_to_price(TOKEN0.clone(), TOKEN0.clone(), 0),
            Err(Error::SameCurrency)
        );
    }
}
