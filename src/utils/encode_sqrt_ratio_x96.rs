use alloy_primitives::U160;
use num_bigint::BigUint;

/// Returns the sqrt ratio as a Q64.96 corresponding to a given ratio of amount1 and amount0
///
/// ## Arguments
///
/// * `amount1`: The numerator amount i.e., the amount of token1
/// * `amount0`: The denominator amount i.e., the amount of token0
///
/// returns: U160 The sqrt ratio as a Q64.96, rounded down
///
/// ## Panics
///
/// Panics if `amount0` is zero or the ratio does not fit a Q64.96.
#[inline]
pub fn encode_sqrt_ratio_x96(amount1: impl Into<BigUint>, amount0: impl Into<BigUint>) -> U160 {
    let numerator: BigUint = amount1.into() << 192;
    let ratio_x192 = numerator / amount0.into();
    U160::from_be_slice(&ratio_x192.sqrt().to_bytes_be())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::Q96;
    use alloy_primitives::U256;

    #[test]
    fn test_encode_sqrt_ratio_x96() {
        assert_eq!(U256::from(encode_sqrt_ratio_x96(1_u8, 1_u8)), Q96);
        assert_eq!(
            encode_sqrt_ratio_x96(100_u8, 1_u8),
            U160::from(792281625142643375935439503360_u128)
        );
        assert_eq!(
            encode_sqrt_ratio_x96(1_u8, 100_u8),
            U160::from(7922816251426433759354395033_u128)
        );
        assert_eq!(
            encode_sqrt_ratio_x96(111_u16, 333_u16),
            U160::from(45742400955009932534161870629_u128)
        );
        assert_eq!(
            encode_sqrt_ratio_x96(333_u16, 111_u16),
            U160::from(137227202865029797602485611888_u128)
        );
    }

    #[test]
    fn rounds_down() {
        assert_eq!(
            encode_sqrt_ratio_x96(1_u8, 5_u8),
            U160::from(35431911422859142059220343232_u128)
        );
        assert_eq!(
            encode_sqrt_ratio_x96(1_u8, 7_u8),
            U160::from(29945430692193331598545686166_u128)
        );
    }
}
