//! ## Tick Math
//! Conversion between ticks and Q64.96 sqrt price ratios, bit for bit identical to the pool
//! contract's TickMath library. Everything is integer arithmetic on 256-bit words.

use super::most_significant_bit;
use crate::error::Error;
use alloy_primitives::{uint, U160, U256};

/// The minimum tick that can be passed to [`get_sqrt_ratio_at_tick`].
pub const MIN_TICK: i32 = -887272;
/// The maximum tick that can be passed to [`get_sqrt_ratio_at_tick`].
pub const MAX_TICK: i32 = -MIN_TICK;

/// The minimum value that can be returned from [`get_sqrt_ratio_at_tick`]. Equivalent to
/// `get_sqrt_ratio_at_tick(MIN_TICK)`
pub const MIN_SQRT_RATIO: U160 = uint!(4295128739_U160);
/// The maximum value that can be returned from [`get_sqrt_ratio_at_tick`]. Equivalent to
/// `get_sqrt_ratio_at_tick(MAX_TICK)`
pub const MAX_SQRT_RATIO: U160 = uint!(1461446703485210103287273052203988822378723970342_U160);

/// `2**128 / sqrt(1.0001)**(2**i)` as Q128.128, indexed by the bit `i` of the absolute tick.
const SQRT_RATIO_FACTORS: [U256; 20] = [
    uint!(0xfffcb933bd6fad37aa2d162d1a594001_U256),
    uint!(0xfff97272373d413259a46990580e213a_U256),
    uint!(0xfff2e50f5f656932ef12357cf3c7fdcc_U256),
    uint!(0xffe5caca7e10e4e61c3624eaa0941cd0_U256),
    uint!(0xffcb9843d60f6159c9db58835c926644_U256),
    uint!(0xff973b41fa98c081472e6896dfb254c0_U256),
    uint!(0xff2ea16466c96a3843ec78b326b52861_U256),
    uint!(0xfe5dee046a99a2a811c461f1969c3053_U256),
    uint!(0xfcbe86c7900a88aedcffc83b479aa3a4_U256),
    uint!(0xf987a7253ac413176f2b074cf7815e54_U256),
    uint!(0xf3392b0822b70005940c7a398e4b70f3_U256),
    uint!(0xe7159475a2c29b7443b29c7fa6e889d9_U256),
    uint!(0xd097f3bdfd2022b8845ad8f792aa5825_U256),
    uint!(0xa9f746462d870fdf8a65dc1f90e061e5_U256),
    uint!(0x70d869a156d2a1b890bb3df62baf32f7_U256),
    uint!(0x31be135f97d08fd981231505542fcfa6_U256),
    uint!(0x9aa508b5b7a84e1c677de54f3e99bc9_U256),
    uint!(0x5d6af8dedb81196699c329225ee604_U256),
    uint!(0x2216e584f5fa1ea926041bedfe98_U256),
    uint!(0x48a170391f7dc42444e8fa2_U256),
];

/// `2**64 / log_2(sqrt(1.0001))`
const LOG_SQRT10001_FACTOR: U256 = uint!(255738958999603826347141_U256);
/// Lower error bound of the log approximation, Q128.128.
const TICK_LOW_OFFSET: U256 = uint!(3402992956809132418596140100660247210_U256);
/// Upper error bound of the log approximation, Q128.128.
const TICK_HIGH_OFFSET: U256 = uint!(291339464771989622907027621153398088495_U256);

/// Returns the sqrt ratio as a Q64.96 for the given tick. The sqrt ratio is computed as
/// sqrt(1.0001)^tick
///
/// ## Arguments
///
/// * `tick`: the tick for which to compute the sqrt ratio
///
/// ## Returns
///
/// The sqrt ratio as a Q64.96, rounded up
#[inline]
pub fn get_sqrt_ratio_at_tick(tick: i32) -> Result<U160, Error> {
    if !(MIN_TICK..=MAX_TICK).contains(&tick) {
        return Err(Error::InvalidTick(tick));
    }
    let abs_tick = tick.unsigned_abs();

    let mut ratio = if abs_tick & 0x1 != 0 {
        SQRT_RATIO_FACTORS[0]
    } else {
        U256::from_limbs([0, 0, 1, 0])
    };
    // MAX_TICK < 2**20, both factors are below 2**128 so the product never overflows
    for (i, factor) in SQRT_RATIO_FACTORS.iter().enumerate().skip(1) {
        if abs_tick & (1 << i) != 0 {
            ratio = (ratio * *factor) >> 128_usize;
        }
    }

    if tick > 0 {
        ratio = U256::MAX / ratio;
    }

    // Q128.128 to Q64.96, rounding up so that the result is never below the true ratio
    let round_up = !(ratio & U256::from(u32::MAX)).is_zero();
    let sqrt_ratio_x96 = (ratio >> 32_usize) + U256::from(round_up as u8);
    Ok(U160::from(sqrt_ratio_x96))
}

/// Returns the tick corresponding to a given sqrt ratio,
/// s.t. get_sqrt_ratio_at_tick(tick) <= sqrt_ratio_x96 and get_sqrt_ratio_at_tick(tick + 1) >
/// sqrt_ratio_x96
///
/// ## Arguments
///
/// * `sqrt_ratio_x96`: the sqrt ratio as a Q64.96 for which to compute the tick, in
///   `[MIN_SQRT_RATIO, MAX_SQRT_RATIO)`
///
/// ## Returns
///
/// The greatest tick for which the ratio is less than or equal to the input ratio
#[inline]
pub fn get_tick_at_sqrt_ratio(sqrt_ratio_x96: U160) -> Result<i32, Error> {
    if sqrt_ratio_x96 < MIN_SQRT_RATIO || sqrt_ratio_x96 >= MAX_SQRT_RATIO {
        return Err(Error::InvalidSqrtRatio(sqrt_ratio_x96));
    }
    let ratio = U256::from(sqrt_ratio_x96);

    // 160 > msb >= 32
    let msb = most_significant_bit(ratio) as usize;

    // Signed Q64.64 log_2 held as two's complement. The integer part is msb - 96.
    let mut log_2_x64: U256 = U256::from(msb).wrapping_sub(uint!(96_U256)) << 64_usize;

    // The first 128 significant bits of the ratio, 2**128 > r >= 2**127
    let mut r: U256 = (ratio << 96_usize) >> (msb - 31);

    // 14 fractional bits of log_2 by repeated squaring
    for bit in (50..64_usize).rev() {
        let square = r * r;
        let f = square.bit(255) as usize;
        r = square >> (127 + f);
        log_2_x64 |= U256::from(f) << bit;
    }

    let log_sqrt10001 = log_2_x64.wrapping_mul(LOG_SQRT10001_FACTOR);
    let tick_low = q128_to_tick(log_sqrt10001.wrapping_sub(TICK_LOW_OFFSET));
    let tick_high = q128_to_tick(log_sqrt10001.wrapping_add(TICK_HIGH_OFFSET));

    if tick_low == tick_high || get_sqrt_ratio_at_tick(tick_high)? > sqrt_ratio_x96 {
        Ok(tick_low)
    } else {
        Ok(tick_high)
    }
}

/// Floors a signed Q128.128 two's complement value to its integer part.
#[inline]
const fn q128_to_tick(x: U256) -> i32 {
    // The low 32 bits of the logical and the arithmetic shift agree.
    x.as_limbs()[2] as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sqrt_ratio(value: u128) -> U160 {
        U160::from(value)
    }

    #[test]
    fn min_tick() {
        assert_eq!(MIN_TICK, -887272);
    }

    #[test]
    fn max_tick() {
        assert_eq!(MAX_TICK, 887272);
    }

    #[test]
    fn get_sqrt_ratio_at_tick_throws_for_tick_too_small() {
        assert_eq!(
            get_sqrt_ratio_at_tick(MIN_TICK - 1),
            Err(Error::InvalidTick(-887273))
        );
    }

    #[test]
    fn get_sqrt_ratio_at_tick_throws_for_tick_too_large() {
        assert_eq!(
            get_sqrt_ratio_at_tick(MAX_TICK + 1),
            Err(Error::InvalidTick(887273))
        );
    }

    #[test]
    fn returns_correct_value_for_min_tick() {
        assert_eq!(get_sqrt_ratio_at_tick(MIN_TICK).unwrap(), MIN_SQRT_RATIO);
    }

    #[test]
    fn returns_correct_value_for_tick_zero() {
        assert_eq!(get_sqrt_ratio_at_tick(0).unwrap(), U160::from(1) << 96);
    }

    #[test]
    fn returns_correct_value_for_max_tick() {
        assert_eq!(get_sqrt_ratio_at_tick(MAX_TICK).unwrap(), MAX_SQRT_RATIO);
    }

    #[test]
    fn returns_reference_values() {
        let cases: [(i32, U160); 9] = [
            (-500000, sqrt_ratio(1101692437043807371)),
            (-50, sqrt_ratio(79030349367926598376800521322)),
            (-1, sqrt_ratio(79224201403219477170569942574)),
            (1, sqrt_ratio(79232123823359799118286999568)),
            (50, sqrt_ratio(79426470787362580746886972461)),
            (100, sqrt_ratio(79625275426524748796330556128)),
            (250000, uint!(21246587762933397357449903968194344_U160)),
            (500000, uint!(5697689776495288729098254600827762987878_U160)),
            (
                738203,
                uint!(847134979253254120489401328389043031315994541_U160),
            ),
        ];
        for (tick, expected) in cases {
            assert_eq!(get_sqrt_ratio_at_tick(tick).unwrap(), expected, "tick {tick}");
        }
    }

    #[test]
    fn get_tick_at_sqrt_ratio_throws_for_too_low() {
        assert_eq!(
            get_tick_at_sqrt_ratio(MIN_SQRT_RATIO - U160::from(1)),
            Err(Error::InvalidSqrtRatio(MIN_SQRT_RATIO - U160::from(1)))
        );
    }

    #[test]
    fn get_tick_at_sqrt_ratio_throws_for_too_high() {
        assert_eq!(
            get_tick_at_sqrt_ratio(MAX_SQRT_RATIO),
            Err(Error::InvalidSqrtRatio(MAX_SQRT_RATIO))
        );
    }

    #[test]
    fn returns_correct_value_for_sqrt_ratio_at_min_tick() {
        assert_eq!(get_tick_at_sqrt_ratio(MIN_SQRT_RATIO).unwrap(), MIN_TICK);
        assert_eq!(
            get_tick_at_sqrt_ratio(MIN_SQRT_RATIO + U160::from(1)).unwrap(),
            MIN_TICK
        );
    }

    #[test]
    fn returns_correct_value_for_sqrt_ratio_at_max_tick() {
        assert_eq!(
            get_tick_at_sqrt_ratio(MAX_SQRT_RATIO - U160::from(1)).unwrap(),
            MAX_TICK - 1
        );
    }

    #[test]
    fn rounds_down_between_ticks() {
        let q96 = U160::from(1) << 96_usize;
        assert_eq!(get_tick_at_sqrt_ratio(q96).unwrap(), 0);
        assert_eq!(get_tick_at_sqrt_ratio(q96 + U160::from(1)).unwrap(), 0);
        assert_eq!(get_tick_at_sqrt_ratio(q96 - U160::from(1)).unwrap(), -1);
        assert_eq!(get_tick_at_sqrt_ratio(U160::from(1) << 100_usize).unwrap(), 55454);
        assert_eq!(get_tick_at_sqrt_ratio(U160::from(1) << 150_usize).unwrap(), 748636);
    }

    #[test]
    fn round_trips_through_sqrt_ratio() {
        let mut tick = MIN_TICK;
        while tick <= MAX_TICK {
            let ratio = get_sqrt_ratio_at_tick(tick).unwrap();
            if tick < MAX_TICK {
                assert_eq!(get_tick_at_sqrt_ratio(ratio).unwrap(), tick);
            }
            if tick > MIN_TICK {
                assert_eq!(get_tick_at_sqrt_ratio(ratio - U160::from(1)).unwrap(), tick - 1);
            }
            tick += 887;
        }
    }

    #[test]
    fn tick_brackets_the_ratio() {
        let span = MAX_SQRT_RATIO - MIN_SQRT_RATIO;
        let mut state = 0x9E37_79B9_7F4A_7C15_u64;
        for _ in 0..2000 {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            // spread the samples over every magnitude of the domain
            let shift = (state % 128) as usize;
            let ratio = MIN_SQRT_RATIO + (U160::from(state) << shift) % span;
            let tick = get_tick_at_sqrt_ratio(ratio).unwrap();
            assert!(get_sqrt_ratio_at_tick(tick).unwrap() <= ratio, "ratio {ratio}");
            assert!(get_sqrt_ratio_at_tick(tick + 1).unwrap() > ratio, "ratio {ratio}");
        }
    }

    #[test]
    fn is_monotonic() {
        let mut previous = get_sqrt_ratio_at_tick(MIN_TICK).unwrap();
        for tick in (MIN_TICK + 1..=MAX_TICK).step_by(1001) {
            let ratio = get_sqrt_ratio_at_tick(tick).unwrap();
            assert!(ratio > previous, "tick {tick}");
            previous = ratio;
        }
        for tick in -300..300 {
            assert!(get_sqrt_ratio_at_tick(tick).unwrap() < get_sqrt_ratio_at_tick(tick + 1).unwrap());
        }
    }
}
