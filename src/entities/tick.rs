use crate::{
    error::Error,
    utils::{MAX_TICK, MIN_TICK},
};

/// An initialized tick of a pool.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tick {
    pub index: i32,
    pub liquidity_gross: u128,
    pub liquidity_net: i128,
}

impl Tick {
    /// ## Errors
    ///
    /// [`Error::InvalidTick`] if the index is not within `[MIN_TICK, MAX_TICK]`.
    #[inline]
    pub fn new(index: i32, liquidity_gross: u128, liquidity_net: i128) -> Result<Self, Error> {
        if !(MIN_TICK..=MAX_TICK).contains(&index) {
            return Err(Error::InvalidTick(index));
        }
        Ok(Self {
            index,
            liquidity_gross,
            liquidity_net,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_below_min_tick() {
        assert_eq!(
            Tick::new(MIN_TICK - 1, 0, 0),
            Err(Error::InvalidTick(MIN_TICK - 1))
        );
    }

    #[test]
    fn test_tick_above_max_tick() {
        assert_eq!(
            Tick::new(MAX_TICK + 1, 0, 0),
            Err(Error::InvalidTick(MAX_TICK + 1))
        );
    }

    #[test]
    fn test_tick_at_bounds() {
        assert_eq!(Tick::new(MIN_TICK, 1, 1).unwrap().index, MIN_TICK);
        assert_eq!(Tick::new(MAX_TICK, 1, -1).unwrap().liquidity_net, -1);
    }
}
