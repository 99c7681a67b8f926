use crate::{entities::Tick, error::TickListError};

/// Utility methods for interacting with sorted lists of ticks
pub trait TickList {
    /// Checks that every tick lies on the spacing, the list is sorted, and the net liquidity of
    /// all ticks sums to zero. An empty list is valid.
    fn validate_list(&self, tick_spacing: i32) -> Result<(), TickListError>;

    /// Finds the largest tick in the list that is less than or equal to `tick`
    ///
    /// ## Returns
    ///
    /// * `Ok(usize)`: The position of that tick in the list
    /// * `Err(TickListError::BelowSmallest)`: If the tick is below the smallest tick or the list
    ///   is empty
    fn binary_search_by_tick(&self, tick: i32) -> Result<usize, TickListError>;

    /// Returns the tick with exactly the given index.
    fn get_tick(&self, index: i32) -> Result<&Tick, TickListError>;
}

impl TickList for [Tick] {
    #[inline]
    fn validate_list(&self, tick_spacing: i32) -> Result<(), TickListError> {
        if tick_spacing <= 0 {
            return Err(TickListError::ZeroTickSpacing);
        }
        if let Some(tick) = self.iter().find(|x| x.index % tick_spacing != 0) {
            return Err(TickListError::NotOnSpacing(tick.index));
        }
        if self.windows(2).any(|w| w[1] < w[0]) {
            return Err(TickListError::Unsorted);
        }
        let net = self
            .iter()
            .try_fold(0_i128, |acc, x| acc.checked_add(x.liquidity_net))
            .ok_or(TickListError::NonZeroNet)?;
        if net != 0 {
            return Err(TickListError::NonZeroNet);
        }
        Ok(())
    }

    #[inline]
    fn binary_search_by_tick(&self, tick: i32) -> Result<usize, TickListError> {
        match self.partition_point(|x| x.index <= tick) {
            0 => Err(TickListError::BelowSmallest),
            i => Ok(i - 1),
        }
    }

    #[inline]
    fn get_tick(&self, index: i32) -> Result<&Tick, TickListError> {
        let tick = &self[self.binary_search_by_tick(index)?];
        if tick.index != index {
            return Err(TickListError::NotContained);
        }
        Ok(tick)
    }
}
