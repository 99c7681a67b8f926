use crate::{
    entities::Tick,
    error::{Error, TickListError},
    utils::TickList,
};
use derive_more::Deref;

/// A data provider for ticks that is backed by an in-memory array of ticks.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deref)]
pub struct TickListDataProvider(Vec<Tick>);

impl TickListDataProvider {
    /// ## Errors
    ///
    /// [`Error::TickList`] if the ticks are not a valid list for the tick spacing.
    #[inline]
    pub fn new(ticks: Vec<Tick>, tick_spacing: i32) -> Result<Self, Error> {
        ticks.validate_list(tick_spacing)?;
        Ok(Self(ticks))
    }

    #[inline]
    pub fn get_tick(&self, tick: i32) -> Result<&Tick, TickListError> {
        self.0.get_tick(tick)
    }
}
