#[cfg(doc)]
use crate::prelude::*;

use alloy_primitives::{ChainId, U160};
use num_bigint::BigInt;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Thrown when a tick is not between [`MIN_TICK`] and [`MAX_TICK`].
    #[error("Invalid tick: {0}")]
    InvalidTick(i32),

    /// Thrown when the ratio passed to [`get_tick_at_sqrt_ratio`] does not correspond to a price
    /// between [`MIN_TICK`] and [`MAX_TICK`], or a pool ratio lies outside
    /// `[MIN_SQRT_RATIO, MAX_SQRT_RATIO]`.
    #[error("Invalid square root price: {0}")]
    InvalidSqrtRatio(U160),

    /// Thrown when a pool's current tick does not bracket its sqrt ratio.
    #[error("Tick {tick} is inconsistent with sqrt ratio {sqrt_ratio_x96}")]
    InvalidTickForRatio { tick: i32, sqrt_ratio_x96: U160 },

    #[error("Chain ids do not match: {0} != {1}")]
    ChainMismatch(ChainId, ChainId),

    #[error("Currencies are identical")]
    SameCurrency,

    /// Thrown when a currency is not one of the pool's tokens, or two prices cannot be chained.
    #[error("Invalid token")]
    InvalidToken,

    #[error("Route has no pools")]
    NoPools,

    #[error("Input currency is not in the first pool")]
    InputNotInFirstPool,

    #[error("Output currency is not in the last pool")]
    OutputNotInLastPool,

    /// Thrown when the pool at `index` does not contain the token the route arrives with.
    #[error("Route is disconnected at pool {index}")]
    DisconnectedRoute { index: usize },

    #[error("Fee {0} does not fit in 24 bits")]
    FeeOverflow(u32),

    #[error("Fee of {0} bips is out of range")]
    FeeOutOfRange(BigInt),

    #[error("Invalid fee amount: {0}")]
    InvalidFeeAmount(u32),

    #[error("Invalid tick spacing: {0}")]
    InvalidTickSpacing(i32),

    /// Thrown when no wrapped native token is registered for the chain.
    #[error("Unsupported chain: {0}")]
    UnsupportedChain(ChainId),

    #[error("{0}")]
    TickList(#[from] TickListError),
}

#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, thiserror::Error)]
pub enum TickListError {
    #[error("Tick spacing must be greater than zero")]
    ZeroTickSpacing,
    #[error("Tick {0} is not a multiple of the tick spacing")]
    NotOnSpacing(i32),
    #[error("Ticks are not sorted")]
    Unsorted,
    #[error("Net liquidity does not sum to zero")]
    NonZeroNet,
    #[error("Below smallest tick")]
    BelowSmallest,
    #[error("Not contained in tick list")]
    NotContained,
}
