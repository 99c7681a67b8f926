use crate::{
    constants::{FeeAmount, FACTORY_ADDRESS, Q192},
    entities::{BaseCurrency, Price, Tick, TickListDataProvider, Token},
    error::Error,
    utils::{
        compute_pool_address, get_sqrt_ratio_at_tick, u256_to_big_uint, MAX_SQRT_RATIO, MAX_TICK,
        MIN_SQRT_RATIO,
    },
};
use alloy_primitives::{Address, ChainId, B256, U160, U256};
use num_bigint::BigUint;
use once_cell::sync::Lazy;
use tracing::debug;

static _Q192: Lazy<BigUint> = Lazy::new(|| u256_to_big_uint(Q192));

/// Represents a V3 pool
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pool {
    token0: Token,
    token1: Token,
    fee: FeeAmount,
    sqrt_ratio_x96: U160,
    liquidity: u128,
    tick_current: i32,
    tick_data_provider: TickListDataProvider,
}

/// Compute the pool address
///
/// ## Errors
///
/// [`Error::SameCurrency`] if both tokens have the same address.
#[inline]
pub fn get_address(
    token_a: &Token,
    token_b: &Token,
    fee: FeeAmount,
    init_code_hash_manual_override: Option<B256>,
    factory_address_override: Option<Address>,
) -> Result<Address, Error> {
    compute_pool_address(
        factory_address_override.unwrap_or(FACTORY_ADDRESS),
        token_a.address(),
        token_b.address(),
        fee,
        init_code_hash_manual_override,
    )
}

impl Pool {
    /// Construct a pool
    ///
    /// ## Arguments
    ///
    /// * `token_a`: One of the tokens in the pool
    /// * `token_b`: The other token in the pool
    /// * `fee`: The fee in hundredths of a bips of the input amount of every swap that is collected
    ///   by the pool
    /// * `sqrt_ratio_x96`: The sqrt of the current ratio of amounts of token1 to token0
    /// * `liquidity`: The current value of in range liquidity
    /// * `tick_current`: The current tick of the pool
    /// * `ticks`: The initialized ticks of the pool, sorted by index
    ///
    /// ## Errors
    ///
    /// * [`Error::ChainMismatch`] or [`Error::SameCurrency`] if the tokens cannot form a pair
    /// * [`Error::InvalidSqrtRatio`] if the ratio is outside `[MIN_SQRT_RATIO, MAX_SQRT_RATIO]`
    /// * [`Error::InvalidTick`] if the current tick is out of range
    /// * [`Error::InvalidTickForRatio`] if the ratio does not lie within the current tick
    /// * [`Error::TickList`] if the ticks are not valid for the fee tier's tick spacing
    #[inline]
    pub fn new(
        token_a: Token,
        token_b: Token,
        fee: FeeAmount,
        sqrt_ratio_x96: U160,
        liquidity: u128,
        tick_current: i32,
        ticks: Vec<Tick>,
    ) -> Result<Self, Error> {
        let (token0, token1) = if token_a.sorts_before(&token_b)? {
            (token_a, token_b)
        } else {
            (token_b, token_a)
        };
        validate_price(sqrt_ratio_x96, tick_current).inspect_err(|err| {
            debug!(%sqrt_ratio_x96, tick_current, %err, "rejected pool price");
        })?;
        let tick_data_provider = TickListDataProvider::new(ticks, fee.tick_spacing())
            .inspect_err(|err| debug!(?fee, %err, "rejected pool ticks"))?;
        Ok(Self {
            token0,
            token1,
            fee,
            sqrt_ratio_x96,
            liquidity,
            tick_current,
            tick_data_provider,
        })
    }

    /// Returns the pool address
    ///
    /// ## Errors
    ///
    /// Never fails for a constructed pool, since its tokens are distinct.
    #[inline]
    pub fn address(
        &self,
        init_code_hash_manual_override: Option<B256>,
        factory_address_override: Option<Address>,
    ) -> Result<Address, Error> {
        get_address(
            &self.token0,
            &self.token1,
            self.fee,
            init_code_hash_manual_override,
            factory_address_override,
        )
    }

    #[inline]
    pub fn chain_id(&self) -> ChainId {
        self.token0.chain_id()
    }

    #[inline]
    pub const fn token0(&self) -> &Token {
        &self.token0
    }

    #[inline]
    pub const fn token1(&self) -> &Token {
        &self.token1
    }

    #[inline]
    pub const fn fee(&self) -> FeeAmount {
        self.fee
    }

    #[inline]
    pub const fn sqrt_ratio_x96(&self) -> U160 {
        self.sqrt_ratio_x96
    }

    #[inline]
    pub const fn liquidity(&self) -> u128 {
        self.liquidity
    }

    #[inline]
    pub const fn tick_current(&self) -> i32 {
        self.tick_current
    }

    #[inline]
    pub const fn tick_data_provider(&self) -> &TickListDataProvider {
        &self.tick_data_provider
    }

    #[inline]
    pub const fn tick_spacing(&self) -> i32 {
        self.fee.tick_spacing()
    }

    /// Returns true if the currency, once wrapped, is either token0 or token1
    ///
    /// ## Arguments
    ///
    /// * `currency`: The currency to check
    #[inline]
    pub fn involves_token(&self, currency: &impl BaseCurrency) -> bool {
        let token = currency.wrapped();
        self.token0.equals(token) || self.token1.equals(token)
    }

    /// Returns the current mid price of the pool in terms of token0, i.e. the ratio of token1 over
    /// token0
    #[inline]
    pub fn token0_price(&self) -> Price<Token, Token> {
        let sqrt_ratio_x96 = u256_to_big_uint(U256::from(self.sqrt_ratio_x96));
        Price::new(
            self.token0.clone(),
            self.token1.clone(),
            _Q192.clone(),
            &sqrt_ratio_x96 * &sqrt_ratio_x96,
        )
    }

    /// Returns the current mid price of the pool in terms of token1, i.e. the ratio of token0 over
    /// token1
    #[inline]
    pub fn token1_price(&self) -> Price<Token, Token> {
        let sqrt_ratio_x96 = u256_to_big_uint(U256::from(self.sqrt_ratio_x96));
        Price::new(
            self.token1.clone(),
            self.token0.clone(),
            &sqrt_ratio_x96 * &sqrt_ratio_x96,
            _Q192.clone(),
        )
    }

    /// Return the price of the given token in terms of the other token in the pool.
    ///
    /// ## Errors
    ///
    /// [`Error::InvalidToken`] if the token is not in the pool.
    #[inline]
    pub fn price_of(&self, token: &Token) -> Result<Price<Token, Token>, Error> {
        if self.token0.equals(token) {
            Ok(self.token0_price())
        } else if self.token1.equals(token) {
            Ok(self.token1_price())
        } else {
            Err(Error::InvalidToken)
        }
    }
}

/// Checks the ratio is in range and lies within `[ratio(tick), ratio(tick + 1)]`.
fn validate_price(sqrt_ratio_x96: U160, tick_current: i32) -> Result<(), Error> {
    if sqrt_ratio_x96 < MIN_SQRT_RATIO || sqrt_ratio_x96 > MAX_SQRT_RATIO {
        return Err(Error::InvalidSqrtRatio(sqrt_ratio_x96));
    }
    let lower = get_sqrt_ratio_at_tick(tick_current)?;
    let consistent = if tick_current < MAX_TICK {
        lower <= sqrt_ratio_x96 && sqrt_ratio_x96 <= get_sqrt_ratio_at_tick(tick_current + 1)?
    } else {
        sqrt_ratio_x96 == lower
    };
    if !consistent {
        return Err(Error::InvalidTickForRatio {
            tick: tick_current,
            sqrt_ratio_x96,
        });
    }
    Ok(())
}
