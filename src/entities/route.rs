use crate::{
    entities::{BaseCurrency, Fraction, Pool, Price, Token},
    error::Error,
};
use alloy_primitives::ChainId;
use once_cell::sync::OnceCell;
use tracing::{debug, trace};

/// Represents a list of pools through which a swap can occur
#[derive(Clone, Debug)]
pub struct Route<TInput, TOutput>
where
    TInput: BaseCurrency,
    TOutput: BaseCurrency,
{
    pools: Vec<Pool>,
    token_path: Vec<Token>,
    /// The input currency
    input: TInput,
    /// The output currency
    output: TOutput,
    mid_price: OnceCell<Price<TInput, TOutput>>,
}

impl<TInput, TOutput> Route<TInput, TOutput>
where
    TInput: BaseCurrency,
    TOutput: BaseCurrency,
{
    /// Creates an instance of route.
    ///
    /// ## Arguments
    ///
    /// * `pools`: An array of [`Pool`] objects, ordered by the route the swap will take
    /// * `input`: The input currency
    /// * `output`: The output currency
    ///
    /// ## Errors
    ///
    /// Fails on the first violated invariant, checked in this order: [`Error::NoPools`],
    /// [`Error::ChainMismatch`], [`Error::InputNotInFirstPool`], [`Error::DisconnectedRoute`],
    /// [`Error::OutputNotInLastPool`].
    #[inline]
    pub fn new(pools: Vec<Pool>, input: TInput, output: TOutput) -> Result<Self, Error> {
        let token_path = Self::build_token_path(&pools, &input, &output)
            .inspect_err(|err| debug!(pools = pools.len(), %err, "rejected route"))?;
        Ok(Self {
            pools,
            token_path,
            input,
            output,
            mid_price: OnceCell::new(),
        })
    }

    /// Walks the pools from the wrapped input, returning every token the route passes through.
    fn build_token_path(
        pools: &[Pool],
        input: &TInput,
        output: &TOutput,
    ) -> Result<Vec<Token>, Error> {
        let (first, last) = match (pools.first(), pools.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return Err(Error::NoPools),
        };

        let chain_id = first.chain_id();
        if let Some(pool) = pools.iter().find(|pool| pool.chain_id() != chain_id) {
            return Err(Error::ChainMismatch(chain_id, pool.chain_id()));
        }

        let wrapped_input = input.wrapped();
        if !first.involves_token(wrapped_input) {
            return Err(Error::InputNotInFirstPool);
        }

        let mut token_path = Vec::with_capacity(pools.len() + 1);
        token_path.push(wrapped_input.clone());
        let mut current = wrapped_input;
        for (index, pool) in pools.iter().enumerate() {
            current = if current.equals(pool.token0()) {
                pool.token1()
            } else if current.equals(pool.token1()) {
                pool.token0()
            } else {
                return Err(Error::DisconnectedRoute { index });
            };
            token_path.push(current.clone());
        }

        let wrapped_output = output.wrapped();
        if !last.involves_token(wrapped_output) {
            return Err(Error::OutputNotInLastPool);
        }
        if !current.equals(wrapped_output) {
            return Err(Error::DisconnectedRoute {
                index: pools.len() - 1,
            });
        }
        Ok(token_path)
    }

    #[inline]
    pub fn pools(&self) -> &[Pool] {
        &self.pools
    }

    /// Returns the path of tokens that the route will take, one more than the number of pools
    #[inline]
    pub fn token_path(&self) -> &[Token] {
        &self.token_path
    }

    #[inline]
    pub const fn input(&self) -> &TInput {
        &self.input
    }

    #[inline]
    pub const fn output(&self) -> &TOutput {
        &self.output
    }

    #[inline]
    pub fn chain_id(&self) -> ChainId {
        self.pools[0].chain_id()
    }

    /// Returns the mid price of the route, computed on first access and cached for the lifetime
    /// of the route
    #[inline]
    pub fn mid_price(&self) -> &Price<TInput, TOutput> {
        self.mid_price.get_or_init(|| {
            let price = self
                .pools
                .iter()
                .zip(&self.token_path)
                .map(|(pool, token)| {
                    let hop = if token.equals(pool.token0()) {
                        pool.token0_price()
                    } else {
                        pool.token1_price()
                    };
                    hop.as_fraction()
                })
                .fold(Fraction::new(1, 1), |acc, hop| acc * hop);
            trace!(
                hops = self.pools.len(),
                numerator = %price.numerator,
                denominator = %price.denominator,
                "computed mid price"
            );
            Price::new(
                self.input.clone(),
                self.output.clone(),
                price.denominator,
                price.numerator,
            )
        })
    }
}

impl<TInput, TOutput> PartialEq for Route<TInput, TOutput>
where
    TInput: BaseCurrency + PartialEq,
    TOutput: BaseCurrency + PartialEq,
{
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.pools == other.pools && self.input == other.input && self.output == other.output
    }
}
