use super::Token;
use alloy_primitives::ChainId;
use core::fmt::Debug;

/// A currency is any fungible financial instrument, including the chain's native coin and all
/// of its tokens.
pub trait BaseCurrency: Clone + Debug {
    /// The chain ID on which this currency resides
    fn chain_id(&self) -> ChainId;

    /// The decimals used in representing currency amounts
    fn decimals(&self) -> u8;

    fn symbol(&self) -> Option<&str>;

    fn name(&self) -> Option<&str>;

    /// Whether the currency is native to the chain and must be wrapped (e.g. RBTC)
    fn is_native(&self) -> bool;

    #[inline]
    fn is_token(&self) -> bool {
        !self.is_native()
    }

    /// The token that represents this currency in pools, i.e. itself for tokens and the wrapped
    /// token for native currencies.
    fn wrapped(&self) -> &Token;

    /// Returns whether the currency is equal to the other currency
    fn equals(&self, other: &impl BaseCurrency) -> bool;
}
