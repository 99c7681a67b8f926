//! The native RBTC currency and its wrapped token on each Rootstock network.

use crate::{
    constants::{RSK_MAINNET, RSK_TESTNET},
    entities::{BaseCurrency, Token},
    error::Error,
    token,
};
use alloy_primitives::ChainId;
use once_cell::sync::Lazy;

pub static WRBTC: Lazy<Token> = Lazy::new(|| {
    token!(
        RSK_MAINNET,
        "C02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2",
        18,
        "WRBTC",
        "Wrapped RBTC"
    )
});

pub static WTRBTC: Lazy<Token> = Lazy::new(|| {
    token!(
        RSK_TESTNET,
        "09b6ca5e4496238a1f176aea6bb607db96c2286e",
        18,
        "WtRBTC",
        "Wrapped tRBTC"
    )
});

static RBTC_MAINNET: Lazy<Rbtc> = Lazy::new(|| Rbtc::new(RSK_MAINNET, &WRBTC));
static RBTC_TESTNET: Lazy<Rbtc> = Lazy::new(|| Rbtc::new(RSK_TESTNET, &WTRBTC));

/// Returns the wrapped native token of the chain, if one is registered.
#[inline]
pub fn wrapped_native(chain_id: ChainId) -> Option<&'static Token> {
    match chain_id {
        RSK_MAINNET => Some(&*WRBTC),
        RSK_TESTNET => Some(&*WTRBTC),
        _ => None,
    }
}

/// RBTC, the native currency of Rootstock
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rbtc {
    chain_id: ChainId,
    wrapped: &'static Token,
}

impl Rbtc {
    #[inline]
    const fn new(chain_id: ChainId, wrapped: &'static Token) -> Self {
        Self { chain_id, wrapped }
    }

    /// Returns the shared RBTC instance of the chain. Instances are created on first request and
    /// live for the rest of the process.
    ///
    /// ## Errors
    ///
    /// [`Error::UnsupportedChain`] if the chain has no wrapped native token.
    #[inline]
    pub fn on_chain(chain_id: ChainId) -> Result<&'static Self, Error> {
        match chain_id {
            RSK_MAINNET => Ok(&*RBTC_MAINNET),
            RSK_TESTNET => Ok(&*RBTC_TESTNET),
            _ => Err(Error::UnsupportedChain(chain_id)),
        }
    }
}

impl BaseCurrency for Rbtc {
    #[inline]
    fn chain_id(&self) -> ChainId {
        self.chain_id
    }

    #[inline]
    fn decimals(&self) -> u8 {
        18
    }

    #[inline]
    fn symbol(&self) -> Option<&str> {
        Some("RBTC")
    }

    #[inline]
    fn name(&self) -> Option<&str> {
        Some("RBTC")
    }

    #[inline]
    fn is_native(&self) -> bool {
        true
    }

    #[inline]
    fn wrapped(&self) -> &Token {
        self.wrapped
    }

    #[inline]
    fn equals(&self, other: &impl BaseCurrency) -> bool {
        other.is_native() && other.chain_id() == self.chain_id
    }
}
