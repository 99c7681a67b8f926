use super::BaseCurrency;
use crate::error::Error;
use alloy_primitives::{Address, ChainId};

/// Represents an ERC20 token with a unique address and some metadata.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    pub chain_id: ChainId,
    pub address: Address,
    pub decimals: u8,
    pub symbol: Option<String>,
    pub name: Option<String>,
}

impl Token {
    #[inline]
    pub const fn new(
        chain_id: ChainId,
        address: Address,
        decimals: u8,
        symbol: Option<String>,
        name: Option<String>,
    ) -> Self {
        Self {
            chain_id,
            address,
            decimals,
            symbol,
            name,
        }
    }

    #[inline]
    pub const fn address(&self) -> Address {
        self.address
    }

    /// Returns true if the address of this token sorts before the address of the other token
    ///
    /// ## Arguments
    ///
    /// * `other`: The other token to compare
    ///
    /// ## Errors
    ///
    /// [`Error::ChainMismatch`] if the tokens are on different chains, [`Error::SameCurrency`] if
    /// they have the same address.
    #[inline]
    pub fn sorts_before(&self, other: &Self) -> Result<bool, Error> {
        if self.chain_id != other.chain_id {
            return Err(Error::ChainMismatch(self.chain_id, other.chain_id));
        }
        if self.address == other.address {
            return Err(Error::SameCurrency);
        }
        Ok(self.address < other.address)
    }
}

impl BaseCurrency for Token {
    #[inline]
    fn chain_id(&self) -> ChainId {
        self.chain_id
    }

    #[inline]
    fn decimals(&self) -> u8 {
        self.decimals
    }

    #[inline]
    fn symbol(&self) -> Option<&str> {
        self.symbol.as_deref()
    }

    #[inline]
    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    #[inline]
    fn is_native(&self) -> bool {
        false
    }

    #[inline]
    fn wrapped(&self) -> &Token {
        self
    }

    /// Two tokens are equal if they are on the same chain and have the same address.
    #[inline]
    fn equals(&self, other: &impl BaseCurrency) -> bool {
        other.is_token()
            && self.chain_id == other.chain_id()
            && self.address == other.wrapped().address
    }
}

/// Creates a [`Token`] from a chain id, an address literal and decimals, optionally followed by
/// the symbol and the name.
///
/// ```
/// use rsk_v3_sdk::{prelude::*, token};
///
/// let token = token!(30, "0000000000000000000000000000000000000001", 18, "t0", "token0");
/// assert_eq!(token.symbol(), Some("t0"));
/// ```
#[macro_export]
macro_rules! token {
    ($chain_id:expr, $address:literal, $decimals:expr) => {
        $crate::entities::Token::new(
            $chain_id,
            $crate::prelude::address!($address),
            $decimals,
            None,
            None,
        )
    };
    ($chain_id:expr, $address:literal, $decimals:expr, $symbol:expr) => {
        $crate::entities::Token::new(
            $chain_id,
            $crate::prelude::address!($address),
            $decimals,
            Some($symbol.to_string()),
            None,
        )
    };
    ($chain_id:expr, $address:literal, $decimals:expr, $symbol:expr, $name:expr) => {
        $crate::entities::Token::new(
            $chain_id,
            $crate::prelude::address!($address),
            $decimals,
            Some($symbol.to_string()),
            Some($name.to_string()),
        )
    };
}
