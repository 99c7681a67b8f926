use crate::error::Error;
use alloy_primitives::{address, aliases::U24, b256, Address, ChainId, B256, U256};

pub const FACTORY_ADDRESS: Address = address!("62d8E3A6F17Cb0dEe8A63904D28D808Efbd52da3");

pub const ADDRESS_ZERO: Address = Address::ZERO;

pub const POOL_INIT_CODE_HASH: B256 =
    b256!("f1b4e4a00b5d1e284d4ef27701abdf40abd246572dbd3077158bcb5917a3c627");

/// Rootstock mainnet.
pub const RSK_MAINNET: ChainId = 30;
/// Rootstock testnet.
pub const RSK_TESTNET: ChainId = 31;

pub const Q96: U256 = U256::from_limbs([0, 1 << 32, 0, 0]);
pub const Q192: U256 = U256::from_limbs([0, 0, 0, 1]);

/// The default factory enabled fee amounts, denominated in hundredths of bips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeeAmount {
    LOWEST = 100,
    LOW = 500,
    MEDIUM = 3000,
    HIGH = 10000,
}

impl FeeAmount {
    /// The default factory tick spacings by fee amount.
    #[inline]
    pub const fn tick_spacing(&self) -> i32 {
        match self {
            Self::LOWEST => 1,
            Self::LOW => 10,
            Self::MEDIUM => 60,
            Self::HIGH => 200,
        }
    }

    /// The fee tier that the factory enables for the given tick spacing.
    #[inline]
    pub fn from_tick_spacing(tick_spacing: i32) -> Result<Self, Error> {
        match tick_spacing {
            1 => Ok(Self::LOWEST),
            10 => Ok(Self::LOW),
            60 => Ok(Self::MEDIUM),
            200 => Ok(Self::HIGH),
            _ => Err(Error::InvalidTickSpacing(tick_spacing)),
        }
    }
}

impl TryFrom<u32> for FeeAmount {
    type Error = Error;

    #[inline]
    fn try_from(fee: u32) -> Result<Self, Error> {
        match fee {
            100 => Ok(Self::LOWEST),
            500 => Ok(Self::LOW),
            3000 => Ok(Self::MEDIUM),
            10000 => Ok(Self::HIGH),
            _ => Err(Error::InvalidFeeAmount(fee)),
        }
    }
}

impl From<FeeAmount> for u32 {
    #[inline]
    fn from(fee: FeeAmount) -> Self {
        fee as u32
    }
}

impl From<FeeAmount> for U24 {
    #[inline]
    fn from(fee: FeeAmount) -> Self {
        U24::from_limbs([fee as u64])
    }
}
