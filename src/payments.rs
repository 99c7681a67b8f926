//! ## Payments
//! Call data for the router's payment helpers: unwrapping WRBTC, sweeping tokens and refunding
//! RBTC, optionally skimming a fee to a second recipient.

use super::abi::IPeripheryPaymentsWithFee;
use crate::{
    entities::{Fraction, Percent, Token},
    error::Error,
};
use alloy_primitives::{Address, Bytes, U256};
use alloy_sol_types::SolCall;
use num_integer::Integer;
use num_traits::ToPrimitive;

/// The largest fee the router accepts, in bips.
const MAX_FEE_BIPS: u64 = 10_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeeOptions {
    /// The percent of the output that will be taken as a fee.
    pub fee: Percent,
    /// The recipient of the fee.
    pub recipient: Address,
}

/// The fee in bips, rounded toward negative infinity
fn encode_fee_bips(fee: &Percent) -> Result<U256, Error> {
    let scaled = fee.as_fraction() * &Fraction::new(10_000, 1);
    let bips = scaled.numerator.div_floor(&scaled.denominator);
    match bips.to_u64() {
        Some(bips) if bips <= MAX_FEE_BIPS => Ok(U256::from(bips)),
        _ => Err(Error::FeeOutOfRange(bips)),
    }
}

/// Encodes a call that unwraps the router's WRBTC balance and sends the RBTC to `recipient`.
///
/// ## Errors
///
/// [`Error::FeeOutOfRange`] if the fee is negative or above 100%.
#[inline]
pub fn encode_unwrap_wrbtc(
    amount_minimum: U256,
    recipient: Address,
    fee_options: Option<&FeeOptions>,
) -> Result<Bytes, Error> {
    Ok(if let Some(fee_options) = fee_options {
        IPeripheryPaymentsWithFee::unwrapWRBTCWithFeeCall {
            amountMinimum: amount_minimum,
            recipient,
            feeBips: encode_fee_bips(&fee_options.fee)?,
            feeRecipient: fee_options.recipient,
        }
        .abi_encode()
    } else {
        IPeripheryPaymentsWithFee::unwrapWRBTCCall {
            amountMinimum: amount_minimum,
            recipient,
        }
        .abi_encode()
    }
    .into())
}

/// Encodes a call that sends the router's full balance of `token` to `recipient`.
///
/// ## Errors
///
/// [`Error::FeeOutOfRange`] if the fee is negative or above 100%.
#[inline]
pub fn encode_sweep_token(
    token: &Token,
    amount_minimum: U256,
    recipient: Address,
    fee_options: Option<&FeeOptions>,
) -> Result<Bytes, Error> {
    Ok(if let Some(fee_options) = fee_options {
        IPeripheryPaymentsWithFee::sweepTokenWithFeeCall {
            token: token.address(),
            amountMinimum: amount_minimum,
            recipient,
            feeBips: encode_fee_bips(&fee_options.fee)?,
            feeRecipient: fee_options.recipient,
        }
        .abi_encode()
    } else {
        IPeripheryPaymentsWithFee::sweepTokenCall {
            token: token.address(),
            amountMinimum: amount_minimum,
            recipient,
        }
        .abi_encode()
    }
    .into())
}

#[inline]
pub fn encode_refund_rbtc() -> Bytes {
    IPeripheryPaymentsWithFee::refundRBTCCall {}
        .abi_encode()
        .into()
}
