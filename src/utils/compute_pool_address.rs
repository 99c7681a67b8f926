use crate::{
    constants::{FeeAmount, POOL_INIT_CODE_HASH},
    error::Error,
};
use alloy_primitives::{aliases::U24, keccak256, Address, B256};
use alloy_sol_types::SolValue;

/// Computes a pool address
///
/// ## Arguments
///
/// * `factory`: The V3 factory address
/// * `token_a`: The first token of the pair, irrespective of sort order
/// * `token_b`: The second token of the pair, irrespective of sort order
/// * `fee`: The fee tier of the pool
/// * `init_code_hash_manual_override`: Override the init code hash used to compute the pool address
///   if necessary
///
/// ## Errors
///
/// [`Error::SameCurrency`] if both addresses are equal.
///
/// ## Examples
///
/// ```
/// use rsk_v3_sdk::prelude::*;
///
/// let token_0 = address!("0000000000000000000000000000000000000001");
/// let token_1 = address!("0000000000000000000000000000000000000002");
/// let result =
///     compute_pool_address(FACTORY_ADDRESS, token_1, token_0, FeeAmount::MEDIUM, None).unwrap();
/// assert_eq!(result, address!("82ed8fbd30624356bbd78717fc32d38c8b1116d3"));
/// ```
#[inline]
pub fn compute_pool_address(
    factory: Address,
    token_a: Address,
    token_b: Address,
    fee: FeeAmount,
    init_code_hash_manual_override: Option<B256>,
) -> Result<Address, Error> {
    if token_a == token_b {
        return Err(Error::SameCurrency);
    }
    let (token_0, token_1) = if token_a < token_b {
        (token_a, token_b)
    } else {
        (token_b, token_a)
    };
    let fee: U24 = fee.into();
    let salt = keccak256((token_0, token_1, fee).abi_encode());
    Ok(factory.create2(
        salt,
        init_code_hash_manual_override.unwrap_or(POOL_INIT_CODE_HASH),
    ))
}
