use crate::{
    entities::{BaseCurrency, Route},
    error::Error,
};
use alloy_primitives::{aliases::U24, Address, Bytes};
use alloy_sol_types::SolValue;

/// Packs one `(token, fee)` leg of a path: the 20 address bytes followed by the fee as a 3-byte
/// big-endian integer.
#[inline]
fn encode_leg(token: Address, fee: u32) -> Result<Vec<u8>, Error> {
    let fee = U24::try_from(fee).map_err(|_| Error::FeeOverflow(fee))?;
    Ok((token, fee).abi_encode_packed())
}

/// Converts a route to a hex encoded path.
///
/// Native currencies appear as their wrapped token. For exact output swaps the whole path,
/// addresses and fees, is reversed since the router consumes it from the output side.
///
/// ## Arguments
///
/// * `route`: the v3 path to convert to an encoded path
/// * `exact_output`: whether the route should be encoded in reverse, for making exact output swaps
///
/// ## Errors
///
/// [`Error::FeeOverflow`] if a pool fee does not fit in 24 bits.
#[inline]
pub fn encode_route_to_path<TInput, TOutput>(
    route: &Route<TInput, TOutput>,
    exact_output: bool,
) -> Result<Bytes, Error>
where
    TInput: BaseCurrency,
    TOutput: BaseCurrency,
{
    let pools = route.pools();
    let token_path = route.token_path();
    let mut path: Vec<u8> = Vec::with_capacity(23 * pools.len() + 20);
    if exact_output {
        for (pool, token) in pools.iter().zip(&token_path[1..]).rev() {
            path.extend(encode_leg(token.address(), pool.fee().into())?);
        }
        path.extend(token_path[0].address().abi_encode_packed());
    } else {
        for (pool, token) in pools.iter().zip(token_path) {
            path.extend(encode_leg(token.address(), pool.fee().into())?);
        }
        path.extend(token_path[pools.len()].address().abi_encode_packed());
    }
    Ok(path.into())
}
