//! # rsk-v3-sdk
//!
//! A Rust SDK for building applications on top of the V3 concentrated liquidity AMM deployed on
//! Rootstock (RSK).
//!
//! ## Features
//!
//! - Tick math matching the on-chain integer implementation bit for bit, on
//!   [alloy-rs](https://github.com/alloy-rs) fixed width integers
//! - Immutable [`Pool`](entities::Pool) snapshots validated against their tick, and multi-hop
//!   [`Route`](entities::Route)s with a memoized mid price
//! - Router path encoding and call data for the payment helpers, with RBTC transparently replaced
//!   by WRBTC
//! - Exact price arithmetic on arbitrary precision fractions

pub mod abi;
pub mod constants;
pub mod entities;
pub mod error;
pub mod payments;
pub mod utils;
pub mod wrbtc;

#[cfg(test)]
mod tests;

pub mod prelude {
    pub use crate::{
        abi::*, constants::*, entities::*, error::*, payments::*, utils::*, wrbtc::*,
    };
    pub use alloy_primitives::{address, Address, Bytes, ChainId, B256, U160, U256};
}
