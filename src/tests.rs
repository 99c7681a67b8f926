use crate::{
    constants::{FeeAmount, RSK_MAINNET},
    entities::{Pool, Token},
    token,
    utils::encode_sqrt_ratio_x96,
    wrbtc::Rbtc,
};
use once_cell::sync::Lazy;

pub(crate) use crate::wrbtc::WRBTC;

pub static RBTC: Lazy<Rbtc> = Lazy::new(|| *Rbtc::on_chain(RSK_MAINNET).unwrap());
pub static TOKEN0: Lazy<Token> = Lazy::new(|| {
    token!(
        RSK_MAINNET,
        "0000000000000000000000000000000000000001",
        18,
        "t0",
        "token0"
    )
});
pub static TOKEN1: Lazy<Token> = Lazy::new(|| {
    token!(
        RSK_MAINNET,
        "0000000000000000000000000000000000000002",
        18,
        "t1",
        "token1"
    )
});
pub static TOKEN2: Lazy<Token> = Lazy::new(|| {
    token!(
        RSK_MAINNET,
        "0000000000000000000000000000000000000003",
        18,
        "t2",
        "token2"
    )
});
pub static USDC: Lazy<Token> = Lazy::new(|| {
    token!(
        RSK_MAINNET,
        "A0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48",
        6,
        "USDC",
        "USD Coin"
    )
});
pub static DAI: Lazy<Token> = Lazy::new(|| {
    token!(
        RSK_MAINNET,
        "6B175474E89094C44Da98b954EedeAC495271d0F",
        18,
        "DAI",
        "DAI Stablecoin"
    )
});

/// A pool at price 1 with no liquidity
fn flat_pool(token_a: &Token, token_b: &Token) -> Pool {
    Pool::new(
        token_a.clone(),
        token_b.clone(),
        FeeAmount::MEDIUM,
        encode_sqrt_ratio_x96(1_u8, 1_u8),
        0,
        0,
        vec![],
    )
    .unwrap()
}

pub static POOL_0_1: Lazy<Pool> = Lazy::new(|| flat_pool(&TOKEN0, &TOKEN1));
pub static POOL_0_WRBTC: Lazy<Pool> = Lazy::new(|| flat_pool(&TOKEN0, &WRBTC));
pub static POOL_1_WRBTC: Lazy<Pool> = Lazy::new(|| flat_pool(&TOKEN1, &WRBTC));

/// Builds a [`Route`](crate::entities::Route) from pool and currency fixtures, cloning each.
#[macro_export]
macro_rules! create_route {
    ($($pool:expr),+; $input:expr, $output:expr) => {
        $crate::entities::Route::new(
            vec![$($pool.clone()),+],
            $input.clone(),
            $output.clone(),
        )
        .unwrap()
    };
}
