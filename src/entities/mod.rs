mod currency;
pub mod fractions;
pub mod pool;
pub mod route;
pub mod tick;
pub mod tick_list_data_provider;
mod token;

pub use currency::BaseCurrency;
pub use fractions::*;
pub use pool::{get_address, Pool};
pub use route::Route;
pub use tick::Tick;
pub use tick_list_data_provider::TickListDataProvider;
pub use token::Token;
