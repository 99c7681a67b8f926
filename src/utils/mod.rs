mod compute_pool_address;
pub use compute_pool_address::compute_pool_address;

mod encode_route_to_path;
pub use encode_route_to_path::encode_route_to_path;

mod encode_sqrt_ratio_x96;
pub use encode_sqrt_ratio_x96::encode_sqrt_ratio_x96;

mod nearest_usable_tick;
pub use nearest_usable_tick::nearest_usable_tick;

mod price_tick_conversions;
pub use price_tick_conversions::tick_to_price;

mod tick_list;
pub use tick_list::TickList;

mod types;
pub use types::*;

mod bit_math;
pub use bit_math::*;

mod tick_math;
pub use tick_math::*;
