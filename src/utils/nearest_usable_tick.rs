use super::tick_math::{MAX_TICK, MIN_TICK};
use crate::error::Error;
use num_integer::Integer;

/// Returns the closest tick that is nearest a given tick and usable for the given tick spacing
///
/// ## Arguments
///
/// * `tick`: the target tick
/// * `tick_spacing`: the spacing of the pool
#[inline]
pub fn nearest_usable_tick(tick: i32, tick_spacing: i32) -> Result<i32, Error> {
    if tick_spacing <= 0 {
        return Err(Error::InvalidTickSpacing(tick_spacing));
    }
    if !(MIN_TICK..=MAX_TICK).contains(&tick) {
        return Err(Error::InvalidTick(tick));
    }
    let (quotient, remainder) = tick.div_mod_floor(&tick_spacing);
    let rounded = (quotient + (remainder + tick_spacing / 2) / tick_spacing) * tick_spacing;
    Ok(if rounded < MIN_TICK {
        rounded + tick_spacing
    } else if rounded > MAX_TICK {
        rounded - tick_spacing
    } else {
        rounded
    })
}
