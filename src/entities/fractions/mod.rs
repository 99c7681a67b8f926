//! Arbitrary precision fractions, prices and percents.

mod fraction;
pub use fraction::{Fraction, Rounding};

mod percent;
pub use percent::Percent;

mod price;
pub use price::Price;
