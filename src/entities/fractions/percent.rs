use super::Fraction;
use derive_more::Deref;
use num_bigint::BigInt;

/// A fraction interpreted as a share of a whole, e.g. `Percent::new(1, 1000)` is 0.1%.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Deref)]
pub struct Percent(Fraction);

impl Percent {
    #[inline]
    pub fn new(numerator: impl Into<BigInt>, denominator: impl Into<BigInt>) -> Self {
        Self(Fraction::new(numerator, denominator))
    }

    #[inline]
    pub const fn as_fraction(&self) -> &Fraction {
        &self.0
    }
}

impl From<Fraction> for Percent {
    #[inline]
    fn from(fraction: Fraction) -> Self {
        Self(fraction)
    }
}
