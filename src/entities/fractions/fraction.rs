use bigdecimal::{BigDecimal, RoundingMode};
use core::{num::NonZeroU64, ops::Mul};
use num_bigint::BigInt;
use num_traits::Zero;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Rounding {
    RoundDown,
    #[default]
    RoundHalfUp,
    RoundUp,
}

impl From<Rounding> for RoundingMode {
    #[inline]
    fn from(rounding: Rounding) -> Self {
        match rounding {
            Rounding::RoundDown => Self::Down,
            Rounding::RoundHalfUp => Self::HalfUp,
            Rounding::RoundUp => Self::Up,
        }
    }
}

/// A ratio of two arbitrary precision integers. Arithmetic never reduces, so chained products
/// are exact.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Fraction {
    pub numerator: BigInt,
    pub denominator: BigInt,
}

impl Fraction {
    /// ## Panics
    ///
    /// Panics with `DENOMINATOR` if the denominator is zero.
    #[inline]
    pub fn new(numerator: impl Into<BigInt>, denominator: impl Into<BigInt>) -> Self {
        let denominator = denominator.into();
        assert!(!denominator.is_zero(), "DENOMINATOR");
        Self {
            numerator: numerator.into(),
            denominator,
        }
    }

    /// Integer division, truncating toward zero
    #[inline]
    pub fn quotient(&self) -> BigInt {
        &self.numerator / &self.denominator
    }

    /// Remainder of the truncating division
    #[inline]
    pub fn remainder(&self) -> Self {
        Self::new(&self.numerator % &self.denominator, self.denominator.clone())
    }

    #[inline]
    pub fn invert(&self) -> Self {
        Self::new(self.denominator.clone(), self.numerator.clone())
    }

    #[inline]
    pub fn multiply(&self, other: &Self) -> Self {
        Self::new(
            &self.numerator * &other.numerator,
            &self.denominator * &other.denominator,
        )
    }

    /// The fraction as a decimal, to the default division precision of [`BigDecimal`]
    #[inline]
    pub fn to_decimal(&self) -> BigDecimal {
        BigDecimal::from(self.numerator.clone()) / BigDecimal::from(self.denominator.clone())
    }

    /// Formats the fraction with `decimal_places` digits after the decimal point.
    #[inline]
    pub fn to_fixed(&self, decimal_places: u8, rounding: Rounding) -> String {
        self.to_decimal()
            .with_scale_round(decimal_places as i64, rounding.into())
            .to_plain_string()
    }

    /// Formats the fraction rounded to `significant_digits` significant digits, without padding
    /// trailing zeros.
    ///
    /// ## Panics
    ///
    /// Panics with `SIGNIFICANT_DIGITS` if `significant_digits` is zero.
    #[inline]
    pub fn to_significant(&self, significant_digits: u8, rounding: Rounding) -> String {
        assert!(significant_digits > 0, "SIGNIFICANT_DIGITS");
        let precision = NonZeroU64::new(significant_digits.into()).unwrap_or(NonZeroU64::MIN);
        self.to_decimal()
            .with_precision_round(precision, rounding.into())
            .normalized()
            .to_plain_string()
    }
}

impl Mul for Fraction {
    type Output = Self;

    #[inline]
    fn mul(self, other: Self) -> Self {
        self.multiply(&other)
    }
}

impl Mul<&Fraction> for &Fraction {
    type Output = Fraction;

    #[inline]
    fn mul(self, other: &Fraction) -> Fraction {
        self.multiply(other)
    }
}
