use super::{Fraction, Rounding};
use crate::{entities::BaseCurrency, error::Error};
use num_bigint::BigInt;
use num_traits::pow;

/// The exchange rate between a base and a quote currency, held as the raw ratio of quote units
/// per base unit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Price<TBase, TQuote>
where
    TBase: BaseCurrency,
    TQuote: BaseCurrency,
{
    pub base_currency: TBase,
    pub quote_currency: TQuote,
    /// Converts raw amounts into human readable ones, `10^base.decimals / 10^quote.decimals`
    pub scalar: Fraction,
    pub numerator: BigInt,
    pub denominator: BigInt,
}

impl<TBase, TQuote> Price<TBase, TQuote>
where
    TBase: BaseCurrency,
    TQuote: BaseCurrency,
{
    /// Constructs a price from raw amounts: `denominator` units of the base currency are worth
    /// `numerator` units of the quote currency.
    ///
    /// ## Panics
    ///
    /// Panics with `DENOMINATOR` if the denominator is zero.
    #[inline]
    pub fn new(
        base_currency: TBase,
        quote_currency: TQuote,
        denominator: impl Into<BigInt>,
        numerator: impl Into<BigInt>,
    ) -> Self {
        let Fraction {
            numerator,
            denominator,
        } = Fraction::new(numerator, denominator);
        let scalar = Fraction::new(
            pow(BigInt::from(10), base_currency.decimals() as usize),
            pow(BigInt::from(10), quote_currency.decimals() as usize),
        );
        Self {
            base_currency,
            quote_currency,
            scalar,
            numerator,
            denominator,
        }
    }

    /// The raw ratio of quote over base.
    #[inline]
    pub fn as_fraction(&self) -> Fraction {
        Fraction::new(self.numerator.clone(), self.denominator.clone())
    }

    /// Flip the price, switching the base and quote currency
    #[inline]
    pub fn invert(&self) -> Price<TQuote, TBase> {
        Price::new(
            self.quote_currency.clone(),
            self.base_currency.clone(),
            self.numerator.clone(),
            self.denominator.clone(),
        )
    }

    /// Multiply the price by another price, returning a new price. The other price must have the
    /// same base currency as this price's quote currency.
    ///
    /// ## Errors
    ///
    /// [`Error::InvalidToken`] if the currencies do not chain.
    #[inline]
    pub fn multiply<TOtherQuote: BaseCurrency>(
        &self,
        other: &Price<TQuote, TOtherQuote>,
    ) -> Result<Price<TBase, TOtherQuote>, Error> {
        if !self.quote_currency.equals(&other.base_currency) {
            return Err(Error::InvalidToken);
        }
        let fraction = self.as_fraction().multiply(&other.as_fraction());
        Ok(Price::new(
            self.base_currency.clone(),
            other.quote_currency.clone(),
            fraction.denominator,
            fraction.numerator,
        ))
    }

    /// The price in human readable units, i.e. adjusted for the currencies' decimals.
    #[inline]
    pub fn adjusted_for_decimals(&self) -> Fraction {
        self.as_fraction().multiply(&self.scalar)
    }

    #[inline]
    pub fn to_significant(&self, significant_digits: u8, rounding: Option<Rounding>) -> String {
        self.adjusted_for_decimals()
            .to_significant(significant_digits, rounding.unwrap_or_default())
    }

    #[inline]
    pub fn to_fixed(&self, decimal_places: u8, rounding: Option<Rounding>) -> String {
        self.adjusted_for_decimals()
            .to_fixed(decimal_places, rounding.unwrap_or_default())
    }
}
