//! Discounts

use decimal_percentage::Percentage;
use rust_decimal::{
    Decimal, RoundingStrategy,
    prelude::{FromPrimitive, ToPrimitive},
};
use rusty_money::{Money, MoneyError, iso::Currency};
use thiserror::Error;

use crate::{items::Category, pricing::TotalPriceError};

/// Errors specific to discount calculations.
#[derive(Debug, Error)]
pub enum DiscountError {
    /// The selected promo code needs an item category the order does not contain.
    #[error("promo code {code} requires at least one {missing:?} item")]
    InvalidInput {
        /// Promo code that was selected
        code: &'static str,

        /// Category with no items on the order
        missing: Category,
    },

    /// Percentage calculation could not be safely converted.
    #[error("percentage conversion overflowed or was not finite")]
    PercentConversion,

    /// An amount does not fit in minor units.
    #[error("amount overflowed minor units")]
    AmountOverflow,

    /// An item has a negative price (index, item name).
    #[error("item {0} ({1}) has a negative price")]
    NegativePrice(usize, String),

    /// Wrapped money arithmetic or currency mismatch error.
    #[error(transparent)]
    Money(#[from] MoneyError),

    /// Errors bubbled up from total price calculation.
    #[error(transparent)]
    TotalPrice(#[from] TotalPriceError),
}

/// Calculate the discount amount on a price for a percentage.
///
/// # Errors
///
/// Returns [`DiscountError::PercentConversion`] if the amount cannot be represented in minor units.
pub fn discount_on<'a>(
    price: &Money<'a, Currency>,
    percent: &Percentage,
) -> Result<Money<'a, Currency>, DiscountError> {
    let discount_minor = percent_of_minor(percent, price.to_minor_units())?;

    Ok(Money::from_minor(discount_minor, price.currency()))
}

/// Calculate the discount amount in minor units based on a percentage and a minor unit amount.
///
/// Rounds half away from zero.
///
/// # Errors
///
/// Returns [`DiscountError::PercentConversion`] on overflow.
pub fn percent_of_minor(percent: &Percentage, minor: i64) -> Result<i64, DiscountError> {
    let minor = Decimal::from_i64(minor).ok_or(DiscountError::PercentConversion)?;

    ((*percent) * Decimal::ONE) // decimal_percentage doesn't expose the inner Decimal
        .checked_mul(minor)
        .ok_or(DiscountError::PercentConversion)?
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .ok_or(DiscountError::PercentConversion)
}

/// The lower of a price and a cap, both in the price's currency.
pub fn capped<'a>(price: &Money<'a, Currency>, cap_minor: i64) -> Money<'a, Currency> {
    Money::from_minor(price.to_minor_units().min(cap_minor), price.currency())
}

/// Convert a major-unit decimal amount (e.g. `20` or `12.50`) into minor units of a currency.
///
/// # Errors
///
/// Returns [`DiscountError::AmountOverflow`] if the amount does not fit in minor units.
pub fn major_to_minor(amount: Decimal, currency: &Currency) -> Result<i64, DiscountError> {
    let scale = Decimal::from(10_i64.pow(currency.exponent));

    amount
        .checked_mul(scale)
        .ok_or(DiscountError::AmountOverflow)?
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .ok_or(DiscountError::AmountOverflow)
}
