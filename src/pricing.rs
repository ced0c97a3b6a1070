//! Prices

use rusty_money::{Money, MoneyError, iso};
use thiserror::Error;

use crate::items::Item;

/// Errors that can occur while calculating total price.
#[derive(Debug, Error, PartialEq)]
pub enum TotalPriceError {
    /// Wrapped money arithmetic or currency mismatch error.
    #[error(transparent)]
    Money(#[from] MoneyError),
}

/// Calculates the total price of a list of items in the given currency.
///
/// An empty list totals zero.
///
/// # Errors
///
/// - [`TotalPriceError::Money`]: an item is priced in a different currency.
pub fn total_price<'a>(
    items: &[Item<'a>],
    currency: &'a iso::Currency,
) -> Result<Money<'a, iso::Currency>, TotalPriceError> {
    let total = items
        .iter()
        .try_fold(Money::from_minor(0, currency), |acc, item| {
            acc.add(*item.price())
        })?;

    Ok(total)
}

/// Sum a list of prices, starting from zero in the given currency.
///
/// # Errors
///
/// - [`TotalPriceError::Money`]: a price is in a different currency.
pub fn sum_prices<'a, 'p>(
    prices: impl IntoIterator<Item = &'p Money<'a, iso::Currency>>,
    currency: &'a iso::Currency,
) -> Result<Money<'a, iso::Currency>, TotalPriceError>
where
    'a: 'p,
{
    let total = prices
        .into_iter()
        .try_fold(Money::from_minor(0, currency), |acc, price| acc.add(*price))?;

    Ok(total)
}
