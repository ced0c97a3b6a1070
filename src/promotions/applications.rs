//! Promotion Applications

use rusty_money::{Money, iso::Currency};
use smallvec::SmallVec;

use crate::pricing::{TotalPriceError, sum_prices};

/// A single contribution to an order's discount
#[derive(Debug, Clone, PartialEq)]
pub struct DiscountApplication<'a> {
    /// What was discounted (an item name, a group, or the whole order)
    pub description: String,

    /// Number of units the contribution covers
    pub units: usize,

    /// Amount taken off
    pub amount: Money<'a, Currency>,
}

impl<'a> DiscountApplication<'a> {
    /// Create a new application.
    pub fn new(description: impl Into<String>, units: usize, amount: Money<'a, Currency>) -> Self {
        Self {
            description: description.into(),
            units,
            amount,
        }
    }
}

/// Discount applications produced by one promotion
pub type Applications<'a> = SmallVec<[DiscountApplication<'a>; 4]>;

/// Sum the amounts of a set of applications.
///
/// # Errors
///
/// Returns an error if an amount is in a different currency.
pub fn total_discount<'a>(
    applications: &[DiscountApplication<'a>],
    currency: &'a Currency,
) -> Result<Money<'a, Currency>, TotalPriceError> {
    sum_prices(applications.iter().map(|app| &app.amount), currency)
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::MXN;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn total_discount_sums_amounts() -> TestResult {
        let applications = [
            DiscountApplication::new("3 x Tacos", 3, Money::from_minor(2_000, MXN)),
            DiscountApplication::new("2 x Horchata", 2, Money::from_minor(1_000, MXN)),
        ];

        assert_eq!(
            total_discount(&applications, MXN)?,
            Money::from_minor(3_000, MXN)
        );

        Ok(())
    }

    #[test]
    fn total_discount_of_nothing_is_zero() -> TestResult {
        assert_eq!(total_discount(&[], MXN)?, Money::from_minor(0, MXN));

        Ok(())
    }
}
