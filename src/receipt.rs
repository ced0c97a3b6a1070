//! Receipt

use std::io;

use decimal_percentage::Percentage;
use rust_decimal::{Decimal, prelude::FromPrimitive};
use rusty_money::{Money, MoneyError, iso::Currency};
use tabled::{
    builder::Builder,
    settings::{
        Alignment, Color, Style,
        object::{Columns, Rows},
    },
};
use thiserror::Error;

use crate::promotions::{Promotion, applications::Applications};

/// Errors that can occur when writing a receipt.
#[derive(Debug, Error)]
pub enum ReceiptError {
    /// IO error
    #[error("IO error")]
    IO,
}

/// Outcome of discounting an order.
#[derive(Debug, Clone)]
pub struct DiscountResult<'a> {
    promotion: Promotion,
    applications: Applications<'a>,
    subtotal: Money<'a, Currency>,
    discount: Money<'a, Currency>,
    total: Money<'a, Currency>,
    promo_applied: bool,
}

impl<'a> DiscountResult<'a> {
    /// Reconcile a subtotal and discount into a result.
    ///
    /// The total is the subtotal less the discount, floored at zero. The promotion counts as
    /// applied when a promo code was recognised or any discount was given.
    ///
    /// # Errors
    ///
    /// Returns a [`MoneyError`] if the subtotal and discount are in different currencies.
    pub fn new(
        promotion: Promotion,
        applications: Applications<'a>,
        subtotal: Money<'a, Currency>,
        discount: Money<'a, Currency>,
    ) -> Result<Self, MoneyError> {
        let remaining = subtotal.sub(discount)?;

        let total = if remaining.is_negative() {
            Money::from_minor(0, subtotal.currency())
        } else {
            remaining
        };

        let promo_applied = promotion.is_code() || discount.is_positive();

        Ok(Self {
            promotion,
            applications,
            subtotal,
            discount,
            total,
            promo_applied,
        })
    }

    /// Promotion that was selected for the order
    pub fn promotion(&self) -> &Promotion {
        &self.promotion
    }

    /// Individual discount contributions
    pub fn applications(&self) -> &Applications<'a> {
        &self.applications
    }

    /// Total cost before any discount
    pub fn subtotal(&self) -> Money<'a, Currency> {
        self.subtotal
    }

    /// Amount taken off the subtotal
    pub fn discount(&self) -> Money<'a, Currency> {
        self.discount
    }

    /// Amount to pay, never negative
    pub fn total(&self) -> Money<'a, Currency> {
        self.total
    }

    /// Whether a promotion was applied
    pub fn promo_applied(&self) -> bool {
        self.promo_applied
    }

    /// Calculates the discount as a percentage of the subtotal
    pub fn savings_percent(&self) -> Percentage {
        let subtotal_minor = self.subtotal.to_minor_units();

        if subtotal_minor == 0 {
            return Percentage::from(0.0);
        }

        let savings_minor = self.discount.to_minor_units().min(subtotal_minor);

        let savings_dec = Decimal::from_i64(savings_minor).unwrap_or(Decimal::ZERO);
        let subtotal_dec = Decimal::from_i64(subtotal_minor).unwrap_or(Decimal::ONE);

        Percentage::from(savings_dec / subtotal_dec)
    }

    /// Writes the receipt as a table.
    ///
    /// # Errors
    ///
    /// Returns an error if the receipt cannot be written.
    pub fn write_to(&self, mut out: impl io::Write) -> Result<(), ReceiptError> {
        let mut builder = Builder::default();

        builder.push_record(["Discount", "Units", "Amount"]);

        for app in &self.applications {
            builder.push_record([
                app.description.clone(),
                app.units.to_string(),
                format!("-{}", app.amount),
            ]);
        }

        let mut table = builder.build();

        table.with(Style::modern_rounded());
        table.modify(Rows::first(), Color::BOLD);
        table.modify(Columns::new(1..3), Alignment::right());

        let points = ((self.savings_percent() * Decimal::ONE) * Decimal::ONE_HUNDRED).round_dp(2);

        writeln!(out, "\nPromotion: {}", self.promotion).map_err(|_err| ReceiptError::IO)?;
        writeln!(out, "{table}").map_err(|_err| ReceiptError::IO)?;
        writeln!(out, " Subtotal: {}", self.subtotal).map_err(|_err| ReceiptError::IO)?;
        writeln!(out, " Discount: ({points}%) {}", self.discount)
            .map_err(|_err| ReceiptError::IO)?;
        writeln!(out, " \x1b[1mTotal:\x1b[0m    {}", self.total).map_err(|_err| ReceiptError::IO)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::{MXN, USD};
    use smallvec::smallvec;
    use testresult::TestResult;

    use crate::promotions::{PromoCode, applications::DiscountApplication};

    use super::*;

    #[test]
    fn total_is_subtotal_minus_discount() -> TestResult {
        let result = DiscountResult::new(
            Promotion::Code(PromoCode::Bienvenida),
            Applications::new(),
            Money::from_minor(15_000, MXN),
            Money::from_minor(4_500, MXN),
        )?;

        assert_eq!(result.total(), Money::from_minor(10_500, MXN));
        assert_eq!(result.discount(), Money::from_minor(4_500, MXN));
        assert!(result.promo_applied());

        Ok(())
    }

    #[test]
    fn total_is_floored_at_zero() -> TestResult {
        let result = DiscountResult::new(
            Promotion::Automatic,
            Applications::new(),
            Money::from_minor(1_000, MXN),
            Money::from_minor(2_500, MXN),
        )?;

        assert_eq!(result.total(), Money::from_minor(0, MXN));

        Ok(())
    }

    #[test]
    fn recognised_code_is_applied_even_without_discount() -> TestResult {
        let result = DiscountResult::new(
            Promotion::Code(PromoCode::Refrescate),
            Applications::new(),
            Money::from_minor(1_000, MXN),
            Money::from_minor(0, MXN),
        )?;

        assert!(result.promo_applied());

        Ok(())
    }

    #[test]
    fn automatic_without_discount_is_not_applied() -> TestResult {
        let result = DiscountResult::new(
            Promotion::Automatic,
            Applications::new(),
            Money::from_minor(1_000, MXN),
            Money::from_minor(0, MXN),
        )?;

        assert!(!result.promo_applied());

        Ok(())
    }

    #[test]
    fn currency_mismatch_is_an_error() {
        let result = DiscountResult::new(
            Promotion::Automatic,
            Applications::new(),
            Money::from_minor(1_000, MXN),
            Money::from_minor(0, USD),
        );

        assert!(matches!(result, Err(MoneyError::CurrencyMismatch { .. })));
    }

    #[test]
    fn savings_percent_of_empty_order_is_zero() -> TestResult {
        let result = DiscountResult::new(
            Promotion::Automatic,
            Applications::new(),
            Money::from_minor(0, MXN),
            Money::from_minor(0, MXN),
        )?;

        assert_eq!(result.savings_percent(), Percentage::from(0.0));

        Ok(())
    }

    #[test]
    fn write_to_renders_applications_and_totals() -> TestResult {
        let result = DiscountResult::new(
            Promotion::Automatic,
            smallvec![DiscountApplication::new(
                "3 x Plato A",
                3,
                Money::from_minor(2_000, MXN)
            )],
            Money::from_minor(15_000, MXN),
            Money::from_minor(2_000, MXN),
        )?;

        let mut out = Vec::new();
        result.write_to(&mut out)?;

        let rendered = String::from_utf8(out)?;

        assert!(rendered.contains("Promotion: automatic"));
        assert!(rendered.contains("3 x Plato A"));
        assert!(rendered.contains(&format!("Subtotal: {}", result.subtotal())));
        assert!(rendered.contains("(13.33%)"));
        assert!(rendered.contains(&result.total().to_string()));

        Ok(())
    }
}
