//! Discount Engine
//!
//! Works out which promotion an order gets and reconciles the final total. With no promo
//! code the automatic quantity discounts apply; with a code, only that code applies.

use rusty_money::iso::Currency;
use tracing::{debug, info, info_span};

use crate::{
    config::PromotionRules,
    discounts::DiscountError,
    items::Item,
    order::Order,
    pricing::total_price,
    promotions::{Promotion, applications::total_discount},
    receipt::DiscountResult,
};

/// Stateless discount calculator.
///
/// Holds nothing but its rules, so one engine can be shared freely between threads.
#[derive(Debug, Clone, Default)]
pub struct DiscountEngine {
    rules: PromotionRules,
}

impl DiscountEngine {
    /// Create an engine with the given rules.
    pub fn new(rules: PromotionRules) -> Self {
        Self { rules }
    }

    /// The rules this engine applies.
    pub fn rules(&self) -> &PromotionRules {
        &self.rules
    }

    /// Discount an order using its own promo code.
    ///
    /// # Errors
    ///
    /// See [`DiscountEngine::compute_items`].
    pub fn compute<'a>(&self, order: &Order<'a>) -> Result<DiscountResult<'a>, DiscountError> {
        self.compute_items(order.items(), order.currency(), order.promo_code())
    }

    /// Discount a list of items with an optional promo code.
    ///
    /// # Errors
    ///
    /// - [`DiscountError::InvalidInput`]: the code needs an item category the order lacks.
    /// - [`DiscountError::NegativePrice`]: an item has a negative price.
    /// - [`DiscountError::TotalPrice`] / [`DiscountError::Money`]: an item is priced in a
    ///   currency other than `currency`.
    /// - [`DiscountError::PercentConversion`] / [`DiscountError::AmountOverflow`]: an amount
    ///   cannot be represented in minor units.
    pub fn compute_items<'a>(
        &self,
        items: &[Item<'a>],
        currency: &'a Currency,
        promo_code: Option<&str>,
    ) -> Result<DiscountResult<'a>, DiscountError> {
        let promotion = Promotion::select(promo_code);

        let span = info_span!(
            "compute_discount",
            promotion = %promotion,
            items = items.len(),
            currency = currency.iso_alpha_code,
        );
        let _guard = span.enter();

        if let Some((index, item)) = items
            .iter()
            .enumerate()
            .find(|(_, item)| item.price().is_negative())
        {
            return Err(DiscountError::NegativePrice(index, item.name().to_string()));
        }

        let subtotal = total_price(items, currency)?;
        let applications = promotion.calculate_discount(items, currency, &self.rules)?;
        let discount = total_discount(&applications, currency)?;

        debug!(
            applications = applications.len(),
            subtotal = %subtotal,
            discount = %discount,
            "discount calculated"
        );

        let result = DiscountResult::new(promotion, applications, subtotal, discount)?;

        info!(
            total = %result.total(),
            discount = %result.discount(),
            promo_applied = result.promo_applied(),
            "order discounted"
        );

        Ok(result)
    }
}

/// Discount a list of items with an optional promo code, using the standard rules.
///
/// # Errors
///
/// See [`DiscountEngine::compute_items`].
pub fn compute_discount<'a>(
    items: &[Item<'a>],
    currency: &'a Currency,
    promo_code: Option<&str>,
) -> Result<DiscountResult<'a>, DiscountError> {
    DiscountEngine::default().compute_items(items, currency, promo_code)
}
