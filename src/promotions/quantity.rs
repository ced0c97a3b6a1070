//! Quantity Discount
//!
//! Automatic "buy N identical, one is discounted up to a cap" promotions, applied per
//! group of identical items.

use rusty_money::{Money, iso::Currency};
use tracing::debug;

use crate::{
    config::{PromotionRules, QuantityTier, Stacking},
    discounts::{DiscountError, capped, major_to_minor},
    items::{
        Category, Item,
        groups::{ItemGroup, group_by_name},
    },
    promotions::applications::{Applications, DiscountApplication},
};

/// A quantity tier bound to a category
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct QuantityDiscount {
    category: Category,
    tier: QuantityTier,
}

impl QuantityDiscount {
    /// Create a new quantity discount.
    pub fn new(category: Category, tier: QuantityTier) -> Self {
        Self { category, tier }
    }

    /// The food and beverage discounts described by a set of rules.
    pub fn from_rules(rules: &PromotionRules) -> [Self; 2] {
        [
            Self::new(Category::Food, rules.food),
            Self::new(Category::Beverage, rules.beverage),
        ]
    }

    /// Return whether this discount applies to the given group.
    pub fn is_applicable(&self, group: &ItemGroup<'_, '_>) -> bool {
        group.category() == self.category && group.count() >= self.tier.threshold
    }

    /// Number of discounted units earned by a group.
    pub fn discounted_units(&self, group: &ItemGroup<'_, '_>) -> usize {
        if group.category() == self.category {
            group.count().checked_div(self.tier.threshold).unwrap_or(0)
        } else {
            0
        }
    }

    /// Calculate the discount earned by a group: `min(unit price, cap) * floor(count / threshold)`.
    ///
    /// # Errors
    ///
    /// Returns an error if the cap or the product cannot be represented in minor units.
    pub fn calculate_discount<'a>(
        &self,
        group: &ItemGroup<'_, 'a>,
    ) -> Result<Money<'a, Currency>, DiscountError> {
        let currency = group.unit_price().currency();
        let units = self.discounted_units(group);

        if units == 0 {
            return Ok(Money::from_minor(0, currency));
        }

        let cap_minor = major_to_minor(self.tier.cap, currency)?;
        let per_unit = capped(group.unit_price(), cap_minor).to_minor_units();

        let units = i64::try_from(units).map_err(|_err| DiscountError::AmountOverflow)?;
        let amount = per_unit
            .checked_mul(units)
            .ok_or(DiscountError::AmountOverflow)?;

        Ok(Money::from_minor(amount, currency))
    }
}

/// Apply the automatic quantity discounts to a list of items.
///
/// Every group of identical items is checked against the tier for its category. Under
/// [`Stacking::Stack`] every qualifying group contributes; under [`Stacking::Best`] only the
/// largest contribution is kept.
///
/// # Errors
///
/// Returns an error if a group discount cannot be represented in minor units.
pub fn automatic_discounts<'a>(
    items: &[Item<'a>],
    rules: &PromotionRules,
) -> Result<Applications<'a>, DiscountError> {
    let discounts = QuantityDiscount::from_rules(rules);
    let mut applications = Applications::new();

    for group in group_by_name(items) {
        for discount in discounts.iter().filter(|d| d.is_applicable(&group)) {
            let amount = discount.calculate_discount(&group)?;

            debug!(
                item = group.name(),
                category = ?group.category(),
                count = group.count(),
                discount = %amount,
                "quantity discount"
            );

            if amount.is_zero() {
                continue;
            }

            applications.push(DiscountApplication::new(
                format!("{} x {}", group.count(), group.name()),
                group.count(),
                amount,
            ));
        }
    }

    if rules.stacking == Stacking::Best {
        let best = applications
            .into_iter()
            .max_by_key(|app| app.amount.to_minor_units());

        return Ok(best.into_iter().collect());
    }

    Ok(applications)
}
