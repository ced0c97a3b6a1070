//! Promo Codes
//!
//! Named codes a customer can supply with an order. Each code replaces the automatic
//! quantity discounts entirely.

use std::fmt;

use decimal_percentage::Percentage;
use rust_decimal::Decimal;
use rusty_money::{Money, iso::Currency};
use smallvec::smallvec;
use tracing::debug;

use crate::{
    config::PromotionRules,
    discounts::{DiscountError, discount_on},
    items::{Category, Item, cheapest_item, most_expensive_items},
    pricing::total_price,
    promotions::applications::{Applications, DiscountApplication},
};

/// A recognised promo code
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PromoCode {
    /// `BIENVENIDA`: a percentage off the whole order
    Bienvenida,

    /// `REFRESCATE`: the most expensive beverage is free
    Refrescate,

    /// `COMBO`: the cheapest dish and the cheapest beverage are free
    Combo,

    /// `PAREJA`: the two most expensive dishes and two most expensive beverages are free
    Pareja,
}

impl PromoCode {
    /// Every recognised code.
    pub const ALL: [PromoCode; 4] = [
        PromoCode::Bienvenida,
        PromoCode::Refrescate,
        PromoCode::Combo,
        PromoCode::Pareja,
    ];

    /// Look up a code by its exact (case-sensitive) text.
    pub fn parse(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|known| known.as_str() == code)
    }

    /// The text a customer types for this code.
    pub fn as_str(self) -> &'static str {
        match self {
            PromoCode::Bienvenida => "BIENVENIDA",
            PromoCode::Refrescate => "REFRESCATE",
            PromoCode::Combo => "COMBO",
            PromoCode::Pareja => "PAREJA",
        }
    }

    /// Calculate the discount applications for this code.
    ///
    /// # Errors
    ///
    /// Returns [`DiscountError::InvalidInput`] for `COMBO` when the order has no food, or
    /// an arithmetic error if an amount cannot be represented.
    pub fn calculate_discount<'a>(
        self,
        items: &[Item<'a>],
        currency: &'a Currency,
        rules: &PromotionRules,
    ) -> Result<Applications<'a>, DiscountError> {
        let applications = match self {
            PromoCode::Bienvenida => {
                let subtotal = total_price(items, currency)?;
                let percent = Percentage::from(rules.welcome_percentage);
                let amount = discount_on(&subtotal, &percent)?;
                let points = (rules.welcome_percentage * Decimal::ONE_HUNDRED).normalize();

                smallvec![DiscountApplication::new(
                    format!("{self} ({points}% off order)"),
                    items.len(),
                    amount,
                )]
            }
            PromoCode::Refrescate => {
                item_applications(most_expensive_items(items, Category::Beverage, 1))
            }
            PromoCode::Combo => {
                let food = cheapest_item(items, Category::Food).ok_or(
                    DiscountError::InvalidInput {
                        code: self.as_str(),
                        missing: Category::Food,
                    },
                )?;

                item_applications(
                    std::iter::once(food).chain(cheapest_item(items, Category::Beverage)),
                )
            }
            PromoCode::Pareja => item_applications(
                most_expensive_items(items, Category::Food, 2)
                    .into_iter()
                    .chain(most_expensive_items(items, Category::Beverage, 2)),
            ),
        };

        debug!(code = %self, applications = applications.len(), "promo code");

        Ok(applications)
    }
}

impl fmt::Display for PromoCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One application per free item, discounting its full price.
fn item_applications<'b, 'a: 'b>(
    items: impl IntoIterator<Item = &'b Item<'a>>,
) -> Applications<'a> {
    items
        .into_iter()
        .map(|item| DiscountApplication::new(item.name(), 1, *item.price()))
        .collect()
}
