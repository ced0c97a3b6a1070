//! Promotions

use std::fmt;

use rusty_money::iso::Currency;

use crate::{
    config::PromotionRules,
    discounts::DiscountError,
    items::Item,
    promotions::{applications::Applications, quantity::automatic_discounts},
};

pub mod applications;
pub mod codes;
pub mod quantity;

pub use codes::PromoCode;

/// The promotion selected for an order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Promotion {
    /// No code supplied: automatic quantity discounts
    Automatic,

    /// A recognised promo code
    Code(PromoCode),

    /// A code that matches no known promotion; nothing is discounted
    Unrecognised(String),
}

impl Promotion {
    /// Select the promotion for an optional promo code.
    ///
    /// A missing or empty code selects the automatic discounts; any other text selects
    /// its named code, or nothing at all if it is not recognised.
    pub fn select(promo_code: Option<&str>) -> Self {
        match promo_code {
            None | Some("") => Promotion::Automatic,
            Some(code) => PromoCode::parse(code)
                .map_or_else(|| Promotion::Unrecognised(code.to_string()), Promotion::Code),
        }
    }

    /// Return whether a promo code was recognised and applied.
    pub fn is_code(&self) -> bool {
        matches!(self, Promotion::Code(_))
    }

    /// Calculate the discount applications for this promotion.
    ///
    /// # Errors
    ///
    /// Returns a [`DiscountError`] if the promotion cannot be applied to these items.
    pub fn calculate_discount<'a>(
        &self,
        items: &[Item<'a>],
        currency: &'a Currency,
        rules: &PromotionRules,
    ) -> Result<Applications<'a>, DiscountError> {
        match self {
            Promotion::Automatic => automatic_discounts(items, rules),
            Promotion::Code(code) => code.calculate_discount(items, currency, rules),
            Promotion::Unrecognised(_) => Ok(Applications::new()),
        }
    }
}

impl fmt::Display for Promotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Promotion::Automatic => f.write_str("automatic"),
            Promotion::Code(code) => write!(f, "{code}"),
            Promotion::Unrecognised(code) => write!(f, "{code} (unrecognised)"),
        }
    }
}
