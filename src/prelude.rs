//! Menu Promos prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    config::{ConfigError, PromotionRules, QuantityTier, Stacking},
    discounts::DiscountError,
    engine::{DiscountEngine, compute_discount},
    fixtures::{Fixture, FixtureError},
    items::{Category, Item, groups::ItemGroup},
    order::{Order, OrderError},
    pricing::TotalPriceError,
    promotions::{
        PromoCode, Promotion,
        applications::{Applications, DiscountApplication},
    },
    receipt::{DiscountResult, ReceiptError},
};
