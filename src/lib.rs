//! Menu Promos
//!
//! Discount engine for food orders: automatic quantity discounts on identical dishes and
//! beverages, or a single named promo code, reconciled into a final total.

pub mod cli;
pub mod config;
pub mod discounts;
pub mod engine;
pub mod fixtures;
pub mod items;
pub mod observability;
pub mod order;
pub mod prelude;
pub mod pricing;
pub mod promotions;
pub mod receipt;
