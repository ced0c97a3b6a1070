//! Order

use rusty_money::{Money, iso::Currency};
use thiserror::Error;

use crate::{
    items::{Category, Item},
    pricing::{TotalPriceError, total_price},
};

/// Errors related to order construction.
#[derive(Debug, Error, PartialEq)]
pub enum OrderError {
    /// An item's currency differs from the order currency (index, item currency, order currency).
    #[error("Item {0} has currency {1}, but order has currency {2}")]
    CurrencyMismatch(usize, &'static str, &'static str),

    /// An item has a negative price (index, item name).
    #[error("Item {0} ({1}) has a negative price")]
    NegativePrice(usize, String),
}

/// A customer order: a read-only snapshot of line items and an optional promo code.
#[derive(Debug, Clone)]
pub struct Order<'a> {
    items: Vec<Item<'a>>,
    currency: &'static Currency,
    promo_code: Option<String>,
}

impl<'a> Order<'a> {
    /// Create a new, empty order.
    pub fn new(currency: &'static Currency) -> Self {
        Order {
            items: Vec::new(),
            currency,
            promo_code: None,
        }
    }

    /// Create a new order with the given items.
    ///
    /// # Errors
    ///
    /// Returns an `OrderError` if an item is in another currency or has a negative price.
    pub fn with_items(
        items: impl Into<Vec<Item<'a>>>,
        currency: &'static Currency,
    ) -> Result<Self, OrderError> {
        let items = items.into();

        items.iter().enumerate().try_for_each(|(i, item)| {
            let item_currency = item.price().currency();

            if item_currency != currency {
                return Err(OrderError::CurrencyMismatch(
                    i,
                    item_currency.iso_alpha_code,
                    currency.iso_alpha_code,
                ));
            }

            if item.price().is_negative() {
                return Err(OrderError::NegativePrice(i, item.name().to_string()));
            }

            Ok(())
        })?;

        Ok(Order {
            items,
            currency,
            promo_code: None,
        })
    }

    /// Attach a promo code to the order.
    #[must_use]
    pub fn with_promo_code(mut self, promo_code: impl Into<String>) -> Self {
        self.promo_code = Some(promo_code.into());
        self
    }

    /// Calculate the subtotal of the order.
    ///
    /// # Errors
    ///
    /// Returns a `TotalPriceError` if there was a money arithmetic error.
    pub fn subtotal(&self) -> Result<Money<'a, Currency>, TotalPriceError> {
        total_price(&self.items, self.currency)
    }

    /// The items on the order, in the order they were added.
    pub fn items(&self) -> &[Item<'a>] {
        &self.items
    }

    /// Iterate over the items on the order.
    pub fn iter(&self) -> impl Iterator<Item = &Item<'a>> {
        self.items.iter()
    }

    /// Iterate over the items of a single category.
    pub fn iter_category(&self, category: Category) -> impl Iterator<Item = &Item<'a>> {
        self.items
            .iter()
            .filter(move |item| item.category() == category)
    }

    /// The promo code supplied with the order, if any.
    pub fn promo_code(&self) -> Option<&str> {
        self.promo_code.as_deref()
    }

    /// Get the number of items on the order.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the order is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get the currency of the order.
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }
}
