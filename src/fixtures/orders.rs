//! Order Fixtures

use rust_decimal::Decimal;
use rusty_money::{
    Money,
    iso::{self, Currency},
};
use serde::Deserialize;

use crate::{
    discounts::major_to_minor,
    fixtures::FixtureError,
    items::{Category, Item},
    order::Order,
};

/// Order in YAML
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OrderFixture {
    /// ISO currency code for every price on the order (e.g., "MXN")
    pub currency: String,

    /// One entry per purchased unit
    #[serde(default)]
    pub items: Vec<ItemFixture>,

    /// Promo code supplied with the order
    #[serde(default)]
    pub promo_code: Option<String>,
}

/// Item Fixture
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ItemFixture {
    /// Dish or beverage name
    pub name: String,

    /// Menu type label (`Refresco` for beverages, anything else for food)
    #[serde(rename = "type")]
    pub kind: String,

    /// Price in major units (e.g., `50` or `"12.50"`)
    pub price: Decimal,
}

impl TryFrom<OrderFixture> for Order<'static> {
    type Error = FixtureError;

    fn try_from(fixture: OrderFixture) -> Result<Self, Self::Error> {
        let currency = parse_currency(&fixture.currency)?;

        let items = fixture
            .items
            .into_iter()
            .map(|item| {
                let minor_units = to_minor_units(item.price, currency)?;

                Ok(Item::new(
                    item.name,
                    Category::from_label(&item.kind),
                    Money::from_minor(minor_units, currency),
                ))
            })
            .collect::<Result<Vec<_>, FixtureError>>()?;

        let mut order = Order::with_items(items, currency)?;

        if let Some(code) = fixture.promo_code {
            order = order.with_promo_code(code);
        }

        Ok(order)
    }
}

/// Look up an ISO currency by its code.
///
/// # Errors
///
/// Returns [`FixtureError::UnknownCurrency`] if the code is not recognised.
pub fn parse_currency(code: &str) -> Result<&'static Currency, FixtureError> {
    iso::find(code.trim()).ok_or_else(|| FixtureError::UnknownCurrency(code.to_string()))
}

/// Convert a major-unit amount into minor units of a currency.
///
/// # Errors
///
/// Returns [`FixtureError::InvalidPrice`] if the amount does not fit in minor units.
pub fn to_minor_units(amount: Decimal, currency: &Currency) -> Result<i64, FixtureError> {
    major_to_minor(amount, currency)
        .map_err(|_err| FixtureError::InvalidPrice(amount.to_string()))
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::{JPY, MXN};
    use testresult::TestResult;

    use super::*;

    #[test]
    fn parse_currency_accepts_iso_codes() -> TestResult {
        assert_eq!(parse_currency("MXN")?, MXN);
        assert_eq!(parse_currency(" JPY ")?, JPY);

        Ok(())
    }

    #[test]
    fn parse_currency_rejects_unknown_codes() {
        let result = parse_currency("PESOS");

        assert!(matches!(result, Err(FixtureError::UnknownCurrency(code)) if code == "PESOS"));
    }

    #[test]
    fn to_minor_units_scales_by_exponent() -> TestResult {
        assert_eq!(to_minor_units(Decimal::new(1250, 2), MXN)?, 1_250);
        assert_eq!(to_minor_units(Decimal::new(50, 0), MXN)?, 5_000);
        assert_eq!(to_minor_units(Decimal::new(500, 0), JPY)?, 500);

        Ok(())
    }

    #[test]
    fn to_minor_units_rejects_overflow() {
        let result = to_minor_units(Decimal::MAX, MXN);

        assert!(matches!(result, Err(FixtureError::InvalidPrice(_))));
    }

    #[test]
    fn order_fixture_converts_to_order() -> TestResult {
        let fixture: OrderFixture = serde_norway::from_str(
            r#"
currency: MXN
items:
  - name: Plato A
    type: Plato
    price: 50
  - name: Refresco A
    type: Refresco
    price: "12.50"
promo_code: COMBO
"#,
        )?;

        let order = Order::try_from(fixture)?;

        assert_eq!(order.len(), 2);
        assert_eq!(order.currency(), MXN);
        assert_eq!(order.promo_code(), Some("COMBO"));
        assert_eq!(order.iter_category(Category::Beverage).count(), 1);
        assert_eq!(order.subtotal()?, Money::from_minor(6_250, MXN));

        Ok(())
    }

    #[test]
    fn negative_price_is_an_order_error() -> TestResult {
        let fixture: OrderFixture = serde_norway::from_str(
            "currency: MXN\nitems:\n  - name: Plato A\n    type: Plato\n    price: -5\n",
        )?;

        let result = Order::try_from(fixture);

        assert!(matches!(result, Err(FixtureError::Order(_))));

        Ok(())
    }
}
