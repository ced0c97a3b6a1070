//! Items

use rusty_money::{Money, iso};
use smallvec::SmallVec;

pub mod groups;

/// Menu category of an item.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    /// A dish, or anything else that is not a beverage
    Food,

    /// A drink
    Beverage,
}

impl Category {
    /// Map a menu type label onto a category.
    ///
    /// Only `Refresco` (or `beverage`) counts as a beverage; every other label is food.
    /// Labels match exactly, so `refresco` is food.
    pub fn from_label(label: &str) -> Self {
        match label {
            "Refresco" | "beverage" => Category::Beverage,
            _ => Category::Food,
        }
    }
}

/// A single purchased unit on an order
#[derive(Clone, Debug, PartialEq)]
pub struct Item<'a> {
    name: String,
    category: Category,
    price: Money<'a, iso::Currency>,
}

impl<'a> Item<'a> {
    /// Creates a new item with the given name, category and price
    pub fn new(
        name: impl Into<String>,
        category: Category,
        price: Money<'a, iso::Currency>,
    ) -> Self {
        Self {
            name: name.into(),
            category,
            price,
        }
    }

    /// Creates a new food item
    pub fn food(name: impl Into<String>, price: Money<'a, iso::Currency>) -> Self {
        Self::new(name, Category::Food, price)
    }

    /// Creates a new beverage item
    pub fn beverage(name: impl Into<String>, price: Money<'a, iso::Currency>) -> Self {
        Self::new(name, Category::Beverage, price)
    }

    /// Returns the name of the item
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the category of the item
    pub fn category(&self) -> Category {
        self.category
    }

    /// Returns the price of the item
    pub fn price(&self) -> &Money<'a, iso::Currency> {
        &self.price
    }
}

/// Returns the cheapest item of a category in a list of items
pub fn cheapest_item<'b, 'a>(items: &'b [Item<'a>], category: Category) -> Option<&'b Item<'a>> {
    items
        .iter()
        .filter(|item| item.category() == category)
        .min_by_key(|item| item.price().to_minor_units())
}

/// Returns up to `n` of the most expensive items of a category, most expensive first
pub fn most_expensive_items<'b, 'a>(
    items: &'b [Item<'a>],
    category: Category,
    n: usize,
) -> SmallVec<[&'b Item<'a>; 4]> {
    let mut matching: SmallVec<[&'b Item<'a>; 4]> = items
        .iter()
        .filter(|item| item.category() == category)
        .collect();

    matching.sort_by_key(|item| std::cmp::Reverse(item.price().to_minor_units()));
    matching.truncate(n);

    matching
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_items<'a>() -> [Item<'a>; 4] {
        [
            Item::food("Enchiladas", Money::from_minor(10_000, iso::MXN)),
            Item::beverage("Horchata", Money::from_minor(3_000, iso::MXN)),
            Item::food("Tacos", Money::from_minor(6_000, iso::MXN)),
            Item::beverage("Jamaica", Money::from_minor(2_000, iso::MXN)),
        ]
    }

    #[test]
    fn test_cheapest_item() {
        let items = test_items();

        assert_eq!(cheapest_item(&items, Category::Food), items.get(2));
        assert_eq!(cheapest_item(&items, Category::Beverage), items.get(3));
    }

    #[test]
    fn cheapest_item_missing_category_is_none() {
        let items = [Item::food("Tacos", Money::from_minor(6_000, iso::MXN))];

        assert_eq!(cheapest_item(&items, Category::Beverage), None);
    }

    #[test]
    fn most_expensive_items_are_sorted_and_truncated() {
        let items = test_items();

        let prices: Vec<i64> = most_expensive_items(&items, Category::Food, 1)
            .iter()
            .map(|item| item.price().to_minor_units())
            .collect();

        assert_eq!(prices, vec![10_000]);

        let prices: Vec<i64> = most_expensive_items(&items, Category::Beverage, 5)
            .iter()
            .map(|item| item.price().to_minor_units())
            .collect();

        assert_eq!(prices, vec![3_000, 2_000]);
    }

    #[test]
    fn category_from_label() {
        assert_eq!(Category::from_label("Refresco"), Category::Beverage);
        assert_eq!(Category::from_label("beverage"), Category::Beverage);
        assert_eq!(Category::from_label("Plato"), Category::Food);
        assert_eq!(Category::from_label("Postre"), Category::Food);
    }

    #[test]
    fn category_labels_match_exactly() {
        assert_eq!(Category::from_label("refresco"), Category::Food);
        assert_eq!(Category::from_label("REFRESCO"), Category::Food);
        assert_eq!(Category::from_label(" Refresco"), Category::Food);
    }
}
