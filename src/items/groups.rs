//! Item Groups

use rustc_hash::FxHashMap;
use rusty_money::{Money, iso::Currency};
use smallvec::SmallVec;

use crate::items::{Category, Item};

/// Identical items (same category and name) on an order
#[derive(Debug, Clone, PartialEq)]
pub struct ItemGroup<'b, 'a> {
    name: &'b str,
    category: Category,
    unit_price: Money<'a, Currency>,
    count: usize,
}

impl<'b, 'a> ItemGroup<'b, 'a> {
    /// Create a new item group.
    pub fn new(
        name: &'b str,
        category: Category,
        unit_price: Money<'a, Currency>,
        count: usize,
    ) -> Self {
        ItemGroup {
            name,
            category,
            unit_price,
            count,
        }
    }

    /// Name shared by every item in the group.
    pub fn name(&self) -> &'b str {
        self.name
    }

    /// Category shared by every item in the group.
    pub fn category(&self) -> Category {
        self.category
    }

    /// Price of the first item of the group on the order.
    pub fn unit_price(&self) -> &Money<'a, Currency> {
        &self.unit_price
    }

    /// Number of items in the group.
    pub fn count(&self) -> usize {
        self.count
    }
}

/// Group items by category and name, in order of first appearance.
pub fn group_by_name<'b, 'a>(items: &'b [Item<'a>]) -> SmallVec<[ItemGroup<'b, 'a>; 10]> {
    let mut index: FxHashMap<(Category, &'b str), usize> = FxHashMap::default();
    let mut groups: SmallVec<[ItemGroup<'b, 'a>; 10]> = SmallVec::new();

    for item in items {
        let key = (item.category(), item.name());

        if let Some(group) = index.get(&key).and_then(|&idx| groups.get_mut(idx)) {
            group.count += 1;
            continue;
        }

        index.insert(key, groups.len());
        groups.push(ItemGroup::new(
            item.name(),
            item.category(),
            *item.price(),
            1,
        ));
    }

    groups
}
