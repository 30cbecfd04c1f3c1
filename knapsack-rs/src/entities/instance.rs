use itertools::Itertools;

use crate::entities::Item;
use crate::util::assertions;
use crate::util::config::ItemOrder;

/// Instance of the 0/1 Knapsack Problem: a capacity and a set of items with unique ids.
/// Immutable once constructed, use [`KPInstanceBuilder`] to assemble one incrementally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KPInstance {
    capacity: u64,
    items: Vec<Item>,
}

impl KPInstance {
    pub fn new(capacity: u64, items: Vec<Item>) -> Self {
        assert!(
            assertions::item_ids_unique(&items),
            "all items should have unique ids, ids: {:?}",
            items.iter().map(|item| item.id).collect_vec()
        );

        Self { capacity, items }
    }

    pub fn builder(capacity: u64) -> KPInstanceBuilder {
        KPInstanceBuilder::new(capacity)
    }

    /// Maximum total weight of a selection, in fixed-point units
    pub fn capacity(&self) -> u64 {
        self.capacity
    }

    /// The items in the order in which the solver enumerates them
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn n_items(&self) -> usize {
        self.items.len()
    }

    pub fn item(&self, id: u64) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn total_item_weight(&self) -> u64 {
        self.items.iter().map(|item| item.weight).sum()
    }

    /// Returns the same instance with its items enumerated in the requested order.
    /// The optimal value does not depend on the order, the selected items can (on ties).
    pub fn ordered(mut self, order: ItemOrder) -> Self {
        match order {
            ItemOrder::AsGiven => {}
            ItemOrder::ById => self.items.sort(),
            ItemOrder::ByWeightValueId => self
                .items
                .sort_by_key(|item| (item.weight, item.value, item.id)),
        }
        self
    }
}

/// Collects items one by one and freezes them into a [`KPInstance`].
#[derive(Debug, Clone)]
pub struct KPInstanceBuilder {
    capacity: u64,
    items: Vec<Item>,
}

impl KPInstanceBuilder {
    pub fn new(capacity: u64) -> Self {
        Self {
            capacity,
            items: vec![],
        }
    }

    pub fn with_item(mut self, item: Item) -> Self {
        self.items.push(item);
        self
    }

    pub fn add_item(&mut self, item: Item) -> &mut Self {
        self.items.push(item);
        self
    }

    pub fn n_items(&self) -> usize {
        self.items.len()
    }

    pub fn build(self) -> KPInstance {
        KPInstance::new(self.capacity, self.items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unordered_instance() -> KPInstance {
        KPInstance::builder(5000)
            .with_item(Item::new(3, 3000, 100))
            .with_item(Item::new(1, 1000, 60))
            .with_item(Item::new(2, 1000, 10))
            .build()
    }

    #[test]
    fn builder_keeps_insertion_order() {
        let mut builder = KPInstance::builder(10);
        builder.add_item(Item::new(7, 1, 1)).add_item(Item::new(4, 2, 2));
        assert_eq!(builder.n_items(), 2);

        let instance = builder.build();
        assert_eq!(instance.capacity(), 10);
        assert_eq!(
            instance.items().iter().map(|i| i.id).collect_vec(),
            vec![7, 4]
        );
    }

    #[test]
    fn ordering_by_id() {
        let ids = unordered_instance()
            .ordered(ItemOrder::ById)
            .items()
            .iter()
            .map(|i| i.id)
            .collect_vec();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn ordering_by_weight_value_id() {
        let ids = unordered_instance()
            .ordered(ItemOrder::ByWeightValueId)
            .items()
            .iter()
            .map(|i| i.id)
            .collect_vec();
        assert_eq!(ids, vec![2, 1, 3]);
    }

    #[test]
    fn lookup_and_totals() {
        let instance = unordered_instance();
        assert_eq!(instance.n_items(), 3);
        assert_eq!(instance.total_item_weight(), 5000);
        assert_eq!(instance.item(1), Some(&Item::new(1, 1000, 60)));
        assert_eq!(instance.item(42), None);
    }

    #[test]
    #[should_panic(expected = "unique ids")]
    fn duplicate_ids_are_rejected() {
        KPInstance::new(10, vec![Item::new(1, 1, 1), Item::new(1, 2, 2)]);
    }
}
