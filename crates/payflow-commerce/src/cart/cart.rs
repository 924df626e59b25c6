//! The cart collection and its mutation operations.

use crate::cart::{LineItem, OrderSummary};
use crate::ids::ItemId;
use serde::{Deserialize, Serialize};

/// A shopping cart: the host-owned list of line items.
///
/// Mutations are synchronous and total. Quantity requests are clamped at
/// the item boundary; operations on an unknown ID are no-ops that report
/// `false`, never errors.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Cart {
    /// Items in the cart.
    pub items: Vec<LineItem>,
}

impl Cart {
    /// Create a cart from an initial item collection.
    pub fn new(items: Vec<LineItem>) -> Self {
        Self { items }
    }

    /// Set the quantity of the matching item, clamped into `[1, stock]`.
    ///
    /// Returns `false` if no item has the given ID.
    pub fn set_quantity(&mut self, item_id: &ItemId, quantity: i64) -> bool {
        if let Some(item) = self.items.iter_mut().find(|i| &i.id == item_id) {
            item.set_quantity(quantity);
            true
        } else {
            false
        }
    }

    /// Remove the matching item. Returns `false` if no item has the ID.
    pub fn remove_item(&mut self, item_id: &ItemId) -> bool {
        let len_before = self.items.len();
        self.items.retain(|i| &i.id != item_id);
        self.items.len() < len_before
    }

    /// Clear all items.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Get an item by ID.
    pub fn get_item(&self, item_id: &ItemId) -> Option<&LineItem> {
        self.items.iter().find(|i| &i.id == item_id)
    }

    /// Total item count (sum of quantities).
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Number of distinct items.
    pub fn unique_item_count(&self) -> usize {
        self.items.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Derive the order summary from the current items.
    pub fn summary(&self) -> OrderSummary {
        OrderSummary::for_items(&self.items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_cart() -> Cart {
        Cart::new(vec![
            LineItem::new(ItemId::new("1"), "Wireless Headphones", 79.99, "/img/1.jpg", 2, 45)
                .unwrap(),
            LineItem::new(ItemId::new("2"), "Smart Watch Pro", 299.99, "/img/2.jpg", 1, 30)
                .unwrap(),
        ])
    }

    #[test]
    fn test_counts() {
        let cart = demo_cart();
        assert_eq!(cart.item_count(), 3);
        assert_eq!(cart.unique_item_count(), 2);
        assert!(!cart.is_empty());
    }

    #[test]
    fn test_set_quantity() {
        let mut cart = demo_cart();
        assert!(cart.set_quantity(&ItemId::new("1"), 5));
        assert_eq!(cart.get_item(&ItemId::new("1")).unwrap().quantity, 5);
    }

    #[test]
    fn test_set_quantity_clamps() {
        let mut cart = demo_cart();
        cart.set_quantity(&ItemId::new("2"), 1000);
        assert_eq!(cart.get_item(&ItemId::new("2")).unwrap().quantity, 30);
        cart.set_quantity(&ItemId::new("2"), -3);
        assert_eq!(cart.get_item(&ItemId::new("2")).unwrap().quantity, 1);
    }

    #[test]
    fn test_set_quantity_unknown_id_is_noop() {
        let mut cart = demo_cart();
        let before = cart.clone();
        assert!(!cart.set_quantity(&ItemId::new("missing"), 4));
        assert_eq!(cart, before);
    }

    #[test]
    fn test_remove_item() {
        let mut cart = demo_cart();
        assert!(cart.remove_item(&ItemId::new("1")));
        assert_eq!(cart.unique_item_count(), 1);
        assert!(!cart.remove_item(&ItemId::new("1")));
    }

    #[test]
    fn test_remove_only_item_empties_cart() {
        let mut cart = Cart::new(vec![LineItem::new(
            ItemId::new("1"),
            "Solo",
            10.0,
            "",
            1,
            5,
        )
        .unwrap()]);
        assert!(cart.remove_item(&ItemId::new("1")));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_summary_recomputed_after_mutation() {
        let mut cart = demo_cart();
        let before = cart.summary();
        cart.set_quantity(&ItemId::new("1"), 1);
        let after = cart.summary();
        assert!(after.subtotal < before.subtotal);
    }

    #[test]
    fn test_clear() {
        let mut cart = demo_cart();
        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.summary().subtotal, 0.0);
    }
}
