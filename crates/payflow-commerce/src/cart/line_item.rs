//! Cart line items.

use crate::cart::pricing::format_usd;
use crate::error::CommerceError;
use crate::ids::ItemId;
use serde::{Deserialize, Serialize};

/// One product entry in the cart.
///
/// Invariant: `1 <= quantity <= stock`. The constructor refuses items that
/// cannot satisfy it, and [`LineItem::set_quantity`] clamps every requested
/// value back into range, so the invariant holds for the item's lifetime.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    /// Unique item identifier.
    pub id: ItemId,
    /// Display name.
    pub name: String,
    /// Unit price in dollars.
    pub price: f64,
    /// Product image URL.
    pub image: String,
    /// Quantity in the cart.
    pub quantity: i64,
    /// Units available.
    pub stock: i64,
}

impl LineItem {
    /// Create a new line item.
    ///
    /// Returns an error if the price is negative or no stock is available;
    /// the requested quantity is clamped into `[1, stock]`.
    pub fn new(
        id: ItemId,
        name: impl Into<String>,
        price: f64,
        image: impl Into<String>,
        quantity: i64,
        stock: i64,
    ) -> Result<Self, CommerceError> {
        if price < 0.0 {
            return Err(CommerceError::InvalidPrice(price));
        }
        if stock < 1 {
            return Err(CommerceError::OutOfStock(id.into_inner()));
        }
        Ok(Self {
            id,
            name: name.into(),
            price,
            image: image.into(),
            quantity: quantity.clamp(1, stock),
            stock,
        })
    }

    /// Set the quantity, clamped into `[1, stock]`.
    pub fn set_quantity(&mut self, requested: i64) {
        self.quantity = requested.clamp(1, self.stock);
    }

    /// Whether the quantity has reached the stock limit.
    pub fn at_stock_limit(&self) -> bool {
        self.quantity >= self.stock
    }

    /// Total price for this line (unit price x quantity).
    pub fn line_total(&self) -> f64 {
        self.price * self.quantity as f64
    }

    /// Format the unit price for display (e.g., "$79.99").
    pub fn price_display(&self) -> String {
        format_usd(self.price)
    }

    /// Format the line total for display.
    pub fn line_total_display(&self) -> String {
        format_usd(self.line_total())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headphones() -> LineItem {
        LineItem::new(ItemId::new("1"), "Wireless Headphones", 79.99, "/img/1.jpg", 2, 45)
            .unwrap()
    }

    #[test]
    fn test_line_item_creation() {
        let item = headphones();
        assert_eq!(item.quantity, 2);
        assert_eq!(item.stock, 45);
    }

    #[test]
    fn test_negative_price_refused() {
        let result = LineItem::new(ItemId::new("1"), "Bad", -1.0, "", 1, 10);
        assert_eq!(result, Err(CommerceError::InvalidPrice(-1.0)));
    }

    #[test]
    fn test_zero_stock_refused() {
        let result = LineItem::new(ItemId::new("1"), "Gone", 5.0, "", 1, 0);
        assert!(matches!(result, Err(CommerceError::OutOfStock(_))));
    }

    #[test]
    fn test_constructor_clamps_quantity() {
        let item = LineItem::new(ItemId::new("1"), "Item", 5.0, "", 100, 3).unwrap();
        assert_eq!(item.quantity, 3);

        let item = LineItem::new(ItemId::new("1"), "Item", 5.0, "", 0, 3).unwrap();
        assert_eq!(item.quantity, 1);
    }

    #[test]
    fn test_set_quantity_clamps_low() {
        let mut item = headphones();
        item.set_quantity(0);
        assert_eq!(item.quantity, 1);
        item.set_quantity(-5);
        assert_eq!(item.quantity, 1);
        item.set_quantity(i64::MIN);
        assert_eq!(item.quantity, 1);
    }

    #[test]
    fn test_set_quantity_clamps_high() {
        let mut item = headphones();
        item.set_quantity(46);
        assert_eq!(item.quantity, 45);
        item.set_quantity(i64::MAX);
        assert_eq!(item.quantity, 45);
        assert!(item.at_stock_limit());
    }

    #[test]
    fn test_line_total() {
        let item = headphones();
        assert!((item.line_total() - 159.98).abs() < 1e-9);
        assert_eq!(item.line_total_display(), "$159.98");
    }
}
