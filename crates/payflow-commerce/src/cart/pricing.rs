//! Order summary pricing.
//!
//! The summary is derived, never stored: it is recomputed from the line
//! items on every read. Threshold and rates are fixed for this product.

use crate::cart::LineItem;
use serde::{Deserialize, Serialize};

/// Orders with a subtotal strictly above this ship free.
pub const FREE_SHIPPING_THRESHOLD: f64 = 50.0;

/// Flat shipping rate below the free-shipping threshold.
pub const FLAT_SHIPPING_RATE: f64 = 10.0;

/// Tax rate applied to the subtotal.
pub const TAX_RATE: f64 = 0.10;

/// Format a dollar amount for display (e.g., "$49.99").
pub fn format_usd(amount: f64) -> String {
    format!("${:.2}", amount)
}

/// Complete pricing breakdown for a cart.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct OrderSummary {
    /// Sum of line totals.
    pub subtotal: f64,
    /// Shipping cost (0 above the free-shipping threshold).
    pub shipping: f64,
    /// Tax on the subtotal.
    pub tax: f64,
    /// Grand total (subtotal + shipping + tax).
    pub total: f64,
}

impl OrderSummary {
    /// Compute the summary for a collection of line items.
    pub fn for_items(items: &[LineItem]) -> Self {
        let subtotal: f64 = items.iter().map(LineItem::line_total).sum();
        let shipping = if subtotal > FREE_SHIPPING_THRESHOLD {
            0.0
        } else {
            FLAT_SHIPPING_RATE
        };
        let tax = subtotal * TAX_RATE;
        Self {
            subtotal,
            shipping,
            tax,
            total: subtotal + shipping + tax,
        }
    }

    /// Whether this order qualifies for free shipping.
    pub fn has_free_shipping(&self) -> bool {
        self.shipping == 0.0
    }

    /// How much more to spend before shipping becomes free.
    ///
    /// `None` once the cart is past the nudge point.
    pub fn amount_to_free_shipping(&self) -> Option<f64> {
        if self.subtotal < FREE_SHIPPING_THRESHOLD {
            Some(FREE_SHIPPING_THRESHOLD - self.subtotal)
        } else {
            None
        }
    }

    pub fn subtotal_display(&self) -> String {
        format_usd(self.subtotal)
    }

    /// Shipping for display: "FREE" or the flat rate.
    pub fn shipping_display(&self) -> String {
        if self.has_free_shipping() {
            "FREE".to_string()
        } else {
            format_usd(self.shipping)
        }
    }

    pub fn tax_display(&self) -> String {
        format_usd(self.tax)
    }

    pub fn total_display(&self) -> String {
        format_usd(self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::ItemId;

    const EPS: f64 = 1e-9;

    fn item(id: &str, price: f64, quantity: i64) -> LineItem {
        LineItem::new(ItemId::new(id), "Item", price, "", quantity, 9999).unwrap()
    }

    #[test]
    fn test_summary_large_cart() {
        // 79.99 x 2 + 299.99 x 1
        let items = vec![item("1", 79.99, 2), item("2", 299.99, 1)];
        let summary = OrderSummary::for_items(&items);

        assert!((summary.subtotal - 459.97).abs() < EPS);
        assert_eq!(summary.shipping, 0.0);
        assert!((summary.tax - 45.997).abs() < EPS);
        assert!((summary.total - 505.967).abs() < EPS);
    }

    #[test]
    fn test_summary_small_cart() {
        let items = vec![item("1", 10.0, 1)];
        let summary = OrderSummary::for_items(&items);

        assert!((summary.subtotal - 10.0).abs() < EPS);
        assert!((summary.shipping - 10.0).abs() < EPS);
        assert!((summary.tax - 1.0).abs() < EPS);
        assert!((summary.total - 21.0).abs() < EPS);
    }

    #[test]
    fn test_free_shipping_boundary_is_strict() {
        // Exactly at the threshold still pays flat-rate shipping.
        let items = vec![item("1", 50.0, 1)];
        let summary = OrderSummary::for_items(&items);
        assert!((summary.shipping - FLAT_SHIPPING_RATE).abs() < EPS);
        assert!(!summary.has_free_shipping());

        let items = vec![item("1", 50.01, 1)];
        let summary = OrderSummary::for_items(&items);
        assert_eq!(summary.shipping, 0.0);
        assert!(summary.has_free_shipping());
    }

    #[test]
    fn test_total_identity() {
        let items = vec![item("1", 12.34, 3), item("2", 0.99, 7)];
        let summary = OrderSummary::for_items(&items);
        assert!((summary.total - (summary.subtotal + summary.shipping + summary.tax)).abs() < EPS);
        assert!((summary.tax - summary.subtotal * TAX_RATE).abs() < EPS);
    }

    #[test]
    fn test_free_shipping_nudge() {
        let items = vec![item("1", 10.0, 1)];
        let summary = OrderSummary::for_items(&items);
        assert!((summary.amount_to_free_shipping().unwrap() - 40.0).abs() < EPS);

        let items = vec![item("1", 60.0, 1)];
        let summary = OrderSummary::for_items(&items);
        assert!(summary.amount_to_free_shipping().is_none());
    }

    #[test]
    fn test_display_formatting() {
        let items = vec![item("1", 10.0, 1)];
        let summary = OrderSummary::for_items(&items);
        assert_eq!(summary.subtotal_display(), "$10.00");
        assert_eq!(summary.shipping_display(), "$10.00");
        assert_eq!(summary.total_display(), "$21.00");

        let items = vec![item("1", 60.0, 1)];
        let summary = OrderSummary::for_items(&items);
        assert_eq!(summary.shipping_display(), "FREE");
    }
}
