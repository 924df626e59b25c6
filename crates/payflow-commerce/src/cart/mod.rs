//! Shopping cart module.
//!
//! Contains the line-item type, the cart collection with its mutation
//! operations, and the derived order-summary pricing.

mod cart;
mod line_item;
mod pricing;

pub use cart::Cart;
pub use line_item::LineItem;
pub use pricing::{
    format_usd, OrderSummary, FLAT_SHIPPING_RATE, FREE_SHIPPING_THRESHOLD, TAX_RATE,
};
