//! Checkout domain types and logic for PayFlow.
//!
//! This crate provides the state and computation behind the PayFlow
//! checkout micro-frontend:
//!
//! - **Cart**: line items with stock-bounded quantities and mutation ops
//! - **Pricing**: derived order summary (subtotal, shipping, tax, total)
//! - **Checkout**: the shipping → payment → review wizard and the
//!   completion hand-off payload
//!
//! Everything here is synchronous, deterministic, and free of I/O; the UI
//! layer owns rendering and the host application owns the state.
//!
//! # Example
//!
//! ```rust,ignore
//! use payflow_commerce::prelude::*;
//!
//! let mut cart = Cart::new(vec![
//!     LineItem::new(ItemId::new("1"), "Wireless Headphones", 79.99, "/img/1.jpg", 2, 45)?,
//! ]);
//!
//! cart.set_quantity(&ItemId::new("1"), 3);
//! let summary = cart.summary();
//! println!("Total: {}", summary.total_display());
//! ```

pub mod error;
pub mod ids;

pub mod cart;
pub mod checkout;

pub use error::CommerceError;
pub use ids::ItemId;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::ItemId;

    // Cart
    pub use crate::cart::{
        format_usd, Cart, LineItem, OrderSummary, FLAT_SHIPPING_RATE, FREE_SHIPPING_THRESHOLD,
        TAX_RATE,
    };

    // Checkout
    pub use crate::checkout::{
        CheckoutWizard, CompletedOrder, PaymentInfo, ShippingInfo, WizardStep,
    };
}
