//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in checkout domain operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CommerceError {
    /// Negative unit price.
    #[error("Invalid price: {0}")]
    InvalidPrice(f64),

    /// Line item constructed with no available stock.
    #[error("No stock available for item {0}")]
    OutOfStock(String),

    /// Invalid wizard state transition.
    #[error("Invalid checkout transition from {from} to {to}")]
    InvalidTransition { from: String, to: String },

    /// A wizard step was submitted with required fields missing.
    #[error("Step incomplete: missing {0}")]
    StepIncomplete(String),
}
