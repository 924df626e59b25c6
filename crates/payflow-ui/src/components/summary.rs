//! Order summary block, shared by the cart view and the review step.

use leptos::prelude::*;
use payflow_commerce::cart::OrderSummary;

/// Subtotal / shipping / tax / total rows.
#[component]
pub fn OrderSummaryBlock(summary: OrderSummary) -> impl IntoView {
    view! {
        <div class="order-summary">
            <div class="summary-row">
                <span>"Subtotal:"</span>
                <span class="summary-value">{summary.subtotal_display()}</span>
            </div>
            <div class="summary-row">
                <span>"Shipping:"</span>
                <span class="summary-value">{summary.shipping_display()}</span>
            </div>
            <div class="summary-row">
                <span>"Tax (10%):"</span>
                <span class="summary-value">{summary.tax_display()}</span>
            </div>
            <div class="summary-row summary-total">
                <span>"Total:"</span>
                <span class="summary-value">{summary.total_display()}</span>
            </div>
        </div>
    }
}
