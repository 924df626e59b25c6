//! Standalone pay button.

use leptos::prelude::*;

/// A payment trigger for hosts that embed a single button rather than the
/// full checkout flow. Emits the amount through `on_payment`; the host owns
/// whatever authorization happens next.
#[component]
pub fn PayButton(
    /// Amount to charge.
    amount: f64,
    /// Display currency code.
    #[prop(default = String::from("USD"), into)]
    currency: String,
    /// Payment intent callback, receiving the amount.
    #[prop(optional, into)]
    on_payment: Option<Callback<f64>>,
) -> impl IntoView {
    let label = format!("Pay {} {:.2}", currency, amount);

    let handle_payment = move |_| {
        if let Some(cb) = on_payment {
            cb.run(amount);
        }
        tracing::info!(amount, currency = %currency, "processing payment");
    };

    view! {
        <button class="btn btn-pay" on:click=handle_payment>
            {label}
        </button>
    }
}
