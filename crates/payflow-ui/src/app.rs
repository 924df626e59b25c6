//! Host application shell.
//!
//! Owns the cart and the current screen, wires the views to the domain
//! mutations, and performs the post-completion reset. When this container
//! is federated into a larger host, that host plays this role instead and
//! the components are imported individually.

use std::time::Duration;

use leptos::leptos_dom::helpers::{set_timeout_with_handle, TimeoutHandle};
use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Stylesheet, Title};

use payflow_commerce::prelude::*;

use crate::components::{CheckoutForm, ShoppingCart};

/// Which screen the shell is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// The cart view.
    #[default]
    Cart,
    /// The checkout wizard.
    Checkout,
    /// The post-completion confirmation.
    Success,
}

/// How long the success screen stays up before local state resets.
pub const RESET_DELAY: Duration = Duration::from_secs(3);

/// Inventory the standalone shell boots with.
pub fn demo_items() -> Vec<LineItem> {
    [
        LineItem::new(
            ItemId::new("1"),
            "Wireless Headphones",
            79.99,
            "https://images.unsplash.com/photo-1505740420928-5e560c06d30e?w=500&h=500&fit=crop",
            2,
            45,
        ),
        LineItem::new(
            ItemId::new("2"),
            "Smart Watch Pro",
            299.99,
            "https://images.unsplash.com/photo-1523275335684-37898b6baf30?w=500&h=500&fit=crop",
            1,
            30,
        ),
    ]
    .into_iter()
    .flatten()
    .collect()
}

/// The payment-provider shell.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let cart = RwSignal::new(Cart::new(demo_items()));
    let screen = RwSignal::new(Screen::Cart);
    let reset_handle: StoredValue<Option<TimeoutHandle>> = StoredValue::new(None);

    // A torn-down shell must not fire a stale reset.
    on_cleanup(move || {
        if let Some(handle) = reset_handle.get_value() {
            handle.clear();
        }
    });

    let on_update_quantity = Callback::new(move |(id, quantity): (ItemId, i64)| {
        cart.update(|c| {
            c.set_quantity(&id, quantity);
        });
    });

    let on_remove_item = Callback::new(move |id: ItemId| {
        cart.update(|c| {
            c.remove_item(&id);
        });
    });

    let on_checkout = Callback::new(move |()| screen.set(Screen::Checkout));
    let on_back = Callback::new(move |()| screen.set(Screen::Cart));

    let on_complete = Callback::new(move |order: CompletedOrder| {
        let summary = cart.with(Cart::summary);
        tracing::info!(
            order = %order.log_line(),
            items = cart.with(Cart::item_count),
            total = %summary.total_display(),
            "order completed"
        );
        screen.set(Screen::Success);
        match set_timeout_with_handle(
            move || {
                cart.set(Cart::default());
                screen.set(Screen::Cart);
            },
            RESET_DELAY,
        ) {
            Ok(handle) => reset_handle.set_value(Some(handle)),
            Err(err) => tracing::error!(?err, "failed to schedule state reset"),
        }
    });

    view! {
        <Stylesheet id="payflow" href="/pkg/payflow_ui.css"/>
        <Title text="Payment Provider"/>

        <div class="payflow-shell">
            <header class="payflow-header">
                <h1>"Payment Provider"</h1>
                <p>"Secure checkout and payment processing"</p>
            </header>
            <main>
                {move || match screen.get() {
                    Screen::Cart => {
                        view! {
                            <ShoppingCart
                                cart=cart
                                on_update_quantity=on_update_quantity
                                on_remove_item=on_remove_item
                                on_checkout=on_checkout
                            />
                        }
                            .into_any()
                    }
                    Screen::Checkout => {
                        view! {
                            <CheckoutForm cart=cart on_complete=on_complete on_back=on_back/>
                        }
                            .into_any()
                    }
                    Screen::Success => view! { <OrderSuccess/> }.into_any(),
                }}
            </main>
        </div>
    }
}

/// Confirmation screen shown until the deferred reset fires.
#[component]
fn OrderSuccess() -> impl IntoView {
    view! {
        <div class="order-success">
            <div class="order-success-badge">"\u{2713}"</div>
            <h2>"Order Successful!"</h2>
            <p>"Thank you for your purchase. Your order has been confirmed."</p>
            <p class="order-success-note">"Redirecting to cart..."</p>
        </div>
    }
}
