//! Shopping cart view.

use leptos::prelude::*;
use payflow_commerce::cart::{format_usd, Cart, LineItem};
use payflow_commerce::ids::ItemId;

use crate::components::OrderSummaryBlock;

/// The cart view: line items with quantity controls, the order summary,
/// and the checkout button. Renders the empty state when the last item is
/// removed, at which point checkout is unavailable.
#[component]
pub fn ShoppingCart(
    /// The host-owned cart.
    #[prop(into)]
    cart: Signal<Cart>,
    /// Quantity-change intent: `(item, requested quantity)`.
    #[prop(optional, into)]
    on_update_quantity: Option<Callback<(ItemId, i64)>>,
    /// Item-removal intent.
    #[prop(optional, into)]
    on_remove_item: Option<Callback<ItemId>>,
    /// Checkout intent.
    #[prop(optional, into)]
    on_checkout: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        {move || {
            let snapshot = cart.get();
            if snapshot.is_empty() {
                view! { <EmptyCart/> }.into_any()
            } else {
                view! {
                    <div class="cart">
                        <div class="cart-header">
                            <h2>"Shopping Cart"</h2>
                            <p>
                                {snapshot.unique_item_count().to_string()}
                                {if snapshot.unique_item_count() == 1 { " item" } else { " items" }}
                            </p>
                        </div>
                        <div class="cart-items">
                            {snapshot
                                .items
                                .iter()
                                .map(|item| {
                                    view! {
                                        <CartLine
                                            item=item.clone()
                                            on_update_quantity=on_update_quantity
                                            on_remove_item=on_remove_item
                                        />
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </div>
                        <div class="cart-footer">
                            <OrderSummaryBlock summary=snapshot.summary()/>
                            {snapshot
                                .summary()
                                .amount_to_free_shipping()
                                .map(|needed| {
                                    view! {
                                        <div class="free-shipping-nudge">
                                            "Add " {format_usd(needed)}
                                            " more to get FREE shipping!"
                                        </div>
                                    }
                                })}
                            <button
                                class="btn btn-checkout"
                                on:click=move |_| {
                                    if let Some(cb) = on_checkout {
                                        cb.run(());
                                    }
                                }
                            >
                                "Proceed to Checkout"
                            </button>
                        </div>
                    </div>
                }
                .into_any()
            }
        }}
    }
}

/// One cart row: image, name, price, quantity stepper, line total, remove.
#[component]
fn CartLine(
    item: LineItem,
    #[prop(optional_no_strip)] on_update_quantity: Option<Callback<(ItemId, i64)>>,
    #[prop(optional_no_strip)] on_remove_item: Option<Callback<ItemId>>,
) -> impl IntoView {
    let quantity = item.quantity;
    let at_limit = item.at_stock_limit();
    let dec_id = item.id.clone();
    let inc_id = item.id.clone();
    let remove_id = item.id.clone();

    view! {
        <div class="cart-item">
            <img class="cart-item-image" src=item.image.clone() alt=item.name.clone()/>
            <div class="cart-item-details">
                <h3>{item.name.clone()}</h3>
                <p class="cart-item-price">{item.price_display()}</p>
                <div class="quantity-controls">
                    <button
                        class="btn-quantity"
                        on:click=move |_| {
                            if let Some(cb) = on_update_quantity {
                                cb.run((dec_id.clone(), quantity - 1));
                            }
                        }
                    >
                        "-"
                    </button>
                    <span class="quantity-value">{quantity.to_string()}</span>
                    <button
                        class="btn-quantity"
                        disabled=at_limit
                        on:click=move |_| {
                            if let Some(cb) = on_update_quantity {
                                cb.run((inc_id.clone(), quantity + 1));
                            }
                        }
                    >
                        "+"
                    </button>
                    <span class="stock-note">"(" {item.stock.to_string()} " available)"</span>
                </div>
            </div>
            <div class="cart-item-side">
                <div class="cart-item-total">{item.line_total_display()}</div>
                <button
                    class="btn-remove"
                    on:click=move |_| {
                        if let Some(cb) = on_remove_item {
                            cb.run(remove_id.clone());
                        }
                    }
                >
                    "Remove"
                </button>
            </div>
        </div>
    }
}

/// Empty-cart state. No checkout control is rendered here.
#[component]
fn EmptyCart() -> impl IntoView {
    view! {
        <div class="cart cart-empty">
            <h2>"Your cart is empty"</h2>
            <p>"Add some products to get started!"</p>
        </div>
    }
}
