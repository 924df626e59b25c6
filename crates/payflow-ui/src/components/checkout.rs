//! Checkout wizard form.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use payflow_commerce::cart::Cart;
use payflow_commerce::checkout::{CheckoutWizard, CompletedOrder, PaymentInfo, ShippingInfo, WizardStep};

use crate::components::OrderSummaryBlock;

/// The three-step checkout wizard: shipping → payment → review.
///
/// The wizard and its field buffers are component-local; the machine in
/// `payflow-commerce` decides every transition. Field presence is enforced
/// by the browser's `required` handling before a submit can fire, and the
/// machine refuses incomplete submissions anyway.
#[component]
pub fn CheckoutForm(
    /// The host-owned cart, rendered read-only in the review step.
    #[prop(into)]
    cart: Signal<Cart>,
    /// Completion hand-off with the finalized shipping and payment data.
    #[prop(optional, into)]
    on_complete: Option<Callback<CompletedOrder>>,
    /// Intent to leave checkout and return to the cart.
    #[prop(optional, into)]
    on_back: Option<Callback<()>>,
) -> impl IntoView {
    let wizard = RwSignal::new(CheckoutWizard::new());

    // Shipping fields.
    let full_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let address = RwSignal::new(String::new());
    let city = RwSignal::new(String::new());
    let postal_code = RwSignal::new(String::new());
    let country = RwSignal::new(String::new());

    // Payment fields.
    let card_name = RwSignal::new(String::new());
    let card_number = RwSignal::new(String::new());
    let expiry = RwSignal::new(String::new());
    let cvv = RwSignal::new(String::new());

    let submit_shipping = move |ev: SubmitEvent| {
        ev.prevent_default();
        let info = ShippingInfo {
            full_name: full_name.get(),
            email: email.get(),
            address: address.get(),
            city: city.get(),
            postal_code: postal_code.get(),
            country: country.get(),
        };
        wizard.update(|w| {
            if let Err(err) = w.submit_shipping(info) {
                tracing::warn!(%err, "shipping step refused");
            }
        });
    };

    let submit_payment = move |ev: SubmitEvent| {
        ev.prevent_default();
        let info = PaymentInfo {
            card_name: card_name.get(),
            card_number: card_number.get(),
            expiry: expiry.get(),
            cvv: cvv.get(),
        };
        wizard.update(|w| {
            if let Err(err) = w.submit_payment(info) {
                tracing::warn!(%err, "payment step refused");
            }
        });
    };

    let step_back = move |_| {
        wizard.update(|w| {
            if let Err(err) = w.back() {
                tracing::warn!(%err, "back refused");
            }
        });
    };

    let leave_checkout = move |_| {
        if let Some(cb) = on_back {
            cb.run(());
        }
    };

    let complete_order = move |_| {
        match wizard.with(CheckoutWizard::complete) {
            Ok(order) => {
                if let Some(cb) = on_complete {
                    cb.run(order);
                }
            }
            Err(err) => tracing::warn!(%err, "completion refused"),
        }
    };

    view! {
        <div class="checkout">
            <ProgressHeader wizard=wizard/>
            <div class="checkout-panel">
                {move || match wizard.with(|w| w.step) {
                    WizardStep::Shipping => {
                        view! {
                            <form on:submit=submit_shipping>
                                <h2>"Shipping Information"</h2>
                                <FormField id="full_name" label="Full Name" value=full_name/>
                                <FormField id="email" label="Email" input_type="email" value=email/>
                                <FormField id="address" label="Address" value=address/>
                                <div class="form-row">
                                    <FormField id="city" label="City" value=city/>
                                    <FormField id="postal_code" label="Postal Code" value=postal_code/>
                                </div>
                                <FormField id="country" label="Country" value=country/>
                                <div class="form-actions">
                                    <button type="button" class="btn btn-secondary" on:click=leave_checkout>
                                        "Back to Cart"
                                    </button>
                                    <button type="submit" class="btn btn-primary">
                                        "Continue to Payment"
                                    </button>
                                </div>
                            </form>
                        }
                            .into_any()
                    }
                    WizardStep::Payment => {
                        view! {
                            <form on:submit=submit_payment>
                                <h2>"Payment Information"</h2>
                                <FormField id="card_name" label="Cardholder Name" value=card_name/>
                                <FormField
                                    id="card_number"
                                    label="Card Number"
                                    placeholder="1234 5678 9012 3456"
                                    value=card_number
                                />
                                <div class="form-row">
                                    <FormField id="expiry" label="Expiry Date" placeholder="MM/YY" value=expiry/>
                                    <FormField id="cvv" label="CVV" placeholder="123" value=cvv/>
                                </div>
                                <div class="form-actions">
                                    <button type="button" class="btn btn-secondary" on:click=step_back>
                                        "Back"
                                    </button>
                                    <button type="submit" class="btn btn-primary">
                                        "Review Order"
                                    </button>
                                </div>
                            </form>
                        }
                            .into_any()
                    }
                    WizardStep::Review => {
                        let items = cart.with(|c| c.items.clone());
                        let summary = cart.with(|c| c.summary());
                        let shipping = wizard.with(|w| w.shipping.clone());
                        let payment = wizard.with(|w| w.payment.clone());
                        view! {
                            <div class="review">
                                <h2>"Review Your Order"</h2>
                                <h3>"Order Items"</h3>
                                <div class="review-items">
                                    {items
                                        .iter()
                                        .map(|item| {
                                            view! {
                                                <div class="review-item">
                                                    <img src=item.image.clone() alt=item.name.clone()/>
                                                    <div>
                                                        <div class="review-item-name">{item.name.clone()}</div>
                                                        <div class="review-item-quantity">
                                                            "Quantity: " {item.quantity.to_string()}
                                                        </div>
                                                    </div>
                                                    <div class="review-item-total">{item.line_total_display()}</div>
                                                </div>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </div>
                                <h3>"Shipping Address"</h3>
                                <div class="review-block">
                                    <p class="review-name">{shipping.full_name.clone()}</p>
                                    <p>{shipping.email.clone()}</p>
                                    <p>{shipping.address.clone()}</p>
                                    <p>{format!("{}, {}", shipping.city, shipping.postal_code)}</p>
                                    <p>{shipping.country.clone()}</p>
                                </div>
                                <h3>"Payment Method"</h3>
                                <div class="review-block">
                                    <p class="review-name">{payment.card_name.clone()}</p>
                                    <p>{payment.masked_card()}</p>
                                </div>
                                <OrderSummaryBlock summary=summary/>
                                <div class="form-actions">
                                    <button type="button" class="btn btn-secondary" on:click=step_back>
                                        "Back"
                                    </button>
                                    <button type="button" class="btn btn-complete" on:click=complete_order>
                                        "Complete Order"
                                    </button>
                                </div>
                            </div>
                        }
                            .into_any()
                    }
                }}
            </div>
        </div>
    }
}

/// Step indicators: a check for submitted steps, the number otherwise.
#[component]
fn ProgressHeader(wizard: RwSignal<CheckoutWizard>) -> impl IntoView {
    view! {
        <div class="checkout-progress">
            {WizardStep::ALL
                .iter()
                .map(|&step| {
                    let marker = move || {
                        if wizard.with(|w| w.is_step_done(step)) {
                            "\u{2713}".to_string()
                        } else {
                            step.number().to_string()
                        }
                    };
                    let class = move || {
                        let current = wizard.with(|w| w.step);
                        if step == current {
                            "progress-step progress-step--active"
                        } else if wizard.with(|w| w.is_step_done(step)) {
                            "progress-step progress-step--done"
                        } else {
                            "progress-step"
                        }
                    };
                    view! {
                        <div class=class>
                            <div class="progress-marker">{marker}</div>
                            <div class="progress-label">{step.display_name()}</div>
                        </div>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}

/// A labelled, browser-required text input bound to a field signal.
#[component]
fn FormField(
    id: &'static str,
    label: &'static str,
    value: RwSignal<String>,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] placeholder: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="form-field">
            <label for=id>{label}</label>
            <input
                id=id
                type=input_type
                required=true
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </div>
    }
}
