//! PayFlow checkout micro-frontend.
//!
//! A federated checkout unit for composition into a host storefront:
//!
//! - [`ShoppingCart`]: cart view with quantity controls and order summary
//! - [`CheckoutForm`]: the shipping / payment / review wizard
//! - [`PayButton`]: standalone payment trigger
//! - [`app::App`]: the host shell that owns cart and view state, used
//!   standalone for development and as the container's default export
//!
//! The shared domain types live in `payflow-commerce` and are re-exported
//! here so consumers can import views and types from one place. The
//! container's exposure surface is described by [`federation::manifest`].

pub mod app;
pub mod components;
pub mod federation;

pub use app::App;
pub use components::{CheckoutForm, PayButton, ShoppingCart};

// Shared type definitions, importable alongside the views.
pub use payflow_commerce::prelude::*;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
