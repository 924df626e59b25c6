//! Presentational components.
//!
//! Every view here is a stateless function of the props it is handed, plus
//! callbacks for the intents it emits. The one exception is the checkout
//! wizard's step and field buffers, which stay local to the form that
//! collects them.

mod cart;
mod checkout;
mod pay_button;
mod summary;

pub use cart::ShoppingCart;
pub use checkout::CheckoutForm;
pub use pay_button::PayButton;
pub use summary::OrderSummaryBlock;
