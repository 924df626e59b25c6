//! Completion hand-off payload.

use crate::checkout::{PaymentInfo, ShippingInfo};
use serde::{Deserialize, Serialize};

/// The finalized checkout data handed to the host on completion.
///
/// The host already owns the cart contents; this carries the data the
/// wizard accumulated. Anything beyond logging it (payment authorization,
/// persistence) is the host's concern.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CompletedOrder {
    /// Finalized shipping details.
    pub shipping: ShippingInfo,
    /// Finalized payment details.
    pub payment: PaymentInfo,
}

impl CompletedOrder {
    /// Short description for completion logging: recipient and masked card.
    pub fn log_line(&self) -> String {
        format!(
            "{} <{}> paying with {}",
            self.shipping.full_name,
            self.shipping.email,
            self.payment.masked_card()
        )
    }
}
