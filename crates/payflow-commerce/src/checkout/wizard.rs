//! Checkout wizard state machine.

use crate::checkout::{CompletedOrder, PaymentInfo, ShippingInfo};
use crate::error::CommerceError;
use serde::{Deserialize, Serialize};

/// Steps in the checkout wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum WizardStep {
    /// Shipping details.
    #[default]
    Shipping,
    /// Payment details.
    Payment,
    /// Order review before completion.
    Review,
}

impl WizardStep {
    /// All steps in wizard order, for progress rendering.
    pub const ALL: [WizardStep; 3] = [WizardStep::Shipping, WizardStep::Payment, WizardStep::Review];

    pub fn as_str(&self) -> &'static str {
        match self {
            WizardStep::Shipping => "shipping",
            WizardStep::Payment => "payment",
            WizardStep::Review => "review",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            WizardStep::Shipping => "Shipping",
            WizardStep::Payment => "Payment",
            WizardStep::Review => "Review",
        }
    }

    /// Get the step number (1-indexed).
    pub fn number(&self) -> u8 {
        match self {
            WizardStep::Shipping => 1,
            WizardStep::Payment => 2,
            WizardStep::Review => 3,
        }
    }

    /// The following step, if any.
    pub fn next(&self) -> Option<WizardStep> {
        match self {
            WizardStep::Shipping => Some(WizardStep::Payment),
            WizardStep::Payment => Some(WizardStep::Review),
            WizardStep::Review => None,
        }
    }

    /// The preceding step, if any.
    pub fn previous(&self) -> Option<WizardStep> {
        match self {
            WizardStep::Shipping => None,
            WizardStep::Payment => Some(WizardStep::Shipping),
            WizardStep::Review => Some(WizardStep::Payment),
        }
    }
}

/// The linear shipping → payment → review checkout flow.
///
/// Field buffers accumulate as steps are submitted. The machine refuses
/// forward progress on an incomplete buffer and refuses `back` at the first
/// step; completion is a hand-off, not a transition.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CheckoutWizard {
    /// Current step.
    pub step: WizardStep,
    /// Shipping buffer, populated once the shipping step is submitted.
    pub shipping: ShippingInfo,
    /// Payment buffer, populated once the payment step is submitted.
    pub payment: PaymentInfo,
}

impl CheckoutWizard {
    /// Create a wizard at the shipping step with empty buffers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Submit the shipping step and advance to payment.
    pub fn submit_shipping(&mut self, info: ShippingInfo) -> Result<WizardStep, CommerceError> {
        if self.step != WizardStep::Shipping {
            return Err(self.invalid_transition("submit shipping"));
        }
        if !info.is_complete() {
            return Err(CommerceError::StepIncomplete(info.missing_fields().join(", ")));
        }
        self.shipping = info;
        self.step = WizardStep::Payment;
        Ok(self.step)
    }

    /// Submit the payment step and advance to review.
    pub fn submit_payment(&mut self, info: PaymentInfo) -> Result<WizardStep, CommerceError> {
        if self.step != WizardStep::Payment {
            return Err(self.invalid_transition("submit payment"));
        }
        if !info.is_complete() {
            return Err(CommerceError::StepIncomplete(info.missing_fields().join(", ")));
        }
        self.payment = info;
        self.step = WizardStep::Review;
        Ok(self.step)
    }

    /// Go back to the previous step. Refused at the shipping step.
    pub fn back(&mut self) -> Result<WizardStep, CommerceError> {
        match self.step.previous() {
            Some(prev) => {
                self.step = prev;
                Ok(prev)
            }
            None => Err(self.invalid_transition("back")),
        }
    }

    /// Hand off the accumulated buffers. Valid only at the review step.
    ///
    /// Not a state transition: the wizard stays at review until the host
    /// tears it down. The host decides what happens after completion.
    pub fn complete(&self) -> Result<CompletedOrder, CommerceError> {
        if self.step != WizardStep::Review {
            return Err(self.invalid_transition("complete"));
        }
        Ok(CompletedOrder {
            shipping: self.shipping.clone(),
            payment: self.payment.clone(),
        })
    }

    /// Whether a step has already been submitted.
    pub fn is_step_done(&self, step: WizardStep) -> bool {
        step.number() < self.step.number()
    }

    fn invalid_transition(&self, to: &str) -> CommerceError {
        CommerceError::InvalidTransition {
            from: self.step.as_str().to_string(),
            to: to.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shipping() -> ShippingInfo {
        ShippingInfo {
            full_name: "Jane Smith".to_string(),
            email: "jane@example.com".to_string(),
            address: "456 Oak Ave".to_string(),
            city: "Los Angeles".to_string(),
            postal_code: "90001".to_string(),
            country: "United States".to_string(),
        }
    }

    fn payment() -> PaymentInfo {
        PaymentInfo {
            card_number: "4242424242424242".to_string(),
            card_name: "Jane Smith".to_string(),
            expiry: "12/27".to_string(),
            cvv: "123".to_string(),
        }
    }

    #[test]
    fn test_wizard_starts_at_shipping() {
        let wizard = CheckoutWizard::new();
        assert_eq!(wizard.step, WizardStep::Shipping);
        assert!(!wizard.is_step_done(WizardStep::Shipping));
    }

    #[test]
    fn test_happy_path() {
        let mut wizard = CheckoutWizard::new();
        assert_eq!(wizard.submit_shipping(shipping()), Ok(WizardStep::Payment));
        assert_eq!(wizard.submit_payment(payment()), Ok(WizardStep::Review));

        let order = wizard.complete().unwrap();
        assert_eq!(order.shipping.city, "Los Angeles");
        assert_eq!(order.payment.card_last4(), "4242");
        // Completion is a hand-off, not a transition.
        assert_eq!(wizard.step, WizardStep::Review);
    }

    #[test]
    fn test_incomplete_shipping_refused() {
        let mut wizard = CheckoutWizard::new();
        let mut info = shipping();
        info.email.clear();

        let err = wizard.submit_shipping(info).unwrap_err();
        assert_eq!(err, CommerceError::StepIncomplete("email".to_string()));
        assert_eq!(wizard.step, WizardStep::Shipping);
    }

    #[test]
    fn test_incomplete_payment_refused() {
        let mut wizard = CheckoutWizard::new();
        wizard.submit_shipping(shipping()).unwrap();

        let err = wizard.submit_payment(PaymentInfo::default()).unwrap_err();
        assert!(matches!(err, CommerceError::StepIncomplete(_)));
        assert_eq!(wizard.step, WizardStep::Payment);
    }

    #[test]
    fn test_back_refused_at_shipping() {
        let mut wizard = CheckoutWizard::new();
        assert!(matches!(
            wizard.back(),
            Err(CommerceError::InvalidTransition { .. })
        ));
        assert_eq!(wizard.step, WizardStep::Shipping);
    }

    #[test]
    fn test_back_walks_to_previous_step() {
        let mut wizard = CheckoutWizard::new();
        wizard.submit_shipping(shipping()).unwrap();
        wizard.submit_payment(payment()).unwrap();

        assert_eq!(wizard.back(), Ok(WizardStep::Payment));
        assert_eq!(wizard.back(), Ok(WizardStep::Shipping));
        assert!(wizard.back().is_err());
    }

    #[test]
    fn test_complete_refused_before_review() {
        let wizard = CheckoutWizard::new();
        assert!(wizard.complete().is_err());

        let mut wizard = CheckoutWizard::new();
        wizard.submit_shipping(shipping()).unwrap();
        assert!(wizard.complete().is_err());
    }

    #[test]
    fn test_submit_out_of_order_refused() {
        let mut wizard = CheckoutWizard::new();
        assert!(wizard.submit_payment(payment()).is_err());

        wizard.submit_shipping(shipping()).unwrap();
        assert!(wizard.submit_shipping(shipping()).is_err());
    }

    #[test]
    fn test_buffers_survive_back() {
        let mut wizard = CheckoutWizard::new();
        wizard.submit_shipping(shipping()).unwrap();
        wizard.back().unwrap();
        // The buffer keeps the submitted values for re-editing.
        assert_eq!(wizard.shipping.city, "Los Angeles");
    }

    #[test]
    fn test_step_progress() {
        let mut wizard = CheckoutWizard::new();
        wizard.submit_shipping(shipping()).unwrap();
        assert!(wizard.is_step_done(WizardStep::Shipping));
        assert!(!wizard.is_step_done(WizardStep::Payment));
        assert_eq!(WizardStep::ALL.len(), 3);
    }
}
