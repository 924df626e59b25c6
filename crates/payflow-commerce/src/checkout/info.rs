//! Shipping and payment field buffers.

use serde::{Deserialize, Serialize};

/// Shipping details collected in the first wizard step.
///
/// All six fields are required; completeness means non-empty. No format
/// validation is applied beyond that.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ShippingInfo {
    pub full_name: String,
    pub email: String,
    pub address: String,
    pub city: String,
    pub postal_code: String,
    pub country: String,
}

impl ShippingInfo {
    /// Check if every required field is populated.
    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// Names of the required fields still empty.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.full_name.is_empty() {
            missing.push("full name");
        }
        if self.email.is_empty() {
            missing.push("email");
        }
        if self.address.is_empty() {
            missing.push("address");
        }
        if self.city.is_empty() {
            missing.push("city");
        }
        if self.postal_code.is_empty() {
            missing.push("postal code");
        }
        if self.country.is_empty() {
            missing.push("country");
        }
        missing
    }

    /// Format as a single line for the review panel.
    pub fn one_line(&self) -> String {
        format!(
            "{}, {}, {} {}, {}",
            self.address, self.city, self.postal_code, self.country, self.email
        )
    }
}

/// Payment details collected in the second wizard step.
///
/// Free text; no Luhn check. Only the last four card digits are ever
/// rendered back to the user.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PaymentInfo {
    pub card_number: String,
    pub card_name: String,
    pub expiry: String,
    pub cvv: String,
}

impl PaymentInfo {
    /// Check if every required field is populated.
    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// Names of the required fields still empty.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.card_number.is_empty() {
            missing.push("card number");
        }
        if self.card_name.is_empty() {
            missing.push("cardholder name");
        }
        if self.expiry.is_empty() {
            missing.push("expiry");
        }
        if self.cvv.is_empty() {
            missing.push("cvv");
        }
        missing
    }

    /// The last four digits of the card number.
    ///
    /// Non-digit characters (spaces, dashes) are ignored; shorter inputs
    /// return whatever digits there are.
    pub fn card_last4(&self) -> String {
        let digits: Vec<char> = self.card_number.chars().filter(|c| c.is_ascii_digit()).collect();
        let start = digits.len().saturating_sub(4);
        digits[start..].iter().collect()
    }

    /// Masked card display for the review panel (e.g., "**** **** **** 4242").
    pub fn masked_card(&self) -> String {
        format!("**** **** **** {}", self.card_last4())
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

    #[test]
    fn test_shipping_completeness() {
        assert!(shipping().is_complete());
        assert!(!ShippingInfo::default().is_complete());

        let mut partial = shipping();
        partial.city.clear();
        assert_eq!(partial.missing_fields(), vec!["city"]);
    }

    #[test]
    fn test_shipping_one_line() {
        let line = shipping().one_line();
        assert!(line.contains("Los Angeles"));
        assert!(line.contains("90001"));
    }

    #[test]
    fn test_payment_completeness() {
        let payment = PaymentInfo {
            card_number: "4242 4242 4242 4242".to_string(),
            card_name: "Jane Smith".to_string(),
            expiry: "12/27".to_string(),
            cvv: "123".to_string(),
        };
        assert!(payment.is_complete());
        assert_eq!(
            PaymentInfo::default().missing_fields(),
            vec!["card number", "cardholder name", "expiry", "cvv"]
        );
    }

    #[test]
    fn test_card_last4_ignores_separators() {
        let payment = PaymentInfo {
            card_number: "4242-4242-4242-4242".to_string(),
            ..Default::default()
        };
        assert_eq!(payment.card_last4(), "4242");
        assert_eq!(payment.masked_card(), "**** **** **** 4242");
    }

    #[test]
    fn test_card_last4_short_input() {
        let payment = PaymentInfo {
            card_number: "42".to_string(),
            ..Default::default()
        };
        assert_eq!(payment.card_last4(), "42");

        assert_eq!(PaymentInfo::default().card_last4(), "");
    }
}
