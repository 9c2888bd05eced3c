//! Quote requests and results
//!
//! A [`QuoteRequest`] is the JSON-friendly description of one quote: which
//! product, the client data, and how many new-client discounts to apply.

use crate::discount::discount_multiplier;
use crate::error::Result;
use crate::policy::{DataRecord, Policy, PolicyType, PremiumSource};
use log::info;
use serde::{Deserialize, Serialize};

/// Input for a single quote
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteRequest {
    /// Product label ("auto" or "vida")
    pub policy_type: String,

    /// Client attributes; missing keys fall back to formula defaults
    #[serde(default)]
    pub data: DataRecord,

    /// Number of new-client discount layers (default: 0)
    #[serde(default)]
    pub discount_layers: u32,
}

impl QuoteRequest {
    pub fn new(policy_type: impl Into<String>, data: DataRecord) -> Self {
        Self {
            policy_type: policy_type.into(),
            data,
            discount_layers: 0,
        }
    }

    pub fn with_discounts(mut self, layers: u32) -> Self {
        self.discount_layers = layers;
        self
    }

    /// Price the request
    ///
    /// Fails only when the product label is not recognized. Discount layers
    /// are applied as a single multiplier, so any layer count is safe.
    pub fn price(&self) -> Result<Quote> {
        let policy = Policy::from_label(&self.policy_type, self.data.clone())?;
        let base_premium = policy.calculate();
        let policy_type = policy.policy_type();
        let premium = base_premium * discount_multiplier(self.discount_layers);

        info!(
            "Quoted '{}': base {:.2}, {} discount layer(s), premium {:.2}",
            policy_type, base_premium, self.discount_layers, premium
        );

        Ok(Quote {
            policy_type,
            base_premium,
            discount_layers: self.discount_layers,
            premium,
        })
    }
}

/// Priced quote
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub policy_type: PolicyType,
    /// Premium before discounts
    pub base_premium: f64,
    pub discount_layers: u32,
    /// Premium after all discount layers
    pub premium: f64,
}

impl Quote {
    /// Whether both premiums are finite numbers.
    ///
    /// Unbounded inputs (e.g. an age of 1e308) can overflow to infinity,
    /// which JSON cannot represent.
    pub fn is_finite(&self) -> bool {
        self.base_premium.is_finite() && self.premium.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::QuoteError;
    use approx::assert_relative_eq;

    #[test]
    fn test_price_with_discount() {
        let request = QuoteRequest::new("auto", DataRecord::new().with("anio_auto", 2020.0))
            .with_discounts(1);
        let quote = request.price().unwrap();

        assert_eq!(quote.policy_type, PolicyType::Auto);
        assert_relative_eq!(quote.base_premium, 12_500.0);
        assert_relative_eq!(quote.premium, 11_250.0);
    }

    #[test]
    fn test_request_defaults_from_json() {
        let request: QuoteRequest = serde_json::from_str(r#"{"policy_type": "vida"}"#).unwrap();
        assert!(request.data.is_empty());
        assert_eq!(request.discount_layers, 0);

        let quote = request.price().unwrap();
        assert_relative_eq!(quote.premium, 29_000.0);
    }

    #[test]
    fn test_many_discount_layers() {
        let request: QuoteRequest = serde_json::from_str(
            r#"{"policy_type": "vida", "data": {"edad": 40}, "discount_layers": 1000000}"#,
        )
        .unwrap();
        let quote = request.price().unwrap();

        assert_relative_eq!(quote.base_premium, 32_000.0);
        assert_eq!(quote.discount_layers, 1_000_000);
        assert_eq!(quote.premium, 0.0);

        let quote = request.with_discounts(u32::MAX).price().unwrap();
        assert_eq!(quote.premium, 0.0);
    }

    #[test]
    fn test_overflowing_data_gives_non_finite_quote() {
        let quote = QuoteRequest::new("vida", DataRecord::new().with("edad", 1e308))
            .price()
            .unwrap();
        assert!(quote.premium.is_infinite());
        assert!(!quote.is_finite());

        let quote = QuoteRequest::new("auto", DataRecord::new()).price().unwrap();
        assert!(quote.is_finite());
    }

    #[test]
    fn test_unknown_type_is_rejected() {
        let err = QuoteRequest::new("moto", DataRecord::new()).price().unwrap_err();
        assert_eq!(err, QuoteError::UnrecognizedPolicyType("moto".to_string()));
    }

    #[test]
    fn test_quote_serializes_label() {
        let quote = QuoteRequest::new("vida", DataRecord::new().with("edad", 40.0))
            .price()
            .unwrap();
        let json = serde_json::to_value(quote).unwrap();
        assert_eq!(json["policy_type"], "vida");
        assert_eq!(json["premium"], 32_000.0);
    }
}
