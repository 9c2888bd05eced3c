//! Premium Quote - premium pricing for auto and life policies
//!
//! This library provides:
//! - Rate formulas per product line, selected through a factory
//! - Policies that apply a formula to a client data record
//! - Stackable new-client discounts
//! - JSON-friendly quote requests

pub mod error;
pub mod policy;
pub mod formulas;
pub mod discount;
pub mod request;

// Re-export commonly used types
pub use error::QuoteError;
pub use policy::{Policy, PolicyType, PremiumSource, DataRecord, AutoInput, LifeInput};
pub use formulas::{RateFormula, FormulaFactory, AutoFormula, LifeFormula};
pub use discount::{NewClientDiscount, NEW_CLIENT_DISCOUNT_FACTOR, discount_multiplier, stack_discounts};
pub use request::{QuoteRequest, Quote};
