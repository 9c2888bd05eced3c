//! Rate formulas and the factory that selects them
//!
//! A rate formula turns a client's [`DataRecord`] into a premium. Formulas
//! carry no state, so the factory simply builds a fresh one per request.

mod auto;
mod life;

pub use auto::{AutoFormula, AUTO_BASE_RATE, AUTO_SURCHARGE_PER_YEAR};
pub use life::{LifeFormula, LIFE_BASE_RATE, LIFE_SURCHARGE_PER_YEAR};

use crate::error::Result;
use crate::policy::{DataRecord, PolicyType};
use log::{debug, warn};
use std::fmt;

/// Pricing strategy for one product line
///
/// Implementations must be pure: the same record always yields the same
/// premium. Out-of-range inputs are priced as-is.
pub trait RateFormula: fmt::Debug + Send + Sync {
    /// Product line this formula prices
    fn policy_type(&self) -> PolicyType;

    /// Calculate the premium for a client record
    fn calculate(&self, data: &DataRecord) -> f64;
}

/// Builds rate formulas by product line
pub struct FormulaFactory;

impl FormulaFactory {
    /// Create the formula for a known policy type
    pub fn create(policy_type: PolicyType) -> Box<dyn RateFormula> {
        debug!("Creating rate formula for '{}'", policy_type);
        match policy_type {
            PolicyType::Auto => Box::new(AutoFormula),
            PolicyType::Life => Box::new(LifeFormula),
        }
    }

    /// Create the formula for a caller-supplied label ("auto" or "vida")
    pub fn create_from_label(label: &str) -> Result<Box<dyn RateFormula>> {
        let policy_type = label
            .parse::<PolicyType>()
            .inspect_err(|_| warn!("Rejected policy type label '{}'", label))?;
        Ok(Self::create(policy_type))
    }
}
