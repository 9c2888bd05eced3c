//! A policy: one rate formula applied to one client record

use super::{DataRecord, PolicyType, PremiumSource};
use crate::error::Result;
use crate::formulas::{FormulaFactory, RateFormula};
use log::debug;

/// A quoted policy
///
/// The formula and data are fixed at construction; every call to
/// [`PremiumSource::calculate`] returns the same premium.
#[derive(Debug)]
pub struct Policy {
    formula: Box<dyn RateFormula>,
    data: DataRecord,
}

impl Policy {
    /// Create a policy from a formula and the client's data
    pub fn new(formula: Box<dyn RateFormula>, data: DataRecord) -> Self {
        Self { formula, data }
    }

    /// Create a policy for a product label, resolving the formula through the factory
    pub fn from_label(label: &str, data: DataRecord) -> Result<Self> {
        Ok(Self::new(FormulaFactory::create_from_label(label)?, data))
    }

    /// Create a policy for a known product line
    pub fn of_type(policy_type: PolicyType, data: DataRecord) -> Self {
        Self::new(FormulaFactory::create(policy_type), data)
    }

    pub fn formula(&self) -> &dyn RateFormula {
        self.formula.as_ref()
    }

    pub fn data(&self) -> &DataRecord {
        &self.data
    }

    pub fn policy_type(&self) -> PolicyType {
        self.formula.policy_type()
    }
}

impl PremiumSource for Policy {
    fn calculate(&self) -> f64 {
        let premium = self.formula.calculate(&self.data);
        debug!("Policy '{}' premium: {:.2}", self.policy_type(), premium);
        premium
    }
}
