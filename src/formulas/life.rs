//! Life premium: base rate plus a surcharge per year of age

use super::RateFormula;
use crate::policy::{DataRecord, LifeInput, PolicyType, AGE_KEY, DEFAULT_AGE};

pub const LIFE_BASE_RATE: f64 = 20_000.0;
pub const LIFE_SURCHARGE_PER_YEAR: f64 = 300.0;

/// Rate formula for life coverage: `premium = 20000 + age * 300`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LifeFormula;

impl LifeFormula {
    pub fn premium_for_age(age: f64) -> f64 {
        LIFE_BASE_RATE + age * LIFE_SURCHARGE_PER_YEAR
    }

    /// Premium for a typed input. Unlike `calculate`, fractional record ages
    /// are truncated on the way in through [`LifeInput::from_record`].
    pub fn premium_for(&self, input: &LifeInput) -> f64 {
        Self::premium_for_age(input.effective_age() as f64)
    }
}

impl RateFormula for LifeFormula {
    fn policy_type(&self) -> PolicyType {
        PolicyType::Life
    }

    fn calculate(&self, data: &DataRecord) -> f64 {
        Self::premium_for_age(data.get_or(AGE_KEY, DEFAULT_AGE as f64))
    }
}
