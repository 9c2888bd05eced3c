//! Auto premium: base rate plus a surcharge per year of vehicle antiquity

use super::RateFormula;
use crate::policy::{AutoInput, DataRecord, PolicyType, REFERENCE_YEAR, VEHICLE_YEAR_KEY};

/// Flat premium before antiquity surcharge
pub const AUTO_BASE_RATE: f64 = 10_000.0;

/// Surcharge per year between the vehicle year and the reference year
pub const AUTO_SURCHARGE_PER_YEAR: f64 = 500.0;

/// Rate formula for vehicle coverage
///
/// `premium = 10000 + (2025 - vehicle_year) * 500`
///
/// Vehicle years after the reference year give a negative surcharge; they
/// are priced as-is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AutoFormula;

impl AutoFormula {
    /// Premium for a given vehicle year
    pub fn premium_for_year(vehicle_year: f64) -> f64 {
        let antiquity = REFERENCE_YEAR as f64 - vehicle_year;
        AUTO_BASE_RATE + antiquity * AUTO_SURCHARGE_PER_YEAR
    }

    /// Premium for a typed input
    ///
    /// Typed years are whole numbers. A record with a fractional year prices
    /// differently here than through [`RateFormula::calculate`], because
    /// [`AutoInput::from_record`] truncates.
    pub fn premium_for(&self, input: &AutoInput) -> f64 {
        Self::premium_for_year(input.effective_vehicle_year() as f64)
    }
}

impl RateFormula for AutoFormula {
    fn policy_type(&self) -> PolicyType {
        PolicyType::Auto
    }

    fn calculate(&self, data: &DataRecord) -> f64 {
        let vehicle_year = data.get_or(VEHICLE_YEAR_KEY, REFERENCE_YEAR as f64);
        Self::premium_for_year(vehicle_year)
    }
}
