//! Policy data structures and premium computation

mod contract;
mod data;

pub use contract::Policy;
pub use data::{
    AutoInput, DataRecord, LifeInput, PolicyType, AGE_KEY, DEFAULT_AGE, REFERENCE_YEAR,
    VEHICLE_YEAR_KEY,
};

/// Anything that can produce a premium on demand
///
/// Implemented by [`Policy`] and by discount wrappers, so wrappers can be
/// nested around either.
pub trait PremiumSource {
    /// Calculate the premium
    fn calculate(&self) -> f64;
}

impl<T: PremiumSource + ?Sized> PremiumSource for &T {
    fn calculate(&self) -> f64 {
        (**self).calculate()
    }
}

impl<T: PremiumSource + ?Sized> PremiumSource for Box<T> {
    fn calculate(&self) -> f64 {
        (**self).calculate()
    }
}
