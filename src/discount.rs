//! New-client discount
//!
//! A discount wraps any [`PremiumSource`] and scales its premium. Wrappers
//! nest, so N layers apply the factor N times.

use crate::policy::PremiumSource;
use log::debug;

/// Multiplier applied by one discount layer (10% off)
pub const NEW_CLIENT_DISCOUNT_FACTOR: f64 = 0.9;

/// 10% discount for new clients, applied on top of the wrapped premium
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewClientDiscount<P> {
    inner: P,
}

impl<P: PremiumSource> NewClientDiscount<P> {
    pub fn new(inner: P) -> Self {
        Self { inner }
    }

    /// The wrapped premium source
    pub fn inner(&self) -> &P {
        &self.inner
    }

    pub fn into_inner(self) -> P {
        self.inner
    }
}

impl<P: PremiumSource> PremiumSource for NewClientDiscount<P> {
    fn calculate(&self) -> f64 {
        let base = self.inner.calculate();
        let discounted = base * NEW_CLIENT_DISCOUNT_FACTOR;
        debug!("New-client discount: {:.2} -> {:.2}", base, discounted);
        discounted
    }
}

/// Combined multiplier of `layers` discounts, `0.9^layers`
///
/// Equivalent to nesting `layers` wrappers, without building or recursing
/// through the chain.
pub fn discount_multiplier(layers: u32) -> f64 {
    NEW_CLIENT_DISCOUNT_FACTOR.powf(layers as f64)
}

/// Wrap `inner` in `layers` nested discounts
///
/// Zero layers returns the source unchanged (boxed). Calculation recurses
/// once per layer, so keep deep stacks to [`discount_multiplier`].
pub fn stack_discounts<'a, P>(inner: P, layers: u32) -> Box<dyn PremiumSource + 'a>
where
    P: PremiumSource + 'a,
{
    let mut source: Box<dyn PremiumSource + 'a> = Box::new(inner);
    for _ in 0..layers {
        source = Box::new(NewClientDiscount::new(source));
    }
    source
}
