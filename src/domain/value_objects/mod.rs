//! Value Objects for the storefront

use serde::{Deserialize, Serialize};
use std::fmt;

/// Whole-rupee amount. Catalog prices carry no paise, so a plain integer is enough.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rupees(u64);

impl Rupees {
    pub const fn new(amount: u64) -> Self { Self(amount) }
    pub const fn zero() -> Self { Self(0) }
    pub fn value(&self) -> u64 { self.0 }
    pub fn add(&self, other: Rupees) -> Rupees { Rupees(self.0 + other.0) }
    pub fn times(&self, qty: u32) -> Rupees { Rupees(self.0 * u64::from(qty)) }
}

impl fmt::Display for Rupees {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "₹{}", self.0) }
}

/// Cart-line quantity, 1 or above. Lines leave the cart through removal,
/// never by decrementing to zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Quantity(u32);

impl Quantity {
    pub const ONE: Quantity = Quantity(1);

    pub fn new(value: u32) -> Self { Self(value.max(1)) }
    pub fn value(&self) -> u32 { self.0 }
    pub fn increment(&self) -> Self { Self(self.0.saturating_add(1)) }

    /// Adjusts by `delta`, flooring at 1.
    pub fn bump(&self, delta: i32) -> Self {
        let next = i64::from(self.0) + i64::from(delta);
        Self(next.clamp(1, i64::from(u32::MAX)) as u32)
    }
}

impl Default for Quantity { fn default() -> Self { Self::ONE } }

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}", self.0) }
}
