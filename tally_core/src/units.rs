//! # Unit Types
//!
//! Type-safe wrappers for trip units. These provide compile-time safety
//! against unit confusion while remaining lightweight (just f64 wrappers).
//!
//! ## Design Philosophy
//!
//! We use simple newtype wrappers rather than a full units library because:
//! - Trip planning uses a small, fixed set of units
//! - We want JSON serialization to be clean (just numbers)
//! - Minimal runtime overhead
//!
//! ## Metric Units (Primary)
//!
//! Trip Tally uses metric units internally, matching how fuel is sold and
//! odometers read in the markets the app targets:
//! - Distance: kilometers (km), miles (mi) for display conversion
//! - Fuel volume: liters (L)
//! - Fuel economy: kilometers per liter (km/L), liters per 100 km (L/100km)
//! - Cost: currency amount (symbol-agnostic)
//!
//! ## Example
//!
//! ```rust
//! use tally_core::units::{Kilometers, KmPerLiter, LitersPer100Km, Miles};
//!
//! let distance = Kilometers(160.9344);
//! let miles: Miles = distance.into();
//! assert!((miles.0 - 100.0).abs() < 1e-9);
//!
//! let economy = KmPerLiter(20.0);
//! let european: LitersPer100Km = economy.into();
//! assert_eq!(european.0, 5.0);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// Kilometers per mile
const KM_PER_MILE: f64 = 1.609344;

// ============================================================================
// Distance Units
// ============================================================================

/// Distance in kilometers
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilometers(pub f64);

/// Distance in miles
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Miles(pub f64);

impl From<Miles> for Kilometers {
    fn from(mi: Miles) -> Self {
        Kilometers(mi.0 * KM_PER_MILE)
    }
}

impl From<Kilometers> for Miles {
    fn from(km: Kilometers) -> Self {
        Miles(km.0 / KM_PER_MILE)
    }
}

// ============================================================================
// Fuel Volume Units
// ============================================================================

/// Fuel volume in liters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Liters(pub f64);

// ============================================================================
// Fuel Economy Units
// ============================================================================

/// Fuel economy in kilometers per liter (higher is better)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KmPerLiter(pub f64);

/// Fuel consumption in liters per 100 kilometers (lower is better)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LitersPer100Km(pub f64);

// Reciprocal pair: L/100km = 100 / (km/L). Conversion of a zero economy
// would divide by zero; validation upstream rejects non-positive values.
impl From<KmPerLiter> for LitersPer100Km {
    fn from(kmpl: KmPerLiter) -> Self {
        LitersPer100Km(100.0 / kmpl.0)
    }
}

impl From<LitersPer100Km> for KmPerLiter {
    fn from(lp100: LitersPer100Km) -> Self {
        KmPerLiter(100.0 / lp100.0)
    }
}

// ============================================================================
// Cost Units
// ============================================================================

/// Currency amount. The symbol lives in [`crate::settings::DisplaySettings`];
/// the engine itself is currency-agnostic.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(pub f64);

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }

            /// Create from raw f64 value
            pub fn new(value: f64) -> Self {
                Self(value)
            }
        }
    };
}

impl_arithmetic!(Kilometers);
impl_arithmetic!(Miles);
impl_arithmetic!(Liters);
impl_arithmetic!(KmPerLiter);
impl_arithmetic!(LitersPer100Km);
impl_arithmetic!(Money);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_miles_to_kilometers() {
        let mi = Miles(100.0);
        let km: Kilometers = mi.into();
        assert!((km.0 - 160.9344).abs() < 1e-9);
    }

    #[test]
    fn test_economy_reciprocity() {
        let kmpl = KmPerLiter(12.5);
        let lp100: LitersPer100Km = kmpl.into();
        assert_eq!(lp100.0, 8.0);

        let back: KmPerLiter = lp100.into();
        assert!((back.0 - 12.5).abs() < 1e-9);
    }

    #[test]
    fn test_arithmetic() {
        let a = Kilometers(10.0);
        let b = Kilometers(5.0);
        assert_eq!((a + b).0, 15.0);
        assert_eq!((a - b).0, 5.0);
        assert_eq!((a * 2.0).0, 20.0);
        assert_eq!((a / 2.0).0, 5.0);
    }

    #[test]
    fn test_serialization() {
        let km = Kilometers(12.5);
        let json = serde_json::to_string(&km).unwrap();
        assert_eq!(json, "12.5");

        let roundtrip: Kilometers = serde_json::from_str(&json).unwrap();
        assert_eq!(km, roundtrip);
    }
}
