//! # Fare Calculation
//!
//! Splits the fuel cost of a trip evenly across its passengers.
//!
//! The chain is three steps: fuel needed from distance and vehicle mileage,
//! total cost from fuel and pump price, per-head share from total cost and
//! passenger count. Intermediate values keep full f64 precision; each output
//! is rounded to two decimals once, at the end.
//!
//! ## Example
//!
//! ```rust
//! use tally_core::calculations::fare::{calculate, TripInput};
//!
//! let input = TripInput {
//!     trip_name: None,
//!     distance_km: 300.0,
//!     passenger_count: 4,
//!     mileage_km_per_l: 15.0,
//!     fuel_price_per_l: 100.0,
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert_eq!(result.fuel_needed_l, 20.0);
//! assert_eq!(result.total_cost, 2000.0);
//! assert_eq!(result.cost_per_person, 500.0);
//! assert_eq!(result.trip_name, "Trip");
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{TallyError, TallyResult};
use crate::units::{Liters, Money};

/// Label substituted when the user leaves the trip name blank
pub const DEFAULT_TRIP_NAME: &str = "Trip";

/// Input parameters for a trip fare split.
///
/// ## JSON Example
///
/// ```json
/// {
///   "trip_name": "Goa Trip",
///   "distance_km": 300.0,
///   "passenger_count": 4,
///   "mileage_km_per_l": 15.0,
///   "fuel_price_per_l": 100.0
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripInput {
    /// Optional label for this trip (e.g., "Weekend Getaway")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trip_name: Option<String>,

    /// Round-trip distance in kilometers
    pub distance_km: f64,

    /// Number of people splitting the cost
    pub passenger_count: u32,

    /// Vehicle fuel economy in kilometers per liter
    pub mileage_km_per_l: f64,

    /// Fuel pump price per liter
    pub fuel_price_per_l: f64,
}

impl TripInput {
    /// Validate input parameters.
    ///
    /// Every numeric field must be finite and strictly positive. Zero is
    /// rejected the same as a negative value: a zero-distance trip needs no
    /// fuel and a zero-mileage vehicle never arrives.
    pub fn validate(&self) -> TallyResult<()> {
        if !self.distance_km.is_finite() || self.distance_km <= 0.0 {
            return Err(TallyError::invalid_input(
                "distance_km",
                self.distance_km.to_string(),
                "Distance must be a positive number",
            ));
        }
        if self.passenger_count == 0 {
            return Err(TallyError::invalid_input(
                "passenger_count",
                self.passenger_count.to_string(),
                "At least one passenger is required",
            ));
        }
        if !self.mileage_km_per_l.is_finite() || self.mileage_km_per_l <= 0.0 {
            return Err(TallyError::invalid_input(
                "mileage_km_per_l",
                self.mileage_km_per_l.to_string(),
                "Mileage must be a positive number",
            ));
        }
        if !self.fuel_price_per_l.is_finite() || self.fuel_price_per_l <= 0.0 {
            return Err(TallyError::invalid_input(
                "fuel_price_per_l",
                self.fuel_price_per_l.to_string(),
                "Fuel price must be a positive number",
            ));
        }
        Ok(())
    }

    /// Trip label for display: the user's name, or "Trip" when blank.
    pub fn display_name(&self) -> &str {
        self.trip_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(DEFAULT_TRIP_NAME)
    }
}

/// Results from a fare calculation. All figures are rounded to two decimals.
///
/// ## JSON Example
///
/// ```json
/// {
///   "fuel_needed_l": 20.0,
///   "total_cost": 2000.0,
///   "cost_per_person": 500.0,
///   "trip_name": "Goa Trip"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FareResult {
    /// Fuel required for the trip in liters
    pub fuel_needed_l: f64,

    /// Total fuel cost
    pub total_cost: f64,

    /// Each passenger's share of the total cost
    pub cost_per_person: f64,

    /// Trip label carried over from the input (or the default)
    pub trip_name: String,
}

impl FareResult {
    /// Fuel required, as a typed quantity
    pub fn fuel_needed(&self) -> Liters {
        Liters(self.fuel_needed_l)
    }

    /// Total fuel cost, as a typed amount
    pub fn total(&self) -> Money {
        Money(self.total_cost)
    }

    /// Per-passenger share, as a typed amount
    pub fn per_person(&self) -> Money {
        Money(self.cost_per_person)
    }
}

/// Round to two decimal places (half away from zero, f64's `round`).
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Calculate the fare split for a trip.
///
/// Pure function: no side effects, identical inputs always produce identical
/// outputs. Inputs are re-validated here even though front-ends gate their
/// Calculate action on the same checks.
///
/// # Arguments
///
/// * `input` - Trip parameters
///
/// # Returns
///
/// * `Ok(FareResult)` - The cost breakdown
/// * `Err(TallyError)` - If any input is missing, non-finite, or non-positive
pub fn calculate(input: &TripInput) -> TallyResult<FareResult> {
    input.validate()?;

    let fuel_needed = input.distance_km / input.mileage_km_per_l;
    let total_cost = fuel_needed * input.fuel_price_per_l;
    let cost_per_person = total_cost / f64::from(input.passenger_count);

    // Rounding only at the end of the chain. Rounding between steps would
    // compound into a different per-person figure.
    Ok(FareResult {
        fuel_needed_l: round2(fuel_needed),
        total_cost: round2(total_cost),
        cost_per_person: round2(cost_per_person),
        trip_name: input.display_name().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_trip() -> TripInput {
        TripInput {
            trip_name: Some("Goa Trip".to_string()),
            distance_km: 300.0,
            passenger_count: 4,
            mileage_km_per_l: 15.0,
            fuel_price_per_l: 100.0,
        }
    }

    #[test]
    fn test_worked_example() {
        let result = calculate(&test_trip()).unwrap();
        assert_eq!(result.fuel_needed_l, 20.0);
        assert_eq!(result.total_cost, 2000.0);
        assert_eq!(result.cost_per_person, 500.0);
        assert_eq!(result.trip_name, "Goa Trip");
    }

    #[test]
    fn test_rounding_only_at_output() {
        // 100 km at 3 km/L is 33.333... L. Rounding the liters before
        // multiplying by price would give 99.99 instead of 100.00.
        let input = TripInput {
            trip_name: None,
            distance_km: 100.0,
            passenger_count: 7,
            mileage_km_per_l: 3.0,
            fuel_price_per_l: 3.0,
        };
        let result = calculate(&input).unwrap();
        assert_eq!(result.fuel_needed_l, 33.33);
        assert_eq!(result.total_cost, 100.0);
        assert_eq!(result.cost_per_person, 14.29);
    }

    #[test]
    fn test_zero_is_invalid() {
        let mut input = test_trip();
        input.distance_km = 0.0;
        assert!(calculate(&input).is_err());

        let mut input = test_trip();
        input.passenger_count = 0;
        assert!(calculate(&input).is_err());

        let mut input = test_trip();
        input.mileage_km_per_l = 0.0;
        assert!(calculate(&input).is_err());

        let mut input = test_trip();
        input.fuel_price_per_l = 0.0;
        assert!(calculate(&input).is_err());
    }

    #[test]
    fn test_negative_is_invalid() {
        let mut input = test_trip();
        input.distance_km = -300.0;
        let err = calculate(&input).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
        assert_eq!(err.field(), "distance_km");
    }

    #[test]
    fn test_non_finite_is_invalid() {
        let mut input = test_trip();
        input.mileage_km_per_l = f64::NAN;
        assert!(calculate(&input).is_err());

        let mut input = test_trip();
        input.fuel_price_per_l = f64::INFINITY;
        assert!(calculate(&input).is_err());
    }

    #[test]
    fn test_trip_name_default() {
        let mut input = test_trip();
        input.trip_name = None;
        assert_eq!(calculate(&input).unwrap().trip_name, "Trip");

        // Blank entry counts as absent, like an untouched form field
        input.trip_name = Some("   ".to_string());
        assert_eq!(calculate(&input).unwrap().trip_name, "Trip");
    }

    #[test]
    fn test_idempotence() {
        let input = test_trip();
        let first = calculate(&input).unwrap();
        let second = calculate(&input).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_typed_accessors() {
        let result = calculate(&test_trip()).unwrap();
        assert_eq!(result.fuel_needed().value(), 20.0);
        assert_eq!(result.total().value(), 2000.0);
        assert_eq!(result.per_person().value(), 500.0);
    }

    #[test]
    fn test_serialization() {
        let input = test_trip();
        let json = serde_json::to_string_pretty(&input).unwrap();
        let roundtrip: TripInput = serde_json::from_str(&json).unwrap();
        assert_eq!(input.distance_km, roundtrip.distance_km);
        assert_eq!(input.passenger_count, roundtrip.passenger_count);

        // trip_name is optional in the JSON form
        let bare: TripInput = serde_json::from_str(
            r#"{"distance_km": 10.0, "passenger_count": 2, "mileage_km_per_l": 10.0, "fuel_price_per_l": 90.0}"#,
        )
        .unwrap();
        assert!(bare.trip_name.is_none());
    }
}
