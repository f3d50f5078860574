//! # tally_core - Trip Cost Splitting Engine
//!
//! `tally_core` is the computational heart of Trip Tally, turning four trip
//! parameters (distance, passenger count, vehicle mileage, fuel price) into a
//! cost breakdown. All inputs and outputs are JSON-serializable, so the same
//! core drives the GUI, the CLI, and any future automation.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//!
//! ## Quick Start
//!
//! ```rust
//! use tally_core::calculations::fare::{calculate, TripInput};
//!
//! let input = TripInput {
//!     trip_name: Some("Goa Trip".to_string()),
//!     distance_km: 300.0,
//!     passenger_count: 4,
//!     mileage_km_per_l: 15.0,
//!     fuel_price_per_l: 100.0,
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert_eq!(result.cost_per_person, 500.0);
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Trip fare calculation (inputs, results, validation)
//! - [`share`] - Text export of a calculated breakdown
//! - [`settings`] - Display settings (currency symbol)
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod errors;
pub mod settings;
pub mod share;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::fare::{calculate, FareResult, TripInput};
pub use errors::{TallyError, TallyResult};
pub use settings::DisplaySettings;
