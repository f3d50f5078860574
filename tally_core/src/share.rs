//! # Share Export
//!
//! Formats a calculated breakdown into the fixed share template. The text is
//! the externally visible contract of the app - whatever channel delivers it
//! (share sheet, clipboard, manual copy), the block reads the same:
//!
//! ```text
//! Goa Trip Cost Breakdown
//!
//! Per Person: ₹500.00
//! Fuel Needed: 20.00L
//! Total Cost: ₹2000.00
//! Distance: 300km
//! People: 4
//!
//! Calculated with Trip Tally
//! ```

use crate::calculations::fare::{FareResult, TripInput};
use crate::settings::DisplaySettings;
use crate::units::{Liters, Money};

/// Render the share text block for a calculated trip.
pub fn share_text(input: &TripInput, result: &FareResult, settings: &DisplaySettings) -> String {
    format!(
        "{name} Cost Breakdown\n\
         \n\
         Per Person: {per_person}\n\
         Fuel Needed: {fuel}\n\
         Total Cost: {total}\n\
         Distance: {distance}km\n\
         People: {people}\n\
         \n\
         Calculated with Trip Tally",
        name = result.trip_name,
        per_person = format_money(result.per_person(), settings),
        fuel = format_liters(result.fuel_needed()),
        total = format_money(result.total(), settings),
        distance = format_distance(input.distance_km),
        people = input.passenger_count,
    )
}

/// Title line for channels that carry one (e.g., an OS share sheet).
pub fn share_title(result: &FareResult) -> String {
    format!("{} - Trip Cost Breakdown", result.trip_name)
}

/// Format a money amount with the configured symbol, two decimals.
pub fn format_money(amount: Money, settings: &DisplaySettings) -> String {
    format!("{}{:.2}", settings.currency_symbol, amount.value())
}

/// Format a fuel volume, two decimals with unit suffix.
pub fn format_liters(volume: Liters) -> String {
    format!("{:.2}L", volume.value())
}

/// Format a distance the way the user typed it: whole kilometers render
/// without a decimal point.
fn format_distance(distance_km: f64) -> String {
    if distance_km.fract() == 0.0 {
        format!("{:.0}", distance_km)
    } else {
        format!("{}", distance_km)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::fare::calculate;

    fn goa_trip() -> TripInput {
        TripInput {
            trip_name: Some("Goa Trip".to_string()),
            distance_km: 300.0,
            passenger_count: 4,
            mileage_km_per_l: 15.0,
            fuel_price_per_l: 100.0,
        }
    }

    #[test]
    fn test_share_text_template() {
        let input = goa_trip();
        let result = calculate(&input).unwrap();
        let text = share_text(&input, &result, &DisplaySettings::default());

        assert_eq!(
            text,
            "Goa Trip Cost Breakdown\n\
             \n\
             Per Person: ₹500.00\n\
             Fuel Needed: 20.00L\n\
             Total Cost: ₹2000.00\n\
             Distance: 300km\n\
             People: 4\n\
             \n\
             Calculated with Trip Tally"
        );
    }

    #[test]
    fn test_share_text_uses_default_name() {
        let mut input = goa_trip();
        input.trip_name = None;
        let result = calculate(&input).unwrap();
        let text = share_text(&input, &result, &DisplaySettings::default());
        assert!(text.starts_with("Trip Cost Breakdown\n"));
    }

    #[test]
    fn test_share_title() {
        let result = calculate(&goa_trip()).unwrap();
        assert_eq!(share_title(&result), "Goa Trip - Trip Cost Breakdown");
    }

    #[test]
    fn test_fractional_distance_keeps_decimals() {
        let mut input = goa_trip();
        input.distance_km = 12.5;
        let result = calculate(&input).unwrap();
        let text = share_text(&input, &result, &DisplaySettings::default());
        assert!(text.contains("Distance: 12.5km"));
    }

    #[test]
    fn test_custom_currency_symbol() {
        let settings = DisplaySettings {
            currency_symbol: "$".to_string(),
        };
        let input = goa_trip();
        let result = calculate(&input).unwrap();
        let text = share_text(&input, &result, &settings);
        assert!(text.contains("Per Person: $500.00"));
    }
}
