//! # Trip Tally CLI Application
//!
//! Terminal front-end for the trip cost splitter. Prompts for the trip
//! parameters, prints the breakdown report and share text, and finishes with
//! JSON for scripting.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use tally_core::calculations::fare::{calculate, TripInput};
use tally_core::settings::DisplaySettings;
use tally_core::share::{format_liters, format_money, share_text};
use tally_core::units::{Kilometers, KmPerLiter, LitersPer100Km, Miles};

fn prompt_line(prompt: &str) -> String {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return String::new();
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return String::new();
    }

    input.trim().to_string()
}

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    prompt_line(prompt).parse().unwrap_or(default)
}

fn prompt_u32(prompt: &str, default: u32) -> u32 {
    prompt_line(prompt).parse().unwrap_or(default)
}

fn main() -> ExitCode {
    println!("Trip Tally CLI - Trip Cost Splitter");
    println!("===================================");
    println!();

    let trip_name = prompt_line("Enter trip name (optional): ");
    let distance_km = prompt_f64("Enter trip distance (km) [300.0]: ", 300.0);
    let passenger_count = prompt_u32("Enter number of people [4]: ", 4);
    let mileage_km_per_l = prompt_f64("Enter vehicle mileage (km/L) [15.0]: ", 15.0);
    let fuel_price_per_l = prompt_f64("Enter fuel price (per liter) [100.0]: ", 100.0);

    let input = TripInput {
        trip_name: if trip_name.is_empty() { None } else { Some(trip_name) },
        distance_km,
        passenger_count,
        mileage_km_per_l,
        fuel_price_per_l,
    };
    let settings = DisplaySettings::default();

    println!();
    match calculate(&input) {
        Ok(result) => {
            let distance_mi: Miles = Kilometers(input.distance_km).into();
            let consumption: LitersPer100Km = KmPerLiter(input.mileage_km_per_l).into();

            println!("═══════════════════════════════════════");
            println!("  {} COST BREAKDOWN", result.trip_name.to_uppercase());
            println!("═══════════════════════════════════════");
            println!();
            println!("Input:");
            println!("  Distance: {:.1} km ({:.1} mi)", input.distance_km, distance_mi.value());
            println!("  People:   {}", input.passenger_count);
            println!(
                "  Mileage:  {:.1} km/L ({:.1} L/100km)",
                input.mileage_km_per_l,
                consumption.value()
            );
            println!(
                "  Fuel:     {}/L",
                format_money(tally_core::units::Money(input.fuel_price_per_l), &settings)
            );
            println!();
            println!("Breakdown:");
            println!("  Fuel Needed: {}", format_liters(result.fuel_needed()));
            println!("  Total Cost:  {}", format_money(result.total(), &settings));
            println!("  Per Person:  {}", format_money(result.per_person(), &settings));
            println!();
            println!("═══════════════════════════════════════");
            println!();
            println!("Share text:");
            println!("{}", share_text(&input, &result, &settings));

            println!();
            println!("JSON Output (for scripting):");
            if let Ok(json) = serde_json::to_string_pretty(&result) {
                println!("{}", json);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
            ExitCode::FAILURE
        }
    }
}
