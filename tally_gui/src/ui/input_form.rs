//! Input form
//!
//! One card per trip parameter:
//! - Trip name (optional)
//! - Distance (kilometers)
//! - People (passenger count)
//! - Mileage and fuel price side by side
//!
//! Clicking anywhere on a card focuses its text input and highlights the
//! card border. The Calculate button stays disabled until every numeric
//! field parses to a positive value.

use iced::widget::{button, column, row, text, text_input, Column};
use iced::{Element, Length, Padding};

use tally_core::units::{KmPerLiter, LitersPer100Km};

use crate::{App, InputField, Message};

/// Render the input form
pub fn view(app: &App) -> Column<'_, Message> {
    let trip_name_card = input_card(
        app,
        InputField::TripName,
        "Trip Name",
        "Weekend Getaway",
        &app.trip_name,
        "optional".to_string(),
        Message::TripNameChanged,
    );

    let distance_card = input_card(
        app,
        InputField::Distance,
        "Distance",
        "0",
        &app.distance_km,
        "kilometers".to_string(),
        Message::DistanceChanged,
    );

    let people_card = input_card(
        app,
        InputField::People,
        "People",
        "0",
        &app.passenger_count,
        "passengers".to_string(),
        Message::PeopleChanged,
    );

    let mileage_card = input_card(
        app,
        InputField::Mileage,
        "Mileage",
        "0.0",
        &app.mileage_km_per_l,
        mileage_hint(app),
        Message::MileageChanged,
    );

    let fuel_price_card = input_card(
        app,
        InputField::FuelPrice,
        "Fuel Price",
        "0.00",
        &app.fuel_price_per_l,
        format!("{}/liter", app.settings.currency_symbol),
        Message::FuelPriceChanged,
    );

    let valid = app.form_is_valid();
    let calculate_label = text("Calculate Trip Cost").size(14);
    let calculate_btn = button(calculate_label)
        .padding(Padding::from([12, 16]))
        .width(Length::Fill)
        .style(if valid { button::primary } else { button::secondary });
    let calculate_btn = if valid {
        calculate_btn.on_press(Message::Calculate)
    } else {
        calculate_btn
    };

    column![
        trip_name_card,
        distance_card,
        people_card,
        row![mileage_card, fuel_price_card].spacing(12),
        calculate_btn,
    ]
    .spacing(12)
}

/// Mileage unit hint, extended with the L/100km equivalent once the field
/// holds a usable value.
fn mileage_hint(app: &App) -> String {
    match app.mileage_km_per_l.trim().parse::<f64>() {
        Ok(kmpl) if kmpl > 0.0 => {
            let consumption: LitersPer100Km = KmPerLiter(kmpl).into();
            format!("km/L ({:.1} L/100km)", consumption.value())
        }
        _ => "km/L".to_string(),
    }
}

/// A clickable input card: label, text input, unit hint. The whole card is
/// a button so clicking the label or hint focuses the input too.
fn input_card<'a>(
    app: &App,
    field: InputField,
    label: &'a str,
    placeholder: &'a str,
    value: &'a str,
    hint: String,
    on_change: impl Fn(String) -> Message + 'a,
) -> Element<'a, Message> {
    let focused = app.focused_field == Some(field);

    let content = column![
        text(label).size(11),
        text_input(placeholder, value)
            .on_input(on_change)
            .id(field.id())
            .size(20)
            .padding(Padding::from([6, 0])),
        text(hint).size(10).color([0.5, 0.5, 0.5]),
    ]
    .spacing(4);

    button(content)
        .on_press(Message::FocusField(field))
        .padding(12)
        .width(Length::Fill)
        .style(move |theme: &iced::Theme, _status| card_style(theme, focused))
        .into()
}

/// Card styling: subtle bordered box, accent ring when its input is focused
fn card_style(theme: &iced::Theme, focused: bool) -> button::Style {
    let palette = theme.extended_palette();

    button::Style {
        background: Some(palette.background.weak.color.into()),
        border: iced::Border {
            color: if focused {
                palette.primary.strong.color
            } else {
                palette.background.strong.color
            },
            width: if focused { 2.0 } else { 1.0 },
            radius: 8.0.into(),
        },
        text_color: palette.background.base.text,
        shadow: iced::Shadow::default(),
        snap: false,
    }
}
