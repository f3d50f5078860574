//! Results panel
//!
//! Replaces the input form after a successful calculation:
//! - Trip-name heading
//! - Primary per-person figure with accent border
//! - Secondary fuel/total cards
//! - Trip facts line (distance, people)
//! - Share, Show Text, and New Calculation actions

use iced::widget::{button, column, container, row, text, Column, Space};
use iced::{Alignment, Element, Length, Padding};

use tally_core::calculations::fare::{FareResult, TripInput};
use tally_core::settings::DisplaySettings;
use tally_core::share::{format_liters, format_money};

use crate::Message;

/// Render the calculated breakdown
pub fn view<'a>(
    input: &'a TripInput,
    result: &'a FareResult,
    settings: &'a DisplaySettings,
) -> Column<'a, Message> {
    let heading = column![
        text(format!("{} Breakdown", result.trip_name)).size(18),
        text("Cost analysis for your journey").size(11).color([0.5, 0.5, 0.5]),
    ]
    .spacing(4);

    let per_person_card = container(
        column![
            text("Per Person").size(11),
            text(format_money(result.per_person(), settings)).size(32),
        ]
        .spacing(4),
    )
    .padding(16)
    .width(Length::Fill)
    .style(per_person_style);

    let secondary_cards = row![
        stat_card("Fuel Needed", format_liters(result.fuel_needed())),
        stat_card("Total Cost", format_money(result.total(), settings)),
    ]
    .spacing(12);

    let trip_facts = text(format!(
        "{} km shared by {}",
        input.distance_km, input.passenger_count
    ))
    .size(11)
    .color([0.5, 0.5, 0.5]);

    let actions = row![
        button(text("Share").size(12))
            .on_press(Message::ShareResult)
            .padding(Padding::from([8, 16]))
            .style(button::primary),
        button(text("Show Text").size(12))
            .on_press(Message::ShowShareText)
            .padding(Padding::from([8, 16]))
            .style(button::secondary),
        Space::new().width(Length::Fill),
        button(text("New Calculation").size(12))
            .on_press(Message::Reset)
            .padding(Padding::from([8, 16]))
            .style(button::secondary),
    ]
    .spacing(8)
    .align_y(Alignment::Center);

    column![
        heading,
        Space::new().height(12),
        per_person_card,
        Space::new().height(8),
        secondary_cards,
        Space::new().height(8),
        trip_facts,
        Space::new().height(16),
        actions,
    ]
}

/// Small bordered card for a secondary figure
fn stat_card(label: &str, value_text: String) -> Element<'_, Message> {
    container(
        column![
            text(label).size(10).color([0.5, 0.5, 0.5]),
            text(value_text).size(18),
        ]
        .spacing(4),
    )
    .padding(12)
    .width(Length::Fill)
    .style(container::bordered_box)
    .into()
}

/// Accent-ringed box for the headline per-person figure
fn per_person_style(theme: &iced::Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        text_color: None,
        background: Some(palette.background.weak.color.into()),
        border: iced::Border {
            color: palette.primary.strong.color,
            width: 2.0,
            radius: 12.0.into(),
        },
        shadow: iced::Shadow::default(),
        snap: false,
    }
}
