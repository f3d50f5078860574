//! Header component
//!
//! App title on the left (clicking it starts a fresh calculation, matching
//! the reset-on-logo behavior users expect from the app), theme toggle on
//! the right.

use iced::widget::{button, row, text, Space};
use iced::{Alignment, Element, Length, Padding};

use crate::Message;

/// Render the application header
pub fn view_header(dark_mode: bool) -> Element<'static, Message> {
    let title = button(text("Trip Tally.").size(28))
        .on_press(Message::Reset)
        .padding(0)
        .style(button::text);

    let theme_label = if dark_mode { "Light Mode" } else { "Dark Mode" };
    let theme_button = button(text(theme_label).size(11))
        .on_press(Message::ToggleDarkMode)
        .padding(Padding::from([4, 8]))
        .style(button::secondary);

    row![
        title,
        Space::new().width(Length::Fill),
        theme_button,
    ]
    .align_y(Alignment::Center)
    .into()
}
