//! Status Bar (Bottom)
//!
//! Displays:
//! - App version
//! - Transient status messages ("Trip breakdown copied to clipboard",
//!   validation reasons)

use iced::widget::{row, text, Space};
use iced::{Element, Length, Padding};

use crate::Message;

/// Render the status bar
pub fn view_status_bar(status: &str) -> Element<'_, Message> {
    row![
        text(format!("Trip Tally v{}", env!("CARGO_PKG_VERSION")))
            .size(10)
            .color([0.5, 0.5, 0.5]),
        Space::new().width(Length::Fill),
        text(status).size(10),
    ]
    .padding(Padding::from([4, 0]))
    .into()
}
