//! Modal dialog component
//!
//! Provides the manual-copy fallback: when no share channel can deliver the
//! text automatically, the breakdown is shown in an editor widget the user
//! can select from by hand.

use iced::widget::{button, column, container, row, text, text_editor, Space};
use iced::{Alignment, Element, Length, Padding};

use crate::{App, Message};

/// Types of modal dialogs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalType {
    /// Share text displayed for manual selection and copying
    ManualCopy,
}

/// Render a modal backdrop (semi-transparent overlay that catches clicks)
pub fn view_backdrop() -> Element<'static, Message> {
    button(Space::new())
        .on_press(Message::ModalClose)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(|_, _| {
            iced::widget::button::Style::default()
                .with_background(iced::Color::from_rgba(0.0, 0.0, 0.0, 0.5))
        })
        .into()
}

/// Render the active modal dialog
pub fn view_modal(app: &App) -> Element<'_, Message> {
    match app.modal {
        Some(ModalType::ManualCopy) => view_manual_copy_modal(app),
        None => Space::new().into(),
    }
}

/// Render the manual-copy dialog with the share text in a selectable editor
fn view_manual_copy_modal(app: &App) -> Element<'_, Message> {
    let title = text("Copy Breakdown").size(18);

    let description = text("Select the text below and copy it manually:").size(12);

    let editor = text_editor(&app.share_content)
        .on_action(Message::ShareEditorAction)
        .height(Length::Fixed(180.0));

    let buttons = row![
        button(text("Copy").size(11))
            .on_press(Message::CopyShareText)
            .padding(Padding::from([6, 16]))
            .style(button::primary),
        Space::new().width(8),
        button(text("Close").size(11))
            .on_press(Message::ModalClose)
            .padding(Padding::from([6, 16]))
            .style(button::secondary),
    ]
    .align_y(Alignment::Center);

    let content = column![
        title,
        Space::new().height(12),
        description,
        Space::new().height(12),
        editor,
        Space::new().height(20),
        container(buttons)
            .align_x(iced::alignment::Horizontal::Right)
            .width(Length::Fill),
    ]
    .width(Length::Fixed(360.0));

    let modal_box = container(content)
        .padding(20)
        .style(container::bordered_box);

    // Center the modal in the screen
    container(modal_box)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(iced::alignment::Horizontal::Center)
        .align_y(iced::alignment::Vertical::Center)
        .into()
}
