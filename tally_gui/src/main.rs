//! # Trip Tally GUI Application
//!
//! Single-window trip cost splitter. The window shows the input form until a
//! calculation succeeds, then swaps to the results breakdown with share and
//! reset actions - the same two-screen flow on every platform Iced targets.
//!
//! All state lives on [`App`] and is replaced wholesale on recompute or
//! reset; the calculation itself is `tally_core`'s pure function.

use iced::widget::{column, container, operation, scrollable, stack, text_editor, Id};
use iced::{Element, Length, Size, Task, Theme};

use tally_core::calculations::fare::{calculate, FareResult, TripInput};
use tally_core::errors::{TallyError, TallyResult};
use tally_core::settings::DisplaySettings;
use tally_core::share::{share_text, share_title};

mod share;
mod ui;

use share::ShareChannel;
use ui::modal::ModalType;

fn main() -> iced::Result {
    iced::application(App::new, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window_size(Size::new(420.0, 760.0))
        .run()
}

/// The five input cards on the form screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    TripName,
    Distance,
    People,
    Mileage,
    FuelPrice,
}

impl InputField {
    fn key(self) -> &'static str {
        match self {
            InputField::TripName => "trip_name",
            InputField::Distance => "distance_km",
            InputField::People => "passenger_count",
            InputField::Mileage => "mileage_km_per_l",
            InputField::FuelPrice => "fuel_price_per_l",
        }
    }

    /// Widget id for focus operations
    pub fn id(self) -> Id {
        Id::new(self.key())
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    TripNameChanged(String),
    DistanceChanged(String),
    PeopleChanged(String),
    MileageChanged(String),
    FuelPriceChanged(String),
    FocusField(InputField),
    Calculate,
    Reset,
    ToggleDarkMode,
    ShareResult,
    ShowShareText,
    CopyShareText,
    ShareEditorAction(text_editor::Action),
    ModalClose,
}

/// Application state. Raw field entry stays as strings so the user can type
/// freely; parsing happens when the Calculate gate is evaluated.
pub struct App {
    pub trip_name: String,
    pub distance_km: String,
    pub passenger_count: String,
    pub mileage_km_per_l: String,
    pub fuel_price_per_l: String,

    pub focused_field: Option<InputField>,
    pub dark_mode: bool,
    pub settings: DisplaySettings,

    /// Input/result pair from the last successful calculation
    pub calc_input: Option<TripInput>,
    pub result: Option<FareResult>,

    pub status: String,
    pub modal: Option<ModalType>,
    pub share_content: text_editor::Content,
}

impl Default for App {
    fn default() -> Self {
        App {
            trip_name: String::new(),
            distance_km: String::new(),
            passenger_count: String::new(),
            mileage_km_per_l: String::new(),
            fuel_price_per_l: String::new(),
            focused_field: None,
            dark_mode: true,
            settings: DisplaySettings::default(),
            calc_input: None,
            result: None,
            status: String::new(),
            modal: None,
            share_content: text_editor::Content::new(),
        }
    }
}

impl App {
    fn new() -> (Self, Task<Message>) {
        (App::default(), text_input::focus(InputField::TripName.id()))
    }

    fn title(&self) -> String {
        match &self.result {
            Some(result) => format!("Trip Tally - {}", result.trip_name),
            None => "Trip Tally".to_string(),
        }
    }

    fn theme(&self) -> Theme {
        if self.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Assemble a `TripInput` from the raw field strings.
    ///
    /// Empty fields report as missing, unparsable ones as invalid; range
    /// checks stay in `TripInput::validate`.
    pub fn parse_input(&self) -> TallyResult<TripInput> {
        Ok(TripInput {
            trip_name: if self.trip_name.trim().is_empty() {
                None
            } else {
                Some(self.trip_name.trim().to_string())
            },
            distance_km: parse_field_f64(InputField::Distance, &self.distance_km)?,
            passenger_count: parse_field_u32(InputField::People, &self.passenger_count)?,
            mileage_km_per_l: parse_field_f64(InputField::Mileage, &self.mileage_km_per_l)?,
            fuel_price_per_l: parse_field_f64(InputField::FuelPrice, &self.fuel_price_per_l)?,
        })
    }

    /// Gate for the Calculate button: everything parses and validates.
    pub fn form_is_valid(&self) -> bool {
        match self.parse_input() {
            Ok(input) => input.validate().is_ok(),
            Err(_) => false,
        }
    }

    fn current_share_text(&self) -> Option<String> {
        match (&self.calc_input, &self.result) {
            (Some(input), Some(result)) => Some(share_text(input, result, &self.settings)),
            _ => None,
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::TripNameChanged(value) => {
                self.trip_name = value;
                self.status.clear();
                Task::none()
            }
            Message::DistanceChanged(value) => {
                self.distance_km = value;
                self.status.clear();
                Task::none()
            }
            Message::PeopleChanged(value) => {
                self.passenger_count = value;
                self.status.clear();
                Task::none()
            }
            Message::MileageChanged(value) => {
                self.mileage_km_per_l = value;
                self.status.clear();
                Task::none()
            }
            Message::FuelPriceChanged(value) => {
                self.fuel_price_per_l = value;
                self.status.clear();
                Task::none()
            }
            Message::FocusField(field) => {
                self.focused_field = Some(field);
                text_input::focus(field.id())
            }
            Message::Calculate => {
                let outcome = self
                    .parse_input()
                    .and_then(|input| calculate(&input).map(|result| (input, result)));
                match outcome {
                    Ok((input, result)) => {
                        self.calc_input = Some(input);
                        self.result = Some(result);
                        self.focused_field = None;
                        self.status.clear();
                    }
                    Err(e) => self.status = e.to_string(),
                }
                Task::none()
            }
            Message::Reset => {
                // Wholesale replacement, keeping only the user's theme choice
                let dark_mode = self.dark_mode;
                *self = App::default();
                self.dark_mode = dark_mode;
                text_input::focus(InputField::TripName.id())
            }
            Message::ToggleDarkMode => {
                self.dark_mode = !self.dark_mode;
                Task::none()
            }
            Message::ShareResult => self.share_result(),
            Message::ShowShareText => {
                if let Some(text) = self.current_share_text() {
                    self.share_content = text_editor::Content::with_text(&text);
                    self.modal = Some(ModalType::ManualCopy);
                }
                Task::none()
            }
            Message::CopyShareText => {
                if let Some(text) = self.current_share_text() {
                    self.status = "Trip breakdown copied to clipboard".to_string();
                    iced::clipboard::write(text)
                } else {
                    Task::none()
                }
            }
            Message::ShareEditorAction(action) => {
                self.share_content.perform(action);
                Task::none()
            }
            Message::ModalClose => {
                self.modal = None;
                Task::none()
            }
        }
    }

    /// Deliver the share text over the first capability that works:
    /// OS share sheet, then clipboard, then the manual-copy dialog.
    fn share_result(&mut self) -> Task<Message> {
        let Some(text) = self.current_share_text() else {
            return Task::none();
        };

        match share::first_available() {
            ShareChannel::SystemShare => {
                let title = self
                    .result
                    .as_ref()
                    .map(share_title)
                    .unwrap_or_default();
                if share::system_share(&title, &text) {
                    self.status = "Trip breakdown shared".to_string();
                    Task::none()
                } else {
                    // Sheet refused the payload: fall through to the clipboard
                    self.status = "Trip breakdown copied to clipboard".to_string();
                    iced::clipboard::write(text)
                }
            }
            ShareChannel::Clipboard => {
                self.status = "Trip breakdown copied to clipboard".to_string();
                iced::clipboard::write(text)
            }
            ShareChannel::ManualCopy => {
                self.share_content = text_editor::Content::with_text(&text);
                self.modal = Some(ModalType::ManualCopy);
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let body: Element<'_, Message> =
            if let (Some(input), Some(result)) = (&self.calc_input, &self.result) {
                ui::results_panel::view(input, result, &self.settings).into()
            } else {
                ui::input_form::view(self).into()
            };

        let content = column![
            ui::header::view_header(self.dark_mode),
            container(scrollable(body)).height(Length::Fill),
            ui::status_bar::view_status_bar(&self.status),
        ]
        .spacing(12)
        .padding(16);

        let base = container(content)
            .width(Length::Fill)
            .height(Length::Fill);

        if self.modal.is_some() {
            stack![base, ui::modal::view_backdrop(), ui::modal::view_modal(self)].into()
        } else {
            base.into()
        }
    }
}

fn parse_field_f64(field: InputField, raw: &str) -> TallyResult<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(TallyError::missing_field(field.key()));
    }
    trimmed
        .parse()
        .map_err(|_| TallyError::invalid_input(field.key(), trimmed, "Not a number"))
}

fn parse_field_u32(field: InputField, raw: &str) -> TallyResult<u32> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(TallyError::missing_field(field.key()));
    }
    trimmed
        .parse()
        .map_err(|_| TallyError::invalid_input(field.key(), trimmed, "Not a whole number"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_app() -> App {
        App {
            trip_name: "Goa Trip".to_string(),
            distance_km: "300".to_string(),
            passenger_count: "4".to_string(),
            mileage_km_per_l: "15".to_string(),
            fuel_price_per_l: "100".to_string(),
            ..App::default()
        }
    }

    #[test]
    fn test_parse_input() {
        let input = filled_app().parse_input().unwrap();
        assert_eq!(input.distance_km, 300.0);
        assert_eq!(input.passenger_count, 4);
        assert_eq!(input.trip_name.as_deref(), Some("Goa Trip"));
    }

    #[test]
    fn test_empty_field_is_missing() {
        let mut app = filled_app();
        app.fuel_price_per_l.clear();
        let err = app.parse_input().unwrap_err();
        assert_eq!(err.error_code(), "MISSING_FIELD");
        assert_eq!(err.field(), "fuel_price_per_l");
    }

    #[test]
    fn test_garbage_field_is_invalid() {
        let mut app = filled_app();
        app.distance_km = "three hundred".to_string();
        let err = app.parse_input().unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_form_gate() {
        assert!(filled_app().form_is_valid());

        let mut app = filled_app();
        app.distance_km = "0".to_string();
        assert!(!app.form_is_valid());

        let mut app = filled_app();
        app.passenger_count = "4.5".to_string();
        assert!(!app.form_is_valid());
    }
}
