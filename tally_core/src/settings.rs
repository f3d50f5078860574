//! # Display Settings
//!
//! Front-end display preferences. The engine itself is currency-agnostic;
//! the symbol only appears when a result is rendered or exported.
//!
//! Settings live for the lifetime of the running front-end - nothing is
//! persisted between launches.

use serde::{Deserialize, Serialize};

/// Display preferences shared by the GUI and CLI front-ends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplaySettings {
    /// Currency symbol prefixed to money amounts (e.g., "₹", "$", "€")
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

fn default_currency_symbol() -> String {
    "₹".to_string()
}

impl Default for DisplaySettings {
    fn default() -> Self {
        DisplaySettings {
            currency_symbol: default_currency_symbol(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_symbol() {
        assert_eq!(DisplaySettings::default().currency_symbol, "₹");
    }

    #[test]
    fn test_symbol_defaults_when_absent() {
        let settings: DisplaySettings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings, DisplaySettings::default());
    }
}
