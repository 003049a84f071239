use crate::models::{AppSettings, WeaponData};
use crate::parsing::parse_weapon_data;
use crate::utils::load_app_settings;

pub struct DpsCalculatorApp {
    /// Raw pasted item text
    pub input: String,
    /// Result of the last successful parse
    pub weapon: Option<WeaponData>,
    /// Error message shown when the last parse failed
    pub error: Option<&'static str>,
    /// Persisted UI settings
    pub settings: AppSettings,
    /// Whether to show the options row
    pub show_options: bool,
    /// Whether the zoom factor still has to be applied from loaded settings
    pub zoom_applied: bool,
}

impl DpsCalculatorApp {
    pub fn new() -> Self {
        // Load app settings from file
        let settings = load_app_settings();

        Self {
            input: String::new(),
            weapon: None,
            error: None,
            settings,
            show_options: false,
            zoom_applied: false,
        }
    }

    /// Re-parses the current input and overwrites the result/error fields.
    ///
    /// Empty input clears both rather than reporting an error, so a user who
    /// wipes the box gets a blank slate instead of a complaint.
    pub fn reparse(&mut self) {
        if self.input.trim().is_empty() {
            self.weapon = None;
            self.error = None;
            return;
        }

        match parse_weapon_data(&self.input) {
            Some(weapon) => {
                self.weapon = Some(weapon);
                self.error = None;
            }
            None => {
                self.weapon = None;
                self.error = Some("Invalid weapon data");
            }
        }
    }
}
