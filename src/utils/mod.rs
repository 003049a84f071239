pub mod settings_persistence;

pub use settings_persistence::{load_app_settings, parse_settings, save_app_settings, auto_save_app_settings};
