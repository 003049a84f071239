pub mod models;
pub mod parsing;
pub mod gui;
pub mod utils;

pub use models::{AppSettings, WeaponData};
pub use parsing::parse_weapon_data;
pub use gui::DpsCalculatorApp;
