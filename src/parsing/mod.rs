pub mod regex;
pub mod weapon_parser;

pub use weapon_parser::parse_weapon_data;
