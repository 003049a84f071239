pub mod weapon;
pub mod settings;

pub use weapon::{WeaponData, MAX_QUALITY_MULTIPLIER};
pub use settings::AppSettings;
