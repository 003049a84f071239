use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    /// Text scaling factor for the whole UI (0.5-2.0)
    pub text_scale: f32,
    /// Whether the window stays above other windows
    pub always_on_top: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            text_scale: 1.0,
            always_on_top: false,
        }
    }
}

impl AppSettings {
    /// Clamps the text scale to valid range (0.5-2.0)
    pub fn set_text_scale(&mut self, scale: f32) {
        self.text_scale = scale.clamp(0.5, 2.0);
    }
}
