pub mod model;
pub mod path;
pub mod points;
pub mod render;

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

use eframe::egui::Color32;
use serde::{Deserialize, Serialize};

pub use model::{InitState, WaveModel, WaveSnapshot};
pub use path::{build_path, PathCommand, WavePath};
pub use points::{Point, PointBuffer, PointRole, MAX_PERIODS};
pub use render::{render, FrameGeometry, Surface};

/// Convenient alias for results returned by wave modules.
pub type Result<T> = std::result::Result<T, WaveError>;

/// Lightweight error type for the wave widget.
#[derive(Debug, Clone)]
pub struct WaveError {
    message: Arc<str>,
}

impl WaveError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Arc::from(message.into()),
        }
    }

    pub fn config_rejected(field: &str, reason: impl Display) -> Self {
        Self::new(format!("wave configuration rejected: {} {}", field, reason))
    }
}

impl Display for WaveError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for WaveError {}

/// Color written as `#RRGGBB` or `#RRGGBBAA` in configuration files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct WaveColor(pub Color32);

impl WaveColor {
    pub const BLUE: Self = Self(Color32::BLUE);
    pub const WHITE: Self = Self(Color32::WHITE);

    pub fn parse(raw: &str) -> Result<Self> {
        let hex = raw
            .strip_prefix('#')
            .ok_or_else(|| WaveError::new(format!("color '{}' must start with '#'", raw)))?;
        if !(hex.len() == 6 || hex.len() == 8) || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(WaveError::new(format!(
                "color '{}' must have 6 or 8 hex digits",
                raw
            )));
        }
        let mut channels = [u8::MAX; 4];
        for (index, channel) in channels.iter_mut().enumerate().take(hex.len() / 2) {
            let digits = &hex[index * 2..index * 2 + 2];
            *channel = u8::from_str_radix(digits, 16)
                .map_err(|_| WaveError::new(format!("invalid hex digits '{}' in '{}'", digits, raw)))?;
        }
        let [r, g, b, a] = channels;
        Ok(Self(Color32::from_rgba_unmultiplied(r, g, b, a)))
    }

    pub fn color(self) -> Color32 {
        self.0
    }
}

impl TryFrom<String> for WaveColor {
    type Error = WaveError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<WaveColor> for String {
    fn from(value: WaveColor) -> Self {
        let [r, g, b, a] = value.0.to_srgba_unmultiplied();
        if a == u8::MAX {
            format!("#{:02X}{:02X}{:02X}", r, g, b)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", r, g, b, a)
        }
    }
}

/// Smallest explicit wavelength, in pixels, that still draws a visible curve.
pub const MIN_WAVE_LENGTH: f32 = 1.0;

/// Widget configuration supplied once at construction.
///
/// Zero crest or wavelength means "derive from the measured width".
/// `default_wave_line_height` is the water depth measured from the bottom.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaveConfig {
    pub wave_color: WaveColor,
    pub rise_up: bool,
    pub show_percent_text: bool,
    pub wave_crest: f32,
    pub wave_length: f32,
    pub default_wave_line_height: f32,
    pub speed_x: f32,
    pub speed_y: f32,
    pub text_color: WaveColor,
    pub text_size: f32,
}

impl Default for WaveConfig {
    fn default() -> Self {
        Self {
            wave_color: WaveColor::BLUE,
            rise_up: false,
            show_percent_text: false,
            wave_crest: 0.0,
            wave_length: 0.0,
            default_wave_line_height: 0.0,
            speed_x: 2.0,
            speed_y: 0.2,
            text_color: WaveColor::WHITE,
            text_size: 30.0,
        }
    }
}

impl WaveConfig {
    /// Rejects values that cannot produce a drawable wave. Negative speeds
    /// are accepted and simply run the animation backwards.
    pub fn validate(&self) -> Result<()> {
        let numbers = [
            ("wave_crest", self.wave_crest),
            ("wave_length", self.wave_length),
            ("default_wave_line_height", self.default_wave_line_height),
            ("speed_x", self.speed_x),
            ("speed_y", self.speed_y),
            ("text_size", self.text_size),
        ];
        for (field, value) in numbers {
            if !value.is_finite() {
                return Err(WaveError::config_rejected(field, "must be finite"));
            }
        }
        if self.wave_crest < 0.0 {
            return Err(WaveError::config_rejected("wave_crest", "must not be negative"));
        }
        if self.wave_length < 0.0 {
            return Err(WaveError::config_rejected("wave_length", "must not be negative"));
        }
        if self.wave_length > 0.0 && self.wave_length < MIN_WAVE_LENGTH {
            return Err(WaveError::config_rejected(
                "wave_length",
                format!("must be 0 (auto) or at least {} px", MIN_WAVE_LENGTH),
            ));
        }
        if self.default_wave_line_height < 0.0 {
            return Err(WaveError::config_rejected(
                "default_wave_line_height",
                "must not be negative",
            ));
        }
        if self.text_size <= 0.0 {
            return Err(WaveError::config_rejected("text_size", "must be positive"));
        }
        Ok(())
    }
}
