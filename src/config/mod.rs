use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::wave::WaveConfig;

/// Settings for the demo window and its two wave views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub window_title: String,
    pub view_height: f32,
    /// Level the rise-up view is reset to each time it is shown. Before the
    /// view's first layout this is a depth measured from the bottom, which
    /// layout converts; once laid out it is the top-relative y of the water
    /// line.
    pub rise_up_reset_level: f32,
    pub normal: WaveConfig,
    pub rise_up: WaveConfig,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            window_title: "Wave View".to_string(),
            view_height: 400.0,
            rise_up_reset_level: 300.0,
            normal: WaveConfig::default(),
            rise_up: WaveConfig {
                rise_up: true,
                ..WaveConfig::default()
            },
        }
    }
}

impl DemoConfig {
    pub fn from_override(path: Option<PathBuf>) -> Result<Self> {
        let config = match path {
            Some(custom) => load_from_file(&custom)?,
            None => Self::default(),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).context("failed to parse demo configuration JSON")
    }

    pub fn validate(&self) -> Result<()> {
        anyhow::ensure!(
            self.view_height.is_finite() && self.view_height > 0.0,
            "view_height must be positive, got {}",
            self.view_height
        );
        anyhow::ensure!(
            self.rise_up_reset_level.is_finite(),
            "rise_up_reset_level must be finite"
        );
        self.normal
            .validate()
            .context("invalid 'normal' wave configuration")?;
        self.rise_up
            .validate()
            .context("invalid 'rise_up' wave configuration")?;
        Ok(())
    }
}

fn load_from_file(path: &Path) -> Result<DemoConfig> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read demo configuration at {:?}", path))?;
    DemoConfig::from_json(&raw).with_context(|| format!("in {:?}", path))
}
