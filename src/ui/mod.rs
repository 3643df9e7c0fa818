pub mod components;
pub mod screens;

use eframe::NativeOptions;

use crate::config::DemoConfig;
use crate::wave::{Result, WaveError};

pub fn launch_ui(config: &DemoConfig) -> Result<()> {
    let app = screens::demo::DemoApp::new(config);
    let options = NativeOptions::default();
    eframe::run_native(
        &config.window_title,
        options,
        Box::new(move |_cc| Box::new(app)),
    )
    .map_err(|err| WaveError::new(err.to_string()))
}
