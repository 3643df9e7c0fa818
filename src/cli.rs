use std::path::PathBuf;

use anyhow::{ensure, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::config::DemoConfig;
use crate::wave::{WaveConfig, WaveModel, WaveSnapshot};

#[derive(Parser, Debug)]
#[command(
    name = "waveview",
    version,
    about = "Animated liquid-wave level indicator (demo window and headless simulation)"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Open the demo window with the normal and rise-up waves.
    Demo(DemoArgs),
    /// Run the wave model without a window and print its state as JSON.
    Simulate(SimulateArgs),
}

#[derive(Args, Debug, Clone)]
pub struct DemoArgs {
    /// Optional JSON file overriding the demo configuration.
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ViewChoice {
    Normal,
    RiseUp,
}

#[derive(Args, Debug, Clone)]
pub struct SimulateArgs {
    /// Widget width in pixels.
    #[arg(long)]
    pub width: f32,
    /// Widget height in pixels.
    #[arg(long)]
    pub height: f32,
    /// Number of animation ticks to run.
    #[arg(long, default_value_t = 0)]
    pub ticks: u32,
    /// Which demo wave configuration to simulate.
    #[arg(long, value_enum, default_value_t = ViewChoice::Normal)]
    pub view: ViewChoice,
    /// Optional JSON file overriding the demo configuration.
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl SimulateArgs {
    pub fn wave_config(&self, demo: &DemoConfig) -> WaveConfig {
        match self.view {
            ViewChoice::Normal => demo.normal.clone(),
            ViewChoice::RiseUp => demo.rise_up.clone(),
        }
    }

    pub fn run(&self) -> Result<WaveSnapshot> {
        ensure!(
            self.width > 0.0 && self.height > 0.0,
            "width and height must be positive (got {}x{})",
            self.width,
            self.height
        );
        let demo = DemoConfig::from_override(self.config.clone())?;
        let mut model = WaveModel::new(self.wave_config(&demo));
        model.initialize(self.width, self.height);
        for _ in 0..self.ticks {
            model.advance();
        }
        Ok(model.snapshot())
    }
}
