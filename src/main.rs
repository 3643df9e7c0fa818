use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;
use waveview::cli::{Cli, Command, DemoArgs, SimulateArgs};
use waveview::config::DemoConfig;

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    match cli.command {
        Command::Demo(args) => handle_demo(&args),
        Command::Simulate(args) => handle_simulate(&args),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn handle_demo(args: &DemoArgs) -> Result<()> {
    let config = DemoConfig::from_override(args.config.clone())
        .context("Failed to load demo configuration")?;
    waveview::ui::launch_ui(&config).context("Demo window exited with an error")?;
    Ok(())
}

fn handle_simulate(args: &SimulateArgs) -> Result<()> {
    let snapshot = args.run().context("Simulation failed")?;
    let json = serde_json::to_string_pretty(&snapshot).context("Failed to encode snapshot")?;
    println!("{}", json);
    Ok(())
}
