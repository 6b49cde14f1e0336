//! mouse2joy - map mice and digitizers into virtual gamepads
//!
//! Resolves the requested input devices, creates one uinput gamepad per
//! device, and runs one translation worker per binding until the devices
//! go away or Ctrl-C is pressed.

use anyhow::Context;
use clap::Parser;
use log::{debug, info};
use mouse2joy::backend::list_devices;
use mouse2joy::manager::{self, BindingManager};
use std::path::PathBuf;
use std::sync::atomic::Ordering;

#[derive(Debug, Parser)]
#[command(name = "mouse2joy", about = "Map mice and digitizers into virtual gamepads")]
struct Cli {
    /// Input device names that will be mapped into gamepads
    #[arg(short = 'd', long = "device-name", value_name = "NAME")]
    device_names: Vec<String>,

    /// Input device paths that will be mapped into gamepads
    #[arg(short = 'p', long = "device-path", value_name = "PATH")]
    device_paths: Vec<PathBuf>,

    /// Sensitivity multiplier applied to relative motion
    #[arg(short, long, default_value_t = 100)]
    sensitivity: i32,

    /// List available input devices and exit
    #[arg(short, long)]
    list: bool,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Verbosity is threaded in from the CLI, not a process-wide flag
    let default_level = if cli.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
    debug!("Input args: {:?}", cli);

    if cli.list {
        for (path, name) in list_devices() {
            println!("Device name: {name}\n  - path: {}", path.display());
        }
        return Ok(());
    }

    let inputs = manager::resolve(&cli.device_names, &cli.device_paths, cli.sensitivity)?;

    let binding_manager = BindingManager::new();
    let stop = binding_manager.stop_signal();
    ctrlc::set_handler(move || {
        info!("Interrupt received, stopping workers");
        stop.store(true, Ordering::SeqCst);
    })
    .context("Failed to install Ctrl-C handler")?;

    binding_manager.run(inputs)?;
    Ok(())
}
