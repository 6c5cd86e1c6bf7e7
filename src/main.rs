mod api;
mod cli_messages;
mod config;
mod consts;
mod environment;
mod events;
mod logging;
mod network;
mod plant;
mod session;
mod ui;
mod view_state;
mod workers;

use crate::config::{Config, Settings, get_config_path};
use crate::consts::cli_consts::polling::poll_interval;
use crate::environment::Environment;
use crate::session::{run_headless_mode, run_status, run_tui_mode, setup_session};
use clap::{Parser, Subcommand};
use std::error::Error;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Command-line arguments
struct Args {
    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start monitoring a plant
    Start {
        /// Plant to monitor
        #[arg(long, value_name = "PLANT_ID")]
        plant_id: Option<String>,

        /// Plant status API endpoint, or "production"
        #[arg(long, value_name = "URL")]
        endpoint: Option<String>,

        /// Run without the terminal UI, printing activity to stdout
        #[arg(long, default_value = "false")]
        headless: bool,

        /// Enable background colors
        #[arg(long, default_value = "false")]
        with_background: bool,
    },
    /// Fetch the plant status once and print it
    Status {
        /// Plant to query
        #[arg(long, value_name = "PLANT_ID")]
        plant_id: Option<String>,

        /// Plant status API endpoint, or "production"
        #[arg(long, value_name = "URL")]
        endpoint: Option<String>,
    },
    /// Save the endpoint and plant ID to the config file
    Configure {
        /// Plant status API endpoint, or "production"
        #[arg(long, value_name = "URL")]
        endpoint: Option<String>,

        /// Plant to monitor by default
        #[arg(long, value_name = "PLANT_ID")]
        plant_id: Option<String>,
    },
    /// Delete the config file
    Reset,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    log::set_max_level(logging::LogLevel::threshold().into());

    let config_path = get_config_path()?;
    let args = Args::parse();
    match args.command {
        Command::Start {
            plant_id,
            endpoint,
            headless,
            with_background,
        } => {
            let settings = Settings::from_process(endpoint, plant_id, &config_path)?;
            let session = setup_session(settings, poll_interval())?;
            if headless {
                run_headless_mode(session).await
            } else {
                run_tui_mode(session, with_background).await
            }
        }
        Command::Status { plant_id, endpoint } => {
            let settings = Settings::from_process(endpoint, plant_id, &config_path)?;
            run_status(settings).await
        }
        Command::Configure { endpoint, plant_id } => {
            if endpoint.is_none() && plant_id.is_none() {
                crate::print_cmd_warn!(
                    "Nothing to configure",
                    "pass --endpoint and/or --plant-id"
                );
                return Ok(());
            }
            // Validate before persisting
            if let Some(endpoint) = &endpoint {
                endpoint.parse::<Environment>()?;
            }

            let config = if config_path.exists() {
                let mut existing = Config::load_from_file(&config_path)
                    .map_err(|e| format!("Failed to load config: {}", e))?;
                if endpoint.is_some() {
                    existing.api_endpoint = endpoint;
                }
                if plant_id.is_some() {
                    existing.plant_id = plant_id;
                }
                existing
            } else {
                Config::new(endpoint, plant_id)
            };
            config
                .save(&config_path)
                .map_err(|e| format!("Failed to save config: {}", e))?;
            crate::print_cmd_success!("Configuration saved", "{}", config_path.display());
            Ok(())
        }
        Command::Reset => {
            if !config_path.exists() {
                crate::print_cmd_info!("No configuration to reset", "");
                return Ok(());
            }
            Config::clear(&config_path)?;
            crate::print_cmd_success!("Configuration reset", "{}", config_path.display());
            Ok(())
        }
    }
}
