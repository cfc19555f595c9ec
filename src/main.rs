mod alarms;
mod cli_messages;
mod config;
mod consts;
mod environment;
mod error_classifier;
mod events;
mod logging;
mod runtime;
mod session;
mod source;
mod timefmt;
mod ui;
mod workers;

use crate::alarms::AlarmRecord;
use crate::config::{Config, get_config_path};
use crate::consts::cli_consts::refresh;
use crate::environment::Environment;
use crate::session::{run_headless_mode, run_tui_mode, setup_session};
use crate::source::{AlarmServerClient, AlarmSource};
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
    /// Start the alarm monitor
    Start {
        /// Alarm server base URL, overriding the saved configuration
        #[arg(long, value_name = "URL")]
        url: Option<String>,

        /// Seconds between snapshot refreshes
        #[arg(long, value_name = "SECONDS")]
        interval: Option<u64>,

        /// Run without the terminal UI, logging events to stdout
        #[arg(long)]
        headless: bool,

        /// Enable the dashboard background color
        #[arg(long)]
        with_background: bool,
    },
    /// Fetch a single snapshot and print it to the console
    Check {
        /// Alarm server base URL, overriding the saved configuration
        #[arg(long, value_name = "URL")]
        url: Option<String>,
    },
    /// Save the alarm server URL and refresh interval as defaults
    Configure {
        /// Alarm server base URL, e.g. http://localhost:8080/alarm-webmon
        #[arg(long, value_name = "URL")]
        url: String,

        /// Seconds between snapshot refreshes
        #[arg(long, value_name = "SECONDS")]
        interval: Option<u64>,
    },
    /// Clear the saved configuration.
    Reset,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let alarmmon_environment_str = std::env::var("ALARMMON_ENVIRONMENT").unwrap_or_default();
    let environment = alarmmon_environment_str
        .parse::<Environment>()
        .unwrap_or(Environment::default());

    let config_path = get_config_path()?;
    let args = Args::parse();
    match args.command {
        Command::Start {
            url,
            interval,
            headless,
            with_background,
        } => {
            let saved = Config::load_from_file(&config_path).ok();
            let server_url =
                url.unwrap_or_else(|| Config::resolve_url(saved.as_ref(), environment));
            let refresh_secs = interval
                .or(saved.and_then(|config| config.refresh_secs))
                .unwrap_or(refresh::DEFAULT_INTERVAL_SECS)
                .max(1);

            let session = setup_session(environment, server_url, refresh_secs);
            if headless {
                run_headless_mode(session).await
            } else {
                run_tui_mode(session, with_background).await
            }
        }
        Command::Check { url } => {
            let saved = Config::load_from_file(&config_path).ok();
            let server_url =
                url.unwrap_or_else(|| Config::resolve_url(saved.as_ref(), environment));
            check_alarms(environment, server_url).await
        }
        Command::Configure { url, interval } => {
            let config = Config::new(url, interval);
            config
                .save(&config_path)
                .map_err(|e| format!("Failed to save config: {}", e))?;
            print_cmd_success!("Configuration saved", "{}", config_path.display());
            Ok(())
        }
        Command::Reset => {
            println!("Clearing saved alarm monitor configuration...");
            Config::clear(&config_path).map_err(Into::into)
        }
    }
}

/// One-shot fetch of the current snapshot, dumped to the console.
async fn check_alarms(environment: Environment, server_url: String) -> Result<(), Box<dyn Error>> {
    let client = AlarmServerClient::with_base_url(environment, server_url.clone());
    print_cmd_info!("Checking alarms", "{}", server_url);

    match client.fetch_snapshot().await {
        Ok(snapshot) => {
            dump_group("Active", &snapshot.active);
            dump_group("Acknowledged", &snapshot.acknowledged);
            print_cmd_success!(
                "Snapshot fetched",
                "{} active / {} acknowledged",
                snapshot.active.len(),
                snapshot.acknowledged.len()
            );
            Ok(())
        }
        Err(e) => {
            print_cmd_error!("Failed to fetch alarms", "{}", e);
            Err(e.into())
        }
    }
}

fn dump_group(label: &str, records: &[AlarmRecord]) {
    println!("{} alarms:", label);
    if records.is_empty() {
        println!("  (none)");
        return;
    }
    for pv in records {
        println!(
            "  {} ({}): {}/{} at {}",
            pv.name, pv.description, pv.severity, pv.message, pv.time
        );
    }
}
