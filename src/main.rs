mod alert;
mod checks;
mod cli;
mod config;
mod logging;
mod outcome;
mod runner;

use alert::EmailAlertSink;
use clap::Parser;
use config::Config;
use dotenv::dotenv;
use log::{debug, error};
use std::process::exit;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    dotenv().ok();
    let log_file = match logging::init() {
        Ok(path) => path,
        Err(e) => {
            eprintln!(
                "Unable to open the log file {}: {}",
                logging::log_file_path().display(),
                e
            );
            exit(1);
        }
    };
    debug!("Logging to {}", log_file.display());

    // Parse the CLI arguments. A missing recipient aborts here, before any check runs.
    let args = cli::Cli::parse();
    debug!("Parsed args: {:?}", args);

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            exit(1);
        }
    };
    debug!("Config: {:?}", config);

    let checks = match checks::loader::load(args.config_path.as_deref()) {
        Ok(checks) => checks,
        Err(e) => {
            error!("Failed to load checks: {}", e);
            exit(1);
        }
    };

    let alert_sink = EmailAlertSink::new(config.smtp, args.email_to);
    let outcome = runner::run(checks, &alert_sink).await;
    if !outcome.is_success() {
        error!("{}. Exiting.", outcome);
        exit(1);
    }
    debug!("Exiting.");
}
