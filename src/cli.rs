use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "uptimecheck")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Recipient for the email alert when a check fails.
    #[arg(long = "email-to", value_name = "ADDRESS")]
    pub email_to: String,

    /// Path to the JSON file with the checks to run. Defaults to `checks.json` next to the
    /// executable.
    #[arg(long = "config-path", value_name = "PATH")]
    pub config_path: Option<PathBuf>,
}
