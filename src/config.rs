//! Service configuration
//!
//! Resolution priority for each value: command-line argument, then
//! environment variable, then compiled default.

use clap::Parser;

/// Command-line arguments for taxtracker
#[derive(Parser, Debug)]
#[command(name = "taxtracker")]
#[command(about = "Income tracking backend with federal tax estimation")]
#[command(version)]
pub struct Config {
    /// Port to listen on
    #[arg(short, long, default_value_t = 5000, env = "TAXTRACKER_PORT")]
    pub port: u16,

    /// Database connection string
    #[arg(
        long,
        default_value = "sqlite://taxtracker.db?mode=rwc",
        env = "DATABASE_URL"
    )]
    pub database_url: String,
}
