mod commands;
mod common;

pub use commands::*;
pub use common::*;

use clap::Parser;

#[derive(Parser)]
#[command(name = "trailhound")]
#[command(about = "Dog-training records and session statistics", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Data directory holding config.toml and session.toml
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
