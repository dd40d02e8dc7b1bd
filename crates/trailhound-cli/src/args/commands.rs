use clap::Subcommand;

use super::common::RankBy;

#[derive(Subcommand)]
pub enum Commands {
    /// Write backend connection settings to the data directory
    Init {
        /// Base URL of the hosted record service
        #[arg(long)]
        backend_url: String,
        /// Public (anon) API key
        #[arg(long)]
        api_key: String,
    },

    /// Sign in, sign out, or inspect the stored session
    Auth {
        #[command(subcommand)]
        command: AuthCommand,
    },

    /// Dog records and per-dog statistics
    Dog {
        #[command(subcommand)]
        command: DogCommand,
    },

    /// Aggregate statistics across all dogs
    Stats {
        /// Sort key for the per-dog ranking
        #[arg(long, default_value = "count")]
        rank_by: RankBy,
    },
}

#[derive(Subcommand)]
pub enum AuthCommand {
    /// Exchange credentials for a backend session token
    Login {
        #[arg(long)]
        email: String,
        /// Password; falls back to the TRAILHOUND_PASSWORD environment variable
        #[arg(long)]
        password: Option<String>,
    },
    /// Remove the stored session
    Logout,
    /// Show who is signed in
    Status,
}

#[derive(Subcommand)]
pub enum DogCommand {
    /// List all dogs, newest first
    List,
    /// Create a dog record (the backend enforces the admin-only policy)
    Add {
        #[arg(long)]
        dog_code: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        breed: Option<String>,
        #[arg(long)]
        sex: Option<String>,
        /// Birthdate as YYYY-MM-DD
        #[arg(long)]
        birthdate: Option<chrono::NaiveDate>,
        #[arg(long)]
        notes: Option<String>,
        /// Register the dog as inactive
        #[arg(long)]
        inactive: bool,
    },
    /// Per-dog session statistics: success rate, summaries, histograms
    Stats {
        /// The dog's human-assigned code (e.g. RX-07)
        dog_code: String,
    },
}
