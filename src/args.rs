use clap::{Parser, Subcommand, ValueEnum};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum StorageKind {
    Json,
    Sqlite,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Html,
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Score a team golf outing: standings, skins and closest to the pin.", long_about = None)]
pub struct Cli {
    /// Course and roster TOML; the built-in course is used when omitted
    #[arg(long, global = true)]
    pub config_toml: Option<PathBuf>,
    /// Where the outing is saved
    #[arg(long, global = true)]
    pub store: Option<PathBuf>,
    #[arg(long, value_enum, global = true)]
    pub storage: Option<StorageKind>,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Record a team's 18 holes, replacing any earlier card
    Submit {
        #[arg(long)]
        team: String,
        /// Comma-separated strokes; blanks and non-numbers count as not played
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
        holes: Vec<String>,
    },
    /// Delete a team's card
    Remove {
        #[arg(long)]
        team: String,
    },
    /// Set the closest-to-pin winner for a hole; an empty player clears it
    Ctp {
        #[arg(long)]
        hole: u8,
        #[arg(long, default_value = "")]
        player: String,
    },
    /// Print standings, skins and closest to the pin
    Show {
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
        /// Write to a file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// List the team pairings
    Teams,
}

#[must_use]
pub fn args_checks() -> Cli {
    Cli::parse()
}
