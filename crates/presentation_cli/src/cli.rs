//! Command-line arguments

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use domain::Gender;
use uuid::Uuid;

/// PackIT - weather-aware packing lists
#[derive(Debug, Parser)]
#[command(name = "packit")]
#[command(author, version, about = "Weather-aware packing lists", long_about = None)]
pub struct Cli {
    /// Verbosity level (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Configuration file (default: packit.toml in the working directory)
    #[arg(short, long, global = true, env = "PACKIT_CONFIG")]
    pub config: Option<PathBuf>,

    /// SQLite database path, overrides the configured one
    #[arg(short, long, global = true)]
    pub database: Option<String>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a packing list with items suggested for the trip
    ///
    /// The current temperature at the destination decides the weather items.
    /// Example: packit create "Summer in Rome" --days 7 --gender female --city Rome --country Italy
    Create {
        /// List name, unique ignoring case
        name: String,

        /// Trip length in days (1-100)
        #[arg(long)]
        days: u32,

        /// male or female
        #[arg(long)]
        gender: Gender,

        /// Destination city
        #[arg(long, requires = "country")]
        city: Option<String>,

        /// Destination country name or ISO code
        #[arg(long, requires = "city")]
        country: Option<String>,

        /// Id for the new list (random if omitted)
        #[arg(long)]
        id: Option<Uuid>,
    },

    /// Show a packing list
    Show {
        id: Uuid,
    },

    /// Search lists by name fragment (all lists without a fragment)
    Search {
        name: Option<String>,
    },

    /// Add an item to a list
    AddItem {
        list_id: Uuid,
        name: String,

        #[arg(short, long, default_value_t = 1)]
        quantity: u32,
    },

    /// Mark an item as packed
    Pack {
        list_id: Uuid,
        name: String,
    },

    /// Remove an item from a list
    RemoveItem {
        list_id: Uuid,
        name: String,
    },

    /// Delete a packing list
    Remove {
        id: Uuid,
    },
}
