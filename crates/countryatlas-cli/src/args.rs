use clap::{Parser, Subcommand, ValueEnum};

/// CLI arguments for countryatlas
#[derive(Debug, Parser)]
#[command(
    name = "countryatlas",
    version,
    about = "CLI for exploring countries, borders and locations from the REST Countries API"
)]
pub struct CliArgs {
    /// Path to an /all-style JSON dump (default: fetch from the live API, with a local cache)
    #[arg(short = 'i', long = "input", global = true)]
    pub input: Option<String>,

    /// Ignore the local cache and refetch from the live API
    #[arg(long = "refresh", global = true)]
    pub refresh: bool,

    /// Print machine-readable JSON instead of text
    #[arg(long = "json", global = true)]
    pub json: bool,

    /// Display mode for text output
    #[arg(long = "theme", global = true, value_enum, default_value = "light")]
    pub theme: ThemeArg,

    /// Override the API base URL (e.g. a mirror)
    #[arg(long = "base-url", global = true)]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ThemeArg {
    Light,
    Dark,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the loaded country set
    Stats,

    /// List all countries as cards, optionally narrowed by a search query
    Countries {
        /// Case-insensitive substring filter on the common name
        #[arg(short = 'q', long = "query")]
        query: Option<String>,
    },

    /// Search countries by name substring (shorthand for countries --query)
    Search {
        /// Substring to search (case-insensitive)
        query: String,
    },

    /// Show the detail view for a country by code (cca2 or cca3)
    Country {
        /// cca2 or cca3 code (e.g. DE, DEU)
        code: String,
    },

    /// List the bordering countries of a country
    Borders {
        /// cca2 or cca3 code of the country
        code: String,
    },

    /// Show the location preview for a country (coordinates + map link)
    Locate {
        /// cca2 or cca3 code of the country
        code: String,
    },
}
