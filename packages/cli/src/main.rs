#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! CLI entry point for crime statistics lookups.
//!
//! Each subcommand wires the library crates together: load the reference
//! data once, hand it to the pure analysis functions, print the result.
//! Running without a subcommand starts the interactive lookup.
//!
//! Uses `indicatif-log-bridge` (via [`crime_stats_cli_utils::init_logger`])
//! so log lines and loading spinners never fight for the terminal.

mod interactive;
mod lookup;
mod report;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use crime_stats_analytics::{
    DISPLAY_DATE_FORMAT, analyze, breakdown_by_year, format_date, top_offenses,
};
use crime_stats_locations::LocationIndex;

#[derive(Parser)]
#[command(name = "crime_stats", about = "Crime statistics by street address")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize the incidents recorded at an address
    Analyze {
        /// Address (or part of one) to look up, e.g. "N TRYON ST"
        address: String,
        /// Directory holding the `crime_data_*.json` shards
        #[arg(long, default_value = lookup::DEFAULT_SHARD_DIR)]
        shard_dir: PathBuf,
        /// Read incidents from this file instead of the address's shard
        #[arg(long)]
        records: Option<PathBuf>,
        /// TOML analysis config
        #[arg(long)]
        config: Option<PathBuf>,
        /// Treat this year as the current, incomplete year
        #[arg(long)]
        reference_year: Option<i32>,
        /// Number of most common offenses to list
        #[arg(long, default_value = "3")]
        top: usize,
        /// Print the statistics as JSON
        #[arg(long)]
        json: bool,
    },
    /// List incidents at an address grouped by year and offense
    Breakdown {
        /// Address (or part of one) to look up
        address: String,
        /// Directory holding the `crime_data_*.json` shards
        #[arg(long, default_value = lookup::DEFAULT_SHARD_DIR)]
        shard_dir: PathBuf,
        /// Read incidents from this file instead of the address's shard
        #[arg(long)]
        records: Option<PathBuf>,
        /// chrono strftime pattern for report dates
        #[arg(long, default_value = DISPLAY_DATE_FORMAT)]
        date_format: String,
    },
    /// Search known locations by street name
    Search {
        /// Case-insensitive part of a street name
        query: String,
        /// Reference `GeoJSON` dataset
        #[arg(long, default_value = lookup::DEFAULT_LOCATIONS_PATH)]
        locations: PathBuf,
    },
    /// Autocomplete an address from the known address list
    Suggest {
        /// Typed prefix or fragment
        query: String,
        /// JSON array of known addresses
        #[arg(long, default_value = lookup::DEFAULT_ADDRESSES_PATH)]
        addresses: PathBuf,
    },
    /// Reformat a `DATE_REPORTED` timestamp
    FormatDate {
        /// Timestamp such as "2023-05-17T14:30:00.000Z"
        input: String,
        /// chrono strftime pattern
        #[arg(long, default_value = DISPLAY_DATE_FORMAT)]
        format: String,
    },
    /// Print the shard file (or URL) holding an address's incidents
    Shard {
        /// Address to look up
        address: String,
        /// Base URL the shards are published under
        #[arg(long)]
        base_url: Option<String>,
    },
}

#[allow(clippy::too_many_lines)]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let multi = crime_stats_cli_utils::init_logger();
    let cli = Cli::parse();

    let Some(command) = cli.command else {
        return interactive::run(&multi);
    };

    match command {
        Commands::Analyze {
            address,
            shard_dir,
            records,
            config,
            reference_year,
            top,
            json,
        } => {
            let config = lookup::resolve_config(config.as_deref(), reference_year)?;
            let records = lookup::address_records(&multi, records.as_ref(), &shard_dir, &address)?;
            let stats = analyze(&records, &config);

            if json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                let top = top_offenses(&records, top);
                print!(
                    "{}",
                    report::render_overview(
                        &address,
                        &stats,
                        &top,
                        &records,
                        &config.display_date_format
                    )
                );
            }
        }
        Commands::Breakdown {
            address,
            shard_dir,
            records,
            date_format,
        } => {
            let records = lookup::address_records(&multi, records.as_ref(), &shard_dir, &address)?;
            let groups = breakdown_by_year(&records);
            print!("{}", report::render_breakdown(&groups, &date_format));
        }
        Commands::Search { query, locations } => {
            let index = lookup::location_index(&multi, &locations)?;
            let hits = index.search(&query);
            if hits.is_empty() {
                println!("No known streets match {query:?}");
            }
            for location in hits {
                println!(
                    "{:<32} {}",
                    LocationIndex::street_name_for_display(location),
                    location.formatted_address()
                );
            }
        }
        Commands::Suggest { query, addresses } => {
            let list = lookup::address_list(&multi, &addresses)?;
            for address in list.suggest(&query) {
                println!("{address}");
            }
        }
        Commands::FormatDate { input, format } => {
            println!("{}", format_date(&input, &format));
        }
        Commands::Shard { address, base_url } => match base_url {
            Some(base_url) => println!("{}", crime_stats_source::shard_url(&base_url, &address)?),
            None => println!("{}", crime_stats_source::shard_file_name(&address)?),
        },
    }

    Ok(())
}
