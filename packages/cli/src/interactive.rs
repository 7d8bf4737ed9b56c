//! Interactive lookup flow.
//!
//! Prompts for an address with autocomplete from the known address list,
//! then prints the overview for the chosen address.

use std::path::Path;

use crime_stats_analytics::{analyze, top_offenses};
use crime_stats_cli_utils::MultiProgress;
use dialoguer::{Input, Select};

use crate::{lookup, report};

/// Runs the interactive lookup.
///
/// # Errors
///
/// Returns an error if a prompt fails or the data files cannot be loaded.
pub fn run(multi: &MultiProgress) -> Result<(), Box<dyn std::error::Error>> {
    let addresses_path: String = Input::new()
        .with_prompt("Known addresses file")
        .default(lookup::DEFAULT_ADDRESSES_PATH.to_string())
        .interact_text()?;
    let addresses = lookup::address_list(multi, Path::new(&addresses_path))?;

    let shard_dir: String = Input::new()
        .with_prompt("Incident shard directory")
        .default(lookup::DEFAULT_SHARD_DIR.to_string())
        .interact_text()?;

    let query: String = Input::new()
        .with_prompt("Search an address")
        .interact_text()?;

    let suggestions = addresses.suggest(query.trim());
    let address = if suggestions.is_empty() {
        log::info!("No known address matches {query:?}, searching as typed");
        query.trim().to_string()
    } else {
        let idx = Select::new()
            .with_prompt("Pick an address")
            .items(&suggestions)
            .default(0)
            .max_length(15)
            .interact()?;
        suggestions[idx].to_string()
    };

    let config = lookup::resolve_config(None, None)?;
    let records = lookup::address_records(multi, None, Path::new(&shard_dir), &address)?;
    let stats = analyze(&records, &config);
    let top = top_offenses(&records, 3);

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

    Ok(())
}
