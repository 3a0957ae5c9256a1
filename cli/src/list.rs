#![deny(missing_docs)]

//! # List Command
//!
//! Prints the named types available in a discovery document, as a
//! discovery aid before running `generate`.

use crate::error::CliResult;
use crate::fetch::load_or_fetch;
use colored::Colorize;
use std::path::PathBuf;
use tfgen_core::DiscoveryDocument;

/// Arguments for the list command.
#[derive(clap::Args, Debug, Clone)]
pub struct ListArgs {
    /// API identifier (e.g. "compute").
    #[clap(long)]
    pub api: String,

    /// API version (e.g. "v1").
    #[clap(long, default_value = "v1")]
    pub api_version: String,

    /// Read the discovery document from a local JSON file instead of
    /// fetching it over the network.
    #[clap(long)]
    pub input: Option<PathBuf>,
}

/// Executes the listing.
pub fn execute(args: &ListArgs) -> CliResult<()> {
    let document = load_or_fetch(args.input.as_deref(), &args.api, &args.api_version)?;

    println!(
        "{} {}/{}: {} schemas",
        "Discovery".green().bold(),
        document.name,
        document.version,
        document.schemas.len()
    );
    for name in sorted_schema_names(&document) {
        println!("{}", name);
    }
    Ok(())
}

/// Schema names of a document in lexicographic order.
fn sorted_schema_names(document: &DiscoveryDocument) -> Vec<&str> {
    let mut names: Vec<&str> = document.schemas.keys().map(String::as_str).collect();
    names.sort_unstable();
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorted_schema_names() {
        let document: DiscoveryDocument = serde_json::from_str(
            r#"{
            "name": "compute",
            "version": "v1",
            "schemas": {
                "Zone": { "type": "object" },
                "Address": { "type": "object" },
                "Instance": { "type": "object" }
            }
        }"#,
        )
        .unwrap();

        assert_eq!(
            sorted_schema_names(&document),
            vec!["Address", "Instance", "Zone"]
        );
    }
}
