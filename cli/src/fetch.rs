#![deny(missing_docs)]

//! # Document Fetching
//!
//! Obtains the discovery document, either over HTTP from the public
//! discovery endpoint or from a local JSON file. This is the only layer
//! that performs network I/O; the core library never does.

use crate::error::{CliError, CliResult};
use std::fs;
use std::path::Path;
use tfgen_core::DiscoveryDocument;

/// Base URL of the public discovery service.
const DISCOVERY_URL: &str = "https://www.googleapis.com/discovery/v1/apis";

/// Fetches the discovery document for `api`/`version` over HTTP.
pub fn fetch_document(api: &str, version: &str) -> CliResult<DiscoveryDocument> {
    let url = format!("{}/{}/{}/rest", DISCOVERY_URL, api, version);

    let mut response = ureq::get(url.as_str())
        .call()
        .map_err(|e| CliError::General(format!("Failed to fetch {}: {}", url, e)))?;
    let body = response
        .body_mut()
        .read_to_string()
        .map_err(|e| CliError::General(format!("Failed to read response from {}: {}", url, e)))?;

    parse_document(&body)
}

/// Reads a discovery document from a local JSON file.
pub fn load_document(path: &Path) -> CliResult<DiscoveryDocument> {
    let body = fs::read_to_string(path)?;
    parse_document(&body)
}

/// Resolves the document source: a local file when `input` is given,
/// the network otherwise.
pub fn load_or_fetch(
    input: Option<&Path>,
    api: &str,
    version: &str,
) -> CliResult<DiscoveryDocument> {
    match input {
        Some(path) => load_document(path),
        None => fetch_document(api, version),
    }
}

fn parse_document(json: &str) -> CliResult<DiscoveryDocument> {
    serde_json::from_str(json)
        .map_err(|e| CliError::General(format!("Failed to parse discovery document: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_document_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "name": "dns", "version": "v1", "schemas": {{
                "ManagedZone": {{ "type": "object", "properties": {{ "dnsName": {{ "type": "string" }} }} }}
            }} }}"#
        )
        .unwrap();

        let doc = load_document(file.path()).unwrap();
        assert_eq!(doc.name, "dns");
        assert!(doc.schemas.contains_key("ManagedZone"));
    }

    #[test]
    fn test_load_document_rejects_bad_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = load_document(file.path()).unwrap_err();
        assert!(format!("{}", err).contains("parse discovery document"));
    }

    #[test]
    fn test_load_document_missing_file_is_io_error() {
        let err = load_document(Path::new("/nonexistent/discovery.json")).unwrap_err();
        assert!(matches!(err, CliError::Io(_)));
    }
}
