#![deny(missing_docs)]

//! # Name Normalization
//!
//! Converts the mixed-case field names used by discovery documents into the
//! lowercase, underscore-separated names Terraform schemas expect.

use regex::Regex;
use std::sync::OnceLock;

/// Converts a camelCase identifier to snake_case.
///
/// The identifier is segmented into a head non-uppercase run, acronym runs
/// and capitalized words; an acronym immediately followed by a capitalized
/// word keeps the word's initial with the word (`IPProtocol` becomes
/// `ip_protocol`, not `ipp_rotocol`). Every input character lands in exactly
/// one segment. Empty input yields empty output.
pub fn underscore(name: &str) -> String {
    static TOKEN_RE: OnceLock<Regex> = OnceLock::new();
    let token_re =
        TOKEN_RE.get_or_init(|| Regex::new("[A-Z]+|[^A-Z]+").expect("Invalid regex"));

    let mut segments: Vec<String> = Vec::new();
    // An uppercase run held back until we know whether a word follows it.
    let mut pending = String::new();

    for token in token_re.find_iter(name).map(|m| m.as_str()) {
        if token.starts_with(|c: char| c.is_ascii_uppercase()) {
            if !pending.is_empty() {
                segments.push(std::mem::take(&mut pending));
            }
            pending.push_str(token);
        } else {
            if pending.len() > 1 {
                // Acronym followed by a capitalized word: split before the
                // word's initial. `pending` is pure ASCII uppercase here.
                let split = pending.len() - 1;
                segments.push(pending[..split].to_string());
                pending.drain(..split);
            }
            pending.push_str(token);
            segments.push(std::mem::take(&mut pending));
        }
    }
    if !pending.is_empty() {
        segments.push(pending);
    }

    segments.join("_").to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_camel_case() {
        assert_eq!(underscore("machineType"), "machine_type");
        assert_eq!(underscore("canIpForward"), "can_ip_forward");
        assert_eq!(underscore("name"), "name");
    }

    #[test]
    fn test_acronym_runs() {
        assert_eq!(underscore("IPProtocol"), "ip_protocol");
        assert_eq!(underscore("targetHTTPSProxy"), "target_https_proxy");
        assert_eq!(underscore("URL"), "url");
    }

    #[test]
    fn test_digits_stay_with_their_run() {
        assert_eq!(underscore("ipv4Range"), "ipv4_range");
        assert_eq!(underscore("sizeGb"), "size_gb");
    }

    #[test]
    fn test_trailing_capital() {
        assert_eq!(underscore("planB"), "plan_b");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(underscore(""), "");
    }

    #[test]
    fn test_no_characters_dropped() {
        // Stripping the separators recovers a case-insensitive copy of the
        // input, so segmentation never loses characters.
        let inputs = [
            "machineType",
            "IPProtocol",
            "targetHTTPSProxy",
            "ipv4Range",
            "planB",
            "a",
            "ABC",
            "selfLink",
        ];
        for input in inputs {
            let flattened = underscore(input).replace('_', "");
            assert_eq!(flattened, input.to_ascii_lowercase(), "input: {}", input);
        }
    }
}
