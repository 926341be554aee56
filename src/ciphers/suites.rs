//! Cipher suite enumeration order
//!
//! NSS lists every cipher suite it knows in `ssl3con.c`, most preferred
//! first. That order is the output order of the generated include file.

use once_cell::sync::Lazy;
use regex::Regex;
use std::io::BufRead;

use crate::errors::Result;

static SUITE_ENTRY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*\{\s*([A-Z_0-9]+),").expect("valid suite entry pattern"));

/// Collect cipher suite macros in source order.
///
/// Lines are ignored until one contains `start_marker`; from the next line
/// on, each `{ MACRO,` entry contributes its macro until a line starting with
/// `end_prefix`. Duplicates are kept.
pub fn read_cipher_suites<R: BufRead>(
    reader: R,
    start_marker: &str,
    end_prefix: &str,
) -> Result<Vec<String>> {
    let mut in_array = false;
    let mut suites = Vec::new();

    for line in reader.lines() {
        let line = line?;
        if !in_array {
            in_array = line.contains(start_marker);
            continue;
        }
        if line.starts_with(end_prefix) {
            break;
        }
        if let Some(caps) = SUITE_ENTRY.captures(&line) {
            suites.push(caps[1].to_string());
        }
    }

    log::debug!("Found {} enumerated cipher suites", suites.len());
    Ok(suites)
}
