//! Cipher preference table parsing
//!
//! The browser declares which preference name controls which cipher suite in
//! a C++ array of `{ "pref.name", MACRO, enabled }` entries. Entries may be
//! written on one line or split across two:
//!
//! ```text
//! static const CipherPref sCipherPrefs[] = {
//!     { "security.ssl3.ecdhe_rsa_aes_128_gcm_sha256",
//!       TLS_ECDHE_RSA_WITH_AES_128_GCM_SHA256, true },
//!     { "security.ssl3.rsa_des_ede3_sha", TLS_RSA_WITH_3DES_EDE_CBC_SHA, true },
//!     { nullptr, 0}
//! };
//! ```
//!
//! Only entries whose flag is literally `true` are kept.
//!
//! # Entry state machine
//!
//! | state         | line kind | next state    | effect                         |
//! |---------------|-----------|---------------|--------------------------------|
//! | `Idle`        | triplet   | `Idle`        | record entry if enabled        |
//! | `Idle`        | opener    | `Pending(n)`  | remember name `n`              |
//! | `Idle`        | closer    | (error)       | closer without a pending name  |
//! | `Pending(n)`  | triplet   | (error)       | entry while a name is pending  |
//! | `Pending(n)`  | opener    | (error)       | opener while a name is pending |
//! | `Pending(n)`  | closer    | `Idle`        | record `n` if enabled          |
//! | any           | other     | unchanged     | line ignored                   |

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;
use std::io::BufRead;

use crate::errors::{Error, PendingKeyViolation, Result};

static TRIPLET: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^\{\s*"([^"]+)",\s*(\S+)\s*(?:,\s*(true|false))?\s*\}"#)
        .expect("valid triplet pattern")
});
static OPENER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"^\{\s*"([^"]+)","#).expect("valid opener pattern"));
static CLOSER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*(\S+)(?:,\s*(true|false))+\s*\}").expect("valid closer pattern")
});

/// One row of the preference table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CipherPrefEntry {
    pub preference_name: String,
    pub macro_name: String,
    pub enabled: bool,
}

/// Enabled preference entries, indexed both ways
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CipherPrefs {
    /// Preference name to cipher suite macro
    pub by_name: HashMap<String, String>,
    /// Cipher suite macro to preference name
    pub by_macro: HashMap<String, String>,
}

impl CipherPrefs {
    fn record(&mut self, entry: CipherPrefEntry) {
        if !entry.enabled {
            log::trace!("Dropping disabled preference {}", entry.preference_name);
            return;
        }
        self.by_name
            .insert(entry.preference_name.clone(), entry.macro_name.clone());
        self.by_macro
            .insert(entry.macro_name, entry.preference_name);
    }

    /// Preference name controlling a cipher suite macro
    pub fn preference_for(&self, macro_name: &str) -> Option<&str> {
        self.by_macro.get(macro_name).map(String::as_str)
    }
}

/// How a single table line reads, in match priority order
#[derive(Debug, Clone, PartialEq, Eq)]
enum PrefLine {
    Triplet(CipherPrefEntry),
    Opener(String),
    Closer { macro_name: String, enabled: bool },
}

fn classify(line: &str) -> Option<PrefLine> {
    if let Some(caps) = TRIPLET.captures(line) {
        return Some(PrefLine::Triplet(CipherPrefEntry {
            preference_name: caps[1].to_string(),
            macro_name: caps[2].to_string(),
            enabled: caps.get(3).is_some_and(|m| m.as_str() == "true"),
        }));
    }
    if let Some(caps) = OPENER.captures(line) {
        return Some(PrefLine::Opener(caps[1].to_string()));
    }
    CLOSER.captures(line).map(|caps| PrefLine::Closer {
        macro_name: caps[1].to_string(),
        enabled: caps.get(2).is_some_and(|m| m.as_str() == "true"),
    })
}

#[derive(Debug)]
enum EntryState {
    Idle,
    Pending(String),
}

/// Collect the trimmed lines strictly between the table's start and end markers.
///
/// The start marker is matched against the raw line, the end marker against
/// the trimmed line. A table without an end marker yields everything after
/// the start marker.
pub fn read_cipher_pref_block<R: BufRead>(
    reader: R,
    start_marker: &str,
    end_marker: &str,
) -> Result<Vec<String>> {
    let mut in_block = false;
    let mut block = Vec::new();

    for line in reader.lines() {
        let line = line?;
        if !in_block {
            in_block = line.starts_with(start_marker);
            continue;
        }
        let trimmed = line.trim();
        if trimmed.starts_with(end_marker) {
            return Ok(block);
        }
        block.push(trimmed.to_string());
    }

    if in_block {
        log::warn!("Cipher preference table has no `{}` terminator", end_marker);
    } else {
        log::warn!("Cipher preference table `{}` not found", start_marker);
    }
    Ok(block)
}

/// Parse table lines into the enabled preference mappings.
///
/// Line numbers in errors are 1-based positions within `lines`.
pub fn parse_cipher_prefs<I, S>(lines: I) -> Result<CipherPrefs>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut prefs = CipherPrefs::default();
    let mut state = EntryState::Idle;

    for (idx, line) in lines.into_iter().enumerate() {
        let line = line.as_ref();
        let Some(kind) = classify(line) else {
            continue;
        };
        let violation = |reason| Error::MalformedCipherPrefs {
            line_number: idx + 1,
            line: line.to_string(),
            reason,
        };

        state = match (state, kind) {
            (EntryState::Idle, PrefLine::Triplet(entry)) => {
                prefs.record(entry);
                EntryState::Idle
            }
            (EntryState::Idle, PrefLine::Opener(name)) => EntryState::Pending(name),
            (EntryState::Idle, PrefLine::Closer { .. }) => {
                return Err(violation(PendingKeyViolation::CloserWithoutPending));
            }
            (EntryState::Pending(_), PrefLine::Triplet(_)) => {
                return Err(violation(PendingKeyViolation::TripletWhilePending));
            }
            (EntryState::Pending(_), PrefLine::Opener(_)) => {
                return Err(violation(PendingKeyViolation::OpenerWhilePending));
            }
            (
                EntryState::Pending(preference_name),
                PrefLine::Closer {
                    macro_name,
                    enabled,
                },
            ) => {
                prefs.record(CipherPrefEntry {
                    preference_name,
                    macro_name,
                    enabled,
                });
                EntryState::Idle
            }
        };
    }

    if let EntryState::Pending(name) = state {
        log::warn!("Cipher preference {} was never closed", name);
    }
    Ok(prefs)
}

/// Locate the preference table in `reader` and parse it
pub fn read_cipher_prefs<R: BufRead>(
    reader: R,
    start_marker: &str,
    end_marker: &str,
) -> Result<CipherPrefs> {
    let block = read_cipher_pref_block(reader, start_marker, end_marker)?;
    parse_cipher_prefs(&block)
}
