//! Protocol identifier table (`#define NAME VALUE` lines of `sslproto.h`)

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;
use std::io::BufRead;

use crate::errors::{Error, Result};

static DEFINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#define\s+(\S+)\s+(\S+)").expect("valid define pattern"));

/// Macro name to its defined value, as written in the header
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProtocolMacros {
    values: HashMap<String, String>,
}

impl ProtocolMacros {
    /// Lower-cased hex identifier of a cipher suite macro.
    ///
    /// Every enumerated cipher suite is expected to be defined, so a missing
    /// macro is an error rather than a skip.
    pub fn hex_value(&self, macro_name: &str) -> Result<String> {
        self.values
            .get(macro_name)
            .map(|value| value.to_lowercase())
            .ok_or_else(|| Error::MissingProtocolMacro {
                macro_name: macro_name.to_string(),
            })
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl FromIterator<(String, String)> for ProtocolMacros {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

/// Record every `#define NAME VALUE` line; later definitions win
pub fn read_protocol_macros<R: BufRead>(reader: R) -> Result<ProtocolMacros> {
    let mut values = HashMap::new();

    for line in reader.lines() {
        let line = line?;
        if let Some(caps) = DEFINE.captures(&line) {
            values.insert(caps[1].to_string(), caps[2].to_string());
        }
    }

    Ok(ProtocolMacros { values })
}
