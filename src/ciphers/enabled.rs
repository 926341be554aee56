//! Preference defaults (`pref("key", value);` lines)

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;
use std::io::BufRead;

use crate::errors::Result;

static PREF_CALL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"^pref\("([^"]+)"\s*,\s*(\S*)\s*\)"#).expect("valid pref pattern"));

/// Preference key to its literal default value, restricted to one namespace
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnabledPrefs {
    values: HashMap<String, String>,
}

impl EnabledPrefs {
    /// Whether the preference defaults to the literal `true`; absent keys are off
    pub fn is_enabled(&self, key: &str) -> bool {
        self.value(key) == "true"
    }

    /// Raw default value, `"false"` when the key is absent
    pub fn value(&self, key: &str) -> &str {
        self.values.get(key).map_or("false", String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl FromIterator<(String, String)> for EnabledPrefs {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

/// Record every `pref("KEY", VALUE)` line whose key starts with `namespace`
pub fn read_enabled_prefs<R: BufRead>(reader: R, namespace: &str) -> Result<EnabledPrefs> {
    let mut values = HashMap::new();

    for line in reader.lines() {
        let line = line?;
        let Some(caps) = PREF_CALL.captures(&line) else {
            continue;
        };
        let key = &caps[1];
        if key.starts_with(namespace) {
            values.insert(key.to_string(), caps[2].to_string());
        }
    }

    Ok(EnabledPrefs { values })
}
