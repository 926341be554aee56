//! OpenSSL cipher macro index
//!
//! OpenSSL names each cipher twice: an id macro carrying the protocol value
//! (`TLS1_CK_RSA_WITH_AES_128_SHA  0x0300002F`) and a text macro carrying the
//! cipher string (`TLS1_TXT_RSA_WITH_AES_128_SHA  "AES128-SHA"`). The index
//! maps protocol values to id macros and records every defined name so the
//! derived text macro can be checked for existence.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::config::CipherSourceLayout;
use crate::errors::{Error, Result};

static OPENSSL_DEFINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^# *define\s+(\S+)\s+(\S+)").expect("valid define pattern"));

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OpenSslMacros {
    /// Normalized lower-case protocol value to id macro name
    by_hex: HashMap<String, String>,
    /// Every defined macro name to its value
    defined: HashMap<String, String>,
}

impl OpenSslMacros {
    /// Index the `# define NAME VALUE` lines of one header
    pub fn scan<R: BufRead>(&mut self, reader: R, layout: &CipherSourceLayout) -> io::Result<()> {
        for line in reader.lines() {
            let line = line?;
            let Some(caps) = OPENSSL_DEFINE.captures(&line) else {
                continue;
            };
            let (name, value) = (&caps[1], &caps[2]);
            if value.starts_with("0x") && name.contains(&layout.openssl_id_marker) {
                let hex = value
                    .replace(&layout.openssl_hex_prefix, "0x")
                    .to_lowercase();
                log::trace!("{} -> {}", hex, name);
                self.by_hex.insert(hex, name.to_string());
            }
            self.defined.insert(name.to_string(), value.to_string());
        }
        Ok(())
    }

    /// Id macro registered for a protocol value
    pub fn id_macro(&self, hex: &str) -> Option<&str> {
        self.by_hex.get(&hex.to_lowercase()).map(String::as_str)
    }

    pub fn is_defined(&self, name: &str) -> bool {
        self.defined.contains_key(name)
    }

    /// OpenSSL text macro for a protocol value, if both the id macro and its
    /// text counterpart are defined
    pub fn text_macro(&self, hex: &str, layout: &CipherSourceLayout) -> Option<String> {
        let id_macro = self.id_macro(hex)?;
        let text_macro = id_macro.replace(&layout.openssl_id_marker, &layout.openssl_text_marker);
        self.is_defined(&text_macro).then_some(text_macro)
    }
}

/// Scan the layout's candidate headers under `openssl_root`.
///
/// Headers that do not exist are skipped; any other read failure is fatal.
pub fn read_openssl_macros(
    openssl_root: &Path,
    layout: &CipherSourceLayout,
) -> Result<OpenSslMacros> {
    let mut macros = OpenSslMacros::default();

    for path in layout.openssl_header_paths(openssl_root) {
        let file = match File::open(&path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::debug!("Skipping missing OpenSSL header {}", path.display());
                continue;
            }
            Err(e) => return Err(Error::io(&path, e)),
        };
        log::debug!("Scanning OpenSSL header {}", path.display());
        macros
            .scan(BufReader::new(file), layout)
            .map_err(|e| Error::io(&path, e))?;
    }

    Ok(macros)
}
