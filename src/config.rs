//! Source layout configuration for cipher list generation
//!
//! Every file location, block marker and naming convention the generator
//! relies on lives in [`CipherSourceLayout`]. The defaults describe the
//! upstream Firefox and OpenSSL trees; a TOML file can override any subset
//! of fields when upstream formats drift.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::{Error, Result};

/// OpenSSL headers searched for cipher macros, in scan order
pub const DEFAULT_OPENSSL_HEADERS: &[&str] = &["ssl3.h", "ssl.h", "ssl2.h", "ssl23.h", "tls1.h"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CipherSourceLayout {
    /// C++ file holding the cipher preference table, relative to the Firefox root
    pub cipher_prefs_file: PathBuf,
    /// Raw-line prefix opening the cipher preference table
    pub cipher_prefs_start: String,
    /// Trimmed-line prefix of the sentinel entry closing the table
    pub cipher_prefs_end: String,

    /// C file enumerating the cipher suites in preference order
    pub cipher_suites_file: PathBuf,
    /// Substring of the line opening the cipher suite array
    pub cipher_suites_marker: String,
    /// Line prefix closing the cipher suite array
    pub cipher_suites_end: String,

    /// JavaScript preference defaults file
    pub prefs_file: PathBuf,
    /// Only preferences under this prefix are kept
    pub pref_namespace: String,

    /// Header mapping cipher suite macros to their protocol identifiers
    pub proto_header: PathBuf,

    /// Header directory relative to the OpenSSL root
    pub openssl_include_dir: PathBuf,
    /// Candidate headers, scanned in order; absent ones are skipped
    pub openssl_headers: Vec<String>,
    /// Prefix stripped from OpenSSL cipher ids before lookup
    pub openssl_hex_prefix: String,
    /// Infix marking OpenSSL cipher id macros
    pub openssl_id_marker: String,
    /// Infix of the OpenSSL cipher name macro that replaces the id marker
    pub openssl_text_marker: String,
}

impl Default for CipherSourceLayout {
    fn default() -> Self {
        Self {
            cipher_prefs_file: PathBuf::from("security/manager/ssl/nsNSSComponent.cpp"),
            cipher_prefs_start: "static const CipherPref sCipherPrefs[]".to_string(),
            cipher_prefs_end: "{ nullptr, 0}".to_string(),
            cipher_suites_file: PathBuf::from("security/nss/lib/ssl/ssl3con.c"),
            cipher_suites_marker: "ssl3CipherSuiteCfg cipherSuites[".to_string(),
            cipher_suites_end: "};".to_string(),
            prefs_file: PathBuf::from("netwerk/base/security-prefs.js"),
            pref_namespace: "security.ssl3".to_string(),
            proto_header: PathBuf::from("security/nss/lib/ssl/sslproto.h"),
            openssl_include_dir: PathBuf::from("include/openssl"),
            openssl_headers: DEFAULT_OPENSSL_HEADERS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            openssl_hex_prefix: "0x0300".to_string(),
            openssl_id_marker: "_CK_".to_string(),
            openssl_text_marker: "_TXT_".to_string(),
        }
    }
}

impl CipherSourceLayout {
    /// Resolve a Firefox-relative path against the source root
    pub fn firefox_path(&self, root: &Path, relative: &Path) -> PathBuf {
        root.join(relative)
    }

    /// Candidate OpenSSL header paths, in scan order
    pub fn openssl_header_paths(&self, root: &Path) -> Vec<PathBuf> {
        let include_dir = root.join(&self.openssl_include_dir);
        self.openssl_headers
            .iter()
            .map(|header| include_dir.join(header))
            .collect()
    }
}

/// Pure function to parse a layout from TOML contents
pub fn parse_layout(contents: &str) -> std::result::Result<CipherSourceLayout, String> {
    toml::from_str::<CipherSourceLayout>(contents)
        .map_err(|e| format!("Failed to parse layout: {}", e))
}

/// Load a layout override file; fields it omits keep their defaults
pub fn load_layout(path: &Path) -> Result<CipherSourceLayout> {
    let contents = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let layout = parse_layout(&contents).map_err(|message| Error::config(path, message))?;
    log::debug!("Loaded source layout from {}", path.display());
    Ok(layout)
}
