//! Cipher list generation
//!
//! Cross-references the browser's cipher preferences with OpenSSL's macro
//! names and renders a C include file listing the ciphers a client should
//! advertise, in the browser's preference order.
//!
//! The run is split into two halves: [`CipherInputs::load`] reads the five
//! source tables from disk, and [`render`] turns them into text without
//! touching the filesystem.

pub mod enabled;
pub mod openssl;
pub mod output;
pub mod prefs;
pub mod proto;
pub mod suites;

pub use enabled::{read_enabled_prefs, EnabledPrefs};
pub use openssl::{read_openssl_macros, OpenSslMacros};
pub use output::{cipher_blocks, render, CipherBlock};
pub use prefs::{
    parse_cipher_prefs, read_cipher_pref_block, read_cipher_prefs, CipherPrefEntry, CipherPrefs,
};
pub use proto::{read_protocol_macros, ProtocolMacros};
pub use suites::read_cipher_suites;

use std::fs::File;
use std::io::{BufReader, Write};
use std::path::Path;

use crate::config::CipherSourceLayout;
use crate::errors::{Error, Result};

/// All tables the include file is computed from
#[derive(Debug, Clone, Default)]
pub struct CipherInputs {
    pub layout: CipherSourceLayout,
    pub prefs: CipherPrefs,
    /// Cipher suite macros in preference order
    pub suites: Vec<String>,
    pub enabled: EnabledPrefs,
    pub protocol: ProtocolMacros,
    pub openssl: OpenSslMacros,
}

impl CipherInputs {
    /// Read every table from the two source trees
    pub fn load(
        layout: CipherSourceLayout,
        firefox_root: &Path,
        openssl_root: &Path,
    ) -> Result<Self> {
        let prefs = with_firefox_file(&layout, firefox_root, &layout.cipher_prefs_file, |r| {
            read_cipher_prefs(r, &layout.cipher_prefs_start, &layout.cipher_prefs_end)
        })?;
        log::info!("Loaded {} enabled cipher preferences", prefs.by_name.len());

        let suites = with_firefox_file(&layout, firefox_root, &layout.cipher_suites_file, |r| {
            read_cipher_suites(r, &layout.cipher_suites_marker, &layout.cipher_suites_end)
        })?;

        let enabled = with_firefox_file(&layout, firefox_root, &layout.prefs_file, |r| {
            read_enabled_prefs(r, &layout.pref_namespace)
        })?;
        log::info!("Loaded {} {} preferences", enabled.len(), layout.pref_namespace);

        let protocol = with_firefox_file(
            &layout,
            firefox_root,
            &layout.proto_header,
            read_protocol_macros,
        )?;

        let openssl = read_openssl_macros(openssl_root, &layout)?;

        Ok(Self {
            layout,
            prefs,
            suites,
            enabled,
            protocol,
            openssl,
        })
    }
}

/// Open a required Firefox source file and run `read` over it
fn with_firefox_file<T>(
    layout: &CipherSourceLayout,
    root: &Path,
    relative: &Path,
    read: impl FnOnce(BufReader<File>) -> Result<T>,
) -> Result<T> {
    let path = layout.firefox_path(root, relative);
    log::debug!("Reading {}", path.display());
    let file = File::open(&path).map_err(|e| Error::io(&path, e))?;
    read(BufReader::new(file)).map_err(|e| e.with_path(&path))
}

/// Generate the include file for the given source trees into `writer`
pub fn generate<W: Write>(
    layout: CipherSourceLayout,
    firefox_root: &Path,
    openssl_root: &Path,
    writer: W,
) -> Result<()> {
    let inputs = CipherInputs::load(layout, firefox_root, openssl_root)?;
    render(&inputs, writer)
}
