//! Include file rendering

use std::fmt;
use std::io::Write;

use super::CipherInputs;
use crate::errors::Result;

/// Kept word for word so regenerated files diff cleanly against existing ones
pub const HEADER: &str = "\
/* This is an include file used to define the list of ciphers clients should
 * advertise.  Before including it, you should define the CIPHER and XCIPHER
 * macros.
 *
 * This file was automatically generated by get_mozilla_ciphers.py.
 */";

/// One cipher that survived filtering, ready to print
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CipherBlock {
    /// Lower-cased protocol identifier
    pub hex: String,
    /// OpenSSL text macro, or the NSS macro as a placeholder
    pub macro_name: String,
    /// Set when no OpenSSL equivalent exists
    pub missing_openssl: bool,
}

impl fmt::Display for CipherBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.missing_openssl {
            writeln!(f, "/* No openssl macro found for {} */", self.hex)?;
        }
        writeln!(f, "#ifdef {}", self.macro_name)?;
        writeln!(f, "    CIPHER({}, {})", self.hex, self.macro_name)?;
        writeln!(f, "#else")?;
        writeln!(f, "   XCIPHER({}, {})", self.hex, self.macro_name)?;
        write!(f, "#endif")
    }
}

/// Select and resolve the ciphers to emit, in enumeration order.
///
/// A suite is kept when a preference controls it and that preference
/// defaults to `true`. Kept suites must have a protocol definition.
pub fn cipher_blocks(inputs: &CipherInputs) -> Result<Vec<CipherBlock>> {
    let mut blocks = Vec::new();

    for suite in &inputs.suites {
        let Some(pref_name) = inputs.prefs.preference_for(suite) else {
            log::trace!("{} has no preference", suite);
            continue;
        };
        if !inputs.enabled.is_enabled(pref_name) {
            log::trace!("{} is disabled by {}", suite, pref_name);
            continue;
        }

        let hex = inputs.protocol.hex_value(suite)?;
        let block = match inputs.openssl.text_macro(&hex, &inputs.layout) {
            Some(macro_name) => CipherBlock {
                hex,
                macro_name,
                missing_openssl: false,
            },
            None => {
                log::info!("No OpenSSL macro for {} ({})", suite, hex);
                CipherBlock {
                    hex,
                    macro_name: suite.clone(),
                    missing_openssl: true,
                }
            }
        };
        blocks.push(block);
    }

    Ok(blocks)
}

/// Write the header and one block per selected cipher
pub fn render<W: Write>(inputs: &CipherInputs, mut writer: W) -> Result<()> {
    let blocks = cipher_blocks(inputs)?;
    writeln!(writer, "{}", HEADER)?;
    for block in &blocks {
        writeln!(writer, "{}", block)?;
    }
    writer.flush()?;
    Ok(())
}
