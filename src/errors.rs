//! Shared error types for the maintenance tools
//!
//! Only conditions that abort a run are represented here. Recoverable
//! situations (a missing OpenSSL header, a cipher without an OpenSSL
//! equivalent, a line that matches no pattern) never produce an error.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for cipher generation and configuration loading
#[derive(Debug, Error)]
pub enum Error {
    /// A required input file could not be opened or read
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The cipher preference table is inconsistent with the two-line entry format
    #[error("Malformed cipher preference table at line {line_number} ({reason}): {line}")]
    MalformedCipherPrefs {
        line_number: usize,
        line: String,
        reason: PendingKeyViolation,
    },

    /// An enumerated cipher suite has no `#define` in the protocol header
    #[error("No protocol definition for cipher suite macro {macro_name}")]
    MissingProtocolMacro { macro_name: String },

    /// Configuration file errors
    #[error("Configuration error in {}: {message}", path.display())]
    Config { path: PathBuf, message: String },

    /// Stream errors without file context
    #[error(transparent)]
    Stream(#[from] std::io::Error),
}

/// Which invariant of the two-line cipher preference format was broken
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingKeyViolation {
    /// A complete `{ "name", MACRO }` entry appeared while a name was pending
    TripletWhilePending,
    /// A `{ "name",` opener appeared while a name was pending
    OpenerWhilePending,
    /// A `MACRO, true }` closer appeared without a pending name
    CloserWithoutPending,
}

impl std::fmt::Display for PendingKeyViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            Self::TripletWhilePending => "complete entry while a name is pending",
            Self::OpenerWhilePending => "entry opener while a name is pending",
            Self::CloserWithoutPending => "entry closer without a pending name",
        };
        f.write_str(text)
    }
}

impl Error {
    /// Create an I/O error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a configuration error with path context
    pub fn config(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Config {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Attach a path to a bare stream error; other variants pass through
    pub fn with_path(self, path: impl Into<PathBuf>) -> Self {
        match self {
            Self::Stream(source) => Self::io(path, source),
            other => other,
        }
    }
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;
