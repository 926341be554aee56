// Export modules for library usage
pub mod ciphers;
pub mod cli;
pub mod config;
pub mod errors;
pub mod metrics;

// Re-export commonly used types
pub use crate::ciphers::{generate, render, CipherBlock, CipherInputs};
pub use crate::config::{load_layout, CipherSourceLayout};
pub use crate::errors::{Error, Result};
pub use crate::metrics::{
    count_includes, count_lines, function_lines, FunctionRecord, SourceMetrics,
};
