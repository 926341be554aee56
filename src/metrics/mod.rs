//! Source metrics for C files
//!
//! Crude, regex-based measurements consumed by the code-health linter:
//! file length, `#include` count and per-function line spans. Each query
//! takes any [`BufRead`](std::io::BufRead) and makes a single pass over it.

pub mod counts;
pub mod functions;

pub use counts::{count_includes, count_lines, is_include};
pub use functions::{
    function_lines, FunctionLines, FunctionRecord, FunctionSpanScanner, NON_FUNCTION_MACROS,
};

use std::io;
use std::path::Path;

/// All metrics of one source file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceMetrics {
    pub lines: usize,
    pub includes: usize,
    pub functions: Vec<FunctionRecord>,
}

impl SourceMetrics {
    /// Measure a file on disk, reading it once
    pub fn from_path(path: &Path) -> io::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        log::debug!("Measuring {}", path.display());
        Self::from_content(&content)
    }

    /// Measure in-memory file content
    pub fn from_content(content: &str) -> io::Result<Self> {
        Ok(Self {
            lines: count_lines(content.as_bytes())?,
            includes: count_includes(content.as_bytes())?,
            functions: function_lines(content.as_bytes()).collect::<io::Result<_>>()?,
        })
    }

    /// Longest function, if any were found
    pub fn longest_function(&self) -> Option<&FunctionRecord> {
        self.functions.iter().max_by_key(|f| f.line_count)
    }
}
