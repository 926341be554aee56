//! Whole-file line and `#include` counts

use once_cell::sync::Lazy;
use regex::Regex;
use std::io::{self, BufRead};

static INCLUDE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*#\s*include").expect("valid include pattern"));

/// Number of lines in the stream; an empty stream has none
pub fn count_lines<R: BufRead>(reader: R) -> io::Result<usize> {
    reader
        .lines()
        .try_fold(0, |count, line| line.map(|_| count + 1))
}

/// Whether a line is a preprocessor include directive
pub fn is_include(line: &str) -> bool {
    INCLUDE.is_match(line)
}

/// Number of `#include` directives, allowing whitespace around the `#`
pub fn count_includes<R: BufRead>(reader: R) -> io::Result<usize> {
    reader.lines().try_fold(0, |count, line| {
        line.map(|line| count + usize::from(is_include(&line)))
    })
}
