//! Function span detection for C sources
//!
//! This is a line-oriented heuristic, not a parser. It relies on the Tor
//! coding style where a definition's name starts in column 0 and its body is
//! delimited by `{` and `}` lines that also start in column 0:
//!
//! ```c
//! static int
//! connection_foo(connection_t *conn)
//! {
//!   ...
//! }
//! ```
//!
//! # Span state machine
//!
//! Each line triggers at most one transition, checked in row order:
//!
//! | state            | line                              | next state       | effect               |
//! |------------------|-----------------------------------|------------------|----------------------|
//! | `Outside`        | `name(` or `name,(` at column 0   | `AwaitingBrace`  | start = this line    |
//! | `AwaitingBrace`  | starts with `{`                   | `InBody`         | start = this line    |
//! | `AwaitingBrace`  | starts with `}`                   | `Outside`        | emit record          |
//! | `InBody`         | starts with `}`                   | `Outside`        | emit record          |
//! | any              | anything else                     | unchanged        |                      |
//!
//! Names in [`NON_FUNCTION_MACROS`] never start a span.
//!
//! ## Limitations
//!
//! - Braces are not counted. A nested block whose `}` sits in column 0 ends
//!   the span early, and a `{` in column 0 inside the body is ignored.
//! - A span still open at end of input produces no record.

use once_cell::sync::Lazy;
use regex::Regex;
use std::io::{self, BufRead, Lines};

/// Macros whose invocations look like function definitions at column 0
pub const NON_FUNCTION_MACROS: &[&str] = &[
    "MOCK_IMPL",
    "MOCK_DECL",
    "HANDLE_DECL",
    "ENABLE_GCC_WARNINGS",
    "ENABLE_GCC_WARNING",
    "DUMMY_TYPECHECK_INSTANCE",
    "DISABLE_GCC_WARNING",
    "DISABLE_GCC_WARNINGS",
];

static SIGNATURE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([a-zA-Z_][a-zA-Z_0-9]*),?\(").expect("valid signature pattern"));

/// A detected function and the number of lines it spans
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionRecord {
    pub name: String,
    /// Lines from the opening brace (or the signature, if no brace was seen)
    /// through the closing brace, inclusive
    pub line_count: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
enum SpanState {
    #[default]
    Outside,
    AwaitingBrace {
        name: String,
        start: usize,
    },
    InBody {
        name: String,
        start: usize,
    },
}

/// Push-driven span detector; feed it lines in order
#[derive(Debug, Clone, Default)]
pub struct FunctionSpanScanner {
    state: SpanState,
    line_number: usize,
}

impl FunctionSpanScanner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume the next line, returning a record if it closes a function
    pub fn feed(&mut self, line: &str) -> Option<FunctionRecord> {
        self.line_number += 1;
        let current = self.line_number;

        match std::mem::take(&mut self.state) {
            SpanState::Outside => {
                if let Some(name) = signature_name(line) {
                    self.state = SpanState::AwaitingBrace {
                        name: name.to_string(),
                        start: current,
                    };
                }
                None
            }
            SpanState::AwaitingBrace { name, .. } if line.starts_with('{') => {
                self.state = SpanState::InBody {
                    name,
                    start: current,
                };
                None
            }
            SpanState::AwaitingBrace { name, start } | SpanState::InBody { name, start }
                if line.starts_with('}') =>
            {
                Some(FunctionRecord {
                    name,
                    line_count: current - start + 1,
                })
            }
            open => {
                self.state = open;
                None
            }
        }
    }
}

/// Name of a function whose definition starts on this line, if any
fn signature_name(line: &str) -> Option<&str> {
    let name = SIGNATURE.captures(line)?.get(1)?.as_str();
    if NON_FUNCTION_MACROS.contains(&name) {
        log::trace!("Ignoring {} macro invocation", name);
        return None;
    }
    Some(name)
}

/// Lazy, single-pass iterator over the functions of a source stream
#[derive(Debug)]
pub struct FunctionLines<R> {
    lines: Lines<R>,
    scanner: FunctionSpanScanner,
}

impl<R: BufRead> Iterator for FunctionLines<R> {
    type Item = io::Result<FunctionRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        for line in self.lines.by_ref() {
            match line {
                Ok(line) => {
                    if let Some(record) = self.scanner.feed(&line) {
                        return Some(Ok(record));
                    }
                }
                Err(e) => return Some(Err(e)),
            }
        }
        None
    }
}

/// Iterate over `(name, line count)` records of the functions in `reader`
pub fn function_lines<R: BufRead>(reader: R) -> FunctionLines<R> {
    FunctionLines {
        lines: reader.lines(),
        scanner: FunctionSpanScanner::new(),
    }
}
