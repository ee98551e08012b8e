//! Error types for pattern decoding and the benchmark harness.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while decoding Run Length Encoded pattern text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RleError {
    /// A character that is neither a run count nor a known tag.
    #[error("unknown encoding character {ch:?} at line {line}, column {column}")]
    UnknownCharacter {
        /// Offending character.
        ch: char,
        /// 1-based line number.
        line: usize,
        /// 1-based column number.
        column: usize,
    },

    /// The `x = .., y = ..` header could not be parsed.
    #[error("malformed header at line {line}: {text:?}")]
    Header {
        /// 1-based line number.
        line: usize,
        /// The header line as written.
        text: String,
    },

    /// The header names a rule other than B3/S23.
    #[error("unsupported rule {0:?}, only B3/S23 is simulated")]
    UnsupportedRule(String),

    /// A run count or cell position does not fit in an `i64`.
    #[error("run or position overflow at line {line}")]
    Overflow {
        /// 1-based line number.
        line: usize,
    },
}

/// Errors surfaced by the command-line harness.
#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("unknown argument: {0}")]
    UnknownArgument(String),

    #[error("{flag} requires a value")]
    MissingValue { flag: &'static str },

    #[error("{flag} expects {expected}, got {value:?}")]
    InvalidValue {
        flag: &'static str,
        expected: &'static str,
        value: String,
    },

    #[error("unknown pattern {0:?} (try --help for the list)")]
    UnknownPattern(String),

    #[error("failed to read pattern file {path}")]
    PatternFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode pattern: {0}")]
    Rle(#[from] RleError),

    #[error("failed to build run thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("failed to write frame: {0}")]
    Render(#[from] std::io::Error),
}
