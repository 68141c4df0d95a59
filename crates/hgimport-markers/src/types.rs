//! Type definitions for marker scanning

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A single step produced by scanning a diff
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// A file section started; diagnostic only
    Announce(String),
    Remove(String),
    Rename { from: String, to: String },
    Copy { from: String, to: String },
    /// Discard local modifications to a path
    Revert(String),
}

impl Operation {
    pub fn kind(&self) -> &'static str {
        match self {
            Operation::Announce(_) => "announce",
            Operation::Remove(_) => "remove",
            Operation::Rename { .. } => "rename",
            Operation::Copy { .. } => "copy",
            Operation::Revert(_) => "revert",
        }
    }

    /// Whether this step changes the workspace
    pub fn is_command(&self) -> bool {
        !matches!(self, Operation::Announce(_))
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Announce(path)
            | Operation::Remove(path)
            | Operation::Revert(path) => write!(f, "{} {}", self.kind(), path),
            Operation::Rename { from, to } | Operation::Copy { from, to } => {
                write!(f, "{} {} {}", self.kind(), from, to)
            }
        }
    }
}

/// The two kinds of from/to marker pairs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairKind {
    Rename,
    Copy,
}

impl PairKind {
    pub fn as_str(&self) -> &str {
        match self {
            PairKind::Rename => "rename",
            PairKind::Copy => "copy",
        }
    }
}

impl fmt::Display for PairKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How from/to marker pairs are checked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pairing {
    /// Every `to` must follow its own `from` within the same file section
    #[default]
    Strict,
    /// Sources are remembered for the rest of the diff and may be reused
    Lenient,
}

impl FromStr for Pairing {
    type Err = ScanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(Pairing::Strict),
            "lenient" => Ok(Pairing::Lenient),
            other => Err(ScanError::UnknownPairing(other.to_string())),
        }
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ScanError {
    #[error("line {line}: '{kind} to {target}' has no preceding '{kind} from'")]
    UnpairedTarget {
        line: usize,
        kind: PairKind,
        target: String,
    },

    #[error("line {line}: '{kind} from {source_path}' while '{kind} from {pending}' is still waiting for its target")]
    DuplicateSource {
        line: usize,
        kind: PairKind,
        pending: String,
        source_path: String,
    },

    #[error("line {line}: '{kind} from {source_path}' is never followed by '{kind} to'")]
    DanglingSource {
        line: usize,
        kind: PairKind,
        source_path: String,
    },

    #[error("line {line}: deleted file marker before any 'Index:' line")]
    DeleteWithoutIndex { line: usize },

    #[error("Unknown pairing mode: {0} (expected 'strict' or 'lenient')")]
    UnknownPairing(String),
}

pub type ScanResult<T> = Result<T, ScanError>;
