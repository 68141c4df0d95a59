//! Rename, copy and delete marker scanning for code review diffs
//!
//! The scanner turns diff text into an ordered list of [`Operation`]s without
//! touching the filesystem or any version-control tool. Executing the
//! operations is left to the caller.

mod rules;
mod scan;
mod types;

pub use rules::{match_line, Marker, MarkerKind};
pub use scan::{scan_diff, scan_lines, Scanner};
pub use types::{Operation, PairKind, Pairing, ScanError, ScanResult};

#[cfg(test)]
mod tests;
