//! Turn diff lines into an ordered list of workspace operations

use crate::rules::{match_line, MarkerKind};
use crate::types::{Operation, PairKind, Pairing, ScanError, ScanResult};
use tracing::debug;

/// Scan a whole diff.
pub fn scan_diff(diff: &str, pairing: Pairing) -> ScanResult<Vec<Operation>> {
    scan_lines(diff.lines(), pairing)
}

/// Scan a sequence of diff lines.
pub fn scan_lines<I, S>(lines: I, pairing: Pairing) -> ScanResult<Vec<Operation>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut scanner = Scanner::new(pairing);
    for line in lines {
        scanner.feed(line.as_ref())?;
    }
    scanner.finish()
}

#[derive(Debug)]
struct PendingSource {
    path: String,
    line: usize,
    /// Set once a `to` marker used it; only kept around in lenient mode
    consumed: bool,
}

/// Incremental scanner holding the transient per-diff state
#[derive(Debug)]
pub struct Scanner {
    pairing: Pairing,
    line_no: usize,
    current_file: Option<String>,
    rename_source: Option<PendingSource>,
    copy_source: Option<PendingSource>,
    ops: Vec<Operation>,
}

impl Scanner {
    pub fn new(pairing: Pairing) -> Self {
        Self {
            pairing,
            line_no: 0,
            current_file: None,
            rename_source: None,
            copy_source: None,
            ops: Vec::new(),
        }
    }

    /// The path from the most recent `Index:` line
    pub fn current_file(&self) -> Option<&str> {
        self.current_file.as_deref()
    }

    pub fn feed(&mut self, line: &str) -> ScanResult<()> {
        self.line_no += 1;
        let Some(marker) = match_line(line) else {
            return Ok(());
        };
        let path = marker.path.unwrap_or_default();
        debug!(line = self.line_no, kind = ?marker.kind, path, "marker");

        match marker.kind {
            MarkerKind::Index => {
                self.check_no_pending()?;
                self.current_file = Some(path.to_string());
                self.ops.push(Operation::Announce(path.to_string()));
            }
            MarkerKind::Deleted => {
                let file = self
                    .current_file
                    .clone()
                    .ok_or(ScanError::DeleteWithoutIndex { line: self.line_no })?;
                self.ops.push(Operation::Remove(file));
            }
            MarkerKind::RenameFrom => self.record_source(PairKind::Rename, path)?,
            MarkerKind::CopyFrom => self.record_source(PairKind::Copy, path)?,
            MarkerKind::RenameTo => {
                let from = self.take_source(PairKind::Rename, path)?;
                self.ops.push(Operation::Rename {
                    from,
                    to: path.to_string(),
                });
            }
            MarkerKind::CopyTo => {
                let from = self.take_source(PairKind::Copy, path)?;
                // hg copy can leave the source looking modified; revert it
                self.ops.push(Operation::Copy {
                    from: from.clone(),
                    to: path.to_string(),
                });
                self.ops.push(Operation::Revert(from));
            }
        }
        Ok(())
    }

    /// Finish the scan, rejecting unused sources in strict mode.
    pub fn finish(self) -> ScanResult<Vec<Operation>> {
        self.check_no_pending()?;
        Ok(self.ops)
    }

    fn slot(&mut self, kind: PairKind) -> &mut Option<PendingSource> {
        match kind {
            PairKind::Rename => &mut self.rename_source,
            PairKind::Copy => &mut self.copy_source,
        }
    }

    fn record_source(&mut self, kind: PairKind, path: &str) -> ScanResult<()> {
        let line = self.line_no;
        let strict = self.pairing == Pairing::Strict;
        let slot = self.slot(kind);

        if strict {
            if let Some(pending) = slot.as_ref().filter(|p| !p.consumed) {
                return Err(ScanError::DuplicateSource {
                    line,
                    kind,
                    pending: pending.path.clone(),
                    source_path: path.to_string(),
                });
            }
        }

        *slot = Some(PendingSource {
            path: path.to_string(),
            line,
            consumed: false,
        });
        Ok(())
    }

    fn take_source(&mut self, kind: PairKind, target: &str) -> ScanResult<String> {
        let line = self.line_no;
        let unpaired = || ScanError::UnpairedTarget {
            line,
            kind,
            target: target.to_string(),
        };

        match self.pairing {
            Pairing::Strict => self
                .slot(kind)
                .take()
                .filter(|p| !p.consumed)
                .map(|p| p.path)
                .ok_or_else(unpaired),
            Pairing::Lenient => {
                let pending = self.slot(kind).as_mut().ok_or_else(unpaired)?;
                if pending.consumed {
                    tracing::warn!(
                        line,
                        source = %pending.path,
                        "{} target reuses a source from line {}",
                        kind,
                        pending.line
                    );
                }
                pending.consumed = true;
                Ok(pending.path.clone())
            }
        }
    }

    fn check_no_pending(&self) -> ScanResult<()> {
        if self.pairing == Pairing::Lenient {
            return Ok(());
        }
        for (kind, slot) in [
            (PairKind::Rename, &self.rename_source),
            (PairKind::Copy, &self.copy_source),
        ] {
            if let Some(pending) = slot.as_ref().filter(|p| !p.consumed) {
                return Err(ScanError::DanglingSource {
                    line: pending.line,
                    kind,
                    source_path: pending.path.clone(),
                });
            }
        }
        Ok(())
    }
}
