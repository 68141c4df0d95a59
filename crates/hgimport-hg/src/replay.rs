use crate::error::HgResult;
use crate::ops::WorkspaceOps;
use hgimport_markers::Operation;
use std::io::Write;
use tracing::debug;

/// Counts of what a replay did
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ReplaySummary {
    pub files: usize,
    pub removed: usize,
    pub renamed: usize,
    pub copied: usize,
    pub reverted: usize,
}

impl ReplaySummary {
    /// Count what replaying `ops` would do, without running anything
    pub fn tally(ops: &[Operation]) -> Self {
        let mut summary = Self::default();
        for op in ops {
            match op {
                Operation::Announce(_) => summary.files += 1,
                Operation::Remove(_) => summary.removed += 1,
                Operation::Rename { .. } => summary.renamed += 1,
                Operation::Copy { .. } => summary.copied += 1,
                Operation::Revert(_) => summary.reverted += 1,
            }
        }
        summary
    }

    pub fn commands(&self) -> usize {
        self.removed + self.renamed + self.copied + self.reverted
    }
}

/// Execute `ops` in order against `workspace`.
///
/// `Announce` steps print `___ <path>` to `out`. The first failing command
/// stops the replay; commands already run are not undone.
pub fn replay<W>(
    ops: &[Operation],
    workspace: &mut W,
    out: &mut dyn Write,
) -> HgResult<ReplaySummary>
where
    W: WorkspaceOps + ?Sized,
{
    let mut summary = ReplaySummary::default();

    for op in ops {
        debug!("replaying {}", op);
        match op {
            Operation::Announce(path) => {
                writeln!(out, "___ {}", path)?;
                summary.files += 1;
            }
            Operation::Remove(path) => {
                workspace.remove(path)?;
                summary.removed += 1;
            }
            Operation::Rename { from, to } => {
                workspace.rename(from, to)?;
                summary.renamed += 1;
            }
            Operation::Copy { from, to } => {
                workspace.copy(from, to)?;
                summary.copied += 1;
            }
            Operation::Revert(path) => {
                workspace.revert(path)?;
                summary.reverted += 1;
            }
        }
    }

    Ok(summary)
}
