use crate::cli::Cli;
use crate::error::UsageError;
use crate::fetch::DiffSource;
use anyhow::{Context, Result};
use hgimport_core::Config;
use hgimport_hg::{
    ensure_workspace_root, import_args, operation_args, replay, HgCli, ReplaySummary,
    WorkspaceOps,
};
use hgimport_markers::{scan_diff, Operation, Pairing};
use std::io::Write;
use std::path::PathBuf;
use tracing::{info, warn};

/// Everything one import run needs, resolved from CLI and config
#[derive(Debug, Clone)]
pub struct ImportRequest {
    pub url: String,
    pub force: bool,
    pub dry_run: bool,
    pub pairing: Pairing,
    pub executable: String,
    /// Directory that must be the workspace root; `None` skips the check
    pub workspace_root: Option<PathBuf>,
    pub workspace_marker: String,
}

impl ImportRequest {
    pub fn resolve(cli: &Cli, config: &Config, cwd: PathBuf) -> Result<Self> {
        let url = cli.url.clone().ok_or(UsageError::MissingUrl)?;
        let hg = config.hg();

        let pairing = if cli.lenient {
            Pairing::Lenient
        } else {
            config
                .scan()
                .pairing
                .parse::<Pairing>()
                .context("Invalid [scan] pairing in config")?
        };

        Ok(Self {
            url,
            force: cli.force,
            dry_run: cli.dry_run,
            pairing,
            executable: cli.hg.clone().unwrap_or(hg.executable),
            workspace_root: (!cli.no_workspace_check).then_some(cwd),
            workspace_marker: hg.workspace_marker,
        })
    }
}

/// What a run did, or would have done for a dry run
#[derive(Debug)]
pub struct ImportReport {
    pub operations: Vec<Operation>,
    pub summary: ReplaySummary,
}

/// Check the workspace, import the patch, then replay its file metadata.
///
/// The diff is only fetched and scanned after `hg import` succeeded, and a
/// diff that fails to scan is rejected before any replay command runs.
pub fn execute(
    request: &ImportRequest,
    workspace: &mut dyn WorkspaceOps,
    source: &dyn DiffSource,
    out: &mut dyn Write,
) -> Result<ImportReport> {
    if let Some(dir) = &request.workspace_root {
        if let Err(e) = ensure_workspace_root(dir, &request.workspace_marker) {
            warn!("{}", e);
            return Err(UsageError::NotWorkspaceRoot.into());
        }
    }

    if request.dry_run {
        return plan(request, source, out);
    }

    workspace
        .import(&request.url, request.force)
        .context("Failed to import patch")?;

    let diff = source.fetch(&request.url)?;
    let operations = scan_diff(&diff, request.pairing)
        .context("Patch was imported, but its rename/copy/delete markers could not be replayed")?;
    let summary =
        replay(&operations, workspace, out).context("Failed to replay file operations")?;

    info!(
        files = summary.files,
        removed = summary.removed,
        renamed = summary.renamed,
        copied = summary.copied,
        "import complete"
    );
    Ok(ImportReport {
        operations,
        summary,
    })
}

fn plan(
    request: &ImportRequest,
    source: &dyn DiffSource,
    out: &mut dyn Write,
) -> Result<ImportReport> {
    let hg = HgCli::new(request.executable.as_str());
    let diff = source.fetch(&request.url)?;
    let operations = scan_diff(&diff, request.pairing).context("Failed to scan diff markers")?;

    let import = import_args(&request.url, request.force);
    writeln!(out, "{}", hg.command_line(&import))?;
    for op in &operations {
        match (op, operation_args(op)) {
            (_, Some(args)) => writeln!(out, "{}", hg.command_line(&args))?,
            (Operation::Announce(path), None) => writeln!(out, "___ {}", path)?,
            (_, None) => {}
        }
    }

    let summary = ReplaySummary::tally(&operations);
    Ok(ImportReport {
        operations,
        summary,
    })
}
