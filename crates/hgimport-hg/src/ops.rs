use crate::error::{HgError, HgResult};
use hgimport_markers::Operation;
use std::process::Command;
use tracing::{debug, info};

/// State-changing operations on a version-controlled working copy
pub trait WorkspaceOps {
    /// Apply the patch at `url` without committing it
    fn import(&mut self, url: &str, force: bool) -> HgResult<()>;

    fn remove(&mut self, path: &str) -> HgResult<()>;

    fn rename(&mut self, from: &str, to: &str) -> HgResult<()>;

    fn copy(&mut self, from: &str, to: &str) -> HgResult<()>;

    /// Discard uncommitted changes to `path` without keeping a backup
    fn revert(&mut self, path: &str) -> HgResult<()>;
}

/// Arguments for `hg import`
pub fn import_args(url: &str, force: bool) -> Vec<String> {
    let mut args = vec!["import".to_string()];
    if force {
        args.push("--force".to_string());
    }
    args.push("--no-commit".to_string());
    args.push(url.to_string());
    args
}

/// Arguments for the hg command carrying out `op`; `None` for diagnostics
pub fn operation_args(op: &Operation) -> Option<Vec<String>> {
    let args: Vec<&str> = match op {
        Operation::Announce(_) => return None,
        Operation::Remove(path) => vec!["remove", "--force", path.as_str()],
        Operation::Rename { from, to } => vec!["rename", "--force", from.as_str(), to.as_str()],
        Operation::Copy { from, to } => vec!["copy", from.as_str(), to.as_str()],
        Operation::Revert(path) => vec!["revert", "--no-backup", path.as_str()],
    };
    Some(args.into_iter().map(str::to_string).collect())
}

/// Runs the Mercurial executable with inherited stdio
#[derive(Debug, Clone)]
pub struct HgCli {
    executable: String,
}

impl HgCli {
    pub fn new(executable: impl Into<String>) -> Self {
        Self {
            executable: executable.into(),
        }
    }

    pub fn executable(&self) -> &str {
        &self.executable
    }

    /// Render a command line for messages and dry runs
    pub fn command_line(&self, args: &[String]) -> String {
        let mut line = self.executable.clone();
        for arg in args {
            line.push(' ');
            line.push_str(arg);
        }
        line
    }

    fn run(&self, args: Vec<String>) -> HgResult<()> {
        let command = self.command_line(&args);
        info!("running {}", command);

        let mut cmd = Command::new(&self.executable);
        cmd.args(&args);

        let status = cmd.status().map_err(|source| HgError::Spawn {
            command: command.clone(),
            source,
        })?;

        if status.success() {
            debug!("{} succeeded", command);
            Ok(())
        } else {
            Err(HgError::Failed {
                command,
                code: status.code(),
            })
        }
    }

    fn run_operation(&self, op: &Operation) -> HgResult<()> {
        match operation_args(op) {
            Some(args) => self.run(args),
            None => Ok(()),
        }
    }
}

impl WorkspaceOps for HgCli {
    fn import(&mut self, url: &str, force: bool) -> HgResult<()> {
        self.run(import_args(url, force))
    }

    fn remove(&mut self, path: &str) -> HgResult<()> {
        self.run_operation(&Operation::Remove(path.to_string()))
    }

    fn rename(&mut self, from: &str, to: &str) -> HgResult<()> {
        self.run_operation(&Operation::Rename {
            from: from.to_string(),
            to: to.to_string(),
        })
    }

    fn copy(&mut self, from: &str, to: &str) -> HgResult<()> {
        self.run_operation(&Operation::Copy {
            from: from.to_string(),
            to: to.to_string(),
        })
    }

    fn revert(&mut self, path: &str) -> HgResult<()> {
        self.run_operation(&Operation::Revert(path.to_string()))
    }
}
