use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HgError {
    #[error("Failed to execute {command}: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{command} failed with {}", exit_status_text(.code))]
    Failed { command: String, code: Option<i32> },

    #[error("{} is not a workspace root (no {marker} directory)", .dir.display())]
    NotWorkspaceRoot { dir: PathBuf, marker: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl HgError {
    /// Exit code of the failed command, when it exited normally
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            HgError::Failed { code, .. } => *code,
            _ => None,
        }
    }
}

fn exit_status_text(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {}", code),
        None => "no exit code (terminated by signal)".to_string(),
    }
}

pub type HgResult<T> = Result<T, HgError>;
