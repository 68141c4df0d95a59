use thiserror::Error;

/// Failures reported to the user as plain one-line messages on stdout
#[derive(Error, Debug)]
pub enum UsageError {
    #[error("missing code review URL")]
    MissingUrl,

    #[error("must be run from the root directory of the hg workspace")]
    NotWorkspaceRoot,
}
