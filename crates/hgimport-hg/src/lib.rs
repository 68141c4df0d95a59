//! Mercurial workspace operations for hgimport
//!
//! - [`WorkspaceOps`] is the capability the importer drives
//! - [`HgCli`] implements it by running the `hg` executable
//! - [`replay`] executes scanned operations against any implementation

mod error;
mod ops;
mod replay;
mod workspace;

pub use error::{HgError, HgResult};
pub use ops::{import_args, operation_args, HgCli, WorkspaceOps};
pub use replay::{replay, ReplaySummary};
pub use workspace::ensure_workspace_root;
