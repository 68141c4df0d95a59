use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "hgimport",
    version,
    about = "Apply a code review diff to an hg workspace and replay its renames, copies and deletes"
)]
pub struct Cli {
    /// Code review diff URL (a local patch path also works)
    pub url: Option<String>,

    /// Force the import, skipping hg's uncommitted-changes check
    #[arg(short = 'f', long)]
    pub force: bool,

    /// Fetch and scan the diff, print the hg commands, run nothing
    #[arg(long)]
    pub dry_run: bool,

    /// Allow rename/copy targets to reuse a source seen earlier in the diff
    #[arg(long)]
    pub lenient: bool,

    /// Do not require the current directory to be the workspace root
    #[arg(long)]
    pub no_workspace_check: bool,

    /// Mercurial executable
    #[arg(long, env = "HGIMPORT_HG")]
    pub hg: Option<String>,

    /// Specify configuration file path
    #[arg(long, env = "HGIMPORT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log level
    #[arg(long, env = "HGIMPORT_LOG_LEVEL")]
    pub log_level: Option<String>,
}
