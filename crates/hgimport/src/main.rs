mod cli;
mod commands;
mod error;
mod fetch;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use commands::ImportRequest;
use error::UsageError;
use fetch::HttpSource;
use hgimport_core::{init_logging, Config};
use hgimport_hg::{HgCli, HgError};
use std::io::{self, Write};
use std::path::Path;
use tracing::debug;

fn main() {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => {}
        Err(e) => {
            let code = report(&e, &mut io::stdout(), &mut io::stderr());
            std::process::exit(code);
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    // Usage problems are reported before touching config or logging
    if cli.url.is_none() {
        return Err(UsageError::MissingUrl.into());
    }

    let config = Config::load(cli.config.as_deref())?;
    let log = config.log();
    let level = cli.log_level.clone().unwrap_or(log.level);
    let _guard = init_logging(&level, log.file.as_deref().map(Path::new))?;

    let cwd = std::env::current_dir().context("Failed to determine current directory")?;
    let request = ImportRequest::resolve(&cli, &config, cwd)?;
    debug!(?request, "resolved import request");

    let mut hg = HgCli::new(request.executable.as_str());
    debug!(executable = hg.executable(), "using hg");
    let source = HttpSource::new(&config.fetch())?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let report = commands::execute(&request, &mut hg, &source, &mut out)?;
    debug!(
        operations = report.operations.len(),
        commands = report.summary.commands(),
        "done"
    );
    Ok(())
}

/// Print the error and pick the process exit code.
///
/// Usage problems go to `out` as a bare line, everything else to `err_out`.
fn report(err: &anyhow::Error, out: &mut dyn Write, err_out: &mut dyn Write) -> i32 {
    if let Some(usage) = err.downcast_ref::<UsageError>() {
        let _ = writeln!(out, "{}", usage);
        return 1;
    }

    let _ = writeln!(err_out, "Error: {:#}", err);
    err.downcast_ref::<HgError>()
        .and_then(HgError::exit_code)
        .filter(|code| *code != 0)
        .unwrap_or(1)
}
