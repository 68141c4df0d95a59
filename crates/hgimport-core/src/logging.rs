//! Tracing subscriber setup

use crate::error::{CoreError, CoreResult};
use std::path::Path;
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;

/// Parse a level name such as "warn" or "DEBUG".
pub fn parse_level(level: &str) -> CoreResult<Level> {
    level
        .trim()
        .parse::<Level>()
        .map_err(|_| CoreError::InvalidLogLevel(level.to_string()))
}

/// Install the global subscriber.
///
/// Logs go to stderr unless `file` is given, in which case they are appended
/// to that file through a non-blocking writer. The returned guard must be
/// kept alive until exit so buffered lines are flushed.
pub fn init_logging(level: &str, file: Option<&Path>) -> CoreResult<Option<WorkerGuard>> {
    let level = parse_level(level)?;

    match file {
        Some(path) => {
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new("."));
            let name = path
                .file_name()
                .ok_or_else(|| CoreError::Logging(format!("not a file path: {}", path.display())))?;

            let appender = tracing_appender::rolling::never(dir, name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::fmt()
                .with_max_level(level)
                .with_writer(writer)
                .with_ansi(false)
                .try_init()
                .map_err(|e| CoreError::Logging(e.to_string()))?;
            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::fmt()
                .with_max_level(level)
                .with_writer(std::io::stderr)
                .with_target(false)
                .try_init()
                .map_err(|e| CoreError::Logging(e.to_string()))?;
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("warn").unwrap(), Level::WARN);
        assert_eq!(parse_level("DEBUG").unwrap(), Level::DEBUG);
        assert_eq!(parse_level(" info ").unwrap(), Level::INFO);
    }

    #[test]
    fn test_parse_level_rejects_unknown() {
        let err = parse_level("loud").unwrap_err();
        assert!(matches!(err, CoreError::InvalidLogLevel(ref s) if s == "loud"));
    }
}
