//! Tracing setup
//!
//! Logs go to a file (`snippets.log` unless configured otherwise) at debug
//! level, or to stderr when the log path is `-`. `RUST_LOG` overrides the
//! default filter.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Log path that selects stderr instead of a file
pub const STDERR: &str = "-";

/// Where log records are written
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget<'a> {
    File(&'a Path),
    Stderr,
}

impl<'a> LogTarget<'a> {
    pub fn from_path(path: &'a Path) -> Self {
        if path.as_os_str() == STDERR {
            LogTarget::Stderr
        } else {
            LogTarget::File(path)
        }
    }
}

/// Default filter directive when `RUST_LOG` is unset
pub fn default_directive(target: &LogTarget<'_>, verbose: bool) -> &'static str {
    match (target, verbose) {
        (LogTarget::File(_), _) => "debug",
        (LogTarget::Stderr, true) => "debug",
        (LogTarget::Stderr, false) => "warn",
    }
}

/// Install the global subscriber
pub fn init(log_path: &Path, verbose: bool) -> anyhow::Result<()> {
    let target = LogTarget::from_path(log_path);
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(&target, verbose)));

    match target {
        LogTarget::File(path) => {
            crate::config::ensure_parent_dir(path)?;
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            tracing_subscriber::registry()
                .with(fmt::layer().with_writer(Arc::new(file)).with_ansi(false))
                .with(filter)
                .try_init()?;
        }
        LogTarget::Stderr => {
            tracing_subscriber::registry()
                .with(fmt::layer().with_writer(std::io::stderr))
                .with(filter)
                .try_init()?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dash_selects_stderr() {
        assert_eq!(LogTarget::from_path(Path::new("-")), LogTarget::Stderr);
        assert_eq!(
            LogTarget::from_path(Path::new("snippets.log")),
            LogTarget::File(Path::new("snippets.log"))
        );
    }

    #[test]
    fn file_logging_defaults_to_debug() {
        let file = LogTarget::File(Path::new("snippets.log"));
        assert_eq!(default_directive(&file, false), "debug");
        assert_eq!(default_directive(&LogTarget::Stderr, false), "warn");
        assert_eq!(default_directive(&LogTarget::Stderr, true), "debug");
    }
}
