// src/log.rs
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{fmt::time::uptime, EnvFilter};

use crate::config::consts::LOG_ENV;

/// Default filter from the CLI flags; `COURSE_SCHED_LOG` wins when set.
pub fn level_for(quiet: bool, verbose: bool) -> &'static str {
    if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    }
}

/// Install the global subscriber. Lines go to stderr, or are appended to
/// `log_file` (plain text, uptime stamps) when one is given.
pub fn init(level: &str, log_file: Option<&Path>) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(level));
    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(false);

    match log_file {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            builder
                .with_ansi(false)
                .with_timer(uptime())
                .with_writer(Mutex::new(file))
                .try_init()
        }
        None => builder.with_writer(std::io::stderr).try_init(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_pick_level() {
        assert_eq!(level_for(true, true), "error");
        assert_eq!(level_for(false, true), "debug");
        assert_eq!(level_for(false, false), "warn");
    }
}
