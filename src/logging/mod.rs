pub mod config;
pub mod layers;

pub use layers::console::ConsoleOutput;

use crate::logging::config::LoggingConfig;
use crate::logging::layers::console;
use crate::Result;
use anyhow::{anyhow, Context};
use std::env;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::registry::Registry;

static LOGGER_INITIALIZED: AtomicBool = AtomicBool::new(false);

const DEBUG_LEVEL: &str = "debug";

/// Handle describing the sinks chosen during initialization.
#[derive(Debug)]
pub struct LoggingGuard {
    console_output: ConsoleOutput,
    level: String,
}

impl LoggingGuard {
    /// Returns the console output configuration used during initialization.
    pub fn console_output(&self) -> ConsoleOutput {
        self.console_output
    }

    /// Returns the filter directive the subscriber was built with.
    pub fn level(&self) -> &str {
        &self.level
    }
}

/// Initialize tracing for one CLI invocation.
///
/// `--debug` forces the `debug` level; otherwise `RUST_LOG` wins over the
/// configured default. Console output goes to stderr unless configured otherwise,
/// because stdout carries the rendered template. Errors when called twice.
pub fn init(debug: bool) -> Result<LoggingGuard> {
    if LOGGER_INITIALIZED
        .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
        .is_err()
    {
        return Err(anyhow!("logging already initialized"));
    }

    let config_dir = env::current_dir().ok();
    let config = LoggingConfig::load(config_dir.as_deref())?;
    let level = if debug {
        DEBUG_LEVEL.to_string()
    } else {
        config.default_level.clone()
    };

    let env_filter = if debug {
        EnvFilter::try_new(&level)
    } else {
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&level))
    };
    let env_filter = env_filter.context("failed to configure tracing level")?;

    let console_output = config.console_output.unwrap_or_default();
    let console_layer = console::console_layer::<Registry>(console_output);

    tracing_subscriber::registry()
        .with(console_layer)
        .with(env_filter)
        .try_init()
        .context("failed to install tracing subscriber")?;

    Ok(LoggingGuard {
        console_output,
        level,
    })
}

#[cfg(test)]
/// Reset the initialization guard so tests can reconfigure logging multiple times.
pub fn reset_for_tests() {
    LOGGER_INITIALIZED.store(false, Ordering::SeqCst);
}
