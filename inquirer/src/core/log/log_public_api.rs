// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! This is a thin wrapper around [`TracingConfig`]. You can use the function in this
//! module, or just use [`TracingConfig::install_global()`] directly, along with the
//! [`tracing::info!`], [`tracing::debug!`], etc. macros.

use super::{DEFAULT_LOG_FILE_NAME, TracingConfig, WriterConfig};

/// Logging is **DISABLED** by **default**.
///
/// If you don't call this function w/ a value other than
/// [`tracing_core::LevelFilter::OFF`], then logging won't be enabled. It won't matter
/// if you use the [`tracing::info!`], [`tracing::debug!`], etc. macros.
///
/// Log output goes to a file named `log.txt` in the current folder. Logging to stdout
/// would corrupt the widgets, since they are rendered inline in the terminal.
///
/// # Errors
///
/// Returns an error if the log file can't be created, or if a global subscriber has
/// already been installed.
pub fn try_initialize_logging_global(
    level_filter: tracing_core::LevelFilter,
) -> miette::Result<()> {
    // Early return if the level filter is off.
    if matches!(level_filter, tracing_core::LevelFilter::OFF) {
        return Ok(());
    }

    TracingConfig {
        level_filter,
        writer_config: WriterConfig::File(DEFAULT_LOG_FILE_NAME.to_string()),
    }
    .install_global()
}
