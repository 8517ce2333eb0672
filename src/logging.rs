use std::path::Path;

use flexi_logger::{
    detailed_format, Cleanup, Criterion, FileSpec, FlexiLoggerError, Logger, Naming, WriteMode,
};

pub const LOG_FILE_BASENAME: &str = "todo-sync";
pub const LOG_FILE_SUFFIX: &str = "log";
pub const LOG_ROTATE_SIZE_BYTES: u64 = 10 * 1024 * 1024;
pub const LOG_ROTATE_KEEP_FILES: usize = 10;

/// Picks the log specification: `TODO_SYNC_LOG`, then `RUST_LOG`, then a
/// default that keeps dependency logs at WARN while this crate stays at INFO
/// (DEBUG in debug builds).
fn resolve_log_spec(override_spec: Option<String>, rust_log: Option<String>) -> String {
    let default_spec = if cfg!(debug_assertions) {
        "warn,todo_sync=debug"
    } else {
        "warn,todo_sync=info"
    };
    override_spec
        .filter(|value| !value.trim().is_empty())
        .or_else(|| rust_log.filter(|value| !value.trim().is_empty()))
        .unwrap_or_else(|| default_spec.to_string())
}

/// File logger setup for embedding applications. The crate itself only emits
/// through the `log` facade; calling this is optional.
pub fn init_logging(log_dir: &Path) -> Result<(), FlexiLoggerError> {
    std::fs::create_dir_all(log_dir)?;

    let spec = resolve_log_spec(
        std::env::var("TODO_SYNC_LOG").ok(),
        std::env::var("RUST_LOG").ok(),
    );

    Logger::try_with_str(&spec)?
        .log_to_file(
            FileSpec::default()
                .directory(log_dir)
                .basename(LOG_FILE_BASENAME)
                .suffix(LOG_FILE_SUFFIX),
        )
        .write_mode(WriteMode::BufferAndFlush)
        .format_for_files(detailed_format)
        .rotate(
            Criterion::Size(LOG_ROTATE_SIZE_BYTES),
            Naming::Numbers,
            Cleanup::KeepLogFiles(LOG_ROTATE_KEEP_FILES),
        )
        .start()?;

    log::info!(
        "logger initialized dir={} spec={spec}",
        log_dir.display()
    );
    Ok(())
}
