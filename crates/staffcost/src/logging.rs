use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Maximum log file size before rotation (2 MB)
const MAX_LOG_SIZE: u64 = 2 * 1024 * 1024;

/// Rotate the log by moving it aside once it grows past the limit.
/// The previous generation replaces any older `.old` file.
fn rotate_log_if_needed(log_path: &Path) -> std::io::Result<()> {
    if !log_path.exists() {
        return Ok(());
    }
    if fs::metadata(log_path)?.len() <= MAX_LOG_SIZE {
        return Ok(());
    }
    fs::rename(log_path, log_path.with_extension("log.old"))?;
    Ok(())
}

/// Initialize logging to a file in the data directory.
///
/// Logs go to `{data_dir}/staffcost.log`; when the file exceeds 2MB it is
/// rotated to `staffcost.log.old`. The level comes from the `RUST_LOG`
/// environment variable when set, otherwise from `level`.
pub fn init_logging(data_dir: &Path, level: &str) -> color_eyre::Result<()> {
    fs::create_dir_all(data_dir)?;

    let log_path = data_dir.join("staffcost.log");

    if let Err(e) = rotate_log_if_needed(&log_path) {
        eprintln!("Warning: Failed to rotate log file: {e}");
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)?;

    let default_filter = format!("staffcost={level},staffcost_core=warn");
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(Arc::new(file))
                .with_ansi(false)
                .with_target(true),
        )
        .init();

    tracing::info!("staffcost logging initialized (log_path={})", log_path.display());
    Ok(())
}
