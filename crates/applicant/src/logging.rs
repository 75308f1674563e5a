use std::fs::File;

use color_eyre::Result;
use lazy_static::lazy_static;
use tracing_error::ErrorLayer;
use tracing_subscriber::{
    self, Layer, filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt,
};

use crate::config::get_data_dir;

lazy_static! {
    static ref LOG_ENV: String =
        format!("{}_LOG_LEVEL", env!("CARGO_CRATE_NAME").to_uppercase());
    static ref LOG_FILE: String = format!("{}.log", env!("CARGO_PKG_NAME"));
}

/// Initialize tracing with a file writer in the data dir.
///
/// Nothing is ever written to the terminal here; the TUI owns it. Filtering
/// follows `APPLICANT_LOG_LEVEL`, then `RUST_LOG`, then the crate default.
pub fn init() -> Result<()> {
    let directory = get_data_dir();
    std::fs::create_dir_all(directory.clone())?;
    let log_path = directory.join(LOG_FILE.clone());
    let log_file = File::create(log_path)?;

    let env_filter = EnvFilter::builder().with_default_directive(tracing::Level::INFO.into());
    // RUST_LOG wins if set; otherwise fall back to APPLICANT_LOG_LEVEL.
    let env_filter = env_filter
        .try_from_env()
        .unwrap_or_else(|_| env_filter.with_env_var(LOG_ENV.clone()).from_env_lossy());

    let file_subscriber = fmt::layer()
        .with_file(true)
        .with_line_number(true)
        .with_writer(log_file)
        .with_target(false)
        .with_ansi(false)
        .with_filter(env_filter);

    tracing_subscriber::registry()
        .with(file_subscriber)
        .with(ErrorLayer::default())
        .init();

    Ok(())
}
