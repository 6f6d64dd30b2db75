//! Tracing/logging setup shared by the workspace binaries.

use tracing_subscriber::EnvFilter;

/// Initialize process-wide tracing.
///
/// Filtering comes from `RUST_LOG`, defaulting to `info`. Both binaries here
/// are local developer tools, so output is compact single-line text rather
/// than structured JSON. Safe to call multiple times; subsequent calls
/// become no-ops.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .try_init();
}
