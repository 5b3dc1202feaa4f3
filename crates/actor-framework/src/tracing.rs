//! # Tracing Setup
//!
//! One call at process start installs a compact `tracing-subscriber` formatter. The actor
//! loop already tags every event with `entity_type`, so module paths are left out.
//!
//! ```bash
//! RUST_LOG=info cargo run      # lifecycle events only
//! RUST_LOG=debug cargo run     # full request payloads
//! ```

use tracing_subscriber::EnvFilter;

/// Installs the global subscriber.
///
/// `RUST_LOG` wins when set; otherwise `default_filter` (e.g. `"info,backoffice=debug"`) is
/// used. Calling this twice is harmless: the second install is ignored, which keeps test
/// binaries that share a process happy.
pub fn setup_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .try_init();
}
