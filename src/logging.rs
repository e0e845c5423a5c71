//! Tracing setup for the scanner binary.
//!
//! The subscriber is only installed when `SCHEMATIC_LOG` (or `RUST_LOG`) is
//! set, e.g. `SCHEMATIC_LOG=trace` to see every digit run and gear candidate.
//! Output goes to stderr so stdout only carries the report.

use tracing_subscriber::EnvFilter;

/// Build an `EnvFilter` from `SCHEMATIC_LOG`, falling back to `RUST_LOG`.
fn build_filter() -> EnvFilter {
    if let Ok(val) = std::env::var("SCHEMATIC_LOG") {
        EnvFilter::builder().parse_lossy(val)
    } else {
        EnvFilter::from_default_env()
    }
}

/// Initialise the global tracing subscriber, if logging was requested.
pub fn init_tracing() {
    let requested =
        std::env::var_os("SCHEMATIC_LOG").is_some() || std::env::var_os("RUST_LOG").is_some();
    if !requested {
        return;
    }

    tracing_subscriber::fmt()
        .with_env_filter(build_filter())
        .with_writer(std::io::stderr)
        .init();
}
