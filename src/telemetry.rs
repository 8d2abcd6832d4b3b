/// Initializes the tracing/logging infrastructure for the application.
///
/// Structured logging via the `tracing` crate with:
/// - **Environment-based filtering**: controlled via the `RUST_LOG` variable
/// - **Pretty formatting**: human-readable output with timestamps and levels
///
/// # Environment Variables
///
/// Set `RUST_LOG` to control verbosity:
/// - `RUST_LOG=info` - lifecycle events (init, launch, completion)
/// - `RUST_LOG=debug` - per-user admission and outcome events
/// - `RUST_LOG=box_office=debug` - debug only for this crate
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
}
