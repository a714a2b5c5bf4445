//! Naive recursive Fibonacci evaluation.
//!
//! [`compute`] walks the sequence by plain double recursion, so it makes
//! Θ(φⁿ) calls. Indices are accepted in `0..=MAX_INDEX`.

mod error;
mod sequence;

pub use error::FibError;
pub use sequence::{compute, MAX_INDEX};

/// Initializes a stderr `fmt` subscriber. `RUST_LOG` takes precedence over
/// `default_filter`.
pub fn init_tracing(default_filter: &str) {
    use tracing_subscriber::EnvFilter;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
