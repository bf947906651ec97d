//! Logging initialization.
//!
//! Library code logs through the `log` facade only; the binary (and any
//! embedding application) decides the sink by calling [`init`].

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Initialize the process-wide logger.
///
/// `RUST_LOG` takes precedence when set; otherwise the default filter is
/// `info`, or `debug` when `verbose` is requested. Repeated initialization
/// is ignored so tests may call this freely.
pub fn init(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut builder = Builder::from_env(Env::default().default_filter_or(level.to_string()));
    let _ = builder.try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        init(false);
        init(true);
        log::debug!("logger initialized twice without panicking");
    }
}
