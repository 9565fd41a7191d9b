//! Logger initialization.
//!
//! Every record goes through the `log` facade, `env_logger` writes them to standard error.
//! The filter follows `RUST_LOG` and falls back to `info`.

use std::sync::Once;

static INIT: Once = Once::new();

/// Initializes the global logger. Subsequent calls are ignored.
pub fn init() {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        match ::std::env::var("RUST_LOG") {
            Ok(filters) => {
                builder.parse_filters(&filters);
            }
            Err(_) => {
                builder.filter_level(log::LevelFilter::Info);
            }
        }

        // Tests may have installed a logger already.
        if builder.try_init().is_ok() {
            debug!("logging initialized.");
        }
    });
}
