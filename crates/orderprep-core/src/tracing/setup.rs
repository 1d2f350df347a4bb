//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

const DEFAULT_FILTER: &str = "orderprep_core=info,orderprep_storage=info,orderprep_upgrade=info";

/// Initialize the orderprep tracing/logging system.
///
/// Reads `ORDERPREP_LOG` for per-crate log levels, e.g.
/// `ORDERPREP_LOG=orderprep_upgrade=debug,orderprep_storage=warn`.
///
/// Falls back to info for every orderprep crate if `ORDERPREP_LOG` is not set or is invalid.
///
/// Idempotent: only the first call installs the subscriber.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("ORDERPREP_LOG")
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .init();
    });
}
