//! Diagnostic logging
//!
//! The bridge logs through the `log` facade. Hosts that have no logger of
//! their own can install `env_logger` with [`init`]; the filter is read from
//! `APPKIT_EXTENSIONS_LOG` using the usual `env_logger` syntax.

use log::debug;

/// Environment variable holding the log filter
pub const LOG_ENV: &str = "APPKIT_EXTENSIONS_LOG";

/// Filter used when `LOG_ENV` is unset
pub const DEFAULT_FILTER: &str = "warn";

/// Install `env_logger` as the global logger
///
/// Returns `false` if a logger was already installed, by an earlier call or
/// by the host. That is not an error.
pub fn init() -> bool {
    let installed = env_logger::Builder::from_env(
        env_logger::Env::new().filter_or(LOG_ENV, DEFAULT_FILTER),
    )
    .try_init()
    .is_ok();

    if installed {
        debug!("Logging initialized from {}", LOG_ENV);
    }
    installed
}
