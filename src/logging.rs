// Tracing for the driver itself. Diagnostic records never go through here.

use env_logger::{Builder, Env, Target};

/// Environment variable holding the `env_logger` filter for the driver.
pub const LOG_ENV: &str = "HELLOWORLD_LOG";

/// Installs the `env_logger` backend. Off unless `HELLOWORLD_LOG` is set.
///
/// Safe to call more than once; later calls are ignored.
pub fn init() {
    let env = Env::new().filter_or(LOG_ENV, "off");
    let _ = Builder::from_env(env)
        .target(Target::Stderr)
        .format_timestamp(None)
        .try_init();
}

#[cfg(debug_assertions)]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        log::debug!($($arg)*);
    };
}

#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {{}};
}
