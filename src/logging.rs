//! Logger setup. Verbosity is controlled through `RUST_LOG`.

use env_logger::Env;

/// Initialize the global logger. Defaults to `warn` so game output stays
/// clean unless `RUST_LOG` asks for more.
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or("warn")).try_init();
}
