//! tracing subscriber setup. Logs go to stderr so command output stays clean.

use crate::config::Config;
use crate::ui::messages::color_enabled;
use tracing_subscriber::EnvFilter;

/// Level precedence: RUST_LOG, then `--verbose` (debug), then the config file.
pub fn init_logging(cfg: &Config, verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = if verbose { "debug" } else { cfg.log_level.as_str() };
        EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("warn"))
    });

    // A second init (e.g. several runs in one test process) is not an error.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true)
        .with_ansi(color_enabled())
        .with_writer(std::io::stderr)
        .try_init();
}
