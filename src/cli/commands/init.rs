use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use std::path::Path;

/// Handle the `init` command
///
/// Creates the config directory (if missing) and a default configuration
/// file. An existing file is left untouched unless `--force` is given.
pub fn handle(path: &Path, force: bool) -> AppResult<()> {
    if Config::init_at(path, force)? {
        success(format!("Config file: {}", path.display()));
    } else {
        info(format!(
            "Config file already exists: {} (use --force to overwrite)",
            path.display()
        ));
    }
    Ok(())
}
