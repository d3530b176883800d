use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::config::ConfigLogic;
use crate::errors::AppResult;
use crate::ui::messages::info;
use std::path::Path;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, path: &Path, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        edit_config,
        editor,
    } = cmd
    {
        if !path.exists() {
            info(format!(
                "No configuration file at {} (defaults in use, run `getime init`)",
                path.display()
            ));
            if *print_config {
                println!("{}", serde_yaml::to_string(cfg)?);
            }
            return Ok(());
        }

        if *print_config {
            ConfigLogic::print(path)?;
        }

        if *check {
            ConfigLogic::check(path)?;
        }

        if *edit_config {
            ConfigLogic::edit(path, editor.as_deref())?;
        }
    }

    Ok(())
}
