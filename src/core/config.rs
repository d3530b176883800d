use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use std::fs;
use std::path::Path;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    pub fn print(path: &Path) -> AppResult<()> {
        let content = fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        println!("{}", content);
        Ok(())
    }

    /// Report keys the file lacks; they fall back to their defaults.
    pub fn check(path: &Path) -> AppResult<Vec<&'static str>> {
        let content = fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        let missing = Config::missing_keys(&content)?;

        if missing.is_empty() {
            success(format!("Configuration {} is complete", path.display()));
        } else {
            for key in &missing {
                warning(format!("Missing key '{}' (default value will be used)", key));
            }
        }
        Ok(missing)
    }

    /// Open `path` in the requested editor. Only an explicit `--editor`
    /// that cannot be launched falls back to $EDITOR / $VISUAL (or the
    /// platform default); an editor that runs and exits non-zero is an error.
    pub fn edit(path: &Path, editor: Option<&str>) -> AppResult<()> {
        let default_editor = std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(target_os = "windows") {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            });

        let requested = editor.filter(|e| *e != default_editor);

        if let Some(requested) = requested {
            match Command::new(requested).arg(path).status() {
                Ok(status) => return Self::finish(requested, status.success()),
                Err(e) => warning(format!(
                    "Editor '{}' not available ({}), falling back to '{}'",
                    requested, e, default_editor
                )),
            }
        }

        let status = Command::new(&default_editor)
            .arg(path)
            .status()
            .map_err(|e| {
                AppError::Config(format!("cannot launch editor '{}': {}", default_editor, e))
            })?;
        Self::finish(&default_editor, status.success())
    }

    fn finish(editor: &str, ok: bool) -> AppResult<()> {
        if !ok {
            return Err(AppError::Config(format!(
                "editor '{}' exited with an error",
                editor
            )));
        }
        success(format!(
            "Configuration file edited successfully using '{}'",
            editor
        ));
        Ok(())
    }
}
