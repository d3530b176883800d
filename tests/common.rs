#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn gt() -> Command {
    cargo_bin_cmd!("getime")
}

/// Unique config path inside the system temp dir, removed if it exists
pub fn setup_test_config(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_getime.conf", name));
    let cfg_path = path.to_string_lossy().to_string();
    fs::remove_file(&cfg_path).ok();
    cfg_path
}

/// Write `content` as the config file for test `name` and return its path
pub fn write_test_config(name: &str, content: &str) -> String {
    let cfg_path = setup_test_config(name);
    fs::write(&cfg_path, content).expect("write test config");
    cfg_path
}
