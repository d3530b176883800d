//! User-facing status lines. Values scripts read are printed with plain
//! `println!`; these helpers decorate everything else.

use std::env;
use std::fmt;
use std::io::{self, Write};

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    Info,
    Success,
    Warning,
    Error,
}

impl Kind {
    fn color(self) -> &'static str {
        match self {
            Kind::Info => "\x1b[34m",
            Kind::Success => "\x1b[32m",
            Kind::Warning => "\x1b[33m",
            Kind::Error => "\x1b[31m",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            Kind::Info => "ℹ️",
            Kind::Success => "✅",
            Kind::Warning => "⚠️",
            Kind::Error => "❌",
        }
    }

    /// Warnings and errors go to stderr so stdout only carries results.
    fn to_stderr(self) -> bool {
        matches!(self, Kind::Warning | Kind::Error)
    }
}

/// False when `NO_COLOR` is set to a non-empty value (https://no-color.org).
pub fn color_enabled() -> bool {
    env::var_os("NO_COLOR").is_none_or(|v| v.is_empty())
}

fn line(kind: Kind, msg: &dyn fmt::Display, color: bool) -> String {
    if color {
        format!("{}{}{} {}{}", kind.color(), BOLD, kind.icon(), RESET, msg)
    } else {
        format!("{} {}", kind.icon(), msg)
    }
}

fn emit(kind: Kind, msg: &dyn fmt::Display) {
    let text = line(kind, msg, color_enabled());
    // write errors (closed pipe) are ignored
    let _ = if kind.to_stderr() {
        writeln!(io::stderr().lock(), "{}", text)
    } else {
        writeln!(io::stdout().lock(), "{}", text)
    };
}

pub fn info<T: fmt::Display>(msg: T) {
    emit(Kind::Info, &msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    emit(Kind::Success, &msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    emit(Kind::Warning, &msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    emit(Kind::Error, &msg);
}
