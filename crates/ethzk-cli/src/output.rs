use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

static JSON_MODE: AtomicBool = AtomicBool::new(false);

pub fn set_json_mode(enabled: bool) {
    JSON_MODE.store(enabled, Ordering::Relaxed);
}

pub fn is_json() -> bool {
    JSON_MODE.load(Ordering::Relaxed)
}

/// Human-readable lines go to stderr and are dropped under `--json`.
fn human(line: impl std::fmt::Display) {
    if !is_json() {
        eprintln!("{line}");
    }
}

pub fn note(msg: &str) {
    human(msg);
}

/// A closing line: green when things went as expected, yellow otherwise.
pub fn status(ok: bool, msg: &str) {
    if ok {
        human(msg.green());
    } else {
        human(msg.yellow());
    }
}

pub fn label(key: &str, val: &str) {
    human(format_args!("{} {}", format!("{key}:").bold(), val));
}

pub fn verdict(valid: bool) -> String {
    if valid {
        "valid".green().bold().to_string()
    } else {
        "invalid".red().bold().to_string()
    }
}

pub fn json_output(value: serde_json::Value) {
    match serde_json::to_string_pretty(&value) {
        Ok(s) => println!("{s}"),
        Err(_) => println!("{value}"),
    }
}

/// Spinner for one slow step (setup, proving). Hidden under `--json`.
pub fn spinner(msg: &str) -> ProgressBar {
    if is_json() {
        return ProgressBar::hidden();
    }
    let style = ProgressStyle::with_template("{spinner:.cyan} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏");
    let pb = ProgressBar::new_spinner().with_style(style);
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

pub fn fail_with_hint(error: &str, hint: &str) -> anyhow::Error {
    anyhow::anyhow!("{}\n{} {}", error.red(), "hint:".bold(), hint)
}
