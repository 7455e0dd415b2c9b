use crossterm::style::Stylize;
use std::sync::OnceLock;

use crate::config::Theme;

static THEME: OnceLock<Theme> = OnceLock::new();

/// Resolves the theme for the rest of the run. Later calls are ignored;
/// code that prints before `init` (argument errors, config failures)
/// falls back to the default theme.
pub fn init(theme: Theme) {
    let _ = THEME.set(theme);
}

fn theme() -> Theme {
    THEME.get().copied().unwrap_or_default()
}

enum Tone {
    Success,
    Info,
    Warning,
    Error,
}

fn mark(glyph: &str, tone: Tone) -> String {
    match theme() {
        Theme::NoColor => glyph.to_string(),
        Theme::Dark => match tone {
            Tone::Success => glyph.green().to_string(),
            Tone::Info => glyph.cyan().to_string(),
            Tone::Warning => glyph.yellow().to_string(),
            Tone::Error => glyph.red().to_string(),
        },
        Theme::Light => match tone {
            Tone::Success => glyph.dark_green().to_string(),
            Tone::Info => glyph.dark_cyan().to_string(),
            Tone::Warning => glyph.dark_yellow().to_string(),
            Tone::Error => glyph.dark_red().to_string(),
        },
    }
}

pub fn plain(msg: &str) {
    println!("{}", msg);
}

pub fn success(msg: &str) {
    println!("{} {}", mark("✔", Tone::Success), msg);
}

pub fn info(msg: &str) {
    println!("{} {}", mark("ℹ", Tone::Info), msg);
}

pub fn warn(msg: &str) {
    println!("{} {}", mark("⚠", Tone::Warning), msg);
}

pub fn error(msg: &str) {
    println!("{} {}", mark("✖", Tone::Error), msg);
}

/// `[n/total]` progress header before each phase of the run.
pub fn step(current: usize, total: usize, msg: &str) {
    println!(
        "\n{} {}",
        mark(&format!("[{}/{}]", current, total), Tone::Info),
        bold(msg)
    );
}

pub fn question_mark() -> String {
    mark("?", Tone::Info)
}

pub fn bold(text: &str) -> String {
    match theme() {
        Theme::NoColor => text.to_string(),
        _ => text.bold().to_string(),
    }
}

pub fn dim(text: &str) -> String {
    match theme() {
        Theme::NoColor => text.to_string(),
        _ => text.dim().to_string(),
    }
}

pub fn cyan(text: &str) -> String {
    match theme() {
        Theme::NoColor => text.to_string(),
        Theme::Dark => text.cyan().to_string(),
        Theme::Light => text.dark_cyan().to_string(),
    }
}
