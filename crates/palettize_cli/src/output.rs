//! Terminal output helpers. Dual-mode: styled text for humans, structured JSON for machines.
//!
//! Uses:
//! - `console` for colors (respects NO_COLOR, auto-disables when piped)
//! - `comfy-table` for structured data, with truecolor swatches
//! - `indicatif` for progress/spinners

use std::sync::atomic::{AtomicBool, Ordering};

use comfy_table::{presets::UTF8_FULL, Attribute, Cell, Color, ContentArrangement, Table};
use console::style;
use indicatif::{MultiProgress, ProgressBar, ProgressDrawTarget, ProgressStyle};
use palettize_core::color::{display_color, to_rgb};
use serde::Serialize;
use serde_json::Value as JsonValue;

use crate::cli::OutputFormat;

// ── Global format flag ─────────────────────────────────────────────

static JSON_MODE: AtomicBool = AtomicBool::new(false);

pub fn init(format: OutputFormat) {
    if matches!(format, OutputFormat::Json) {
        JSON_MODE.store(true, Ordering::Relaxed);
    }
}

pub fn is_json() -> bool {
    JSON_MODE.load(Ordering::Relaxed)
}

// ── JSON envelope ──────────────────────────────────────────────────

#[derive(Serialize)]
struct Msg<'a> {
    level: &'a str,
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<&'a JsonValue>,
}

fn emit_json(level: &str, message: &str, data: Option<&JsonValue>) {
    let msg = Msg {
        level,
        message,
        data,
    };
    let json = serde_json::to_string(&msg)
        .unwrap_or_else(|_| format!("{{\"level\":\"{level}\",\"message\":{message:?}}}"));
    println!("{json}");
}

// ── Public helpers ─────────────────────────────────────────────────

pub fn header(text: &str) {
    if is_json() {
        emit_json("info", text, None);
    } else {
        println!("{}", style(text).bold().cyan());
    }
}

pub fn success(text: &str) {
    if is_json() {
        emit_json("success", text, None);
    } else {
        println!("{} {}", style("✓").green(), style(text).bright());
    }
}

pub fn error(text: &str) {
    if is_json() {
        let msg = Msg {
            level: "error",
            message: text,
            data: None,
        };
        let json = serde_json::to_string(&msg).unwrap_or_default();
        eprintln!("{json}");
    } else {
        eprintln!("{} {}", style("✗").red(), style(text).bright());
    }
}

pub fn warning(text: &str) {
    if is_json() {
        emit_json("warning", text, None);
    } else {
        println!("{} {}", style("!").yellow(), style(text).bright());
    }
}

pub fn dim(text: &str) {
    if is_json() {
        emit_json("info", text, None);
    } else {
        println!("{}", style(text).dim());
    }
}

/// Emit an arbitrary serializable value as structured output. Text mode
/// prints nothing; callers render their own tables.
pub fn data<T: Serialize>(label: &str, value: &T) {
    if is_json() {
        let json_val = serde_json::to_value(value).unwrap_or(JsonValue::Null);
        emit_json("data", label, Some(&json_val));
    }
}

/// Print a key-value pair with styled key.
pub fn kv(key: &str, value: &str) {
    if is_json() {
        let data = serde_json::json!({ key: value });
        emit_json("info", key, Some(&data));
    } else {
        println!("  {} {}", style(key).cyan().bold(), value);
    }
}

// ── Tables ─────────────────────────────────────────────────────────

/// Create a styled table for listing items.
pub fn table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Add a header row to the table.
pub fn table_header(table: &mut Table, columns: &[&str]) {
    table.set_header(
        columns
            .iter()
            .map(|c| Cell::new(c).fg(Color::Cyan).add_attribute(Attribute::Bold))
            .collect::<Vec<_>>(),
    );
}

/// Print a table. JSON mode is a no-op; emit the rows with [`data`].
pub fn table_print(table: &Table) {
    if !is_json() {
        println!("{table}");
    }
}

/// A cell showing `color` as a truecolor block followed by its hex value.
pub fn swatch(color: &str) -> Cell {
    swatch_labeled(color, color)
}

/// A truecolor block for `color` followed by `label`.
pub fn swatch_labeled(color: &str, label: &str) -> Cell {
    let rgb = to_rgb(&display_color(color));
    Cell::new(format!("██ {label}")).fg(Color::Rgb {
        r: rgb.r(),
        g: rgb.g(),
        b: rgb.b(),
    })
}

// ── Spinners ───────────────────────────────────────────────────────

fn hidden_in_json(bar: ProgressBar) -> ProgressBar {
    if is_json() {
        bar.set_draw_target(ProgressDrawTarget::hidden());
    }
    bar
}

/// Container for a spinner and bars shown together. Hidden in JSON mode.
pub fn multi_progress() -> MultiProgress {
    let multi = MultiProgress::new();
    if is_json() {
        multi.set_draw_target(ProgressDrawTarget::hidden());
    }
    multi
}

/// Create a spinner for async operations.
pub fn spinner(message: &str) -> ProgressBar {
    let spinner = hidden_in_json(ProgressBar::new_spinner());
    if let Ok(template) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
        spinner.set_style(template);
    }
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(std::time::Duration::from_millis(80));
    spinner
}

/// Create a progress bar over `total` items. The bar's message shows the
/// item last finished.
pub fn progress(total: u64, label: &str) -> ProgressBar {
    let bar = hidden_in_json(ProgressBar::new(total));
    if let Ok(template) =
        ProgressStyle::default_bar().template("{prefix} [{bar:30.cyan/blue}] {pos}/{len} {wide_msg:.dim}")
    {
        bar.set_style(template.progress_chars("█▓░"));
    }
    bar.set_prefix(label.to_string());
    bar
}

/// Finish spinner with success message.
pub fn spinner_success(spinner: &ProgressBar, message: &str) {
    spinner.finish_and_clear();
    success(message);
}

/// Finish spinner with error message.
pub fn spinner_error(spinner: &ProgressBar, message: &str) {
    spinner.abandon();
    if is_json() {
        emit_json("error", message, None);
    } else {
        eprintln!("{} {}", style("✗").red(), message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_hidden_in_json_mode() {
        init(OutputFormat::Json);
        let multi = multi_progress();
        let spinner = multi.add(spinner("working"));
        let bar = multi.add(progress(3, "Downloading"));
        assert!(spinner.is_hidden());
        assert!(bar.is_hidden());
        spinner.finish_and_clear();
    }
}
