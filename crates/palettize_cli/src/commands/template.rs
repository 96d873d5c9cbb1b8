//! `palettize template`: abstract a theme's colors into slot placeholders.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::Cell;
use palettize_core::{format_template, load_palette, load_theme, write_text, PalettizeConfig, Templatizer};

use crate::output;

pub fn handle(
    config: &PalettizeConfig,
    theme: Option<PathBuf>,
    palette: Option<PathBuf>,
    out: Option<PathBuf>,
    threshold: Option<f64>,
) -> Result<()> {
    let theme_path = theme.unwrap_or_else(|| config.default_theme());
    let palette_path = palette.unwrap_or_else(|| config.default_palette());
    let out_path = out.unwrap_or_else(|| config.default_template_output());
    let threshold = threshold.or(config.threshold);

    output::dim(&format!("Loading theme: {}", theme_path.display()));
    let theme = load_theme(&theme_path)?;
    output::dim(&format!("Loading palette: {}", palette_path.display()));
    let palette = load_palette(&palette_path)?;
    if let Some(t) = threshold.filter(|t| *t > 0.0) {
        output::dim(&format!("Fuzzy matching enabled (Delta E ≤ {t})"));
    }

    let template = Templatizer::new(&palette).threshold(threshold).generate(&theme);
    write_text(&out_path, &format_template(&template.document)?)?;

    let report = &template.report;
    output::success(&format!("Template written to {}", out_path.display()));
    output::kv("Exact matches:", &report.exact.to_string());
    output::kv("Similar matches:", &report.fuzzy.len().to_string());
    output::kv("Left as literal:", &report.untouched.to_string());
    output::data("report", report);

    if !report.fuzzy.is_empty() && !output::is_json() {
        let mut table = output::table();
        output::table_header(&mut table, &["Color", "Replaced by", "Delta E"]);
        for sub in &report.fuzzy {
            let slot_color = palette.get(sub.slot).unwrap_or_default();
            table.add_row(vec![
                output::swatch(&sub.color),
                output::swatch_labeled(slot_color, &format!("{} {slot_color}", sub.slot)),
                Cell::new(format!("{:.2}", sub.delta_e)),
            ]);
        }
        output::table_print(&table);
    }
    Ok(())
}
