//! `palettize analyze`: how a theme's colors map onto a palette.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::Cell;
use palettize_core::analyze::Analysis;
use palettize_core::{analyze, load_palette, load_theme, PalettizeConfig};

use crate::output;

pub fn handle(
    config: &PalettizeConfig,
    theme: Option<PathBuf>,
    palette: Option<PathBuf>,
) -> Result<()> {
    let theme_path = theme.unwrap_or_else(|| config.default_theme());
    let palette_path = palette.unwrap_or_else(|| config.default_palette());

    let palette = load_palette(&palette_path)?;
    let theme = load_theme(&theme_path)?;
    let analysis = analyze(&theme, &palette);

    if output::is_json() {
        output::data("analysis", &analysis);
        return Ok(());
    }

    output::header(&format!("{} ↔ {}", theme_path.display(), palette.name));
    print_slots(&analysis);
    print_unmapped(&analysis);
    print_summary(&analysis);
    Ok(())
}

fn print_slots(analysis: &Analysis) {
    if analysis.slots.is_empty() {
        output::warning("No theme colors match the palette exactly");
        return;
    }
    let mut table = output::table();
    output::table_header(&mut table, &["Slot", "Role", "Palette", "Uses", "Variations"]);
    for usage in &analysis.slots {
        let variations = usage
            .variations
            .iter()
            .map(|(color, keys)| format!("{color} ×{}", keys.len()))
            .collect::<Vec<_>>()
            .join("\n");
        table.add_row(vec![
            Cell::new(usage.slot.name()),
            Cell::new(usage.slot.role()),
            output::swatch(&usage.color),
            Cell::new(usage.uses),
            Cell::new(variations),
        ]);
    }
    output::table_print(&table);
}

fn print_unmapped(analysis: &Analysis) {
    if analysis.unmapped.is_empty() {
        output::success("Every theme color maps to a palette slot");
        return;
    }
    let mut table = output::table();
    output::table_header(
        &mut table,
        &["Color", "Uses", "Nearest", "Delta E", "Match", "RGB dist"],
    );
    for color in &analysis.unmapped {
        let nearest = match &color.nearest_color {
            Some(hex) => {
                output::swatch_labeled(hex, &format!("{} {hex}", color.nearest.slot_name()))
            }
            None => Cell::new(color.nearest.slot_name()),
        };
        let delta_e = color
            .nearest
            .delta_e
            .map_or_else(|| "n/a".to_string(), |d| format!("{d:.2}"));
        let band = color.band.map_or("unknown", |b| b.label());
        table.add_row(vec![
            output::swatch(&color.color),
            Cell::new(color.keys.len()),
            nearest,
            Cell::new(delta_e),
            Cell::new(band),
            Cell::new(format!("{:.1}", color.nearest.rgb_distance)),
        ]);
    }
    output::table_print(&table);
}

fn print_summary(analysis: &Analysis) {
    let s = &analysis.summary;
    output::header("Summary");
    output::kv("Total color keys:", &s.total_keys.to_string());
    output::kv("Mapped:", &s.mapped_keys.to_string());
    output::kv("Unmapped:", &s.unmapped_keys.to_string());
    output::kv("Slots used:", &format!("{}/{}", s.slots_used, s.palette_size));
    output::kv(
        "Unique unmapped:",
        &format!(
            "{} ({} similar, {} different)",
            s.unique_unmapped, s.similar_unmapped, s.different_unmapped
        ),
    );
    for repeated in &s.most_repeated {
        output::dim(&format!("  {} used {} times", repeated.color, repeated.uses));
    }
}
