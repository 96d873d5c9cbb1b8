//! `palettize build`: render a concrete theme from a palette and a template.

use std::path::PathBuf;

use anyhow::Result;
use palettize_core::{
    build_theme, load_palette, load_template, output_file_name, write_json, PalettizeConfig,
};

use crate::output;

pub fn handle(
    config: &PalettizeConfig,
    palette: Option<PathBuf>,
    template: Option<PathBuf>,
    out_dir: Option<PathBuf>,
    output_name: Option<String>,
) -> Result<()> {
    let palette_path = palette.unwrap_or_else(|| config.default_palette());
    let template_path = template.unwrap_or_else(|| config.template.clone());
    let out_dir = out_dir.unwrap_or_else(|| config.out_dir.clone());

    output::dim(&format!("Loading base16 palette: {}", palette_path.display()));
    let palette = load_palette(&palette_path)?;
    output::dim(&format!("Loading template: {}", template_path.display()));
    let text = load_template(&template_path)?;

    output::dim(&format!("Rendering theme: {}", palette.name));
    let theme = build_theme(&text, &palette)?;

    let out_path = out_dir.join(output_file_name(&palette, output_name.as_deref()));
    write_json(&out_path, &theme)?;
    output::success(&format!("Theme written to {}", out_path.display()));
    Ok(())
}
