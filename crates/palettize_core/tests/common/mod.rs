//! Shared fixtures: the Rosé Pine Moon scheme and a theme built only from it.

use palettize_core::{Palette, Slot, Variant};
use serde_json::{json, Value};

pub const ROSE_PINE_MOON_YAML: &str = r##"system: "base16"
name: "Rosé Pine Moon"
slug: "rose-pine-moon"
variant: "dark"
palette:
  base00: "#232136"
  base01: "#2a273f"
  base02: "#393552"
  base03: "#6e6a86"
  base04: "#908caa"
  base05: "#e0def4"
  base06: "#e0def4"
  base07: "#56526e"
  base08: "#eb6f92"
  base09: "#f6c177"
  base0A: "#ea9a97"
  base0B: "#3e8fb0"
  base0C: "#9ccfd8"
  base0D: "#c4a7e7"
  base0E: "#f6c177"
  base0F: "#56526e"
"##;

#[allow(dead_code)]
pub fn palette() -> Palette {
    Palette::from_yaml_str(ROSE_PINE_MOON_YAML).expect("fixture palette parses")
}

/// A small palette with no duplicate colors, so exact matches are unambiguous.
#[allow(dead_code)]
pub fn distinct_palette() -> Palette {
    Palette::new("Distinct", Variant::Light)
        .slug("distinct")
        .color(Slot::Base00, "#faf4ed")
        .color(Slot::Base05, "#575279")
        .color(Slot::Base08, "#b4637a")
        .color(Slot::Base0A, "#ea9d34")
        .color(Slot::Base0D, "#907aa9")
}

/// Every color equals some slot of [`distinct_palette`] exactly.
#[allow(dead_code)]
pub fn distinct_theme() -> Value {
    json!({
        "name": "Distinct",
        "type": "light",
        "colors": {
            "editor.background": "#faf4ed",
            "editor.foreground": "#575279",
            "errorForeground": "#b4637a",
            "editorCursor.foreground": "#ea9d34",
            "focusBorder": "#907aa9"
        },
        "tokenColors": [
            { "scope": ["comment"], "settings": { "foreground": "#907aa9", "fontStyle": "italic" } },
            { "scope": "string", "settings": { "foreground": "#ea9d34" } },
            { "name": "Invalid", "scope": "invalid", "settings": { "foreground": "#b4637a", "background": "#faf4ed" } }
        ]
    })
}
