//! Base16 palettes: slot colors plus theme metadata.

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::slot::Slot;

pub const DEFAULT_THEME_NAME: &str = "Unknown Theme";

/// Dark or light theme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    #[default]
    Dark,
    Light,
}

impl Variant {
    pub fn as_str(self) -> &'static str {
        match self {
            Variant::Dark => "dark",
            Variant::Light => "light",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Variant {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "dark" => Ok(Variant::Dark),
            "light" => Ok(Variant::Light),
            other => Err(Error::InvalidPalette(format!(
                "variant must be \"dark\" or \"light\", got {other:?}"
            ))),
        }
    }
}

/// Palette source document as found in scheme YAML files.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaletteSource {
    #[serde(default)]
    pub system: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub variant: Option<String>,
    #[serde(default)]
    pub palette: IndexMap<String, serde_yaml::Value>,
}

/// A loaded palette. Immutable for the duration of any transformation.
///
/// `colors` keeps document order; that order decides tie-breaking when two
/// slots share a color.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Palette {
    pub name: String,
    pub slug: Option<String>,
    pub variant: Variant,
    pub colors: IndexMap<Slot, String>,
}

impl Palette {
    pub fn new(name: impl Into<String>, variant: Variant) -> Self {
        Self {
            name: name.into(),
            slug: None,
            variant,
            colors: IndexMap::new(),
        }
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    /// Set a slot color. Re-setting a slot keeps its original position.
    pub fn color(mut self, slot: Slot, color: impl Into<String>) -> Self {
        self.colors.insert(slot, color.into());
        self
    }

    pub fn get(&self, slot: Slot) -> Option<&str> {
        self.colors.get(&slot).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Slot, &str)> {
        self.colors.iter().map(|(slot, color)| (*slot, color.as_str()))
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Parse a scheme YAML document.
    pub fn from_yaml_str(text: &str) -> std::result::Result<Self, PaletteParseError> {
        let source: PaletteSource = serde_yaml::from_str(text)?;
        Ok(Self::from_source(source)?)
    }

    /// Build from a parsed source. Missing name/variant fall back to defaults,
    /// unknown palette keys are skipped, missing slots are simply absent.
    pub fn from_source(source: PaletteSource) -> Result<Self> {
        let variant = match source.variant.as_deref() {
            Some(v) => v.parse()?,
            None => Variant::default(),
        };
        let mut palette = Palette::new(
            source.name.unwrap_or_else(|| DEFAULT_THEME_NAME.to_string()),
            variant,
        );
        palette.slug = source.slug;

        for (key, value) in source.palette {
            let Ok(slot) = key.parse::<Slot>() else {
                tracing::warn!(key = %key, "Ignoring unknown palette key");
                continue;
            };
            let serde_yaml::Value::String(color) = value else {
                return Err(Error::InvalidPalette(format!(
                    "{key} must be a quoted hex color string"
                )));
            };
            palette.colors.insert(slot, color);
        }

        Ok(palette)
    }
}

/// Either the YAML did not parse or it parsed into an unusable palette.
#[derive(Debug, thiserror::Error)]
pub enum PaletteParseError {
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
    #[error(transparent)]
    Palette(#[from] Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROSE_PINE_MOON: &str = r##"
system: "base16"
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

    #[test]
    fn test_parse_full_scheme() {
        let palette = Palette::from_yaml_str(ROSE_PINE_MOON).unwrap();
        assert_eq!(palette.name, "Rosé Pine Moon");
        assert_eq!(palette.slug.as_deref(), Some("rose-pine-moon"));
        assert_eq!(palette.variant, Variant::Dark);
        assert_eq!(palette.len(), 16);
        assert_eq!(palette.get(Slot::Base0A), Some("#ea9a97"));
        let order: Vec<Slot> = palette.iter().map(|(slot, _)| slot).collect();
        assert_eq!(order, Slot::ALL.to_vec());
    }

    #[test]
    fn test_defaults_and_missing_slots() {
        let palette = Palette::from_yaml_str("palette:\n  base00: \"232136\"\n").unwrap();
        assert_eq!(palette.name, DEFAULT_THEME_NAME);
        assert_eq!(palette.variant, Variant::Dark);
        assert_eq!(palette.len(), 1);
        assert_eq!(palette.get(Slot::Base01), None);
    }

    #[test]
    fn test_unknown_keys_skipped() {
        let palette =
            Palette::from_yaml_str("palette:\n  base10: \"#ffffff\"\n  base05: \"#e0def4\"\n")
                .unwrap();
        assert_eq!(palette.len(), 1);
        assert_eq!(palette.get(Slot::Base05), Some("#e0def4"));
    }

    #[test]
    fn test_invalid_variant() {
        let err = Palette::from_yaml_str("variant: dusk\npalette: {}\n").unwrap_err();
        assert!(err.to_string().contains("dusk"));
    }

    #[test]
    fn test_non_string_color_rejected() {
        let err = Palette::from_yaml_str("palette:\n  base00: 123456\n").unwrap_err();
        assert!(matches!(
            err,
            PaletteParseError::Palette(Error::InvalidPalette(_))
        ));
    }

    #[test]
    fn test_builder_keeps_position_on_overwrite() {
        let palette = Palette::new("x", Variant::Light)
            .color(Slot::Base08, "#111111")
            .color(Slot::Base00, "#000000")
            .color(Slot::Base08, "#222222");
        let order: Vec<(Slot, &str)> = palette.iter().collect();
        assert_eq!(
            order,
            vec![(Slot::Base08, "#222222"), (Slot::Base00, "#000000")]
        );
    }
}
