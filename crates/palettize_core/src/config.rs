//! Default locations and matching settings.
//!
//! Every field can be overridden from the environment; the CLI layers its
//! flags on top.

use std::path::PathBuf;

/// Where palettes, themes and templates live, and how loosely colors match.
#[derive(Clone, Debug, PartialEq)]
pub struct PalettizeConfig {
    /// Directory holding bundled schemes and themes (default: `data`)
    pub data_dir: PathBuf,
    /// Directory generated files are written to (default: `out`)
    pub out_dir: PathBuf,
    /// Template used by `build` (default: `templates/vscode-theme.json.j2`)
    pub template: PathBuf,
    /// Scheme slug the default theme and palette are named after
    pub default_scheme: String,
    /// Fuzzy Delta E threshold; `None` means exact matches only
    pub threshold: Option<f64>,
}

impl Default for PalettizeConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            out_dir: PathBuf::from("out"),
            template: PathBuf::from("templates/vscode-theme.json.j2"),
            default_scheme: "rose-pine-moon".to_string(),
            threshold: None,
        }
    }
}

impl PalettizeConfig {
    /// Create config from environment variables.
    ///
    /// Optional: `PALETTIZE_DATA_DIR`, `PALETTIZE_OUT_DIR`, `PALETTIZE_TEMPLATE`,
    /// `PALETTIZE_SCHEME`, `PALETTIZE_THRESHOLD`
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create config from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(dir) = lookup("PALETTIZE_DATA_DIR") {
            config.data_dir = dir.into();
        }
        if let Some(dir) = lookup("PALETTIZE_OUT_DIR") {
            config.out_dir = dir.into();
        }
        if let Some(template) = lookup("PALETTIZE_TEMPLATE") {
            config.template = template.into();
        }
        if let Some(scheme) = lookup("PALETTIZE_SCHEME") {
            config.default_scheme = scheme;
        }
        if let Some(raw) = lookup("PALETTIZE_THRESHOLD") {
            match raw.trim().parse::<f64>() {
                Ok(threshold) if threshold.is_finite() => config.threshold = Some(threshold),
                _ => tracing::warn!(value = %raw, "Ignoring invalid PALETTIZE_THRESHOLD"),
            }
        }
        config
    }

    pub fn data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }

    pub fn out_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.out_dir = dir.into();
        self
    }

    pub fn template(mut self, path: impl Into<PathBuf>) -> Self {
        self.template = path.into();
        self
    }

    pub fn default_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.default_scheme = scheme.into();
        self
    }

    pub fn threshold(mut self, threshold: Option<f64>) -> Self {
        self.threshold = threshold;
        self
    }

    /// `data_dir/<scheme>.json`
    pub fn default_theme(&self) -> PathBuf {
        self.data_dir.join(format!("{}.json", self.default_scheme))
    }

    /// `data_dir/<scheme>.yml`
    pub fn default_palette(&self) -> PathBuf {
        self.data_dir.join(format!("{}.yml", self.default_scheme))
    }

    /// `out_dir/generated-theme.json.j2`
    pub fn default_template_output(&self) -> PathBuf {
        self.out_dir.join("generated-theme.json.j2")
    }
}
