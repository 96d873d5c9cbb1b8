//! Reading palettes, themes and templates from disk, and writing results back.

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::error::{Error, Result};
use crate::palette::{Palette, PaletteSource};

/// Load a base16 scheme YAML file.
pub fn load_palette(path: impl AsRef<Path>) -> Result<Palette> {
    let path = path.as_ref();
    let text = read_existing(path, "Palette")?;
    let source: PaletteSource = serde_yaml::from_str(&text).map_err(|source| Error::Yaml {
        path: path.to_path_buf(),
        source,
    })?;
    let palette = Palette::from_source(source)?;
    tracing::info!(path = %path.display(), name = %palette.name, slots = palette.len(), "Loaded palette");
    Ok(palette)
}

/// Load a theme JSON document. Object key order is preserved.
pub fn load_theme(path: impl AsRef<Path>) -> Result<Value> {
    let path = path.as_ref();
    let text = read_existing(path, "Theme")?;
    let theme = serde_json::from_str(&text).map_err(|e| Error::json(path, e))?;
    tracing::info!(path = %path.display(), "Loaded theme");
    Ok(theme)
}

/// Load raw template text.
pub fn load_template(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(Error::TemplateNotFound {
            path: path.to_path_buf(),
        });
    }
    fs::read_to_string(path).map_err(|e| Error::io(path, e))
}

/// Write `contents`, creating parent directories as needed.
pub fn write_text(path: impl AsRef<Path>, contents: &str) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }
    fs::write(path, contents).map_err(|e| Error::io(path, e))?;
    tracing::info!(path = %path.display(), bytes = contents.len(), "Wrote file");
    Ok(())
}

/// Write a JSON document with a 4-space indent.
pub fn write_json(path: impl AsRef<Path>, document: &Value) -> Result<()> {
    write_text(path, &crate::template::format_template(document)?)
}

fn read_existing(path: &Path, kind: &'static str) -> Result<String> {
    if !path.is_file() {
        return Err(Error::SourceNotFound {
            kind,
            path: path.to_path_buf(),
        });
    }
    fs::read_to_string(path).map_err(|e| Error::io(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slot::Slot;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_load_palette() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("scheme.yaml");
        fs::write(
            &path,
            "name: \"Test\"\nvariant: \"light\"\npalette:\n  base00: \"fafafa\"\n  base08: \"#ff0000\"\n",
        )
        .unwrap();
        let palette = load_palette(&path).unwrap();
        assert_eq!(palette.name, "Test");
        assert_eq!(palette.variant.as_str(), "light");
        assert_eq!(palette.get(Slot::Base00), Some("fafafa"));
        assert_eq!(palette.len(), 2);
    }

    #[test]
    fn test_missing_sources() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope");
        assert!(matches!(
            load_palette(&missing),
            Err(Error::SourceNotFound { kind: "Palette", .. })
        ));
        assert!(matches!(
            load_theme(&missing),
            Err(Error::SourceNotFound { kind: "Theme", .. })
        ));
        let err = load_template(&missing).unwrap_err();
        assert!(matches!(err, Error::TemplateNotFound { .. }));
        assert!(err.to_string().starts_with("Template file not found:"));
    }

    #[test]
    fn test_invalid_yaml_names_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.yaml");
        fs::write(&path, "palette: [unterminated").unwrap();
        let err = load_palette(&path).unwrap_err();
        assert!(matches!(err, Error::Yaml { .. }));
        assert!(err.to_string().contains("bad.yaml"));
    }

    #[test]
    fn test_load_theme_preserves_key_order() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("theme.json");
        fs::write(&path, r##"{"type":"dark","name":"x","colors":{"b":"#111111","a":"#222222"}}"##)
            .unwrap();
        let theme = load_theme(&path).unwrap();
        let keys: Vec<&String> = theme.as_object().unwrap().keys().collect();
        assert_eq!(keys, ["type", "name", "colors"]);
    }

    #[test]
    fn test_invalid_theme_names_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ \"name\": ").unwrap();
        match load_theme(&path) {
            Err(Error::Json {
                path: Some(reported),
                ..
            }) => assert_eq!(reported, path),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_write_json_creates_parents() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested/out/theme.json");
        write_json(&path, &json!({ "name": "Rosé" })).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(text, "{\n    \"name\": \"Rosé\"\n}");
    }
}
