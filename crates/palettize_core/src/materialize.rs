//! Binding a palette into a template to produce a concrete theme.
//!
//! Placeholders are `{{ ident }}` expressions; anything after the closing
//! braces (an alpha suffix, say) is kept as literal text. The vocabulary is
//! closed: `theme_name`, `theme_type` and the slots the palette provides. An
//! identifier outside it is an error, never an empty string.

use std::sync::LazyLock;

use indexmap::IndexMap;
use regex::{Captures, Regex};
use serde_json::Value;

use crate::error::{Error, Result};
use crate::palette::Palette;
use crate::template::{THEME_NAME_VAR, THEME_TYPE_VAR};
use crate::walk::try_rewrite;

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{\s*([A-Za-z_][A-Za-z0-9_]*)\s*\}\}").expect("placeholder pattern is valid")
});

/// Variable name → value for one palette.
#[derive(Debug, Clone, PartialEq)]
pub struct BindingContext {
    vars: IndexMap<String, String>,
}

impl BindingContext {
    /// `theme_name`, `theme_type`, then every slot present in the palette.
    /// Slot values always carry a leading `#`.
    pub fn from_palette(palette: &Palette) -> Self {
        let mut vars = IndexMap::with_capacity(palette.len() + 2);
        vars.insert(THEME_NAME_VAR.to_string(), palette.name.clone());
        vars.insert(THEME_TYPE_VAR.to_string(), palette.variant.to_string());
        for (slot, color) in palette.iter() {
            vars.insert(slot.name().to_string(), with_hash(color));
        }
        Self { vars }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.vars.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Substitute every placeholder in `text`.
    pub fn render(&self, text: &str) -> Result<String> {
        let mut missing = None;
        let rendered = PLACEHOLDER.replace_all(text, |caps: &Captures<'_>| {
            let name = &caps[1];
            match self.get(name) {
                Some(value) => value.to_string(),
                None => {
                    missing.get_or_insert_with(|| name.to_string());
                    String::new()
                }
            }
        });
        match missing {
            Some(name) => Err(Error::UnresolvedPlaceholder { name }),
            None => Ok(rendered.into_owned()),
        }
    }
}

fn with_hash(color: &str) -> String {
    let color = color.trim();
    if color.starts_with('#') {
        color.to_string()
    } else {
        format!("#{color}")
    }
}

/// Bind `palette` into a template document. Keys are never rewritten.
pub fn bind_palette(template: &Value, palette: &Palette) -> Result<Value> {
    let context = BindingContext::from_palette(palette);
    try_rewrite(template, &mut |s: &str| context.render(s))
}

/// Render raw template text against `palette`.
pub fn render_template(text: &str, palette: &Palette) -> Result<String> {
    BindingContext::from_palette(palette).render(text)
}

/// Parse template text as a JSON document and bind `palette` into it.
///
/// Binding happens on string values after parsing, so palette names with
/// quotes or backslashes come out intact.
pub fn build_theme(text: &str, palette: &Palette) -> Result<Value> {
    let template: Value = serde_json::from_str(text)?;
    bind_palette(&template, palette)
}

/// File name for a built theme: the override (with `.json` ensured), else
/// `<slug>.json`, else the palette name slugified.
pub fn output_file_name(palette: &Palette, override_name: Option<&str>) -> String {
    if let Some(name) = override_name {
        return if name.ends_with(".json") {
            name.to_string()
        } else {
            format!("{name}.json")
        };
    }
    if let Some(slug) = palette.slug.as_deref().filter(|s| !s.is_empty()) {
        return format!("{slug}.json");
    }
    let stem = palette.name.to_lowercase().replace(' ', "-").replace('\'', "");
    format!("{stem}.json")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::Variant;
    use crate::slot::Slot;
    use serde_json::json;

    fn palette() -> Palette {
        Palette::new("Rosé Pine Moon", Variant::Dark)
            .color(Slot::Base00, "#232136")
            .color(Slot::Base0A, "ea9a97")
    }

    #[test]
    fn test_context_vocabulary() {
        let ctx = BindingContext::from_palette(&palette());
        let names: Vec<&str> = ctx.names().collect();
        assert_eq!(names, ["theme_name", "theme_type", "base00", "base0A"]);
        assert_eq!(ctx.get("theme_type"), Some("dark"));
        assert_eq!(ctx.get("base0A"), Some("#ea9a97"));
        assert_eq!(ctx.get("base01"), None);
    }

    #[test]
    fn test_render_with_alpha_suffix() {
        let ctx = BindingContext::from_palette(&palette());
        assert_eq!(ctx.render("{{ base0A }}e6").unwrap(), "#ea9a97e6");
        assert_eq!(ctx.render("{{base00}}").unwrap(), "#232136");
        assert_eq!(ctx.render("plain text").unwrap(), "plain text");
    }

    #[test]
    fn test_render_unknown_is_error() {
        let ctx = BindingContext::from_palette(&palette());
        let err = ctx.render("{{ base00 }} {{ base0B }} {{ nope }}").unwrap_err();
        match err {
            Error::UnresolvedPlaceholder { name } => assert_eq!(name, "base0B"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_bind_palette_tree() {
        let template = json!({
            "name": "{{ theme_name }}",
            "type": "{{ theme_type }}",
            "colors": { "{{ base00 }}": "{{ base00 }}", "x": "#123456" },
            "tokenColors": [{ "settings": { "foreground": "{{ base0A }}80" } }]
        });
        let theme = bind_palette(&template, &palette()).unwrap();
        assert_eq!(
            theme,
            json!({
                "name": "Rosé Pine Moon",
                "type": "dark",
                "colors": { "{{ base00 }}": "#232136", "x": "#123456" },
                "tokenColors": [{ "settings": { "foreground": "#ea9a9780" } }]
            })
        );
    }

    #[test]
    fn test_bind_palette_missing_slot_fails() {
        let template = json!({ "colors": { "a": "{{ base0F }}" } });
        assert!(matches!(
            bind_palette(&template, &palette()),
            Err(Error::UnresolvedPlaceholder { .. })
        ));
    }

    #[test]
    fn test_build_theme_from_text() {
        let text = "{\n    \"name\": \"{{ theme_name }}\",\n    \"colors\": { \"a\": \"{{ base0A }}e6\" }\n}";
        let theme = build_theme(text, &palette()).unwrap();
        assert_eq!(theme["colors"]["a"], "#ea9a97e6");
        assert_eq!(theme["name"], "Rosé Pine Moon");
    }

    #[test]
    fn test_build_theme_invalid_json() {
        assert!(matches!(
            build_theme("{ \"a\": {{ base00 }} }", &palette()),
            Err(Error::Json { path: None, .. })
        ));
    }

    #[test]
    fn test_build_theme_escapes_name() {
        let palette = Palette::new(r#"Tomorrow "Night" \ Bright"#, Variant::Dark)
            .color(Slot::Base00, "#1d1f21");
        let template = crate::template::generate_template(
            &json!({ "name": "x", "colors": { "editor.background": "#1d1f21" } }),
            &palette,
            None,
        );
        let text = crate::template::format_template(&template).unwrap();
        let theme = build_theme(&text, &palette).unwrap();
        assert_eq!(theme["name"], r#"Tomorrow "Night" \ Bright"#);
        assert_eq!(theme["colors"]["editor.background"], "#1d1f21");
    }

    #[test]
    fn test_output_file_name() {
        let p = palette();
        assert_eq!(output_file_name(&p, Some("mine")), "mine.json");
        assert_eq!(output_file_name(&p, Some("mine.json")), "mine.json");
        assert_eq!(output_file_name(&p, None), "rosé-pine-moon.json");
        let p = p.slug("rose-pine-moon");
        assert_eq!(output_file_name(&p, None), "rose-pine-moon.json");
        let p = Palette::new("Tomorrow Night's", Variant::Dark);
        assert_eq!(output_file_name(&p, None), "tomorrow-nights.json");
    }
}
