//! Turning a concrete theme into a placeholder template.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::color::{alpha_suffix, is_transparent_sentinel};
use crate::index::{nearest_slot, ExactIndex};
use crate::palette::Palette;
use crate::slot::Slot;
use crate::walk::rewrite_colors;

pub const THEME_NAME_VAR: &str = "theme_name";
pub const THEME_TYPE_VAR: &str = "theme_type";

/// Top-level fields carried into a template. Everything else is dropped.
pub const TEMPLATE_FIELDS: [&str; 4] = ["name", "type", "colors", "tokenColors"];

/// `{{ ident }}`
pub fn placeholder(ident: &str) -> String {
    format!("{{{{ {ident} }}}}")
}

/// What happens to one color literal during templatization.
#[derive(Debug, Clone, PartialEq)]
pub enum Replacement {
    /// `#0000` / `#00000000`, never rewritten
    Sentinel,
    Exact {
        slot: Slot,
        alpha: Option<String>,
    },
    Fuzzy {
        slot: Slot,
        alpha: Option<String>,
        delta_e: f64,
    },
    Unmatched,
}

impl Replacement {
    /// The string that replaces `original` in the template.
    pub fn render(&self, original: &str) -> String {
        match self {
            Replacement::Exact { slot, alpha } | Replacement::Fuzzy { slot, alpha, .. } => {
                let mut out = placeholder(slot.name());
                if let Some(alpha) = alpha {
                    out.push_str(alpha);
                }
                out
            }
            Replacement::Sentinel | Replacement::Unmatched => original.to_string(),
        }
    }
}

/// One color substituted by threshold rather than by exact match.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FuzzySubstitution {
    pub color: String,
    pub slot: Slot,
    pub delta_e: f64,
}

/// Counts from one templatization run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TemplateReport {
    pub exact: usize,
    pub fuzzy: Vec<FuzzySubstitution>,
    pub untouched: usize,
}

impl TemplateReport {
    pub fn substituted(&self) -> usize {
        self.exact + self.fuzzy.len()
    }
}

/// A generated template document together with its report.
#[derive(Debug, Clone)]
pub struct Template {
    pub document: Value,
    pub report: TemplateReport,
}

/// Matches theme colors against one palette.
///
/// `threshold` enables fuzzy substitution: a color with no exact match is
/// replaced by its nearest slot when that slot's Delta E is at most the
/// threshold. `None` or a non-positive threshold means exact matches only.
#[derive(Debug, Clone)]
pub struct Templatizer<'a> {
    palette: &'a Palette,
    index: ExactIndex,
    threshold: Option<f64>,
}

impl<'a> Templatizer<'a> {
    pub fn new(palette: &'a Palette) -> Self {
        Self {
            palette,
            index: ExactIndex::build(palette),
            threshold: None,
        }
    }

    pub fn threshold(mut self, threshold: Option<f64>) -> Self {
        self.threshold = threshold;
        self
    }

    fn fuzzy_threshold(&self) -> Option<f64> {
        self.threshold.filter(|t| *t > 0.0)
    }

    pub fn classify(&self, color: &str) -> Replacement {
        if is_transparent_sentinel(color) {
            return Replacement::Sentinel;
        }

        if let Some(slot) = self.index.lookup(color) {
            return Replacement::Exact {
                slot,
                alpha: alpha_suffix(color),
            };
        }

        if let Some(threshold) = self.fuzzy_threshold() {
            let nearest = nearest_slot(color, self.palette);
            if let (Some(slot), Some(delta_e)) = (nearest.slot, nearest.delta_e) {
                if delta_e <= threshold {
                    return Replacement::Fuzzy {
                        slot,
                        alpha: alpha_suffix(color),
                        delta_e,
                    };
                }
            }
        }

        Replacement::Unmatched
    }

    pub fn color_to_placeholder(&self, color: &str) -> String {
        self.classify(color).render(color)
    }

    /// Rewrite one subtree, recording every color decision in `report`.
    fn rewrite_section(&self, section: &Value, report: &mut TemplateReport) -> Value {
        rewrite_colors(section, |s| {
            let replacement = self.classify(s);
            match &replacement {
                Replacement::Exact { .. } => report.exact += 1,
                Replacement::Fuzzy { slot, delta_e, .. } => {
                    tracing::debug!(
                        color = %s,
                        slot = %slot,
                        delta_e = *delta_e,
                        "Replacing similar color"
                    );
                    report.fuzzy.push(FuzzySubstitution {
                        color: s.to_string(),
                        slot: *slot,
                        delta_e: *delta_e,
                    });
                }
                Replacement::Sentinel | Replacement::Unmatched => report.untouched += 1,
            }
            replacement.render(s)
        })
    }

    /// Build a template from a theme document.
    ///
    /// Only `name`, `type`, `colors` and `tokenColors` are carried over;
    /// `name`/`type` become metadata placeholders.
    pub fn generate(&self, theme: &Value) -> Template {
        let mut report = TemplateReport::default();
        let mut document = Map::new();

        if let Some(theme) = theme.as_object() {
            if theme.contains_key("name") {
                document.insert("name".into(), Value::String(placeholder(THEME_NAME_VAR)));
            }
            if theme.contains_key("type") {
                document.insert("type".into(), Value::String(placeholder(THEME_TYPE_VAR)));
            }
            for section in ["colors", "tokenColors"] {
                if let Some(value) = theme.get(section) {
                    tracing::info!(section, "Processing theme section");
                    document.insert(section.into(), self.rewrite_section(value, &mut report));
                }
            }
        }

        Template {
            document: Value::Object(document),
            report,
        }
    }
}

/// Single-color entry point over a prebuilt index.
pub fn color_to_placeholder(
    color: &str,
    index: &ExactIndex,
    palette: &Palette,
    threshold: Option<f64>,
) -> String {
    let templatizer = Templatizer {
        palette,
        index: index.clone(),
        threshold,
    };
    templatizer.color_to_placeholder(color)
}

/// Generate a template document from `theme`.
pub fn generate_template(theme: &Value, palette: &Palette, threshold: Option<f64>) -> Value {
    Templatizer::new(palette)
        .threshold(threshold)
        .generate(theme)
        .document
}

/// JSON text of a template: 4-space indent, non-ASCII kept verbatim.
pub fn format_template(document: &Value) -> crate::Result<String> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    serde::Serialize::serialize(document, &mut serializer)?;
    // serde_json only ever writes valid UTF-8.
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::Variant;
    use serde_json::json;

    fn palette() -> Palette {
        Palette::new("Rosé Pine Moon", Variant::Dark)
            .color(Slot::Base00, "#232136")
            .color(Slot::Base05, "#e0def4")
            .color(Slot::Base0A, "#ea9a97")
    }

    #[test]
    fn test_placeholder_syntax() {
        assert_eq!(placeholder("base0A"), "{{ base0A }}");
    }

    #[test]
    fn test_exact_match() {
        let palette = palette();
        let t = Templatizer::new(&palette);
        assert_eq!(t.color_to_placeholder("#EA9A97"), "{{ base0A }}");
    }

    #[test]
    fn test_alpha_reattached() {
        let palette = palette();
        let t = Templatizer::new(&palette);
        assert_eq!(t.color_to_placeholder("#ea9a97e6"), "{{ base0A }}e6");
        assert_eq!(t.color_to_placeholder("#EA9A97E6"), "{{ base0A }}e6");
    }

    #[test]
    fn test_sentinels_pass_through() {
        let palette = Palette::new("black", Variant::Dark).color(Slot::Base00, "#000000");
        let t = Templatizer::new(&palette).threshold(Some(100.0));
        assert_eq!(t.color_to_placeholder("#0000"), "#0000");
        assert_eq!(t.color_to_placeholder("#00000000"), "#00000000");
    }

    #[test]
    fn test_no_threshold_leaves_near_colors() {
        let palette = palette();
        let t = Templatizer::new(&palette);
        assert_eq!(t.color_to_placeholder("#ea9b98"), "#ea9b98");
    }

    #[test]
    fn test_fuzzy_match_within_threshold() {
        let palette = palette();
        let t = Templatizer::new(&palette).threshold(Some(5.0));
        assert_eq!(t.color_to_placeholder("#ea9b98"), "{{ base0A }}");
        assert_eq!(t.color_to_placeholder("#ea9b98cc"), "{{ base0A }}cc");
        assert!(matches!(
            t.classify("#ea9b98"),
            Replacement::Fuzzy { slot: Slot::Base0A, .. }
        ));
    }

    #[test]
    fn test_fuzzy_respects_threshold() {
        let palette = palette();
        let t = Templatizer::new(&palette).threshold(Some(5.0));
        assert_eq!(t.color_to_placeholder("#ff0000"), "#ff0000");
    }

    #[test]
    fn test_non_positive_threshold_is_exact_only() {
        let palette = palette();
        for threshold in [Some(0.0), Some(-3.0), None] {
            let t = Templatizer::new(&palette).threshold(threshold);
            assert_eq!(t.color_to_placeholder("#ea9b98"), "#ea9b98");
        }
    }

    #[test]
    fn test_free_function_matches_templatizer() {
        let palette = palette();
        let index = ExactIndex::build(&palette);
        assert_eq!(
            color_to_placeholder("#e0def480", &index, &palette, None),
            "{{ base05 }}80"
        );
    }

    #[test]
    fn test_generate_closed_schema() {
        let palette = palette();
        let theme = json!({
            "$schema": "vscode://schemas/color-theme",
            "name": "Rosé Pine Moon",
            "type": "dark",
            "semanticHighlighting": true,
            "colors": { "editor.background": "#232136", "badge.background": "#0000" },
            "tokenColors": [
                { "scope": "comment", "settings": { "foreground": "#6e6a86", "fontStyle": "italic" } },
                { "scope": ["string"], "settings": { "foreground": "#ea9a97e6" } }
            ]
        });

        let template = Templatizer::new(&palette).generate(&theme);
        assert_eq!(
            template.document,
            json!({
                "name": "{{ theme_name }}",
                "type": "{{ theme_type }}",
                "colors": { "editor.background": "{{ base00 }}", "badge.background": "#0000" },
                "tokenColors": [
                    { "scope": "comment", "settings": { "foreground": "#6e6a86", "fontStyle": "italic" } },
                    { "scope": ["string"], "settings": { "foreground": "{{ base0A }}e6" } }
                ]
            })
        );
        assert_eq!(template.report.exact, 2);
        assert_eq!(template.report.untouched, 2);
        assert!(template.report.fuzzy.is_empty());
    }

    #[test]
    fn test_generate_missing_sections() {
        let palette = palette();
        let document = generate_template(&json!({ "colors": {} }), &palette, None);
        assert_eq!(document, json!({ "colors": {} }));
        assert_eq!(generate_template(&json!([1, 2]), &palette, None), json!({}));
    }

    #[test]
    fn test_generate_reports_fuzzy() {
        let palette = palette();
        let theme = json!({ "colors": { "a": "#ea9b98", "b": "#ea9a97" } });
        let template = Templatizer::new(&palette).threshold(Some(5.0)).generate(&theme);
        assert_eq!(template.report.exact, 1);
        assert_eq!(template.report.fuzzy.len(), 1);
        assert_eq!(template.report.fuzzy[0].slot, Slot::Base0A);
        assert_eq!(template.report.substituted(), 2);
    }

    #[test]
    fn test_format_template_indent_and_unicode() {
        let text = format_template(&json!({ "name": "Rosé", "colors": { "a": "{{ base00 }}" } }))
            .unwrap();
        assert_eq!(
            text,
            "{\n    \"name\": \"Rosé\",\n    \"colors\": {\n        \"a\": \"{{ base00 }}\"\n    }\n}"
        );
    }
}
