//! Read-only analysis of how a theme's colors relate to a palette.
//!
//! Drives the `analyze` report: which slots a theme uses, where, in which
//! alpha variations, and which colors have no slot at all.

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

use crate::color::{looks_like_color, normalize};
use crate::distance::DeltaBand;
use crate::index::{nearest_slot, ExactIndex, NearestMatch};
use crate::palette::Palette;
use crate::slot::Slot;

/// Bucket name for colors with no slot.
pub const UNMAPPED: &str = "unmapped";

/// Path key → color literal, in document order.
pub type FlatColors = IndexMap<String, String>;

/// One flattened color use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColorUse {
    pub key: String,
    pub color: String,
}

/// Flatten a theme into human-readable path keys.
///
/// `colors.<role>` for the color map, `tokenColors[<scopes>].foreground` /
/// `.background` for token rules. Multiple scopes are joined with `", "`;
/// a rule without scope falls back to `token[<index>]`. Rules sharing a scope
/// key overwrite each other.
pub fn flatten(theme: &Value) -> FlatColors {
    let mut flat = FlatColors::new();

    if let Some(colors) = theme.get("colors").and_then(Value::as_object) {
        for (role, value) in colors {
            if let Some(color) = value.as_str().filter(|c| looks_like_color(c)) {
                flat.insert(format!("colors.{role}"), color.to_string());
            }
        }
    }

    if let Some(rules) = theme.get("tokenColors").and_then(Value::as_array) {
        for (idx, rule) in rules.iter().enumerate() {
            let Some(settings) = rule.get("settings").and_then(Value::as_object) else {
                continue;
            };
            let scope = scope_key(rule.get("scope")).unwrap_or_else(|| format!("token[{idx}]"));
            for field in ["foreground", "background"] {
                if let Some(color) = settings.get(field).and_then(Value::as_str) {
                    flat.insert(format!("tokenColors[{scope}].{field}"), color.to_string());
                }
            }
        }
    }

    flat
}

fn scope_key(scope: Option<&Value>) -> Option<String> {
    let scopes: Vec<&str> = match scope? {
        Value::String(s) => vec![s.as_str()],
        Value::Array(items) => items.iter().filter_map(Value::as_str).collect(),
        _ => Vec::new(),
    };
    let joined = scopes.join(", ");
    (!joined.is_empty()).then_some(joined)
}

/// Normalized color → keys using it, in first-use order.
pub fn group_by_color(flat: &FlatColors) -> IndexMap<String, Vec<String>> {
    let mut groups: IndexMap<String, Vec<String>> = IndexMap::new();
    for (key, color) in flat {
        let normalized = normalize(color);
        if !normalized.is_empty() {
            groups.entry(normalized).or_default().push(key.clone());
        }
    }
    groups
}

/// Flattened uses split into per-slot buckets and the unmapped bucket.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Classification {
    pub mapped: IndexMap<Slot, Vec<ColorUse>>,
    pub unmapped: Vec<ColorUse>,
}

impl Classification {
    /// Bucket by name: a slot name or [`UNMAPPED`].
    pub fn bucket(&self, name: &str) -> Option<&[ColorUse]> {
        if name == UNMAPPED {
            return (!self.unmapped.is_empty()).then_some(self.unmapped.as_slice());
        }
        let slot = name.parse::<Slot>().ok()?;
        self.mapped.get(&slot).map(Vec::as_slice)
    }

    /// All buckets keyed by name, `unmapped` last when present.
    pub fn buckets(&self) -> IndexMap<String, Vec<ColorUse>> {
        let mut buckets: IndexMap<String, Vec<ColorUse>> = self
            .mapped
            .iter()
            .map(|(slot, uses)| (slot.name().to_string(), uses.clone()))
            .collect();
        if !self.unmapped.is_empty() {
            buckets.insert(UNMAPPED.to_string(), self.unmapped.clone());
        }
        buckets
    }

    pub fn mapped_count(&self) -> usize {
        self.mapped.values().map(Vec::len).sum()
    }
}

/// Exact-match every flattened color against the palette: full normalized
/// form first, then alpha-stripped.
pub fn classify(flat: &FlatColors, palette: &Palette) -> Classification {
    let index = ExactIndex::build(palette);
    let mut classification = Classification::default();

    for (key, color) in flat {
        let entry = ColorUse {
            key: key.clone(),
            color: color.clone(),
        };
        match index.lookup_full_then_stripped(color) {
            Some(slot) => classification.mapped.entry(slot).or_default().push(entry),
            None => classification.unmapped.push(entry),
        }
    }

    classification
}

/// A slot the theme uses, with each literal spelling of it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlotUsage {
    pub slot: Slot,
    pub color: String,
    pub uses: usize,
    /// Literal → keys; a literal differing from the palette value is a variation.
    pub variations: IndexMap<String, Vec<String>>,
}

/// One unmapped literal and where it would land.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnmappedColor {
    pub color: String,
    pub keys: Vec<String>,
    pub nearest: NearestMatch,
    pub nearest_color: Option<String>,
    pub band: Option<DeltaBand>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RepeatedColor {
    pub color: String,
    pub uses: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub total_keys: usize,
    pub mapped_keys: usize,
    pub unmapped_keys: usize,
    pub slots_used: usize,
    pub palette_size: usize,
    pub unique_unmapped: usize,
    /// Unique unmapped colors with Delta E < 10 to their nearest slot
    pub similar_unmapped: usize,
    /// Unique unmapped colors with Delta E >= 10
    pub different_unmapped: usize,
    pub most_repeated: Vec<RepeatedColor>,
}

/// Complete theme-vs-palette report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    pub slots: Vec<SlotUsage>,
    pub unmapped: Vec<UnmappedColor>,
    pub summary: Summary,
}

const MOST_REPEATED: usize = 3;

/// Analyze a theme document against a palette.
pub fn analyze(theme: &Value, palette: &Palette) -> Analysis {
    let flat = flatten(theme);
    let groups = group_by_color(&flat);
    let classification = classify(&flat, palette);

    let mut slots: Vec<SlotUsage> = classification
        .mapped
        .iter()
        .map(|(slot, uses)| {
            let mut variations: IndexMap<String, Vec<String>> = IndexMap::new();
            for u in uses {
                variations.entry(u.color.clone()).or_default().push(u.key.clone());
            }
            SlotUsage {
                slot: *slot,
                color: palette.get(*slot).unwrap_or_default().to_string(),
                uses: uses.len(),
                variations,
            }
        })
        .collect();
    slots.sort_by_key(|usage| usage.slot);

    let mut by_literal: IndexMap<&str, Vec<String>> = IndexMap::new();
    for u in &classification.unmapped {
        by_literal.entry(u.color.as_str()).or_default().push(u.key.clone());
    }
    let mut unmapped: Vec<UnmappedColor> = by_literal
        .into_iter()
        .map(|(color, keys)| {
            let nearest = nearest_slot(color, palette);
            UnmappedColor {
                color: color.to_string(),
                keys,
                nearest,
                nearest_color: nearest.slot.and_then(|s| palette.get(s)).map(str::to_string),
                band: nearest.delta_e.map(DeltaBand::classify),
            }
        })
        .collect();
    // Stable: ties keep first-use order.
    unmapped.sort_by(|a, b| b.keys.len().cmp(&a.keys.len()));

    let similar_unmapped = unmapped
        .iter()
        .filter(|u| u.band.is_some_and(DeltaBand::is_similar))
        .count();
    let different_unmapped = unmapped
        .iter()
        .filter(|u| u.band.is_some_and(|b| !b.is_similar()))
        .count();

    let mut repeated: Vec<RepeatedColor> = groups
        .iter()
        .filter(|(_, keys)| keys.len() > 1)
        .map(|(color, keys)| RepeatedColor {
            color: format!("#{color}"),
            uses: keys.len(),
        })
        .collect();
    repeated.sort_by(|a, b| b.uses.cmp(&a.uses));
    repeated.truncate(MOST_REPEATED);

    let summary = Summary {
        total_keys: flat.len(),
        mapped_keys: classification.mapped_count(),
        unmapped_keys: classification.unmapped.len(),
        slots_used: classification.mapped.len(),
        palette_size: palette.len(),
        unique_unmapped: unmapped.len(),
        similar_unmapped,
        different_unmapped,
        most_repeated: repeated,
    };

    Analysis {
        slots,
        unmapped,
        summary,
    }
}
