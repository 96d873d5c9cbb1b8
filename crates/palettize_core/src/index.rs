//! Exact and nearest-neighbor lookup of colors against a palette.

use std::collections::HashMap;

use serde::Serialize;

use crate::color::{normalize, strip_alpha};
use crate::distance::{perceptual_distance, rgb_distance};
use crate::palette::Palette;
use crate::slot::Slot;

/// Alpha-stripped normalized palette color → slot.
///
/// Built in palette order; when two slots share a color the later slot wins.
#[derive(Debug, Clone, Default)]
pub struct ExactIndex {
    by_color: HashMap<String, Slot>,
}

impl ExactIndex {
    pub fn build(palette: &Palette) -> Self {
        let mut by_color = HashMap::with_capacity(palette.len());
        for (slot, color) in palette.iter() {
            // Later slots overwrite earlier ones.
            by_color.insert(strip_alpha(color), slot);
        }
        Self { by_color }
    }

    /// Look up the alpha-stripped form of `color`.
    pub fn lookup(&self, color: &str) -> Option<Slot> {
        self.by_color.get(&strip_alpha(color)).copied()
    }

    /// Look up the full normalized form first, then the alpha-stripped form.
    pub fn lookup_full_then_stripped(&self, color: &str) -> Option<Slot> {
        self.by_color
            .get(&normalize(color))
            .or_else(|| self.by_color.get(&strip_alpha(color)))
            .copied()
    }

    pub fn len(&self) -> usize {
        self.by_color.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_color.is_empty()
    }
}

/// Closest palette slot by RGB distance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NearestMatch {
    /// `None` only for an empty palette.
    pub slot: Option<Slot>,
    pub rgb_distance: f64,
    /// Delta E to the winning slot; `None` when it could not be computed.
    pub delta_e: Option<f64>,
}

impl NearestMatch {
    pub const UNKNOWN: NearestMatch = NearestMatch {
        slot: None,
        rgb_distance: f64::INFINITY,
        delta_e: None,
    };

    pub fn slot_name(&self) -> &'static str {
        self.slot.map_or("unknown", Slot::name)
    }
}

/// Scan every palette entry for the minimum RGB distance.
///
/// Ties keep the first slot encountered. Delta E is computed once, for the
/// winner.
pub fn nearest_slot(color: &str, palette: &Palette) -> NearestMatch {
    let target = strip_alpha(color);

    let mut best: Option<(Slot, &str, f64)> = None;
    for (slot, candidate) in palette.iter() {
        let distance = rgb_distance(&target, candidate);
        if best.is_none_or(|(_, _, min)| distance < min) {
            best = Some((slot, candidate, distance));
        }
    }

    match best {
        Some((slot, candidate, distance)) => NearestMatch {
            slot: Some(slot),
            rgb_distance: distance,
            delta_e: perceptual_distance(&target, candidate),
        },
        None => NearestMatch::UNKNOWN,
    }
}
