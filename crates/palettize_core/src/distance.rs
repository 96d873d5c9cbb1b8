//! Color distance metrics: plain RGB Euclidean distance and CIEDE2000.

use std::fmt;

use ::palette::color_difference::Ciede2000;
use ::palette::{IntoColor, Lab, Srgb};
use serde::Serialize;

use crate::color::{parse_rgb, strip_alpha, to_rgb, Rgb};

/// Black-to-white distance, `sqrt(3 * 255^2)`.
pub const MAX_RGB_DISTANCE: f64 = 441.672_955_930_063_7;

/// Euclidean distance in 8-bit RGB space between the alpha-stripped colors.
///
/// Range is `0.0..=MAX_RGB_DISTANCE`. Malformed literals are measured as black.
pub fn rgb_distance(a: &str, b: &str) -> f64 {
    let Rgb(r1, g1, b1) = to_rgb(&strip_alpha(a));
    let Rgb(r2, g2, b2) = to_rgb(&strip_alpha(b));
    let dr = f64::from(r1) - f64::from(r2);
    let dg = f64::from(g1) - f64::from(g2);
    let db = f64::from(b1) - f64::from(b2);
    (dr * dr + dg * dg + db * db).sqrt()
}

/// CIEDE2000 Delta E between the alpha-stripped colors.
///
/// `None` means no perceptual judgment is possible (a literal did not decode),
/// never "identical".
pub fn perceptual_distance(a: &str, b: &str) -> Option<f64> {
    let lab_a = to_lab(parse_rgb(&strip_alpha(a))?);
    let lab_b = to_lab(parse_rgb(&strip_alpha(b))?);
    let delta = lab_a.difference(lab_b);
    delta.is_finite().then_some(f64::from(delta))
}

fn to_lab(rgb: Rgb) -> Lab {
    Srgb::new(rgb.r(), rgb.g(), rgb.b())
        .into_format::<f32>()
        .into_color()
}

/// Interpretation bands for a Delta E value. Reporting only.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeltaBand {
    /// < 1
    Imperceptible,
    /// 1–2
    CloseInspection,
    /// 2–10
    Similar,
    /// 10–50
    Different,
    /// > 50
    VeryDifferent,
}

impl DeltaBand {
    pub fn classify(delta_e: f64) -> Self {
        if delta_e < 1.0 {
            DeltaBand::Imperceptible
        } else if delta_e < 2.0 {
            DeltaBand::CloseInspection
        } else if delta_e < 10.0 {
            DeltaBand::Similar
        } else if delta_e <= 50.0 {
            DeltaBand::Different
        } else {
            DeltaBand::VeryDifferent
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DeltaBand::Imperceptible => "imperceptible",
            DeltaBand::CloseInspection => "perceptible on close inspection",
            DeltaBand::Similar => "similar",
            DeltaBand::Different => "different",
            DeltaBand::VeryDifferent => "very different",
        }
    }

    /// Similar enough to be worth a fuzzy substitution (Delta E < 10).
    pub fn is_similar(self) -> bool {
        self <= DeltaBand::Similar
    }
}

impl fmt::Display for DeltaBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
