//! Color literal normalization.
//!
//! Theme and palette documents spell colors as `#RRGGBB`, `#RRGGBBAA` or the
//! same without the leading `#`, in any case. Everything here is lenient: a
//! malformed literal never fails, it degrades to an empty string or black.

use std::fmt;

/// Transparent tokens treated as "no color". Never matched or rewritten.
pub const TRANSPARENT_SENTINELS: [&str; 2] = ["#0000", "#00000000"];

/// RGB triplet decoded from a hex literal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb(r, g, b)
    }

    pub fn r(self) -> u8 {
        self.0
    }
    pub fn g(self) -> u8 {
        self.1
    }
    pub fn b(self) -> u8 {
        self.2
    }

    pub fn tuple(self) -> (u8, u8, u8) {
        (self.0, self.1, self.2)
    }

    /// Lower-case `#rrggbb`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

impl From<Rgb> for (u8, u8, u8) {
    fn from(c: Rgb) -> Self {
        c.tuple()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Lower-cases and strips surrounding whitespace and any leading `#`.
///
/// Idempotent: `normalize(&normalize(c)) == normalize(c)`.
pub fn normalize(color: &str) -> String {
    color
        .trim()
        .trim_start_matches(|c: char| c == '#' || c.is_whitespace())
        .to_ascii_lowercase()
}

/// Normalized form truncated to its first six characters when an alpha
/// suffix may be present (length ≥ 8).
pub fn strip_alpha(color: &str) -> String {
    let normalized = normalize(color);
    if normalized.len() >= 8 {
        if let Some(rgb) = normalized.get(..6) {
            return rgb.to_string();
        }
    }
    normalized
}

/// The two-digit alpha suffix of an `RRGGBBAA` literal, if it has one.
pub fn alpha_suffix(color: &str) -> Option<String> {
    let normalized = normalize(color);
    if normalized.len() == 8 {
        normalized.get(6..8).map(str::to_string)
    } else {
        None
    }
}

/// Whether a string is routed through color handling at all.
///
/// Only the leading `#` is checked; malformed hash-prefixed strings still go
/// through the lenient normalizer.
pub fn looks_like_color(value: &str) -> bool {
    value.starts_with('#')
}

/// `#0000` and `#00000000`, in any case.
pub fn is_transparent_sentinel(color: &str) -> bool {
    TRANSPARENT_SENTINELS
        .iter()
        .any(|sentinel| sentinel.eq_ignore_ascii_case(color))
}

/// Decodes the first six hex digits, or `None` if they are missing or invalid.
pub fn parse_rgb(color: &str) -> Option<Rgb> {
    let normalized = normalize(color);
    let hex = normalized.get(..6)?;
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
    Some(Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

/// Decodes the first six hex digits; malformed or short input yields black.
///
/// Black is not a validity signal, use [`parse_rgb`] for that.
pub fn to_rgb(color: &str) -> Rgb {
    parse_rgb(color).unwrap_or(Rgb::BLACK)
}

/// `#rrggbb` suitable for a terminal swatch: alpha dropped, transparent and
/// empty values shown as black.
pub fn display_color(color: &str) -> String {
    if color.is_empty() || color.eq_ignore_ascii_case("#0000") {
        return "#000000".to_string();
    }
    let stripped = strip_alpha(color);
    if stripped.is_empty() {
        "#000000".to_string()
    } else {
        format!("#{stripped}")
    }
}
