//! Palettize core: base16 palettes in, editor themes out.
//!
//! Two directions over the same color matching:
//!
//! - **Templatization**: abstract a concrete theme's colors into `{{ baseNN }}`
//!   placeholders, exactly or within a Delta E threshold.
//! - **Materialization**: bind a palette into a template to get a concrete theme.
//!
//! Plus a read-only analysis of how a theme uses a palette.
//!
//! Everything here is synchronous and pure over its inputs; only `source`
//! touches the filesystem.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use palettize_core::{build_theme, generate_template, load_palette, load_theme, render_template};
//!
//! fn main() -> palettize_core::Result<()> {
//!     let palette = load_palette("data/rose-pine-moon.yml")?;
//!     let theme = load_theme("data/rose-pine-moon.json")?;
//!
//!     // "#ea9a97e6" becomes "{{ base0A }}e6"
//!     let template = generate_template(&theme, &palette, Some(5.0));
//!     let text = palettize_core::format_template(&template)?;
//!
//!     // ...and back again
//!     let rebuilt = build_theme(&text, &palette)?;
//!     println!("{}", render_template("{{ theme_name }}", &palette)?);
//!     assert_eq!(rebuilt["name"], theme["name"]);
//!     Ok(())
//! }
//! ```

pub mod analyze;
pub mod color;
pub mod config;
pub mod distance;
pub mod error;
pub mod index;
pub mod materialize;
pub mod palette;
pub mod slot;
pub mod source;
pub mod template;
pub mod walk;

// Re-export main types at crate root
pub use analyze::{analyze, classify, flatten, group_by_color, Analysis, Classification, UNMAPPED};
pub use color::{display_color, normalize, strip_alpha, Rgb};
pub use config::PalettizeConfig;
pub use distance::{perceptual_distance, rgb_distance, DeltaBand};
pub use error::{Error, Result};
pub use index::{nearest_slot, ExactIndex, NearestMatch};
pub use materialize::{bind_palette, build_theme, output_file_name, render_template, BindingContext};
pub use crate::palette::{Palette, Variant};
pub use slot::Slot;
pub use source::{load_palette, load_template, load_theme, write_json, write_text};
pub use template::{
    color_to_placeholder, format_template, generate_template, Template, TemplateReport, Templatizer,
};
pub use walk::rewrite;
