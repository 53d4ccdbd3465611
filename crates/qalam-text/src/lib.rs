#![forbid(unsafe_code)]

//! Arabic text shaping for renderers without a shaping engine.
//!
//! Given logical-order text mixing Arabic and Latin script, [`fix`] produces
//! a string of presentation-form glyphs that can be drawn one code point at a
//! time:
//! - contextual forms (isolated/initial/medial/final) from a fixed glyph table
//! - Lam-Alef ligatures
//! - optional removal of diacritics and Eastern-Arabic digit conversion
//! - run-level reordering for RTL and LTR paragraphs
//! - `<...>` markup tags left untouched
//!
//! The pipeline, stage by stage:
//! [`tags`] → [`classify`] → [`ligature`] → [`shaper`] → [`numerals`] →
//! [`runs`] → [`tags`].
//!
//! # Example
//! ```
//! use qalam_core::ShapeOptions;
//! use qalam_text::fix;
//!
//! let opts = ShapeOptions::default();
//! // بيت: initial Beh, medial Yeh, final Teh.
//! assert_eq!(fix("\u{0628}\u{064A}\u{062A}", &opts), "\u{FE91}\u{FEF4}\u{FE96}");
//!
//! // In an RTL paragraph the runs flip; the Latin word keeps its spelling.
//! assert_eq!(fix("ok \u{0628}", &opts), "\u{0628}ok ");
//! ```

pub mod cache;
pub mod charsets;
pub mod classify;
pub mod error;
pub mod fix;
pub mod label;
pub mod ligature;
pub mod numerals;
pub mod runs;
pub mod shaper;
pub mod tables;
pub mod tags;

pub use cache::{CacheStats, DEFAULT_CACHE_CAPACITY, ShapeCache};
pub use charsets::{
    CharsetBlocks, CharsetError, basic_arabic_charset, complete_arabic_charset, parse_charset,
    persian_charset,
};
pub use classify::{CharFlags, CharInfo, ConnectionType, Direction};
pub use error::ShapeError;
pub use fix::{fix, fix_all, fix_with, try_fix};
pub use label::{Alignment, ShapedLabel};
pub use qalam_core::ShapeOptions;
pub use runs::TextRun;
pub use shaper::LetterForm;
pub use tags::TagInfo;
