#![forbid(unsafe_code)]

//! Top-level shaping entry points.
//!
//! [`fix`] takes logical-order text and returns the presentation-form string
//! a renderer can lay out glyph by glyph. It never fails: any fault inside the
//! pipeline, including a panic, is logged and the input is returned as given.
//! [`try_fix`] exposes the same pipeline with its error.
//!
//! # Example
//! ```
//! use qalam_core::ShapeOptions;
//! use qalam_text::fix;
//!
//! // لا shapes to the isolated Lam-Alef ligature.
//! assert_eq!(fix("\u{0644}\u{0627}", &ShapeOptions::default()), "\u{FEFB}");
//!
//! // Text without Arabic is returned untouched when RTL is not forced.
//! let opts = ShapeOptions::default().with_force_rtl(false);
//! assert_eq!(fix("<b>Hello</b>", &opts), "<b>Hello</b>");
//! ```

use std::panic::{AssertUnwindSafe, catch_unwind};

use qalam_core::ShapeOptions;

use crate::classify::{analyze, contains_arabic};
use crate::ligature::resolve_ligatures;
use crate::numerals::convert_numerals;
use crate::runs::reorder;
use crate::shaper::apply_shaping;
use crate::tags::{Tags, extract_tags, reinsert_tags};

pub use crate::error::ShapeError;

/// Shape `text` for display. Never fails; see the module docs.
pub fn fix(text: &str, options: &ShapeOptions) -> String {
    fail_safe(text, || try_fix(text, options))
}

/// [`fix`] with the four switches spelled out.
pub fn fix_with(
    text: &str,
    show_tashkeel: bool,
    preserve_numbers: bool,
    fix_tags: bool,
    force_rtl: bool,
) -> String {
    let options = ShapeOptions {
        show_tashkeel,
        preserve_numbers,
        fix_tags,
        force_rtl,
    };
    fix(text, &options)
}

/// Shape every string of `texts` with the same options.
pub fn fix_all<I, S>(texts: I, options: &ShapeOptions) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    texts
        .into_iter()
        .map(|text| fix(text.as_ref(), options))
        .collect()
}

/// The shaping pipeline, returning its fault instead of hiding it.
///
/// Panics are not caught here; [`fix`] does that.
pub fn try_fix(text: &str, options: &ShapeOptions) -> Result<String, ShapeError> {
    if text.is_empty() {
        return Ok(String::new());
    }

    let _span = tracing::debug_span!("qalam.fix", bytes = text.len()).entered();

    let (plain, tags) = if options.fix_tags {
        extract_tags(text)
    } else {
        (text.to_string(), Tags::new())
    };

    if !options.force_rtl && !contains_arabic(&plain) {
        tracing::trace!("no Arabic and RTL not forced; passing through");
        return Ok(text.to_string());
    }

    let shaped = shape_plain(&plain, options)?;

    if tags.is_empty() {
        Ok(shaped)
    } else {
        tracing::trace!(tags = tags.len(), "reinserting markup tags");
        Ok(reinsert_tags(&shaped, &tags))
    }
}

/// Shape tag-free text.
fn shape_plain(text: &str, options: &ShapeOptions) -> Result<String, ShapeError> {
    let mut chars = analyze(text);

    if !options.show_tashkeel {
        chars.retain(|c| !c.is_diacritic());
    }
    if !options.preserve_numbers {
        convert_numerals(&mut chars);
    }

    resolve_ligatures(&mut chars);
    apply_shaping(&mut chars);
    reorder(&chars, options.force_rtl)
}

/// Run `shape`, falling back to `original` on error or panic.
fn fail_safe<F>(original: &str, shape: F) -> String
where
    F: FnOnce() -> Result<String, ShapeError>,
{
    let result = catch_unwind(AssertUnwindSafe(shape))
        .unwrap_or_else(|payload| Err(ShapeError::from_panic(payload)));

    match result {
        Ok(shaped) => shaped,
        Err(err) => {
            tracing::error!(error = %err, "failed to shape text; returning input unchanged");
            original.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    fn defaults() -> ShapeOptions {
        ShapeOptions::default()
    }

    #[test]
    fn empty_input() {
        assert_eq!(fix("", &defaults()), "");
        assert_eq!(try_fix("", &defaults()), Ok(String::new()));
    }

    #[test]
    fn lam_alef_isolated_and_connected() {
        assert_eq!(fix("\u{0644}\u{0627}", &defaults()), "\u{FEFB}");
        assert_eq!(fix("\u{0628}\u{0644}\u{0627}", &defaults()), "\u{FE91}\u{FEFC}");
    }

    #[test]
    fn fast_path_returns_input_verbatim() {
        let opts = defaults().with_force_rtl(false);
        assert_eq!(fix("Hello <b>World</b> 42", &opts), "Hello <b>World</b> 42");
        let opts = opts.with_preserve_numbers(false);
        assert_eq!(fix("Price: 123", &opts), "Price: 123");
    }

    #[test]
    fn forced_rtl_processes_latin_only_text() {
        let opts = defaults().with_preserve_numbers(false);
        assert_eq!(fix("Price: 123", &opts), "Price: \u{0661}\u{0662}\u{0663}");
        assert_eq!(fix("Price: 123", &defaults()), "Price: 123");
    }

    #[test]
    fn tashkeel_dropped_without_breaking_joins() {
        let text = "\u{0628}\u{064E}\u{062A}";
        assert_eq!(
            fix(text, &defaults().with_show_tashkeel(false)),
            "\u{FE91}\u{FE96}"
        );
        assert_eq!(fix(text, &defaults()), "\u{FE91}\u{064E}\u{FE96}");
    }

    #[test]
    fn tags_survive_shaping() {
        assert_eq!(
            fix("<b>\u{0645}\u{0631}\u{062D}\u{0628}\u{0627}</b>", &defaults()),
            "<b>\u{FEE3}\u{FEAE}\u{FEA3}\u{FE92}\u{FE8E}</b>"
        );
    }

    #[test]
    fn tags_treated_as_text_when_disabled() {
        // The leading `<` opens its own non-RTL run; the trailing `>` joins
        // the Arabic run. Run order then flips.
        let opts = defaults().with_fix_tags(false);
        assert_eq!(fix("<\u{0628}>", &opts), "\u{0628}><");
    }

    #[test]
    fn fix_with_matches_options() {
        let text = "\u{0628}\u{064E} 12";
        assert_eq!(
            fix_with(text, false, false, true, true),
            fix(
                text,
                &ShapeOptions::new()
                    .with_show_tashkeel(false)
                    .with_preserve_numbers(false)
            )
        );
    }

    #[test]
    fn fix_all_shapes_each() {
        let out = fix_all(["\u{0644}\u{0627}", "", "abc"], &defaults());
        assert_eq!(out, vec!["\u{FEFB}".to_string(), String::new(), "abc".to_string()]);
    }

    #[traced_test]
    #[test]
    fn fail_safe_returns_original_on_error() {
        let out = fail_safe("original", || {
            Err(ShapeError::RunOutOfBounds {
                start: 0,
                end: 9,
                len: 1,
            })
        });
        assert_eq!(out, "original");
        assert!(logs_contain("failed to shape text"));
        assert!(logs_contain("run 0..9 out of bounds for 1 characters"));
    }

    #[traced_test]
    #[test]
    fn fail_safe_contains_panics() {
        let out = fail_safe("original", || panic!("boom"));
        assert_eq!(out, "original");
        assert!(logs_contain("shaping panicked: boom"));
    }

    #[test]
    fn fail_safe_passes_success_through() {
        assert_eq!(fail_safe("x", || Ok("y".to_string())), "y");
    }

    #[test]
    fn concurrent_callers_get_identical_output() {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                std::thread::spawn(|| {
                    (0..50)
                        .map(|_| fix("\u{0628}\u{0644}\u{0627}", &ShapeOptions::default()))
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        for handle in handles {
            let outputs = handle.join().unwrap();
            assert!(outputs.iter().all(|out| out == "\u{FE91}\u{FEFC}"));
        }
    }
}
