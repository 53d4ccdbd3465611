#![forbid(unsafe_code)]

//! Directional runs and visual ordering.
//!
//! This is deliberately not UAX#9. The shaped arena is cut into maximal runs
//! of one strong direction, with neutral characters (digits, spaces,
//! punctuation) joining whatever run is open. Rendering then depends on the
//! paragraph direction:
//!
//! - RTL paragraph: runs are emitted last to first, and every run keeps its
//!   logical character order. Arabic glyphs are already in the order the
//!   consumer lays out right-to-left; Latin words are never reversed.
//! - LTR paragraph: runs are emitted first to last; RTL runs are reversed
//!   character by character, LTR runs are kept.
//!
//! # Example
//!
//! ```rust
//! use qalam_text::classify::analyze;
//! use qalam_text::runs::build_runs;
//!
//! let chars = analyze("Hi \u{0645}\u{0646}");
//! let runs = build_runs(&chars);
//! assert_eq!(runs.len(), 2);
//! assert!(!runs[0].is_rtl);
//! assert!(runs[1].is_rtl);
//! ```

use std::ops::Range;

use crate::classify::{CharInfo, Direction};
use crate::error::ShapeError;

/// A contiguous run of the arena sharing one direction.
///
/// Indices are positions in the shaped [`CharInfo`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextRun {
    /// Whether the run reads right-to-left.
    pub is_rtl: bool,
    /// Start index (inclusive).
    pub start: usize,
    /// End index (exclusive).
    pub end: usize,
}

impl TextRun {
    fn starting_at(start: usize, is_rtl: bool) -> Self {
        Self {
            is_rtl,
            start,
            end: start + 1,
        }
    }

    /// Number of characters in this run.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the run is empty.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// The run's slots, or an error if the run does not fit `chars`.
    pub fn chars<'a>(&self, chars: &'a [CharInfo]) -> Result<&'a [CharInfo], ShapeError> {
        chars.get(self.range()).ok_or(ShapeError::RunOutOfBounds {
            start: self.start,
            end: self.end,
            len: chars.len(),
        })
    }
}

/// Partition `chars` into directional runs.
///
/// The first character opens a run whose direction is RTL only if that
/// character is RTL; a leading neutral therefore opens a non-RTL run, and a
/// following Arabic letter starts a run of its own.
pub fn build_runs(chars: &[CharInfo]) -> Vec<TextRun> {
    let mut runs = Vec::new();
    let mut current: Option<TextRun> = None;

    for (i, info) in chars.iter().enumerate() {
        let is_rtl = info.direction == Direction::Rtl;
        match current.as_mut() {
            Some(run) if info.direction == Direction::Neutral || run.is_rtl == is_rtl => {
                run.end = i + 1;
            }
            _ => {
                if let Some(run) = current.replace(TextRun::starting_at(i, is_rtl)) {
                    runs.push(run);
                }
            }
        }
    }

    runs.extend(current);
    runs
}

/// More than half of the non-space, non-diacritic characters are Arabic.
pub fn is_primarily_arabic(chars: &[CharInfo]) -> bool {
    let (arabic, total) = chars
        .iter()
        .filter(|c| !c.is_whitespace() && !c.is_diacritic())
        .fold((0usize, 0usize), |(arabic, total), c| {
            (arabic + usize::from(c.is_arabic()), total + 1)
        });
    total > 0 && arabic * 2 > total
}

/// Emit the processed characters of `chars` in visual order.
pub fn render(chars: &[CharInfo], runs: &[TextRun], rtl: bool) -> Result<String, ShapeError> {
    let mut out = String::with_capacity(chars.len() * 3);

    if rtl {
        for run in runs.iter().rev() {
            out.extend(run.chars(chars)?.iter().map(|c| c.processed));
        }
    } else {
        for run in runs {
            let slots = run.chars(chars)?.iter().map(|c| c.processed);
            if run.is_rtl {
                out.extend(slots.rev());
            } else {
                out.extend(slots);
            }
        }
    }

    Ok(out)
}

/// Build runs for `chars` and render them.
///
/// The paragraph is RTL when `force_rtl` is set or the text is mostly Arabic.
pub fn reorder(chars: &[CharInfo], force_rtl: bool) -> Result<String, ShapeError> {
    if chars.is_empty() {
        return Ok(String::new());
    }
    let runs = build_runs(chars);
    let rtl = force_rtl || is_primarily_arabic(chars);
    render(chars, &runs, rtl)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::analyze;

    fn run_texts(text: &str) -> Vec<(bool, String)> {
        let chars = analyze(text);
        build_runs(&chars)
            .iter()
            .map(|run| {
                let s = run
                    .chars(&chars)
                    .unwrap()
                    .iter()
                    .map(|c| c.original)
                    .collect();
                (run.is_rtl, s)
            })
            .collect()
    }

    #[test]
    fn empty_has_no_runs() {
        assert!(build_runs(&[]).is_empty());
    }

    #[test]
    fn neutrals_join_open_run() {
        let runs = run_texts("Hello \u{0645}\u{0646} World");
        assert_eq!(
            runs,
            vec![
                (false, "Hello ".to_string()),
                (true, "\u{0645}\u{0646} ".to_string()),
                (false, "World".to_string()),
            ]
        );
    }

    #[test]
    fn leading_neutral_opens_non_rtl_run() {
        // The leading space is not re-tagged once Arabic follows.
        let runs = run_texts(" \u{0645}\u{0646}");
        assert_eq!(
            runs,
            vec![(false, " ".to_string()), (true, "\u{0645}\u{0646}".to_string())]
        );
    }

    #[test]
    fn leading_neutral_absorbs_latin() {
        let runs = run_texts("12 ab");
        assert_eq!(runs, vec![(false, "12 ab".to_string())]);
    }

    #[test]
    fn runs_partition_the_arena() {
        let chars = analyze("a \u{0628}, b 1 \u{062A}");
        let runs = build_runs(&chars);
        assert_eq!(runs.first().map(|r| r.start), Some(0));
        assert_eq!(runs.last().map(|r| r.end), Some(chars.len()));
        for pair in runs.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
            assert_ne!(pair[0].is_rtl, pair[1].is_rtl);
        }
        assert_eq!(runs.iter().map(TextRun::len).sum::<usize>(), chars.len());
    }

    #[test]
    fn majority_heuristic() {
        assert!(is_primarily_arabic(&analyze("\u{0645}\u{0646} a")));
        assert!(!is_primarily_arabic(&analyze("\u{0645} a")));
        assert!(!is_primarily_arabic(&analyze("   ")));
        assert!(!is_primarily_arabic(&[]));
        // Diacritics are not counted.
        assert!(!is_primarily_arabic(&analyze("\u{0645}\u{064E}\u{064E} a")));
    }

    #[test]
    fn rtl_paragraph_reverses_runs_not_characters() {
        let chars = analyze("ab \u{0645}\u{0646} cd");
        let out = reorder(&chars, true).unwrap();
        assert_eq!(out, "cd\u{0645}\u{0646} ab ");
    }

    #[test]
    fn ltr_paragraph_reverses_rtl_runs_only() {
        let chars = analyze("ab \u{0645}\u{0646}");
        let out = reorder(&chars, false).unwrap();
        assert_eq!(out, "ab \u{0646}\u{0645}");
    }

    #[test]
    fn mostly_arabic_text_gets_rtl_paragraph_without_forcing() {
        let chars = analyze("\u{0645}\u{0646}\u{0647} ab");
        let out = reorder(&chars, false).unwrap();
        assert_eq!(out, "ab\u{0645}\u{0646}\u{0647} ");

        // Latin majority stays LTR.
        let chars = analyze("\u{0645}\u{0646} abc");
        let out = reorder(&chars, false).unwrap();
        assert_eq!(out, " \u{0646}\u{0645}abc");
    }

    #[test]
    fn out_of_bounds_run_is_an_error() {
        let chars = analyze("ab");
        let bad = TextRun {
            is_rtl: false,
            start: 1,
            end: 5,
        };
        assert_eq!(
            render(&chars, &[bad], false),
            Err(ShapeError::RunOutOfBounds {
                start: 1,
                end: 5,
                len: 2
            })
        );
    }
}
