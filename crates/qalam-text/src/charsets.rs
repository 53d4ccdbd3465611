#![forbid(unsafe_code)]

//! Unicode range descriptors for building glyph atlases.
//!
//! A descriptor is a newline-separated list of hex ranges (`0600-06FF`) or
//! comma-separated single code points (`067E, 0686`), the format font asset
//! tools accept. The three fixed descriptors cover the common cases;
//! [`CharsetBlocks`] composes custom ones and [`parse_charset`] expands a
//! descriptor into the characters it names.

use bitflags::bitflags;

const ARABIC_BASIC: &str = "0600-06FF";
const ARABIC_SUPPLEMENT: &str = "0750-077F";
const ARABIC_EXTENDED_A: &str = "08A0-08FF";
const PRESENTATION_FORMS_A: &str = "FB50-FDFF";
const PRESENTATION_FORMS_B: &str = "FE70-FEFF";
const PERSIAN_LETTERS: &str = "067E, 0686, 0698, 06AF";
const BASIC_LATIN: &str = "0020-007F";

/// Every Arabic block plus Basic Latin for mixed text.
pub fn complete_arabic_charset() -> &'static str {
    "0600-06FF\n0750-077F\n08A0-08FF\nFB50-FDFF\nFE70-FEFF\n0020-007F\n"
}

/// Arabic, Presentation Forms-B, and Basic Latin.
pub fn basic_arabic_charset() -> &'static str {
    "0600-06FF\nFE70-FEFF\n0020-007F\n"
}

/// The four Persian letters (پ چ ژ گ) to add to an Arabic font.
pub fn persian_charset() -> &'static str {
    "067E, 0686, 0698, 06AF\n"
}

bitflags! {
    /// Blocks to include in a custom descriptor.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct CharsetBlocks: u8 {
        const ARABIC_BASIC         = 1 << 0;
        const ARABIC_SUPPLEMENT    = 1 << 1;
        const ARABIC_EXTENDED_A    = 1 << 2;
        const PRESENTATION_FORMS_A = 1 << 3;
        const PRESENTATION_FORMS_B = 1 << 4;
        const PERSIAN              = 1 << 5;
    }
}

impl Default for CharsetBlocks {
    fn default() -> Self {
        Self::all()
    }
}

impl CharsetBlocks {
    /// Descriptor for the selected blocks, always ending with Basic Latin.
    #[must_use]
    pub fn descriptor(self) -> String {
        let sections = [
            (Self::ARABIC_BASIC, ARABIC_BASIC),
            (Self::ARABIC_SUPPLEMENT, ARABIC_SUPPLEMENT),
            (Self::ARABIC_EXTENDED_A, ARABIC_EXTENDED_A),
            (Self::PRESENTATION_FORMS_A, PRESENTATION_FORMS_A),
            (Self::PRESENTATION_FORMS_B, PRESENTATION_FORMS_B),
            (Self::PERSIAN, PERSIAN_LETTERS),
        ];

        let mut out = String::new();
        for (block, range) in sections {
            if self.contains(block) {
                out.push_str(range);
                out.push('\n');
            }
        }
        out.push_str(BASIC_LATIN);
        out.push('\n');
        out
    }
}

/// Errors from [`parse_charset`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CharsetError {
    /// A token is not a hex code point.
    InvalidHex { token: String, line: usize },
    /// A range ends before it starts.
    ReversedRange { start: u32, end: u32, line: usize },
    /// A single code point is not a Unicode scalar value.
    InvalidCodePoint { value: u32, line: usize },
}

impl std::fmt::Display for CharsetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidHex { token, line } => {
                write!(f, "invalid hex code point '{}' on line {}", token, line)
            }
            Self::ReversedRange { start, end, line } => {
                write!(f, "range {:04X}-{:04X} on line {} is reversed", start, end, line)
            }
            Self::InvalidCodePoint { value, line } => {
                write!(f, "U+{:04X} on line {} is not a valid character", value, line)
            }
        }
    }
}

impl std::error::Error for CharsetError {}

/// Expand a descriptor into a sorted, deduplicated list of characters.
///
/// Surrogate code points inside a range are skipped; a lone surrogate is an
/// error. Lines are numbered from 1.
pub fn parse_charset(descriptor: &str) -> Result<Vec<char>, CharsetError> {
    let mut out = Vec::new();

    for (index, raw_line) in descriptor.lines().enumerate() {
        let line = index + 1;
        for token in raw_line.split(',').map(str::trim).filter(|t| !t.is_empty()) {
            match token.split_once('-') {
                Some((start, end)) => {
                    let start = parse_hex(start.trim(), line)?;
                    let end = parse_hex(end.trim(), line)?;
                    if end < start {
                        return Err(CharsetError::ReversedRange { start, end, line });
                    }
                    out.extend((start..=end).filter_map(char::from_u32));
                }
                None => {
                    let value = parse_hex(token, line)?;
                    let c = char::from_u32(value)
                        .ok_or(CharsetError::InvalidCodePoint { value, line })?;
                    out.push(c);
                }
            }
        }
    }

    out.sort_unstable();
    out.dedup();
    Ok(out)
}

fn parse_hex(token: &str, line: usize) -> Result<u32, CharsetError> {
    let digits = token
        .strip_prefix("U+")
        .or_else(|| token.strip_prefix("0x"))
        .unwrap_or(token);
    u32::from_str_radix(digits, 16).map_err(|_| CharsetError::InvalidHex {
        token: token.to_string(),
        line,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_descriptors() {
        assert_eq!(complete_arabic_charset().lines().count(), 6);
        assert!(complete_arabic_charset().ends_with("0020-007F\n"));
        assert_eq!(basic_arabic_charset(), "0600-06FF\nFE70-FEFF\n0020-007F\n");
        assert_eq!(persian_charset(), "067E, 0686, 0698, 06AF\n");
    }

    #[test]
    fn builder_reproduces_fixed_descriptors() {
        let complete = CharsetBlocks::all() - CharsetBlocks::PERSIAN;
        assert_eq!(complete.descriptor(), complete_arabic_charset());

        let basic = CharsetBlocks::ARABIC_BASIC | CharsetBlocks::PRESENTATION_FORMS_B;
        assert_eq!(basic.descriptor(), basic_arabic_charset());
    }

    #[test]
    fn empty_selection_is_latin_only() {
        assert_eq!(CharsetBlocks::empty().descriptor(), "0020-007F\n");
    }

    #[test]
    fn default_includes_persian() {
        assert!(CharsetBlocks::default().descriptor().contains(PERSIAN_LETTERS));
    }

    #[test]
    fn parse_persian() {
        let chars = parse_charset(persian_charset()).unwrap();
        assert_eq!(chars, vec!['\u{067E}', '\u{0686}', '\u{0698}', '\u{06AF}']);
    }

    #[test]
    fn parse_basic_counts() {
        let chars = parse_charset(basic_arabic_charset()).unwrap();
        assert_eq!(chars.len(), 0x100 + 0x90 + 0x60);
        assert!(chars.contains(&'\u{FEFB}'));
        assert!(chars.contains(&'A'));
    }

    #[test]
    fn parse_dedups_overlaps() {
        let chars = parse_charset("0041-0043\n0042, 0041").unwrap();
        assert_eq!(chars, vec!['A', 'B', 'C']);
    }

    #[test]
    fn parse_accepts_prefixes() {
        assert_eq!(parse_charset("U+0041, 0x0042").unwrap(), vec!['A', 'B']);
    }

    #[test]
    fn parse_skips_surrogates_in_range() {
        let chars = parse_charset("D7FF-E000").unwrap();
        assert_eq!(chars, vec!['\u{D7FF}', '\u{E000}']);
    }

    #[test]
    fn parse_errors() {
        assert_eq!(
            parse_charset("0600-06FF\nzz"),
            Err(CharsetError::InvalidHex {
                token: "zz".to_string(),
                line: 2
            })
        );
        assert_eq!(
            parse_charset("06FF-0600"),
            Err(CharsetError::ReversedRange {
                start: 0x06FF,
                end: 0x0600,
                line: 1
            })
        );
        assert_eq!(
            parse_charset("D800"),
            Err(CharsetError::InvalidCodePoint {
                value: 0xD800,
                line: 1
            })
        );
    }

    #[test]
    fn error_display() {
        let err = CharsetError::ReversedRange {
            start: 0x06FF,
            end: 0x0600,
            line: 3,
        };
        assert_eq!(err.to_string(), "range 06FF-0600 on line 3 is reversed");
    }
}
