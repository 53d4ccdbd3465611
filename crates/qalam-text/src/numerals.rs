#![forbid(unsafe_code)]

//! Western to Eastern-Arabic digit conversion.

use crate::classify::CharInfo;
use crate::tables::eastern_digit;

/// Rewrite every ASCII digit slot to its Eastern-Arabic counterpart.
///
/// Only the processed character changes; classification stays with the
/// original digit, so converted digits remain direction-neutral.
pub fn convert_numerals(chars: &mut [CharInfo]) {
    for info in chars.iter_mut().filter(|c| c.is_digit()) {
        if let Some(digit) = eastern_digit(info.original) {
            info.processed = digit;
        }
    }
}

/// Convert the ASCII digits of a plain string, leaving everything else alone.
pub fn to_eastern_arabic(text: &str) -> String {
    text.chars().map(|c| eastern_digit(c).unwrap_or(c)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::{Direction, analyze};

    #[test]
    fn converts_ascii_digits_only() {
        let mut chars = analyze("a1\u{0663}9");
        convert_numerals(&mut chars);
        let out: String = chars.iter().map(|c| c.processed).collect();
        assert_eq!(out, "a\u{0661}\u{0663}\u{0669}");
    }

    #[test]
    fn converted_digits_stay_neutral() {
        let mut chars = analyze("5");
        convert_numerals(&mut chars);
        assert_eq!(chars[0].processed, '\u{0665}');
        assert_eq!(chars[0].direction, Direction::Neutral);
    }

    #[test]
    fn plain_string_conversion() {
        assert_eq!(to_eastern_arabic("Price: 123"), "Price: \u{0661}\u{0662}\u{0663}");
        assert_eq!(to_eastern_arabic(""), "");
    }
}
