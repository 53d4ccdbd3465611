#![forbid(unsafe_code)]

//! Per-character classification.
//!
//! [`analyze`] turns tag-free text into the arena of [`CharInfo`] records that
//! every later stage reads and rewrites. Classification always looks at the
//! original character, so later substitutions (digits, ligatures, shaped
//! forms) never change a slot's script or direction.

use bitflags::bitflags;

use crate::tables::{self, HAMZA};

bitflags! {
    /// Classification and bookkeeping flags for one character slot.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct CharFlags: u16 {
        /// Character lies in one of the Arabic blocks.
        const ARABIC      = 1 << 0;
        /// Arabic combining mark.
        const DIACRITIC   = 1 << 1;
        /// ASCII letter.
        const LATIN       = 1 << 2;
        /// Decimal digit.
        const DIGIT       = 1 << 3;
        const WHITESPACE  = 1 << 4;
        const PUNCTUATION = 1 << 5;
        /// Slot now holds a Lam-Alef ligature glyph.
        const LIGATURE    = 1 << 6;
        /// Slot was consumed by a ligature and is purged before shaping.
        const REMOVE      = 1 << 7;
    }
}

/// How a letter joins its neighbors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConnectionType {
    /// Does not join (non-Arabic characters, Hamza).
    None,
    /// Joins the previous letter only.
    Right,
    /// Joins on both sides.
    Dual,
    /// Diacritics: invisible to joining.
    Transparent,
}

/// Directional class used to build runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Rtl,
    Ltr,
    Neutral,
}

/// One character slot in the shaping arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharInfo {
    /// Character as it appeared in the input.
    pub original: char,
    /// Character written to the output.
    pub processed: char,
    pub flags: CharFlags,
    pub connection: ConnectionType,
    pub direction: Direction,
}

impl CharInfo {
    #[inline]
    pub fn is_arabic(&self) -> bool {
        self.flags.contains(CharFlags::ARABIC)
    }

    #[inline]
    pub fn is_diacritic(&self) -> bool {
        self.flags.contains(CharFlags::DIACRITIC)
    }

    #[inline]
    pub fn is_latin(&self) -> bool {
        self.flags.contains(CharFlags::LATIN)
    }

    #[inline]
    pub fn is_digit(&self) -> bool {
        self.flags.contains(CharFlags::DIGIT)
    }

    #[inline]
    pub fn is_whitespace(&self) -> bool {
        self.flags.contains(CharFlags::WHITESPACE)
    }

    #[inline]
    pub fn is_punctuation(&self) -> bool {
        self.flags.contains(CharFlags::PUNCTUATION)
    }

    #[inline]
    pub fn is_ligature(&self) -> bool {
        self.flags.contains(CharFlags::LIGATURE)
    }

    #[inline]
    pub fn should_remove(&self) -> bool {
        self.flags.contains(CharFlags::REMOVE)
    }

    /// True if either the original or the processed character cannot join forward.
    #[inline]
    pub fn is_right_connecting_only(&self) -> bool {
        tables::is_right_connecting_only(self.original)
            || tables::is_right_connecting_only(self.processed)
    }
}

/// Classify a single character before any substitution.
pub fn classify(c: char) -> CharInfo {
    let mut flags = CharFlags::empty();
    flags.set(CharFlags::ARABIC, is_arabic_char(c));
    flags.set(CharFlags::DIACRITIC, tables::is_diacritic(c));
    flags.set(CharFlags::LATIN, is_latin_char(c));
    flags.set(CharFlags::DIGIT, is_decimal_digit(c));
    flags.set(CharFlags::WHITESPACE, c.is_whitespace());
    flags.set(CharFlags::PUNCTUATION, is_punctuation(c));

    CharInfo {
        original: c,
        processed: c,
        flags,
        connection: connection_type(c),
        direction: direction_of(c),
    }
}

/// Classify every character of `text`, in logical order.
pub fn analyze(text: &str) -> Vec<CharInfo> {
    text.chars().map(classify).collect()
}

/// Returns `true` if the character lies in an Arabic block (basic,
/// supplement, extended-A, or either presentation-forms block).
pub fn is_arabic_char(c: char) -> bool {
    matches!(c,
        '\u{0600}'..='\u{06FF}' |  // Arabic
        '\u{0750}'..='\u{077F}' |  // Arabic Supplement
        '\u{08A0}'..='\u{08FF}' |  // Arabic Extended-A
        '\u{FB50}'..='\u{FDFF}' |  // Arabic Presentation Forms-A
        '\u{FE70}'..='\u{FEFF}'    // Arabic Presentation Forms-B
    )
}

/// ASCII letters only; accented Latin is direction-neutral here.
pub fn is_latin_char(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// Returns `true` if any character of `text` is Arabic.
pub fn contains_arabic(text: &str) -> bool {
    text.chars().any(is_arabic_char)
}

fn is_decimal_digit(c: char) -> bool {
    matches!(c, '0'..='9' | '\u{0660}'..='\u{0669}' | '\u{06F0}'..='\u{06F9}')
}

fn is_punctuation(c: char) -> bool {
    if c.is_ascii() {
        // ASCII symbols ($ + < = > ^ ` | ~) are not punctuation.
        return c.is_ascii_punctuation() && !matches!(c, '$' | '+' | '<' | '=' | '>' | '^' | '`' | '|' | '~');
    }
    matches!(c,
        '\u{00A1}' | '\u{00A7}' | '\u{00AB}' | '\u{00B6}' | '\u{00B7}' | '\u{00BB}' | '\u{00BF}' |
        '\u{2010}'..='\u{2027}' |
        '\u{2030}'..='\u{2043}' |
        '\u{2045}'..='\u{2051}' |
        '\u{2053}'..='\u{205E}' |
        '\u{060C}' | '\u{060D}' | '\u{061B}' | '\u{061E}' | '\u{061F}' |
        '\u{066A}'..='\u{066D}' |
        '\u{06D4}'
    )
}

fn connection_type(c: char) -> ConnectionType {
    if tables::is_diacritic(c) {
        ConnectionType::Transparent
    } else if !is_arabic_char(c) || c == HAMZA {
        ConnectionType::None
    } else if tables::is_right_connecting_only(c) {
        ConnectionType::Right
    } else {
        ConnectionType::Dual
    }
}

fn direction_of(c: char) -> Direction {
    if is_arabic_char(c) {
        Direction::Rtl
    } else if is_latin_char(c) {
        Direction::Ltr
    } else {
        Direction::Neutral
    }
}
