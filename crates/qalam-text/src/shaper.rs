#![forbid(unsafe_code)]

//! Contextual glyph selection.
//!
//! Each Arabic letter takes one of four presentation forms depending on
//! whether it joins the letter before it, the letter after it, both, or
//! neither. Diacritics are transparent: neighbor scans step over them.

use crate::classify::{CharInfo, ConnectionType};
use crate::tables;

/// Contextual form of a letter, in the order of the glyph table columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterForm {
    Isolated = 0,
    Initial = 1,
    Medial = 2,
    Final = 3,
}

impl LetterForm {
    /// Form for a letter with the given joins.
    #[must_use]
    pub const fn from_joins(previous: bool, next: bool) -> Self {
        match (previous, next) {
            (true, true) => Self::Medial,
            (true, false) => Self::Final,
            (false, true) => Self::Initial,
            (false, false) => Self::Isolated,
        }
    }

    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Whether the slot at `index` joins the nearest non-diacritic slot before it.
///
/// The previous slot must be Arabic, able to connect at all, and not a
/// right-joining letter (checked on both its original and processed glyph,
/// so Lam-Alef ligatures also block).
pub fn can_connect_to_previous(chars: &[CharInfo], index: usize) -> bool {
    chars
        .iter()
        .take(index)
        .rev()
        .find(|c| !c.is_diacritic())
        .is_some_and(|prev| {
            prev.is_arabic()
                && prev.connection != ConnectionType::None
                && !prev.is_right_connecting_only()
        })
}

/// Whether the slot at `index` joins the nearest non-diacritic slot after it.
pub fn can_connect_to_next(chars: &[CharInfo], index: usize) -> bool {
    let Some(current) = chars.get(index) else {
        return false;
    };
    if current.is_right_connecting_only() {
        return false;
    }
    chars
        .iter()
        .skip(index + 1)
        .find(|c| !c.is_diacritic())
        .is_some_and(|next| next.is_arabic() && next.connection != ConnectionType::None)
}

/// Contextual form for the slot at `index`.
pub fn letter_form(chars: &[CharInfo], index: usize) -> LetterForm {
    LetterForm::from_joins(
        can_connect_to_previous(chars, index),
        can_connect_to_next(chars, index),
    )
}

/// Replace every shapable Arabic letter with its contextual presentation form.
///
/// Diacritics, ligature slots, and letters missing from the glyph table are
/// left as they are.
pub fn apply_shaping(chars: &mut [CharInfo]) {
    for i in 0..chars.len() {
        let info = chars[i];
        if !info.is_arabic() || info.is_diacritic() || info.is_ligature() {
            continue;
        }
        if let Some(forms) = tables::glyph_forms(info.original) {
            let form = letter_form(chars, i);
            chars[i].processed = forms[form.index()];
        }
    }
}
