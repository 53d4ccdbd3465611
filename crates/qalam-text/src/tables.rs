#![forbid(unsafe_code)]

//! Static glyph data for Arabic shaping.
//!
//! All tables are read-only. The per-letter form table is built once on first
//! use behind a [`LazyLock`] and shared by every thread afterwards; the small
//! sets are plain `match` arms.

use rustc_hash::FxHashMap;
use std::sync::LazyLock;

/// Arabic letter Lam, the first half of every Lam-Alef ligature.
pub const LAM: char = '\u{0644}';

/// Hamza, which never connects in either direction.
pub const HAMZA: char = '\u{0621}';

/// Presentation forms for each base letter, indexed by
/// `[isolated, initial, medial, final]`.
///
/// Right-joining letters repeat the isolated form in the initial slot and the
/// final form in the medial slot, since they cannot join forward.
const GLYPH_FORMS: &[(char, [char; 4])] = &[
    // Basic letters
    ('\u{0627}', ['\u{0627}', '\u{0627}', '\u{FE8E}', '\u{FE8E}']), // Alef
    ('\u{0628}', ['\u{0628}', '\u{FE91}', '\u{FE92}', '\u{FE90}']), // Beh
    ('\u{062A}', ['\u{062A}', '\u{FE97}', '\u{FE98}', '\u{FE96}']), // Teh
    ('\u{062B}', ['\u{062B}', '\u{FE9B}', '\u{FE9C}', '\u{FE9A}']), // Theh
    ('\u{062C}', ['\u{062C}', '\u{FE9F}', '\u{FEA0}', '\u{FE9E}']), // Jeem
    ('\u{062D}', ['\u{062D}', '\u{FEA3}', '\u{FEA4}', '\u{FEA2}']), // Hah
    ('\u{062E}', ['\u{062E}', '\u{FEA7}', '\u{FEA8}', '\u{FEA6}']), // Khah
    ('\u{062F}', ['\u{062F}', '\u{062F}', '\u{FEAA}', '\u{FEAA}']), // Dal
    ('\u{0630}', ['\u{0630}', '\u{0630}', '\u{FEAC}', '\u{FEAC}']), // Thal
    ('\u{0631}', ['\u{0631}', '\u{0631}', '\u{FEAE}', '\u{FEAE}']), // Reh
    ('\u{0632}', ['\u{0632}', '\u{0632}', '\u{FEB0}', '\u{FEB0}']), // Zain
    ('\u{0633}', ['\u{0633}', '\u{FEB3}', '\u{FEB4}', '\u{FEB2}']), // Seen
    ('\u{0634}', ['\u{0634}', '\u{FEB7}', '\u{FEB8}', '\u{FEB6}']), // Sheen
    ('\u{0635}', ['\u{0635}', '\u{FEBB}', '\u{FEBC}', '\u{FEBA}']), // Sad
    ('\u{0636}', ['\u{0636}', '\u{FEBF}', '\u{FEC0}', '\u{FEBE}']), // Dad
    ('\u{0637}', ['\u{0637}', '\u{FEC3}', '\u{FEC4}', '\u{FEC2}']), // Tah
    ('\u{0638}', ['\u{0638}', '\u{FEC7}', '\u{FEC8}', '\u{FEC6}']), // Zah
    ('\u{0639}', ['\u{0639}', '\u{FECB}', '\u{FECC}', '\u{FECA}']), // Ain
    ('\u{063A}', ['\u{063A}', '\u{FECF}', '\u{FED0}', '\u{FECE}']), // Ghain
    ('\u{0641}', ['\u{0641}', '\u{FED3}', '\u{FED4}', '\u{FED2}']), // Feh
    ('\u{0642}', ['\u{0642}', '\u{FED7}', '\u{FED8}', '\u{FED6}']), // Qaf
    ('\u{0643}', ['\u{0643}', '\u{FEDB}', '\u{FEDC}', '\u{FEDA}']), // Kaf
    ('\u{0644}', ['\u{0644}', '\u{FEDF}', '\u{FEE0}', '\u{FEDE}']), // Lam
    ('\u{0645}', ['\u{0645}', '\u{FEE3}', '\u{FEE4}', '\u{FEE2}']), // Meem
    ('\u{0646}', ['\u{0646}', '\u{FEE7}', '\u{FEE8}', '\u{FEE6}']), // Noon
    ('\u{0647}', ['\u{0647}', '\u{FEEB}', '\u{FEEC}', '\u{FEEA}']), // Heh
    ('\u{0648}', ['\u{0648}', '\u{0648}', '\u{FEEE}', '\u{FEEE}']), // Waw
    ('\u{064A}', ['\u{064A}', '\u{FEF3}', '\u{FEF4}', '\u{FEF2}']), // Yeh
    ('\u{0649}', ['\u{0649}', '\u{0649}', '\u{FEF0}', '\u{FEF0}']), // Alef Maksura
    ('\u{0629}', ['\u{0629}', '\u{0629}', '\u{FE94}', '\u{FE94}']), // Teh Marbuta
    ('\u{0621}', ['\u{0621}', '\u{0621}', '\u{0621}', '\u{0621}']), // Hamza
    // Alef and Hamza carriers
    ('\u{0622}', ['\u{0622}', '\u{0622}', '\u{FE82}', '\u{FE82}']), // Alef with Madda
    ('\u{0623}', ['\u{0623}', '\u{0623}', '\u{FE84}', '\u{FE84}']), // Alef with Hamza above
    ('\u{0625}', ['\u{0625}', '\u{0625}', '\u{FE88}', '\u{FE88}']), // Alef with Hamza below
    ('\u{0624}', ['\u{0624}', '\u{0624}', '\u{FE86}', '\u{FE86}']), // Waw with Hamza
    ('\u{0626}', ['\u{0626}', '\u{FE8B}', '\u{FE8C}', '\u{FE8A}']), // Yeh with Hamza
    // Persian / Urdu
    ('\u{067E}', ['\u{067E}', '\u{FB58}', '\u{FB59}', '\u{FB57}']), // Peh
    ('\u{0686}', ['\u{0686}', '\u{FB7C}', '\u{FB7D}', '\u{FB7B}']), // Tcheh
    ('\u{0698}', ['\u{0698}', '\u{0698}', '\u{FB8B}', '\u{FB8B}']), // Jeh
    ('\u{06AF}', ['\u{06AF}', '\u{FB94}', '\u{FB95}', '\u{FB93}']), // Gaf
    ('\u{06A9}', ['\u{06A9}', '\u{FB90}', '\u{FB91}', '\u{FB8F}']), // Keheh
    ('\u{06CC}', ['\u{06CC}', '\u{FBFE}', '\u{FBFF}', '\u{FBFD}']), // Farsi Yeh
];

static GLYPH_MAP: LazyLock<FxHashMap<char, [char; 4]>> =
    LazyLock::new(|| GLYPH_FORMS.iter().copied().collect());

/// Presentation forms for `base`, or `None` if the letter has no table entry.
#[inline]
pub fn glyph_forms(base: char) -> Option<&'static [char; 4]> {
    GLYPH_MAP.get(&base)
}

/// Lam-Alef ligature for Lam followed by `alef`.
///
/// `connected` selects the form used when the Lam joins the letter before it.
pub fn lam_alef_ligature(alef: char, connected: bool) -> Option<char> {
    let [isolated, joined] = match alef {
        '\u{0627}' => ['\u{FEFB}', '\u{FEFC}'],
        '\u{0623}' => ['\u{FEF7}', '\u{FEF8}'],
        '\u{0625}' => ['\u{FEF9}', '\u{FEFA}'],
        '\u{0622}' => ['\u{FEF5}', '\u{FEF6}'],
        _ => return None,
    };
    Some(if connected { joined } else { isolated })
}

/// Letters (and ligature glyphs) that join the previous letter but never the next.
pub fn is_right_connecting_only(c: char) -> bool {
    matches!(
        c,
        // Alef family
        '\u{0627}' | '\u{0622}' | '\u{0623}' | '\u{0625}' | '\u{0649}'
        // Dal family
        | '\u{062F}' | '\u{0630}'
        // Reh family
        | '\u{0631}' | '\u{0632}' | '\u{0698}'
        // Waw family
        | '\u{0648}' | '\u{0624}'
        // Teh Marbuta, Hamza
        | '\u{0629}' | '\u{0621}'
        // Lam-Alef ligatures
        | '\u{FEF5}'..='\u{FEFC}'
    )
}

/// Arabic combining marks (harakat, shadda, sukun, superscript alef, ...).
pub fn is_diacritic(c: char) -> bool {
    matches!(c, '\u{064B}'..='\u{065F}' | '\u{0670}')
}

/// Eastern-Arabic digit for an ASCII digit.
pub fn eastern_digit(c: char) -> Option<char> {
    let value = c.to_digit(10).filter(|_| c.is_ascii_digit())?;
    char::from_u32(0x0660 + value)
}
