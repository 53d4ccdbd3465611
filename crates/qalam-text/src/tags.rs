#![forbid(unsafe_code)]

//! Markup tag extraction and reinsertion.
//!
//! Any `<` up to the next `>` is one tag, with no validation of what is
//! inside. Tags are pulled out before shaping so they neither break joining
//! nor get reordered, then spliced back at their recorded offsets.
//!
//! Offsets count `char`s of the tag-free text, not bytes.
//!
//! # Example
//! ```
//! use qalam_text::tags::{extract_tags, reinsert_tags};
//!
//! let (plain, tags) = extract_tags("<b>hi</b>!");
//! assert_eq!(plain, "hi!");
//! assert_eq!(tags.len(), 2);
//! assert_eq!(reinsert_tags(&plain, &tags), "<b>hi</b>!");
//! ```

use smallvec::SmallVec;

/// A tag removed from the text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagInfo {
    /// Tag text, brackets included.
    pub tag: String,
    /// Char offset in the tag-free text where the tag stood.
    pub position: usize,
}

/// Tags in extraction order (ascending position).
pub type Tags = SmallVec<[TagInfo; 4]>;

/// Strip `<...>` tags from `text`.
///
/// An unterminated trailing `<...` is kept in the text as ordinary characters.
pub fn extract_tags(text: &str) -> (String, Tags) {
    let mut stripped = String::with_capacity(text.len());
    let mut stripped_len = 0usize;
    let mut tags = Tags::new();
    let mut pending: Option<String> = None;

    for c in text.chars() {
        match pending.as_mut() {
            Some(tag) => {
                tag.push(c);
                if c == '>' {
                    tags.push(TagInfo {
                        tag: std::mem::take(tag),
                        position: stripped_len,
                    });
                    pending = None;
                }
            }
            None if c == '<' => pending = Some(String::from('<')),
            None => {
                stripped.push(c);
                stripped_len += 1;
            }
        }
    }

    if let Some(unterminated) = pending {
        stripped.push_str(&unterminated);
    }

    (stripped, tags)
}

/// Splice `tags` back into `text`.
///
/// Tags are inserted from the last to the first so earlier offsets stay
/// valid. Offsets past the end of `text` (the text may have shrunk during
/// shaping) are clamped to the end.
pub fn reinsert_tags(text: &str, tags: &[TagInfo]) -> String {
    if tags.is_empty() {
        return text.to_string();
    }

    let mut chars: Vec<char> = text.chars().collect();
    for info in tags.iter().rev() {
        let at = info.position.min(chars.len());
        chars.splice(at..at, info.tag.chars());
    }
    chars.into_iter().collect()
}
