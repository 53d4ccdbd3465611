#![forbid(unsafe_code)]

//! A text label that keeps logical text and its shaped rendering in sync.
//!
//! [`ShapedLabel`] is the adapter between editable Arabic text and whatever
//! draws glyphs. It owns the logical string and the [`ShapeOptions`], and
//! re-shapes only when one of them actually changes. Editing
//! ([`push_char`](ShapedLabel::push_char), [`pop_char`](ShapedLabel::pop_char))
//! works on the logical text, never on the shaped output.
//!
//! # Example
//! ```
//! use qalam_core::ShapeOptions;
//! use qalam_text::{Alignment, ShapedLabel};
//!
//! let mut label = ShapedLabel::new("\u{0644}", ShapeOptions::default());
//! label.push_char('\u{0627}');
//! assert_eq!(label.text(), "\u{0644}\u{0627}");
//! assert_eq!(label.display_text(), "\u{FEFB}");
//! assert_eq!(label.alignment(), Alignment::Right);
//! ```

use qalam_core::ShapeOptions;
use unicode_width::UnicodeWidthStr;

use crate::fix::fix;
use crate::tags::extract_tags;

/// Anchor of a label's text inside its box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Alignment {
    #[default]
    TopLeft,
    Top,
    TopRight,
    Left,
    Center,
    Right,
    BottomLeft,
    Bottom,
    BottomRight,
}

impl Alignment {
    /// Mirror left-anchored alignments to the right; others are unchanged.
    #[must_use]
    pub const fn for_rtl(self) -> Self {
        match self {
            Self::TopLeft => Self::TopRight,
            Self::Left => Self::Right,
            Self::BottomLeft => Self::BottomRight,
            other => other,
        }
    }
}

/// Logical text plus its shaped rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapedLabel {
    text: String,
    options: ShapeOptions,
    display: String,
    /// Alignment as requested; mirrored on read while RTL is forced.
    alignment: Alignment,
}

impl ShapedLabel {
    /// Create a label. The default alignment is mirrored when RTL is forced.
    pub fn new(text: impl Into<String>, options: ShapeOptions) -> Self {
        let text = text.into();
        let display = fix(&text, &options);
        Self {
            text,
            options,
            display,
            alignment: Alignment::Left,
        }
    }

    /// Set the alignment, mirrored for RTL whenever RTL is forced.
    #[must_use]
    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// The logical (editable) text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The shaped text to hand to the renderer.
    pub fn display_text(&self) -> &str {
        &self.display
    }

    pub fn options(&self) -> ShapeOptions {
        self.options
    }

    /// Effective alignment under the current options.
    pub fn alignment(&self) -> Alignment {
        if self.options.force_rtl {
            self.alignment.for_rtl()
        } else {
            self.alignment
        }
    }

    /// Terminal cell width of the shaped text, ignoring markup tags.
    pub fn display_width(&self) -> usize {
        if self.options.fix_tags {
            extract_tags(&self.display).0.width()
        } else {
            self.display.width()
        }
    }

    /// Replace the logical text. Returns `true` if it changed.
    pub fn set_text(&mut self, text: impl Into<String>) -> bool {
        let text = text.into();
        if text == self.text {
            return false;
        }
        self.text = text;
        self.refresh();
        true
    }

    /// Replace all options at once. Returns `true` if they changed.
    pub fn set_options(&mut self, options: ShapeOptions) -> bool {
        if options == self.options {
            return false;
        }
        self.options = options;
        self.refresh();
        true
    }

    pub fn set_show_tashkeel(&mut self, value: bool) -> bool {
        self.set_options(self.options.with_show_tashkeel(value))
    }

    pub fn set_preserve_numbers(&mut self, value: bool) -> bool {
        self.set_options(self.options.with_preserve_numbers(value))
    }

    pub fn set_fix_tags(&mut self, value: bool) -> bool {
        self.set_options(self.options.with_fix_tags(value))
    }

    pub fn set_force_rtl(&mut self, value: bool) -> bool {
        self.set_options(self.options.with_force_rtl(value))
    }

    /// Append a typed character to the logical text.
    pub fn push_char(&mut self, c: char) {
        self.text.push(c);
        self.refresh();
    }

    /// Remove the last logical character (backspace).
    pub fn pop_char(&mut self) -> Option<char> {
        let c = self.text.pop()?;
        self.refresh();
        Some(c)
    }

    fn refresh(&mut self) {
        self.display = fix(&self.text, &self.options);
    }
}
