#![forbid(unsafe_code)]

//! Shaping options and their environment overrides.
//!
//! Every entry point of the shaping engine takes a [`ShapeOptions`]. The
//! defaults match what a text component wants out of the box: keep
//! diacritics, keep Western digits, preserve markup tags, and lay the
//! paragraph out right-to-left.
//!
//! Decisions are deterministic given the environment; [`ShapeOptions::from_env_with`]
//! accepts a lookup closure so tests never touch the process environment.

/// Environment variable to show or hide tashkeel (`1/0/true/false`).
pub const ENV_SHOW_TASHKEEL: &str = "QALAM_SHOW_TASHKEEL";
/// Environment variable to keep Western digits (`1/0/true/false`).
pub const ENV_PRESERVE_NUMBERS: &str = "QALAM_PRESERVE_NUMBERS";
/// Environment variable selecting the digit style (`western` or `eastern`).
/// Wins over [`ENV_PRESERVE_NUMBERS`] when both are set.
pub const ENV_NUMERALS: &str = "QALAM_NUMERALS";
/// Environment variable to extract and reinsert markup tags (`1/0/true/false`).
pub const ENV_FIX_TAGS: &str = "QALAM_FIX_TAGS";
/// Environment variable to force a right-to-left paragraph (`1/0/true/false`).
pub const ENV_FORCE_RTL: &str = "QALAM_FORCE_RTL";

/// Digit style written to the shaped output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumeralStyle {
    /// ASCII `0-9`, left untouched.
    Western,
    /// Eastern-Arabic `٠-٩`.
    Eastern,
}

impl NumeralStyle {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "western" | "latin" | "ascii" => Some(Self::Western),
            "eastern" | "arabic" | "indic" => Some(Self::Eastern),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Western => "western",
            Self::Eastern => "eastern",
        }
    }
}

/// Switches for a single shaping call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeOptions {
    /// Keep diacritics (tashkeel) in the output. When false they are dropped
    /// before shaping, so neighbors connect as if they were never there.
    pub show_tashkeel: bool,
    /// Keep ASCII digits as-is instead of converting them to Eastern-Arabic.
    pub preserve_numbers: bool,
    /// Pull `<...>` markup tags out before shaping and splice them back after.
    pub fix_tags: bool,
    /// Lay the paragraph out right-to-left regardless of content.
    pub force_rtl: bool,
}

impl Default for ShapeOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl ShapeOptions {
    /// All switches on.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            show_tashkeel: true,
            preserve_numbers: true,
            fix_tags: true,
            force_rtl: true,
        }
    }

    #[must_use]
    pub const fn with_show_tashkeel(mut self, value: bool) -> Self {
        self.show_tashkeel = value;
        self
    }

    #[must_use]
    pub const fn with_preserve_numbers(mut self, value: bool) -> Self {
        self.preserve_numbers = value;
        self
    }

    #[must_use]
    pub const fn with_fix_tags(mut self, value: bool) -> Self {
        self.fix_tags = value;
        self
    }

    #[must_use]
    pub const fn with_force_rtl(mut self, value: bool) -> Self {
        self.force_rtl = value;
        self
    }

    /// Digit style implied by `preserve_numbers`.
    #[must_use]
    pub const fn numeral_style(&self) -> NumeralStyle {
        if self.preserve_numbers {
            NumeralStyle::Western
        } else {
            NumeralStyle::Eastern
        }
    }

    /// Read options from the process environment, starting from the defaults.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_env_with(|key| std::env::var(key).ok())
    }

    /// Read options using a custom environment lookup (for tests).
    #[must_use]
    pub fn from_env_with<F>(get_env: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::new().overlay_env(get_env)
    }

    /// Apply environment overrides on top of `self`.
    ///
    /// Variables that are unset or unparseable leave the field untouched.
    #[must_use]
    pub fn overlay_env<F>(mut self, get_env: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = env_override_bool(&get_env, ENV_SHOW_TASHKEEL) {
            self.show_tashkeel = value;
        }
        if let Some(value) = env_override_bool(&get_env, ENV_PRESERVE_NUMBERS) {
            self.preserve_numbers = value;
        }
        if let Some(style) = env_override(&get_env, ENV_NUMERALS, NumeralStyle::parse) {
            self.preserve_numbers = style == NumeralStyle::Western;
        }
        if let Some(value) = env_override_bool(&get_env, ENV_FIX_TAGS) {
            self.fix_tags = value;
        }
        if let Some(value) = env_override_bool(&get_env, ENV_FORCE_RTL) {
            self.force_rtl = value;
        }
        self
    }

    /// Serialize options to JSON (for diagnostics/evidence logs).
    #[must_use]
    pub fn to_json(&self) -> String {
        format!(
            r#"{{"show_tashkeel":{},"preserve_numbers":{},"numerals":"{}","fix_tags":{},"force_rtl":{}}}"#,
            self.show_tashkeel,
            self.preserve_numbers,
            self.numeral_style().as_str(),
            self.fix_tags,
            self.force_rtl
        )
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn env_override_bool<F>(get_env: &F, key: &str) -> Option<bool>
where
    F: Fn(&str) -> Option<String>,
{
    env_override(get_env, key, parse_bool)
}

fn env_override<F, T>(get_env: &F, key: &str, parse: fn(&str) -> Option<T>) -> Option<T>
where
    F: Fn(&str) -> Option<String>,
{
    let raw = get_env(key)?;
    let parsed = parse(&raw);
    if parsed.is_none() {
        #[cfg(feature = "tracing")]
        tracing::warn!(key, value = %raw, "ignoring unrecognized option value");
    }
    parsed
}
