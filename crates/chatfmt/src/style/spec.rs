//! Style specs: the color and toggles one category renders with.
//!
//! Every field of a [`StyleSpec`] is tri-state. `None` means "not set here,
//! inherit whatever the surrounding text has"; `Some(false)` explicitly turns
//! a toggle off. The distinction survives serialization: only fields that are
//! set are written to a format file.
//!
//! # Merging
//!
//! Nested text renders with its parent's spec merged with its own:
//!
//! ```rust
//! use chatfmt::style::{StyleSpec, TextColor, TextStyle};
//!
//! let parent = StyleSpec::of(TextColor::Yellow, &[TextStyle::Italic]);
//! let child = StyleSpec::new().with(TextStyle::Italic, false);
//!
//! let merged = parent.merge(&child);
//! assert_eq!(merged.color, Some(TextColor::Yellow)); // inherited
//! assert_eq!(merged.italic, Some(false)); // overridden
//! ```

use std::fmt;

use console::Style;

use super::color::{ColorRegistry, TextColor};

/// An independent style toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextStyle {
    Bold,
    Italic,
    Underline,
    /// Scrambled glyphs in chat.
    Obfuscated,
    Strikethrough,
}

impl TextStyle {
    /// Every toggle, in the order format files list them.
    pub const ALL: [TextStyle; 5] = [
        TextStyle::Bold,
        TextStyle::Italic,
        TextStyle::Underline,
        TextStyle::Obfuscated,
        TextStyle::Strikethrough,
    ];

    /// Key used for this toggle in format files.
    pub fn name(self) -> &'static str {
        match self {
            TextStyle::Bold => "bold",
            TextStyle::Italic => "italic",
            TextStyle::Underline => "underline",
            TextStyle::Obfuscated => "obfuscated",
            TextStyle::Strikethrough => "strikethrough",
        }
    }

    /// Parses a toggle name, case-insensitively.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "bold" => Some(TextStyle::Bold),
            "italic" => Some(TextStyle::Italic),
            "underline" | "underlined" => Some(TextStyle::Underline),
            "obfuscated" | "magic" => Some(TextStyle::Obfuscated),
            "strikethrough" => Some(TextStyle::Strikethrough),
            _ => None,
        }
    }
}

impl fmt::Display for TextStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Color plus style toggles for one semantic category.
///
/// The default value sets nothing and is the identity for [`merge`](Self::merge).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct StyleSpec {
    /// Text color.
    pub color: Option<TextColor>,
    /// Bold text.
    pub bold: Option<bool>,
    /// Italic text.
    pub italic: Option<bool>,
    /// Underlined text.
    pub underline: Option<bool>,
    /// Obfuscated text.
    pub obfuscated: Option<bool>,
    /// Struck-through text.
    pub strikethrough: Option<bool>,
}

impl StyleSpec {
    /// The no-op spec: nothing set.
    pub const NONE: StyleSpec = StyleSpec {
        color: None,
        bold: None,
        italic: None,
        underline: None,
        obfuscated: None,
        strikethrough: None,
    };

    /// Creates an empty spec.
    pub const fn new() -> Self {
        Self::NONE
    }

    /// Creates a spec with a color and the given toggles turned on.
    pub fn of(color: TextColor, styles: &[TextStyle]) -> Self {
        Self::styles(styles).with_color(color)
    }

    /// Creates a spec with the given toggles turned on and no color.
    pub fn styles(styles: &[TextStyle]) -> Self {
        styles
            .iter()
            .fold(Self::new(), |spec, style| spec.with(*style, true))
    }

    /// Returns a copy with the color set.
    pub fn with_color(mut self, color: TextColor) -> Self {
        self.color = Some(color);
        self
    }

    /// Returns a copy with one toggle explicitly set.
    pub fn with(mut self, style: TextStyle, on: bool) -> Self {
        *self.toggle_mut(style) = Some(on);
        self
    }

    /// Returns the tri-state value of one toggle.
    pub fn get(&self, style: TextStyle) -> Option<bool> {
        match style {
            TextStyle::Bold => self.bold,
            TextStyle::Italic => self.italic,
            TextStyle::Underline => self.underline,
            TextStyle::Obfuscated => self.obfuscated,
            TextStyle::Strikethrough => self.strikethrough,
        }
    }

    fn toggle_mut(&mut self, style: TextStyle) -> &mut Option<bool> {
        match style {
            TextStyle::Bold => &mut self.bold,
            TextStyle::Italic => &mut self.italic,
            TextStyle::Underline => &mut self.underline,
            TextStyle::Obfuscated => &mut self.obfuscated,
            TextStyle::Strikethrough => &mut self.strikethrough,
        }
    }

    /// Merges another spec onto this one.
    ///
    /// `Some` values in `other` override values in `self`.
    /// `None` values in `other` preserve values in `self`.
    pub fn merge(&self, other: &StyleSpec) -> StyleSpec {
        StyleSpec {
            color: other.color.or(self.color),
            bold: other.bold.or(self.bold),
            italic: other.italic.or(self.italic),
            underline: other.underline.or(self.underline),
            obfuscated: other.obfuscated.or(self.obfuscated),
            strikethrough: other.strikethrough.or(self.strikethrough),
        }
    }

    /// Returns true if nothing is set.
    pub fn is_empty(&self) -> bool {
        self.color.is_none() && TextStyle::ALL.iter().all(|s| self.get(*s).is_none())
    }

    /// Builds a spec from shorthand tokens such as `["yellow", "italic"]`.
    ///
    /// Each token is looked up as a color first, then as a style toggle.
    /// Tokens the registry does not know are skipped.
    pub fn from_tokens<S: AsRef<str>>(tokens: &[S], registry: &dyn ColorRegistry) -> StyleSpec {
        let mut spec = StyleSpec::new();
        for token in tokens {
            let token = token.as_ref();
            if let Some(color) = registry.color(token) {
                spec.color = Some(color);
            } else if let Some(style) = registry.style(token) {
                spec = spec.with(style, true);
            } else {
                tracing::trace!(token, "ignoring unknown style token");
            }
        }
        spec
    }

    /// Converts this spec to a `console::Style` for terminal output.
    pub fn to_style(&self) -> Style {
        let mut style = Style::new();

        if let Some(color) = self.color.and_then(TextColor::to_console_color) {
            style = style.fg(color);
        }
        if self.bold == Some(true) {
            style = style.bold();
        }
        if self.italic == Some(true) {
            style = style.italic();
        }
        if self.underline == Some(true) {
            style = style.underlined();
        }
        // No terminal equivalent; rendered as blink
        if self.obfuscated == Some(true) {
            style = style.blink();
        }
        if self.strikethrough == Some(true) {
            style = style.strikethrough();
        }

        style
    }
}

impl From<TextColor> for StyleSpec {
    fn from(color: TextColor) -> Self {
        StyleSpec::new().with_color(color)
    }
}

impl From<TextStyle> for StyleSpec {
    fn from(style: TextStyle) -> Self {
        StyleSpec::new().with(style, true)
    }
}

impl fmt::Display for StyleSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if let Some(color) = self.color {
            parts.push(color.name().to_string());
        }
        for style in TextStyle::ALL {
            match self.get(style) {
                Some(true) => parts.push(style.name().to_string()),
                Some(false) => parts.push(format!("!{}", style.name())),
                None => {}
            }
        }
        if parts.is_empty() {
            f.write_str("none")
        } else {
            f.write_str(&parts.join(" "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::BuiltinColors;

    // =========================================================================
    // Construction
    // =========================================================================

    #[test]
    fn test_new_is_empty() {
        assert!(StyleSpec::new().is_empty());
        assert_eq!(StyleSpec::default(), StyleSpec::NONE);
    }

    #[test]
    fn test_of_sets_color_and_styles() {
        let spec = StyleSpec::of(TextColor::Yellow, &[TextStyle::Italic, TextStyle::Bold]);
        assert_eq!(spec.color, Some(TextColor::Yellow));
        assert_eq!(spec.italic, Some(true));
        assert_eq!(spec.bold, Some(true));
        assert_eq!(spec.underline, None);
    }

    #[test]
    fn test_explicit_false_is_not_empty() {
        let spec = StyleSpec::new().with(TextStyle::Bold, false);
        assert!(!spec.is_empty());
        assert_eq!(spec.bold, Some(false));
    }

    #[test]
    fn test_from_color_and_style() {
        assert_eq!(StyleSpec::from(TextColor::Red).color, Some(TextColor::Red));
        assert_eq!(StyleSpec::from(TextStyle::Underline).underline, Some(true));
    }

    // =========================================================================
    // Merging
    // =========================================================================

    #[test]
    fn test_merge_empty_is_identity() {
        let spec = StyleSpec::of(TextColor::Gold, &[TextStyle::Strikethrough]);
        assert_eq!(spec.merge(&StyleSpec::NONE), spec);
        assert_eq!(StyleSpec::NONE.merge(&spec), spec);
    }

    #[test]
    fn test_merge_preserves_unset() {
        let base = StyleSpec::of(TextColor::Red, &[TextStyle::Bold, TextStyle::Italic]);
        let over = StyleSpec::from(TextColor::Blue).with(TextStyle::Bold, false);

        let merged = base.merge(&over);
        assert_eq!(merged.color, Some(TextColor::Blue));
        assert_eq!(merged.bold, Some(false));
        assert_eq!(merged.italic, Some(true));
    }

    // =========================================================================
    // Tokens
    // =========================================================================

    #[test]
    fn test_from_tokens_color_and_style() {
        let spec = StyleSpec::from_tokens(&["yellow", "italic"], &BuiltinColors);
        assert_eq!(spec, StyleSpec::of(TextColor::Yellow, &[TextStyle::Italic]));
    }

    #[test]
    fn test_from_tokens_skips_unknown() {
        let spec = StyleSpec::from_tokens(&["sparkly", "bold"], &BuiltinColors);
        assert_eq!(spec, StyleSpec::from(TextStyle::Bold));
    }

    #[test]
    fn test_from_tokens_empty() {
        let tokens: [&str; 0] = [];
        assert!(StyleSpec::from_tokens(&tokens, &BuiltinColors).is_empty());
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    #[test]
    fn test_to_style_applies_ansi() {
        let spec = StyleSpec::of(TextColor::Red, &[TextStyle::Bold]);
        let output = spec
            .to_style()
            .force_styling(true)
            .apply_to("alert")
            .to_string();
        assert!(output.contains("\x1b["));
        assert!(output.contains("alert"));
    }

    #[test]
    fn test_display() {
        let spec = StyleSpec::of(TextColor::Yellow, &[TextStyle::Italic]).with(TextStyle::Bold, false);
        assert_eq!(spec.to_string(), "yellow !bold italic");
        assert_eq!(StyleSpec::NONE.to_string(), "none");
    }
}
