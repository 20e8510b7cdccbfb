//! Chat colors and the name lookup used by format files.
//!
//! Format files refer to colors by name:
//!
//! - The 16 chat colors: `black`, `dark_blue`, `dark_green`, `dark_aqua`,
//!   `dark_red`, `dark_purple`, `gold`, `gray`, `dark_gray`, `blue`, `green`,
//!   `aqua`, `red`, `light_purple`, `yellow`, `white`
//! - `reset`, which clears any inherited color
//!
//! Names are matched case-insensitively and `grey` is accepted for `gray`.
//! The host may supply its own [`ColorRegistry`]; [`BuiltinColors`] covers the
//! names above.
//!
//! # Example
//!
//! ```rust
//! use chatfmt::style::{BuiltinColors, ColorRegistry, TextColor};
//!
//! assert_eq!(BuiltinColors.color("dark_aqua"), Some(TextColor::DarkAqua));
//! assert_eq!(BuiltinColors.color("Grey"), Some(TextColor::Gray));
//! assert_eq!(BuiltinColors.color("chartreuse"), None);
//! assert_eq!(TextColor::LightPurple.name(), "light_purple");
//! ```

use std::fmt;

use console::Color;

use super::spec::TextStyle;

/// One of the chat colors a format can assign to a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextColor {
    Black,
    DarkBlue,
    DarkGreen,
    DarkAqua,
    DarkRed,
    DarkPurple,
    Gold,
    Gray,
    DarkGray,
    Blue,
    Green,
    Aqua,
    Red,
    LightPurple,
    Yellow,
    White,
    /// Clears the inherited color.
    Reset,
}

impl TextColor {
    /// Every color, in chat palette order.
    pub const ALL: [TextColor; 17] = [
        TextColor::Black,
        TextColor::DarkBlue,
        TextColor::DarkGreen,
        TextColor::DarkAqua,
        TextColor::DarkRed,
        TextColor::DarkPurple,
        TextColor::Gold,
        TextColor::Gray,
        TextColor::DarkGray,
        TextColor::Blue,
        TextColor::Green,
        TextColor::Aqua,
        TextColor::Red,
        TextColor::LightPurple,
        TextColor::Yellow,
        TextColor::White,
        TextColor::Reset,
    ];

    /// The name written to format files.
    pub fn name(self) -> &'static str {
        match self {
            TextColor::Black => "black",
            TextColor::DarkBlue => "dark_blue",
            TextColor::DarkGreen => "dark_green",
            TextColor::DarkAqua => "dark_aqua",
            TextColor::DarkRed => "dark_red",
            TextColor::DarkPurple => "dark_purple",
            TextColor::Gold => "gold",
            TextColor::Gray => "gray",
            TextColor::DarkGray => "dark_gray",
            TextColor::Blue => "blue",
            TextColor::Green => "green",
            TextColor::Aqua => "aqua",
            TextColor::Red => "red",
            TextColor::LightPurple => "light_purple",
            TextColor::Yellow => "yellow",
            TextColor::White => "white",
            TextColor::Reset => "reset",
        }
    }

    /// Parses a color name.
    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.trim().to_lowercase();
        let color = match lower.as_str() {
            "black" => TextColor::Black,
            "dark_blue" => TextColor::DarkBlue,
            "dark_green" => TextColor::DarkGreen,
            "dark_aqua" => TextColor::DarkAqua,
            "dark_red" => TextColor::DarkRed,
            "dark_purple" => TextColor::DarkPurple,
            "gold" => TextColor::Gold,
            // Also accept grey as an alias
            "gray" | "grey" => TextColor::Gray,
            "dark_gray" | "dark_grey" => TextColor::DarkGray,
            "blue" => TextColor::Blue,
            "green" => TextColor::Green,
            "aqua" => TextColor::Aqua,
            "red" => TextColor::Red,
            "light_purple" => TextColor::LightPurple,
            "yellow" => TextColor::Yellow,
            "white" => TextColor::White,
            "reset" => TextColor::Reset,
            _ => return None,
        };
        Some(color)
    }

    /// Terminal color for this chat color, `None` for [`TextColor::Reset`].
    ///
    /// Chat colors map onto the 16-color palette: the dark variants onto
    /// indices 0-7 and the bright ones onto 8-15.
    pub fn to_console_color(self) -> Option<Color> {
        let index = match self {
            TextColor::Black => 0,
            TextColor::DarkRed => 1,
            TextColor::DarkGreen => 2,
            TextColor::Gold => 3,
            TextColor::DarkBlue => 4,
            TextColor::DarkPurple => 5,
            TextColor::DarkAqua => 6,
            TextColor::Gray => 7,
            TextColor::DarkGray => 8,
            TextColor::Red => 9,
            TextColor::Green => 10,
            TextColor::Yellow => 11,
            TextColor::Blue => 12,
            TextColor::LightPurple => 13,
            TextColor::Aqua => 14,
            TextColor::White => 15,
            TextColor::Reset => return None,
        };
        Some(Color::Color256(index))
    }
}

impl fmt::Display for TextColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Name lookup for colors and styles.
///
/// Supplied by the host. Unknown names return `None` and are ignored by the
/// caller; they are never an error.
pub trait ColorRegistry: Send + Sync {
    /// Looks up a color by name.
    fn color(&self, name: &str) -> Option<TextColor>;

    /// Looks up a style toggle by name.
    fn style(&self, name: &str) -> Option<TextStyle> {
        TextStyle::from_name(name)
    }
}

/// The chat color and style names known to this crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinColors;

impl ColorRegistry for BuiltinColors {
    fn color(&self, name: &str) -> Option<TextColor> {
        TextColor::from_name(name)
    }
}
