//! Formats: the five semantic categories and their styles.
//!
//! A [`Format`] assigns a [`StyleSpec`] to each [`Category`]. Plugins build
//! messages out of categories ("this part is info, this name is stressed")
//! and the format decides what that looks like, so server owners can restyle
//! every plugin's messages from one file per plugin.
//!
//! # Construction
//!
//! ```rust
//! use chatfmt::style::{StyleSpec, TextColor, TextStyle};
//! use chatfmt::Format;
//!
//! let format = Format::builder()
//!     .stress(StyleSpec::of(TextColor::Gold, &[TextStyle::Bold]))
//!     .warn(TextColor::DarkRed)
//!     .build();
//!
//! let variant = format.to_builder().info(TextColor::Aqua).build();
//! assert_ne!(variant, format);
//! assert_eq!(format.copy(), format);
//! ```
//!
//! # Defaults
//!
//! | Category | Style |
//! |----------|-------|
//! | info | white |
//! | subdued | yellow, italic |
//! | stress | dark_aqua |
//! | error | gray |
//! | warn | red |

mod config;
mod node;

pub use config::FormatConfig;

use std::fmt;

use crate::args::Arg;
use crate::formatter::{Content, Formatter};
use crate::pagination::PaginatedFormatter;
use crate::style::{StyleSpec, TextColor, TextStyle};

/// A semantic category of message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Regular message text.
    Info,
    /// Secondary detail, de-emphasized.
    Subdued,
    /// Names, values and anything that should stand out.
    Stress,
    /// Error messages.
    Error,
    /// Warnings.
    Warn,
}

impl Category {
    /// Every category, in file order.
    pub const ALL: [Category; 5] = [
        Category::Info,
        Category::Subdued,
        Category::Stress,
        Category::Error,
        Category::Warn,
    ];

    /// Key of this category in format files.
    pub fn key(self) -> &'static str {
        match self {
            Category::Info => "info",
            Category::Subdued => "subdued",
            Category::Stress => "stress",
            Category::Error => "error",
            Category::Warn => "warn",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// An immutable set of category styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Format {
    info: StyleSpec,
    subdued: StyleSpec,
    stress: StyleSpec,
    error: StyleSpec,
    warn: StyleSpec,
}

impl Format {
    /// Starts a builder holding the built-in defaults.
    pub fn builder() -> FormatBuilder {
        FormatBuilder::default()
    }

    /// Starts a builder seeded with this format's styles.
    pub fn to_builder(&self) -> FormatBuilder {
        FormatBuilder {
            info: self.info,
            subdued: self.subdued,
            stress: self.stress,
            error: self.error,
            warn: self.warn,
        }
    }

    /// Returns an independent copy of this format.
    pub fn copy(&self) -> Format {
        self.to_builder().build()
    }

    /// The style of one category.
    pub fn spec(&self, category: Category) -> &StyleSpec {
        match category {
            Category::Info => &self.info,
            Category::Subdued => &self.subdued,
            Category::Stress => &self.stress,
            Category::Error => &self.error,
            Category::Warn => &self.warn,
        }
    }

    /// Starts an empty message in this format.
    pub fn fmt(&self) -> Formatter {
        Formatter::new(*self)
    }

    /// Starts a paged list in this format.
    pub fn list(&self) -> PaginatedFormatter {
        PaginatedFormatter::new(*self)
    }

    /// Starts a message with one styled fragment.
    pub fn styled(&self, category: Category, input: impl Into<Content>) -> Formatter {
        let mut fmt = self.fmt();
        fmt.styled(category, input);
        fmt
    }

    /// Starts a message with one substituted, styled fragment.
    pub fn styled_args(&self, category: Category, pattern: &str, args: &[Arg]) -> Formatter {
        let mut fmt = self.fmt();
        fmt.styled_args(category, pattern, args);
        fmt
    }

    /// Starts a message with a separated list of items.
    pub fn styled_list<I, F>(
        &self,
        category: Category,
        items: I,
        separator: &str,
        each: F,
    ) -> Formatter
    where
        I: IntoIterator,
        F: FnMut(&mut Formatter, I::Item),
    {
        let mut fmt = self.fmt();
        fmt.styled_list(category, items, separator, each);
        fmt
    }
}

macro_rules! format_starters {
    ($($category:ident => $plain:ident, $args:ident, $list:ident;)*) => {
        impl Format {
            $(
                #[doc = concat!("Starts a message with one `", stringify!($plain), "` fragment.")]
                pub fn $plain(&self, input: impl Into<Content>) -> Formatter {
                    self.styled(Category::$category, input)
                }

                #[doc = concat!("Starts a message with one substituted `", stringify!($plain), "` fragment.")]
                pub fn $args(&self, pattern: &str, args: &[Arg]) -> Formatter {
                    self.styled_args(Category::$category, pattern, args)
                }

                #[doc = concat!("Starts a message with a list separated by `", stringify!($plain), "` text.")]
                pub fn $list<I, F>(&self, items: I, separator: &str, each: F) -> Formatter
                where
                    I: IntoIterator,
                    F: FnMut(&mut Formatter, I::Item),
                {
                    self.styled_list(Category::$category, items, separator, each)
                }
            )*
        }
    };
}

format_starters! {
    Info => info, info_args, info_list;
    Subdued => subdued, subdued_args, subdued_list;
    Stress => stress, stress_args, stress_list;
    Error => error, error_args, error_list;
    Warn => warn, warn_args, warn_list;
}

impl Default for Format {
    fn default() -> Self {
        Format::builder().build()
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "info={}, subdued={}, stress={}, error={}, warn={}",
            self.info, self.subdued, self.stress, self.error, self.warn
        )
    }
}

/// Builder for [`Format`]. The last value set for a category wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatBuilder {
    info: StyleSpec,
    subdued: StyleSpec,
    stress: StyleSpec,
    error: StyleSpec,
    warn: StyleSpec,
}

impl Default for FormatBuilder {
    fn default() -> Self {
        Self {
            info: StyleSpec::from(TextColor::White),
            subdued: StyleSpec::of(TextColor::Yellow, &[TextStyle::Italic]),
            stress: StyleSpec::from(TextColor::DarkAqua),
            error: StyleSpec::from(TextColor::Gray),
            warn: StyleSpec::from(TextColor::Red),
        }
    }
}

impl FormatBuilder {
    /// Sets the style of one category.
    pub fn category(mut self, category: Category, spec: impl Into<StyleSpec>) -> Self {
        let spec = spec.into();
        match category {
            Category::Info => self.info = spec,
            Category::Subdued => self.subdued = spec,
            Category::Stress => self.stress = spec,
            Category::Error => self.error = spec,
            Category::Warn => self.warn = spec,
        }
        self
    }

    pub fn info(self, spec: impl Into<StyleSpec>) -> Self {
        self.category(Category::Info, spec)
    }

    pub fn subdued(self, spec: impl Into<StyleSpec>) -> Self {
        self.category(Category::Subdued, spec)
    }

    pub fn stress(self, spec: impl Into<StyleSpec>) -> Self {
        self.category(Category::Stress, spec)
    }

    pub fn error(self, spec: impl Into<StyleSpec>) -> Self {
        self.category(Category::Error, spec)
    }

    pub fn warn(self, spec: impl Into<StyleSpec>) -> Self {
        self.category(Category::Warn, spec)
    }

    /// Snapshots the builder into a [`Format`].
    pub fn build(&self) -> Format {
        Format {
            info: self.info,
            subdued: self.subdued,
            stress: self.stress,
            error: self.error,
            warn: self.warn,
        }
    }
}
