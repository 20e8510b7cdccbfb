//! Declared default formats.
//!
//! A plugin declares the format it would like to ship with as a
//! [`FormatConfig`] and hands it to
//! [`FormatRegistry::init`](crate::FormatRegistry::init) at registration time.
//! Each category is a list of color and style names:
//!
//! ```rust
//! use chatfmt::style::BuiltinColors;
//! use chatfmt::FormatConfig;
//!
//! let config: FormatConfig = serde_yaml::from_str(r#"
//! stress: [gold, bold]
//! warn: [dark_red]
//! "#).unwrap();
//!
//! let format = config.to_format(&BuiltinColors);
//! assert_eq!(format.to_string().split(", ").nth(2), Some("stress=gold bold"));
//! ```
//!
//! Categories left out keep the built-in defaults.

use serde::{Deserialize, Serialize};

use super::{Category, Format};
use crate::style::{ColorRegistry, StyleSpec};

fn default_info() -> Vec<String> {
    vec!["white".into()]
}

fn default_subdued() -> Vec<String> {
    vec!["yellow".into(), "italic".into()]
}

fn default_stress() -> Vec<String> {
    vec!["dark_aqua".into()]
}

fn default_error() -> Vec<String> {
    vec!["gray".into()]
}

fn default_warn() -> Vec<String> {
    vec!["red".into()]
}

/// Per-category color and style names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatConfig {
    #[serde(default = "default_info")]
    pub info: Vec<String>,
    #[serde(default = "default_subdued")]
    pub subdued: Vec<String>,
    #[serde(default = "default_stress")]
    pub stress: Vec<String>,
    #[serde(default = "default_error")]
    pub error: Vec<String>,
    #[serde(default = "default_warn")]
    pub warn: Vec<String>,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            info: default_info(),
            subdued: default_subdued(),
            stress: default_stress(),
            error: default_error(),
            warn: default_warn(),
        }
    }
}

impl FormatConfig {
    fn tokens(&self, category: Category) -> &[String] {
        match category {
            Category::Info => &self.info,
            Category::Subdued => &self.subdued,
            Category::Stress => &self.stress,
            Category::Error => &self.error,
            Category::Warn => &self.warn,
        }
    }

    /// Resolves the names into a [`Format`]. Unknown names are skipped.
    pub fn to_format(&self, registry: &dyn ColorRegistry) -> Format {
        Category::ALL
            .iter()
            .fold(Format::builder(), |builder, category| {
                let spec = StyleSpec::from_tokens(self.tokens(*category), registry);
                builder.category(*category, spec)
            })
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{BuiltinColors, TextColor, TextStyle};

    #[test]
    fn test_default_config_matches_builtin_format() {
        assert_eq!(FormatConfig::default().to_format(&BuiltinColors), Format::default());
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config: FormatConfig = serde_yaml::from_str("warn: [dark_red, bold]").unwrap();
        assert_eq!(config.info, vec!["white".to_string()]);

        let format = config.to_format(&BuiltinColors);
        assert_eq!(
            *format.spec(Category::Warn),
            StyleSpec::of(TextColor::DarkRed, &[TextStyle::Bold])
        );
    }

    #[test]
    fn test_empty_list_means_no_style() {
        let config = FormatConfig {
            error: Vec::new(),
            ..Default::default()
        };
        assert!(config.to_format(&BuiltinColors).spec(Category::Error).is_empty());
    }
}
