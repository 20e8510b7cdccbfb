//! Where format files live and how their names are resolved.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::style::{BuiltinColors, ColorRegistry};

/// Default extension of format files.
pub const DEFAULT_EXTENSION: &str = "conf";

/// Settings for a [`FormatRegistry`](super::FormatRegistry).
///
/// ```rust
/// use chatfmt::RegistryConfig;
///
/// let config = RegistryConfig::for_game_dir("/srv/minecraft").extension("yaml");
/// assert!(config.root().ends_with("config/fmt"));
/// assert_eq!(config.extension_str(), "yaml");
/// ```
#[derive(Clone)]
pub struct RegistryConfig {
    root: PathBuf,
    extension: String,
    colors: Arc<dyn ColorRegistry>,
}

impl RegistryConfig {
    /// Stores format files directly in `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            extension: DEFAULT_EXTENSION.to_string(),
            colors: Arc::new(BuiltinColors),
        }
    }

    /// Stores format files in `<game_dir>/config/fmt`.
    pub fn for_game_dir(game_dir: impl AsRef<Path>) -> Self {
        Self::new(game_dir.as_ref().join("config").join("fmt"))
    }

    /// File extension, without the dot.
    pub fn extension(mut self, extension: impl Into<String>) -> Self {
        let extension = extension.into();
        self.extension = extension.trim_start_matches('.').to_string();
        self
    }

    /// Name lookup used when reading files.
    pub fn colors(mut self, colors: impl ColorRegistry + 'static) -> Self {
        self.colors = Arc::new(colors);
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn extension_str(&self) -> &str {
        &self.extension
    }

    pub fn color_registry(&self) -> &Arc<dyn ColorRegistry> {
        &self.colors
    }
}

impl fmt::Debug for RegistryConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistryConfig")
            .field("root", &self.root)
            .field("extension", &self.extension)
            .finish_non_exhaustive()
    }
}
