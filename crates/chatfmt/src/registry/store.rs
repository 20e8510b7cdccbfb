//! Reading and writing one format file per identifier.
//!
//! Files are written as pretty-printed JSON, which HOCON readers accept too,
//! and read with a YAML parser so hand edits in either syntax load.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Arc;

use super::RegistryConfig;
use crate::error::FormatError;
use crate::format::Format;
use crate::style::ColorRegistry;

/// File-backed storage for formats, keyed by identifier.
#[derive(Clone)]
pub struct FormatStore {
    root: PathBuf,
    extension: String,
    colors: Arc<dyn ColorRegistry>,
}

impl FormatStore {
    pub fn new(config: &RegistryConfig) -> Self {
        Self {
            root: config.root().to_path_buf(),
            extension: config.extension_str().to_string(),
            colors: Arc::clone(config.color_registry()),
        }
    }

    /// The file an identifier is stored in.
    ///
    /// Identifiers may contain ASCII letters, digits, `_`, `-` and `.`, and
    /// must not start with a dot.
    pub fn path(&self, id: &str) -> Result<PathBuf, FormatError> {
        validate_identifier(id)?;
        Ok(self.root.join(format!("{}.{}", id, self.extension)))
    }

    /// Reads the format stored for `id`. A missing file is `Ok(None)`.
    ///
    /// A document whose root is not a mapping, such as HOCON object syntax
    /// that YAML takes for a plain string, is a parse error.
    pub fn read(&self, id: &str) -> Result<Option<Format>, FormatError> {
        let path = self.path(id)?;
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => return Err(FormatError::Io { path, source }),
        };

        let node: serde_yaml::Value =
            serde_yaml::from_str(&content).map_err(|e| FormatError::Parse {
                path: path.clone(),
                message: e.to_string(),
            })?;
        // An empty file is an empty format; a bare scalar or list is not a format
        if !node.is_mapping() && !node.is_null() {
            return Err(FormatError::Parse {
                path,
                message: "expected a mapping of categories".to_string(),
            });
        }

        tracing::debug!(id, path = %path.display(), "loaded format");
        Ok(Some(Format::from_node_with(&node, self.colors.as_ref())))
    }

    /// Moves the file for `id` to `<id>.<ext>.bak`, replacing any earlier
    /// backup, and returns the new path.
    pub fn backup(&self, id: &str) -> Result<PathBuf, FormatError> {
        let path = self.path(id)?;
        let mut name = path.clone().into_os_string();
        name.push(".bak");
        let backup = PathBuf::from(name);

        fs::rename(&path, &backup).map_err(|source| FormatError::Io {
            path: path.clone(),
            source,
        })?;

        tracing::debug!(id, path = %backup.display(), "moved unreadable format aside");
        Ok(backup)
    }

    /// Writes `format` for `id`, creating the root directory if needed.
    pub fn write(&self, id: &str, format: &Format) -> Result<(), FormatError> {
        let path = self.path(id)?;
        fs::create_dir_all(&self.root).map_err(|source| FormatError::Io {
            path: self.root.clone(),
            source,
        })?;

        let mut content = serde_json::to_string_pretty(&format.to_node())?;
        content.push('\n');
        fs::write(&path, content).map_err(|source| FormatError::Io {
            path: path.clone(),
            source,
        })?;

        tracing::debug!(id, path = %path.display(), "persisted format");
        Ok(())
    }
}

fn validate_identifier(id: &str) -> Result<(), FormatError> {
    let valid = !id.is_empty()
        && !id.starts_with('.')
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'));
    if valid {
        Ok(())
    } else {
        Err(FormatError::InvalidIdentifier { id: id.to_string() })
    }
}
