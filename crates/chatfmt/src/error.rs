//! Error types for format persistence and text actions.
//!
//! Most of the public surface never returns these: the registry and the
//! formatter log a failure and fall back to a safe default. [`FormatError`] is
//! what the lower layers ([`FormatStore`](crate::registry::FormatStore),
//! [`ClickAction::open_url`](crate::text::ClickAction::open_url)) report so the
//! caller can decide how loud to be about it.

use std::path::PathBuf;

/// Error raised while reading, writing or interpreting format data.
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    /// Reading or writing a format file failed.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// File or directory the operation touched.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A format file exists but its content is not a valid document.
    #[error("failed to parse format file {}: {message}", path.display())]
    Parse {
        /// Offending file.
        path: PathBuf,
        /// Message from the document parser.
        message: String,
    },

    /// A format could not be turned into a document.
    #[error("failed to serialize format: {message}")]
    Serialize {
        /// Message from the serializer.
        message: String,
    },

    /// The identifier cannot be mapped to a file name.
    #[error("invalid format identifier '{id}'")]
    InvalidIdentifier {
        /// The rejected identifier.
        id: String,
    },

    /// A link action was given something that is not a URL.
    #[error("invalid url '{url}': {message}")]
    InvalidUrl {
        /// The rejected input.
        url: String,
        /// Message from the URL parser.
        message: String,
    },
}

impl From<serde_json::Error> for FormatError {
    fn from(err: serde_json::Error) -> Self {
        FormatError::Serialize {
            message: err.to_string(),
        }
    }
}
