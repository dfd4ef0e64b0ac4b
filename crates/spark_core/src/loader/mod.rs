//! Bundled resource loaders.
//!
//! # Responsibility
//! - Read bundled flat files and decode them into records.
//! - Degrade every failure to an empty (or partial) list plus a diagnostic,
//!   so the UI only ever sees fewer rows.
//!
//! # Invariants
//! - `load_*` functions never return errors and never panic.
//! - `try_load_*` functions expose the typed failure to callers that want it.
//! - Diagnostics carry paths and counts only, never record content.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub mod people;
pub mod quick_links;

pub type LoadResult<T> = Result<T, LoadError>;

/// Loader error for resource lookup, reading and decoding.
#[derive(Debug)]
pub enum LoadError {
    /// Bundled file cannot be located.
    ResourceNotFound { path: PathBuf },
    /// File exists but could not be read as UTF-8 text.
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Structured resource does not match the expected record shape.
    Decode {
        path: Option<PathBuf>,
        source: serde_json::Error,
    },
    /// Records could not be rendered back to JSON.
    Encode(serde_json::Error),
}

impl LoadError {
    /// Stable short label used in diagnostic events.
    pub fn kind_label(&self) -> &'static str {
        match self {
            Self::ResourceNotFound { .. } => "resource_not_found",
            Self::Read { .. } => "read_failed",
            Self::Decode { .. } => "decode_failed",
            Self::Encode(_) => "encode_failed",
        }
    }

    pub(crate) fn with_path(self, resource: &Path) -> Self {
        match self {
            Self::Decode { path: None, source } => Self::Decode {
                path: Some(resource.to_path_buf()),
                source,
            },
            other => other,
        }
    }
}

impl Display for LoadError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ResourceNotFound { path } => {
                write!(f, "resource not found: {}", path.display())
            }
            Self::Read { path, source } => {
                write!(f, "failed to read `{}`: {source}", path.display())
            }
            Self::Decode {
                path: Some(path),
                source,
            } => write!(f, "failed to decode `{}`: {source}", path.display()),
            Self::Decode { path: None, source } => write!(f, "failed to decode: {source}"),
            Self::Encode(source) => write!(f, "failed to encode records: {source}"),
        }
    }
}

impl Error for LoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::ResourceNotFound { .. } => None,
            Self::Read { source, .. } => Some(source),
            Self::Decode { source, .. } => Some(source),
            Self::Encode(source) => Some(source),
        }
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(value: serde_json::Error) -> Self {
        Self::Decode {
            path: None,
            source: value,
        }
    }
}

fn read_resource(path: &Path) -> LoadResult<String> {
    match std::fs::read_to_string(path) {
        Ok(text) => Ok(text),
        Err(err) if err.kind() == ErrorKind::NotFound => Err(LoadError::ResourceNotFound {
            path: path.to_path_buf(),
        }),
        Err(err) => Err(LoadError::Read {
            path: path.to_path_buf(),
            source: err,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::{read_resource, LoadError};
    use std::path::Path;

    #[test]
    fn missing_file_maps_to_resource_not_found() {
        let err = read_resource(Path::new("/no/such/spark/LinksData.csv")).unwrap_err();
        assert!(matches!(err, LoadError::ResourceNotFound { .. }));
        assert_eq!(err.kind_label(), "resource_not_found");
        assert!(err.to_string().contains("LinksData.csv"));
    }

    #[test]
    fn decode_error_gains_resource_path() {
        let source = serde_json::from_str::<Vec<String>>("{").unwrap_err();
        let err = LoadError::from(source).with_path(Path::new("/bundle/people.json"));
        assert!(err.to_string().contains("/bundle/people.json"));
    }
}
