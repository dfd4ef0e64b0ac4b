//! Bundled resource location.
//!
//! # Responsibility
//! - Resolve where the static quick-link and people resources live.
//! - Keep resource file names in one place so UI/CLI callers only pass a root.
//!
//! # Invariants
//! - The root must be a non-empty path. Existence of the individual resource
//!   files is checked by loaders, not here, so a missing file degrades to an
//!   empty list instead of a config failure.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

/// Default file name of the tabular quick-link resource.
pub const QUICK_LINKS_FILE_NAME: &str = "LinksData.csv";
/// Default file name of the structured people resource.
pub const PEOPLE_FILE_NAME: &str = "people.json";

pub type BundleResult<T> = Result<T, BundleError>;

/// Bundle configuration error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BundleError {
    EmptyRoot,
    NotADirectory(PathBuf),
}

impl Display for BundleError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyRoot => write!(f, "bundle root cannot be empty"),
            Self::NotADirectory(path) => {
                write!(f, "bundle root is not a directory: {}", path.display())
            }
        }
    }
}

impl Error for BundleError {}

/// Location of the bundled static resources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleConfig {
    root: PathBuf,
    quick_links_file: String,
    people_file: String,
}

impl BundleConfig {
    /// Creates a config rooted at `root` with default resource file names.
    ///
    /// # Errors
    /// - Returns `EmptyRoot` when `root` is blank.
    pub fn new(root: impl AsRef<Path>) -> BundleResult<Self> {
        let root = root.as_ref();
        if root.as_os_str().is_empty() || root.to_string_lossy().trim().is_empty() {
            return Err(BundleError::EmptyRoot);
        }
        Ok(Self {
            root: root.to_path_buf(),
            quick_links_file: QUICK_LINKS_FILE_NAME.to_string(),
            people_file: PEOPLE_FILE_NAME.to_string(),
        })
    }

    /// Like [`BundleConfig::new`], but also requires `root` to be an existing
    /// directory.
    pub fn existing(root: impl AsRef<Path>) -> BundleResult<Self> {
        let config = Self::new(root)?;
        if !config.root.is_dir() {
            return Err(BundleError::NotADirectory(config.root));
        }
        Ok(config)
    }

    /// Overrides the quick-link resource file name.
    pub fn with_quick_links_file(mut self, file_name: impl Into<String>) -> Self {
        self.quick_links_file = file_name.into();
        self
    }

    /// Overrides the people resource file name.
    pub fn with_people_file(mut self, file_name: impl Into<String>) -> Self {
        self.people_file = file_name.into();
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Full path of the quick-link resource.
    pub fn quick_links_path(&self) -> PathBuf {
        self.root.join(&self.quick_links_file)
    }

    /// Full path of the people resource.
    pub fn people_path(&self) -> PathBuf {
        self.root.join(&self.people_file)
    }
}

#[cfg(test)]
mod tests {
    use super::{BundleConfig, BundleError};
    use std::path::Path;

    #[test]
    fn new_rejects_blank_root() {
        assert_eq!(BundleConfig::new("").unwrap_err(), BundleError::EmptyRoot);
        assert_eq!(BundleConfig::new("   ").unwrap_err(), BundleError::EmptyRoot);
    }

    #[test]
    fn resource_paths_use_default_file_names() {
        let config = BundleConfig::new("/bundle").unwrap();
        assert_eq!(config.quick_links_path(), Path::new("/bundle/LinksData.csv"));
        assert_eq!(config.people_path(), Path::new("/bundle/people.json"));
    }

    #[test]
    fn file_name_overrides_apply() {
        let config = BundleConfig::new("/bundle")
            .unwrap()
            .with_quick_links_file("links.csv")
            .with_people_file("staff.json");
        assert_eq!(config.quick_links_path(), Path::new("/bundle/links.csv"));
        assert_eq!(config.people_path(), Path::new("/bundle/staff.json"));
    }

    #[test]
    fn existing_rejects_missing_directory() {
        let err = BundleConfig::existing("/definitely/not/a/spark/bundle").unwrap_err();
        assert!(matches!(err, BundleError::NotADirectory(_)));
    }
}
