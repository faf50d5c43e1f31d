//! Template bundle loading.
//! Resolves bundle names to directories on disk.
use crate::error::{Error, Result};
use log::debug;
use std::fmt;
use std::path::{Path, PathBuf};

/// A named set of template files, resolved to its directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateBundle {
    name: String,
    path: PathBuf,
}

impl TemplateBundle {
    pub fn new<S: Into<String>, P: Into<PathBuf>>(name: S, path: P) -> Self {
        Self { name: name.into(), path: path.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl fmt::Display for TemplateBundle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "bundle '{}' at '{}'", self.name, self.path.display())
    }
}

/// Trait for locating template bundles.
pub trait BundleLoader {
    /// Resolves a bundle by name.
    ///
    /// # Errors
    /// * `Error::TemplateResolutionError` if the bundle does not exist
    fn load(&self, name: &str) -> Result<TemplateBundle>;
}

/// Loader for bundles stored as sub-directories of a local template root.
pub struct LocalLoader<P: AsRef<Path>> {
    root: P,
}

impl<P: AsRef<Path>> LocalLoader<P> {
    /// Creates a new LocalLoader instance.
    pub fn new(root: P) -> Self {
        Self { root }
    }
}

impl<P: AsRef<Path>> BundleLoader for LocalLoader<P> {
    fn load(&self, name: &str) -> Result<TemplateBundle> {
        let invalid_name = name.is_empty()
            || Path::new(name).components().count() != 1
            || name == "."
            || name == "..";
        if invalid_name {
            return Err(Error::TemplateResolutionError {
                bundle: name.to_string(),
                reason: "bundle names must be a single path segment".to_string(),
            });
        }

        let path = self.root.as_ref().join(name);
        if !path.is_dir() {
            return Err(Error::TemplateResolutionError {
                bundle: name.to_string(),
                reason: format!("'{}' is not a directory", path.display()),
            });
        }

        debug!("Resolved template bundle '{}' to '{}'.", name, path.display());
        Ok(TemplateBundle::new(name, path))
    }
}
