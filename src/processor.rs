//! Template bundle materialization.
//! Copies a bundle into a directory of the virtual tree, substituting tokens in
//! file contents and in file and directory names. Names are rendered like
//! contents, so a segment that renders empty drops the file.

use crate::{
    constants::{IGNORE_FILE, TEMPLATE_SUFFIX},
    error::{Error, Result},
    ignore::parse_ignore_file,
    loader::TemplateBundle,
    renderer::TemplateRenderer,
    substitutions::SubstitutionMap,
    tree::{normalize_path, Tree},
};
use log::debug;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use walkdir::WalkDir;

/// `__token__` segments in file and directory names.
static NAME_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"__([A-Za-z][A-Za-z0-9]*)__").expect("valid name token regex")
});

/// A single planned write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedFile {
    pub source: PathBuf,
    pub target: PathBuf,
    pub content: Vec<u8>,
}

/// Replaces every known `__token__` in a path; unknown tokens stay verbatim.
pub fn substitute_path(path: &str, substitutions: &SubstitutionMap) -> String {
    NAME_TOKEN
        .replace_all(path, |caps: &regex::Captures| match substitutions.get(&caps[1]) {
            Some(value) => value.to_string(),
            None => caps[0].to_string(),
        })
        .into_owned()
}

/// Strips the `.template` suffix from a file name.
pub fn strip_template_suffix(file_name: &str) -> &str {
    match file_name.strip_suffix(TEMPLATE_SUFFIX) {
        Some(stripped) if !stripped.is_empty() => stripped,
        _ => file_name,
    }
}

/// A rendered relative path is usable if it is non-empty and has no empty segments.
pub fn is_rendered_path_valid(path: &str) -> bool {
    !path.is_empty()
        && !path.starts_with('/')
        && !path.ends_with('/')
        && path.split('/').all(|segment| !segment.is_empty())
}

/// Materializes template bundles into a tree.
pub struct Processor<'a> {
    renderer: &'a dyn TemplateRenderer,
}

impl<'a> Processor<'a> {
    pub fn new(renderer: &'a dyn TemplateRenderer) -> Self {
        Self { renderer }
    }

    /// Computes every write of a bundle without touching the tree.
    pub fn plan<P: AsRef<Path>>(
        &self,
        bundle: &TemplateBundle,
        target_dir: P,
        substitutions: &SubstitutionMap,
    ) -> Result<Vec<PlannedFile>> {
        let bundle_root = bundle.path();
        if !bundle_root.is_dir() {
            return Err(Error::TemplateResolutionError {
                bundle: bundle.name().to_string(),
                reason: "bundle directory does not exist".to_string(),
            });
        }

        let ignored = parse_ignore_file(bundle.name(), bundle_root.join(IGNORE_FILE))?;
        let context = substitutions.to_context();
        let target_dir = normalize_path(target_dir);
        let mut planned = Vec::new();

        for entry in WalkDir::new(bundle_root).sort_by_file_name() {
            let entry = entry.map_err(|e| Error::TemplateResolutionError {
                bundle: bundle.name().to_string(),
                reason: e.to_string(),
            })?;
            if !entry.file_type().is_file() {
                continue;
            }

            let relative = entry.path().strip_prefix(bundle_root).map_err(|e| {
                Error::TemplateResolutionError {
                    bundle: bundle.name().to_string(),
                    reason: e.to_string(),
                }
            })?;
            let relative = relative
                .components()
                .map(|c| c.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/");

            if ignored.is_match(&relative) {
                debug!("Skipping '{relative}' from ignore patterns.");
                continue;
            }

            // `{% if %}` around a name segment includes the file conditionally.
            let rendered = self.renderer.render(&substitute_path(&relative, substitutions), &context)?;
            if !is_rendered_path_valid(&rendered) {
                debug!("Skipping '{relative}' as its rendered path is empty.");
                continue;
            }
            let rendered = match rendered.rsplit_once('/') {
                Some((dir, file)) => format!("{}/{}", dir, strip_template_suffix(file)),
                None => strip_template_suffix(&rendered).to_string(),
            };

            let raw = fs::read(entry.path())?;
            let content = match String::from_utf8(raw) {
                Ok(text) => self.renderer.render(&text, &context)?.into_bytes(),
                // Binary assets are copied untouched.
                Err(e) => e.into_bytes(),
            };

            debug!("Planned '{}' -> '{}'.", relative, rendered);
            planned.push(PlannedFile {
                source: entry.path().to_path_buf(),
                target: target_dir.join(rendered),
                content,
            });
        }

        Ok(planned)
    }

    /// Materializes `bundle` under `target_dir`.
    ///
    /// Every target is checked before the first write, so a failing bundle
    /// leaves the tree unchanged.
    ///
    /// # Errors
    /// * `Error::TemplateResolutionError` if the bundle cannot be read
    /// * `Error::PathConflictError` if a target exists with different content
    ///   and was not staged earlier in this run
    pub fn materialize<P: AsRef<Path>>(
        &self,
        tree: &mut Tree,
        bundle: &TemplateBundle,
        target_dir: P,
        substitutions: &SubstitutionMap,
    ) -> Result<Vec<PathBuf>> {
        let planned = self.plan(bundle, target_dir, substitutions)?;

        for file in &planned {
            if tree.is_staged(&file.target) || !tree.is_file(&file.target) {
                continue;
            }
            if tree.read(&file.target)?.as_deref() != Some(file.content.as_slice()) {
                return Err(Error::PathConflictError {
                    path: file.target.display().to_string(),
                });
            }
        }

        let mut written = Vec::with_capacity(planned.len());
        for file in planned {
            tree.write(&file.target, file.content);
            written.push(file.target);
        }
        debug!("Materialized {} with {} files.", bundle, written.len());
        Ok(written)
    }
}
