//! Virtual file tree.
//! Generation steps stage their writes here; nothing touches the disk until
//! [`Tree::commit`] flushes the staged changes.

use crate::error::Result;
use indexmap::IndexMap;
use log::debug;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

/// A staged modification of a single path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeKind {
    Create(Vec<u8>),
    Update(Vec<u8>),
    Delete,
}

/// A staged change, as reported by [`Tree::list_changes`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileChange {
    pub path: PathBuf,
    pub kind: ChangeKind,
}

impl FileChange {
    pub fn content(&self) -> Option<&[u8]> {
        match &self.kind {
            ChangeKind::Create(content) | ChangeKind::Update(content) => Some(content),
            ChangeKind::Delete => None,
        }
    }
}

/// Proof that the staged changes of a tree were written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    pub root: PathBuf,
    pub written: Vec<PathBuf>,
    pub deleted: Vec<PathBuf>,
}

/// Workspace file store with a staging area.
///
/// Paths are relative to the workspace root and normalized to forward
/// components; reads see staged changes first and fall back to the disk.
#[derive(Debug)]
pub struct Tree {
    root: PathBuf,
    changes: IndexMap<PathBuf, ChangeKind>,
}

/// Drops `.` components and resolves `..` lexically.
pub fn normalize_path<P: AsRef<Path>>(path: P) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.as_ref().components() {
        match component {
            Component::CurDir | Component::RootDir | Component::Prefix(_) => {}
            Component::ParentDir => {
                normalized.pop();
            }
            Component::Normal(part) => normalized.push(part),
        }
    }
    normalized
}

impl Tree {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self { root: root.as_ref().to_path_buf(), changes: IndexMap::new() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn disk_path(&self, path: &Path) -> PathBuf {
        self.root.join(path)
    }

    /// Reads a file, staged content first.
    pub fn read<P: AsRef<Path>>(&self, path: P) -> Result<Option<Vec<u8>>> {
        let path = normalize_path(path);
        match self.changes.get(&path) {
            Some(ChangeKind::Create(content)) | Some(ChangeKind::Update(content)) => {
                Ok(Some(content.clone()))
            }
            Some(ChangeKind::Delete) => Ok(None),
            None => {
                let disk_path = self.disk_path(&path);
                if disk_path.is_file() {
                    Ok(Some(fs::read(disk_path)?))
                } else {
                    Ok(None)
                }
            }
        }
    }

    /// Reads a file as UTF-8, returning `None` for missing or binary files.
    pub fn read_to_string<P: AsRef<Path>>(&self, path: P) -> Result<Option<String>> {
        Ok(self.read(path)?.and_then(|content| String::from_utf8(content).ok()))
    }

    pub fn is_file<P: AsRef<Path>>(&self, path: P) -> bool {
        let path = normalize_path(path);
        match self.changes.get(&path) {
            Some(ChangeKind::Delete) => false,
            Some(_) => true,
            None => self.disk_path(&path).is_file(),
        }
    }

    /// True for files and for directories containing at least one file.
    pub fn exists<P: AsRef<Path>>(&self, path: P) -> bool {
        let path = normalize_path(path);
        self.is_file(&path) || !self.children(&path).is_empty()
    }

    /// Returns true if `path` was created, updated or deleted since the last commit.
    pub fn is_staged<P: AsRef<Path>>(&self, path: P) -> bool {
        self.changes.contains_key(&normalize_path(path))
    }

    /// Lists the names of the direct children of `dir`, sorted.
    pub fn children<P: AsRef<Path>>(&self, dir: P) -> Vec<String> {
        let dir = normalize_path(dir);
        let mut names = BTreeSet::new();

        if let Ok(entries) = fs::read_dir(self.disk_path(&dir)) {
            for entry in entries.flatten() {
                if let Some(name) = entry.file_name().to_str() {
                    let child = dir.join(name);
                    if entry.path().is_dir() {
                        names.insert(name.to_string());
                    } else if !matches!(self.changes.get(&child), Some(ChangeKind::Delete)) {
                        names.insert(name.to_string());
                    }
                }
            }
        }

        for (path, kind) in &self.changes {
            if matches!(kind, ChangeKind::Delete) {
                continue;
            }
            if let Ok(rest) = path.strip_prefix(&dir) {
                if let Some(Component::Normal(first)) = rest.components().next() {
                    if let Some(name) = first.to_str() {
                        names.insert(name.to_string());
                    }
                }
            }
        }

        // Directories whose every file was deleted are no longer children.
        names
            .into_iter()
            .filter(|name| {
                let child = dir.join(name);
                !self.has_delete_under(&child) || self.has_live_file(&child)
            })
            .collect()
    }

    fn has_delete_under(&self, dir: &Path) -> bool {
        self.changes
            .iter()
            .any(|(path, kind)| matches!(kind, ChangeKind::Delete) && path != dir && path.starts_with(dir))
    }

    /// True if `dir` holds a staged or on-disk file that is not staged for deletion.
    /// Stops at the first such file.
    fn has_live_file(&self, dir: &Path) -> bool {
        let staged = self
            .changes
            .iter()
            .any(|(path, kind)| !matches!(kind, ChangeKind::Delete) && path.starts_with(dir));
        staged
            || WalkDir::new(self.disk_path(dir))
                .into_iter()
                .filter_map(|entry| entry.ok())
                .filter(|entry| entry.file_type().is_file())
                .any(|entry| match entry.path().strip_prefix(&self.root) {
                    Ok(path) => !matches!(self.changes.get(path), Some(ChangeKind::Delete)),
                    Err(_) => false,
                })
    }

    /// Stages `content` at `path`.
    pub fn write<P: AsRef<Path>, C: Into<Vec<u8>>>(&mut self, path: P, content: C) {
        let path = normalize_path(path);
        let content = content.into();
        let kind = match self.changes.get(&path) {
            Some(ChangeKind::Create(_)) => ChangeKind::Create(content),
            Some(ChangeKind::Update(_)) => ChangeKind::Update(content),
            Some(ChangeKind::Delete) | None => {
                if self.disk_path(&path).is_file() {
                    ChangeKind::Update(content)
                } else {
                    ChangeKind::Create(content)
                }
            }
        };
        debug!("Staging write: {}", path.display());
        self.changes.insert(path, kind);
    }

    /// Stages the removal of a file. Removing a path that does not exist is a no-op.
    pub fn delete<P: AsRef<Path>>(&mut self, path: P) {
        let path = normalize_path(path);
        match self.changes.get(&path) {
            Some(ChangeKind::Create(_)) => {
                self.changes.shift_remove(&path);
            }
            _ => {
                if self.disk_path(&path).is_file() {
                    debug!("Staging delete: {}", path.display());
                    self.changes.insert(path, ChangeKind::Delete);
                }
            }
        }
    }

    /// Staged changes in the order they were first made.
    pub fn list_changes(&self) -> Vec<FileChange> {
        self.changes
            .iter()
            .map(|(path, kind)| FileChange { path: path.clone(), kind: kind.clone() })
            .collect()
    }

    /// Writes every staged change to disk and clears the staging area.
    pub fn commit(&mut self) -> Result<Commit> {
        let mut written = Vec::new();
        let mut deleted = Vec::new();

        for (path, kind) in self.changes.drain(..) {
            let target = self.root.join(&path);
            match kind {
                ChangeKind::Create(content) | ChangeKind::Update(content) => {
                    if let Some(parent) = target.parent() {
                        fs::create_dir_all(parent)?;
                    }
                    fs::write(&target, content)?;
                    debug!("Wrote {}", target.display());
                    written.push(path);
                }
                ChangeKind::Delete => {
                    if target.is_file() {
                        fs::remove_file(&target)?;
                    }
                    debug!("Removed {}", target.display());
                    deleted.push(path);
                }
            }
        }

        Ok(Commit { root: self.root.clone(), written, deleted })
    }
}
