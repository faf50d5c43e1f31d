//! Workspace queries and mutations shared by the generation steps: project
//! registration, the npm scope lookup and dependency manifest edits.

use crate::constants::{PACKAGE_JSON, PROJECT_JSON, SKIPPED_DIRS};
use crate::error::{Error, Result};
use crate::tree::Tree;
use indexmap::IndexMap;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Registered project, as stored in its `project.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectConfiguration {
    pub name: String,
    pub root: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_root: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_type: Option<String>,
}

/// Renders a relative path with `/` separators, as stored in project files.
pub fn path_to_string(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

fn collect_projects(
    tree: &Tree,
    dir: &Path,
    projects: &mut IndexMap<String, ProjectConfiguration>,
) -> Result<()> {
    for child in tree.children(dir) {
        let path = dir.join(&child);
        if child == PROJECT_JSON && tree.is_file(&path) {
            let Some(content) = tree.read_to_string(&path)? else { continue };
            match serde_json::from_str::<ProjectConfiguration>(&content) {
                Ok(project) => {
                    projects.insert(project.name.clone(), project);
                }
                Err(e) => debug!("Ignoring unreadable '{}': {}", path.display(), e),
            }
        } else if !SKIPPED_DIRS.contains(&child.as_str()) && !tree.is_file(&path) {
            collect_projects(tree, &path, projects)?;
        }
    }
    Ok(())
}

/// Returns every project registered in the workspace, keyed by name.
pub fn get_projects(tree: &Tree) -> Result<IndexMap<String, ProjectConfiguration>> {
    let mut projects = IndexMap::new();
    collect_projects(tree, Path::new(""), &mut projects)?;
    Ok(projects)
}

/// Registers a project by writing `<root>/project.json`.
pub fn add_project_configuration(tree: &mut Tree, project: &ProjectConfiguration) -> Result<()> {
    let path = PathBuf::from(&project.root).join(PROJECT_JSON);
    let content = serde_json::to_string_pretty(project)
        .map_err(|e| Error::External(anyhow::Error::new(e)))?;
    tree.write(path, format!("{content}\n"));
    Ok(())
}

/// Reads the package scope from the root manifest name (`@scope/name` → `scope`).
pub fn get_npm_scope(tree: &Tree) -> Result<Option<String>> {
    let Some(content) = tree.read_to_string(PACKAGE_JSON)? else {
        return Ok(None);
    };
    let manifest: serde_json::Value = match serde_json::from_str(&content) {
        Ok(manifest) => manifest,
        Err(_) => return Ok(None),
    };
    let scope = manifest
        .get("name")
        .and_then(|name| name.as_str())
        .and_then(|name| name.strip_prefix('@'))
        .and_then(|name| name.split_once('/'))
        .map(|(scope, _)| scope.to_string())
        .filter(|scope| is_valid_scope(scope));
    Ok(scope)
}

/// npm scopes are URL-safe lowercase names that never start with `.` or `_`.
fn is_valid_scope(scope: &str) -> bool {
    !scope.starts_with(['.', '_'])
        && !scope.is_empty()
        && scope
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '-' | '.' | '_' | '~'))
}

fn merge_dependencies(
    manifest: &mut serde_json::Map<String, serde_json::Value>,
    section: &str,
    dependencies: &[(&str, &str)],
) -> Result<usize> {
    let entry = manifest
        .entry(section.to_string())
        .or_insert_with(|| serde_json::Value::Object(serde_json::Map::new()));
    let table = entry.as_object_mut().ok_or_else(|| {
        Error::DependencyInjectionError(format!("'{section}' in {PACKAGE_JSON} is not an object"))
    })?;

    let mut added = 0;
    for (name, version) in dependencies {
        if table.contains_key(*name) {
            continue;
        }
        table.insert(name.to_string(), serde_json::Value::String(version.to_string()));
        added += 1;
    }
    if added > 0 {
        table.sort_keys();
    }
    Ok(added)
}

/// Declares dependencies in the root manifest.
///
/// Entries already present are left untouched, so repeated calls converge on
/// the same manifest. Top-level keys keep their order; an edited dependency
/// table is sorted by package name.
///
/// # Errors
/// * `Error::DependencyInjectionError` if the manifest is missing or is not a
///   JSON object
pub fn add_dependencies_to_package_json(
    tree: &mut Tree,
    dependencies: &[(&str, &str)],
    dev_dependencies: &[(&str, &str)],
) -> Result<()> {
    let content = tree.read_to_string(PACKAGE_JSON)?.ok_or_else(|| {
        Error::DependencyInjectionError(format!("{PACKAGE_JSON} is missing or unreadable"))
    })?;
    let mut manifest: serde_json::Value = serde_json::from_str(&content)
        .map_err(|e| Error::DependencyInjectionError(format!("invalid {PACKAGE_JSON}: {e}")))?;
    let object = manifest.as_object_mut().ok_or_else(|| {
        Error::DependencyInjectionError(format!("{PACKAGE_JSON} is not a JSON object"))
    })?;

    let mut added = 0;
    if !dependencies.is_empty() {
        added += merge_dependencies(object, "dependencies", dependencies)?;
    }
    if !dev_dependencies.is_empty() {
        added += merge_dependencies(object, "devDependencies", dev_dependencies)?;
    }

    if added == 0 {
        debug!("All dependencies already declared.");
        return Ok(());
    }

    let updated = serde_json::to_string_pretty(&manifest)
        .map_err(|e| Error::DependencyInjectionError(e.to_string()))?;
    tree.write(PACKAGE_JSON, format!("{updated}\n"));
    info!("Added {added} dependencies to {PACKAGE_JSON}.");
    Ok(())
}

/// Removes the boilerplate files a fresh skeleton leaves in `dir`.
pub fn application_cleanup<P: AsRef<Path>>(tree: &mut Tree, dir: P, files: &[&str]) {
    let dir = dir.as_ref();
    for file in files {
        let path = dir.join(file);
        if tree.is_file(&path) {
            debug!("Removing default file '{}'.", path.display());
            tree.delete(path);
        }
    }
}
