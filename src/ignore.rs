//! File and directory ignore pattern handling for template bundles.
//! This module processes .templateignore files to exclude specific paths
//! from materialization, similar to .gitignore functionality.

use crate::constants::DEFAULT_IGNORE_PATTERNS;
use crate::error::{Error, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use log::debug;
use std::{fs::read_to_string, path::Path};

fn add_pattern(builder: &mut GlobSetBuilder, bundle: &str, pattern: &str) -> Result<()> {
    let glob = Glob::new(pattern).map_err(|e| Error::TemplateResolutionError {
        bundle: bundle.to_string(),
        reason: format!("invalid ignore pattern '{pattern}': {e}"),
    })?;
    builder.add(glob);
    Ok(())
}

/// Reads the bundle ignore file and compiles it together with the default patterns.
///
/// # Notes
/// - A missing ignore file yields the default patterns only
/// - Blank lines and lines starting with `#` are skipped
///
/// # Example
/// ```ignore
/// # Contents of .templateignore:
/// *.orig
/// drafts/**
/// ```
pub fn parse_ignore_file<P: AsRef<Path>>(bundle: &str, ignore_path: P) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();

    for pattern in DEFAULT_IGNORE_PATTERNS {
        add_pattern(&mut builder, bundle, pattern)?;
    }

    if let Ok(contents) = read_to_string(ignore_path.as_ref()) {
        for line in contents.lines().map(str::trim) {
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            add_pattern(&mut builder, bundle, line)?;
        }
    } else {
        debug!("No ignore file in bundle '{bundle}'.");
    }

    builder.build().map_err(|e| Error::TemplateResolutionError {
        bundle: bundle.to_string(),
        reason: format!("ignore patterns failed to compile: {e}"),
    })
}
