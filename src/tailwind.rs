//! Tailwind styling configuration for generated applications.

use crate::constants::{TAILWIND_DEV_DEPENDENCIES, TAILWIND_DIRECTIVES};
use crate::error::Result;
use crate::tree::Tree;
use crate::workspace::{add_dependencies_to_package_json, ProjectConfiguration};
use log::{debug, info};
use std::path::Path;

const TAILWIND_CONFIG: &str = r#"const { createGlobPatternsForDependencies } = require('@nx/react/tailwind');
const { join } = require('path');

/** @type {import('tailwindcss').Config} */
module.exports = {
  content: [
    join(__dirname, '{src,pages,components,app}/**/*!(*.stories|*.spec).{ts,tsx,html}'),
    ...createGlobPatternsForDependencies(__dirname),
  ],
  theme: {
    extend: {},
  },
  plugins: [require('daisyui')],
};
"#;

const POSTCSS_CONFIG: &str = r#"const { join } = require('path');

module.exports = {
  plugins: {
    tailwindcss: {
      config: join(__dirname, 'tailwind.config.js'),
    },
    autoprefixer: {},
  },
};
"#;

fn write_if_absent(tree: &mut Tree, path: &Path, content: &str) {
    if tree.is_file(path) {
        debug!("Keeping existing '{}'.", path.display());
    } else {
        tree.write(path, content);
    }
}

/// Adds tailwind to a project: config files, stylesheet directives and dev
/// dependencies. Safe to run on a project that already has any of them.
pub fn application_tailwind_config(tree: &mut Tree, project: &ProjectConfiguration) -> Result<()> {
    let root = Path::new(&project.root);
    write_if_absent(tree, &root.join("tailwind.config.js"), TAILWIND_CONFIG);
    write_if_absent(tree, &root.join("postcss.config.js"), POSTCSS_CONFIG);

    let source_root = project
        .source_root
        .as_deref()
        .map(Path::new)
        .map(Path::to_path_buf)
        .unwrap_or_else(|| root.join("src"));
    let stylesheet = source_root.join("styles.css");
    let current = tree.read_to_string(&stylesheet)?.unwrap_or_default();
    if !current.contains("@tailwind base;") {
        tree.write(&stylesheet, format!("{TAILWIND_DIRECTIVES}{current}"));
    }

    add_dependencies_to_package_json(tree, &[], &TAILWIND_DEV_DEPENDENCIES)?;
    info!("Configured tailwind for '{}'.", project.name);
    Ok(())
}
