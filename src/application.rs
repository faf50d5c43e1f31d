//! Base application skeleton creation.

use crate::constants::APPS_DIR;
use crate::error::{Error, Result};
use crate::options::NormalizedOptions;
use crate::tree::Tree;
use crate::workspace::{add_project_configuration, get_projects, path_to_string, ProjectConfiguration};
use log::info;
use std::path::{Path, PathBuf};

/// Location of a created application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDescriptor {
    pub name: String,
    pub root: PathBuf,
    pub source_root: PathBuf,
}

impl ProjectDescriptor {
    pub fn configuration(&self) -> ProjectConfiguration {
        ProjectConfiguration {
            name: self.name.clone(),
            root: path_to_string(&self.root),
            source_root: Some(path_to_string(&self.source_root)),
            project_type: Some("application".to_string()),
        }
    }
}

/// Creates the base project the templates are layered on.
pub trait ApplicationFactory {
    fn create(&self, tree: &mut Tree, options: &NormalizedOptions) -> Result<ProjectDescriptor>;
}

/// Writes a minimal React application under `apps/<name>`.
#[derive(Debug, Default)]
pub struct SkeletonFactory;

impl SkeletonFactory {
    pub fn new() -> Self {
        Self
    }
}

fn skeleton_files(name: &str) -> Vec<(&'static str, String)> {
    vec![
        (
            "index.html",
            format!(
                "<!doctype html>\n<html lang=\"en\">\n  <head>\n    <meta charset=\"utf-8\" />\n    <title>{name}</title>\n    <link rel=\"stylesheet\" href=\"/src/styles.css\" />\n  </head>\n  <body>\n    <div id=\"root\"></div>\n    <script type=\"module\" src=\"/src/main.tsx\"></script>\n  </body>\n</html>\n"
            ),
        ),
        (
            "src/main.tsx",
            "import { StrictMode } from 'react';\nimport * as ReactDOM from 'react-dom/client';\nimport App from './app/app';\n\nconst root = ReactDOM.createRoot(document.getElementById('root') as HTMLElement);\nroot.render(\n  <StrictMode>\n    <App />\n  </StrictMode>\n);\n".to_string(),
        ),
        ("src/styles.css", "/* You can add global styles to this file, and also import other style files */\n".to_string()),
        (
            "src/app/app.tsx",
            "import NxWelcome from './nx-welcome';\n\nexport function App() {\n  return <NxWelcome />;\n}\n\nexport default App;\n".to_string(),
        ),
        (
            "src/app/app.spec.tsx",
            "import { render } from '@testing-library/react';\nimport App from './app';\n\ndescribe('App', () => {\n  it('should render successfully', () => {\n    const { baseElement } = render(<App />);\n    expect(baseElement).toBeTruthy();\n  });\n});\n".to_string(),
        ),
        ("src/app/app.module.css", "/* Your styles goes here. */\n".to_string()),
        (
            "src/app/nx-welcome.tsx",
            format!("export function NxWelcome() {{\n  return <h1>Welcome {name}</h1>;\n}}\n\nexport default NxWelcome;\n"),
        ),
    ]
}

impl ApplicationFactory for SkeletonFactory {
    /// # Errors
    /// * `Error::ValidationError` if the name is registered to a project at another root
    fn create(&self, tree: &mut Tree, options: &NormalizedOptions) -> Result<ProjectDescriptor> {
        let name = options.web_name();
        let root = Path::new(APPS_DIR).join(name);
        let descriptor = ProjectDescriptor {
            name: name.to_string(),
            source_root: root.join("src"),
            root,
        };

        if let Some(existing) = get_projects(tree)?.get(name) {
            if Path::new(&existing.root) != descriptor.root {
                return Err(Error::ValidationError(format!(
                    "project '{}' is already registered at '{}'",
                    name, existing.root
                )));
            }
        }

        for (file, content) in skeleton_files(name) {
            tree.write(descriptor.root.join(file), content);
        }
        add_project_configuration(tree, &descriptor.configuration())?;

        info!("Created application '{}' in '{}'.", name, descriptor.root.display());
        Ok(descriptor)
    }
}
