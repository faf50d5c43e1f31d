#![allow(dead_code)]

use std::cell::RefCell;
use std::fs;
use std::path::Path;
use std::rc::Rc;

use dappforge::companion::{CompanionGenerator, CompanionRequest};
use dappforge::error::Result;
use dappforge::install::Installer;
use dappforge::tree::Tree;
use dappforge::workspace::{add_project_configuration, ProjectConfiguration};

/// Writes `files` (relative path, content) under `root`.
pub fn write_files(root: &Path, files: &[(&str, &str)]) {
    for (path, content) in files {
        let path = root.join(path);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }
}

/// Template root with `base`, `none` and `tailwind` bundles.
pub fn write_templates(root: &Path) {
    write_files(
        root,
        &[
            (
                "base/src/app/app.tsx.template",
                "import { {{ className }}Feature } from './{{ fileName }}/{{ fileName }}-feature';\n{% if anchorEnabled %}import '{{ anchorName }}';\n{% endif %}export default App;\n",
            ),
            ("base/src/app/__fileName__/__fileName__-feature.tsx", "export function {{ className }}Feature() {}\n"),
            ("base/src/__fileNameUnderscore__.ts", "export const NAME = '{{ fileNameUnderscore }}';\n"),
            ("base/.templateignore", "*.orig\n"),
            ("base/src/stale.orig", "ignored\n"),
            ("none/src/app/ui/ui-layout.tsx", "export const theme = '{{ ui }}';\n"),
            ("tailwind/src/app/ui/ui-layout.tsx", "export const theme = 'daisy-{{ ui }}';\n"),
            ("anchor-basic/src/__fileNameUnderscore__.rs", "pub mod {{ fileNameUnderscore }} {}\n"),
            ("anchor-counter/src/__fileNameUnderscore__.rs", "pub mod {{ fileNameUnderscore }} { pub struct Counter; }\n"),
        ],
    );
}

/// Workspace with a scoped root manifest.
pub fn write_workspace(root: &Path) {
    write_files(root, &[("package.json", "{\n  \"name\": \"@acme/source\",\n  \"version\": \"0.0.0\"\n}\n")]);
}

/// Companion generator that records its calls and registers the project.
#[derive(Default)]
pub struct RecordingCompanion {
    pub calls: RefCell<Vec<CompanionRequest>>,
}

impl CompanionGenerator for RecordingCompanion {
    fn generate(&self, tree: &mut Tree, request: &CompanionRequest) -> Result<()> {
        self.calls.borrow_mut().push(request.clone());
        add_project_configuration(
            tree,
            &ProjectConfiguration {
                name: request.name.clone(),
                root: format!("programs/{}", request.name),
                source_root: None,
                project_type: Some("library".to_string()),
            },
        )
    }
}

/// Installer that only counts its invocations.
#[derive(Default)]
pub struct CountingInstaller {
    pub runs: RefCell<usize>,
}

impl Installer for CountingInstaller {
    fn install(&self, _workspace_root: &Path) -> Result<()> {
        *self.runs.borrow_mut() += 1;
        Ok(())
    }
}

pub fn counting_installer() -> Rc<CountingInstaller> {
    Rc::new(CountingInstaller::default())
}
