mod common;

use common::write_files;
use dappforge::companion::{BundleCompanionGenerator, CompanionGenerator, CompanionRequest};
use dappforge::error::Error;
use dappforge::install::PackageManager;
use dappforge::loader::LocalLoader;
use dappforge::options::AnchorTemplate;
use dappforge::renderer::MiniJinjaRenderer;
use dappforge::tree::Tree;
use dappforge::workspace::get_projects;
use tempfile::TempDir;

fn request(template: AnchorTemplate) -> CompanionRequest {
    CompanionRequest { name: "my-app-anchor".to_string(), template, skip_format: true }
}

#[test]
fn test_bundle_companion_generator() {
    let templates = TempDir::new().unwrap();
    let workspace = TempDir::new().unwrap();
    write_files(
        templates.path(),
        &[("anchor-counter/programs/__fileNameUnderscore__/src/lib.rs", "pub mod {{ fileNameUnderscore }} {}\n")],
    );
    let loader = LocalLoader::new(templates.path());
    let renderer = MiniJinjaRenderer::new();
    let mut tree = Tree::new(workspace.path());

    BundleCompanionGenerator::new(&loader, &renderer)
        .generate(&mut tree, &request(AnchorTemplate::Counter))
        .unwrap();

    assert_eq!(
        tree.read_to_string("anchor/programs/my_app_anchor/src/lib.rs").unwrap().as_deref(),
        Some("pub mod my_app_anchor {}\n")
    );
    let projects = get_projects(&tree).unwrap();
    let project = projects.get("my-app-anchor").unwrap();
    assert_eq!(project.root, "anchor");
    assert_eq!(project.project_type.as_deref(), Some("library"));
}

#[test]
fn test_missing_companion_bundle() {
    let templates = TempDir::new().unwrap();
    let workspace = TempDir::new().unwrap();
    let loader = LocalLoader::new(templates.path());
    let renderer = MiniJinjaRenderer::new();
    let mut tree = Tree::new(workspace.path());

    let result = BundleCompanionGenerator::new(&loader, &renderer)
        .generate(&mut tree, &request(AnchorTemplate::Basic));
    assert!(matches!(result, Err(Error::TemplateResolutionError { .. })));
    assert!(tree.list_changes().is_empty());
}

#[test]
fn test_package_manager_detection() {
    let workspace = TempDir::new().unwrap();
    assert_eq!(PackageManager::detect(workspace.path()), PackageManager::Npm);

    std::fs::write(workspace.path().join("yarn.lock"), "").unwrap();
    assert_eq!(PackageManager::detect(workspace.path()), PackageManager::Yarn);

    std::fs::write(workspace.path().join("pnpm-lock.yaml"), "").unwrap();
    assert_eq!(PackageManager::detect(workspace.path()).command(), "pnpm");
}
