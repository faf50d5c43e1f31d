mod common;

use std::path::PathBuf;

use common::write_files;
use dappforge::error::Error;
use dappforge::loader::{BundleLoader, LocalLoader};
use dappforge::processor::{is_rendered_path_valid, strip_template_suffix, substitute_path, Processor};
use dappforge::renderer::MiniJinjaRenderer;
use dappforge::substitutions::SubstitutionMap;
use dappforge::tree::Tree;
use tempfile::TempDir;

fn substitutions() -> SubstitutionMap {
    [("fileName", "my-app"), ("fileNameUnderscore", "my_app"), ("className", "MyApp")]
        .into_iter()
        .collect()
}

#[test]
fn test_substitute_path() {
    let map = substitutions();
    assert_eq!(substitute_path("__fileNameUnderscore__.ts", &map), "my_app.ts");
    assert_eq!(substitute_path("__fileName__/__className__.tsx", &map), "my-app/MyApp.tsx");
    assert_eq!(substitute_path("__unknown__/index.ts", &map), "__unknown__/index.ts");
    assert_eq!(substitute_path("__init__.py", &map), "__init__.py");
}

#[test]
fn test_strip_template_suffix() {
    assert_eq!(strip_template_suffix("app.tsx.template"), "app.tsx");
    assert_eq!(strip_template_suffix("app.tsx"), "app.tsx");
    assert_eq!(strip_template_suffix(".template"), ".template");
}

#[test]
fn test_is_rendered_path_valid() {
    assert!(!is_rendered_path_valid(""));
    assert!(!is_rendered_path_valid("output//filename.txt"));
    assert!(!is_rendered_path_valid("/filename.txt"));
    assert!(is_rendered_path_valid("filename.txt"));
    assert!(is_rendered_path_valid("output/filename.txt"));
}

#[test]
fn test_materialize_names_and_contents() {
    let templates = TempDir::new().unwrap();
    let workspace = TempDir::new().unwrap();
    write_files(
        templates.path(),
        &[
            ("bundle/__fileNameUnderscore__.ts", "export const name = '{{ fileName }}';\n"),
            ("bundle/__fileName__/index.ts.template", "export * from './{{ className }}';\n"),
            ("bundle/README.md", "{{ fileName }} keeps {{ somethingElse }} as is\n"),
        ],
    );
    std::fs::write(templates.path().join("bundle/logo.bin"), [0xff, 0xfe, 0x00]).unwrap();

    let loader = LocalLoader::new(templates.path());
    let bundle = loader.load("bundle").unwrap();
    let renderer = MiniJinjaRenderer::new();
    let mut tree = Tree::new(workspace.path());

    let written = Processor::new(&renderer)
        .materialize(&mut tree, &bundle, "apps/my-app", &substitutions())
        .unwrap();

    assert_eq!(
        written,
        vec![
            PathBuf::from("apps/my-app/README.md"),
            PathBuf::from("apps/my-app/my_app.ts"),
            PathBuf::from("apps/my-app/my-app/index.ts"),
            PathBuf::from("apps/my-app/logo.bin"),
        ]
    );
    assert_eq!(
        tree.read_to_string("apps/my-app/my_app.ts").unwrap().as_deref(),
        Some("export const name = 'my-app';\n")
    );
    assert_eq!(
        tree.read_to_string("apps/my-app/my-app/index.ts").unwrap().as_deref(),
        Some("export * from './MyApp';\n")
    );
    assert_eq!(
        tree.read_to_string("apps/my-app/README.md").unwrap().as_deref(),
        Some("my-app keeps {{ somethingElse }} as is\n")
    );
    assert_eq!(tree.read("apps/my-app/logo.bin").unwrap(), Some(vec![0xff, 0xfe, 0x00]));
}

#[test]
fn test_no_known_token_survives() {
    let templates = TempDir::new().unwrap();
    let workspace = TempDir::new().unwrap();
    write_files(
        templates.path(),
        &[("bundle/__className__/__fileNameUnderscore__.rs", "{{ className }} {{ fileName }} {{ fileNameUnderscore }}\n")],
    );
    let bundle = LocalLoader::new(templates.path()).load("bundle").unwrap();
    let renderer = MiniJinjaRenderer::new();
    let mut tree = Tree::new(workspace.path());
    let map = substitutions();

    let written = Processor::new(&renderer).materialize(&mut tree, &bundle, "", &map).unwrap();

    for path in written {
        let content = tree.read_to_string(&path).unwrap().unwrap();
        for (key, _) in map.iter() {
            let name_token = format!("__{key}__");
            let content_token = format!("{{{{ {key} }}}}");
            assert!(!path.to_string_lossy().contains(&name_token));
            assert!(!content.contains(&content_token));
        }
    }
}

#[test]
fn test_missing_bundle() {
    let templates = TempDir::new().unwrap();
    let loader = LocalLoader::new(templates.path());
    assert!(matches!(loader.load("tailwind"), Err(Error::TemplateResolutionError { .. })));
}

#[test]
fn test_conflict_with_existing_file_writes_nothing() {
    let templates = TempDir::new().unwrap();
    let workspace = TempDir::new().unwrap();
    write_files(
        templates.path(),
        &[("bundle/a.ts", "a\n"), ("bundle/b.ts", "b from template\n")],
    );
    write_files(workspace.path(), &[("app/b.ts", "b edited by hand\n")]);

    let bundle = LocalLoader::new(templates.path()).load("bundle").unwrap();
    let renderer = MiniJinjaRenderer::new();
    let mut tree = Tree::new(workspace.path());

    let result = Processor::new(&renderer).materialize(&mut tree, &bundle, "app", &substitutions());
    match result {
        Err(Error::PathConflictError { path }) => assert_eq!(path, "app/b.ts"),
        other => panic!("Expected PathConflictError, got {other:?}"),
    }
    assert!(tree.list_changes().is_empty());
}

#[test]
fn test_identical_and_staged_files_are_not_conflicts() {
    let templates = TempDir::new().unwrap();
    let workspace = TempDir::new().unwrap();
    write_files(
        templates.path(),
        &[("bundle/same.ts", "same\n"), ("bundle/staged.ts", "from template\n")],
    );
    write_files(workspace.path(), &[("app/same.ts", "same\n"), ("app/staged.ts", "on disk\n")]);

    let bundle = LocalLoader::new(templates.path()).load("bundle").unwrap();
    let renderer = MiniJinjaRenderer::new();
    let mut tree = Tree::new(workspace.path());
    tree.write("app/staged.ts", "written earlier in this run\n");

    Processor::new(&renderer)
        .materialize(&mut tree, &bundle, "app", &substitutions())
        .unwrap();
    assert_eq!(
        tree.read_to_string("app/staged.ts").unwrap().as_deref(),
        Some("from template\n")
    );
}

#[test]
fn test_jsx_double_braces_render_verbatim() {
    let templates = TempDir::new().unwrap();
    let workspace = TempDir::new().unwrap();
    write_files(
        templates.path(),
        &[(
            "bundle/__className__.tsx",
            "export const {{ className }} = () => <div style={{ color: 'red' }}>{{ fileName }}</div>;\n",
        )],
    );
    let bundle = LocalLoader::new(templates.path()).load("bundle").unwrap();
    let renderer = MiniJinjaRenderer::new();
    let mut tree = Tree::new(workspace.path());

    Processor::new(&renderer)
        .materialize(&mut tree, &bundle, "app", &substitutions())
        .unwrap();
    assert_eq!(
        tree.read_to_string("app/MyApp.tsx").unwrap().as_deref(),
        Some("export const MyApp = () => <div style={{ color: 'red' }}>my-app</div>;\n")
    );
}

#[test]
fn test_conditional_names_skip_files() {
    let templates = TempDir::new().unwrap();
    let workspace = TempDir::new().unwrap();
    write_files(
        templates.path(),
        &[
            ("bundle/{% if anchorEnabled %}anchor{% endif %}/index.ts", "anchor\n"),
            ("bundle/{% if anchorEnabled %}client.ts{% endif %}", "client\n"),
            ("bundle/main.ts", "main\n"),
        ],
    );
    let bundle = LocalLoader::new(templates.path()).load("bundle").unwrap();
    let renderer = MiniJinjaRenderer::new();
    let processor = Processor::new(&renderer);

    let disabled: SubstitutionMap = [("anchorEnabled", "false")].into_iter().collect();
    let mut tree = Tree::new(workspace.path());
    let written = processor.materialize(&mut tree, &bundle, "app", &disabled).unwrap();
    assert_eq!(written, vec![PathBuf::from("app/main.ts")]);

    let enabled: SubstitutionMap = [("anchorEnabled", "true")].into_iter().collect();
    let mut tree = Tree::new(workspace.path());
    let written = processor.materialize(&mut tree, &bundle, "app", &enabled).unwrap();
    assert_eq!(written.len(), 3);
    assert!(tree.is_file("app/anchor/index.ts"));
    assert!(tree.is_file("app/client.ts"));
}
