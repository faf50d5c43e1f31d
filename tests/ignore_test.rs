use dappforge::constants::IGNORE_FILE;
use dappforge::error::Error;
use dappforge::ignore::parse_ignore_file;
use std::fs::File;
use std::io::Write;
use tempfile::TempDir;

#[test]
fn test_parse_ignore_file() {
    let temp_dir = TempDir::new().unwrap();
    let ignore_path = temp_dir.path().join(IGNORE_FILE);

    // Without an ignore file
    let glob_set = parse_ignore_file("base", &ignore_path).unwrap();
    assert!(glob_set.is_match("src/.DS_Store"));
    assert!(glob_set.is_match(IGNORE_FILE));
    assert!(!glob_set.is_match("src/main.tsx"));

    let mut file = File::create(&ignore_path).unwrap();
    writeln!(file, "# drafts\n*.orig\n\ndrafts/**").unwrap();

    let glob_set = parse_ignore_file("base", &ignore_path).unwrap();
    assert!(glob_set.is_match("file.orig"));
    assert!(glob_set.is_match("drafts/notes.md"));
    assert!(glob_set.is_match("src/.DS_Store"));
    assert!(!glob_set.is_match("src/main.tsx"));
}

#[test]
fn test_invalid_pattern() {
    let temp_dir = TempDir::new().unwrap();
    let ignore_path = temp_dir.path().join(IGNORE_FILE);
    std::fs::write(&ignore_path, "src/[unclosed\n").unwrap();

    let result = parse_ignore_file("base", &ignore_path);
    assert!(matches!(result, Err(Error::TemplateResolutionError { .. })));
}
