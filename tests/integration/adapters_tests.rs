//! Integration tests for the file-backed adapters (spec.md §6).

use std::fs;
use std::path::Path;

use pretty_assertions::assert_eq;
use tempfile::TempDir;
use xresourcedb::adapters::database_from_file;
use xresourcedb::resource_get_string;

fn write(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn loaded_file_with_include_resolves_a_query() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "colors.rdb", "xmh*Paned.Foreground: red\n");
    let main = write(
        dir.path(),
        "main.rdb",
        "! top-level preferences\n#include \"colors.rdb\"\nFirst.second: 1\n",
    );

    let db = database_from_file(&main).unwrap();
    assert_eq!(db.len(), 2);
    assert_eq!(resource_get_string(&db, "First.second", "").unwrap(), b"1");
    assert_eq!(resource_get_string(&db, "xmh.Paned.Foreground", "").unwrap(), b"red");
}

#[test]
fn merging_two_databases_prefers_the_override_source() {
    let dir = TempDir::new().unwrap();
    let base = write(dir.path(), "base.rdb", "First: base\nSecond: 2\n");
    let overrides = write(dir.path(), "overrides.rdb", "First: override\n");

    let mut target = database_from_file(&base).unwrap();
    let mut source = database_from_file(&overrides).unwrap();
    source.combine_into(&mut target, true);

    assert_eq!(target.len(), 2);
    assert_eq!(resource_get_string(&target, "First", "").unwrap(), b"override");
    assert_eq!(resource_get_string(&target, "Second", "").unwrap(), b"2");
}
