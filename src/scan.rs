use crate::error::{OrgmapError, Result};
use crate::ignore::IgnoreMatcher;
use crate::lang;
use crate::model::LanguageTally;
use std::fs;
use std::io;
use std::path::Path;

/// Walks a repository's file tree and accumulates byte counts per language.
///
/// Individual unreadable entries are warned about and skipped; only a failure
/// to read the repository root itself aborts the scan.
pub fn scan_repo(repo_path: &Path) -> Result<LanguageTally> {
    let matcher = match IgnoreMatcher::load(repo_path) {
        Ok(matcher) => matcher,
        Err(e) => {
            eprintln!(
                "Warning: could not read ignore file in {}: {e}",
                repo_path.display()
            );
            IgnoreMatcher::empty()
        }
    };

    let mut tally = LanguageTally::new();
    let entries = fs::read_dir(repo_path)
        .map_err(|e| OrgmapError::Walk(format!("reading {}: {e}", repo_path.display())))?;
    for entry in entries {
        visit(repo_path, entry, &matcher, &mut tally);
    }
    Ok(tally)
}

fn visit(
    root: &Path,
    entry: io::Result<fs::DirEntry>,
    matcher: &IgnoreMatcher,
    tally: &mut LanguageTally,
) {
    let entry = match entry {
        Ok(entry) => entry,
        Err(e) => {
            eprintln!("Warning: skipping unreadable entry under {}: {e}", root.display());
            return;
        }
    };
    let path = entry.path();

    let file_type = match entry.file_type() {
        Ok(file_type) => file_type,
        Err(e) => {
            eprintln!("Warning: skipping {}: {e}", path.display());
            return;
        }
    };

    if file_type.is_dir() {
        match fs::read_dir(&path) {
            Ok(children) => {
                for child in children {
                    visit(root, child, matcher, tally);
                }
            }
            Err(e) => eprintln!("Warning: skipping directory {}: {e}", path.display()),
        }
        return;
    }
    if !file_type.is_file() {
        return;
    }

    let rel_path = path.strip_prefix(root).unwrap_or(&path);
    match matcher.is_ignored(rel_path) {
        Ok(true) => return,
        Ok(false) => {}
        // fails open: an unmatchable pattern never excludes a file
        Err(e) => eprintln!("Warning: ignore check failed for {}: {e}", path.display()),
    }

    let Some(language) = path
        .file_name()
        .and_then(|name| name.to_str())
        .and_then(lang::classify)
    else {
        return;
    };

    match entry.metadata() {
        Ok(metadata) => tally.add(language, metadata.len()),
        Err(e) => eprintln!("Warning: could not stat {}: {e}", path.display()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    fn write_bytes(dir: &Path, name: &str, len: usize) {
        let path = dir.join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, vec![b'x'; len]).unwrap();
    }

    #[test]
    fn counts_recognized_files_by_language() {
        let dir = tempdir().unwrap();
        write_bytes(dir.path(), "main.go", 100);
        write_bytes(dir.path(), "tool.py", 50);
        let tally = scan_repo(dir.path()).unwrap();
        assert_eq!(tally.get("Go"), 100);
        assert_eq!(tally.get("Python"), 50);
        assert_eq!(tally.total_bytes(), 150);
    }

    #[test]
    fn unrecognized_extensions_contribute_nothing() {
        let dir = tempdir().unwrap();
        write_bytes(dir.path(), "notes.txt", 400);
        write_bytes(dir.path(), "main.go", 10);
        let tally = scan_repo(dir.path()).unwrap();
        assert_eq!(tally.len(), 1);
        assert_eq!(tally.total_bytes(), 10);
    }

    #[test]
    fn walks_into_subdirectories() {
        let dir = tempdir().unwrap();
        write_bytes(dir.path(), "src/deep/nested/lib.rs", 30);
        write_bytes(dir.path(), "main.go", 5);
        let tally = scan_repo(dir.path()).unwrap();
        assert_eq!(tally.get("Rust"), 30);
        assert_eq!(tally.total_bytes(), 35);
    }

    #[test]
    fn ignored_paths_are_excluded_even_when_recognized() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(".gitignore"), "*.py\n").unwrap();
        write_bytes(dir.path(), "main.go", 100);
        write_bytes(dir.path(), "tool.py", 50);
        let tally = scan_repo(dir.path()).unwrap();
        assert_eq!(tally.get("Go"), 100);
        assert_eq!(tally.get("Python"), 0);
        assert_eq!(tally.total_bytes(), 100);
    }

    #[test]
    fn malformed_ignore_pattern_fails_open() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(".gitignore"), "[unclosed\n").unwrap();
        write_bytes(dir.path(), "main.go", 10);
        let tally = scan_repo(dir.path()).unwrap();
        assert_eq!(tally.get("Go"), 10);
    }

    #[test]
    fn empty_repository_yields_empty_tally() {
        let dir = tempdir().unwrap();
        let tally = scan_repo(dir.path()).unwrap();
        assert!(tally.is_empty());
        assert_eq!(tally.total_bytes(), 0);
    }

    #[test]
    fn missing_root_is_an_error() {
        let dir = tempdir().unwrap();
        let gone = dir.path().join("vanished");
        assert!(scan_repo(&gone).is_err());
    }
}
