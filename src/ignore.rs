use crate::error::Result;
use glob::Pattern;
use std::fs;
use std::io;
use std::path::Path;

/// Flat glob matcher over the `.gitignore` file at a repository root.
///
/// This is deliberately not full gitignore semantics: no `**`, no `!`
/// negation, no directory-only rules. Each pattern is matched against the
/// candidate path relative to the repository root.
#[derive(Debug, Clone)]
pub struct IgnoreMatcher {
    patterns: Vec<String>,
}

impl IgnoreMatcher {
    pub fn empty() -> Self {
        Self { patterns: Vec::new() }
    }

    /// Reads the ignore file at `repo_root`. A missing file yields an empty
    /// matcher; any other read failure is an error.
    pub fn load(repo_root: &Path) -> Result<Self> {
        let path = repo_root.join(".gitignore");
        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::empty()),
            Err(e) => return Err(e.into()),
        };
        let patterns = contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_string)
            .collect();
        Ok(Self { patterns })
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// First matching pattern ignores the path. A malformed pattern is an
    /// error; callers log it and treat the path as not ignored.
    pub fn is_ignored(&self, rel_path: &Path) -> Result<bool> {
        if self.patterns.is_empty() {
            return Ok(false);
        }
        let candidate = rel_path.to_string_lossy().replace('\\', "/");
        for raw in &self.patterns {
            let pattern = Pattern::new(raw)?;
            if pattern.matches(&candidate) {
                return Ok(true);
            }
        }
        Ok(false)
    }
}
