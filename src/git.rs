use crate::error::{OrgmapError, Result};
use crate::model::AuthorTally;
use std::path::Path;
use std::process::Command;

/// Tallies commits per author by running `git log --pretty=%an` scoped to
/// `repo_path`. One line per commit; blank lines are ignored.
///
/// A missing git binary, a non-repository, or a non-zero exit all surface as
/// errors; the caller treats them as a per-repository failure.
pub fn count_authors(repo_path: &Path) -> Result<AuthorTally> {
    let output = Command::new("git")
        .arg("-C")
        .arg(repo_path)
        .args(["log", "--pretty=%an"])
        .output()
        .map_err(|e| OrgmapError::Git(format!("failed to run git: {e}")))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(OrgmapError::Git(format!(
            "git log failed in {}: {}",
            repo_path.display(),
            stderr.trim()
        )));
    }

    let mut counts = AuthorTally::new();
    for line in String::from_utf8_lossy(&output.stdout).lines() {
        let author = line.trim_end_matches('\r');
        if !author.is_empty() {
            *counts.entry(author.to_string()).or_insert(0) += 1;
        }
    }
    Ok(counts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn non_repository_is_an_error() {
        if Command::new("git").arg("--version").output().is_err() {
            return;
        }
        let dir = tempdir().unwrap();
        let err = count_authors(dir.path());
        assert!(matches!(err, Err(OrgmapError::Git(_))));
    }
}
