use crate::git;
use crate::model::{AuthorTally, LanguageTally};
use crate::scan;
use console::style;
use std::path::Path;

/// Analyzes a single repository: commit counts per author, then language
/// byte counts. Returns the repository's language tally for the caller to
/// merge, or `None` when either step failed (logged, never fatal).
pub fn analyze_repo(repo_path: &Path, verbose: bool) -> Option<LanguageTally> {
    if verbose {
        println!();
        println!(
            "{}",
            style(format!("Analyzing repository: {}", repo_path.display())).bold()
        );
        println!("{}", "─".repeat(50));
    }

    let authors = match git::count_authors(repo_path) {
        Ok(authors) => authors,
        Err(e) => {
            eprintln!("Error analyzing commits in {}: {e}", repo_path.display());
            return None;
        }
    };
    if verbose {
        print_author_breakdown(&authors);
    }

    let tally = match scan::scan_repo(repo_path) {
        Ok(tally) => tally,
        Err(e) => {
            eprintln!("Error analyzing languages in {}: {e}", repo_path.display());
            return None;
        }
    };
    if verbose {
        println!("{}", style("Language statistics").bold());
        print_language_breakdown(&tally);
    }

    Some(tally)
}

fn print_author_breakdown(authors: &AuthorTally) {
    println!("{}", style("Commits by author").bold());
    let mut entries: Vec<(&String, &u64)> = authors.iter().collect();
    entries.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
    for (author, count) in entries {
        println!("  {author}: {count}");
    }
}

/// Prints one `Language: N bytes (P%)` line per language, largest first.
pub fn print_language_breakdown(tally: &LanguageTally) {
    if tally.total_bytes() == 0 {
        println!("  No recognized source files");
        return;
    }
    for share in tally.shares() {
        println!(
            "  {}: {} bytes ({:.2}%)",
            share.language, share.bytes, share.percent
        );
    }
}
