use crate::analyze;
use crate::chart;
use crate::cli::Cli;
use crate::colors::ColorTable;
use crate::model::{LanguageTally, SummaryOutput, SCHEMA_VERSION};
use anyhow::{Context, Result};
use console::style;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const DEFAULT_CHART_NAME: &str = "cumulative_language_progress_bar.svg";

/// Runs the whole analysis: discovers repositories under the base path,
/// analyzes each, merges the per-repository deltas, prints the cumulative
/// summary, and renders the chart.
pub fn exec(cli: Cli) -> Result<()> {
    let base = cli
        .base
        .canonicalize()
        .with_context(|| format!("Base directory '{}' is not accessible", cli.base.display()))?;

    let colors = match &cli.colors {
        Some(path) => ColorTable::load(path).context("Failed to load color configuration")?,
        None => ColorTable::builtin(),
    };

    let repos = discover_repos(&base)
        .with_context(|| format!("Failed to list '{}'", base.display()))?;

    let verbose = !cli.json;
    if verbose {
        if repos.is_empty() {
            println!("No git repositories found under {}", base.display());
        } else {
            println!(
                "{}",
                style(format!("Repositories under {}", base.display())).bold()
            );
            for repo in &repos {
                println!("  {}", dir_name(repo));
            }
        }
    }

    let mut cumulative = LanguageTally::new();
    let mut analyzed: Vec<String> = Vec::new();
    for repo in &repos {
        if let Some(tally) = analyze::analyze_repo(repo, verbose) {
            cumulative.merge(&tally);
            analyzed.push(dir_name(repo));
        }
    }

    if cumulative.total_bytes() == 0 {
        println!();
        println!("No source files were analyzed across the repositories.");
        return Ok(());
    }

    if cli.json {
        let output = SummaryOutput {
            version: SCHEMA_VERSION,
            base_path: base.to_string_lossy().to_string(),
            repositories: analyzed,
            total_bytes: cumulative.total_bytes(),
            languages: cumulative.shares(),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!();
        println!("{}", style("Cumulative language summary").bold());
        println!("{}", "─".repeat(50));
        analyze::print_language_breakdown(&cumulative);
    }

    let output_path = cli
        .output
        .clone()
        .unwrap_or_else(|| base.join(DEFAULT_CHART_NAME));
    match chart::write_chart(
        &cumulative,
        &colors,
        cli.chart_width,
        cli.chart_height,
        &output_path,
    ) {
        Ok(()) => {
            if verbose {
                println!("Chart written to {}", output_path.display());
            }
        }
        Err(e) => eprintln!("Error writing chart to {}: {e}", output_path.display()),
    }

    Ok(())
}

/// Immediate children of `base` that carry a `.git` marker directory, sorted
/// by name for reproducible output. Children without the marker are skipped
/// silently.
fn discover_repos(base: &Path) -> io::Result<Vec<PathBuf>> {
    let mut repos = Vec::new();
    for entry in fs::read_dir(base)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_dir() && path.join(".git").is_dir() {
            repos.push(path);
        }
    }
    repos.sort();
    Ok(repos)
}

fn dir_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}
