//! The `list` command

use apt_sources::{Repository, SourceReader};
use colored::Colorize;

use crate::error::Result;

/// Run the list command
pub fn run_list(sources: &impl SourceReader, json: bool, enabled_only: bool) -> Result<()> {
    let repos = sources.scan()?;
    let shown: Vec<&Repository> = repos
        .iter()
        .filter(|repo| repo.enabled || !enabled_only)
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&shown)?);
        return Ok(());
    }

    if shown.is_empty() {
        println!("{}", "No repositories configured.".dimmed());
        return Ok(());
    }

    for repo in &shown {
        println!("{}", format_entry(repo));
    }

    println!();
    println!(
        "{} {} repositories ({} enabled)",
        "Total:".dimmed(),
        shown.len(),
        shown.iter().filter(|r| r.enabled).count()
    );

    Ok(())
}

fn format_entry(repo: &Repository) -> String {
    let status = if repo.enabled {
        "on ".green().bold()
    } else {
        "off".dimmed()
    };
    let origin = repo
        .origin
        .as_ref()
        .map(|o| o.to_string())
        .unwrap_or_default();
    format!("  {} {}  {}", status, repo.to_line(), origin.dimmed())
}
