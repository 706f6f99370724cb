//! Operator-facing output: per-file progress lines and the final summary.
//!
//! Nothing here decides anything; every function renders values produced by
//! the backup, replacement and relocation steps. Replacement lines are
//! printed by [`print_file_line`] while the pass runs.

use crate::rewrite::{DirectoryOutcome, FileOutcome, RelocationReport, ReplacementRule, RunStats};
use crate::template::BASE_TOKEN;
use colored::Colorize;
use std::path::{Path, PathBuf};

/// Forward-slash form of a relative path.
fn display_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

pub fn print_backup(backup_dir: &Path, copied: &[PathBuf]) {
    println!("Creating backup in {}...", backup_dir.display());
    for path in copied {
        println!("  {} {}", "Backed up:".dimmed(), display_path(path));
    }
}

pub fn print_replacement_header(new_name: &str) {
    println!(
        "Replacing '{}' with '{}'...",
        BASE_TOKEN,
        new_name.green().bold()
    );
}

/// Progress line for one replacement target.
pub fn print_file_line(path: &Path, outcome: &FileOutcome) {
    let path = display_path(path);
    match outcome {
        FileOutcome::Updated => println!("  {} {}", "Updated:".green(), path),
        FileOutcome::Unchanged => println!("  {} {}", "No changes:".dimmed(), path),
        FileOutcome::Missing => {
            println!("  {} File not found: {}", "Warning:".yellow(), path)
        }
        FileOutcome::Failed(reason) => {
            println!("  {} {}: {}", "Error processing".red(), path, reason)
        }
    }
}

pub fn print_relocation(report: &RelocationReport) {
    println!("Checking for directory names to update...");

    match &report.directory {
        DirectoryOutcome::Renamed { from, to } => println!(
            "  {} {} -> {}",
            "Renamed directory:".green(),
            display_path(from),
            display_path(to)
        ),
        DirectoryOutcome::DestinationExists => println!(
            "  {} destination already exists, directory left in place",
            "Skipped:".dimmed()
        ),
        DirectoryOutcome::NotPresent => {}
        DirectoryOutcome::Failed(reason) => {
            println!("  {} {}", "Error renaming directory:".red(), reason)
        }
    }

    for (path, outcome) in &report.build_files {
        match outcome {
            FileOutcome::Updated => println!(
                "  {} {}",
                "Updated include path in:".green(),
                display_path(path)
            ),
            FileOutcome::Failed(reason) => println!(
                "  {} {}: {}",
                "Error updating".red(),
                display_path(path),
                reason
            ),
            FileOutcome::Unchanged | FileOutcome::Missing => {}
        }
    }
}

fn print_rules(rules: &[ReplacementRule]) {
    for rule in rules {
        println!("  {}", rule);
    }
}

/// Final summary block with next steps.
pub fn print_summary(
    new_name: &str,
    stats: &RunStats,
    relocation: &RelocationReport,
    backup_dir: Option<&Path>,
) {
    let rule = "=".repeat(60);
    let errors = stats.errors + relocation.errors();

    println!("\n{}", rule);
    println!("{}", "PLACEHOLDER REPLACEMENT SUMMARY".bold());
    println!("{}", rule);
    println!(
        "Project name changed from '{}' to '{}'",
        BASE_TOKEN,
        new_name
    );
    println!("Files processed: {}", stats.processed);
    println!("Files updated: {}", stats.updated);
    if relocation.updated() > 0 {
        println!("Build files with updated include paths: {}", relocation.updated());
    }
    if errors > 0 {
        println!("{} {}", "Errors encountered:".red().bold(), errors);
    } else {
        println!("Errors encountered: 0");
    }

    if let Some(dir) = backup_dir {
        println!("Backup created in: {}", dir.display());
    }

    println!("\nReplacements applied:");
    print_rules(&stats.rules);

    println!("\n{}", "Next steps:".bold());
    println!("1. Review the changes and test the build");
    println!("2. Update any additional project-specific references");
    println!("3. Update the project URL in CMakeLists.txt if needed");
    println!("4. Commit the changes to version control");
    if let Some(dir) = backup_dir {
        println!(
            "5. Remove backup directory when satisfied: rm -rf {}",
            dir.display()
        );
    }
}

/// Preview printed instead of running.
pub fn print_dry_run(rules: &[ReplacementRule], target_count: usize) {
    println!("{}", "DRY RUN MODE - No files will be modified".yellow().bold());
    println!("\nWould apply these replacements:");
    print_rules(rules);
    println!(
        "\nWould process {} files. Run without {} to apply.",
        target_count.to_string().cyan().bold(),
        "--dry-run".cyan()
    );
}
