//! Orchestration of a placeholder replacement run.
//!
//! ```text
//! Start → Validated → (BackedUp | NoBackup) → Replaced → Relocated → Reported
//! ```
//!
//! Validation failures, a missing project root or build file, and backup I/O
//! errors abort the run. Everything after the backup records per-file
//! outcomes and keeps going.

use crate::error::{ReplaceError, Result};
use crate::fs::backup;
use crate::report;
use crate::rewrite::{
    self, FileOutcome, RelocationReport, ReplacementRule, RunStats, derive_rules,
};
use crate::template::{BACKUP_DIR, TARGET_FILES};
use crate::verify::{ProjectName, check_project_root, confirm_name_reuse, name_already_in_use};

use clap::Parser;
use colored::Colorize;
use std::path::{Path, PathBuf};

/// Arguments for a replacement run.
#[derive(Parser, Debug, Clone)]
pub struct ReplaceArgs {
    /// New project name (letters, numbers, hyphens, underscores only)
    pub project_name: String,

    /// Project root directory (defaults to the current directory)
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub project_root: PathBuf,

    /// Skip creating a backup of the original files
    #[arg(long)]
    pub no_backup: bool,

    /// Show what would be changed without making changes
    #[arg(long, short = 'n')]
    pub dry_run: bool,

    /// Continue without asking if the project already uses the new name
    #[arg(long = "yes", short = 'y')]
    pub skip_confirmation: bool,
}

impl ReplaceArgs {
    /// Backups are never taken in dry-run mode.
    pub fn backup_enabled(&self) -> bool {
        !self.dry_run && !self.no_backup
    }
}

/// Everything a completed run produced.
#[derive(Debug)]
pub struct RunSummary {
    /// Relative paths copied into the backup, if one was taken.
    pub backed_up: Option<Vec<PathBuf>>,
    pub stats: RunStats,
    pub relocation: RelocationReport,
}

/// Replaces the template placeholder in one project.
///
/// Rules and targets are fixed at construction.
#[derive(Debug, Clone)]
pub struct Replacer {
    root: PathBuf,
    name: ProjectName,
    rules: Vec<ReplacementRule>,
    targets: Vec<PathBuf>,
    backup: bool,
}

impl Replacer {
    pub fn new(root: impl Into<PathBuf>, name: ProjectName, backup: bool) -> Self {
        let rules = derive_rules(name.as_str());
        Self {
            root: root.into(),
            name,
            rules,
            targets: TARGET_FILES.iter().map(PathBuf::from).collect(),
            backup,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn name(&self) -> &ProjectName {
        &self.name
    }

    pub fn rules(&self) -> &[ReplacementRule] {
        &self.rules
    }

    pub fn targets(&self) -> &[PathBuf] {
        &self.targets
    }

    pub fn backup_dir(&self) -> PathBuf {
        self.root.join(BACKUP_DIR)
    }

    /// Snapshots the existing targets. Returns `None` if backups are disabled.
    pub fn create_backup(&self) -> Result<Option<Vec<PathBuf>>> {
        if !self.backup {
            log::debug!("Backup disabled");
            return Ok(None);
        }

        backup::snapshot(&self.root, self.targets.as_slice(), &self.backup_dir()).map(Some)
    }

    pub fn replace_placeholders(&self) -> RunStats {
        rewrite::apply_all(&self.root, self.targets.as_slice(), &self.rules)
    }

    /// Replacement pass that reports each file as soon as it is done.
    pub fn replace_placeholders_with(
        &self,
        on_file: impl FnMut(&Path, &FileOutcome),
    ) -> RunStats {
        rewrite::apply_all_with(&self.root, self.targets.as_slice(), &self.rules, on_file)
    }

    pub fn update_directory_structure(&self) -> RelocationReport {
        rewrite::relocate(&self.root, self.name.as_str())
    }

    /// Backup, replacement pass, relocation. Only the backup can fail.
    pub fn run(&self) -> Result<RunSummary> {
        log::info!("Starting placeholder replacement for project: {}", self.name);

        let backed_up = self.create_backup()?;
        let stats = self.replace_placeholders();
        let relocation = self.update_directory_structure();

        Ok(RunSummary {
            backed_up,
            stats,
            relocation,
        })
    }
}

/// Executes a replacement run from parsed CLI arguments.
///
/// ## Phases
///
/// 1. Validate the project name
/// 2. Check the project root and its `CMakeLists.txt`
/// 3. Confirm if the name already appears to be in use (unless `--yes`)
/// 4. Dry run: print the plan and stop
/// 5. Backup, replace, relocate
/// 6. Print the summary
pub fn execute(args: ReplaceArgs) -> Result<()> {
    let name = ProjectName::parse(&args.project_name)?;

    check_project_root(&args.project_root)?;

    if !args.dry_run
        && name_already_in_use(&args.project_root, name.as_str())
        && !confirm_name_reuse(name.as_str(), args.skip_confirmation)?
    {
        println!("{}", "Aborted.".yellow());
        return Err(ReplaceError::Cancelled);
    }

    let replacer = Replacer::new(args.project_root.clone(), name, args.backup_enabled());

    if args.dry_run {
        report::print_dry_run(replacer.rules(), replacer.targets().len());
        return Ok(());
    }

    println!(
        "Starting placeholder replacement for project: {}",
        replacer.name().as_str().green().bold()
    );
    println!("Working directory: {}", replacer.root().display());

    let backed_up = match replacer.create_backup() {
        Ok(copied) => copied,
        Err(e) => return handle_backup_error(e, &replacer),
    };
    let backup_dir = replacer.backup_dir();
    if let Some(copied) = &backed_up {
        report::print_backup(&backup_dir, copied);
    }

    report::print_replacement_header(replacer.name().as_str());
    let stats = replacer.replace_placeholders_with(report::print_file_line);

    let relocation = replacer.update_directory_structure();
    report::print_relocation(&relocation);

    report::print_summary(
        replacer.name().as_str(),
        &stats,
        &relocation,
        backed_up.as_ref().map(|_| backup_dir.as_path()),
    );

    println!(
        "\n{}",
        "✓ Placeholder replacement completed successfully!".green().bold()
    );

    Ok(())
}

/// The backup runs before any target is touched, so its failure leaves the
/// project as it was. Whatever was copied is incomplete.
fn handle_backup_error(e: ReplaceError, replacer: &Replacer) -> Result<()> {
    eprintln!("{} {}", "Error during replacement process:".red().bold(), e);
    eprintln!("No project files were modified.");

    let backup_dir = replacer.backup_dir();
    if backup_dir.is_dir() {
        eprintln!(
            "{} {} (safe to delete)",
            "Incomplete backup left in:".yellow(),
            backup_dir.display()
        );
    }

    Err(e)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn args(root: &Path, name: &str) -> ReplaceArgs {
        ReplaceArgs {
            project_name: name.to_string(),
            project_root: root.to_path_buf(),
            no_backup: false,
            dry_run: false,
            skip_confirmation: false,
        }
    }

    #[test]
    fn test_replacer_fixed_tables() {
        let name = ProjectName::parse("demo").unwrap();
        let replacer = Replacer::new("/tmp/project", name, true);

        assert_eq!(replacer.targets().len(), TARGET_FILES.len());
        assert_eq!(replacer.rules().len(), 7);
        assert_eq!(
            replacer.backup_dir(),
            PathBuf::from("/tmp/project/.backup_placeholders")
        );
    }

    #[test]
    fn test_backup_enabled() {
        let temp = TempDir::new().unwrap();
        let mut a = args(temp.path(), "demo");
        assert!(a.backup_enabled());

        a.no_backup = true;
        assert!(!a.backup_enabled());

        a.no_backup = false;
        a.dry_run = true;
        assert!(!a.backup_enabled());
    }

    #[test]
    fn test_run_without_backup() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("CMakeLists.txt"), "project(cpp-template)\n").unwrap();

        let name = ProjectName::parse("demo").unwrap();
        let summary = Replacer::new(temp.path(), name, false).run().unwrap();

        assert!(summary.backed_up.is_none());
        assert_eq!(summary.stats.processed, TARGET_FILES.len());
        assert_eq!(summary.stats.updated, 1);
        assert!(!temp.path().join(BACKUP_DIR).exists());
    }

    #[test]
    fn test_execute_rejects_invalid_name_before_root_checks() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("missing");

        let result = execute(args(&missing, "bad name!"));

        assert!(matches!(result, Err(ReplaceError::InvalidName(..))));
    }

    #[test]
    fn test_execute_dry_run_touches_nothing() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("CMakeLists.txt"), "project(cpp-template)\n").unwrap();

        let mut a = args(temp.path(), "demo");
        a.dry_run = true;
        execute(a).unwrap();

        assert_eq!(
            fs::read_to_string(temp.path().join("CMakeLists.txt")).unwrap(),
            "project(cpp-template)\n"
        );
        assert!(!temp.path().join(BACKUP_DIR).exists());
    }
}
