//! Applies replacement rules to the fixed target files.
//!
//! ## Guarantees
//!
//! - **Write only on change**: a file is rewritten only if the rules change
//!   its content; untouched files keep their bytes and timestamps
//! - **Isolation**: a failure on one file is recorded and the pass moves on
//! - **Determinism**: same content and rules always give the same output

use crate::rewrite::rules::{ReplacementRule, apply_rules};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// What happened to one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// Content changed and was written back.
    Updated,
    /// Rules matched nothing; file left alone.
    Unchanged,
    /// File does not exist.
    Missing,
    /// Read, decode or write failed.
    Failed(String),
}

impl FileOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, FileOutcome::Failed(_))
    }
}

/// Result of the replacement pass.
#[derive(Debug, Clone, Default)]
pub struct RunStats {
    pub processed: usize,
    pub updated: usize,
    pub errors: usize,
    /// Rules applied, in order.
    pub rules: Vec<ReplacementRule>,
    /// Per-target outcome, relative path first, in target order.
    pub files: Vec<(PathBuf, FileOutcome)>,
}

impl RunStats {
    /// Files that existed but needed no change.
    pub fn unchanged(&self) -> usize {
        self.count(|o| *o == FileOutcome::Unchanged)
    }

    /// Targets that were not found.
    pub fn missing(&self) -> usize {
        self.count(|o| *o == FileOutcome::Missing)
    }

    fn count(&self, pred: impl Fn(&FileOutcome) -> bool) -> usize {
        self.files.iter().filter(|(_, o)| pred(o)).count()
    }
}

/// Runs every rule over every target under `root`.
///
/// Never fails as a whole; per-file problems land in the returned stats.
pub fn apply_all<P: AsRef<Path>>(
    root: &Path,
    targets: &[P],
    rules: &[ReplacementRule],
) -> RunStats {
    apply_all_with(root, targets, rules, |_, _| {})
}

/// Like [`apply_all`], calling `on_file` with each target's relative path
/// and outcome as soon as that file is done.
pub fn apply_all_with<P, F>(
    root: &Path,
    targets: &[P],
    rules: &[ReplacementRule],
    mut on_file: F,
) -> RunStats
where
    P: AsRef<Path>,
    F: FnMut(&Path, &FileOutcome),
{
    let mut stats = RunStats {
        rules: rules.to_vec(),
        ..RunStats::default()
    };

    for target in targets {
        let relative = target.as_ref();
        let outcome = rewrite_file(&root.join(relative), rules);

        stats.processed += 1;
        match &outcome {
            FileOutcome::Updated => stats.updated += 1,
            FileOutcome::Failed(reason) => {
                log::warn!("Error processing {}: {}", relative.display(), reason);
                stats.errors += 1;
            }
            FileOutcome::Missing => log::debug!("Not found: {}", relative.display()),
            FileOutcome::Unchanged => log::debug!("No changes: {}", relative.display()),
        }

        on_file(relative, &outcome);
        stats.files.push((relative.to_path_buf(), outcome));
    }

    log::info!(
        "Replacement pass: {} processed, {} updated, {} errors",
        stats.processed,
        stats.updated,
        stats.errors
    );

    stats
}

/// Applies `rules` to a single file, writing it back only when it changed.
pub fn rewrite_file(path: &Path, rules: &[ReplacementRule]) -> FileOutcome {
    if !path.exists() {
        return FileOutcome::Missing;
    }

    let original = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => return FileOutcome::Failed(describe_read_error(&e)),
    };

    let updated = apply_rules(&original, rules);
    if updated == original {
        return FileOutcome::Unchanged;
    }

    match fs::write(path, updated) {
        Ok(()) => FileOutcome::Updated,
        Err(e) => FileOutcome::Failed(format!("write failed: {}", e)),
    }
}

fn describe_read_error(e: &io::Error) -> String {
    if e.kind() == io::ErrorKind::InvalidData {
        "not valid UTF-8".to_string()
    } else {
        format!("read failed: {}", e)
    }
}
