//! Renames `include/cpp-template` and patches include paths in build files.
//!
//! The directory move never merges: if the destination exists the move is
//! skipped. The reference scan rewrites every `CMakeLists.txt` under the
//! project root, except inside the backup directory.

use crate::rewrite::engine::FileOutcome;
use crate::template::{BACKUP_DIR, BASE_TOKEN, BUILD_FILE_NAME, INCLUDE_DIR, include_ref};
use std::fs;
use std::path::{Path, PathBuf};

/// What happened to the header directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectoryOutcome {
    /// Moved from `from` to `to`, both relative to the project root.
    Renamed { from: PathBuf, to: PathBuf },
    /// Destination already exists; nothing moved.
    DestinationExists,
    /// No placeholder directory to move.
    NotPresent,
    /// The move itself failed.
    Failed(String),
}

/// Result of the relocation step.
#[derive(Debug, Clone)]
pub struct RelocationReport {
    pub directory: DirectoryOutcome,
    /// Every discovered build file, relative to the root, sorted by path.
    pub build_files: Vec<(PathBuf, FileOutcome)>,
}

impl RelocationReport {
    pub fn updated(&self) -> usize {
        self.build_files
            .iter()
            .filter(|(_, o)| *o == FileOutcome::Updated)
            .count()
    }

    pub fn errors(&self) -> usize {
        let dir_failed = usize::from(matches!(self.directory, DirectoryOutcome::Failed(_)));
        dir_failed
            + self
                .build_files
                .iter()
                .filter(|(_, o)| o.is_failure())
                .count()
    }
}

/// Moves the header directory and rewrites include paths.
pub fn relocate(root: &Path, new_name: &str) -> RelocationReport {
    let directory = rename_include_dir(root, new_name);

    let old_ref = include_ref(BASE_TOKEN);
    let new_ref = include_ref(new_name);

    let build_files = find_build_files(root)
        .into_iter()
        .map(|path| {
            let outcome = patch_build_file(&path, &old_ref, &new_ref);
            let relative = pathdiff::diff_paths(&path, root).unwrap_or_else(|| path.clone());
            match &outcome {
                FileOutcome::Updated => {
                    log::debug!("Updated include path in: {}", relative.display())
                }
                FileOutcome::Failed(reason) => {
                    log::warn!("Error updating {}: {}", relative.display(), reason)
                }
                _ => {}
            }
            (relative, outcome)
        })
        .collect();

    RelocationReport {
        directory,
        build_files,
    }
}

fn rename_include_dir(root: &Path, new_name: &str) -> DirectoryOutcome {
    let from = Path::new(INCLUDE_DIR).join(BASE_TOKEN);
    let to = Path::new(INCLUDE_DIR).join(new_name);
    let abs_from = root.join(&from);
    let abs_to = root.join(&to);

    if !abs_from.is_dir() {
        log::debug!("No {} directory to rename", from.display());
        return DirectoryOutcome::NotPresent;
    }

    if abs_to.exists() {
        log::info!("{} already exists, leaving {} in place", to.display(), from.display());
        return DirectoryOutcome::DestinationExists;
    }

    match fs::rename(&abs_from, &abs_to) {
        Ok(()) => {
            log::info!("Moved: {} → {}", from.display(), to.display());
            DirectoryOutcome::Renamed { from, to }
        }
        Err(e) => {
            log::warn!("Failed to move {} → {}: {}", from.display(), to.display(), e);
            DirectoryOutcome::Failed(e.to_string())
        }
    }
}

/// Finds every `CMakeLists.txt` under `root`, including hidden and ignored
/// paths, skipping the backup directory.
fn find_build_files(root: &Path) -> Vec<PathBuf> {
    let backup = root.join(BACKUP_DIR);

    let walker = ignore::WalkBuilder::new(root)
        .standard_filters(false)
        .sort_by_file_name(|a, b| a.cmp(b))
        .filter_entry(move |e| e.path() != backup)
        .build();

    let mut files = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                log::debug!("Skipping entry due to error: {}", e);
                continue;
            }
        };

        if entry.file_type().is_some_and(|ft| ft.is_file())
            && entry.file_name() == BUILD_FILE_NAME
        {
            files.push(entry.into_path());
        }
    }

    files
}

fn patch_build_file(path: &Path, old_ref: &str, new_ref: &str) -> FileOutcome {
    let content = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => return FileOutcome::Failed(format!("read failed: {}", e)),
    };

    if !content.contains(old_ref) {
        return FileOutcome::Unchanged;
    }

    match fs::write(path, content.replace(old_ref, new_ref)) {
        Ok(()) => FileOutcome::Updated,
        Err(e) => FileOutcome::Failed(format!("write failed: {}", e)),
    }
}
