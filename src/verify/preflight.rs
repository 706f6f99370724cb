//! Pre-flight checks performed before any file is touched.
//!
//! Unlike `rules`, these functions look at the filesystem. None of them
//! write anything.

use crate::error::{ReplaceError, Result};
use crate::template::PRIMARY_BUILD_FILE;
use std::fs;
use std::path::Path;

/// Checks that `root` exists and carries a top-level `CMakeLists.txt`.
///
/// Only existence is probed, so this is safe to run in dry-run mode.
pub fn check_project_root(root: &Path) -> Result<()> {
    if !root.exists() {
        return Err(ReplaceError::RootNotFound(root.to_path_buf()));
    }

    let main_build_file = root.join(PRIMARY_BUILD_FILE);
    if !main_build_file.is_file() {
        return Err(ReplaceError::NotATemplateProject(root.to_path_buf()));
    }

    log::debug!("Found {}", main_build_file.display());
    Ok(())
}

/// Returns `true` if the main `CMakeLists.txt` already declares `project(<name>`.
///
/// An unreadable build file is treated as "not in use"; the replacement pass
/// reports the read failure itself.
pub fn name_already_in_use(root: &Path, name: &str) -> bool {
    let main_build_file = root.join(PRIMARY_BUILD_FILE);

    match fs::read_to_string(&main_build_file) {
        Ok(content) => content.contains(&format!("project({}", name)),
        Err(e) => {
            log::debug!("Could not read {}: {}", main_build_file.display(), e);
            false
        }
    }
}
