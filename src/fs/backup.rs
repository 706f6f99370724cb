//! Pre-replacement snapshot of the target files.
//!
//! The backup directory is owned by the tool: each snapshot removes the
//! previous one before copying. The snapshot is complete before the
//! replacement pass starts, and any I/O error aborts the run.
//!
//! ## Example
//!
//! ```no_run
//! # use template_rename::fs::backup::snapshot;
//! # use std::path::Path;
//! # fn example() -> template_rename::error::Result<()> {
//! let root = Path::new("my-project");
//! let backup_dir = root.join(".backup_placeholders");
//! let copied = snapshot(root, &["CMakeLists.txt", "README.md"], &backup_dir)?;
//! println!("{} files backed up", copied.len());
//! # Ok(())
//! # }
//! ```

use crate::error::{ReplaceError, Result};
use std::fs::{self, File, FileTimes};
use std::io;
use std::path::{Path, PathBuf};

/// Copies every existing target under `root` into `backup_dir`.
///
/// Relative structure, permissions, and access/modification times are kept.
/// Returns the relative paths that were copied, in target order.
pub fn snapshot<P: AsRef<Path>>(
    root: &Path,
    targets: &[P],
    backup_dir: &Path,
) -> Result<Vec<PathBuf>> {
    if backup_dir.exists() {
        log::debug!("Removing previous backup: {}", backup_dir.display());
        fs::remove_dir_all(backup_dir).map_err(|e| backup_error(backup_dir, e))?;
    }

    fs::create_dir_all(backup_dir).map_err(|e| backup_error(backup_dir, e))?;

    let mut copied = Vec::new();
    for target in targets {
        let relative = target.as_ref();
        let source = root.join(relative);
        if !source.is_file() {
            log::debug!("Nothing to back up for {}", relative.display());
            continue;
        }

        let dest = backup_dir.join(relative);
        copy_with_metadata(&source, &dest).map_err(|e| backup_error(&dest, e))?;
        log::debug!("Backed up: {}", relative.display());
        copied.push(relative.to_path_buf());
    }

    log::info!(
        "Backed up {} files to {}",
        copied.len(),
        backup_dir.display()
    );
    Ok(copied)
}

/// Copies content, restores the source timestamps, then applies permissions.
///
/// Times are set through the handle that wrote the copy. The source's
/// permissions (possibly read-only) are applied last, since setting times on
/// Windows needs write access to the file attributes.
fn copy_with_metadata(source: &Path, dest: &Path) -> io::Result<()> {
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)?;
    }

    let metadata = fs::metadata(source)?;
    let mut reader = File::open(source)?;
    let mut writer = File::create(dest)?;
    io::copy(&mut reader, &mut writer)?;

    let times = FileTimes::new()
        .set_accessed(metadata.accessed()?)
        .set_modified(metadata.modified()?);
    writer.set_times(times)?;
    drop(writer);

    fs::set_permissions(dest, metadata.permissions())?;
    Ok(())
}

fn backup_error(path: &Path, source: io::Error) -> ReplaceError {
    ReplaceError::Backup {
        path: path.to_path_buf(),
        source,
    }
}
