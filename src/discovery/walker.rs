use std::path::{Path, PathBuf};
use tracing::{debug, trace, warn};
use walkdir::WalkDir;

use super::FilePattern;
use crate::config::ReadErrorPolicy;
use crate::error::IoError;

/// Files found under one root.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Discovery {
    pub files: Vec<PathBuf>,
    /// Entries the walk could not read and skipped.
    pub skipped: usize,
}

/// Fails when `root` is absent or not a directory.
pub fn check_root(root: &Path) -> Result<(), IoError> {
    if !root.exists() {
        return Err(IoError::directory_not_found(root));
    }
    if !root.is_dir() {
        return Err(IoError::NotADirectory {
            path: root.to_path_buf(),
        });
    }
    Ok(())
}

/// Recursively collect files under `root` whose name matches `pattern`.
///
/// Paths are absolute. Entries are visited sorted by file name within each
/// directory, so the result is stable for a given tree. Symlinked files are
/// included; symlinked directories are listed but not descended into.
///
/// An entry the walk cannot read fails the call under
/// [`ReadErrorPolicy::Fail`]. Under [`ReadErrorPolicy::Skip`] it is logged,
/// counted and the walk moves on to its siblings.
pub fn find_files(
    root: &Path,
    pattern: &FilePattern,
    on_error: ReadErrorPolicy,
) -> Result<Discovery, IoError> {
    check_root(root)?;
    let root = std::path::absolute(root).map_err(|e| IoError::read_error(root, e))?;

    let mut found = Discovery::default();

    for entry in WalkDir::new(&root).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                let path = err.path().unwrap_or(root.as_path()).to_path_buf();
                if on_error == ReadErrorPolicy::Fail {
                    return Err(IoError::DirectoryScanError { path, source: err });
                }
                warn!(path = %path.display(), error = %err, "skipping unreadable entry");
                found.skipped += 1;
                continue;
            }
        };

        let is_file = entry.file_type().is_file()
            || (entry.path_is_symlink() && entry.path().is_file());
        if !is_file {
            continue;
        }

        let file_name = entry.file_name().to_string_lossy();
        if pattern.matches(&file_name) {
            trace!(path = %entry.path().display(), "pattern matched");
            found.files.push(entry.into_path());
        }
    }

    debug!(
        root = %root.display(),
        pattern = pattern.as_str(),
        count = found.files.len(),
        skipped = found.skipped,
        "discovered candidate files"
    );

    Ok(found)
}
