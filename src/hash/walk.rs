// Directory listing module
// Single-level listing of regular files in natural (numeric-aware) order

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use super::error::DirsumError;

/// List the immediate regular files of a directory in natural order
///
/// Non-regular entries (subdirectories, symlinks to directories, special
/// files) are dropped. Does not recurse. Natural ordering puts `file2`
/// before `file10`; it exists for deterministic output and nothing else.
pub fn list_files(dir: &Path) -> Result<Vec<PathBuf>, DirsumError> {
    let metadata = fs::metadata(dir).map_err(|e| {
        DirsumError::from_io_error(e, "scanning directory", Some(dir.to_path_buf()))
    })?;

    if !metadata.is_dir() {
        return Err(DirsumError::NotADirectory {
            path: dir.to_path_buf(),
        });
    }

    let entries = fs::read_dir(dir).map_err(|e| {
        DirsumError::from_io_error(e, "scanning directory", Some(dir.to_path_buf()))
    })?;

    let mut files = Vec::new();

    for entry_result in entries {
        let entry = match entry_result {
            Ok(entry) => entry,
            Err(e) => {
                println!("Warning: Cannot read directory entry: {}", e);
                continue;
            }
        };

        let path = entry.path();

        // fs::metadata follows symlinks, so a symlink to a regular file
        // counts as a file while a broken symlink is skipped
        let metadata = match fs::metadata(&path) {
            Ok(metadata) => metadata,
            Err(e) => {
                println!("Warning: Cannot read metadata for {}: {}", path.display(), e);
                continue;
            }
        };

        if metadata.is_file() {
            files.push(path);
        }
    }

    files.sort_by(|a, b| natord::compare(&file_name_lossy(a), &file_name_lossy(b)));

    Ok(files)
}

/// Resolve a path to an absolute one against the current directory
pub fn absolutize(path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        env::current_dir()
            .map(|cwd| cwd.join(path))
            .unwrap_or_else(|_| path.to_path_buf())
    }
}

/// Basename of a path as an owned string, empty when there is none
pub fn file_name_lossy(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}
