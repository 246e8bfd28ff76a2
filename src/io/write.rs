//! Option-driven file writing
//!
//! [`write_file`] never returns `Err`: every outcome, including I/O failures,
//! is a [`WriteResult`] variant so callers can match on it as data.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOption {
    /// Replace an existing file
    OverwriteExisting,
    /// Create missing parent directories
    CreateDirectories,
    /// Append to an existing file instead of replacing it
    Merge,
}

#[derive(Debug)]
pub enum WriteResult {
    Success,
    /// The target exists and neither overwrite nor merge was requested
    FileAlreadyExists(PathBuf),
    /// The parent directory is missing and may not be created
    DirectoryMissing(PathBuf),
    Error {
        path: Option<PathBuf>,
        cause: io::Error,
    },
}

impl WriteResult {
    pub fn is_success(&self) -> bool {
        matches!(self, WriteResult::Success)
    }
}

pub fn write_file(path: impl AsRef<Path>, content: &str, options: &[WriteOption]) -> WriteResult {
    let path = path.as_ref();
    if path.as_os_str().is_empty() {
        return WriteResult::Error {
            path: None,
            cause: io::Error::new(
                io::ErrorKind::InvalidInput,
                "File path cannot be null or empty",
            ),
        };
    }

    match try_write(path, content, options) {
        Ok(result) => result,
        Err(cause) => {
            warn!(path = %path.display(), error = %cause, "write failed");
            WriteResult::Error {
                path: Some(path.to_path_buf()),
                cause,
            }
        }
    }
}

fn try_write(path: &Path, content: &str, options: &[WriteOption]) -> io::Result<WriteResult> {
    let overwrite_existing = options.contains(&WriteOption::OverwriteExisting);
    let create_directories = options.contains(&WriteOption::CreateDirectories);
    let merge = options.contains(&WriteOption::Merge);

    if path.exists() && !overwrite_existing && !merge {
        debug!(path = %path.display(), "file exists, not overwriting");
        return Ok(WriteResult::FileAlreadyExists(path.to_path_buf()));
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if !parent.exists() {
            if !create_directories {
                return Ok(WriteResult::DirectoryMissing(parent.to_path_buf()));
            }
            fs::create_dir_all(parent)?;
            info!("Created directory: {:?}", parent);
        }
    }

    if merge && path.exists() {
        let mut file = OpenOptions::new().append(true).open(path)?;
        file.write_all(content.as_bytes())?;
        info!("Merged content into file: {:?}", path);
    } else {
        fs::write(path, content)?;
        info!("Wrote content to file: {:?}", path);
    }

    Ok(WriteResult::Success)
}

pub fn write_file_with_force_and_create_directory(path: impl AsRef<Path>, content: &str) -> WriteResult {
    write_file(
        path,
        content,
        &[WriteOption::OverwriteExisting, WriteOption::CreateDirectories],
    )
}

/// Create directories as needed; replace an existing file only when `force` is set.
pub fn write_file_and_create_directory(path: impl AsRef<Path>, content: &str, force: bool) -> WriteResult {
    if force {
        write_file_with_force_and_create_directory(path, content)
    } else {
        write_file(path, content, &[WriteOption::CreateDirectories])
    }
}

pub fn write_file_with_merge_and_create_directory(path: impl AsRef<Path>, content: &str) -> WriteResult {
    write_file(
        path,
        content,
        &[WriteOption::Merge, WriteOption::CreateDirectories],
    )
}

pub fn write_file_with_merge(path: impl AsRef<Path>, content: &str) -> WriteResult {
    write_file(path, content, &[WriteOption::Merge])
}
