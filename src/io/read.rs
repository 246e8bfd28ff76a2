//! Reading source files

use crate::java::error::{SourceError, SourceResult};
use crate::text::is_blank;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Read `file_name` inside `directory`.
///
/// Blank arguments and missing files are argument errors; failures while
/// reading an existing file surface as [`SourceError::Io`].
pub fn read_file_content(directory: &str, file_name: &str) -> SourceResult<String> {
    let directory = directory.trim();
    if directory.is_empty() || file_name.is_empty() {
        return Err(SourceError::InvalidArgument(format!(
            "File not found: {}/{}",
            directory, file_name
        )));
    }

    let path = Path::new(directory).join(file_name);
    if !path.exists() {
        return Err(SourceError::InvalidArgument(format!(
            "File not found: {}",
            path.display()
        )));
    }
    read_file(&path)
}

pub fn read_file(path: &Path) -> SourceResult<String> {
    let content = fs::read_to_string(path).map_err(|source| SourceError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = content.len(), "read file");
    Ok(content)
}

/// `directory/file_name`, rejecting a blank directory.
pub fn full_path(directory: &str, file_name: &str) -> SourceResult<PathBuf> {
    Ok(convert_to_path(directory)?.join(file_name))
}

/// Join directory parts in order, then append `file_name`.
pub fn full_path_of<S: AsRef<str>>(directories: &[S], file_name: &str) -> SourceResult<PathBuf> {
    if directories.is_empty() {
        return Err(SourceError::InvalidArgument(
            "Path cannot be null or blank".to_string(),
        ));
    }

    let mut path = PathBuf::new();
    for directory in directories {
        path.push(convert_to_path(directory.as_ref())?);
    }
    Ok(path.join(file_name))
}

fn convert_to_path(path: &str) -> SourceResult<PathBuf> {
    if is_blank(path) {
        return Err(SourceError::InvalidArgument(
            "Path cannot be null or blank".to_string(),
        ));
    }
    Ok(PathBuf::from(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_read_file_content() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("Foo.java"), "class Foo {}").unwrap();

        let directory = dir.path().to_str().unwrap();
        assert_eq!(read_file_content(directory, "Foo.java").unwrap(), "class Foo {}");
    }

    #[test]
    fn test_read_file_content_rejects_missing_and_blank() {
        let dir = tempdir().unwrap();
        let directory = dir.path().to_str().unwrap();

        assert!(matches!(
            read_file_content(directory, "Missing.java"),
            Err(SourceError::InvalidArgument(_))
        ));
        assert!(matches!(
            read_file_content("  ", "Foo.java"),
            Err(SourceError::InvalidArgument(_))
        ));
        assert!(matches!(
            read_file_content(directory, ""),
            Err(SourceError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_read_directory_is_io_error() {
        let dir = tempdir().unwrap();
        assert!(matches!(read_file(dir.path()), Err(SourceError::Io { .. })));
    }

    #[test]
    fn test_full_paths() {
        assert_eq!(
            full_path("src", "Foo.java").unwrap(),
            PathBuf::from("src").join("Foo.java")
        );
        assert_eq!(
            full_path_of(&["src", "main", "java"], "Foo.java").unwrap(),
            PathBuf::from("src").join("main").join("java").join("Foo.java")
        );
        assert!(full_path(" ", "Foo.java").is_err());
        assert!(full_path_of::<&str>(&[], "Foo.java").is_err());
        assert!(full_path_of(&["src", ""], "Foo.java").is_err());
    }
}
