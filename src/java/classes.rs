//! Class names and class files

use crate::io::{write_file, WriteOption, WriteResult};
use crate::java::error::SourceResult;
use crate::java::packages::{extract_package_name, package_path};
use crate::text::starts_with_uppercase;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Conventional class name: leading uppercase, ASCII letters only, and at
/// least one lowercase letter unless the name is a single character.
pub fn has_valid_class_name_format(name: &str) -> bool {
    starts_with_uppercase(name)
        && name.chars().all(|c| c.is_ascii_alphabetic())
        && (name.chars().count() == 1 || name.chars().any(|c| c.is_ascii_lowercase()))
}

/// Where a class file belongs: `<content_root>/<package dirs>/<file_name>`.
pub fn class_file_path(content_root: &Path, file_name: &str, class_content: &str) -> SourceResult<PathBuf> {
    let package = extract_package_name(class_content)?;
    Ok(content_root.join(package_path(&package)?).join(file_name))
}

/// Write `class_content` below `content_root` following its package declaration.
///
/// A missing package is an error; everything after path resolution is
/// reported through the [`WriteResult`].
pub fn write_class(
    file_name: &str,
    class_content: &str,
    content_root: &Path,
    options: &[WriteOption],
) -> SourceResult<WriteResult> {
    let path = class_file_path(content_root, file_name, class_content)?;
    debug!(path = %path.display(), ?options, "writing class");
    Ok(write_file(&path, class_content, options))
}
