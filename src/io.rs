//! File input/output
//!
//! Thin wrappers over `std::fs` used by the class writer and the CLI:
//!
//! - [`read`]: read a source file into memory, build paths from parts.
//! - [`write`]: option-driven writes that report their outcome as a
//!   [`WriteResult`] instead of an error, since callers branch on it.

pub mod read;
pub mod write;

pub use read::{full_path, full_path_of, read_file, read_file_content};
pub use write::{
    write_file, write_file_and_create_directory, write_file_with_force_and_create_directory,
    write_file_with_merge, write_file_with_merge_and_create_directory, WriteOption, WriteResult,
};
