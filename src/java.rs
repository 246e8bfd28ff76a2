//! Java source analysis
//!
//! Line-oriented helpers for Java-like compilation units. Nothing here builds
//! a syntax tree: every function scans characters or matches single lines.
//!
//! - [`comments`]: block comment removal and comment-line predicates
//! - [`packages`]: `package` extraction, base packages, package names/paths
//! - [`declarations`]: class/interface/record detection and disambiguation
//! - [`generics`]: top-level generic parameter extraction
//! - [`classes`]: class-name format, writing a class under its package path

pub mod classes;
pub mod comments;
pub mod declarations;
pub mod error;
pub mod generics;
pub mod packages;

pub use declarations::TypeDeclaration;
pub use error::{SourceError, SourceResult};
