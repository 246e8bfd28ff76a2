//! # jsrc
//!
//! Lightweight introspection of Java source text.
//!
//! The crate reads compilation units as plain text and answers a few narrow
//! questions about them without building a syntax tree: which package they
//! live in, which type they declare, and which generic parameters that type
//! takes. Block comments are stripped first so commented-out declarations
//! don't count.
//!
//! Layout
//!
//! src/java        The analyses (comments, packages, declarations, generics, classes)
//! src/text.rs     Splitting and searching primitives shared by the analyses
//! src/io          Reading sources and option-driven writing of class files
//! src/config.rs   Layered TOML configuration with embedded defaults
//!
//! ```text
//! let source = "/* header */\npackage com.acme.widgets;\n\npublic class Widget<T> {}";
//! extract_package_name(source)        // "com.acme.widgets"
//! find_unique_type_name(source)       // "Widget"
//! extract_generic_types("Widget<T>")  // ["T"]
//! ```

pub mod config;
pub mod io;
pub mod java;
pub mod text;

pub use java::comments::remove_block_comments;
pub use java::declarations::{find_unique_type_name, parse_type_declaration};
pub use java::generics::extract_generic_types;
pub use java::packages::{extract_base_package_name, extract_package_name};
pub use java::{SourceError, SourceResult, TypeDeclaration};
