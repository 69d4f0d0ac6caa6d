// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

//! Parsing, validation, and lowering of `rowshape.toml` manifests.
//!
//! A manifest lists the row sources to declare: introspected tables and SQL
//! files with named statements. Parsing checks every name that will land in
//! the generated TypeScript, so a manifest that parses cleanly lowers into
//! [`rowshape_ir::RowShape`] values without further I/O.
//!
//! ```ignore
//! let manifest = Manifest::from_file("rowshape.toml")?;
//! let lowered = manifest.lower()?;
//! ```

mod error;
mod lower;
mod manifest;
mod source;
mod validate;

pub use error::{Error, Result, SourceContext};
pub use lower::{Lowered, SkippedStatement};
pub use manifest::{DEFAULT_OUTPUT, GeneratorConfig, Manifest, parse_manifest};
pub use source::{Column, QueryFile, Statement, Table};
pub use validate::{ParseContext, is_reserved_word};
