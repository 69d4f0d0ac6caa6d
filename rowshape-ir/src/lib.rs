//! Row shape representation for the rowshape declaration generator.
//!
//! This crate provides the unified type definitions used across the rowshape
//! pipeline. A [`RowShape`] is the language-neutral description of one typed
//! record: where it comes from is a collector concern, what it turns into is
//! an emitter concern, and this crate is the contract between the two.
//!
//! # Architecture
//!
//! ```text
//! rowshape.toml → rowshape-manifest (parsing) → rowshape-ir (row shapes) → rowshape-codegen
//! ```
//!
//! The shape types are designed to be:
//! - Target-agnostic (no TypeScript-specific concerns)
//! - Source-agnostic (tables and named statements lower to the same shape)
//! - Order-preserving (columns and shapes keep their input order verbatim)

mod naming;
mod path;
mod policy;
mod shape;

pub use naming::{to_camel_case, to_class_case, upper_first};
pub use path::{NamespacePath, PathError};
pub use policy::{EmitOptions, GroupingPolicy, NullabilityPolicy};
pub use shape::{ColumnDescriptor, RowShape};
