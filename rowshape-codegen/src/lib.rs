// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

//! Declaration generation for row shapes.
//!
//! This crate is the pure core of the rowshape pipeline: it turns an ordered
//! list of [`rowshape_ir::RowShape`] values into TypeScript declaration
//! blocks. It performs no I/O of its own except through
//! [`DeclarationsFile::write`], which the CLI calls after emission succeeds.
//!
//! # Module Organization
//!
//! - [`builder`] - Code assembly primitives (CodeBuilder, CodeFragment, Indent)
//! - [`TypeMapper`] - Native type tag interpretation and field derivation
//! - [`Emitter`] - Namespace block grouping and rendering
//! - [`lint_shapes`] - Exhaustive diagnostics for `check`-style dry runs
//!
//! Every failure mode is a typed [`Error`]; a generation run either produces
//! the complete artifact or nothing.

pub mod builder;
mod declaration;
mod emitter;
mod error;
mod file;
mod lint;
mod mapper;

pub use declaration::{Declaration, NamespaceBlock, TargetField};
pub use emitter::Emitter;
pub use error::{Error, Result};
pub use file::{DeclarationsFile, WriteStatus};
pub use lint::{Diagnostic, Severity, lint_shapes};
pub use mapper::{NativeFamily, TsType, TypeMapper};
