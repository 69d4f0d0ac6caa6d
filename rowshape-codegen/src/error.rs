use miette::Diagnostic;
use thiserror::Error;

/// Result type for generator operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the type mapper and the emitter.
///
/// Every variant is fatal to a generation run: the run either produces the
/// complete artifact or nothing at all.
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("unsupported native type '{tag}' on column '{column}' of '{declaration}'")]
    #[diagnostic(
        code(rowshape::unsupported_type),
        help(
            "recognized tags cover the integer, float, text, boolean, temporal, and uuid families"
        )
    )]
    UnsupportedType {
        declaration: String,
        column: String,
        tag: String,
    },

    #[error("columns '{first}' and '{second}' of '{declaration}' both map to field '{field}'")]
    #[diagnostic(
        code(rowshape::field_collision),
        help("rename one of the columns; derived field names are never deduplicated")
    )]
    FieldNameCollision {
        declaration: String,
        field: String,
        first: String,
        second: String,
    },

    #[error("duplicate declaration '{declaration}' in namespace '{namespace}'")]
    #[diagnostic(
        code(rowshape::duplicate_declaration),
        help("each (namespace, name) pair may only be declared once per run")
    )]
    DuplicateDeclaration {
        namespace: String,
        declaration: String,
    },
}
