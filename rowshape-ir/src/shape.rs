//! Row shape definitions.
//!
//! A row shape describes one typed record produced by a collector: the table
//! or named statement it came from decides its namespace and declaration
//! name, and its columns arrive in source order and stay that way.

use crate::NamespacePath;

/// One column of a row shape.
///
/// The native type is an opaque tag taken verbatim from the source
/// description. Interpreting it is the type mapper's job; this type never
/// inspects it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDescriptor {
    /// Column name as it appears in the source (e.g., "first_name").
    pub source_name: String,
    /// Database-native type tag (e.g., "integer", "varchar").
    pub native_type: String,
    /// Whether the source column admits NULL.
    pub nullable: bool,
}

impl ColumnDescriptor {
    /// Create a non-nullable column descriptor.
    pub fn new(source_name: impl Into<String>, native_type: impl Into<String>) -> Self {
        Self {
            source_name: source_name.into(),
            native_type: native_type.into(),
            nullable: false,
        }
    }

    /// Mark the column as nullable.
    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }
}

/// One typed record to declare: a namespace, a declaration name, and an
/// ordered list of columns.
///
/// Two shapes may share a namespace, but the (namespace, name) pair is
/// expected to be unique across a generation run; the emitter rejects
/// duplicates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowShape {
    /// Namespace the declaration is emitted under.
    pub namespace: NamespacePath,
    /// Declaration name (e.g., "Person1", "LoadAllPersons").
    pub name: String,
    /// Columns in source order. Order is semantically significant.
    pub columns: Vec<ColumnDescriptor>,
}

impl RowShape {
    /// Create a row shape with no columns.
    pub fn new(namespace: NamespacePath, name: impl Into<String>) -> Self {
        Self {
            namespace,
            name: name.into(),
            columns: Vec::new(),
        }
    }

    /// Append a column, preserving insertion order.
    pub fn column(mut self, column: ColumnDescriptor) -> Self {
        self.columns.push(column);
        self
    }

    /// Replace the column list wholesale.
    pub fn columns(mut self, columns: Vec<ColumnDescriptor>) -> Self {
        self.columns = columns;
        self
    }

    /// Returns true if the shape declares no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}
