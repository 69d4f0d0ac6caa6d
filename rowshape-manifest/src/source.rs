//! Table and query entries of a rowshape.toml manifest.

use std::collections::HashSet;

use serde::Deserialize;

use crate::{Result, validate::ParseContext};

/// An introspected table whose row shape becomes one declaration.
#[derive(Debug, Clone, Deserialize)]
pub struct Table {
    /// Table name as spelled in the database (e.g., "person1" or "TABLE_A")
    pub name: String,

    /// Schema the table lives in. Lowercased and prefixed with `schema_`
    /// to form the namespace segment.
    #[serde(default = "default_schema")]
    pub schema: String,

    /// Result columns in declaration order
    #[serde(default)]
    pub columns: Vec<Column>,
}

pub(crate) fn default_schema() -> String {
    "public".to_string()
}

impl Table {
    /// Validate the table entry using the given parse context.
    pub fn validate(&self, ctx: &ParseContext) -> Result<()> {
        ctx.validate_name(&self.name, "table")?;
        ctx.validate_name(&self.schema, "schema")?;

        if self.columns.is_empty() {
            return Err(ctx.validation_error(
                format!("table '{}' has no columns", self.name),
                &self.name,
            ));
        }

        let table_ctx = ctx.push(&self.name);
        validate_columns(&table_ctx, &self.columns)
    }
}

/// A SQL file with named statements. Each statement that returns rows
/// becomes one declaration; the file path becomes the namespace.
#[derive(Debug, Clone, Deserialize)]
pub struct QueryFile {
    /// Path to the SQL file, with `/` separators (e.g., "queries/Stmts1.sql").
    /// Components are lowercased and the `.sql` suffix is stripped to form
    /// the namespace segments.
    pub file: String,

    /// Named statements defined in the file
    #[serde(default)]
    pub statements: Vec<Statement>,
}

impl QueryFile {
    /// Validate the query file entry using the given parse context.
    pub fn validate(&self, ctx: &ParseContext) -> Result<()> {
        if self.file.is_empty() {
            return Err(ctx
                .source_context()
                .validation_error("query file path cannot be empty"));
        }

        for (spelled, segment) in crate::lower::query_segments(&self.file) {
            if spelled.is_empty() {
                return Err(ctx.validation_error(
                    format!("query file path '{}' has an empty component", self.file),
                    &self.file,
                ));
            }
            ctx.validate_segment(&spelled, &segment, "query path component")?;
        }

        let file_ctx = ctx.push(&self.file);
        for statement in &self.statements {
            statement.validate(&file_ctx)?;
        }

        Ok(())
    }
}

/// A named statement inside a query file.
///
/// A statement with no columns returns no rows (insert, update, delete) and
/// produces no declaration.
#[derive(Debug, Clone, Deserialize)]
pub struct Statement {
    /// Statement name as written in the SQL file (e.g., "loadAllPersons").
    /// The first character is uppercased to form the declaration name.
    pub name: String,

    /// Result columns in declaration order; empty for void statements
    #[serde(default)]
    pub columns: Vec<Column>,
}

impl Statement {
    /// Validate the statement entry using the given parse context.
    pub fn validate(&self, ctx: &ParseContext) -> Result<()> {
        ctx.validate_name(&self.name, "statement")?;

        let statement_ctx = ctx.push(&self.name);
        validate_columns(&statement_ctx, &self.columns)
    }
}

/// A result column.
#[derive(Debug, Clone, Deserialize)]
pub struct Column {
    /// Column name as reported by the source (e.g., "first_name")
    pub name: String,

    /// Native type tag (e.g., "varchar", "int4", "timestamptz")
    #[serde(rename = "type")]
    pub column_type: String,

    /// Whether the source reports the column as nullable
    #[serde(default)]
    pub nullable: bool,
}

/// Validate column names and reject repeated source names.
///
/// Distinct source names that map to the same field name (e.g., "a_field"
/// and "aField") are left for the mapper, which reports them with both
/// originals named.
fn validate_columns(ctx: &ParseContext, columns: &[Column]) -> Result<()> {
    let mut seen = HashSet::new();

    for column in columns {
        ctx.validate_name(&column.name, "column")?;

        if !seen.insert(column.name.as_str()) {
            return Err(ctx.validation_error(
                format!(
                    "column '{}' is listed more than once in '{}'",
                    column.name,
                    ctx.path_string()
                ),
                &column.name,
            ));
        }
    }

    Ok(())
}
