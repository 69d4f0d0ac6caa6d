//! Lowering a validated manifest into emission inputs.

use rowshape_ir::{
    ColumnDescriptor, EmitOptions, NamespacePath, RowShape, to_class_case, upper_first,
};

use crate::{
    Error, Result,
    manifest::Manifest,
    source::{Column, Statement, Table},
};

/// Emission inputs produced from a manifest.
#[derive(Debug, Clone)]
pub struct Lowered {
    /// Row shapes in declaration order: tables first, then query statements
    pub shapes: Vec<RowShape>,

    /// Emission policies from the `[generator]` section
    pub options: EmitOptions,

    /// Output file name, relative to the output directory
    pub output: String,

    /// Statements that produced no declaration because they return no rows
    pub skipped: Vec<SkippedStatement>,
}

/// A statement that was dropped during lowering.
#[derive(Debug, Clone)]
pub struct SkippedStatement {
    /// Query file the statement came from
    pub file: String,

    /// Statement name as written in the manifest
    pub name: String,
}

impl Manifest {
    /// Lower the manifest into emission inputs.
    ///
    /// Tables come first, then query statements, both in manifest order.
    /// Statements without columns return no rows and are skipped.
    pub fn lower(&self) -> Result<Lowered> {
        let package = self
            .generator
            .package
            .as_deref()
            .map(NamespacePath::from_dotted)
            .transpose()
            .map_err(Error::namespace)?;

        let mut shapes = Vec::new();
        let mut skipped = Vec::new();

        for table in &self.tables {
            let namespace = namespace_path(package.as_ref(), vec![table_segment(table)])?;
            shapes.push(table_shape(namespace, table));
        }

        for query in &self.queries {
            let segments: Vec<String> = query_segments(&query.file)
                .into_iter()
                .map(|(_, segment)| segment)
                .collect();

            for statement in &query.statements {
                if statement.columns.is_empty() {
                    skipped.push(SkippedStatement {
                        file: query.file.clone(),
                        name: statement.name.clone(),
                    });
                    continue;
                }

                let namespace = namespace_path(package.as_ref(), segments.clone())?;
                shapes.push(statement_shape(namespace, statement));
            }
        }

        Ok(Lowered {
            shapes,
            options: EmitOptions {
                nullability: self.generator.nullability,
                grouping: self.generator.grouping,
            },
            output: self.generator.output_or_default().to_string(),
            skipped,
        })
    }
}

fn table_shape(namespace: NamespacePath, table: &Table) -> RowShape {
    let columns: Vec<ColumnDescriptor> = table.columns.iter().map(lower_column).collect();
    RowShape::new(namespace, to_class_case(&table.name)).columns(columns)
}

fn statement_shape(namespace: NamespacePath, statement: &Statement) -> RowShape {
    let columns: Vec<ColumnDescriptor> = statement.columns.iter().map(lower_column).collect();
    RowShape::new(namespace, upper_first(&statement.name)).columns(columns)
}

fn lower_column(column: &Column) -> ColumnDescriptor {
    let descriptor = ColumnDescriptor::new(column.name.as_str(), column.column_type.as_str());
    if column.nullable {
        descriptor.nullable()
    } else {
        descriptor
    }
}

fn namespace_path(
    package: Option<&NamespacePath>,
    segments: Vec<String>,
) -> Result<NamespacePath> {
    match package {
        Some(root) => {
            let mut path = root.clone();
            for segment in segments {
                path = path.child(segment).map_err(Error::namespace)?;
            }
            Ok(path)
        }
        None => NamespacePath::new(segments).map_err(Error::namespace),
    }
}

/// Namespace segment for a table: the lowercased schema with a `schema_`
/// prefix, so schema names can never collide with package segments.
pub(crate) fn table_segment(table: &Table) -> String {
    format!("schema_{}", table.schema.to_lowercase())
}

/// Split a query file path into (spelled, lowered) namespace segments.
///
/// The `.sql` suffix is stripped from the last component before lowering,
/// so "queries/Stmts1.sql" yields the segments `queries` and `stmts1`.
pub(crate) fn query_segments(file: &str) -> Vec<(String, String)> {
    let components: Vec<&str> = file.split('/').collect();
    let last = components.len().saturating_sub(1);

    components
        .into_iter()
        .enumerate()
        .map(|(i, component)| {
            let spelled = if i == last {
                strip_sql_suffix(component)
            } else {
                component
            };
            (spelled.to_string(), spelled.to_lowercase())
        })
        .collect()
}

/// Join a package and lowered segments into the namespace header text.
pub(crate) fn namespace_string(package: Option<&str>, segments: &[String]) -> String {
    match package {
        Some(package) => format!("{}.{}", package, segments.join(".")),
        None => segments.join("."),
    }
}

/// Strip a trailing `.sql` (any case) from a file name.
fn strip_sql_suffix(name: &str) -> &str {
    let len = name.len();
    if len > 4 {
        if let Some(stem) = name.get(..len - 4) {
            if name[len - 4..].eq_ignore_ascii_case(".sql") {
                return stem;
            }
        }
    }
    name
}
