//! Diagnostics for dry-run validation.
//!
//! A `check` run wants every problem at once, so the lint pass re-walks the
//! shapes collecting diagnostics instead of short-circuiting at the first
//! fatal error the way the emitter does.

use std::collections::{HashMap, HashSet};

use rowshape_ir::{EmitOptions, NamespacePath, NullabilityPolicy, RowShape, to_camel_case};
use serde::Serialize;

use crate::mapper::NativeFamily;

/// Severity level for a diagnostic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Severity {
    /// A problem that would abort a generation run.
    Error,
    /// A problem that doesn't abort generation but loses information.
    Warning,
    /// Informational message about the run.
    Info,
}

impl Severity {
    /// Returns true if this is an error severity.
    pub fn is_error(&self) -> bool {
        matches!(self, Severity::Error)
    }

    /// Returns true if this is a warning severity.
    pub fn is_warning(&self) -> bool {
        matches!(self, Severity::Warning)
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Info => write!(f, "info"),
        }
    }
}

/// A diagnostic message from a validation pass.
#[derive(Debug, Clone, Serialize)]
pub struct Diagnostic {
    /// The severity level of this diagnostic.
    pub severity: Severity,
    /// The pipeline phase that produced this diagnostic.
    pub phase: String,
    /// The diagnostic message.
    pub message: String,
    /// Optional location (e.g., "a.b.Person.first_name").
    pub location: Option<String>,
}

impl Diagnostic {
    /// Create a new error diagnostic.
    pub fn error(phase: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            phase: phase.into(),
            message: message.into(),
            location: None,
        }
    }

    /// Create a new warning diagnostic.
    pub fn warning(phase: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            phase: phase.into(),
            message: message.into(),
            location: None,
        }
    }

    /// Create a new info diagnostic.
    pub fn info(phase: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Info,
            phase: phase.into(),
            message: message.into(),
            location: None,
        }
    }

    /// Add a location to this diagnostic.
    pub fn at(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.severity, self.message)?;
        if let Some(loc) = &self.location {
            write!(f, " (at {})", loc)?;
        }
        Ok(())
    }
}

/// Check shapes for every problem a generation run would hit.
///
/// Collects duplicate declarations, unsupported native types, and field
/// name collisions as errors, plus a warning per nullable column whose
/// nullability the configured policy would drop from the output.
pub fn lint_shapes(shapes: &[RowShape], options: &EmitOptions) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    let mut seen: HashSet<(&NamespacePath, &str)> = HashSet::new();

    for shape in shapes {
        let location = format!("{}.{}", shape.namespace, shape.name);
        if !seen.insert((&shape.namespace, shape.name.as_str())) {
            diagnostics.push(
                Diagnostic::error(
                    "emit",
                    format!(
                        "duplicate declaration '{}' in namespace '{}'",
                        shape.name, shape.namespace
                    ),
                )
                .at(location.clone()),
            );
        }

        let mut fields: HashMap<String, &str> = HashMap::new();
        for column in &shape.columns {
            if NativeFamily::from_tag(&column.native_type).is_none() {
                diagnostics.push(
                    Diagnostic::error(
                        "map",
                        format!("unsupported native type '{}'", column.native_type),
                    )
                    .at(format!("{}.{}", location, column.source_name)),
                );
            }

            let field = to_camel_case(&column.source_name);
            if let Some(first) = fields.get(field.as_str()) {
                diagnostics.push(
                    Diagnostic::error(
                        "map",
                        format!(
                            "columns '{}' and '{}' both map to field '{}'",
                            first, column.source_name, field
                        ),
                    )
                    .at(location.clone()),
                );
            } else {
                fields.insert(field, column.source_name.as_str());
            }

            if column.nullable && options.nullability == NullabilityPolicy::Ignore {
                diagnostics.push(
                    Diagnostic::warning(
                        "emit",
                        format!(
                            "column '{}' is nullable but the nullability policy is '{}'",
                            column.source_name,
                            options.nullability.as_str()
                        ),
                    )
                    .at(format!("{}.{}", location, column.source_name)),
                );
            }
        }
    }

    diagnostics
}

#[cfg(test)]
mod tests {
    use rowshape_ir::ColumnDescriptor;

    use super::*;

    fn shape(namespace: &str, name: &str, columns: Vec<ColumnDescriptor>) -> RowShape {
        RowShape::new(NamespacePath::from_dotted(namespace).unwrap(), name).columns(columns)
    }

    #[test]
    fn test_clean_shapes_produce_no_diagnostics() {
        let shapes = [shape(
            "a.b",
            "Person",
            vec![
                ColumnDescriptor::new("id", "integer"),
                ColumnDescriptor::new("first_name", "text"),
            ],
        )];
        assert!(lint_shapes(&shapes, &EmitOptions::default()).is_empty());
    }

    #[test]
    fn test_unsupported_type_reported_with_location() {
        let shapes = [shape(
            "a",
            "Person",
            vec![ColumnDescriptor::new("shape", "geometry")],
        )];
        let diagnostics = lint_shapes(&shapes, &EmitOptions::default());
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].severity.is_error());
        assert_eq!(diagnostics[0].location.as_deref(), Some("a.Person.shape"));
    }

    #[test]
    fn test_collision_reported_once() {
        let shapes = [shape(
            "a",
            "Person",
            vec![
                ColumnDescriptor::new("a_field", "integer"),
                ColumnDescriptor::new("aField", "text"),
            ],
        )];
        let diagnostics = lint_shapes(&shapes, &EmitOptions::default());
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.contains("'a_field' and 'aField'"));
    }

    #[test]
    fn test_duplicate_declaration_reported() {
        let shapes = [shape("a", "Person", vec![]), shape("a", "Person", vec![])];
        let diagnostics = lint_shapes(&shapes, &EmitOptions::default());
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.contains("duplicate declaration"));
    }

    #[test]
    fn test_nullable_column_warns_under_ignore_policy() {
        let shapes = [shape(
            "a",
            "Person",
            vec![ColumnDescriptor::new("age", "integer").nullable()],
        )];
        let diagnostics = lint_shapes(&shapes, &EmitOptions::default());
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].severity.is_warning());
    }

    #[test]
    fn test_nullable_column_quiet_under_optional_policy() {
        let shapes = [shape(
            "a",
            "Person",
            vec![ColumnDescriptor::new("age", "integer").nullable()],
        )];
        let options = EmitOptions {
            nullability: NullabilityPolicy::Optional,
            ..Default::default()
        };
        assert!(lint_shapes(&shapes, &options).is_empty());
    }

    #[test]
    fn test_all_problems_collected_in_one_pass() {
        let shapes = [
            shape(
                "a",
                "Person",
                vec![
                    ColumnDescriptor::new("shape", "geometry"),
                    ColumnDescriptor::new("a_field", "integer"),
                    ColumnDescriptor::new("aField", "text"),
                ],
            ),
            shape("a", "Person", vec![]),
        ];
        let diagnostics = lint_shapes(&shapes, &EmitOptions::default());
        let errors = diagnostics.iter().filter(|d| d.severity.is_error()).count();
        assert_eq!(errors, 3);
    }

    #[test]
    fn test_diagnostic_display() {
        let diag = Diagnostic::warning("emit", "something looks off").at("a.Person");
        assert_eq!(diag.to_string(), "warning: something looks off (at a.Person)");
    }
}
