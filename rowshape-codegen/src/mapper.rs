//! Native type interpretation and field derivation.
//!
//! The mapping from native tags to TypeScript tokens goes through a closed
//! family enum: tags are recognized into a [`NativeFamily`], and each family
//! lands on exactly one [`TsType`]. The table is a process-wide constant; an
//! unrecognized tag is a fatal [`Error::UnsupportedType`], never a fallback.

use std::collections::HashMap;

use rowshape_ir::{ColumnDescriptor, RowShape, to_camel_case};

use crate::declaration::TargetField;
use crate::error::{Error, Result};

/// TypeScript type token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TsType {
    Number,
    String,
    Boolean,
}

impl TsType {
    /// Get the token as it appears in emitted declarations.
    pub fn as_str(&self) -> &'static str {
        match self {
            TsType::Number => "number",
            TsType::String => "string",
            TsType::Boolean => "boolean",
        }
    }
}

/// Family of database-native types that share one target token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NativeFamily {
    Integer,
    Float,
    Text,
    Boolean,
    Temporal,
    Uuid,
}

impl NativeFamily {
    /// Recognize a native type tag.
    ///
    /// Tags are compared after trimming and ASCII-lowercasing, so "VARCHAR"
    /// and " varchar " both land on [`NativeFamily::Text`]. Unknown tags
    /// return `None`.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let normalized = tag.trim().to_ascii_lowercase();
        let family = match normalized.as_str() {
            "int" | "integer" | "int2" | "int4" | "int8" | "smallint" | "bigint" | "serial"
            | "bigserial" => Self::Integer,
            "real" | "float" | "float4" | "float8" | "double" | "double precision" | "numeric"
            | "decimal" => Self::Float,
            "text" | "varchar" | "character varying" | "char" | "character" | "clob"
            | "string" => Self::Text,
            "bool" | "boolean" => Self::Boolean,
            "date" | "time" | "timetz" | "timestamp" | "timestamptz" | "datetime" => {
                Self::Temporal
            }
            "uuid" => Self::Uuid,
            _ => return None,
        };
        Some(family)
    }

    /// The TypeScript token this family maps to.
    pub fn ts_type(&self) -> TsType {
        match self {
            NativeFamily::Integer | NativeFamily::Float => TsType::Number,
            NativeFamily::Text | NativeFamily::Temporal | NativeFamily::Uuid => TsType::String,
            NativeFamily::Boolean => TsType::Boolean,
        }
    }
}

/// Maps columns of a row shape to target fields.
pub struct TypeMapper;

impl TypeMapper {
    /// Map one column to a target field.
    ///
    /// The declaration name is only used to label errors.
    pub fn map_field(&self, declaration: &str, column: &ColumnDescriptor) -> Result<TargetField> {
        let family =
            NativeFamily::from_tag(&column.native_type).ok_or_else(|| Error::UnsupportedType {
                declaration: declaration.to_string(),
                column: column.source_name.clone(),
                tag: column.native_type.clone(),
            })?;
        let field = TargetField::new(to_camel_case(&column.source_name), family.ts_type());
        Ok(if column.nullable {
            field.optional()
        } else {
            field
        })
    }

    /// Map every column of a shape, in order, rejecting field collisions.
    ///
    /// Two columns whose derived names agree are an error naming both source
    /// columns; nothing is renamed or dropped.
    pub fn map_shape(&self, shape: &RowShape) -> Result<Vec<TargetField>> {
        let mut seen: HashMap<String, &str> = HashMap::new();
        let mut fields = Vec::with_capacity(shape.columns.len());
        for column in &shape.columns {
            let field = self.map_field(&shape.name, column)?;
            if let Some(first) = seen.get(field.name.as_str()) {
                return Err(Error::FieldNameCollision {
                    declaration: shape.name.clone(),
                    field: field.name.clone(),
                    first: (*first).to_string(),
                    second: column.source_name.clone(),
                });
            }
            seen.insert(field.name.clone(), column.source_name.as_str());
            fields.push(field);
        }
        Ok(fields)
    }
}

#[cfg(test)]
mod tests {
    use rowshape_ir::NamespacePath;

    use super::*;

    fn shape(columns: Vec<ColumnDescriptor>) -> RowShape {
        RowShape::new(NamespacePath::from_dotted("a.b").unwrap(), "Person").columns(columns)
    }

    #[test]
    fn test_family_recognition() {
        assert_eq!(NativeFamily::from_tag("integer"), Some(NativeFamily::Integer));
        assert_eq!(NativeFamily::from_tag("bigserial"), Some(NativeFamily::Integer));
        assert_eq!(NativeFamily::from_tag("double precision"), Some(NativeFamily::Float));
        assert_eq!(NativeFamily::from_tag("varchar"), Some(NativeFamily::Text));
        assert_eq!(NativeFamily::from_tag("bool"), Some(NativeFamily::Boolean));
        assert_eq!(NativeFamily::from_tag("timestamptz"), Some(NativeFamily::Temporal));
        assert_eq!(NativeFamily::from_tag("uuid"), Some(NativeFamily::Uuid));
        assert_eq!(NativeFamily::from_tag("geometry"), None);
    }

    #[test]
    fn test_tags_normalized_before_lookup() {
        assert_eq!(NativeFamily::from_tag("VARCHAR"), Some(NativeFamily::Text));
        assert_eq!(NativeFamily::from_tag("  Integer "), Some(NativeFamily::Integer));
    }

    #[test]
    fn test_family_tokens() {
        assert_eq!(NativeFamily::Integer.ts_type().as_str(), "number");
        assert_eq!(NativeFamily::Float.ts_type().as_str(), "number");
        assert_eq!(NativeFamily::Text.ts_type().as_str(), "string");
        assert_eq!(NativeFamily::Boolean.ts_type().as_str(), "boolean");
        assert_eq!(NativeFamily::Temporal.ts_type().as_str(), "string");
        assert_eq!(NativeFamily::Uuid.ts_type().as_str(), "string");
    }

    #[test]
    fn test_map_field_derives_camel_case_name() {
        let field = TypeMapper
            .map_field("Person", &ColumnDescriptor::new("first_name", "text"))
            .unwrap();
        assert_eq!(field.name, "firstName");
        assert_eq!(field.ty, TsType::String);
        assert!(!field.optional);
    }

    #[test]
    fn test_map_field_mirrors_nullability() {
        let field = TypeMapper
            .map_field("Person", &ColumnDescriptor::new("age", "integer").nullable())
            .unwrap();
        assert!(field.optional);
    }

    #[test]
    fn test_map_field_rejects_unknown_tag() {
        let err = TypeMapper
            .map_field("Person", &ColumnDescriptor::new("shape", "geometry"))
            .unwrap_err();
        match err {
            Error::UnsupportedType {
                declaration,
                column,
                tag,
            } => {
                assert_eq!(declaration, "Person");
                assert_eq!(column, "shape");
                assert_eq!(tag, "geometry");
            }
            other => panic!("expected UnsupportedType, got {other:?}"),
        }
    }

    #[test]
    fn test_map_shape_preserves_order() {
        let fields = TypeMapper
            .map_shape(&shape(vec![
                ColumnDescriptor::new("first_name", "text"),
                ColumnDescriptor::new("id", "integer"),
                ColumnDescriptor::new("age", "integer"),
            ]))
            .unwrap();
        let names: Vec<&str> = fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["firstName", "id", "age"]);
    }

    #[test]
    fn test_map_shape_keeps_interior_case_distinct() {
        let fields = TypeMapper
            .map_shape(&shape(vec![
                ColumnDescriptor::new("a_field", "integer"),
                ColumnDescriptor::new("afield", "text"),
            ]))
            .unwrap();
        assert_eq!(fields[0].name, "aField");
        assert_eq!(fields[1].name, "afield");
    }

    #[test]
    fn test_map_shape_rejects_collision() {
        let err = TypeMapper
            .map_shape(&shape(vec![
                ColumnDescriptor::new("a_field", "integer"),
                ColumnDescriptor::new("aField", "text"),
            ]))
            .unwrap_err();
        match err {
            Error::FieldNameCollision {
                declaration,
                field,
                first,
                second,
            } => {
                assert_eq!(declaration, "Person");
                assert_eq!(field, "aField");
                assert_eq!(first, "a_field");
                assert_eq!(second, "aField");
            }
            other => panic!("expected FieldNameCollision, got {other:?}"),
        }
    }
}
