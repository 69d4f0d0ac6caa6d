//! Declaration AST: target fields, interface declarations, and namespace
//! blocks.

use rowshape_ir::{NamespacePath, NullabilityPolicy};

use crate::builder::{CodeBuilder, CodeFragment, Renderable};
use crate::mapper::TsType;

/// A field of one declaration.
///
/// `optional` mirrors the source column's nullability verbatim; whether it
/// shows up in the rendered field is decided by the declaration's
/// nullability policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetField {
    pub name: String,
    pub ty: TsType,
    pub optional: bool,
}

impl TargetField {
    pub fn new(name: impl Into<String>, ty: TsType) -> Self {
        Self {
            name: name.into(),
            ty,
            optional: false,
        }
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }
}

/// One `export interface` declaration.
#[derive(Debug, Clone)]
pub struct Declaration {
    name: String,
    fields: Vec<TargetField>,
    nullability: NullabilityPolicy,
}

impl Declaration {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
            nullability: NullabilityPolicy::default(),
        }
    }

    /// The declaration name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Add a field.
    pub fn field(mut self, field: TargetField) -> Self {
        self.fields.push(field);
        self
    }

    /// Replace the field list wholesale.
    pub fn fields(mut self, fields: Vec<TargetField>) -> Self {
        self.fields = fields;
        self
    }

    /// Set how nullability renders.
    pub fn nullability(mut self, policy: NullabilityPolicy) -> Self {
        self.nullability = policy;
        self
    }

    /// Render the declaration to a CodeBuilder.
    pub fn render(&self, builder: CodeBuilder) -> CodeBuilder {
        if self.fields.is_empty() {
            builder.line(&format!("export interface {} {{}}", self.name))
        } else {
            let builder = builder
                .line(&format!("export interface {} {{", self.name))
                .indent();
            self.render_fields(builder).dedent().line("}")
        }
    }

    fn render_fields(&self, builder: CodeBuilder) -> CodeBuilder {
        self.fields
            .iter()
            .fold(builder, |b, field| b.line(&self.field_line(field)))
    }

    fn field_line(&self, field: &TargetField) -> String {
        let optional = if field.optional && self.nullability == NullabilityPolicy::Optional {
            "?"
        } else {
            ""
        };
        format!("{}{}: {};", field.name, optional, field.ty.as_str())
    }

    /// Build the declaration as a string.
    pub fn build(&self) -> String {
        self.render(CodeBuilder::declarations()).build()
    }

    fn fields_to_fragments(&self) -> Vec<CodeFragment> {
        self.fields
            .iter()
            .map(|field| CodeFragment::Line(self.field_line(field)))
            .collect()
    }
}

impl Renderable for Declaration {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        if self.fields.is_empty() {
            vec![CodeFragment::Line(format!(
                "export interface {} {{}}",
                self.name
            ))]
        } else {
            vec![CodeFragment::Block {
                header: format!("export interface {} {{", self.name),
                body: self.fields_to_fragments(),
                close: Some("}".to_string()),
            }]
        }
    }
}

/// A namespace wrapper holding one or more declarations.
#[derive(Debug, Clone)]
pub struct NamespaceBlock {
    namespace: NamespacePath,
    declarations: Vec<Declaration>,
}

impl NamespaceBlock {
    pub fn new(namespace: NamespacePath) -> Self {
        Self {
            namespace,
            declarations: Vec::new(),
        }
    }

    /// The namespace this block renders under.
    pub fn namespace(&self) -> &NamespacePath {
        &self.namespace
    }

    /// The declarations inside the block, in insertion order.
    pub fn declarations(&self) -> &[Declaration] {
        &self.declarations
    }

    /// Add a declaration.
    pub fn declaration(mut self, declaration: Declaration) -> Self {
        self.declarations.push(declaration);
        self
    }

    /// Append a declaration in place.
    pub fn push(&mut self, declaration: Declaration) {
        self.declarations.push(declaration);
    }

    /// Render the block to a CodeBuilder.
    pub fn render(&self, builder: CodeBuilder) -> CodeBuilder {
        builder.block_with_close(&format!("namespace {} {{", self.namespace), "}", |b| {
            let mut b = b;
            for (i, declaration) in self.declarations.iter().enumerate() {
                if i > 0 {
                    b = b.blank();
                }
                b = declaration.render(b);
            }
            b
        })
    }

    /// Build the block as a string.
    pub fn build(&self) -> String {
        self.render(CodeBuilder::declarations()).build()
    }
}

impl Renderable for NamespaceBlock {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut body = Vec::new();
        for (i, declaration) in self.declarations.iter().enumerate() {
            if i > 0 {
                body.push(CodeFragment::Blank);
            }
            body.push(CodeFragment::sequence(declaration.to_fragments()));
        }
        vec![CodeFragment::Block {
            header: format!("namespace {} {{", self.namespace),
            body,
            close: Some("}".to_string()),
        }]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(dotted: &str) -> NamespacePath {
        NamespacePath::from_dotted(dotted).unwrap()
    }

    #[test]
    fn test_empty_declaration() {
        let d = Declaration::new("Empty").build();
        assert_eq!(d, "export interface Empty {}\n");
    }

    #[test]
    fn test_declaration_with_fields() {
        let d = Declaration::new("Person")
            .field(TargetField::new("firstName", TsType::String))
            .field(TargetField::new("age", TsType::Number))
            .build();
        assert!(d.contains("export interface Person {"));
        assert!(d.contains("firstName: string;"));
        assert!(d.contains("age: number;"));
    }

    #[test]
    fn test_nullable_field_ignored_by_default() {
        let d = Declaration::new("Person")
            .field(TargetField::new("age", TsType::Number).optional())
            .build();
        assert!(d.contains("age: number;"));
        assert!(!d.contains('?'));
    }

    #[test]
    fn test_nullable_field_under_optional_policy() {
        let d = Declaration::new("Person")
            .field(TargetField::new("age", TsType::Number).optional())
            .field(TargetField::new("id", TsType::Number))
            .nullability(NullabilityPolicy::Optional)
            .build();
        assert!(d.contains("age?: number;"));
        assert!(d.contains("id: number;"));
    }

    #[test]
    fn test_namespace_block() {
        let block = NamespaceBlock::new(path("a.b")).declaration(
            Declaration::new("Person").field(TargetField::new("id", TsType::Number)),
        );
        assert_eq!(
            block.build(),
            "namespace a.b {\n    export interface Person {\n        id: number;\n    }\n}\n"
        );
    }

    #[test]
    fn test_namespace_block_separates_declarations_with_blank_line() {
        let block = NamespaceBlock::new(path("a"))
            .declaration(Declaration::new("First"))
            .declaration(Declaration::new("Second"));
        assert_eq!(
            block.build(),
            "namespace a {\n    export interface First {}\n\n    export interface Second {}\n}\n"
        );
    }

    #[test]
    fn test_fragments_agree_with_render() {
        let block = NamespaceBlock::new(path("a.b"))
            .declaration(
                Declaration::new("Person")
                    .field(TargetField::new("firstName", TsType::String))
                    .field(TargetField::new("age", TsType::Number).optional()),
            )
            .declaration(Declaration::new("Empty"));

        let mut builder = CodeBuilder::declarations();
        builder.emit(&block);
        assert_eq!(builder.build(), block.build());
    }
}
