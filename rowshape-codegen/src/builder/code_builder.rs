//! Code builder utility for generating properly indented code.

use super::{CodeFragment, Indent, Renderable};

/// Fluent API for building code with proper indentation.
///
/// Supports both consuming methods (returning `Self`) for chaining and
/// mutable methods (returning `&mut Self`) for fragment emission.
///
/// # Example
///
/// ```
/// use rowshape_codegen::builder::CodeBuilder;
///
/// let code = CodeBuilder::declarations()
///     .line("namespace a {")
///     .indent()
///     .line("export interface A {}")
///     .dedent()
///     .line("}")
///     .build();
///
/// assert_eq!(code, "namespace a {\n    export interface A {}\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    /// Create a new CodeBuilder with the specified indentation.
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// Create a new CodeBuilder with the 4-space indentation of declaration
    /// files.
    pub fn declarations() -> Self {
        Self::new(Indent::DECLARATIONS)
    }

    /// Add a line of code with current indentation (mutable).
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line (mutable).
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Increase indentation level (mutable).
    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level (mutable).
    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Emit a Renderable node (mutable).
    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply_fragment(fragment);
        }
        self
    }

    /// Apply a single code fragment.
    pub fn apply_fragment(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(s) => {
                self.push_line(&s);
            }
            CodeFragment::Blank => {
                self.push_blank();
            }
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.push_line(&header);
                self.push_indent();
                for f in body {
                    self.apply_fragment(f);
                }
                self.push_dedent();
                if let Some(c) = close {
                    self.push_line(&c);
                }
            }
            CodeFragment::Sequence(fragments) => {
                for f in fragments {
                    self.apply_fragment(f);
                }
            }
        }
    }

    /// Add a line of code with current indentation.
    pub fn line(mut self, s: &str) -> Self {
        self.push_line(s);
        self
    }

    /// Add a blank line (no indentation).
    pub fn blank(mut self) -> Self {
        self.push_blank();
        self
    }

    /// Increase indentation level.
    pub fn indent(mut self) -> Self {
        self.push_indent();
        self
    }

    /// Decrease indentation level.
    pub fn dedent(mut self) -> Self {
        self.push_dedent();
        self
    }

    /// Add a block with a closing line.
    ///
    /// # Example
    ///
    /// ```
    /// use rowshape_codegen::builder::CodeBuilder;
    ///
    /// let code = CodeBuilder::declarations()
    ///     .block_with_close("namespace a {", "}", |b: CodeBuilder| {
    ///         b.line("export interface A {}")
    ///     })
    ///     .build();
    /// ```
    pub fn block_with_close<F>(self, header: &str, close: &str, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        let builder = self.line(header).indent();
        f(builder).dedent().line(close)
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(self.indent.as_str());
        }
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::declarations()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_line() {
        let code = CodeBuilder::declarations().line("namespace a {").build();
        assert_eq!(code, "namespace a {\n");
    }

    #[test]
    fn test_indentation() {
        let code = CodeBuilder::declarations()
            .line("namespace a {")
            .indent()
            .line("export interface A {}")
            .dedent()
            .line("}")
            .build();

        assert_eq!(code, "namespace a {\n    export interface A {}\n}\n");
    }

    #[test]
    fn test_block_with_close() {
        let code = CodeBuilder::declarations()
            .block_with_close("namespace a {", "}", |b| b.line("export interface A {}"))
            .build();

        assert_eq!(code, "namespace a {\n    export interface A {}\n}\n");
    }

    #[test]
    fn test_blank_line() {
        let code = CodeBuilder::declarations()
            .line("}")
            .blank()
            .line("namespace b {")
            .build();

        assert_eq!(code, "}\n\nnamespace b {\n");
    }

    #[test]
    fn test_mutable_api() {
        let mut builder = CodeBuilder::declarations();
        builder
            .push_line("namespace a {")
            .push_indent()
            .push_line("export interface A {}")
            .push_dedent()
            .push_line("}");
        assert_eq!(
            builder.build(),
            "namespace a {\n    export interface A {}\n}\n"
        );
    }

    #[test]
    fn test_emit_with_fragments() {
        struct SimpleNode;
        impl Renderable for SimpleNode {
            fn to_fragments(&self) -> Vec<CodeFragment> {
                vec![
                    CodeFragment::line("first: string;"),
                    CodeFragment::line("second: number;"),
                ]
            }
        }

        let mut builder = CodeBuilder::declarations();
        builder.emit(&SimpleNode);
        assert_eq!(builder.build(), "first: string;\nsecond: number;\n");
    }

    #[test]
    fn test_emit_block_fragment() {
        struct BlockNode;
        impl Renderable for BlockNode {
            fn to_fragments(&self) -> Vec<CodeFragment> {
                vec![CodeFragment::Block {
                    header: "namespace a {".to_string(),
                    body: vec![CodeFragment::line("export interface A {}")],
                    close: Some("}".to_string()),
                }]
            }
        }

        let mut builder = CodeBuilder::declarations();
        builder.emit(&BlockNode);
        assert_eq!(
            builder.build(),
            "namespace a {\n    export interface A {}\n}\n"
        );
    }

    #[test]
    fn test_emit_nested_blocks() {
        struct NestedNode;
        impl Renderable for NestedNode {
            fn to_fragments(&self) -> Vec<CodeFragment> {
                vec![CodeFragment::block(
                    "namespace a {",
                    vec![CodeFragment::block(
                        "export interface A {",
                        vec![CodeFragment::line("id: number;")],
                        Some("}".to_string()),
                    )],
                    Some("}".to_string()),
                )]
            }
        }

        let mut builder = CodeBuilder::declarations();
        builder.emit(&NestedNode);
        assert_eq!(
            builder.build(),
            "namespace a {\n    export interface A {\n        id: number;\n    }\n}\n"
        );
    }

    #[test]
    fn test_emit_sequence_fragment() {
        struct SequenceNode;
        impl Renderable for SequenceNode {
            fn to_fragments(&self) -> Vec<CodeFragment> {
                vec![CodeFragment::sequence(vec![
                    CodeFragment::line("a: string;"),
                    CodeFragment::blank(),
                    CodeFragment::line("b: string;"),
                ])]
            }
        }

        let mut builder = CodeBuilder::declarations();
        builder.emit(&SequenceNode);
        assert_eq!(builder.build(), "a: string;\n\nb: string;\n");
    }
}
