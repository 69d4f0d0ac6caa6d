//! Validation context and utilities for manifest parsing.

use std::sync::Arc;

use miette::SourceSpan;

use crate::{Result, error::SourceContext};

/// Parsing and validation context that carries source information.
///
/// This struct encapsulates the source content, filename, and current path
/// through the manifest hierarchy, making it easier to pass validation
/// context through nested entries.
///
/// # Example
///
/// ```ignore
/// let ctx = ParseContext::new(src, "rowshape.toml");
/// ctx.validate_name("person1", "table")?;
///
/// // For nested validation
/// let nested = ctx.push("person1");
/// nested.validate_name("first_name", "column")?;
/// ```
#[derive(Debug, Clone)]
pub struct ParseContext<'a> {
    /// Source context for error reporting (shared across nested contexts)
    source: Arc<SourceContext>,
    /// Path segments for nested validation (e.g., ["tables", "person1"])
    path: Vec<&'a str>,
}

impl<'a> ParseContext<'a> {
    /// Create a new parse context with the given source and filename.
    pub fn new(src: &str, filename: &str) -> Self {
        Self {
            source: Arc::new(SourceContext::new(src, filename)),
            path: Vec::new(),
        }
    }

    /// Get the source content.
    pub fn src(&self) -> &str {
        self.source.src()
    }

    /// Get the filename.
    pub fn filename(&self) -> &str {
        self.source.filename()
    }

    /// Get the source context for error creation.
    pub fn source_context(&self) -> &SourceContext {
        &self.source
    }

    /// Push a path segment and return a new context.
    ///
    /// This is used when descending into nested entries like statements.
    pub fn push(&self, segment: &'a str) -> Self {
        let mut new_path = self.path.clone();
        new_path.push(segment);
        Self {
            source: Arc::clone(&self.source),
            path: new_path,
        }
    }

    /// Get the current path as a dot-separated string.
    pub fn path_string(&self) -> String {
        self.path.join(".")
    }

    /// Get a context description for error messages.
    ///
    /// For example: "column in 'person1'" or just "table" if no path.
    pub fn context_for(&self, kind: &str) -> String {
        if self.path.is_empty() {
            kind.to_string()
        } else {
            format!("{} in '{}'", kind, self.path_string())
        }
    }

    /// Find the span of a name in the source.
    pub fn find_span(&self, name: &str) -> Option<SourceSpan> {
        find_name_span(self.source.src(), name)
    }

    /// Create a validation error anchored at `anchor` when it can be located.
    pub fn validation_error(&self, message: impl Into<String>, anchor: &str) -> Box<crate::Error> {
        match self.find_span(anchor) {
            Some(span) => self.source.validation_error_at(message, span),
            None => self.source.validation_error(message),
        }
    }

    /// Validate that a name is a valid identifier.
    ///
    /// Used for table, schema, column, and statement names. These never land
    /// bare in namespace position, so reserved words are allowed here.
    pub fn validate_name(&self, name: &str, kind: &str) -> Result<()> {
        if let Some(reason) = validate_identifier(name) {
            return Err(self.source.invalid_identifier_error(
                name,
                self.context_for(kind),
                reason,
                self.find_span(name),
            ));
        }
        Ok(())
    }

    /// Validate a namespace segment.
    ///
    /// `spelled` is how the segment appears in the source; `segment` is the
    /// form that lands in the generated namespace (path components are
    /// lowercased before emission). Reserved words are rejected because they
    /// would make the generated namespace header uncompilable.
    pub fn validate_segment(&self, spelled: &str, segment: &str, kind: &str) -> Result<()> {
        if is_reserved_word(segment) {
            return Err(self.source.reserved_word_error(
                segment,
                self.context_for(kind),
                self.find_span(spelled),
            ));
        }

        if let Some(reason) = validate_identifier(spelled) {
            return Err(self.source.invalid_identifier_error(
                spelled,
                self.context_for(kind),
                reason,
                self.find_span(spelled),
            ));
        }

        Ok(())
    }
}

/// Words that can never be used as identifiers in TypeScript declaration
/// files. Declaration files are module code, so the strict-mode and
/// module-context reservations apply. Contextual keywords such as `string`,
/// `type`, or `namespace` stay legal as identifiers and are not listed.
/// Source: https://developer.mozilla.org/en-US/docs/Web/JavaScript/Reference/Lexical_grammar#reserved_words
pub(crate) const TS_RESERVED_WORDS: &[&str] = &[
    // Reserved words
    "break", "case", "catch", "class", "const", "continue", "debugger", "default", "delete", "do",
    "else", "enum", "export", "extends", "false", "finally", "for", "function", "if", "import",
    "in", "instanceof", "new", "null", "return", "super", "switch", "this", "throw", "true",
    "try", "typeof", "var", "void", "while", "with",
    // Reserved in strict mode
    "implements", "interface", "let", "package", "private", "protected", "public", "static",
    "yield",
    // Reserved in module code
    "await",
];

/// Check if a name is reserved in TypeScript declaration files
pub fn is_reserved_word(name: &str) -> bool {
    TS_RESERVED_WORDS.contains(&name)
}

/// Find the span of a name in the TOML source.
///
/// Manifest names appear as TOML values rather than keys, so the search
/// covers quoted values (`name = "person1"`), segments of a dotted package
/// value, and components of a slash-separated file value.
pub(crate) fn find_name_span(src: &str, name: &str) -> Option<SourceSpan> {
    // Pattern 1: the whole quoted value
    // e.g., name = "person1" or schema = 'PUBLIC'
    for quote in ['"', '\''] {
        let pattern = format!("= {quote}{name}{quote}");
        if let Some(pos) = src.find(&pattern) {
            return Some(SourceSpan::from((pos + 3, name.len())));
        }
    }

    // Pattern 2: a segment of a dotted value
    // e.g., "com" / "example" / "app" inside package = "com.example.app"
    let dotted_patterns = [
        format!("\"{name}."), // first segment
        format!(".{name}."),  // middle segment
        format!(".{name}\""), // last segment
    ];
    for pattern in &dotted_patterns {
        if let Some(pos) = src.find(pattern) {
            return Some(SourceSpan::from((pos + 1, name.len())));
        }
    }

    // Pattern 3: a component of a path value
    // e.g., "queries" / "Stmts1" inside file = "queries/Stmts1.sql"
    let path_patterns = [
        format!("\"{name}/"), // first component
        format!("/{name}/"),  // middle component
        format!("/{name}."),  // last component before an extension
        format!("/{name}\""), // last component without an extension
    ];
    for pattern in &path_patterns {
        if let Some(pos) = src.find(pattern) {
            return Some(SourceSpan::from((pos + 1, name.len())));
        }
    }

    // No fallback - better to have no span than point to a wrong location
    None
}

/// Validate that a name passes through the naming transforms and lands in
/// the generated TypeScript as a legal identifier.
/// Returns None if valid, Some(reason) if invalid.
pub(crate) fn validate_identifier(name: &str) -> Option<&'static str> {
    if name.is_empty() {
        return Some("name cannot be empty");
    }

    let mut chars = name.chars();

    // First character must be a letter or underscore
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        Some(_) => return Some("name must start with a letter or underscore"),
        None => return Some("name cannot be empty"),
    }

    // Remaining characters must be alphanumeric or underscore
    for c in chars {
        if !c.is_ascii_alphanumeric() && c != '_' {
            return Some("name must contain only letters, numbers, and underscores");
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_identifiers() {
        assert!(validate_identifier("person1").is_none());
        assert!(validate_identifier("first_name").is_none());
        assert!(validate_identifier("TABLE_A").is_none());
        assert!(validate_identifier("_private").is_none());
        assert!(validate_identifier("aField").is_none());
        assert!(validate_identifier("_").is_none());
    }

    #[test]
    fn test_invalid_start_character() {
        assert!(validate_identifier("1st_place").is_some());
        assert!(validate_identifier("-name").is_some());
        assert!(validate_identifier("9lives").is_some());
    }

    #[test]
    fn test_invalid_characters() {
        assert!(validate_identifier("first-name").is_some());
        assert!(validate_identifier("first name").is_some());
        assert!(validate_identifier("name!").is_some());
        assert!(validate_identifier("a.b").is_some());
    }

    #[test]
    fn test_empty_name() {
        assert!(validate_identifier("").is_some());
    }

    #[test]
    fn test_is_reserved_word() {
        assert!(is_reserved_word("if"));
        assert!(is_reserved_word("class"));
        assert!(is_reserved_word("enum"));
        assert!(is_reserved_word("let"));
        assert!(is_reserved_word("await"));
        assert!(!is_reserved_word("person"));
        assert!(!is_reserved_word("queries"));
    }

    #[test]
    fn test_contextual_keywords_are_not_reserved() {
        // These are legal identifiers in TypeScript, including in namespace
        // position, so the manifest must not reject them.
        assert!(!is_reserved_word("string"));
        assert!(!is_reserved_word("number"));
        assert!(!is_reserved_word("type"));
        assert!(!is_reserved_word("namespace"));
        assert!(!is_reserved_word("declare"));
        assert!(!is_reserved_word("any"));
    }

    #[test]
    fn test_find_name_span_quoted_value() {
        let src = "[[tables]]\nname = \"person1\"\nschema = \"PUBLIC\"";
        let span = find_name_span(src, "person1").unwrap();
        assert_eq!(span.offset(), 19);
        assert_eq!(span.len(), 7);

        let span = find_name_span(src, "PUBLIC").unwrap();
        assert_eq!(span.offset(), 38);
        assert_eq!(span.len(), 6);
    }

    #[test]
    fn test_find_name_span_package_segments() {
        let src = "package = \"com.example.app\"";
        assert_eq!(find_name_span(src, "com").unwrap().offset(), 11);
        assert_eq!(find_name_span(src, "example").unwrap().offset(), 15);
        assert_eq!(find_name_span(src, "app").unwrap().offset(), 23);
    }

    #[test]
    fn test_find_name_span_path_components() {
        let src = "file = \"queries/Stmts1.sql\"";
        assert_eq!(find_name_span(src, "queries").unwrap().offset(), 8);
        assert_eq!(find_name_span(src, "Stmts1").unwrap().offset(), 16);
    }

    #[test]
    fn test_find_name_span_missing() {
        let src = "name = \"person1\"";
        assert!(find_name_span(src, "absent").is_none());
    }

    // ========================================================================
    // ParseContext tests
    // ========================================================================

    #[test]
    fn test_parse_context_new() {
        let ctx = ParseContext::new("content", "rowshape.toml");
        assert_eq!(ctx.src(), "content");
        assert_eq!(ctx.filename(), "rowshape.toml");
        assert_eq!(ctx.path_string(), "");
    }

    #[test]
    fn test_parse_context_push() {
        let ctx = ParseContext::new("", "rowshape.toml");
        let nested = ctx.push("tables").push("person1");
        assert_eq!(nested.path_string(), "tables.person1");
    }

    #[test]
    fn test_parse_context_context_for() {
        let ctx = ParseContext::new("", "rowshape.toml");
        assert_eq!(ctx.context_for("table"), "table");

        let nested = ctx.push("person1");
        assert_eq!(nested.context_for("column"), "column in 'person1'");
    }

    #[test]
    fn test_validate_name_accepts_reserved_words() {
        // Column and table names may be reserved words; they render as
        // interface members or get transformed before emission.
        let ctx = ParseContext::new("", "rowshape.toml");
        assert!(ctx.validate_name("if", "column").is_ok());
        assert!(ctx.validate_name("class", "table").is_ok());
    }

    #[test]
    fn test_validate_name_invalid() {
        let ctx = ParseContext::new("", "rowshape.toml");
        let result = ctx.validate_name("123invalid", "column");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("invalid column"));
    }

    #[test]
    fn test_validate_segment_reserved() {
        let ctx = ParseContext::new("package = \"com.if.app\"", "rowshape.toml");
        let result = ctx.validate_segment("if", "if", "package segment");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("reserved"));
    }

    #[test]
    fn test_validate_segment_checks_lowered_form() {
        // "Class.sql" lowers to the reserved segment "class".
        let ctx = ParseContext::new("file = \"Class.sql\"", "rowshape.toml");
        let result = ctx.validate_segment("Class", "class", "query path component");
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_segment_valid() {
        let ctx = ParseContext::new("", "rowshape.toml");
        assert!(ctx.validate_segment("Stmts1", "stmts1", "query path component").is_ok());
        assert!(ctx.validate_segment("example", "example", "package segment").is_ok());
    }
}
