//! List command report data structures.

use indexmap::IndexMap;

use super::output::{Output, Report};

/// Declarations grouped by namespace, in manifest order.
#[derive(Debug)]
pub struct ListReport {
    /// Namespace -> declaration summaries.
    pub namespaces: IndexMap<String, Vec<String>>,
    /// Statements that produce no declaration, formatted "name (file)".
    pub skipped: Vec<String>,
}

impl Report for ListReport {
    fn render(&self, out: &mut dyn Output) {
        if self.namespaces.is_empty() {
            out.preformatted("No declarations defined");
        }

        for (namespace, declarations) in &self.namespaces {
            out.section(namespace);
            for declaration in declarations {
                out.list_item(declaration);
            }
        }

        if !self.skipped.is_empty() {
            out.newline();
            out.section("Skipped (no result columns)");
            for statement in &self.skipped {
                out.list_item(statement);
            }
        }
    }
}
