//! Check command report data structures.

use std::path::PathBuf;

use rowshape_codegen::{Diagnostic, Severity};
use serde::Serialize;

use super::output::{Output, Report};

/// Report data from manifest validation.
#[derive(Debug, Serialize)]
pub struct CheckReport {
    /// Path to the config file.
    pub config_path: PathBuf,
    /// Every problem found, in source order.
    pub diagnostics: Vec<Diagnostic>,
    /// Number of declarations the manifest defines.
    pub declaration_count: usize,
}

impl CheckReport {
    /// Whether the check passed (no error diagnostics).
    pub fn is_valid(&self) -> bool {
        !self.diagnostics.iter().any(|d| d.severity.is_error())
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for diagnostic in &self.diagnostics {
            let line = match &diagnostic.location {
                Some(location) => format!(
                    "{}: {}\n  --> {}",
                    diagnostic.severity, diagnostic.message, location
                ),
                None => format!("{}: {}", diagnostic.severity, diagnostic.message),
            };

            match diagnostic.severity {
                Severity::Error | Severity::Warning => out.warning(&line),
                Severity::Info => out.preformatted(&line),
            }
        }

        if !self.diagnostics.is_empty() {
            out.newline();
        }

        if self.is_valid() {
            out.preformatted(&format!("✓ {} is valid", self.config_path.display()));
            out.preformatted(&format!(
                "  {} declaration{}",
                self.declaration_count,
                if self.declaration_count == 1 { "" } else { "s" }
            ));
        }
    }
}
