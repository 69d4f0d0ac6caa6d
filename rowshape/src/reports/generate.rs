//! Generate command report data structures.

use std::path::PathBuf;

use rowshape_codegen::WriteStatus;

use super::output::{Output, Report};

/// Report data from a generation run.
#[derive(Debug)]
pub struct GenerateReport {
    /// Number of declarations emitted.
    pub declaration_count: usize,
    /// Number of distinct namespaces.
    pub namespace_count: usize,
    /// Lint warnings the run surfaced.
    pub warnings: Vec<String>,
    /// Statements that produced no declaration, formatted "name (file)".
    pub skipped: Vec<String>,
    /// What happened to the output.
    pub result: GenerationResult,
}

/// Outcome of a generation run.
#[derive(Debug)]
pub enum GenerationResult {
    /// Dry run: the file content, not written anywhere.
    Preview { path: String, content: String },
    /// The output file path and whether it changed.
    Written { path: PathBuf, status: WriteStatus },
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }

        match &self.result {
            GenerationResult::Preview { path, content } => {
                out.divider(path);
                out.preformatted(content);
                out.divider("Summary");
                out.preformatted(&format!(
                    "{} would be declared",
                    count(self.declaration_count, "interface")
                ));
            }
            GenerationResult::Written { path, status } => {
                match status {
                    WriteStatus::Written => out.key_value("Generated", &path.display().to_string()),
                    WriteStatus::Unchanged => {
                        out.key_value("Up to date", &path.display().to_string())
                    }
                }
                out.preformatted(&format!(
                    "{} in {}",
                    count(self.declaration_count, "interface"),
                    count(self.namespace_count, "namespace")
                ));
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

fn count(n: usize, noun: &str) -> String {
    if n == 1 {
        format!("1 {}", noun)
    } else {
        format!("{} {}s", n, noun)
    }
}
