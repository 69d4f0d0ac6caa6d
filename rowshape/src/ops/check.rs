//! Check operation - manifest validation without writing output.

use std::path::Path;

use rowshape_codegen::{Diagnostic, lint_shapes};
use rowshape_manifest::{Error, Manifest};

use crate::reports::CheckReport;

/// Execute the check operation.
///
/// Collects every problem the manifest has rather than stopping at the
/// first: parse and validation errors, the problems that would abort a
/// generation run, and the informational notes one would print.
pub fn check(config_path: &Path, manifest: Result<Manifest, Box<Error>>) -> CheckReport {
    let mut diagnostics = Vec::new();
    let mut declaration_count = 0;

    match manifest {
        Err(e) => diagnostics.push(Diagnostic::error("parse", error_chain(&e))),
        Ok(manifest) => match manifest.lower() {
            Err(e) => diagnostics.push(Diagnostic::error("lower", error_chain(&e))),
            Ok(lowered) => {
                declaration_count = lowered.shapes.len();

                if manifest.is_empty() {
                    diagnostics.push(Diagnostic::info(
                        "parse",
                        "manifest defines no tables or queries",
                    ));
                }

                diagnostics.extend(lint_shapes(&lowered.shapes, &lowered.options));

                for statement in &lowered.skipped {
                    diagnostics.push(
                        Diagnostic::info(
                            "lower",
                            format!(
                                "statement '{}' returns no rows and produces no declaration",
                                statement.name
                            ),
                        )
                        .at(statement.file.clone()),
                    );
                }
            }
        },
    }

    CheckReport {
        config_path: config_path.to_path_buf(),
        diagnostics,
        declaration_count,
    }
}

/// Flatten an error and its sources into one message.
fn error_chain(error: &Error) -> String {
    let mut message = error.to_string();
    let mut source = std::error::Error::source(error);
    while let Some(err) = source {
        message.push_str(": ");
        message.push_str(&err.to_string());
        source = err.source();
    }
    message
}
