//! Generate operation - declaration emission from a lowered manifest.

use std::collections::HashSet;
use std::path::Path;

use eyre::{Context, Result};
use rowshape_codegen::{DeclarationsFile, Emitter, lint_shapes};
use rowshape_manifest::Lowered;

use crate::reports::{GenerateReport, GenerationResult};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Directory the output file lands in.
    pub output_dir: &'a Path,
    /// Whether to preview without writing the file.
    pub dry_run: bool,
}

/// Execute the generate operation.
///
/// Emits every declaration and writes the output file unless this is a dry
/// run. Emission is all-or-nothing: any mapping failure aborts before the
/// file is touched.
pub fn generate(lowered: &Lowered, opts: GenerateOptions) -> Result<GenerateReport> {
    let emitter = Emitter::new(lowered.options);
    let content = emitter
        .emit(&lowered.shapes)
        .wrap_err("Failed to emit declarations")?;

    let warnings: Vec<String> = lint_shapes(&lowered.shapes, &lowered.options)
        .iter()
        .filter(|diagnostic| diagnostic.severity.is_warning())
        .map(|diagnostic| diagnostic.to_string())
        .collect();

    let namespaces: HashSet<String> = lowered
        .shapes
        .iter()
        .map(|shape| shape.namespace.to_string())
        .collect();

    let result = if opts.dry_run {
        GenerationResult::Preview {
            path: lowered.output.clone(),
            content,
        }
    } else {
        let file = DeclarationsFile::new(lowered.output.as_str(), content);
        let status = file
            .write(opts.output_dir)
            .wrap_err("Failed to write declaration file")?;

        GenerationResult::Written {
            path: file.path(opts.output_dir),
            status,
        }
    };

    Ok(GenerateReport {
        declaration_count: lowered.shapes.len(),
        namespace_count: namespaces.len(),
        warnings,
        skipped: skipped_lines(lowered),
        result,
    })
}

/// Format skipped statements as "name (file)" lines.
pub(crate) fn skipped_lines(lowered: &Lowered) -> Vec<String> {
    lowered
        .skipped
        .iter()
        .map(|statement| format!("{} ({})", statement.name, statement.file))
        .collect()
}
