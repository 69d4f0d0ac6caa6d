//! Manifest root and parsing for rowshape.toml files.

use std::{collections::HashMap, path::Path, str::FromStr};

use rowshape_ir::{GroupingPolicy, NullabilityPolicy, to_class_case, upper_first};
use serde::Deserialize;

use crate::{
    Error, Result,
    error::SourceContext,
    lower,
    source::{QueryFile, Table},
    validate::ParseContext,
};

/// Output file name used when `[generator] output` is not set.
pub const DEFAULT_OUTPUT: &str = "domain.d.ts";

/// Root manifest for rowshape.toml
#[derive(Debug, Clone, Deserialize)]
pub struct Manifest {
    /// Generator settings
    #[serde(default)]
    pub generator: GeneratorConfig,

    /// Introspected tables, in declaration order
    #[serde(default)]
    pub tables: Vec<Table>,

    /// Query files with named statements, in declaration order
    #[serde(default)]
    pub queries: Vec<QueryFile>,
}

/// The `[generator]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeneratorConfig {
    /// Root namespace as a dotted path (e.g., "com.example.app")
    pub package: Option<String>,

    /// Output file name, relative to the output directory
    pub output: Option<String>,

    /// How nullable columns render
    #[serde(default)]
    pub nullability: NullabilityPolicy,

    /// How declarations group into namespace blocks
    #[serde(default)]
    pub grouping: GroupingPolicy,
}

impl GeneratorConfig {
    /// Output file name, falling back to [`DEFAULT_OUTPUT`].
    pub fn output_or_default(&self) -> &str {
        self.output.as_deref().unwrap_or(DEFAULT_OUTPUT)
    }
}

impl Manifest {
    /// Returns true if the manifest defines no tables and no queries.
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty() && self.queries.is_empty()
    }

    /// Parse a rowshape.toml file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_manifest(&content, &path.display().to_string())
    }

    /// Parse a rowshape.toml from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_manifest(content, filename)
    }
}

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, "rowshape.toml")
    }
}

/// Parse a manifest from content with the given filename for error reporting.
pub fn parse_manifest(content: &str, filename: &str) -> Result<Manifest> {
    let source_ctx = SourceContext::new(content, filename);
    let manifest: Manifest = toml::from_str(content).map_err(|e| source_ctx.parse_error(e))?;
    validate_manifest(&manifest, content, filename)?;
    Ok(manifest)
}

/// Validate the manifest after parsing.
///
/// Beyond per-entry checks this rejects pairs of entries that would produce
/// the same declaration, so the failure points at the manifest line instead
/// of surfacing later from the emitter.
fn validate_manifest(manifest: &Manifest, src: &str, filename: &str) -> Result<()> {
    let ctx = ParseContext::new(src, filename);
    let package = manifest.generator.package.as_deref();

    if let Some(package) = package {
        for segment in package.split('.') {
            ctx.validate_segment(segment, segment, "package segment")?;
        }
    }

    if let Some(output) = manifest.generator.output.as_deref() {
        validate_output(&ctx, output)?;
    }

    // (namespace, declaration) -> first source name
    let mut declared: HashMap<(String, String), String> = HashMap::new();

    for table in &manifest.tables {
        table.validate(&ctx)?;

        let target = (
            lower::namespace_string(package, &[lower::table_segment(table)]),
            to_class_case(&table.name),
        );
        check_duplicate(&ctx, &mut declared, target, &table.name)?;
    }

    for query in &manifest.queries {
        query.validate(&ctx)?;

        let segments: Vec<String> = lower::query_segments(&query.file)
            .into_iter()
            .map(|(_, segment)| segment)
            .collect();

        for statement in &query.statements {
            // void statements produce no declaration
            if statement.columns.is_empty() {
                continue;
            }

            let target = (
                lower::namespace_string(package, &segments),
                upper_first(&statement.name),
            );
            check_duplicate(&ctx, &mut declared, target, &statement.name)?;
        }
    }

    Ok(())
}

fn check_duplicate(
    ctx: &ParseContext,
    declared: &mut HashMap<(String, String), String>,
    target: (String, String),
    source_name: &str,
) -> Result<()> {
    if let Some(first) = declared.get(&target) {
        return Err(ctx.validation_error(
            format!(
                "'{}' and '{}' both produce declaration '{}' in namespace '{}'",
                first, source_name, target.1, target.0
            ),
            source_name,
        ));
    }

    declared.insert(target, source_name.to_string());
    Ok(())
}

fn validate_output(ctx: &ParseContext, output: &str) -> Result<()> {
    if output.is_empty() {
        return Err(ctx
            .source_context()
            .validation_error("output file name cannot be empty"));
    }

    if output.starts_with('/') {
        return Err(ctx.validation_error("output file name must be a relative path", output));
    }

    if output
        .split('/')
        .any(|component| component.is_empty() || component == "..")
    {
        return Err(ctx.validation_error(
            format!("output file name '{output}' cannot contain empty or parent components"),
            output,
        ));
    }

    Ok(())
}
