use std::path::{Path, PathBuf};

use clap::Args;
use eyre::{Context, Result, bail, eyre};
use rowshape_manifest::is_reserved_word;

#[derive(Args)]
pub struct InitCommand {
    /// Package prefix for generated namespaces (defaults to the directory name)
    pub name: Option<String>,

    /// Directory to create the manifest in
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,
}

impl InitCommand {
    pub fn run(&self) -> Result<()> {
        let raw = match &self.name {
            Some(name) => name.clone(),
            None => {
                let cwd = std::env::current_dir().wrap_err("Failed to get current directory")?;
                cwd.file_name()
                    .and_then(|n| n.to_str())
                    .ok_or_else(|| eyre!("Current directory has no usable name"))?
                    .to_string()
            }
        };
        let package = package_name(&raw);

        let path = self.output.join("rowshape.toml");
        if path.exists() {
            bail!("{} already exists", path.display());
        }

        std::fs::create_dir_all(&self.output)
            .wrap_err_with(|| format!("Failed to create {}", self.output.display()))?;
        std::fs::write(&path, starter_manifest(&package))
            .wrap_err_with(|| format!("Failed to write {}", path.display()))?;

        println!("Created {}", path.display());
        println!();
        println!("Next steps:");
        if self.output != Path::new(".") {
            println!("  cd {}", self.output.display());
        }
        println!("  rowshape check");
        println!("  rowshape generate");

        Ok(())
    }
}

/// Turns a raw name into a single valid namespace segment.
fn package_name(raw: &str) -> String {
    let mut name = String::with_capacity(raw.len());
    for c in raw.chars() {
        if c.is_ascii_alphanumeric() {
            name.push(c.to_ascii_lowercase());
        } else if matches!(c, '-' | '_' | ' ' | '.') {
            name.push('_');
        }
    }

    let starts_ok = name
        .chars()
        .next()
        .map(|c| c.is_ascii_alphabetic() || c == '_')
        .unwrap_or(false);

    if !starts_ok || is_reserved_word(&name) {
        return "app".to_string();
    }
    name
}

fn starter_manifest(package: &str) -> String {
    format!(
        r#"[generator]
package = "{package}"
output = "domain.d.ts"

# Tables whose rows become interfaces, one namespace per schema.
[[tables]]
name = "person1"
schema = "public"
columns = [
    {{ name = "id", type = "int4" }},
    {{ name = "first_name", type = "varchar" }},
    {{ name = "age", type = "int4", nullable = true }},
]

# Named statements from SQL files, one namespace per file.
# [[queries]]
# file = "Stmts1.sql"
#
# [[queries.statements]]
# name = "loadAllPersons"
# columns = [{{ name = "full_name", type = "text" }}]
"#
    )
}
