use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use rowshape_manifest::Manifest;

use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to the manifest file
    #[arg(short, long, default_value = "rowshape.toml")]
    pub config: PathBuf,

    /// Emit diagnostics as JSON on stdout
    #[arg(long)]
    pub json: bool,
}

impl CheckCommand {
    pub fn run(&self) -> Result<()> {
        let manifest = Manifest::from_file(&self.config);

        if self.json {
            let report = ops::check(&self.config, manifest);
            println!("{}", serde_json::to_string_pretty(&report)?);
            if !report.is_valid() {
                std::process::exit(1);
            }
            return Ok(());
        }

        // Manifest errors carry source spans, so let miette render them.
        let manifest = match manifest {
            Ok(manifest) => manifest,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        };

        let report = ops::check(&self.config, Ok(manifest));
        report.render(&mut TerminalOutput::new());

        if !report.is_valid() {
            std::process::exit(1);
        }
        Ok(())
    }
}
