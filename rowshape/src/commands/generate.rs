use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use rowshape_manifest::Manifest;

use super::UnwrapOrExit;
use crate::{
    ops::{self, GenerateOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to the manifest file
    #[arg(short, long, default_value = "rowshape.toml")]
    pub config: PathBuf,

    /// Directory the declaration file is written into
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Print the declaration file instead of writing it
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    pub fn run(&self) -> Result<()> {
        let manifest = Manifest::from_file(&self.config).unwrap_or_exit();
        let lowered = manifest.lower().unwrap_or_exit();

        let report = ops::generate(
            &lowered,
            GenerateOptions {
                output_dir: &self.output,
                dry_run: self.dry_run,
            },
        )?;

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
