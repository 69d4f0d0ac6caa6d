use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use rowshape_manifest::Manifest;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct ListCommand {
    /// Path to the manifest file
    #[arg(short, long, default_value = "rowshape.toml")]
    pub config: PathBuf,
}

impl ListCommand {
    pub fn run(&self) -> Result<()> {
        let manifest = Manifest::from_file(&self.config).unwrap_or_exit();
        let lowered = manifest.lower().unwrap_or_exit();

        let report = ops::list(&lowered);
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
