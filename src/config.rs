use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::options::{Blacklist, BlacklistOption};
use crate::output_format::OutputFormat;

/// Resolved configuration for one lint run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Paths to files to lint.
    pub paths: Vec<PathBuf>,
    /// Extensions that must not appear in imported partial names.
    pub blacklist: Blacklist,
    /// How diagnostics are printed.
    pub output_format: OutputFormat,
}

pub fn build_config(
    blacklist: &[String],
    paths: Vec<PathBuf>,
    output_format: OutputFormat,
) -> Result<Config> {
    let option = BlacklistOption::Many(blacklist.to_vec());
    let blacklist = Blacklist::parse(&option).context("Invalid --blacklist option")?;

    Ok(Config { paths, blacklist, output_format })
}
