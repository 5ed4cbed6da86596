use crate::config::Config;
use crate::diagnostic::Diagnostic;
use crate::lints::at_import_partial_extension_blacklist::check_at_import;
use crate::options::Blacklist;
use crate::stylesheet::walk_at_rules;
use crate::utils::{compute_lints_location, find_new_lines};

use anyhow::{Context, Result};
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

/// Lints every file in the config, in parallel. IO failures are collected
/// per file so one unreadable file does not abort the run.
pub fn check(config: &Config) -> Vec<(PathBuf, Result<Vec<Diagnostic>>)> {
    config
        .paths
        .par_iter()
        .map(|file| (file.clone(), check_path(file, &config.blacklist)))
        .collect()
}

pub fn check_path(path: &PathBuf, blacklist: &Blacklist) -> Result<Vec<Diagnostic>> {
    let contents = fs::read_to_string(Path::new(path))
        .with_context(|| format!("Failed to read file: {}", path.display()))?;

    Ok(check_source(&contents, path, blacklist))
}

/// Lints a single stylesheet held in memory.
pub fn check_source(source: &str, path: &Path, blacklist: &Blacklist) -> Vec<Diagnostic> {
    let loc_new_lines = find_new_lines(source);

    let mut diagnostics: Vec<Diagnostic> = Vec::new();
    for at_rule in walk_at_rules(source, "import") {
        diagnostics.extend(check_at_import(&at_rule, blacklist));
    }

    let mut diagnostics = compute_lints_location(diagnostics, &loc_new_lines);
    for diagnostic in &mut diagnostics {
        diagnostic.filename = path.to_path_buf();
    }
    diagnostics
}
