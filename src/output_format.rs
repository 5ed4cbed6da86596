use clap::ValueEnum;
use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::diagnostic::Diagnostic;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Print diagnostics in a concise format, one per line
    #[default]
    Concise,
    /// Print diagnostics as JSON
    Json,
}

/// Takes the diagnostics and per-file errors and displays them in
/// different ways depending on the `--output-format` provided by the user.
pub trait Emitter {
    fn emit<W: Write>(
        &self,
        writer: &mut W,
        diagnostics: &[&Diagnostic],
        errors: &[(String, anyhow::Error)],
    ) -> anyhow::Result<()>;
}

pub struct ConciseEmitter;

impl Emitter for ConciseEmitter {
    fn emit<W: Write>(
        &self,
        writer: &mut W,
        diagnostics: &[&Diagnostic],
        errors: &[(String, anyhow::Error)],
    ) -> anyhow::Result<()> {
        // First, print all the per-file errors.
        for (_path, err) in errors {
            eprintln!("{}: {}", "Error".red().bold(), err);
        }

        // Then, print the diagnostics.
        for diagnostic in diagnostics {
            writeln!(writer, "{diagnostic}")?;
        }

        // Finally, print the info about the number of violations found.
        let total_diagnostics = diagnostics.len();
        if total_diagnostics > 1 {
            writeln!(writer, "\nFound {} errors.", total_diagnostics)?;
        } else if total_diagnostics == 1 {
            writeln!(writer, "\nFound 1 error.")?;
        } else if errors.is_empty() {
            writeln!(writer, "All checks passed!")?;
        }

        Ok(())
    }
}

pub struct JsonEmitter;

impl Emitter for JsonEmitter {
    fn emit<W: Write>(
        &self,
        writer: &mut W,
        diagnostics: &[&Diagnostic],
        _errors: &[(String, anyhow::Error)],
    ) -> anyhow::Result<()> {
        serde_json::to_writer_pretty(writer, diagnostics)?;
        Ok(())
    }
}
