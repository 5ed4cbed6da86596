use scsslint::check::check;
use scsslint::config::build_config;
use scsslint::diagnostic::Diagnostic;
use scsslint::output_format::{ConciseEmitter, Emitter, JsonEmitter, OutputFormat};

use clap::Parser;
use std::process::ExitCode;
use std::time::Instant;
use walkdir::WalkDir;

/// Flags blacklisted extensions in `@import`-ed partial names
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Directory or file to lint
    #[arg(short, long, default_value = ".")]
    dir: String,

    /// Blacklisted extensions, as literals or /patterns/
    #[arg(short, long, value_delimiter = ',', required = true)]
    blacklist: Vec<String>,

    /// How diagnostics are printed
    #[arg(long, value_enum, default_value_t = OutputFormat::Concise)]
    output_format: OutputFormat,
}

fn main() -> ExitCode {
    let start = Instant::now();
    let args = Args::parse();

    let scss_files = WalkDir::new(&args.dir)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .filter(|e| {
            e.path().extension() == Some(std::ffi::OsStr::new("scss"))
                || e.path().extension() == Some(std::ffi::OsStr::new("sass"))
        })
        .map(|e| e.path().to_path_buf())
        .collect::<Vec<_>>();

    let config = match build_config(&args.blacklist, scss_files, args.output_format) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {err:#}");
            return ExitCode::from(2);
        }
    };

    let results = check(&config);

    let mut all_diagnostics: Vec<Diagnostic> = Vec::new();
    let mut errors: Vec<(String, anyhow::Error)> = Vec::new();
    for (path, result) in results {
        match result {
            Ok(diagnostics) => all_diagnostics.extend(diagnostics),
            Err(err) => errors.push((path.display().to_string(), err)),
        }
    }
    all_diagnostics.sort();
    let diagnostics: Vec<&Diagnostic> = all_diagnostics.iter().collect();

    let mut stdout = std::io::stdout().lock();
    let emitted = match config.output_format {
        OutputFormat::Concise => ConciseEmitter.emit(&mut stdout, &diagnostics, &errors),
        OutputFormat::Json => JsonEmitter.emit(&mut stdout, &diagnostics, &errors),
    };
    if let Err(err) = emitted {
        eprintln!("Error: {err:#}");
        return ExitCode::from(2);
    }

    if config.output_format == OutputFormat::Concise {
        let duration = start.elapsed();
        println!("Checked files in: {:?}", duration);
    }

    if !errors.is_empty() {
        ExitCode::from(2)
    } else if !diagnostics.is_empty() {
        ExitCode::from(1)
    } else {
        ExitCode::SUCCESS
    }
}
