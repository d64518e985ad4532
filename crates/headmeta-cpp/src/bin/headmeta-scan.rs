//! Scan a directory of C++ headers and write the extracted metadata as JSON.
//!
//! Usage: headmeta-scan <input-dir> <namespace> <output.json>

use headmeta::{export, ScanConfig, Scanner};
use headmeta_cpp::CppFrontend;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

fn usage(program: &str) -> String {
    format!("Usage: {} <input-dir> <namespace> <output.json>", program)
}

fn run(input: &PathBuf, namespace: &str, output: &PathBuf) -> Result<(), String> {
    let frontend = CppFrontend::new().map_err(|e| e.to_string())?;
    let config = ScanConfig::new(namespace).with_parallel(true);
    let scanner = Scanner::new(frontend, config).map_err(|e| e.to_string())?;

    let report = scanner.scan_directory(input).map_err(|e| e.to_string())?;
    for (path, message) in &report.failures {
        warn!(file = %path.display(), error = %message, "File skipped");
    }

    export::write_json_file(&report.files, output).map_err(|e| e.to_string())?;
    info!(
        files = report.file_count(),
        failures = report.failure_count(),
        output = %output.display(),
        "Wrote metadata"
    );
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let mut args = std::env::args();
    let program = args.next().unwrap_or_else(|| "headmeta-scan".to_string());
    let (input, namespace, output) = match (args.next(), args.next(), args.next()) {
        (Some(input), Some(namespace), Some(output)) => {
            (PathBuf::from(input), namespace, PathBuf::from(output))
        }
        _ => {
            eprintln!("{}", usage(&program));
            return ExitCode::from(2);
        }
    };

    match run(&input, &namespace, &output) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            error!(error = %message, "Scan failed");
            ExitCode::FAILURE
        }
    }
}
