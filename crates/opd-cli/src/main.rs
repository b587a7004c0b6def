use anyhow::{Context, Result};
use opd_cli::{build_registry, command, execute};
use opd_registry::{install, AdapterConfig};
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<ExitCode> {
    let matches = command().get_matches();

    let config = match matches.get_one::<PathBuf>("config") {
        Some(path) => AdapterConfig::from_toml_file(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => AdapterConfig::default(),
    };
    tracing::debug!(?config, "adapter configuration loaded");
    let registry = install(build_registry(config)?)?;

    let report = execute(&matches, registry).context("rendering output")?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(report.stdout.as_bytes())?;
    stdout.flush()?;

    for failure in &report.failures {
        eprintln!("error: {failure}");
    }

    Ok(if report.success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
