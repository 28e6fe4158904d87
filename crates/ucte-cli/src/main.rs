//! UCTE file inspector binary.

mod report;

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use ucte_loader::{UcteConfig, UcteDocument};

use crate::report::Report;

/// Print the metadata and contents of UCTE-DEF grid files.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// UCTE files to inspect
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Treat a section without its end marker as an error.
    #[arg(long, env = "UCTE_STRICT")]
    strict: bool,

    /// Country code of the node block, instead of the one in the file name.
    #[arg(long, env = "UCTE_COUNTRY")]
    country: Option<String>,

    /// List node codes and element names.
    #[arg(long)]
    records: bool,

    /// Print one JSON document per file.
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn config(&self) -> UcteConfig {
        UcteConfig {
            require_end_marker: self.strict,
            country_code: self.country.clone(),
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    match execute(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::from(2)
        }
    }
}

fn execute(cli: &Cli) -> Result<()> {
    let config = cli.config();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for path in &cli.files {
        tracing::info!("Inspecting {}", path.display());
        let doc = UcteDocument::from_path_with_config(path, &config)
            .with_context(|| format!("failed to load {}", path.display()))?;
        let report = Report::new(&doc, cli.records);

        if cli.json {
            serde_json::to_writer_pretty(&mut out, &report)?;
            writeln!(out)?;
        } else {
            report.write_text(&mut out)?;
        }
    }

    out.flush()?;
    Ok(())
}
