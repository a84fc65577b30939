mod config;
mod telemetry;

use clap::Parser;
use config::{CliArgs, CliConfig, Kind};
use std::io::{BufWriter, Write};
use telemetry::init_telemetry;

fn main() -> anyhow::Result<()> {
    // Load from .env
    let _ = dotenvy::dotenv();
    let args = CliArgs::parse();
    let config = CliConfig::try_from(args)?;

    init_telemetry()?;
    tracing::debug!(?config, "generating identifiers");

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for _ in 0..config.count {
        let id = match config.kind {
            Kind::Cuid => cuid::try_cuid(),
            Kind::Slug => cuid::try_slug(),
        }
        .inspect_err(|err| tracing::error!(%err, "identifier generation failed"))?;
        writeln!(out, "{id}")?;
    }
    out.flush()?;
    Ok(())
}
