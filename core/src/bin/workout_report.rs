use anyhow::{bail, Context};
use log::info;
use tracing_subscriber::EnvFilter;

use workout_core::{default_packages, process_packages, Cfg, Metrics};

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cfg = Cfg::default();
    let metrics = Metrics::new().context("kunne ikke sette opp metrikk")?;
    let packages = default_packages();

    let outcome = process_packages(&packages, &cfg, &metrics);
    for line in &outcome.lines {
        println!("{line}");
    }

    info!("{} av {} pakker behandlet", outcome.lines.len(), packages.len());

    if let Some((i, e)) = outcome.failures.first() {
        bail!("{} pakke(r) feilet, første (#{i}): {e}", outcome.failures.len());
    }
    Ok(())
}
