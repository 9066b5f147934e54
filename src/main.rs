use anyhow::{Context, Result};
use clap::Parser;

use pod_energy_plot::config::{Cli, PlotConfig};
use pod_energy_plot::data::analysis::{invariant_warnings, EnergySummary};
use pod_energy_plot::{load_energy_table, render, sink};

fn main() -> Result<()> {
    env_logger::init();

    let config = PlotConfig::from(Cli::parse());
    log::debug!("Running with {config:?}");

    let table = load_energy_table(&config.input)
        .with_context(|| format!("loading {}", config.input.display()))?;

    let summary = EnergySummary::of(&table);
    log::info!("Loaded {}: {summary}", config.input.display());
    for warning in invariant_warnings(&table) {
        log::warn!("{warning}");
    }

    let charts = render::render(&table, config.mode);

    let mut sink = sink::sink_for(&config.sink, Some(summary.to_string()));
    sink.display(&charts).context("displaying charts")?;

    Ok(())
}
