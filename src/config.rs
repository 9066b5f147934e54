use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::data::loader::DEFAULT_ENERGY_FILE;

/// Which figures to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum PlotMode {
    /// Cumulative energy with reference lines, plus per-mode energy, as two figures
    #[default]
    Overview,
    /// Cumulative and per-mode energy in one figure with two y axes
    DualAxis,
}

/// Where rendered charts go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkKind {
    /// Interactive native window (blocks until closed).
    Window,
    /// Chart descriptions written as JSON.
    Json(PathBuf),
    /// Discard the charts.
    Null,
}

#[derive(Parser, Debug)]
#[command(name = "pod-energy-plot")]
#[command(about = "Plot the energy captured by POD basis modes", long_about = None)]
pub struct Cli {
    /// Energy table written by the POD basis calculation
    #[arg(short, long, default_value = DEFAULT_ENERGY_FILE)]
    pub input: PathBuf,

    /// Figure layout
    #[arg(short, long, value_enum, default_value_t = PlotMode::Overview)]
    pub mode: PlotMode,

    /// Write the chart descriptions to this JSON file instead of opening a window
    #[arg(long, conflicts_with = "headless")]
    pub dump: Option<PathBuf>,

    /// Load and render without displaying anything
    #[arg(long)]
    pub headless: bool,
}

/// Resolved run configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlotConfig {
    pub input: PathBuf,
    pub mode: PlotMode,
    pub sink: SinkKind,
}

impl From<Cli> for PlotConfig {
    fn from(cli: Cli) -> Self {
        let sink = match (cli.dump, cli.headless) {
            (Some(path), _) => SinkKind::Json(path),
            (None, true) => SinkKind::Null,
            (None, false) => SinkKind::Window,
        };
        Self {
            input: cli.input,
            mode: cli.mode,
            sink,
        }
    }
}
