use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use eframe::egui;

use crate::app::EnergyPlotApp;
use crate::chart::ChartSpec;
use crate::config::SinkKind;
use crate::error::{PlotError, Result};

// ---------------------------------------------------------------------------
// Sink capability
// ---------------------------------------------------------------------------

/// Destination for rendered charts.
pub trait ChartSink {
    /// Show or store the charts. Interactive sinks block until dismissed.
    fn display(&mut self, charts: &[ChartSpec]) -> Result<()>;
}

/// Build the sink selected on the command line.
pub fn sink_for(kind: &SinkKind, status: Option<String>) -> Box<dyn ChartSink> {
    match kind {
        SinkKind::Window => Box::new(WindowSink { status }),
        SinkKind::Json(path) => Box::new(JsonSink::new(path.clone())),
        SinkKind::Null => Box::new(NullSink),
    }
}

// ---------------------------------------------------------------------------
// Native window
// ---------------------------------------------------------------------------

/// Opens the charts in native windows and runs the event loop.
#[derive(Debug, Default)]
pub struct WindowSink {
    /// Text shown in the top bar.
    pub status: Option<String>,
}

impl ChartSink for WindowSink {
    fn display(&mut self, charts: &[ChartSpec]) -> Result<()> {
        let Some(first) = charts.first() else {
            log::warn!("No charts to display");
            return Ok(());
        };

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_title(&first.title)
                .with_inner_size([900.0, 600.0])
                .with_min_inner_size([400.0, 300.0]),
            ..Default::default()
        };

        let app = EnergyPlotApp::new(charts.to_vec(), self.status.clone());
        log::info!("Opening {} chart window(s)", charts.len());

        eframe::run_native(
            "POD Energy",
            options,
            Box::new(move |_cc| Ok(Box::new(app))),
        )
        .map_err(|e| {
            log::error!("Failed to open display: {e}");
            PlotError::from(e)
        })
    }
}

// ---------------------------------------------------------------------------
// JSON file
// ---------------------------------------------------------------------------

/// Writes the chart descriptions to a JSON file.
#[derive(Debug, Clone)]
pub struct JsonSink {
    path: PathBuf,
}

impl JsonSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ChartSink for JsonSink {
    fn display(&mut self, charts: &[ChartSpec]) -> Result<()> {
        let io_err = |source| PlotError::Io {
            path: self.path.clone(),
            source,
        };

        let file = File::create(&self.path).map_err(io_err)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, charts)?;
        writer.write_all(b"\n").map_err(io_err)?;
        writer.flush().map_err(io_err)?;

        log::info!("Wrote {} chart(s) to {}", charts.len(), self.path.display());
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Discard
// ---------------------------------------------------------------------------

/// Drops every chart.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl ChartSink for NullSink {
    fn display(&mut self, charts: &[ChartSpec]) -> Result<()> {
        log::info!("Headless run, discarding {} chart(s)", charts.len());
        Ok(())
    }
}
