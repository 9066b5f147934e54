//! POD energy plotter: loads `podEnergy.csv` and draws the energy captured by
//! each basis mode.

pub mod app;
pub mod chart;
pub mod color;
pub mod config;
pub mod data;
pub mod error;
pub mod render;
pub mod sink;
pub mod state;
pub mod ui;

pub use data::loader::load_energy_table;
pub use error::{PlotError, Result};
pub use render::{render_dual_axis, render_overview};
pub use sink::ChartSink;
