use eframe::egui;

use crate::chart::ChartSpec;
use crate::state::AppState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct EnergyPlotApp {
    pub state: AppState,
}

impl EnergyPlotApp {
    pub fn new(charts: Vec<ChartSpec>, status_message: Option<String>) -> Self {
        Self {
            state: AppState::new(charts, status_message),
        }
    }

    /// Show a secondary figure in its own viewport. Returns `true` once the
    /// user has closed it.
    fn figure_window(ctx: &egui::Context, chart: &ChartSpec) -> bool {
        ctx.show_viewport_immediate(
            egui::ViewportId::from_hash_of(&chart.id),
            egui::ViewportBuilder::default()
                .with_title(&chart.title)
                .with_inner_size([900.0, 600.0]),
            |ctx, class| {
                if matches!(class, egui::ViewportClass::Embedded) {
                    // Backend can't open more native windows.
                    let mut open = true;
                    egui::Window::new(chart.title.as_str())
                        .id(egui::Id::new(&chart.id))
                        .open(&mut open)
                        .default_size([640.0, 420.0])
                        .show(ctx, |ui| plot::energy_plot(ui, chart));
                    !open
                } else {
                    egui::CentralPanel::default().show(ctx, |ui| {
                        plot::energy_plot(ui, chart);
                    });
                    ctx.input(|i| i.viewport().close_requested())
                }
            },
        )
    }
}

impl eframe::App for EnergyPlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Central panel: first figure ----
        egui::CentralPanel::default().show(ctx, |ui| match self.state.primary() {
            Some(chart) => {
                plot::energy_plot(ui, chart);
            }
            None => {
                ui.centered_and_justified(|ui: &mut egui::Ui| {
                    ui.heading("Nothing to plot");
                });
            }
        });

        // ---- Remaining figures: one viewport each ----
        for idx in self.state.secondary_indices() {
            if !self.state.is_open(idx) {
                continue;
            }
            if Self::figure_window(ctx, &self.state.charts[idx]) {
                self.state.close(idx);
            }
        }

        // ---- Root window: hide it while other figures are still open ----
        let close_requested = ctx.input(|i| i.viewport().close_requested());
        if close_requested && self.state.is_open(0) && self.state.close_primary() {
            log::debug!("Hiding root figure until the remaining figures close");
            ctx.send_viewport_cmd(egui::ViewportCommand::CancelClose);
            ctx.send_viewport_cmd(egui::ViewportCommand::Visible(false));
        } else if !close_requested && self.state.all_closed() {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        } else if !self.state.is_open(0) {
            // Keep the hidden root ticking so the other viewports repaint.
            ctx.request_repaint();
        }
    }
}
