use eframe::egui::{self, Ui};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        if !state.secondary_indices().is_empty() {
            ui.menu_button("Figures", |ui: &mut Ui| {
                for idx in state.secondary_indices() {
                    let title = state.charts[idx].title.clone();
                    let mut open = state.is_open(idx);
                    if ui.checkbox(&mut open, title).changed() {
                        state.toggle(idx);
                        ui.close_menu();
                    }
                }
            });
            ui.separator();
        }

        ui.label(format!(
            "{} of {} figure(s) shown",
            state.open_count(),
            state.charts.len()
        ));

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(msg.as_str());
        }
    });
}
