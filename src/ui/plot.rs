use eframe::egui::{self, Color32, RichText, Ui};
use egui_plot::{
    AxisHints, GridMark, HPlacement, Legend, Line, Plot, PlotBounds, PlotPoints, PlotResponse,
};

use crate::chart::{AxisSide, AxisSpec, ChartSpec};

/// Fraction of the y range added above and below the data.
const Y_MARGIN: f64 = 0.05;

// ---------------------------------------------------------------------------
// Energy plot
// ---------------------------------------------------------------------------

/// Draw one chart description, title above the plot area.
pub fn energy_plot(ui: &mut Ui, chart: &ChartSpec) -> PlotResponse<()> {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.heading(chart.title.as_str());
    });

    let grid = chart.axes.iter().any(|a| a.grid);
    let fixed = fixed_bounds(chart);

    let mut plot = Plot::new(chart.id.as_str())
        .x_axis_label(chart.x_label.as_str())
        .custom_y_axes(chart.axes.iter().map(axis_hints).collect())
        .show_grid(grid)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true);

    if chart.legend {
        plot = plot.legend(Legend::default());
    }
    if fixed.is_some() {
        plot = plot.auto_bounds([false, true]);
    }

    plot.show(ui, |plot_ui| {
        for series in &chart.series {
            let points: PlotPoints = chart.plotted_points(series).into();
            let line = Line::new(points)
                .name(&series.name)
                .color(Color32::from(series.color))
                .width(1.5);
            plot_ui.line(line);
        }
        if let Some(bounds) = fixed {
            plot_ui.set_plot_bounds(bounds);
        }
    })
}

/// Plot bounds for charts with a fixed x range: x exactly as requested, y
/// covering every plotted point plus a margin.
pub fn fixed_bounds(chart: &ChartSpec) -> Option<PlotBounds> {
    let (lo, hi) = chart.x_bounds?;

    let (mut y_min, mut y_max) = (f64::INFINITY, f64::NEG_INFINITY);
    for axis in 0..chart.axes.len() {
        for series in chart.series_on(axis) {
            for [_, y] in chart.plotted_points(series) {
                if y.is_finite() {
                    y_min = y_min.min(y);
                    y_max = y_max.max(y);
                }
            }
        }
    }
    if y_min > y_max {
        (y_min, y_max) = (0.0, 1.0);
    }
    let pad = ((y_max - y_min) * Y_MARGIN).max(Y_MARGIN);

    Some(PlotBounds::from_min_max([lo, y_min - pad], [hi, y_max + pad]))
}

/// Axis hints for one y axis; secondary axes report their unscaled values.
///
/// Only the axis label takes the series colour: egui_plot draws tick labels
/// in the theme's text colour.
fn axis_hints(axis: &AxisSpec) -> AxisHints<'static> {
    let mut label = RichText::new(axis.label.as_str());
    if let Some(color) = axis.color {
        label = label.color(Color32::from(color));
    }

    let mut hints = AxisHints::new_y().label(label);
    if axis.side == AxisSide::Right {
        hints = hints.placement(HPlacement::Right);
    }

    let scale = axis.scale;
    if scale != 1.0 {
        hints = hints.formatter(move |mark: GridMark, _range| tick_label(mark.value / scale));
    }
    hints
}

fn tick_label(value: f64) -> String {
    if (value - value.round()).abs() < 1e-9 {
        format!("{value:.0}")
    } else {
        let text = format!("{value:.3}");
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{EnergyRow, EnergyTable};
    use crate::render::{render_dual_axis, render_overview};

    fn table_with_basis(basis: &[f64]) -> EnergyTable {
        let per_mode = 100.0 / basis.len() as f64;
        EnergyTable::from_rows(basis.iter().enumerate().map(|(i, &n)| EnergyRow {
            basis_number: n,
            per_mode_energy: per_mode,
            cumulative_energy: per_mode * (i + 1) as f64,
            eigenvalue: 1.0,
        }))
    }

    /// Draw `chart` headlessly for a few frames and return the x range shown.
    fn displayed_x_range(chart: &ChartSpec) -> (f64, f64) {
        let ctx = egui::Context::default();
        let mut shown = None;
        for _ in 0..3 {
            let input = egui::RawInput {
                screen_rect: Some(egui::Rect::from_min_size(
                    egui::Pos2::ZERO,
                    egui::vec2(800.0, 600.0),
                )),
                ..Default::default()
            };
            let _ = ctx.run(input, |ctx| {
                egui::CentralPanel::default().show(ctx, |ui| {
                    let response = energy_plot(ui, chart);
                    let bounds = response.transform.bounds();
                    shown = Some((bounds.min()[0], bounds.max()[0]));
                });
            });
        }
        shown.expect("plot drawn")
    }

    #[test]
    fn tick_labels_are_compact() {
        assert_eq!(tick_label(40.0), "40");
        assert_eq!(tick_label(12.5), "12.5");
        assert_eq!(tick_label(1.0 / 3.0), "0.333");
    }

    #[test]
    fn fixed_bounds_cover_scaled_series() {
        let chart = render_dual_axis(&table_with_basis(&[1.0, 2.0, 3.0]));
        let bounds = fixed_bounds(&chart).unwrap();

        assert_eq!(bounds.min()[0], 1.0);
        assert_eq!(bounds.max()[0], 4.0);
        assert!(bounds.min()[1] < 100.0 / 3.0);
        assert!(bounds.max()[1] > 100.0);
    }

    #[test]
    fn overview_figures_fit_their_data() {
        let charts = render_overview(&table_with_basis(&[1.0, 2.0]));
        assert!(charts.iter().all(|c| fixed_bounds(c).is_none()));
    }

    #[test]
    fn dual_axis_window_keeps_requested_x_range() {
        for basis in [[1.0, 2.0, 3.0], [0.0, 5.0, 10.0]] {
            let chart = render_dual_axis(&table_with_basis(&basis));
            let (lo, hi) = displayed_x_range(&chart);
            assert!((lo - 1.0).abs() < 1e-9, "basis {basis:?}: x min {lo}");
            assert!((hi - 4.0).abs() < 1e-9, "basis {basis:?}: x max {hi}");
        }
    }
}
