use crate::chart::{AxisSpec, ChartSpec, SeriesSpec};
use crate::color::generate_palette;
use crate::config::PlotMode;
use crate::data::model::EnergyTable;

const X_LABEL: &str = "Number POD modes";
const ENERGY_LABEL: &str = "Energy (%)";

/// Reference levels drawn over the cumulative curve.
const REFERENCE_LEVELS: [(f64, &str); 2] = [(100.0, "100% Energy Line"), (90.0, "90% Energy Line")];

// ---------------------------------------------------------------------------
// Mode dispatch
// ---------------------------------------------------------------------------

/// Build the figures for the selected mode.
pub fn render(table: &EnergyTable, mode: PlotMode) -> Vec<ChartSpec> {
    let charts = match mode {
        PlotMode::Overview => render_overview(table),
        PlotMode::DualAxis => vec![render_dual_axis(table)],
    };
    log::debug!("Rendered {} chart(s) in {mode:?} mode", charts.len());
    charts
}

// ---------------------------------------------------------------------------
// Overview: two independent figures
// ---------------------------------------------------------------------------

/// Cumulative energy with 100 % / 90 % reference lines, then per-mode energy.
pub fn render_overview(table: &EnergyTable) -> Vec<ChartSpec> {
    let x = table.basis_number();
    let colors = generate_palette(1 + REFERENCE_LEVELS.len(), 210.0);

    let mut cumulative = vec![SeriesSpec::new(
        "Basis Energy Line",
        x,
        table.cumulative_energy(),
        colors[0],
    )];
    for ((level, name), color) in REFERENCE_LEVELS.iter().zip(&colors[1..]) {
        cumulative.push(SeriesSpec::new(*name, x, &reference_line(*level, x.len()), *color));
    }

    let per_mode = SeriesSpec::new("Basis Energy Line", x, table.per_mode_energy(), colors[0]);

    vec![
        ChartSpec {
            id: "cumulative_energy".into(),
            title: "Cumulative Energy contained in POD modes for velocity".into(),
            x_label: X_LABEL.into(),
            x_bounds: None,
            axes: vec![AxisSpec::left(ENERGY_LABEL)],
            legend: true,
            series: cumulative,
        },
        ChartSpec {
            id: "per_mode_energy".into(),
            title: "Flow Energy contained in each POD mode".into(),
            x_label: X_LABEL.into(),
            x_bounds: None,
            axes: vec![AxisSpec::left(ENERGY_LABEL)],
            legend: false,
            series: vec![per_mode],
        },
    ]
}

/// `n` copies of `level`.
pub fn reference_line(level: f64, n: usize) -> Vec<f64> {
    vec![level; n]
}

// ---------------------------------------------------------------------------
// Dual axis: one figure, cumulative left, per-mode right
// ---------------------------------------------------------------------------

/// Cumulative and per-mode energy sharing the basis-number axis.
pub fn render_dual_axis(table: &EnergyTable) -> ChartSpec {
    let x = table.basis_number();
    let colors = generate_palette(2, 0.0);
    let (left_color, right_color) = (colors[0], colors[1]);

    let scale = twin_scale(table.cumulative_energy(), table.per_mode_energy());

    ChartSpec {
        id: "energy_dual_axis".into(),
        title: "Flow Energy content across the POD basis".into(),
        x_label: X_LABEL.into(),
        x_bounds: Some(dual_axis_bounds(table.len())),
        axes: vec![
            AxisSpec::left("Cumulative Energy (%)").with_color(left_color),
            AxisSpec::right("Energy per mode (%)", scale).with_color(right_color),
        ],
        legend: false,
        series: vec![
            SeriesSpec::new("Cumulative Energy", x, table.cumulative_energy(), left_color),
            SeriesSpec::new("Energy per mode", x, table.per_mode_energy(), right_color)
                .on_axis(1),
        ],
    }
}

/// x range of the dual-axis figure for `n` modes.
pub fn dual_axis_bounds(n: usize) -> (f64, f64) {
    (1.0, n as f64 + 1.0)
}

/// Factor that stretches the secondary series over the primary axis range.
fn twin_scale(primary: &[f64], secondary: &[f64]) -> f64 {
    let peak = |values: &[f64]| {
        values
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .fold(0.0_f64, f64::max)
    };
    let (p, s) = (peak(primary), peak(secondary));
    if p > 0.0 && s > 0.0 {
        p / s
    } else {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::analysis::energy_from_eigenvalues;
    use crate::data::model::EnergyRow;

    fn scenario_table() -> EnergyTable {
        EnergyTable::from_rows(
            [(1.0, 40.0, 40.0, 0.9), (2.0, 25.0, 65.0, 0.5), (3.0, 35.0, 100.0, 0.2)].map(
                |(n, ind, cum, eig)| EnergyRow {
                    basis_number: n,
                    per_mode_energy: ind,
                    cumulative_energy: cum,
                    eigenvalue: eig,
                },
            ),
        )
    }

    #[test]
    fn overview_cumulative_figure_has_three_series() {
        let charts = render_overview(&scenario_table());
        assert_eq!(charts.len(), 2);

        let fig = &charts[0];
        assert!(fig.legend);
        let names: Vec<&str> = fig.series.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["Basis Energy Line", "100% Energy Line", "90% Energy Line"]);

        let xs: Vec<f64> = fig.series[0].points.iter().map(|p| p[0]).collect();
        assert_eq!(xs, [1.0, 2.0, 3.0]);
        assert_eq!(fig.series[0].ys().collect::<Vec<_>>(), [40.0, 65.0, 100.0]);
    }

    #[test]
    fn reference_lines_are_constant() {
        let table = energy_from_eigenvalues(&[9.0, 5.0, 3.0, 2.0, 1.0]);
        let fig = &render_overview(&table)[0];

        for (series, level) in fig.series[1..].iter().zip([100.0, 90.0]) {
            assert_eq!(series.points.len(), 5);
            assert!(series.ys().all(|y| y == level));
            let xs: Vec<f64> = series.points.iter().map(|p| p[0]).collect();
            assert_eq!(xs, table.basis_number());
        }
    }

    #[test]
    fn overview_labels_follow_plot_script() {
        let charts = render_overview(&scenario_table());
        assert_eq!(charts[0].title, "Cumulative Energy contained in POD modes for velocity");
        assert_eq!(charts[1].title, "Flow Energy contained in each POD mode");
        assert!(charts.iter().all(|c| c.x_label == "Number POD modes"));
    }

    #[test]
    fn overview_per_mode_figure() {
        let fig = &render_overview(&scenario_table())[1];
        assert_eq!(fig.series.len(), 1);
        assert_eq!(fig.series[0].ys().collect::<Vec<_>>(), [40.0, 25.0, 35.0]);
        assert_eq!(fig.axes[0].label, ENERGY_LABEL);
    }

    #[test]
    fn dual_axis_bounds_follow_row_count() {
        let fig = render_dual_axis(&scenario_table());
        assert_eq!(fig.x_bounds, Some((1.0, 4.0)));

        let big = energy_from_eigenvalues(&[1.0; 40]);
        assert_eq!(render_dual_axis(&big).x_bounds, Some((1.0, 41.0)));
    }

    #[test]
    fn dual_axis_colours_match_their_series() {
        let fig = render_dual_axis(&scenario_table());
        assert_eq!(fig.axes.len(), 2);
        assert!(fig.axes.iter().all(|a| a.grid));

        for (i, axis) in fig.axes.iter().enumerate() {
            let series: Vec<_> = fig.series_on(i).collect();
            assert_eq!(series.len(), 1);
            assert_eq!(axis.color, Some(series[0].color));
        }
        assert_ne!(fig.axes[0].color, fig.axes[1].color);
    }

    #[test]
    fn secondary_series_is_scaled_onto_primary_axis() {
        let fig = render_dual_axis(&scenario_table());
        assert_eq!(fig.axes[1].scale, 100.0 / 40.0);

        // Raw values are kept; only the plotted coordinates are scaled.
        let per_mode = &fig.series[1];
        assert_eq!(per_mode.ys().collect::<Vec<_>>(), [40.0, 25.0, 35.0]);
        let plotted = fig.plotted_points(per_mode);
        assert_eq!(plotted[0], [1.0, 100.0]);
    }

    #[test]
    fn mode_dispatch() {
        let table = scenario_table();
        assert_eq!(render(&table, PlotMode::Overview).len(), 2);
        assert_eq!(render(&table, PlotMode::DualAxis).len(), 1);
    }
}
