//! Display-independent chart descriptions.
//!
//! A [`ChartSpec`] says what one figure contains; sinks decide how to show it.

use serde::{Deserialize, Serialize};

use crate::color::SeriesColor;

/// Which side of the plot a y axis is drawn on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisSide {
    Left,
    Right,
}

/// One y axis of a figure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisSpec {
    pub label: String,
    pub side: AxisSide,
    /// Colour of the label and tick text; `None` uses the theme default.
    pub color: Option<SeriesColor>,
    pub grid: bool,
    /// Factor applied to this axis' series so they share the primary axis'
    /// coordinates. Tick labels divide it back out.
    pub scale: f64,
}

impl AxisSpec {
    pub fn left(label: impl Into<String>) -> Self {
        AxisSpec {
            label: label.into(),
            side: AxisSide::Left,
            color: None,
            grid: true,
            scale: 1.0,
        }
    }

    pub fn right(label: impl Into<String>, scale: f64) -> Self {
        AxisSpec {
            side: AxisSide::Right,
            scale,
            ..AxisSpec::left(label)
        }
    }

    pub fn with_color(mut self, color: SeriesColor) -> Self {
        self.color = Some(color);
        self
    }
}

/// A named polyline in data coordinates of its axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesSpec {
    pub name: String,
    pub points: Vec<[f64; 2]>,
    pub color: SeriesColor,
    /// Index into [`ChartSpec::axes`].
    pub axis: usize,
}

impl SeriesSpec {
    /// Zip x and y values into a series on the primary axis.
    pub fn new(name: impl Into<String>, x: &[f64], y: &[f64], color: SeriesColor) -> Self {
        SeriesSpec {
            name: name.into(),
            points: x.iter().zip(y).map(|(&xi, &yi)| [xi, yi]).collect(),
            color,
            axis: 0,
        }
    }

    pub fn on_axis(mut self, axis: usize) -> Self {
        self.axis = axis;
        self
    }

    pub fn ys(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p[1])
    }
}

/// A complete figure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    /// Stable identifier, used for window and plot ids.
    pub id: String,
    pub title: String,
    pub x_label: String,
    /// Fixed x range; `None` fits the data.
    pub x_bounds: Option<(f64, f64)>,
    /// Primary axis first.
    pub axes: Vec<AxisSpec>,
    pub legend: bool,
    pub series: Vec<SeriesSpec>,
}

impl ChartSpec {
    /// Series drawn against the given axis.
    pub fn series_on(&self, axis: usize) -> impl Iterator<Item = &SeriesSpec> {
        self.series.iter().filter(move |s| s.axis == axis)
    }

    /// Series points mapped into primary-axis coordinates.
    pub fn plotted_points(&self, series: &SeriesSpec) -> Vec<[f64; 2]> {
        let scale = self.axes.get(series.axis).map_or(1.0, |a| a.scale);
        series.points.iter().map(|&[x, y]| [x, y * scale]).collect()
    }
}
