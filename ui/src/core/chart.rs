//! SVG geometry for the trend chart.
//!
//! Pure layout: scales, ticks and path strings for the visible window. The
//! component in `dashboard::trend_chart` only turns this into markup.

use super::format;
use super::trend::DataPoint;
use super::window::TrendWindow;

pub const CHART_WIDTH: f64 = 720.0;
pub const CHART_HEIGHT: f64 = 300.0;
pub const MARGIN_TOP: f64 = 20.0;
pub const MARGIN_BOTTOM: f64 = 40.0;
pub const MARGIN_LEFT: f64 = 64.0;
pub const MARGIN_RIGHT: f64 = 64.0;

const TICK_COUNT: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Hours,
    Value,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisSide {
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AxisGeometry {
    pub side: AxisSide,
    pub metric: Metric,
    pub max: f64,
    /// `(y, label)` pairs from the baseline upward.
    pub ticks: Vec<(f64, String)>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlotPoint {
    pub x: f64,
    pub y: f64,
    pub tooltip: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub metric: Metric,
    pub path: String,
    pub points: Vec<PlotPoint>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartGeometry {
    pub x_labels: Vec<(f64, String)>,
    pub axes: Vec<AxisGeometry>,
    pub series: Vec<Series>,
}

impl ChartGeometry {
    /// Lays out `visible` according to the window's view mode. In `Both` mode
    /// value is plotted against a second axis on the right.
    pub fn build(visible: &[DataPoint], window: &TrendWindow) -> Self {
        let x_labels = visible
            .iter()
            .enumerate()
            .map(|(i, point)| (x_position(i, visible.len()), point.month.clone()))
            .collect();

        let mut axes = Vec::new();
        let mut series = Vec::new();

        if window.shows_hours() {
            let (axis, line) = plot(visible, Metric::Hours, AxisSide::Left);
            axes.push(axis);
            series.push(line);
        }
        if window.shows_value() {
            let side = if window.shows_hours() {
                AxisSide::Right
            } else {
                AxisSide::Left
            };
            let (axis, line) = plot(visible, Metric::Value, side);
            axes.push(axis);
            series.push(line);
        }

        Self {
            x_labels,
            axes,
            series,
        }
    }
}

fn plot(visible: &[DataPoint], metric: Metric, side: AxisSide) -> (AxisGeometry, Series) {
    let values: Vec<f64> = visible.iter().map(|point| metric_value(point, metric)).collect();
    let max = nice_max(values.iter().copied().fold(0.0, f64::max));

    let ticks = (0..=TICK_COUNT)
        .map(|i| {
            let value = max * i as f64 / TICK_COUNT as f64;
            (y_position(value, max), tick_label(metric, side, value))
        })
        .collect();

    let points: Vec<PlotPoint> = visible
        .iter()
        .zip(&values)
        .enumerate()
        .map(|(i, (point, value))| PlotPoint {
            x: x_position(i, visible.len()),
            y: y_position(*value, max),
            tooltip: format!("{} · {}", point.month, tooltip_value(metric, *value)),
        })
        .collect();

    let path = line_path(&points);

    (
        AxisGeometry {
            side,
            metric,
            max,
            ticks,
        },
        Series {
            metric,
            path,
            points,
        },
    )
}

fn metric_value(point: &DataPoint, metric: Metric) -> f64 {
    match metric {
        Metric::Hours => point.hours,
        Metric::Value => point.value,
    }
}

/// Only the secondary (right) value axis uses compact `$Nk` ticks; a value
/// axis on its own shows plain numbers.
fn tick_label(metric: Metric, side: AxisSide, value: f64) -> String {
    match (metric, side) {
        (Metric::Value, AxisSide::Right) => format::format_usd_thousands(value),
        _ => format::format_number(value, 0),
    }
}

fn tooltip_value(metric: Metric, value: f64) -> String {
    match metric {
        Metric::Hours => format::format_hours(value),
        Metric::Value => format::format_usd(value),
    }
}

/// Rounds `value` up to 1, 2 or 5 times a power of ten. Never below 1 so a
/// flat zero line still has a usable scale.
pub fn nice_max(value: f64) -> f64 {
    if !value.is_finite() || value <= 1.0 {
        return 1.0;
    }
    let magnitude = 10f64.powf(value.log10().floor());
    let fraction = value / magnitude;
    let nice = if fraction <= 1.0 {
        1.0
    } else if fraction <= 2.0 {
        2.0
    } else if fraction <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

/// Points are centred in equal-width columns across the plot area.
pub fn x_position(index: usize, count: usize) -> f64 {
    let inner = CHART_WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
    let columns = count.max(1) as f64;
    MARGIN_LEFT + inner * (index as f64 + 0.5) / columns
}

pub fn y_position(value: f64, max: f64) -> f64 {
    let inner = CHART_HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;
    let ratio = if max > 0.0 {
        (value / max).clamp(0.0, 1.0)
    } else {
        0.0
    };
    MARGIN_TOP + inner * (1.0 - ratio)
}

pub fn baseline_y() -> f64 {
    CHART_HEIGHT - MARGIN_BOTTOM
}

fn line_path(points: &[PlotPoint]) -> String {
    points
        .iter()
        .enumerate()
        .map(|(i, point)| {
            let command = if i == 0 { 'M' } else { 'L' };
            format!("{command} {:.1} {:.1}", point.x, point.y)
        })
        .collect::<Vec<_>>()
        .join(" ")
}
