use dioxus::prelude::*;

use crate::{
    core::{
        chart::{
            baseline_y, AxisGeometry, AxisSide, ChartGeometry, Metric, CHART_HEIGHT, CHART_WIDTH,
            MARGIN_LEFT, MARGIN_RIGHT, MARGIN_TOP,
        },
        trend::DataPoint,
        window::{TrendWindow, ViewMode},
    },
    dashboard::view_mode_label,
    t,
};

/// Line chart over a six-month window of the cumulative series, with a metric
/// switch and previous/next paging.
#[component]
pub fn TrendChart(data: Vec<DataPoint>, title: String) -> Element {
    let mut window = use_signal(|| TrendWindow::new(data.len()));

    // A new series length (e.g. after a filter change) snaps back to the latest months.
    let len = data.len();
    use_effect(use_reactive!(|(len,)| {
        window.with_mut(|w| {
            if w.sync_len(len) {
                tracing::debug!(len, start = w.start(), "trend window reset");
            }
        });
    }));

    let state = window();
    let visible = state.visible(&data);
    let geometry = ChartGeometry::build(visible, &state);
    let hours_label = t!("trend-legend-hours");
    let value_label = t!("trend-legend-value");

    rsx! {
        section { class: "dashboard-card trend-chart",
            div { class: "trend-chart__header",
                h3 { class: "trend-chart__title", "{title}" }
                div { class: "trend-chart__controls",
                    div { class: "trend-chart__modes", role: "group",
                        for mode in ViewMode::ALL {
                            button {
                                key: "{mode:?}",
                                r#type: "button",
                                class: mode_class(state.view_mode() == mode),
                                aria_pressed: "{state.view_mode() == mode}",
                                onclick: move |_| window.with_mut(|w| w.set_view_mode(mode)),
                                {view_mode_label(mode)}
                            }
                        }
                    }
                    div { class: "trend-chart__nav",
                        button {
                            r#type: "button",
                            class: "trend-chart__nav-button",
                            aria_label: t!("trend-previous-months"),
                            disabled: !state.can_go_previous(),
                            onclick: move |_| window.with_mut(|w| w.previous()),
                            "←"
                        }
                        button {
                            r#type: "button",
                            class: "trend-chart__nav-button",
                            aria_label: t!("trend-next-months"),
                            disabled: !state.can_go_next(),
                            onclick: move |_| window.with_mut(|w| w.next()),
                            "→"
                        }
                    }
                }
            }

            svg {
                class: "trend-chart__plot",
                "viewBox": "0 0 {CHART_WIDTH} {CHART_HEIGHT}",
                "role": "img",
                "aria-label": "{title}",

                for axis in geometry.axes.iter() {
                    {render_axis(axis, &hours_label, &value_label)}
                }

                line {
                    class: "trend-chart__baseline",
                    x1: "{MARGIN_LEFT}",
                    y1: "{baseline_y()}",
                    x2: "{CHART_WIDTH - MARGIN_RIGHT}",
                    y2: "{baseline_y()}",
                }

                for (x, label) in geometry.x_labels.iter() {
                    text {
                        class: "trend-chart__tick trend-chart__tick--x",
                        x: "{x}",
                        y: "{baseline_y() + 24.0}",
                        "text-anchor": "middle",
                        "{label}"
                    }
                }

                for line in geometry.series.iter() {
                    g { class: series_class(line.metric),
                        path { class: "trend-chart__line", d: "{line.path}" }
                        for point in line.points.iter() {
                            circle {
                                class: "trend-chart__dot",
                                cx: "{point.x}",
                                cy: "{point.y}",
                                r: "4",
                                title { "{point.tooltip}" }
                            }
                        }
                    }
                }
            }

            div { class: "trend-chart__legend",
                if state.shows_hours() {
                    span { class: "trend-chart__legend-item",
                        span { class: "trend-chart__legend-swatch trend-chart__legend-swatch--hours" }
                        "{hours_label}"
                    }
                }
                if state.shows_value() {
                    span { class: "trend-chart__legend-item",
                        span { class: "trend-chart__legend-swatch trend-chart__legend-swatch--value" }
                        "{value_label}"
                    }
                }
            }
        }
    }
}

fn render_axis(axis: &AxisGeometry, hours_label: &str, value_label: &str) -> Element {
    let (tick_x, anchor, title_x, rotation) = match axis.side {
        AxisSide::Left => (MARGIN_LEFT - 8.0, "end", 14.0, -90),
        AxisSide::Right => (CHART_WIDTH - MARGIN_RIGHT + 8.0, "start", CHART_WIDTH - 14.0, 90),
    };
    let title = match axis.metric {
        Metric::Hours => hours_label,
        Metric::Value => value_label,
    };
    let title_y = (MARGIN_TOP + baseline_y()) / 2.0;
    // Only the left axis draws grid lines so the dual-axis view stays readable.
    let grid = axis.side == AxisSide::Left;

    rsx! {
        g { class: "trend-chart__axis",
            for (y, label) in axis.ticks.iter() {
                if grid {
                    line {
                        class: "trend-chart__grid",
                        x1: "{MARGIN_LEFT}",
                        y1: "{y}",
                        x2: "{CHART_WIDTH - MARGIN_RIGHT}",
                        y2: "{y}",
                    }
                }
                text {
                    class: "trend-chart__tick",
                    x: "{tick_x}",
                    y: "{y}",
                    "text-anchor": "{anchor}",
                    "dominant-baseline": "middle",
                    "{label}"
                }
            }
            text {
                class: "trend-chart__axis-title",
                x: "{title_x}",
                y: "{title_y}",
                "text-anchor": "middle",
                transform: "rotate({rotation} {title_x} {title_y})",
                "{title}"
            }
        }
    }
}

fn mode_class(active: bool) -> &'static str {
    if active {
        "trend-chart__mode trend-chart__mode--active"
    } else {
        "trend-chart__mode"
    }
}

fn series_class(metric: Metric) -> &'static str {
    match metric {
        Metric::Hours => "trend-chart__series trend-chart__series--hours",
        Metric::Value => "trend-chart__series trend-chart__series--value",
    }
}
