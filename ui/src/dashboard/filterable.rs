use dioxus::prelude::*;

use crate::{
    core::{filter::AutomationFilter, trend},
    dashboard::{CatalogState, TrendChart},
    t,
};

/// Re-derives the twelve-month series whenever the catalog or the filter
/// changes and hands it to [`TrendChart`], or shows the empty-state card.
#[component]
pub fn FilterableTrendChart(
    catalog: Signal<CatalogState>,
    filter: Signal<AutomationFilter>,
    title: String,
) -> Element {
    let series = use_memo(move || {
        let current = filter();
        let state = catalog.read();
        let series = trend::aggregate_now(&state.automations, &current);
        tracing::debug!(points = series.len(), "trend series recomputed");
        series
    });

    let data = series();
    if !trend::has_visible_data(&data) {
        return rsx! {
            section { class: "dashboard-card trend-chart trend-chart--empty",
                h3 { class: "trend-chart__title", "{title}" }
                p { class: "dashboard-card__placeholder", {t!("trend-no-data")} }
            }
        };
    }

    rsx! {
        TrendChart { data, title }
    }
}
