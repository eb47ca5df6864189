use dioxus::prelude::*;

use crate::{
    dashboard::{use_dashboard, FilterBar, FilterableTrendChart, ImpactHighlights},
    t,
};

#[component]
pub fn Dashboard() -> Element {
    // Subscribe to the language signal (if provided) so labels re-render on change.
    let _lang = try_use_context::<Signal<String>>().map(|code| code());

    let ctx = use_dashboard();
    let catalog = ctx.catalog;
    let filter = ctx.filter;
    let site = ctx.site.read().clone();
    let state = catalog();
    let visible = state.filtered(&filter());

    rsx! {
        section { class: "page page-dashboard",
            h1 { "{site.title}" }
            p { {t!("dashboard-intro")} }

            if let Some(err) = state.error.as_ref() {
                section { class: "dashboard-card",
                    p { class: "dashboard-card__placeholder", "{err}" }
                }
            } else {
                FilterBar { options: state.options.clone(), filter }
                ImpactHighlights { automations: visible }
                FilterableTrendChart { catalog, filter, title: site.chart_title.clone() }
            }
        }
    }
}
