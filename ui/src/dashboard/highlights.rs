use dioxus::prelude::*;

use crate::{
    core::{automation::Automation, format, trend::ImpactTotals},
    t,
};

#[component]
pub fn ImpactHighlights(automations: Vec<Automation>) -> Element {
    let totals = ImpactTotals::from_records(&automations);
    let live = totals.live;
    let total = totals.total;

    rsx! {
        section { class: "dashboard-card impact-highlights",
            ul { class: "impact-highlights__grid",
                li { class: "impact-highlights__item",
                    span { class: "impact-highlights__label", {t!("highlights-live")} }
                    span { class: "impact-highlights__value", "{live}" }
                    span { class: "impact-highlights__meta", {t!("highlights-of-total", total = total)} }
                }
                li { class: "impact-highlights__item",
                    span { class: "impact-highlights__label", {t!("highlights-hours")} }
                    span { class: "impact-highlights__value", "{format::format_hours(totals.hours_per_month)}" }
                    span { class: "impact-highlights__meta", {t!("highlights-per-month")} }
                }
                li { class: "impact-highlights__item",
                    span { class: "impact-highlights__label", {t!("highlights-value")} }
                    span { class: "impact-highlights__value", "{format::format_usd(totals.value_per_month())}" }
                    span { class: "impact-highlights__meta", {t!("highlights-per-month")} }
                }
                li { class: "impact-highlights__item",
                    span { class: "impact-highlights__label", {t!("highlights-annual")} }
                    span { class: "impact-highlights__value", "{format::format_usd(totals.annual_value_usd)}" }
                    span { class: "impact-highlights__meta", {t!("highlights-per-year")} }
                }
            }
        }
    }
}
