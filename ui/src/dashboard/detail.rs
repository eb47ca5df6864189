use dioxus::prelude::*;

use crate::{
    core::{automation::Automation, format},
    dashboard::{format_closed, status_label},
    t,
};

#[component]
pub fn AutomationDetailPanel(automation: Option<Automation>) -> Element {
    rsx! {
        section { class: "dashboard-card automation-detail",
            div { class: "dashboard-card__header",
                h2 { {t!("detail-title")} }
            }

            match automation {
                Some(automation) => render_automation(&automation),
                None => rsx! {
                    p { class: "dashboard-card__placeholder", {t!("detail-placeholder")} }
                },
            }
        }
    }
}

fn render_automation(automation: &Automation) -> Element {
    let customer = automation
        .customer
        .as_deref()
        .map(format::capitalize_first)
        .unwrap_or_else(|| t!("detail-no-customer"));

    rsx! {
        div { class: "automation-detail__summary",
            h3 { "{automation.name}" }
            span { class: format!("status-badge {}", automation.status.css_class()),
                {status_label(automation.status)}
            }
        }

        if !automation.description.is_empty() {
            p { class: "automation-detail__description", "{automation.description}" }
        }

        ul { class: "automation-detail__grid",
            li {
                span { class: "automation-detail__metric-label", {t!("detail-author")} }
                span { class: "automation-detail__metric-value", "{automation.author}" }
            }
            li {
                span { class: "automation-detail__metric-label", {t!("detail-department")} }
                span { class: "automation-detail__metric-value", "{automation.department}" }
            }
            li {
                span { class: "automation-detail__metric-label", {t!("detail-customer")} }
                span { class: "automation-detail__metric-value", "{customer}" }
            }
            li {
                span { class: "automation-detail__metric-label", {t!("detail-closed")} }
                span { class: "automation-detail__metric-value", "{format_closed(automation.closed)}" }
            }
            li {
                span { class: "automation-detail__metric-label", {t!("detail-hours")} }
                span { class: "automation-detail__metric-value", "{format::format_hours(automation.time_saved_hours_per_month)}" }
            }
            li {
                span { class: "automation-detail__metric-label", {t!("detail-monthly-value")} }
                span { class: "automation-detail__metric-value", "{format::format_usd(automation.monthly_value_usd())}" }
            }
            li {
                span { class: "automation-detail__metric-label", {t!("detail-annual-value")} }
                span { class: "automation-detail__metric-value", "{format::format_usd(automation.annual_value_usd)}" }
            }
        }

        if !automation.tags.is_empty() {
            div { class: "automation-detail__tags",
                for tag in automation.tags.iter() {
                    span { key: "{tag}", class: "automation-detail__tag", "{tag}" }
                }
            }
        }
    }
}
