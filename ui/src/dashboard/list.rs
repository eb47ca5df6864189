use dioxus::prelude::*;

use crate::{
    core::{automation::Automation, format},
    dashboard::{format_closed, status_label},
    t,
};

#[component]
pub fn AutomationList(
    automations: Vec<Automation>,
    selected_id: Signal<Option<String>>,
) -> Element {
    let active_id = selected_id();
    let count = automations.len();

    let entries: Vec<ListEntry> = automations
        .iter()
        .map(|automation| ListEntry {
            id: automation.id.clone(),
            is_active: active_id.as_deref() == Some(automation.id.as_str()),
            name: automation.name.clone(),
            department: automation.department.clone(),
            status_class: automation.status.css_class(),
            status: status_label(automation.status),
            hours: format::format_hours(automation.time_saved_hours_per_month),
            closed: format_closed(automation.closed),
        })
        .collect();

    rsx! {
        section { class: "dashboard-card automation-list",
            div { class: "dashboard-card__header",
                h2 { {t!("list-title")} }
                if count > 0 {
                    span { class: "dashboard-card__meta", {t!("list-count", count = count)} }
                }
            }

            if entries.is_empty() {
                p { class: "dashboard-card__placeholder", {t!("list-empty")} }
            } else {
                ul { class: "automation-list__items",
                    for entry in entries.into_iter() {
                        {render_list_entry(entry, selected_id)}
                    }
                }
            }
        }
    }
}

struct ListEntry {
    id: String,
    is_active: bool,
    name: String,
    department: String,
    status_class: &'static str,
    status: String,
    hours: String,
    closed: String,
}

fn render_list_entry(entry: ListEntry, mut selected_id: Signal<Option<String>>) -> Element {
    let ListEntry {
        id,
        is_active,
        name,
        department,
        status_class,
        status,
        hours,
        closed,
    } = entry;

    let button_id = id.clone();

    rsx! {
        li {
            key: "{id}",
            class: format!(
                "automation-list__item {}",
                if is_active { "automation-list__item--active" } else { "" }
            ),
            button {
                r#type: "button",
                class: "automation-list__button",
                onclick: move |_| selected_id.set(Some(button_id.clone())),

                span { class: "automation-list__heading",
                    span { class: "automation-list__name", "{name}" }
                    span { class: format!("status-badge {status_class}"), "{status}" }
                }
                span { class: "automation-list__meta",
                    span { "{department}" }
                    span { "{hours}" }
                    span { "{closed}" }
                }
            }
        }
    }
}
