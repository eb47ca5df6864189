use dioxus::prelude::*;

use crate::{
    core::{
        automation::Status,
        filter::{AutomationFilter, FilterOptions, ALL_CUSTOMERS},
        format, platform,
    },
    dashboard::{selected_value, selection, status_label},
    t,
};

/// Search box, dropdowns and the customer picker. Every change writes straight
/// into the shared filter signal; the chart and list re-derive from it.
#[component]
pub fn FilterBar(options: FilterOptions, filter: Signal<AutomationFilter>) -> Element {
    let current = filter();
    let customer_value = current
        .customer_constraint()
        .unwrap_or(ALL_CUSTOMERS)
        .to_string();
    let status_value = current
        .status
        .map(|status| status.as_str().to_string())
        .unwrap_or_default();
    // Clearing keeps the customer, so only the form controls enable the button.
    let has_constraints = {
        let mut controls = current.clone();
        controls.customer = None;
        !controls.is_empty()
    };

    let mut filter_signal = filter;

    rsx! {
        section { class: "dashboard-card filter-bar",
            div { class: "filter-bar__row",
                label { class: "filter-bar__field filter-bar__field--search",
                    span { class: "filter-bar__label", {t!("filter-search-label")} }
                    input {
                        id: "search",
                        r#type: "search",
                        placeholder: t!("filter-search-placeholder"),
                        value: "{current.search}",
                        oninput: move |evt| filter_signal.with_mut(|f| f.search = evt.value()),
                    }
                }

                label { class: "filter-bar__field",
                    span { class: "filter-bar__label", {t!("filter-department-label")} }
                    select {
                        id: "department",
                        value: "{selected_value(&current.department)}",
                        onchange: move |evt| filter_signal.with_mut(|f| f.department = selection(evt.value())),
                        option { value: "", {t!("filter-any-department")} }
                        for department in options.departments.iter() {
                            option { key: "{department}", value: "{department}", "{department}" }
                        }
                    }
                }

                label { class: "filter-bar__field",
                    span { class: "filter-bar__label", {t!("filter-tag-label")} }
                    select {
                        id: "tag",
                        value: "{selected_value(&current.tag)}",
                        onchange: move |evt| filter_signal.with_mut(|f| f.tag = selection(evt.value())),
                        option { value: "", {t!("filter-any-tag")} }
                        for tag in options.tags.iter() {
                            option { key: "{tag}", value: "{tag}", "{tag}" }
                        }
                    }
                }

                label { class: "filter-bar__field",
                    span { class: "filter-bar__label", {t!("filter-author-label")} }
                    select {
                        id: "author",
                        value: "{selected_value(&current.author)}",
                        onchange: move |evt| filter_signal.with_mut(|f| f.author = selection(evt.value())),
                        option { value: "", {t!("filter-any-author")} }
                        for author in options.authors.iter() {
                            option { key: "{author}", value: "{author}", "{author}" }
                        }
                    }
                }

                label { class: "filter-bar__field",
                    span { class: "filter-bar__label", {t!("filter-status-label")} }
                    select {
                        id: "status",
                        value: "{status_value}",
                        onchange: move |evt| filter_signal.with_mut(|f| f.status = Status::parse(&evt.value())),
                        option { value: "", {t!("filter-any-status")} }
                        for status in Status::ALL {
                            option { key: "{status.as_str()}", value: "{status.as_str()}", {status_label(status)} }
                        }
                    }
                }

                if !options.customers.is_empty() {
                    label { class: "filter-bar__field",
                        span { class: "filter-bar__label", {t!("filter-customer-label")} }
                        select {
                            id: "customer",
                            value: "{customer_value}",
                            onchange: move |evt| {
                                let value = evt.value();
                                platform::persist_customer(Some(value.as_str()));
                                filter_signal.with_mut(|f| {
                                    f.customer = if value == ALL_CUSTOMERS { None } else { Some(value) };
                                });
                            },
                            option { value: ALL_CUSTOMERS, {t!("filter-all-customers")} }
                            for customer in options.customers.iter() {
                                option { key: "{customer}", value: "{customer}", {format::capitalize_first(customer)} }
                            }
                        }
                    }
                }
            }

            div { class: "filter-bar__actions",
                button {
                    id: "clearFilters",
                    r#type: "button",
                    class: "button button--ghost",
                    disabled: !has_constraints,
                    onclick: move |_| filter_signal.with_mut(|f| f.clear()),
                    {t!("filter-clear")}
                }
            }
        }
    }
}
