use dioxus::prelude::*;

use crate::{
    dashboard::{use_dashboard, AutomationDetailPanel, AutomationList, FilterBar},
    t,
};

#[component]
pub fn Automations() -> Element {
    let _lang = try_use_context::<Signal<String>>().map(|code| code());

    let ctx = use_dashboard();
    let filter = ctx.filter;
    let state = (ctx.catalog)();
    let visible = state.filtered(&filter());
    let selected_id = use_signal(|| None::<String>);

    // A selection hidden by the current filter leaves the detail panel empty.
    let selected = selected_id()
        .and_then(|id| visible.iter().find(|automation| automation.id == id).cloned());

    rsx! {
        section { class: "page page-automations",
            h1 { {t!("automations-title")} }
            p { {t!("automations-intro")} }

            if let Some(err) = state.error.as_ref() {
                section { class: "dashboard-card",
                    p { class: "dashboard-card__placeholder", "{err}" }
                }
            } else {
                FilterBar { options: state.options.clone(), filter }
                div { class: "automations__panels",
                    AutomationList { automations: visible, selected_id }
                    AutomationDetailPanel { automation: selected }
                }
            }
        }
    }
}
