mod list;
pub use list::AutomationList;

mod detail;
pub use detail::AutomationDetailPanel;

mod highlights;
pub use highlights::ImpactHighlights;

mod filters;
pub use filters::FilterBar;

mod trend_chart;
pub use trend_chart::TrendChart;

mod filterable;
pub use filterable::FilterableTrendChart;

mod utils;
pub(crate) use utils::*;

use dioxus::prelude::*;

use crate::core::{
    automation::Automation,
    catalog::{self, SiteConfig},
    filter::{AutomationFilter, FilterOptions},
    platform,
};

/// Loaded catalog plus the dropdown options derived from it, or the load error.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogState {
    pub automations: Vec<Automation>,
    pub options: FilterOptions,
    pub error: Option<String>,
}

impl CatalogState {
    pub fn load() -> Self {
        match catalog::load_embedded() {
            Ok(automations) => Self::from_automations(automations),
            Err(err) => {
                tracing::warn!("catalog failed to load: {err}");
                Self {
                    automations: Vec::new(),
                    options: FilterOptions::default(),
                    error: Some(format!("Couldn't load automations: {err}")),
                }
            }
        }
    }

    pub fn from_automations(automations: Vec<Automation>) -> Self {
        let options = FilterOptions::from_records(&automations);
        Self {
            automations,
            options,
            error: None,
        }
    }

    /// Owned copies of the automations passing `filter`, in catalog order.
    pub fn filtered(&self, filter: &AutomationFilter) -> Vec<Automation> {
        filter
            .apply(&self.automations)
            .into_iter()
            .cloned()
            .collect()
    }
}

/// Dashboard state shared by every page: the catalog, the active filter and
/// the site settings.
#[derive(Clone, Copy)]
pub struct DashboardContext {
    pub catalog: Signal<CatalogState>,
    pub filter: Signal<AutomationFilter>,
    pub site: Signal<SiteConfig>,
}

/// Installs the shared dashboard state. Call once from the platform `App`.
pub fn use_dashboard_provider() -> DashboardContext {
    use_context_provider(|| DashboardContext {
        catalog: Signal::new(CatalogState::load()),
        filter: Signal::new(AutomationFilter {
            customer: platform::initial_customer(),
            ..Default::default()
        }),
        site: Signal::new(SiteConfig::load_embedded()),
    })
}

/// Shared dashboard state installed by [`use_dashboard_provider`].
pub fn use_dashboard() -> DashboardContext {
    use_context::<DashboardContext>()
}
