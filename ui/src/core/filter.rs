//! Filter predicate shared by the dashboard controls, the list and the trend aggregator.
//!
//! Every field is optional and the fields are AND-combined. An empty value
//! means "no constraint", so a default filter matches every record.

use std::collections::BTreeSet;

use super::automation::{Automation, Status};

/// Customer dropdown value that disables the customer constraint.
pub const ALL_CUSTOMERS: &str = "all";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AutomationFilter {
    /// Case-insensitive substring matched against name and description.
    pub search: String,
    pub department: Option<String>,
    pub tag: Option<String>,
    pub author: Option<String>,
    pub status: Option<Status>,
    /// Resolved `customer` query parameter. `"all"` behaves like `None`.
    pub customer: Option<String>,
}

impl AutomationFilter {
    pub fn matches(&self, automation: &Automation) -> bool {
        let needle = self.search.trim().to_lowercase();
        self.matches_with_needle(automation, &needle)
    }

    /// Applies the filter, lower-casing the search term once for the whole list.
    pub fn apply<'a>(&self, automations: &'a [Automation]) -> Vec<&'a Automation> {
        let needle = self.search.trim().to_lowercase();
        automations
            .iter()
            .filter(|automation| self.matches_with_needle(automation, &needle))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.search.trim().is_empty()
            && active(&self.department).is_none()
            && active(&self.tag).is_none()
            && active(&self.author).is_none()
            && self.status.is_none()
            && self.customer_constraint().is_none()
    }

    /// Resets the form controls (the "clear filters" button). The customer
    /// lives in the address bar and survives a clear.
    pub fn clear(&mut self) {
        let customer = self.customer.take();
        *self = Self {
            customer,
            ..Self::default()
        };
    }

    pub fn customer_constraint(&self) -> Option<&str> {
        active(&self.customer).filter(|customer| *customer != ALL_CUSTOMERS)
    }

    fn matches_with_needle(&self, automation: &Automation, needle: &str) -> bool {
        let matches_search = needle.is_empty()
            || automation.name.to_lowercase().contains(needle)
            || automation.description.to_lowercase().contains(needle);

        let matches_department =
            active(&self.department).map_or(true, |dept| automation.department == dept);
        let matches_tag = active(&self.tag)
            .map_or(true, |tag| automation.tags.iter().any(|candidate| candidate == tag));
        let matches_author = active(&self.author).map_or(true, |author| automation.author == author);
        let matches_status = self.status.map_or(true, |status| automation.status == status);
        let matches_customer = self.customer_constraint().map_or(true, |customer| {
            automation.customer.as_deref().unwrap_or("") == customer
        });

        matches_search
            && matches_department
            && matches_tag
            && matches_author
            && matches_status
            && matches_customer
    }
}

fn active(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Distinct dropdown values derived from the catalog, sorted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterOptions {
    pub departments: Vec<String>,
    pub tags: Vec<String>,
    pub authors: Vec<String>,
    pub customers: Vec<String>,
}

impl FilterOptions {
    pub fn from_records(automations: &[Automation]) -> Self {
        let mut departments = BTreeSet::new();
        let mut tags = BTreeSet::new();
        let mut authors = BTreeSet::new();
        let mut customers = BTreeSet::new();

        for automation in automations {
            departments.insert(automation.department.clone());
            authors.insert(automation.author.clone());
            tags.extend(automation.tags.iter().cloned());
            if let Some(customer) = automation.customer.as_ref().filter(|c| !c.is_empty()) {
                customers.insert(customer.clone());
            }
        }

        Self {
            departments: departments.into_iter().collect(),
            tags: tags.into_iter().collect(),
            authors: authors.into_iter().collect(),
            customers: customers.into_iter().collect(),
        }
    }
}
