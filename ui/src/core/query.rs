//! `customer` query-parameter handling.
//!
//! The customer selection is the only filter persisted in the address bar so
//! that links to a customer's dashboard can be shared.

use url::{form_urlencoded, Url};

use super::filter::ALL_CUSTOMERS;

pub const CUSTOMER_PARAM: &str = "customer";

/// Reads the customer from a query string (with or without the leading `?`).
pub fn customer_from_query(query: &str) -> Option<String> {
    let query = query.strip_prefix('?').unwrap_or(query);
    form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == CUSTOMER_PARAM)
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty())
}

/// Rewrites `href` so it carries `customer`, dropping the parameter for the
/// "all customers" choice. Other parameters are preserved in order.
pub fn with_customer(href: &str, customer: Option<&str>) -> Result<String, url::ParseError> {
    let mut url = Url::parse(href)?;

    let retained: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(key, _)| key != CUSTOMER_PARAM)
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();
    let selected = customer.filter(|value| !value.is_empty() && *value != ALL_CUSTOMERS);

    if retained.is_empty() && selected.is_none() {
        url.set_query(None);
    } else {
        let mut pairs = url.query_pairs_mut();
        pairs.clear();
        for (key, value) in &retained {
            pairs.append_pair(key, value);
        }
        if let Some(value) = selected {
            pairs.append_pair(CUSTOMER_PARAM, value);
        }
    }

    Ok(url.to_string())
}
