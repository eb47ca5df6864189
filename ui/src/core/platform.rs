//! Platform glue for the address bar. Only the web build has one; native
//! builds keep the customer selection in memory.

#[cfg(target_arch = "wasm32")]
use super::query;

/// Customer preselected by the `customer` query parameter, if any.
#[cfg(target_arch = "wasm32")]
pub fn initial_customer() -> Option<String> {
    let search = web_sys::window()?.location().search().ok()?;
    query::customer_from_query(&search)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn initial_customer() -> Option<String> {
    None
}

/// Mirrors the customer selection into the address bar without reloading.
#[cfg(target_arch = "wasm32")]
pub fn persist_customer(customer: Option<&str>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Ok(href) = window.location().href() else {
        return;
    };

    match query::with_customer(&href, customer) {
        Ok(next) => {
            let replaced = window.history().and_then(|history| {
                history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&next))
            });
            if let Err(err) = replaced {
                tracing::warn!(?err, "couldn't update the address bar");
            }
        }
        Err(err) => tracing::warn!("couldn't rewrite {href} ({err})"),
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn persist_customer(customer: Option<&str>) {
    tracing::debug!(?customer, "customer selection kept in memory");
}
