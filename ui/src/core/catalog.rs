//! Embedded automation catalog and site settings.

use serde::Deserialize;
use thiserror::Error;

use super::automation::Automation;

const EMBEDDED_CATALOG: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/data/automations.json"
));
const EMBEDDED_SITE: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/data/site.json"));

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Parses a catalog document: a JSON array of automations.
pub fn from_json(raw: &str) -> Result<Vec<Automation>, CatalogError> {
    Ok(serde_json::from_str(raw)?)
}

/// Loads the catalog compiled into the binary.
pub fn load_embedded() -> Result<Vec<Automation>, CatalogError> {
    let automations = from_json(EMBEDDED_CATALOG)?;
    tracing::debug!(count = automations.len(), "loaded automation catalog");
    Ok(automations)
}

/// Page-level settings. Every field falls back to its default when absent.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub title: String,
    pub chart_title: String,
    pub favicon_emoji: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Impactboard".into(),
            chart_title: "Automation Impact Trend".into(),
            favicon_emoji: "⚙️".into(),
        }
    }
}

impl SiteConfig {
    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Embedded settings, or the defaults if the embedded file is unreadable.
    pub fn load_embedded() -> Self {
        Self::from_json(EMBEDDED_SITE).unwrap_or_else(|err| {
            tracing::warn!("site config rejected ({err}); using defaults");
            Self::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_catalog_parses() {
        let automations = load_embedded().expect("embedded catalog");
        assert!(!automations.is_empty());
        assert!(automations.iter().any(|a| a.counts_toward_trend()));
    }

    #[test]
    fn invalid_catalog_surfaces_json_error() {
        let err = from_json("{ not json").unwrap_err();
        assert!(matches!(err, CatalogError::Json(_)));
        assert!(err.to_string().starts_with("catalog is not valid JSON"));
    }

    #[test]
    fn site_config_fills_missing_fields() {
        let config = SiteConfig::from_json(r#"{ "title": "Ops wins" }"#).unwrap();
        assert_eq!(config.title, "Ops wins");
        assert_eq!(config.chart_title, SiteConfig::default().chart_title);
        assert!(!SiteConfig::load_embedded().favicon_emoji.is_empty());
    }
}
