//! Automation records as they arrive from the catalog.

use serde::{Deserialize, Deserializer};
use time::{
    format_description::well_known::Rfc3339, macros::format_description, Date, OffsetDateTime, Time,
};

/// Deployment stage of an automation. Only `Live` automations count toward savings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Live,
    Development,
    Backlog,
}

impl Status {
    pub const ALL: [Status; 3] = [Status::Live, Status::Development, Status::Backlog];

    /// Wire value, also used as the `<option>` value in the status dropdown.
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Live => "live",
            Status::Development => "development",
            Status::Backlog => "backlog",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == raw)
    }

    /// Suggested CSS modifier, e.g. `status-badge--live`.
    pub fn css_class(self) -> &'static str {
        match self {
            Status::Live => "status-badge--live",
            Status::Development => "status-badge--development",
            Status::Backlog => "status-badge--backlog",
        }
    }
}

/// One tracked automation / process-improvement item.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Automation {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub author: String,
    pub department: String,
    #[serde(default)]
    pub customer: Option<String>,
    pub status: Status,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub time_saved_hours_per_month: f64,
    #[serde(default)]
    pub annual_value_usd: f64,
    /// Completion date. Missing or unparseable values become `None`.
    #[serde(default, deserialize_with = "deserialize_closed")]
    pub closed: Option<Date>,
}

impl Automation {
    pub fn is_live(&self) -> bool {
        self.status == Status::Live
    }

    /// Live and dated: the only records the impact trend accumulates.
    pub fn counts_toward_trend(&self) -> bool {
        self.is_live() && self.closed.is_some()
    }

    pub fn monthly_value_usd(&self) -> f64 {
        self.annual_value_usd / 12.0
    }
}

/// Accepts `YYYY-MM-DD`, a full RFC 3339 timestamp, or a timestamp without an
/// offset (`T` or space separated, seconds and fraction optional). Only the
/// date part is kept.
pub fn parse_closed_date(raw: &str) -> Option<Date> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    Date::parse(trimmed, format_description!("[year]-[month]-[day]"))
        .ok()
        .or_else(|| {
            OffsetDateTime::parse(trimmed, &Rfc3339)
                .ok()
                .map(|stamp| stamp.date())
        })
        .or_else(|| parse_naive_timestamp(trimmed))
}

fn parse_naive_timestamp(raw: &str) -> Option<Date> {
    let (date, time) = raw.split_once(|c: char| c == 'T' || c == ' ')?;
    let date = Date::parse(date, format_description!("[year]-[month]-[day]")).ok()?;

    Time::parse(time, format_description!("[hour]:[minute]:[second].[subsecond]"))
        .or_else(|_| Time::parse(time, format_description!("[hour]:[minute]:[second]")))
        .or_else(|_| Time::parse(time, format_description!("[hour]:[minute]")))
        .ok()?;

    Some(date)
}

fn deserialize_closed<'de, D>(deserializer: D) -> Result<Option<Date>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw
        .as_ref()
        .and_then(serde_json::Value::as_str)
        .and_then(parse_closed_date))
}
