use time::{macros::format_description, Date};

use crate::{
    core::{automation::Status, window::ViewMode},
    t,
};

pub(crate) fn status_label(status: Status) -> String {
    match status {
        Status::Live => t!("status-live"),
        Status::Development => t!("status-development"),
        Status::Backlog => t!("status-backlog"),
    }
}

pub(crate) fn view_mode_label(mode: ViewMode) -> String {
    match mode {
        ViewMode::Hours => t!("trend-mode-hours"),
        ViewMode::Value => t!("trend-mode-value"),
        ViewMode::Both => t!("trend-mode-both"),
    }
}

pub(crate) fn format_closed(closed: Option<Date>) -> String {
    match closed {
        Some(date) => date
            .format(&format_description!(
                "[month repr:short] [day padding:none], [year]"
            ))
            .unwrap_or_else(|_| "—".to_string()),
        None => t!("automation-not-closed"),
    }
}

/// `<select>` value → optional constraint; the empty option means "any".
pub(crate) fn selection(raw: String) -> Option<String> {
    if raw.is_empty() {
        None
    } else {
        Some(raw)
    }
}

pub(crate) fn selected_value(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}
