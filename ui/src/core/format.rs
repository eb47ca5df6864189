//! Formatting helpers for presenting impact figures.

/// Tooltip / label form for hours, e.g. `12h` or `2.5h`.
pub fn format_hours(value: f64) -> String {
    if !value.is_finite() {
        return "—".into();
    }
    format!("{value}h")
}

/// Whole US dollars with thousands separators, e.g. `$12,345`.
pub fn format_usd(value: f64) -> String {
    if !value.is_finite() {
        return "—".into();
    }
    let rounded = value.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    let digits = format!("{:.0}", rounded.abs());
    format!("{sign}${}", group_thousands(&digits))
}

/// Compact axis tick for dollar values, e.g. `$12k`. Halves round away from
/// zero (`$2.5k` → `$3k`).
pub fn format_usd_thousands(value: f64) -> String {
    format!("${:.0}k", (value / 1000.0).round())
}

pub fn format_number(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return "—".into();
    }
    format!("{value:.decimals$}")
}

/// Dropdown label for a customer slug: first letter upper-cased.
pub fn capitalize_first(raw: &str) -> String {
    let mut chars = raw.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
