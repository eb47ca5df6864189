//! Monthly cumulative impact series.
//!
//! The trend covers the trailing [`TREND_MONTHS`] calendar months ending at the
//! current month, oldest first. Each point accumulates every live automation
//! closed on or before that month's comparison date: the last day of the month,
//! or today for the current month so it reflects partial progress.

use time::{Date, Month, OffsetDateTime, UtcOffset};

use super::automation::Automation;
use super::filter::AutomationFilter;

pub const TREND_MONTHS: usize = 12;

/// One month of the cumulative series.
#[derive(Debug, Clone, PartialEq)]
pub struct DataPoint {
    /// Short English month label, e.g. `"Jan"`.
    pub month: String,
    /// Cumulative hours saved per month.
    pub hours: f64,
    /// Cumulative monthly value in USD, rounded to whole dollars.
    pub value: f64,
}

/// Builds the series for `automations` under `filter` as of `today`.
///
/// Returns an empty vector when no live automation with a closed date passes
/// the filter; callers treat that as "no data".
pub fn aggregate(automations: &[Automation], filter: &AutomationFilter, today: Date) -> Vec<DataPoint> {
    let contributing: Vec<(Date, f64, f64)> = filter
        .apply(automations)
        .into_iter()
        .filter(|automation| automation.counts_toward_trend())
        .filter_map(|automation| {
            automation.closed.map(|closed| {
                (
                    closed,
                    automation.time_saved_hours_per_month,
                    automation.monthly_value_usd(),
                )
            })
        })
        .collect();

    if contributing.is_empty() {
        return Vec::new();
    }

    trailing_months(today)
        .into_iter()
        .map(|bucket| {
            let (hours, value) = contributing
                .iter()
                .filter(|(closed, _, _)| *closed <= bucket.cutoff)
                .fold((0.0_f64, 0.0_f64), |(hours, value), (_, h, v)| {
                    (hours + h, value + v)
                });

            DataPoint {
                month: short_month_label(bucket.month).to_string(),
                hours,
                value: value.round(),
            }
        })
        .collect()
}

/// [`aggregate`] evaluated against the viewer's local calendar date.
pub fn aggregate_now(automations: &[Automation], filter: &AutomationFilter) -> Vec<DataPoint> {
    aggregate(automations, filter, local_today())
}

/// Today in the local time zone. Falls back to UTC when the offset can't be
/// determined (e.g. multi-threaded native processes on Unix).
pub fn local_today() -> Date {
    let now = OffsetDateTime::now_utc();
    let offset = UtcOffset::current_local_offset();
    if let Err(err) = &offset {
        tracing::debug!("local offset unavailable ({err}); using UTC");
    }
    date_in_offset(now, offset.ok())
}

fn date_in_offset(now: OffsetDateTime, offset: Option<UtcOffset>) -> Date {
    match offset {
        Some(offset) => now.to_offset(offset).date(),
        None => now.date(),
    }
}

/// Whether the series has anything worth drawing. Live automations closed only
/// in the future yield a full series of zeros, which renders as "no data" too.
pub fn has_visible_data(series: &[DataPoint]) -> bool {
    series
        .iter()
        .any(|point| point.hours > 0.0 || point.value > 0.0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct MonthBucket {
    month: Month,
    cutoff: Date,
}

fn trailing_months(today: Date) -> Vec<MonthBucket> {
    let mut buckets = Vec::with_capacity(TREND_MONTHS);
    buckets.push(MonthBucket {
        month: today.month(),
        cutoff: today,
    });

    let mut year = today.year();
    let mut month = today.month();
    for _ in 1..TREND_MONTHS {
        if month == Month::January {
            year -= 1;
        }
        month = month.previous();

        let last_day = month.length(year);
        if let Ok(cutoff) = Date::from_calendar_date(year, month, last_day) {
            buckets.push(MonthBucket { month, cutoff });
        }
    }

    buckets.reverse();
    buckets
}

pub fn short_month_label(month: Month) -> &'static str {
    match month {
        Month::January => "Jan",
        Month::February => "Feb",
        Month::March => "Mar",
        Month::April => "Apr",
        Month::May => "May",
        Month::June => "Jun",
        Month::July => "Jul",
        Month::August => "Aug",
        Month::September => "Sep",
        Month::October => "Oct",
        Month::November => "Nov",
        Month::December => "Dec",
    }
}

/// Headline numbers for the filtered catalog: every live automation counts,
/// dated or not.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ImpactTotals {
    pub total: usize,
    pub live: usize,
    pub hours_per_month: f64,
    pub annual_value_usd: f64,
}

impl ImpactTotals {
    pub fn from_records<'a, I>(automations: I) -> Self
    where
        I: IntoIterator<Item = &'a Automation>,
    {
        automations
            .into_iter()
            .fold(Self::default(), |mut totals, automation| {
                totals.total += 1;
                if automation.is_live() {
                    totals.live += 1;
                    totals.hours_per_month += automation.time_saved_hours_per_month;
                    totals.annual_value_usd += automation.annual_value_usd;
                }
                totals
            })
    }

    pub fn value_per_month(&self) -> f64 {
        (self.annual_value_usd / 12.0).round()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::automation::Status;
    use time::macros::{date, datetime, offset};

    fn live(id: &str, closed: Option<Date>, hours: f64, annual: f64) -> Automation {
        Automation {
            id: id.into(),
            name: id.into(),
            description: String::new(),
            author: "alex".into(),
            department: "Ops".into(),
            customer: None,
            status: Status::Live,
            tags: Vec::new(),
            time_saved_hours_per_month: hours,
            annual_value_usd: annual,
            closed,
        }
    }

    #[test]
    fn trailing_months_end_at_today_and_wrap_years() {
        let buckets = trailing_months(date!(2024 - 03 - 10));
        assert_eq!(buckets.len(), TREND_MONTHS);
        assert_eq!(buckets[0].month, Month::April);
        assert_eq!(buckets[0].cutoff, date!(2023 - 04 - 30));
        assert_eq!(buckets[10].cutoff, date!(2024 - 02 - 29));
        assert_eq!(buckets[11].cutoff, date!(2024 - 03 - 10));
    }

    #[test]
    fn single_record_scenario() {
        let records = vec![live("a", Some(date!(2024 - 01 - 15)), 10.0, 1200.0)];
        let series = aggregate(&records, &AutomationFilter::default(), date!(2024 - 06 - 20));

        assert_eq!(series.len(), TREND_MONTHS);
        let labels: Vec<&str> = series.iter().map(|p| p.month.as_str()).collect();
        assert_eq!(
            labels,
            ["Jul", "Aug", "Sep", "Oct", "Nov", "Dec", "Jan", "Feb", "Mar", "Apr", "May", "Jun"]
        );
        for point in &series[..6] {
            assert_eq!((point.hours, point.value), (0.0, 0.0), "{}", point.month);
        }
        for point in &series[6..] {
            assert_eq!((point.hours, point.value), (10.0, 100.0), "{}", point.month);
        }
    }

    #[test]
    fn current_month_uses_today_not_month_end() {
        let records = vec![
            live("early", Some(date!(2024 - 06 - 05)), 3.0, 0.0),
            live("later", Some(date!(2024 - 06 - 25)), 7.0, 0.0),
        ];
        let series = aggregate(&records, &AutomationFilter::default(), date!(2024 - 06 - 20));
        assert_eq!(series.last().map(|p| p.hours), Some(3.0));
    }

    #[test]
    fn empty_and_non_contributing_inputs_yield_no_series() {
        let filter = AutomationFilter::default();
        let today = date!(2024 - 06 - 20);
        assert!(aggregate(&[], &filter, today).is_empty());

        let mut backlog = live("b", Some(date!(2024 - 01 - 01)), 5.0, 600.0);
        backlog.status = Status::Backlog;
        let undated = live("u", None, 5.0, 600.0);
        assert!(aggregate(&[backlog, undated], &filter, today).is_empty());
    }

    #[test]
    fn filter_is_applied_before_aggregation() {
        let mut finance = live("f", Some(date!(2024 - 02 - 01)), 2.0, 120.0);
        finance.department = "Finance".into();
        let ops = live("o", Some(date!(2024 - 02 - 01)), 8.0, 480.0);
        let filter = AutomationFilter {
            department: Some("Finance".into()),
            ..Default::default()
        };

        let series = aggregate(&[finance, ops], &filter, date!(2024 - 06 - 20));
        let last = series.last().cloned().unwrap();
        assert_eq!(last.hours, 2.0);
        assert_eq!(last.value, 10.0);
    }

    #[test]
    fn value_is_rounded_after_summing() {
        let records = vec![
            live("a", Some(date!(2024 - 01 - 01)), 0.0, 100.0),
            live("b", Some(date!(2024 - 01 - 01)), 0.0, 100.0),
        ];
        // 8.33 + 8.33 = 16.67 -> 17 (rounding each first would give 16)
        let series = aggregate(&records, &AutomationFilter::default(), date!(2024 - 02 - 01));
        assert_eq!(series.last().map(|p| p.value), Some(17.0));
    }

    #[test]
    fn future_closures_are_not_visible() {
        let records = vec![live("soon", Some(date!(2030 - 01 - 01)), 4.0, 480.0)];
        let series = aggregate(&records, &AutomationFilter::default(), date!(2024 - 06 - 20));
        assert_eq!(series.len(), TREND_MONTHS);
        assert!(!has_visible_data(&series));
        assert!(!has_visible_data(&[]));
    }

    #[test]
    fn local_date_decides_the_current_month() {
        // 2024-06-30 22:00 UTC is already July 1st at UTC+10.
        let now = datetime!(2024 - 06 - 30 22:00 UTC);
        let today = date_in_offset(now, Some(offset!(+10)));
        assert_eq!(today, date!(2024 - 07 - 01));
        assert_eq!(date_in_offset(now, None), date!(2024 - 06 - 30));

        let records = vec![live("a", Some(date!(2024 - 07 - 01)), 5.0, 0.0)];
        let series = aggregate(&records, &AutomationFilter::default(), today);
        assert_eq!(series.last().map(|p| p.month.as_str()), Some("Jul"));
        assert_eq!(series.last().map(|p| p.hours), Some(5.0));
        assert_eq!(series.first().map(|p| p.month.as_str()), Some("Aug"));
    }

    #[test]
    fn totals_only_count_live_automations() {
        let mut backlog = live("b", None, 9.0, 900.0);
        backlog.status = Status::Backlog;
        let records = vec![live("a", None, 4.0, 1200.0), backlog];
        let totals = ImpactTotals::from_records(&records);
        assert_eq!(totals.total, 2);
        assert_eq!(totals.live, 1);
        assert_eq!(totals.hours_per_month, 4.0);
        assert_eq!(totals.value_per_month(), 100.0);
    }
}
