//! Property-based tests for the trend aggregator and the chart window.
//!
//! Invariants:
//! - the series is either empty or exactly twelve months long
//! - cumulative hours and value never decrease month over month
//! - automations that are not live never change the series
//! - the window start stays in bounds under any sequence of operations

use proptest::prelude::*;
use time::{Date, Month};

use ui::core::{
    automation::{Automation, Status},
    filter::AutomationFilter,
    trend::{self, TREND_MONTHS},
    window::{TrendWindow, ViewMode, WINDOW_SIZE},
};

// =============================================================================
// Proptest strategies
// =============================================================================

fn arb_status() -> impl Strategy<Value = Status> {
    prop_oneof![
        Just(Status::Live),
        Just(Status::Development),
        Just(Status::Backlog),
    ]
}

fn arb_date() -> impl Strategy<Value = Date> {
    (2020i32..=2027, 1u8..=12, 1u8..=28).prop_map(|(year, month, day)| {
        let month = Month::try_from(month).expect("month in range");
        Date::from_calendar_date(year, month, day).expect("valid calendar date")
    })
}

fn arb_automation() -> impl Strategy<Value = Automation> {
    (
        "[a-z]{1,8}",
        arb_status(),
        prop::option::of(arb_date()),
        0.0f64..200.0,
        0.0f64..250_000.0,
        prop::sample::select(vec!["Finance", "Support", "IT"]),
    )
        .prop_map(|(id, status, closed, hours, annual, department)| Automation {
            name: id.clone(),
            id,
            description: String::new(),
            author: "someone".into(),
            department: department.into(),
            customer: None,
            status,
            tags: Vec::new(),
            time_saved_hours_per_month: hours,
            annual_value_usd: annual,
            closed,
        })
}

#[derive(Debug, Clone)]
enum WindowOp {
    Previous,
    Next,
    Mode(ViewMode),
    Resize(usize),
}

fn arb_window_op() -> impl Strategy<Value = WindowOp> {
    prop_oneof![
        Just(WindowOp::Previous),
        Just(WindowOp::Next),
        prop::sample::select(ViewMode::ALL.to_vec()).prop_map(WindowOp::Mode),
        (0usize..=24).prop_map(WindowOp::Resize),
    ]
}

// =============================================================================
// Aggregator
// =============================================================================

proptest! {
    #[test]
    fn series_is_empty_or_twelve_months(
        records in prop::collection::vec(arb_automation(), 0..16),
        today in arb_date(),
    ) {
        let series = trend::aggregate(&records, &AutomationFilter::default(), today);
        prop_assert!(series.is_empty() || series.len() == TREND_MONTHS);
        prop_assert_eq!(
            series.is_empty(),
            !records.iter().any(|a| a.status == Status::Live && a.closed.is_some())
        );
    }

    #[test]
    fn cumulative_series_never_decreases(
        records in prop::collection::vec(arb_automation(), 1..16),
        today in arb_date(),
    ) {
        let series = trend::aggregate(&records, &AutomationFilter::default(), today);
        for pair in series.windows(2) {
            prop_assert!(pair[1].hours >= pair[0].hours);
            prop_assert!(pair[1].value >= pair[0].value);
        }
    }

    #[test]
    fn non_live_automations_never_contribute(
        records in prop::collection::vec(arb_automation(), 0..16),
        today in arb_date(),
    ) {
        let live_only: Vec<Automation> = records
            .iter()
            .filter(|a| a.status == Status::Live)
            .cloned()
            .collect();
        let filter = AutomationFilter::default();
        prop_assert_eq!(
            trend::aggregate(&records, &filter, today),
            trend::aggregate(&live_only, &filter, today)
        );
    }

    #[test]
    fn department_filter_matches_prefiltered_input(
        records in prop::collection::vec(arb_automation(), 0..16),
        today in arb_date(),
    ) {
        let filter = AutomationFilter {
            department: Some("Finance".into()),
            ..Default::default()
        };
        let finance: Vec<Automation> = records
            .iter()
            .filter(|a| a.department == "Finance")
            .cloned()
            .collect();
        prop_assert_eq!(
            trend::aggregate(&records, &filter, today),
            trend::aggregate(&finance, &AutomationFilter::default(), today)
        );
    }
}

// =============================================================================
// Window
// =============================================================================

proptest! {
    #[test]
    fn window_start_stays_in_bounds(
        len in 0usize..=24,
        ops in prop::collection::vec(arb_window_op(), 0..64),
    ) {
        let mut window = TrendWindow::new(len);
        let mut current_len = len;

        for op in ops {
            match op {
                WindowOp::Previous => window.previous(),
                WindowOp::Next => window.next(),
                WindowOp::Mode(mode) => window.set_view_mode(mode),
                WindowOp::Resize(next_len) => {
                    window.sync_len(next_len);
                    current_len = next_len;
                }
            }
            prop_assert!(window.start() <= current_len.saturating_sub(WINDOW_SIZE));
            prop_assert_eq!(window.len(), current_len);
        }
    }

    #[test]
    fn visible_slice_is_at_most_six_months(
        len in 0usize..=24,
        moves in prop::collection::vec(any::<bool>(), 0..32),
    ) {
        let series: Vec<_> = (0..len)
            .map(|i| trend::DataPoint { month: format!("m{i}"), hours: i as f64, value: 0.0 })
            .collect();
        let mut window = TrendWindow::new(len);
        for forward in moves {
            if forward { window.next() } else { window.previous() }
            prop_assert_eq!(window.visible(&series).len(), len.min(WINDOW_SIZE));
        }
    }

    #[test]
    fn mode_changes_keep_the_window_position(
        len in 0usize..=24,
        steps_back in 0usize..12,
        mode in prop::sample::select(ViewMode::ALL.to_vec()),
    ) {
        let mut window = TrendWindow::new(len);
        for _ in 0..steps_back {
            window.previous();
        }
        let start = window.start();
        window.set_view_mode(mode);
        prop_assert_eq!(window.start(), start);
        prop_assert_eq!(window.view_mode(), mode);
    }
}
