//! Sliding window over the trend series plus the metric view toggle.

use super::trend::DataPoint;

/// Months visible in the chart at once.
pub const WINDOW_SIZE: usize = 6;

/// Which metric lines the chart draws.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewMode {
    Hours,
    Value,
    #[default]
    Both,
}

impl ViewMode {
    pub const ALL: [ViewMode; 3] = [ViewMode::Hours, ViewMode::Value, ViewMode::Both];
}

/// Navigation state of the trend chart.
///
/// `start` always stays within `0..=len.saturating_sub(WINDOW_SIZE)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrendWindow {
    start: usize,
    len: usize,
    view_mode: ViewMode,
}

impl TrendWindow {
    /// Opens on the most recent months.
    pub fn new(len: usize) -> Self {
        Self {
            start: Self::latest_start(len),
            len,
            view_mode: ViewMode::default(),
        }
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn can_go_previous(&self) -> bool {
        self.start > 0
    }

    pub fn can_go_next(&self) -> bool {
        self.start + WINDOW_SIZE < self.len
    }

    pub fn previous(&mut self) {
        if self.can_go_previous() {
            self.start -= 1;
        }
    }

    pub fn next(&mut self) {
        if self.can_go_next() {
            self.start = (self.start + 1).min(self.len - WINDOW_SIZE);
        }
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
    }

    /// Snaps back to the most recent months whenever the series length changes.
    /// Returns whether the window moved.
    pub fn sync_len(&mut self, len: usize) -> bool {
        if self.len == len {
            return false;
        }
        self.len = len;
        self.start = Self::latest_start(len);
        true
    }

    /// The slice of `series` currently on screen.
    pub fn visible<'a>(&self, series: &'a [DataPoint]) -> &'a [DataPoint] {
        let start = self.start.min(series.len());
        let end = (start + WINDOW_SIZE).min(series.len());
        &series[start..end]
    }

    pub fn shows_hours(&self) -> bool {
        matches!(self.view_mode, ViewMode::Hours | ViewMode::Both)
    }

    pub fn shows_value(&self) -> bool {
        matches!(self.view_mode, ViewMode::Value | ViewMode::Both)
    }

    fn latest_start(len: usize) -> usize {
        len.saturating_sub(WINDOW_SIZE)
    }
}

impl Default for TrendWindow {
    fn default() -> Self {
        Self::new(0)
    }
}
