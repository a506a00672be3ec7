use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Number of slots in one month grid: 6 rows of 7 weekday columns.
pub const GRID_CELLS: usize = 42;

/// Direction for stepping a calendar cursor one month at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavDirection {
    Previous,
    Next,
}

/// Month/year cursor for a single calendar pane.
///
/// Months are 1-based (1 = January). Each pane of the picker owns one cursor
/// and navigates it independently of the other pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthCursor {
    pub month: u32,
    pub year: i32,
}

impl Default for MonthCursor {
    fn default() -> Self {
        Self::for_date(chrono::Local::now().date_naive())
    }
}

impl MonthCursor {
    /// Cursor for the month containing `date`.
    pub fn for_date(date: NaiveDate) -> Self {
        Self {
            month: date.month(),
            year: date.year(),
        }
    }

    /// Step one month forward or backward, rolling the year over at the
    /// December/January boundary.
    #[must_use]
    pub fn advance(self, direction: NavDirection) -> Self {
        match direction {
            NavDirection::Previous => {
                if self.month == 1 {
                    Self { month: 12, year: self.year - 1 }
                } else {
                    Self { month: self.month - 1, year: self.year }
                }
            }
            NavDirection::Next => {
                if self.month == 12 {
                    Self { month: 1, year: self.year + 1 }
                } else {
                    Self { month: self.month + 1, year: self.year }
                }
            }
        }
    }

    /// First day of the cursor month.
    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or_default()
    }

    /// Number of days in the cursor month.
    pub fn day_count(&self) -> u32 {
        days_in_month(self.year, self.month)
    }

    /// Fixed 42-cell grid for the cursor month.
    ///
    /// Leading `None` padding aligns day 1 with its weekday column (Sunday
    /// first), one `Some(date)` cell per day of the month follows, and
    /// trailing `None` padding fills the remainder of the 6 rows.
    pub fn grid(&self) -> Vec<Option<NaiveDate>> {
        let mut cells = Vec::with_capacity(GRID_CELLS);
        let leading = self.first_day().weekday().num_days_from_sunday() as usize;
        cells.resize(leading, None);
        for day in 1..=self.day_count() {
            cells.push(NaiveDate::from_ymd_opt(self.year, self.month, day));
        }
        cells.resize(GRID_CELLS, None);
        cells
    }
}

/// Days in a given month, accounting for leap years.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) { 29 } else { 28 }
        }
        _ => 30,
    }
}

/// Whether a year is a leap year.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

/// Whether a date falls on Saturday or Sunday.
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Every date in the closed interval `[start, end]`; empty when `start > end`.
pub fn dates_between(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    let mut dates = Vec::new();
    let mut current = start;
    while current <= end {
        dates.push(current);
        match current.succ_opt() {
            Some(next) => current = next,
            None => break,
        }
    }
    dates
}

/// The weekend dates in the closed interval `[start, end]`, oldest first.
pub fn weekend_dates(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    dates_between(start, end)
        .into_iter()
        .filter(|date| is_weekend(*date))
        .collect()
}

/// Phase of the two-click range selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionPhase {
    /// No start date picked yet.
    Empty,
    /// Start picked, waiting on the closing click.
    PartialStart,
    /// Both endpoints committed.
    Complete,
}

/// Result of feeding one clicked date to the selection state machine.
///
/// The caller owns the notification: fire the change callback when the
/// outcome is `Completed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Weekend dates are not selectable endpoints; nothing changed.
    Ignored,
    /// A new range was started with this date.
    Started(NaiveDate),
    /// The range is committed with both endpoints in order.
    Completed { start: NaiveDate, end: NaiveDate },
}

/// The picker's selected date range.
///
/// Fields are private so the invariant holds by construction: an end date is
/// only ever present together with a start date, and `start <= end`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeSelection {
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
}

impl RangeSelection {
    pub fn start(&self) -> Option<NaiveDate> {
        self.start
    }

    pub fn end(&self) -> Option<NaiveDate> {
        self.end
    }

    pub fn phase(&self) -> SelectionPhase {
        match (self.start, self.end) {
            (None, _) => SelectionPhase::Empty,
            (Some(_), None) => SelectionPhase::PartialStart,
            (Some(_), Some(_)) => SelectionPhase::Complete,
        }
    }

    /// Advance the selection with a clicked date.
    ///
    /// Weekend clicks never change state. A click while a range is already
    /// complete starts a fresh selection. When the closing click lands before
    /// the start, the endpoints are swapped so `start <= end` holds
    /// regardless of click order.
    pub fn apply_click(&mut self, date: NaiveDate) -> ClickOutcome {
        if is_weekend(date) {
            return ClickOutcome::Ignored;
        }
        match (self.start, self.end) {
            (Some(start), None) => {
                let (start, end) = if date < start { (date, start) } else { (start, date) };
                self.start = Some(start);
                self.end = Some(end);
                ClickOutcome::Completed { start, end }
            }
            _ => {
                self.start = Some(date);
                self.end = None;
                ClickOutcome::Started(date)
            }
        }
    }

    /// Commit a range directly, normalizing endpoint order.
    ///
    /// Programmatic selections are not subject to the weekend-endpoint guard.
    pub fn select_range(&mut self, start: NaiveDate, end: NaiveDate) {
        let (start, end) = if start <= end { (start, end) } else { (end, start) };
        self.start = Some(start);
        self.end = Some(end);
    }

    /// Commit the `n`-day range ending on `today`, inclusive.
    pub fn select_last_n_days(&mut self, n: u32, today: NaiveDate) {
        let span = u64::from(n.saturating_sub(1));
        let start = today.checked_sub_days(Days::new(span)).unwrap_or(today);
        self.select_range(start, today);
    }

    /// Reset to an empty selection.
    pub fn clear(&mut self) {
        self.start = None;
        self.end = None;
    }

    /// Whether `date` lies within the committed closed interval.
    ///
    /// Always false while the selection is incomplete.
    pub fn contains(&self, date: NaiveDate) -> bool {
        match (self.start, self.end) {
            (Some(start), Some(end)) => start <= date && date <= end,
            _ => false,
        }
    }

    /// Weekend dates inside the committed range; empty while incomplete.
    pub fn weekend_dates(&self) -> Vec<NaiveDate> {
        match (self.start, self.end) {
            (Some(start), Some(end)) => weekend_dates(start, end),
            _ => Vec::new(),
        }
    }

    /// Notification payload for a complete selection.
    pub fn report(&self) -> Option<RangeReport> {
        match (self.start, self.end) {
            (Some(start), Some(end)) => Some(RangeReport {
                start,
                end,
                weekends: weekend_dates(start, end),
            }),
            _ => None,
        }
    }
}

/// Payload delivered to the host when a range is committed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeReport {
    pub start: NaiveDate,
    pub end: NaiveDate,
    /// Weekend dates inside `[start, end]`, oldest first.
    pub weekends: Vec<NaiveDate>,
}

/// A labeled quick-select range configured by the host application.
///
/// Rendered as a footer button by the picker; the selection state machine
/// itself never reads these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredefinedRange {
    pub label: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// Classified render data for one grid slot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DayCell {
    /// `None` for padding slots before and after the month's days.
    pub date: Option<NaiveDate>,
    pub is_weekend: bool,
    pub in_range: bool,
}

/// The 42-cell grid for one pane with the weekend and range predicates
/// applied per cell. Padding slots classify as neither.
pub fn classify_grid(cursor: MonthCursor, selection: &RangeSelection) -> Vec<DayCell> {
    cursor
        .grid()
        .into_iter()
        .map(|date| DayCell {
            date,
            is_weekend: date.map_or(false, is_weekend),
            in_range: date.map_or(false, |d| selection.contains(d)),
        })
        .collect()
}
