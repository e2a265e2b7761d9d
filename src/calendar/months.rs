use std::fmt;
use time::{Date, Month};

/// One calendar month fully or partially overlapping the displayed span.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct MonthSlot {
    pub month: Month,
    pub year: i32,
}

impl MonthSlot {
    /// Month of year as 1-12.
    pub fn number(&self) -> u8 {
        u8::from(self.month)
    }
}

impl fmt::Display for MonthSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.month, self.year)
    }
}

/// Iterator over the months overlapping an inclusive date span, ascending
/// from the start's month.
///
/// The span always yields at least one month when the endpoints share a
/// month of year, even if the end date precedes the start date.  The
/// month-of-year comparison deliberately ignores the year; it is how the
/// widget has always behaved.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MonthSpan {
    cursor: Option<Date>,
    end: Date,
}

impl MonthSpan {
    pub(super) fn new(start: Date, end: Date) -> MonthSpan {
        MonthSpan {
            cursor: Some(start),
            end,
        }
    }
}

impl Iterator for MonthSpan {
    type Item = MonthSlot;

    fn next(&mut self) -> Option<MonthSlot> {
        let cursor = self.cursor?;
        if cursor > self.end && cursor.month() != self.end.month() {
            self.cursor = None;
            return None;
        }
        let slot = MonthSlot {
            month: cursor.month(),
            year: cursor.year(),
        };
        self.cursor = month_after(cursor);
        Some(slot)
    }
}

impl std::iter::FusedIterator for MonthSpan {}

// Advances by one calendar month, clamping the day of month to the target
// month's length.  Returns `None` when that would fall off the end of time.
fn month_after(date: Date) -> Option<Date> {
    let year = match date.month() {
        Month::December => date.year().checked_add(1)?,
        _ => date.year(),
    };
    let month = date.month().next();
    let day = date.day().min(month.length(year));
    Date::from_calendar_date(year, month, day).ok()
}
