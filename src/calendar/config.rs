use thiserror::Error;
use time::{Date, OffsetDateTime, Weekday};

/// Display and interaction settings, fixed for the lifetime of a render
/// cycle.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CalendarOptions {
    /// Pad every month row to six full weeks (42 cells) instead of the
    /// minimal 37.
    pub force_full_weeks: bool,
    /// Render the weekday header row above the month rows.
    pub show_days_of_week: bool,
    /// Draw a separator cell at each week boundary.
    pub show_week_separators: bool,
    /// Weekday shown in the grid's first column.
    pub first_day_of_week: Weekday,
    /// Two-click range mode instead of single-day picking.
    pub select_range: bool,
    /// Pre-highlighted day in single-day mode.
    pub selected_day: Date,
}

impl CalendarOptions {
    /// Number of day cells per month row (and weekday cells in the header).
    ///
    /// 37 covers the widest possible month layout (six leading cells plus 31
    /// days); 42 pads to six full weeks.
    pub fn total_days(&self) -> u8 {
        if self.force_full_weeks {
            42
        } else {
            37
        }
    }

    pub(super) fn first_day_index(&self) -> u8 {
        self.first_day_of_week.number_days_from_sunday()
    }
}

impl Default for CalendarOptions {
    fn default() -> CalendarOptions {
        CalendarOptions {
            force_full_weeks: false,
            show_days_of_week: true,
            show_week_separators: true,
            first_day_of_week: Weekday::Sunday,
            select_range: false,
            // Hosts wanting local-time semantics supply their own day.
            selected_day: OffsetDateTime::now_utc().date(),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
#[error("weekday index {0} out of range (expected 0-6)")]
pub struct WeekdayIndexError(pub u8);

/// Converts a zero-based weekday index to a [`Weekday`], with 0 denoting
/// Sunday.
pub fn weekday_from_index(index: u8) -> Result<Weekday, WeekdayIndexError> {
    match index {
        0 => Ok(Weekday::Sunday),
        1 => Ok(Weekday::Monday),
        2 => Ok(Weekday::Tuesday),
        3 => Ok(Weekday::Wednesday),
        4 => Ok(Weekday::Thursday),
        5 => Ok(Weekday::Friday),
        6 => Ok(Weekday::Saturday),
        _ => Err(WeekdayIndexError(index)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_days() {
        let mut options = CalendarOptions::default();
        assert_eq!(options.total_days(), 37);
        options.force_full_weeks = true;
        assert_eq!(options.total_days(), 42);
    }

    #[test]
    fn test_weekday_from_index() {
        assert_eq!(weekday_from_index(0), Ok(Weekday::Sunday));
        assert_eq!(weekday_from_index(1), Ok(Weekday::Monday));
        assert_eq!(weekday_from_index(6), Ok(Weekday::Saturday));
        assert_eq!(weekday_from_index(7), Err(WeekdayIndexError(7)));
    }
}
