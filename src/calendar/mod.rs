mod config;
mod header;
mod hits;
mod months;
mod picker;
mod widget;
pub use self::config::{weekday_from_index, CalendarOptions, WeekdayIndexError};
pub use self::header::{header_cells, HeaderCell};
pub use self::hits::{DayHit, HitMap};
pub use self::months::{MonthSlot, MonthSpan};
pub use self::picker::{Calendar, PickDateCallback, PickRangeCallback};
pub use self::widget::{CalendarWidget, GridMonth, MonthContext, MonthView};
use std::collections::BTreeMap;
use time::Date;

/// Host-supplied source of extra per-day class names, forwarded untouched to
/// the [`MonthView`].
///
/// Implemented for plain closures and for a mapping from class name to the
/// dates carrying it.
pub trait CustomClasses {
    fn classes_for(&self, date: Date) -> Vec<String>;
}

impl<F: Fn(Date) -> Vec<String>> CustomClasses for F {
    fn classes_for(&self, date: Date) -> Vec<String> {
        self(date)
    }
}

impl CustomClasses for BTreeMap<String, Vec<Date>> {
    fn classes_for(&self, date: Date) -> Vec<String> {
        self.iter()
            .filter(|(_, dates)| dates.contains(&date))
            .map(|(name, _)| name.clone())
            .collect()
    }
}

/// Class names attached to day cells by the bundled [`GridMonth`] view.
pub mod classes {
    pub const SELECTED: &str = "selected";
    pub const RANGE: &str = "range";
    pub const RANGE_LEFT: &str = "range-left";
    pub const RANGE_RIGHT: &str = "range-right";
    pub const PREV_MONTH: &str = "prev-month";
    pub const NEXT_MONTH: &str = "next-month";
}
