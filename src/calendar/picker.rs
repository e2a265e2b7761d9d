use super::hits::HitMap;
use super::months::MonthSpan;
use super::{CalendarOptions, CustomClasses};
use std::fmt;
use time::Date;

pub type PickDateCallback = Box<dyn FnMut(Date, &[String])>;
pub type PickRangeCallback = Box<dyn FnMut(Date, Date)>;

/// The calendar container: owns the requested date span, the display
/// options, and the in-progress range selection.
///
/// Day-level gestures arrive through [`day_clicked`](Calendar::day_clicked)
/// and [`day_hovered`](Calendar::day_hovered) (or their position-resolving
/// wrappers [`click_at`](Calendar::click_at) and
/// [`hover_at`](Calendar::hover_at)) and either fire a host callback or
/// advance the range-selection state.  Both handlers return whether the
/// widget needs a redraw.
pub struct Calendar {
    pub(super) start: Date,
    pub(super) end: Date,
    pub(super) options: CalendarOptions,
    pub(super) custom_classes: Option<Box<dyn CustomClasses>>,
    on_pick_date: Option<PickDateCallback>,
    on_pick_range: Option<PickRangeCallback>,
    selecting_range: Option<(Date, Date)>,
    pub(super) hits: HitMap,
}

impl Calendar {
    pub fn new(start: Date, end: Date) -> Calendar {
        Calendar {
            start,
            end,
            options: CalendarOptions::default(),
            custom_classes: None,
            on_pick_date: None,
            on_pick_range: None,
            selecting_range: None,
            hits: HitMap::default(),
        }
    }

    pub fn options(mut self, options: CalendarOptions) -> Calendar {
        self.options = options;
        self
    }

    /// Callback fired in single-day mode with the clicked date and its
    /// class names.
    pub fn on_pick_date<F: FnMut(Date, &[String]) + 'static>(mut self, callback: F) -> Calendar {
        self.on_pick_date = Some(Box::new(callback));
        self
    }

    /// Callback fired when a range completes, dates in chronological order.
    pub fn on_pick_range<F: FnMut(Date, Date) + 'static>(mut self, callback: F) -> Calendar {
        self.on_pick_range = Some(Box::new(callback));
        self
    }

    pub fn custom_classes<C: CustomClasses + 'static>(mut self, custom: C) -> Calendar {
        self.custom_classes = Some(Box::new(custom));
        self
    }

    /// The months to display, ascending from `start`'s month.  Recomputed
    /// on every call; `start` and `end` are never mutated.
    pub fn months(&self) -> MonthSpan {
        MonthSpan::new(self.start, self.end)
    }

    /// The range being built, ordered by click rather than by calendar.
    pub fn selecting_range(&self) -> Option<(Date, Date)> {
        self.selecting_range
    }

    /// Geometry of the most recent render.
    pub fn hits(&self) -> &HitMap {
        &self.hits
    }

    /// A day cell was clicked.  `date` is `None` when the click landed on
    /// an adjacent-month padding cell, which never changes anything.
    pub fn day_clicked(&mut self, date: Option<Date>, classes: &[String]) -> bool {
        let Some(date) = date else {
            return false;
        };
        if !self.options.select_range {
            if let Some(callback) = self.on_pick_date.as_mut() {
                callback(date, classes);
            }
            return false;
        }
        match self.selecting_range.take() {
            None => {
                self.selecting_range = Some((date, date));
            }
            Some((anchor, _)) => {
                if let Some(callback) = self.on_pick_range.as_mut() {
                    if anchor > date {
                        callback(date, anchor);
                    } else {
                        callback(anchor, date);
                    }
                }
            }
        }
        true
    }

    /// The pointer entered a day cell.  Only the preview endpoint of an
    /// in-progress range follows the hover; the anchor never moves.
    pub fn day_hovered(&mut self, date: Option<Date>) -> bool {
        let Some(date) = date else {
            return false;
        };
        if let Some((_, preview)) = self.selecting_range.as_mut() {
            *preview = date;
            true
        } else {
            false
        }
    }

    /// Resolves a terminal position against the last render and forwards
    /// the click to [`day_clicked`](Calendar::day_clicked).
    pub fn click_at(&mut self, column: u16, row: u16) -> bool {
        let target = self
            .hits
            .at(column, row)
            .map(|hit| (hit.date, hit.classes.clone()));
        match target {
            Some((date, classes)) => self.day_clicked(date, &classes),
            None => false,
        }
    }

    /// Resolves a terminal position against the last render and forwards
    /// the hover to [`day_hovered`](Calendar::day_hovered).
    pub fn hover_at(&mut self, column: u16, row: u16) -> bool {
        let target = self.hits.at(column, row).map(|hit| hit.date);
        match target {
            Some(date) => self.day_hovered(date),
            None => false,
        }
    }
}

impl fmt::Debug for Calendar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Calendar")
            .field("start", &self.start)
            .field("end", &self.end)
            .field("options", &self.options)
            .field("selecting_range", &self.selecting_range)
            .field("hits", &self.hits)
            .finish_non_exhaustive()
    }
}
