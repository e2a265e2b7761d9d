//! Multi-month terminal calendar with single-day and two-click range
//! picking.
//!
//! Given a start and end date, a [`Calendar`] enumerates every calendar
//! month overlapping the span and renders one row of day cells per month,
//! preceded by an optional weekday header.  Clicking a day either reports
//! it to the host immediately or, in range mode, anchors a range that a
//! second click completes, with the hovered day previewed in between.
//! Completed selections are delivered through optional callbacks; dates of
//! a range are always reported in chronological order regardless of click
//! order.
//!
//! [`CalendarWidget`] is a ratatui [`StatefulWidget`] over the `Calendar`
//! state.  Per-month rendering goes through the [`calendar::MonthView`]
//! trait, so hosts can replace the bundled row layout wholesale.
//!
//! [`StatefulWidget`]: ratatui::widgets::StatefulWidget

pub mod calendar;
pub mod theme;

pub use crate::calendar::{Calendar, CalendarOptions, CalendarWidget};
