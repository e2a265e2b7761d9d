use super::header::{header_cells, HeaderCell};
use super::hits::HitMap;
use super::picker::Calendar;
use super::{classes, CalendarOptions, CustomClasses};
use crate::theme;
use ratatui::{buffer::Buffer, layout::Rect, style::Style, widgets::StatefulWidget};
use std::fmt;
use time::{Date, Month};

/// Number of columns reserved on the left for the month name and year
const LABEL_WIDTH: u16 = 16;

/// Columns per day cell
const DAY_WIDTH: u16 = 3;

/// Columns per week-separator cell
const SEP_WIDTH: u16 = 1;

/// Lines taken up by the weekday header and its rule
const HEADER_LINES: u16 = 2;

/// Lines per month row, including the spacing line below it
const MONTH_LINES: u16 = 2;

const ACS_HLINE: char = '─';
const ACS_VLINE: &str = "│";

/// Everything a [`MonthView`] needs to render one month row.
pub struct MonthContext<'a> {
    pub month: Month,
    pub year: i32,
    /// In-progress range, ordered by click; views normalize for display.
    pub selecting_range: Option<(Date, Date)>,
    pub options: &'a CalendarOptions,
    pub custom_classes: Option<&'a dyn CustomClasses>,
}

impl fmt::Debug for MonthContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MonthContext")
            .field("month", &self.month)
            .field("year", &self.year)
            .field("selecting_range", &self.selecting_range)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

/// Renders a single month's day cells into a one-line area and records
/// their geometry.
///
/// Implementations must record every day column in `hits`: padding cells
/// for the adjacent months with an absent date, real cells with the date
/// and its computed class names.
pub trait MonthView {
    fn render_month(&self, ctx: &MonthContext<'_>, area: Rect, buf: &mut Buffer, hits: &mut HitMap);
}

/// The calendar widget: an optional weekday header row followed by one row
/// of day cells per month in the span.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct CalendarWidget<V = GridMonth> {
    month_view: V,
}

impl CalendarWidget<GridMonth> {
    pub fn new() -> CalendarWidget<GridMonth> {
        CalendarWidget {
            month_view: GridMonth,
        }
    }
}

impl<V: MonthView> CalendarWidget<V> {
    /// Substitutes a custom per-month renderer for the bundled one.
    pub fn with_month_view(month_view: V) -> CalendarWidget<V> {
        CalendarWidget { month_view }
    }
}

impl<V: MonthView> StatefulWidget for CalendarWidget<V> {
    type State = Calendar;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Calendar) {
        state.hits.clear();
        let mut y = 0;
        if state.options.show_days_of_week {
            draw_header(area, buf, &state.options);
            y += HEADER_LINES;
        }
        let selecting_range = state.selecting_range();
        for slot in state.months() {
            if y >= area.height {
                break;
            }
            let ctx = MonthContext {
                month: slot.month,
                year: slot.year,
                selecting_range,
                options: &state.options,
                custom_classes: state.custom_classes.as_deref(),
            };
            let row = Rect {
                x: area.x,
                y: area.y + y,
                width: area.width,
                height: 1,
            };
            self.month_view.render_month(&ctx, row, buf, &mut state.hits);
            y += MONTH_LINES;
        }
    }
}

/// The bundled [`MonthView`]: a month-name label column followed by
/// `total_days()` day cells, with day 1 placed in the column matching its
/// weekday and the adjacent months' day numbers dimmed in the padding
/// cells.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct GridMonth;

impl MonthView for GridMonth {
    fn render_month(&self, ctx: &MonthContext<'_>, area: Rect, buf: &mut Buffer, hits: &mut HitMap) {
        if area.height == 0 {
            return;
        }
        let label = format!("{} {}", ctx.month, ctx.year);
        print(area, buf, 0, &label, theme::MONTH_LABEL_STYLE);
        let Ok(first) = Date::from_calendar_date(ctx.year, ctx.month, 1) else {
            return;
        };
        let offset =
            (first.weekday().number_days_from_sunday() + 7 - ctx.options.first_day_index()) % 7;
        let length = ctx.month.length(ctx.year);
        let prev_length = previous_month_length(ctx.year, ctx.month);
        let mut day_cursor = Some(first);
        for j in 0..ctx.options.total_days() {
            let x = day_cell_x(j, ctx.options.show_week_separators);
            if ctx.options.show_week_separators && j % 7 == 0 && j != 0 {
                print(area, buf, x - SEP_WIDTH, ACS_VLINE, theme::SEPARATOR_STYLE);
            }
            if x >= area.width {
                break;
            }
            let cell_area = Rect {
                x: area.x + x,
                y: area.y,
                width: DAY_WIDTH.min(area.width - x),
                height: 1,
            };
            if j < offset {
                let day = prev_length - offset + j + 1;
                print(area, buf, x, &format!("{day:>2} "), theme::PADDING_STYLE);
                hits.record(cell_area, None, vec![classes::PREV_MONTH.to_owned()]);
            } else if j < offset + length {
                let Some(date) = day_cursor else {
                    break;
                };
                let day = date.day();
                let names = day_classes(ctx, date);
                print(
                    area,
                    buf,
                    x,
                    &format!("{day:>2} "),
                    theme::day_style(&names),
                );
                hits.record(cell_area, Some(date), names);
                day_cursor = date.next_day();
            } else {
                let day = j + 1 - offset - length;
                print(area, buf, x, &format!("{day:>2} "), theme::PADDING_STYLE);
                hits.record(cell_area, None, vec![classes::NEXT_MONTH.to_owned()]);
            }
        }
    }
}

fn day_classes(ctx: &MonthContext<'_>, date: Date) -> Vec<String> {
    let mut names = Vec::new();
    if !ctx.options.select_range && date == ctx.options.selected_day {
        names.push(classes::SELECTED.to_owned());
    }
    if let Some((a, b)) = ctx.selecting_range {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        if (lo..=hi).contains(&date) {
            names.push(classes::RANGE.to_owned());
            if date == lo {
                names.push(classes::RANGE_LEFT.to_owned());
            }
            if date == hi {
                names.push(classes::RANGE_RIGHT.to_owned());
            }
        }
    }
    if let Some(custom) = ctx.custom_classes {
        names.extend(custom.classes_for(date));
    }
    names
}

fn previous_month_length(year: i32, month: Month) -> u8 {
    let previous = month.previous();
    let year = if month == Month::January {
        year - 1
    } else {
        year
    };
    previous.length(year)
}

// Left edge of day column `j`, accounting for any separator columns
// inserted at the week boundaries before it
fn day_cell_x(j: u8, show_week_separators: bool) -> u16 {
    let separators = if show_week_separators { j / 7 } else { 0 };
    LABEL_WIDTH + u16::from(j) * DAY_WIDTH + u16::from(separators) * SEP_WIDTH
}

fn draw_header(area: Rect, buf: &mut Buffer, options: &CalendarOptions) {
    if area.height == 0 {
        return;
    }
    let top = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: 1,
    };
    let mut x = 0;
    for cell in header_cells(options) {
        match cell {
            HeaderCell::Blank => x += LABEL_WIDTH,
            HeaderCell::Separator => {
                print(top, buf, x, ACS_VLINE, theme::SEPARATOR_STYLE);
                x += SEP_WIDTH;
            }
            HeaderCell::Weekday { label, emphasized } => {
                let style = if emphasized {
                    theme::WEEKDAY_EMPHASIS_STYLE
                } else {
                    theme::WEEKDAY_STYLE
                };
                print(top, buf, x, &format!(" {label} "), style);
                x += DAY_WIDTH;
            }
        }
    }
    if area.height > 1 {
        let rule = Rect {
            x: area.x,
            y: area.y + 1,
            width: area.width,
            height: 1,
        };
        let length = usize::from(x.saturating_sub(LABEL_WIDTH));
        print(
            rule,
            buf,
            LABEL_WIDTH,
            &String::from(ACS_HLINE).repeat(length),
            theme::RULE_STYLE,
        );
    }
}

// Prints into a one-line area, truncating at its right edge
fn print(area: Rect, buf: &mut Buffer, x: u16, s: &str, style: Style) {
    if x < area.width && area.height > 0 {
        let max = usize::from(area.width - x);
        buf.set_stringn(area.x + x, area.y, s, max, style);
    }
}
