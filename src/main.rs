mod app;
mod help;
use crate::app::App;
use anyhow::Context;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use lexopt::{Arg, Parser, ValueExt};
use ratatui::DefaultTerminal;
use std::cell::RefCell;
use std::io;
use std::rc::Rc;
use time::{format_description::FormatItem, macros::format_description, Date, OffsetDateTime};
use yearcal::calendar::{weekday_from_index, Calendar, CalendarOptions};

static YMD_FMT: &[FormatItem<'_>] = format_description!("[year]-[month]-[day]");

#[derive(Clone, Debug, Eq, PartialEq)]
enum Command {
    Run {
        start: Date,
        end: Date,
        options: CalendarOptions,
        selected: Option<Date>,
    },
    Help,
    Version,
}

impl Command {
    fn from_parser(mut parser: Parser) -> Result<Command, lexopt::Error> {
        let mut dates = Vec::with_capacity(2);
        let mut options = CalendarOptions::default();
        let mut selected = None;
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('h') | Arg::Long("help") => return Ok(Command::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Command::Version),
                Arg::Short('r') | Arg::Long("range") => options.select_range = true,
                Arg::Short('f') | Arg::Long("full-weeks") => options.force_full_weeks = true,
                Arg::Long("no-days-of-week") => options.show_days_of_week = false,
                Arg::Long("no-week-separators") => options.show_week_separators = false,
                Arg::Long("first-day") => {
                    let value = parser.value()?.string()?;
                    let index = match value.parse::<u8>() {
                        Ok(index) => index,
                        Err(e) => {
                            return Err(lexopt::Error::ParsingFailed {
                                value,
                                error: Box::new(e),
                            })
                        }
                    };
                    match weekday_from_index(index) {
                        Ok(weekday) => options.first_day_of_week = weekday,
                        Err(e) => {
                            return Err(lexopt::Error::ParsingFailed {
                                value,
                                error: Box::new(e),
                            })
                        }
                    }
                }
                Arg::Long("selected") => {
                    selected = Some(parse_date(parser.value()?.string()?)?);
                }
                Arg::Value(value) if dates.len() < 2 => {
                    dates.push(parse_date(value.string()?)?);
                }
                _ => return Err(arg.unexpected()),
            }
        }
        let mut dates = dates.into_iter();
        match (dates.next(), dates.next()) {
            (Some(start), Some(end)) => Ok(Command::Run {
                start,
                end,
                options,
                selected,
            }),
            _ => Err(lexopt::Error::Custom(
                "expected two positional dates: START END (YYYY-MM-DD)".into(),
            )),
        }
    }

    fn run(self) -> anyhow::Result<()> {
        match self {
            Command::Run {
                start,
                end,
                mut options,
                selected,
            } => {
                options.selected_day = match selected {
                    Some(date) => date,
                    None => OffsetDateTime::now_local()
                        .context("failed to determine local date")?
                        .date(),
                };
                let status = Rc::new(RefCell::new(String::from(if options.select_range {
                    "Click a day to anchor a range"
                } else {
                    "Click a day to pick it"
                })));
                let calendar = Calendar::new(start, end)
                    .options(options)
                    .on_pick_date({
                        let status = Rc::clone(&status);
                        move |date, classes: &[String]| {
                            *status.borrow_mut() = if classes.is_empty() {
                                format!("Picked {date}")
                            } else {
                                format!("Picked {date} [{}]", classes.join(" "))
                            };
                        }
                    })
                    .on_pick_range({
                        let status = Rc::clone(&status);
                        move |range_start, range_end| {
                            *status.borrow_mut() =
                                format!("Picked range {range_start} to {range_end}");
                        }
                    });
                with_terminal(|mut terminal| {
                    terminal.hide_cursor().context("failed to hide cursor")?;
                    App::new(calendar, status).run(terminal)?;
                    Ok(())
                })
            }
            Command::Help => {
                println!("Usage: yearcal [OPTIONS] START END");
                println!();
                println!("Terminal calendar for a date span with mouse day & range picking");
                println!();
                println!("Arguments:");
                println!("  START, END             Span to display, YYYY-MM-DD; every month");
                println!("                         overlapping the span gets a row");
                println!();
                println!("Options:");
                println!("  -r, --range            Pick a range with two clicks instead of single days");
                println!("  -f, --full-weeks       Pad every month row to six full weeks");
                println!("      --first-day <0-6>  Weekday in the first column (0 = Sunday)");
                println!("      --selected <DATE>  Pre-highlighted day in single-day mode");
                println!("      --no-days-of-week  Hide the weekday header row");
                println!("      --no-week-separators");
                println!("                         Do not mark week boundaries");
                println!("  -h, --help             Display this help message and exit");
                println!("  -V, --version          Show the program version and exit");
                Ok(())
            }
            Command::Version => {
                println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
                Ok(())
            }
        }
    }
}

fn parse_date(value: String) -> Result<Date, lexopt::Error> {
    match Date::parse(&value, &YMD_FMT) {
        Ok(date) => Ok(date),
        Err(e) => Err(lexopt::Error::ParsingFailed {
            value,
            error: Box::new(e),
        }),
    }
}

fn main() -> anyhow::Result<()> {
    Command::from_parser(Parser::from_env())?.run()
}

fn with_terminal<F, T>(func: F) -> anyhow::Result<T>
where
    F: FnOnce(DefaultTerminal) -> anyhow::Result<T>,
{
    let terminal = ratatui::init();
    if let Err(e) = execute!(io::stdout(), EnableMouseCapture) {
        ratatui::restore();
        return Err(e).context("failed to enable mouse capture");
    }
    let r = func(terminal);
    let _ = execute!(io::stdout(), DisableMouseCapture);
    ratatui::restore();
    r
}
