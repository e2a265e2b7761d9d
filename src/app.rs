use crate::help::Help;
use crossterm::event::{
    read, Event, KeyCode, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{
    backend::Backend,
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::Line,
    widgets::{Paragraph, StatefulWidget, Widget},
    Terminal,
};
use std::cell::RefCell;
use std::io::{self, Write as _};
use std::rc::Rc;
use yearcal::calendar::{Calendar, CalendarWidget};
use yearcal::theme;

#[derive(Debug)]
pub(crate) struct App {
    calendar: Calendar,
    status: Rc<RefCell<String>>,
    state: AppState,
}

impl App {
    pub(crate) fn new(calendar: Calendar, status: Rc<RefCell<String>>) -> App {
        App {
            calendar,
            status,
            state: AppState::Picking,
        }
    }

    pub(crate) fn run<B: Backend>(mut self, mut terminal: Terminal<B>) -> io::Result<()> {
        while !self.quitting() {
            self.draw(&mut terminal)?;
            self.handle_input()?;
        }
        Ok(())
    }

    fn draw<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        terminal.draw(|frame| frame.render_widget(self, frame.area()))?;
        Ok(())
    }

    fn handle_input(&mut self) -> io::Result<()> {
        match read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if key.modifiers == KeyModifiers::CONTROL && key.code == KeyCode::Char('c') {
                    self.state = AppState::Quitting;
                } else if !self.handle_key(key.code) {
                    self.beep()?;
                }
            }
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            // Redraw on resize, and we might as well redraw on other stuff
            // too
            _ => (),
        }
        Ok(())
    }

    // Returns `false` if the user pressed an invalid key
    fn handle_key(&mut self, key: KeyCode) -> bool {
        match self.state {
            AppState::Picking => match key {
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.state = AppState::Quitting;
                    true
                }
                KeyCode::Char('?') => {
                    self.state = AppState::Helping;
                    true
                }
                _ => false,
            },
            AppState::Helping => {
                self.state = AppState::Picking;
                true
            }
            AppState::Quitting => false,
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        if self.state != AppState::Picking {
            return;
        }
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                // The status line changes even when the selection state does
                // not, so redraw unconditionally
                let _ = self.calendar.click_at(mouse.column, mouse.row);
            }
            MouseEventKind::Moved => {
                let _ = self.calendar.hover_at(mouse.column, mouse.row);
            }
            _ => (),
        }
    }

    fn beep(&self) -> io::Result<()> {
        io::stdout().write_all(b"\x07")
    }

    fn quitting(&self) -> bool {
        self.state == AppState::Quitting
    }
}

impl Widget for &mut App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, theme::BASE_STYLE);
        let [calendar_area, status_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);
        CalendarWidget::new().render(calendar_area, buf, &mut self.calendar);
        let status = self.status.borrow().clone();
        Paragraph::new(Line::raw(status))
            .style(theme::STATUS_STYLE)
            .render(status_area, buf);
        if self.state == AppState::Helping {
            Help.render(area, buf);
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum AppState {
    Picking,
    Helping,
    Quitting,
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;
    use yearcal::calendar::CalendarOptions;

    fn test_app() -> App {
        let calendar = Calendar::new(date!(2024 - 01 - 10), date!(2024 - 01 - 20)).options(
            CalendarOptions {
                selected_day: date!(2024 - 01 - 15),
                ..CalendarOptions::default()
            },
        );
        let status = Rc::new(RefCell::new(String::from("Click a day to pick it")));
        App::new(calendar, status)
    }

    #[test]
    fn test_quit_keys() {
        let mut app = test_app();
        assert!(!app.quitting());
        assert!(app.handle_key(KeyCode::Char('q')));
        assert!(app.quitting());
        let mut app = test_app();
        assert!(app.handle_key(KeyCode::Esc));
        assert!(app.quitting());
    }

    #[test]
    fn test_help_toggles() {
        let mut app = test_app();
        assert!(app.handle_key(KeyCode::Char('?')));
        assert_eq!(app.state, AppState::Helping);
        // Any key dismisses the help screen
        assert!(app.handle_key(KeyCode::Char('x')));
        assert_eq!(app.state, AppState::Picking);
    }

    #[test]
    fn test_invalid_key() {
        let mut app = test_app();
        assert!(!app.handle_key(KeyCode::Char('x')));
        assert_eq!(app.state, AppState::Picking);
    }

    #[test]
    fn test_render_smoke() {
        let mut app = test_app();
        let area = Rect::new(0, 0, 80, 10);
        let mut buffer = Buffer::empty(area);
        (&mut app).render(area, &mut buffer);
        let bottom = (0..80)
            .filter_map(|x| {
                buffer
                    .cell(ratatui::layout::Position::new(x, 9))
                    .map(ratatui::buffer::Cell::symbol)
            })
            .collect::<String>();
        assert!(
            bottom.starts_with("Click a day to pick it"),
            "bad status line: {bottom:?}"
        );
        // The calendar itself is hit-testable after a render
        assert!(!app.calendar.hits().is_empty());
    }
}
