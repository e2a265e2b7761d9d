use crate::calendar::classes;
use ratatui::style::{Color, Modifier, Style};

pub const BASE_STYLE: Style = Style::new().fg(Color::White).bg(Color::Black);

pub const WEEKDAY_STYLE: Style = BASE_STYLE;

pub const WEEKDAY_EMPHASIS_STYLE: Style = BASE_STYLE.add_modifier(Modifier::BOLD);

pub const MONTH_LABEL_STYLE: Style = BASE_STYLE.add_modifier(Modifier::BOLD);

pub const SEPARATOR_STYLE: Style = Style::new().fg(Color::DarkGray).bg(Color::Black);

pub const RULE_STYLE: Style = SEPARATOR_STYLE;

pub const PADDING_STYLE: Style = Style::new().fg(Color::DarkGray).bg(Color::Black);

pub const SELECTED_STYLE: Style = Style::new()
    .fg(Color::Black)
    .bg(Color::LightYellow)
    .add_modifier(Modifier::BOLD);

pub const RANGE_STYLE: Style = Style::new().fg(Color::Black).bg(Color::LightBlue);

pub const RANGE_EDGE_STYLE: Style = RANGE_STYLE.add_modifier(Modifier::BOLD);

pub const STATUS_STYLE: Style = BASE_STYLE.add_modifier(Modifier::REVERSED);

/// Style for a day cell with the given class names.  Unknown names (such
/// as host-supplied custom classes) fall back to the base style.
pub fn day_style(class_names: &[String]) -> Style {
    fn has(class_names: &[String], name: &str) -> bool {
        class_names.iter().any(|candidate| candidate == name)
    }
    if has(class_names, classes::SELECTED) {
        SELECTED_STYLE
    } else if has(class_names, classes::RANGE_LEFT) || has(class_names, classes::RANGE_RIGHT) {
        RANGE_EDGE_STYLE
    } else if has(class_names, classes::RANGE) {
        RANGE_STYLE
    } else {
        BASE_STYLE
    }
}
