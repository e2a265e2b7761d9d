use super::CalendarOptions;
use time::Weekday;

/// One cell of the weekday header row.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum HeaderCell {
    /// Leading spacer over the month-label column.
    Blank,
    /// Visual divider at a week boundary.
    Separator,
    /// A weekday label.  `emphasized` marks the canonical week start
    /// (Sunday), independent of which weekday occupies the first column.
    Weekday { label: char, emphasized: bool },
}

/// Produces the header row: a leading blank cell, then one cell per day
/// column, with separators at week boundaries when enabled.
pub fn header_cells(options: &CalendarOptions) -> Vec<HeaderCell> {
    let first = options.first_day_index();
    let total = options.total_days();
    let mut cells = Vec::with_capacity(usize::from(total) + 7);
    cells.push(HeaderCell::Blank);
    for i in first..first + total {
        if options.show_week_separators && i % 7 == first && i != first {
            cells.push(HeaderCell::Separator);
        }
        let weekday = Weekday::Sunday.nth_next(i % 7);
        cells.push(HeaderCell::Weekday {
            label: initial(weekday),
            emphasized: i % 7 == 0,
        });
    }
    cells
}

fn initial(weekday: Weekday) -> char {
    match weekday {
        Weekday::Monday => 'M',
        Weekday::Tuesday => 'T',
        Weekday::Wednesday => 'W',
        Weekday::Thursday => 'T',
        Weekday::Friday => 'F',
        Weekday::Saturday => 'S',
        Weekday::Sunday => 'S',
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weekday_cells(cells: &[HeaderCell]) -> Vec<(char, bool)> {
        cells
            .iter()
            .filter_map(|cell| match cell {
                HeaderCell::Weekday { label, emphasized } => Some((*label, *emphasized)),
                _ => None,
            })
            .collect()
    }

    fn separator_count(cells: &[HeaderCell]) -> usize {
        cells
            .iter()
            .filter(|cell| matches!(cell, HeaderCell::Separator))
            .count()
    }

    #[test]
    fn test_default_cell_count() {
        let cells = header_cells(&CalendarOptions::default());
        assert_eq!(cells[0], HeaderCell::Blank);
        assert_eq!(weekday_cells(&cells).len(), 37);
        assert_eq!(separator_count(&cells), 5);
        assert_eq!(cells.len(), 1 + 37 + 5);
    }

    #[test]
    fn test_full_weeks_cell_count() {
        let options = CalendarOptions {
            force_full_weeks: true,
            ..CalendarOptions::default()
        };
        let cells = header_cells(&options);
        assert_eq!(weekday_cells(&cells).len(), 42);
        assert_eq!(separator_count(&cells), 5);
        assert_eq!(cells.len(), 1 + 42 + 5);
    }

    #[test]
    fn test_without_separators() {
        let options = CalendarOptions {
            show_week_separators: false,
            ..CalendarOptions::default()
        };
        let cells = header_cells(&options);
        assert_eq!(separator_count(&cells), 0);
        assert_eq!(cells.len(), 1 + 37);
    }

    #[test]
    fn test_labels_from_sunday() {
        let cells = header_cells(&CalendarOptions::default());
        let days = weekday_cells(&cells);
        let labels = days.iter().map(|&(label, _)| label).collect::<Vec<_>>();
        assert_eq!(labels[..7], ['S', 'M', 'T', 'W', 'T', 'F', 'S']);
        // The pattern repeats weekly
        assert_eq!(labels[7], 'S');
        // Only the canonical week starts are emphasized
        assert!(days[0].1);
        assert!(!days[1].1);
        assert!(days[7].1);
    }

    #[test]
    fn test_monday_first_column() {
        let options = CalendarOptions {
            first_day_of_week: Weekday::Monday,
            ..CalendarOptions::default()
        };
        let days = weekday_cells(&header_cells(&options));
        let labels = days.iter().map(|&(label, _)| label).collect::<Vec<_>>();
        assert_eq!(labels[..7], ['M', 'T', 'W', 'T', 'F', 'S', 'S']);
        // Sundays stay emphasized even though they sit in the last column
        assert!(!days[0].1);
        assert!(days[6].1);
        assert!(days[13].1);
    }

    #[test]
    fn test_separator_every_seven_days() {
        let cells = header_cells(&CalendarOptions::default());
        let mut since_separator = 0;
        for cell in &cells[1..] {
            match cell {
                HeaderCell::Separator => {
                    assert_eq!(since_separator, 7);
                    since_separator = 0;
                }
                HeaderCell::Weekday { .. } => since_separator += 1,
                HeaderCell::Blank => panic!("blank cell after the leading one"),
            }
        }
    }
}
