use ratatui::layout::{Position, Rect};
use time::Date;

/// One rendered day cell: its screen rectangle, the date it stands for
/// (`None` for an adjacent-month padding cell), and its class names.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DayHit {
    pub area: Rect,
    pub date: Option<Date>,
    pub classes: Vec<String>,
}

/// Screen geometry of the most recent render, used to translate terminal
/// positions back into day cells.  Rebuilt from scratch on every render.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct HitMap {
    cells: Vec<DayHit>,
}

impl HitMap {
    pub(super) fn clear(&mut self) {
        self.cells.clear();
    }

    /// Records a rendered day cell.  [`MonthView`](super::MonthView)
    /// implementations call this for every cell, padding cells included.
    pub fn record(&mut self, area: Rect, date: Option<Date>, classes: Vec<String>) {
        self.cells.push(DayHit {
            area,
            date,
            classes,
        });
    }

    /// The day cell covering the given terminal position, if any.
    pub fn at(&self, column: u16, row: u16) -> Option<&DayHit> {
        self.cells
            .iter()
            .find(|hit| hit.area.contains(Position::new(column, row)))
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DayHit> {
        self.cells.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn test_lookup() {
        let mut hits = HitMap::default();
        hits.record(
            Rect::new(10, 2, 3, 1),
            Some(date!(2024 - 01 - 05)),
            vec!["selected".to_owned()],
        );
        hits.record(Rect::new(13, 2, 3, 1), None, Vec::new());
        assert_eq!(hits.len(), 2);
        let hit = hits.at(11, 2).expect("cell should be hit");
        assert_eq!(hit.date, Some(date!(2024 - 01 - 05)));
        assert_eq!(hit.classes, ["selected"]);
        let padding = hits.at(13, 2).expect("padding cell should be hit");
        assert_eq!(padding.date, None);
        assert_eq!(hits.at(11, 3), None);
        assert_eq!(hits.at(16, 2), None);
    }
}
