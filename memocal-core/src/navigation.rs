//! Displayed-month and selected-date state machine.

use std::cmp::Ordering;

use chrono::NaiveDate;

use crate::month::YearMonth;

/// Which way the grid should visually transition.
///
/// A presentation hint only: every transition returns one, nothing in the
/// domain model reads one back. The rendering layer keeps the last value
/// if it wants to animate or mark the move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideDirection {
    Backward,
    Still,
    Forward,
}

impl SlideDirection {
    /// Direction of a move from one month to another.
    fn between(from: YearMonth, to: YearMonth) -> SlideDirection {
        match to.cmp(&from) {
            Ordering::Less => SlideDirection::Backward,
            Ordering::Equal => SlideDirection::Still,
            Ordering::Greater => SlideDirection::Forward,
        }
    }
}

/// The month being displayed and the date the user has picked.
///
/// Session-lifetime only; never persisted. Transitions are plain method
/// calls so the rendering layer observes state through the getters rather
/// than through shared mutable fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationState {
    current_month: YearMonth,
    selected_date: Option<NaiveDate>,
}

impl NavigationState {
    pub fn new(current_month: YearMonth) -> NavigationState {
        NavigationState {
            current_month,
            selected_date: None,
        }
    }

    pub fn current_month(&self) -> YearMonth {
        self.current_month
    }

    pub fn selected_date(&self) -> Option<NaiveDate> {
        self.selected_date
    }

    pub fn previous_month(&mut self) -> SlideDirection {
        self.current_month = self.current_month.add_months(-1);
        SlideDirection::Backward
    }

    pub fn next_month(&mut self) -> SlideDirection {
        self.current_month = self.current_month.add_months(1);
        SlideDirection::Forward
    }

    /// Jump to the month containing `today` and select it.
    ///
    /// The direction is the ordering of the target month against the
    /// month being left, computed before the overwrite.
    pub fn go_to_today(&mut self, today: NaiveDate) -> SlideDirection {
        let target = YearMonth::from_date(today);
        let direction = SlideDirection::between(self.current_month, target);
        self.current_month = target;
        self.selected_date = Some(today);
        direction
    }

    /// Jump to an explicitly chosen month. Leaves the selection alone.
    pub fn jump_to(&mut self, target: YearMonth) -> SlideDirection {
        let direction = SlideDirection::between(self.current_month, target);
        self.current_month = target;
        direction
    }

    /// Select a date. It need not fall within the displayed month.
    pub fn select(&mut self, date: NaiveDate) {
        self.selected_date = Some(date);
    }

    /// Finish a horizontal drag gesture: a rightward total goes to the
    /// previous month, a leftward total to the next, zero does nothing.
    pub fn end_drag(&mut self, total_dx: f32) -> Option<SlideDirection> {
        if total_dx > 0.0 {
            Some(self.previous_month())
        } else if total_dx < 0.0 {
            Some(self.next_month())
        } else {
            None
        }
    }
}
