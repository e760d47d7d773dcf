//! Week-by-week navigation of the date picker.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// Tracks which week the date picker shows.
///
/// The view opens on the week of `today` and can never move to a week whose
/// start precedes `today`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct WeekNavigator {
    week_start: NaiveDate,
    today: NaiveDate,
}

impl WeekNavigator {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            week_start: today,
            today,
        }
    }

    /// Reference date of the displayed week.
    pub fn week_start(&self) -> NaiveDate {
        self.week_start
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Whether "previous" is enabled.
    pub fn can_go_previous(&self) -> bool {
        self.week_start - Duration::days(7) >= self.today
    }

    /// Move back one week. Returns `false` (and stays put) when that would
    /// start before today.
    pub fn previous(&mut self) -> bool {
        if !self.can_go_previous() {
            return false;
        }
        self.week_start -= Duration::days(7);
        true
    }

    /// Move forward one week.
    pub fn next(&mut self) {
        self.week_start += Duration::days(7);
    }

    /// Back to the week of today.
    pub fn reset(&mut self) {
        self.week_start = self.today;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 17).unwrap()
    }

    #[test]
    fn test_cannot_go_before_today() {
        let mut nav = WeekNavigator::new(today());
        assert!(!nav.can_go_previous());
        assert!(!nav.previous());
        assert_eq!(nav.week_start(), today());
    }

    #[test]
    fn test_forward_and_back() {
        let mut nav = WeekNavigator::new(today());
        nav.next();
        nav.next();
        assert_eq!(nav.week_start(), NaiveDate::from_ymd_opt(2026, 10, 31).unwrap());

        assert!(nav.previous());
        assert!(nav.previous());
        assert_eq!(nav.week_start(), today());
        assert!(!nav.previous());
    }

    #[test]
    fn test_reset() {
        let mut nav = WeekNavigator::new(today());
        nav.next();
        nav.reset();
        assert_eq!(nav.week_start(), today());
    }
}
