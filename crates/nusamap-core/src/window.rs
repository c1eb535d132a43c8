//! The active timeline window: all dates, or a brushed sub-range.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::index::CaseIndex;

/// An ordered, de-duplicated ascending sequence of dates.
///
/// The *full* window holds every date in the dataset; a *brushed* window
/// is the contiguous inclusive sub-slice selected on the timeline. A
/// brushed window may be empty — callers must skip map updates rather
/// than index past the end.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DateWindow {
    dates: Vec<NaiveDate>,
}

impl DateWindow {
    /// The full window: every date present in the index, ascending.
    #[must_use]
    pub fn full(index: &CaseIndex) -> Self {
        Self {
            dates: index.dates().collect(),
        }
    }

    /// Restrict to dates with `start <= date <= end` (inclusive ends).
    ///
    /// Idempotent: brushing an already-brushed window with the same
    /// bounds yields the same window.
    #[must_use]
    pub fn brushed(&self, start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            dates: self
                .dates
                .iter()
                .copied()
                .filter(|date| *date >= start && *date <= end)
                .collect(),
        }
    }

    /// Dates in the window, ascending.
    #[must_use]
    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    /// Date at a cursor position, `None` when out of range.
    #[must_use]
    pub fn date_at(&self, cursor: usize) -> Option<NaiveDate> {
        self.dates.get(cursor).copied()
    }

    /// First date in the window.
    #[must_use]
    pub fn first(&self) -> Option<NaiveDate> {
        self.dates.first().copied()
    }

    /// Last date in the window.
    #[must_use]
    pub fn last(&self) -> Option<NaiveDate> {
        self.dates.last().copied()
    }

    /// Highest valid cursor position, `None` when empty.
    #[must_use]
    pub fn last_cursor(&self) -> Option<usize> {
        self.dates.len().checked_sub(1)
    }

    /// Clamp a cursor into the window (0 when empty).
    #[must_use]
    pub fn clamp_cursor(&self, cursor: usize) -> usize {
        self.last_cursor().map_or(0, |last| cursor.min(last))
    }

    /// Number of dates in the window.
    #[must_use]
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Whether the window holds no dates.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}

impl FromIterator<NaiveDate> for DateWindow {
    /// Build from already-ascending, de-duplicated dates (test helper
    /// and ingestion path; invariants are the caller's responsibility).
    fn from_iter<I: IntoIterator<Item = NaiveDate>>(iter: I) -> Self {
        Self {
            dates: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::DuplicatePolicy;
    use crate::record::CaseRecord;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2021, 7, d).unwrap()
    }

    fn window(days: &[u32]) -> DateWindow {
        days.iter().map(|d| date(*d)).collect()
    }

    #[test]
    fn test_full_window_matches_index_dates() {
        let index = CaseIndex::build(
            vec![
                CaseRecord::new(date(2), "Jakarta", 1, 0, 0, 0),
                CaseRecord::new(date(1), "Jakarta", 2, 0, 0, 0),
            ],
            DuplicatePolicy::Reject,
        )
        .unwrap();

        let full = DateWindow::full(&index);
        assert_eq!(full.dates(), &[date(1), date(2)]);
    }

    #[test]
    fn test_brushed_inclusive_bounds() {
        let full = window(&[1, 2, 3, 4, 5]);
        let active = full.brushed(date(2), date(4));
        assert_eq!(active.dates(), &[date(2), date(3), date(4)]);
    }

    #[test]
    fn test_brushed_is_idempotent() {
        let full = window(&[1, 2, 3, 4, 5]);
        let once = full.brushed(date(2), date(4));
        let twice = once.brushed(date(2), date(4));
        assert_eq!(once, twice);
    }

    #[test]
    fn test_brushed_can_be_empty() {
        let full = window(&[1, 2, 3]);
        let active = full.brushed(date(10), date(20));
        assert!(active.is_empty());
        assert_eq!(active.date_at(0), None);
        assert_eq!(active.last_cursor(), None);
    }

    #[test]
    fn test_brushed_preserves_order_and_subsequence() {
        let full = window(&[1, 3, 5, 7]);
        let active = full.brushed(date(2), date(6));
        assert_eq!(active.dates(), &[date(3), date(5)]);
        // subsequence of the full window
        let mut full_iter = full.dates().iter();
        for d in active.dates() {
            assert!(full_iter.any(|f| f == d));
        }
    }

    #[test]
    fn test_clamp_cursor() {
        let w = window(&[1, 2, 3]);
        assert_eq!(w.clamp_cursor(0), 0);
        assert_eq!(w.clamp_cursor(2), 2);
        assert_eq!(w.clamp_cursor(99), 2);
        assert_eq!(window(&[]).clamp_cursor(5), 0);
    }

    #[test]
    fn test_first_last() {
        let w = window(&[1, 2, 3]);
        assert_eq!(w.first(), Some(date(1)));
        assert_eq!(w.last(), Some(date(3)));
        assert_eq!(window(&[]).first(), None);
    }
}
