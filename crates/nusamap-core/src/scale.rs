//! Color-scale domain computation and the national timeline series.
//!
//! The scale domain is `[0, max]` where `max` is taken over the *active*
//! window only, so recomputation cost scales with the brushed slice, not
//! the whole dataset. The national series always covers the full history
//! because the timeline area chart never narrows with the brush.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::index::CaseIndex;
use crate::record::Metric;
use crate::window::DateWindow;

/// Maximum value of `metric` across every province on every date in the
/// window.
///
/// Provinces without a row on a date are absent from the maximum, not
/// zero. Returns 1 when the window is empty or the true maximum is 0, so
/// the scale domain never degenerates to zero width.
#[must_use]
pub fn max_in_window(index: &CaseIndex, window: &DateWindow, metric: Metric) -> u64 {
    let max = window
        .dates()
        .iter()
        .flat_map(|date| index.records_on(*date))
        .map(|record| record.value(metric))
        .max()
        .unwrap_or(0);
    max.max(1)
}

/// Per-date national totals of `metric` over the full history.
///
/// Sums across all provinces reporting on each date; used by the
/// timeline area chart, which ignores the active brush but tracks the
/// selected metric.
#[must_use]
pub fn national_series(index: &CaseIndex, metric: Metric) -> Vec<(NaiveDate, u64)> {
    index
        .dates()
        .map(|date| {
            let total: u64 = index
                .records_on(date)
                .map(|record| record.value(metric))
                .sum();
            (date, total)
        })
        .collect()
}

/// Sequential color scale mapping `[0, max]` onto a light→dark ramp.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SequentialScale {
    max: u64,
    low: Color,
    high: Color,
}

impl SequentialScale {
    /// Red ramp used for the choropleth fill.
    #[must_use]
    pub fn reds(max: u64) -> Self {
        Self {
            max: max.max(1),
            low: Color::rgb(1.0, 0.96, 0.94),
            high: Color::rgb(0.6, 0.0, 0.05),
        }
    }

    /// Scale whose domain is the window maximum of `metric`.
    #[must_use]
    pub fn for_window(index: &CaseIndex, window: &DateWindow, metric: Metric) -> Self {
        Self::reds(max_in_window(index, window, metric))
    }

    /// Upper end of the scale domain.
    #[must_use]
    pub const fn domain_max(&self) -> u64 {
        self.max
    }

    /// Map a value onto the ramp; values above the domain clamp to the
    /// high end.
    #[must_use]
    pub fn color(&self, value: u64) -> Color {
        let t = value as f32 / self.max as f32;
        self.low.lerp(&self.high, t)
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

    fn jakarta_index() -> CaseIndex {
        // Jakarta reports New Cases = [100, 200, 150] on consecutive dates
        CaseIndex::build(
            vec![
                CaseRecord::new(date(1), "Jakarta", 100, 1, 100, 1),
                CaseRecord::new(date(2), "Jakarta", 200, 2, 300, 3),
                CaseRecord::new(date(3), "Jakarta", 150, 3, 450, 6),
            ],
            DuplicatePolicy::Reject,
        )
        .unwrap()
    }

    #[test]
    fn test_max_over_full_range() {
        let index = jakarta_index();
        let full = DateWindow::full(&index);
        assert_eq!(max_in_window(&index, &full, Metric::NewCases), 200);
    }

    #[test]
    fn test_single_date_brush_reduces_max() {
        let index = jakarta_index();
        let full = DateWindow::full(&index);
        let active = full.brushed(date(1), date(1));
        assert_eq!(max_in_window(&index, &active, Metric::NewCases), 100);
    }

    #[test]
    fn test_empty_window_returns_one() {
        let index = jakarta_index();
        let empty = DateWindow::full(&index).brushed(date(20), date(25));
        assert_eq!(max_in_window(&index, &empty, Metric::NewCases), 1);
    }

    #[test]
    fn test_all_zero_returns_one() {
        let index = CaseIndex::build(
            vec![CaseRecord::new(date(1), "Jakarta", 0, 0, 0, 0)],
            DuplicatePolicy::Reject,
        )
        .unwrap();
        let full = DateWindow::full(&index);
        assert_eq!(max_in_window(&index, &full, Metric::NewCases), 1);
    }

    #[test]
    fn test_max_is_monotonic_under_widening() {
        let index = jakarta_index();
        let full = DateWindow::full(&index);
        let narrow = full.brushed(date(1), date(1));
        let wide = full.brushed(date(1), date(2));
        let narrow_max = max_in_window(&index, &narrow, Metric::NewCases);
        let wide_max = max_in_window(&index, &wide, Metric::NewCases);
        assert!(wide_max >= narrow_max);
        assert!(max_in_window(&index, &full, Metric::NewCases) >= wide_max);
    }

    #[test]
    fn test_max_respects_metric() {
        let index = jakarta_index();
        let full = DateWindow::full(&index);
        assert_eq!(max_in_window(&index, &full, Metric::TotalCases), 450);
        assert_eq!(max_in_window(&index, &full, Metric::NewDeaths), 3);
    }

    #[test]
    fn test_national_series_sums_provinces() {
        let index = CaseIndex::build(
            vec![
                CaseRecord::new(date(1), "Jakarta", 100, 0, 0, 0),
                CaseRecord::new(date(1), "Bali", 20, 0, 0, 0),
                CaseRecord::new(date(2), "Jakarta", 50, 0, 0, 0),
            ],
            DuplicatePolicy::Reject,
        )
        .unwrap();

        let series = national_series(&index, Metric::NewCases);
        assert_eq!(series, vec![(date(1), 120), (date(2), 50)]);
    }

    #[test]
    fn test_national_series_ignores_brush() {
        // The series is computed from the index alone; a brushed window
        // never narrows it.
        let index = jakarta_index();
        let series = national_series(&index, Metric::NewCases);
        assert_eq!(series.len(), 3);
    }

    fn assert_color_close(actual: Color, expected: Color) {
        for (channel, want) in [
            (actual.r, expected.r),
            (actual.g, expected.g),
            (actual.b, expected.b),
            (actual.a, expected.a),
        ] {
            assert!((channel - want).abs() < 1e-5, "{channel} != {want}");
        }
    }

    #[test]
    fn test_scale_endpoints_and_clamp() {
        let scale = SequentialScale::reds(200);
        // t = 0 lerps to the low end exactly; the high end accumulates
        // f32 rounding, so compare per channel
        assert_eq!(scale.color(0), Color::rgb(1.0, 0.96, 0.94));
        assert_color_close(scale.color(200), Color::rgb(0.6, 0.0, 0.05));
        // out-of-domain clamps to the high end
        assert_eq!(scale.color(9999), scale.color(200));
    }

    #[test]
    fn test_scale_zero_domain_guard() {
        let scale = SequentialScale::reds(0);
        assert_eq!(scale.domain_max(), 1);
    }

    #[test]
    fn test_for_window_uses_window_max() {
        let index = jakarta_index();
        let full = DateWindow::full(&index);
        let scale = SequentialScale::for_window(&index, &full, Metric::NewCases);
        assert_eq!(scale.domain_max(), 200);
    }
}
