//! Rendering collaborators behind a trait.
//!
//! The engine never draws. A host (browser canvas, terminal, test
//! harness) implements [`MapSurface`] and receives the drawing calls;
//! [`RecordingSurface`] records them for assertions.

use chrono::NaiveDate;
use nusamap_core::Color;

/// Drawing operations the view coordinator needs from its host.
pub trait MapSurface {
    /// Draw the province outlines once at startup, in feature order.
    fn draw_province_shapes(&mut self, provinces: &[String]);

    /// Fill one province's shape.
    fn set_shape_fill(&mut self, province: &str, color: Color);

    /// Show the hover tooltip at a screen position.
    fn show_tooltip(&mut self, content: &str, x: f64, y: f64);

    /// Hide the hover tooltip.
    fn hide_tooltip(&mut self);

    /// Redraw the timeline area chart from a national-total series.
    fn draw_timeline_area(&mut self, series: &[(NaiveDate, u64)]);

    /// Highlight the brushed interval on the timeline.
    fn draw_brush_region(&mut self, start: NaiveDate, end: NaiveDate);

    /// Draw a labelled marker line at a date on the timeline.
    fn draw_annotation(&mut self, date: NaiveDate, label: &str);

    /// Update the date readout next to the slider.
    fn set_date_label(&mut self, label: &str);

    /// Move the slider thumb and set its maximum.
    fn set_slider(&mut self, value: usize, max: usize);
}

/// One recorded surface call.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceCall {
    /// `draw_province_shapes`
    Shapes(Vec<String>),
    /// `set_shape_fill`
    Fill {
        /// Province that was filled
        province: String,
        /// Fill color
        color: Color,
    },
    /// `show_tooltip`
    Tooltip {
        /// Tooltip content
        content: String,
        /// Screen x
        x: f64,
        /// Screen y
        y: f64,
    },
    /// `hide_tooltip`
    HideTooltip,
    /// `draw_timeline_area`
    TimelineArea(Vec<(NaiveDate, u64)>),
    /// `draw_brush_region`
    BrushRegion(NaiveDate, NaiveDate),
    /// `draw_annotation`
    Annotation {
        /// Marker date
        date: NaiveDate,
        /// Marker label
        label: String,
    },
    /// `set_date_label`
    DateLabel(String),
    /// `set_slider`
    Slider {
        /// Thumb position
        value: usize,
        /// Slider maximum
        max: usize,
    },
}

/// Test surface that records every call instead of drawing.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    calls: Vec<SurfaceCall>,
}

impl RecordingSurface {
    /// Create a new empty recording surface.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the recorded calls.
    #[must_use]
    pub fn calls(&self) -> &[SurfaceCall] {
        &self.calls
    }

    /// Take ownership of the recorded calls, clearing the surface.
    pub fn take_calls(&mut self) -> Vec<SurfaceCall> {
        std::mem::take(&mut self.calls)
    }

    /// Number of recorded calls.
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.calls.len()
    }

    /// Whether nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.calls.is_empty()
    }

    /// Clear all recorded calls.
    pub fn clear(&mut self) {
        self.calls.clear();
    }

    /// The most recent fill recorded for a province, if any.
    #[must_use]
    pub fn last_fill(&self, name: &str) -> Option<Color> {
        self.calls.iter().rev().find_map(|call| match call {
            SurfaceCall::Fill { province, color } if province == name => Some(*color),
            _ => None,
        })
    }
}

impl MapSurface for RecordingSurface {
    fn draw_province_shapes(&mut self, provinces: &[String]) {
        self.calls.push(SurfaceCall::Shapes(provinces.to_vec()));
    }

    fn set_shape_fill(&mut self, province: &str, color: Color) {
        self.calls.push(SurfaceCall::Fill {
            province: province.to_string(),
            color,
        });
    }

    fn show_tooltip(&mut self, content: &str, x: f64, y: f64) {
        self.calls.push(SurfaceCall::Tooltip {
            content: content.to_string(),
            x,
            y,
        });
    }

    fn hide_tooltip(&mut self) {
        self.calls.push(SurfaceCall::HideTooltip);
    }

    fn draw_timeline_area(&mut self, series: &[(NaiveDate, u64)]) {
        self.calls.push(SurfaceCall::TimelineArea(series.to_vec()));
    }

    fn draw_brush_region(&mut self, start: NaiveDate, end: NaiveDate) {
        self.calls.push(SurfaceCall::BrushRegion(start, end));
    }

    fn draw_annotation(&mut self, date: NaiveDate, label: &str) {
        self.calls.push(SurfaceCall::Annotation {
            date,
            label: label.to_string(),
        });
    }

    fn set_date_label(&mut self, label: &str) {
        self.calls.push(SurfaceCall::DateLabel(label.to_string()));
    }

    fn set_slider(&mut self, value: usize, max: usize) {
        self.calls.push(SurfaceCall::Slider { value, max });
    }
}
