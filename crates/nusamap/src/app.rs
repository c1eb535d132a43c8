//! View coordinator: external events in, consistent renders out.
//!
//! [`App`] owns the index, the current [`ViewState`] snapshot, and the
//! playback clock. Each dispatched event swaps in the successor snapshot
//! *before* any surface call is made, so the cursor, active window, and
//! scale domain a render sees are always mutually consistent.

use chrono::NaiveDate;
use nusamap_core::{
    national_series, CaseIndex, CaseRecord, Color, DuplicatePolicy, PlaybackClock, SequentialScale,
    ViewMsg, ViewState,
};
use nusamap_data::{
    read_records, reconcile, DataError, FeatureCollection, Reconciliation, DEFAULT_NAME_PROPERTY,
};

use crate::surface::MapSurface;

/// The choropleth application.
#[derive(Debug)]
pub struct App {
    index: CaseIndex,
    shapes: Vec<String>,
    reconciliation: Reconciliation,
    state: ViewState,
    clock: PlaybackClock,
    series: Vec<(NaiveDate, u64)>,
    annotations: Vec<(NaiveDate, String)>,
}

impl App {
    /// Load both datasets and build the initial state.
    ///
    /// Duplicate (date, province) rows fail the load; use
    /// [`App::load_with_policy`] to keep one side instead.
    ///
    /// # Errors
    ///
    /// Any CSV, JSON, or index failure aborts the load — the app never
    /// starts from a partially parsed dataset.
    pub fn load(csv: impl std::io::Read, boundary_json: &str) -> Result<Self, DataError> {
        Self::load_with_policy(csv, boundary_json, DuplicatePolicy::Reject)
    }

    /// Load with an explicit duplicate-row policy.
    ///
    /// # Errors
    ///
    /// See [`App::load`].
    pub fn load_with_policy(
        csv: impl std::io::Read,
        boundary_json: &str,
        policy: DuplicatePolicy,
    ) -> Result<Self, DataError> {
        let records = read_records(csv)?;
        let features = FeatureCollection::from_json(boundary_json)?;
        Self::from_parts(records, &features, policy)
    }

    /// Build from already-parsed inputs.
    ///
    /// # Errors
    ///
    /// Returns the index build error for duplicate rows under
    /// [`DuplicatePolicy::Reject`].
    pub fn from_parts(
        records: Vec<CaseRecord>,
        features: &FeatureCollection,
        policy: DuplicatePolicy,
    ) -> Result<Self, DataError> {
        let index = CaseIndex::build(records, policy)?;
        let shapes = features.province_names(DEFAULT_NAME_PROPERTY);
        let reconciliation = reconcile(features, DEFAULT_NAME_PROPERTY, &index);
        let state = ViewState::new(&index);
        let series = national_series(&index, state.metric());
        Ok(Self {
            index,
            shapes,
            reconciliation,
            state,
            clock: PlaybackClock::default(),
            series,
            annotations: Vec::new(),
        })
    }

    /// Add a labelled marker to the timeline, e.g. the peak of a wave.
    ///
    /// Markers are redrawn with the timeline itself, so they survive
    /// metric switches.
    pub fn add_annotation(&mut self, date: NaiveDate, label: impl Into<String>) {
        self.annotations.push((date, label.into()));
    }

    /// Timeline markers added so far.
    #[must_use]
    pub fn annotations(&self) -> &[(NaiveDate, String)] {
        &self.annotations
    }

    /// The current snapshot.
    #[must_use]
    pub const fn state(&self) -> &ViewState {
        &self.state
    }

    /// The case index.
    #[must_use]
    pub const fn index(&self) -> &CaseIndex {
        &self.index
    }

    /// Name mismatches found between the datasets at load time.
    #[must_use]
    pub const fn reconciliation(&self) -> &Reconciliation {
        &self.reconciliation
    }

    /// National-total series for the current metric (full history).
    #[must_use]
    pub fn timeline_series(&self) -> &[(NaiveDate, u64)] {
        &self.series
    }

    /// Draw everything once after load: shapes, timeline, initial fills.
    pub fn render_initial(&self, surface: &mut dyn MapSurface) {
        surface.draw_province_shapes(&self.shapes);
        self.draw_timeline(surface);
        self.render(surface);
    }

    /// Apply one external event and redraw whatever it invalidated.
    pub fn dispatch(&mut self, msg: ViewMsg, surface: &mut dyn MapSurface) {
        let next = self.state.update(msg, &self.index);
        let metric_changed = next.metric() != self.state.metric();
        let window_changed = next.active_window() != self.state.active_window();

        // Swap the snapshot in before any surface call.
        self.state = next;
        if self.state.playing() {
            self.clock.play();
        } else {
            self.clock.pause();
        }

        if metric_changed {
            self.series = national_series(&self.index, self.state.metric());
            self.draw_timeline(surface);
        }
        if window_changed {
            if let (Some(start), Some(end)) =
                (self.state.active_window().first(), self.state.active_window().last())
            {
                surface.draw_brush_region(start, end);
            }
        }
        self.render(surface);
    }

    /// Advance playback by `dt` seconds of wall-clock time.
    ///
    /// Dispatches one tick per elapsed interval while playing. Pausing
    /// (or the cursor reaching the end of the window) stops further
    /// ticks within the same call.
    pub fn advance(&mut self, dt: f64, surface: &mut dyn MapSurface) {
        let steps = self.clock.advance(dt);
        for _ in 0..steps {
            if !self.state.playing() {
                break;
            }
            self.dispatch(ViewMsg::Tick, surface);
        }
    }

    /// Show the hover tooltip for a province at a screen position.
    pub fn hover(&self, province: &str, x: f64, y: f64, surface: &mut dyn MapSurface) {
        surface.show_tooltip(&self.tooltip(province), x, y);
    }

    /// Tooltip content for a province on the current date.
    ///
    /// Provinces without data on the current date (or an empty active
    /// window) read "N/A".
    #[must_use]
    pub fn tooltip(&self, province: &str) -> String {
        let metric = self.state.metric();
        let value = self
            .state
            .current_date()
            .and_then(|date| self.index.get(date, province))
            .map(|record| format_count(record.value(metric)));
        match value {
            Some(value) => format!("{province}\n{}: {value}", metric.label()),
            None => format!("{province}\n{}: N/A", metric.label()),
        }
    }

    /// Redraw the area chart and its annotation markers.
    fn draw_timeline(&self, surface: &mut dyn MapSurface) {
        surface.draw_timeline_area(&self.series);
        for (date, label) in &self.annotations {
            surface.draw_annotation(*date, label);
        }
    }

    /// Redraw slider, date label, and province fills for the current
    /// snapshot. An empty active window skips the update entirely and
    /// the display keeps its previous state.
    fn render(&self, surface: &mut dyn MapSurface) {
        let Some(date) = self.state.current_date() else {
            return;
        };
        surface.set_slider(
            self.state.cursor(),
            self.state.active_window().last_cursor().unwrap_or(0),
        );
        surface.set_date_label(&format_date(date));

        let scale = SequentialScale::reds(self.state.scale_max());
        let metric = self.state.metric();
        for province in &self.shapes {
            let fill = self
                .index
                .get(date, province)
                .map(|record| record.value(metric))
                .filter(|value| *value > 0)
                .map_or(Color::NEUTRAL, |value| scale.color(value));
            surface.set_shape_fill(province, fill);
        }
    }
}

/// "Jul 01, 2021" style date readout.
fn format_date(date: NaiveDate) -> String {
    date.format("%b %d, %Y").to_string()
}

/// Group digits in threes: 1234567 → "1,234,567".
fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
