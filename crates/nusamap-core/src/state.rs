//! Immutable view-state snapshots and the event reducer.
//!
//! Every external event (slider drag, metric change, brush change,
//! play/pause, playback tick) is a [`ViewMsg`]; [`ViewState::update`]
//! produces the successor snapshot with window, cursor, and scale domain
//! mutually consistent before anything renders. No field is ever mutated
//! in place, so a stale scale can never pair with a new range.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::index::CaseIndex;
use crate::record::Metric;
use crate::scale::max_in_window;
use crate::window::DateWindow;

/// External events that change the view state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMsg {
    /// Slider moved to an absolute cursor position
    SetCursor(usize),
    /// Dropdown changed the displayed metric
    SetMetric(Metric),
    /// Brush selected an inclusive date interval on the timeline
    Brush {
        /// Lower bound of the selection
        start: NaiveDate,
        /// Upper bound of the selection
        end: NaiveDate,
    },
    /// Brush selection cleared; the active window reverts to the full range
    ClearBrush,
    /// Play/pause toggle pressed
    TogglePlay,
    /// One playback step is due
    Tick,
}

/// One consistent snapshot of everything the rendered map depends on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    full: DateWindow,
    active: DateWindow,
    cursor: usize,
    metric: Metric,
    playing: bool,
    scale_max: u64,
}

impl ViewState {
    /// Initial snapshot: full window, cursor 0, default metric, stopped.
    #[must_use]
    pub fn new(index: &CaseIndex) -> Self {
        let full = DateWindow::full(index);
        let metric = Metric::default();
        let scale_max = max_in_window(index, &full, metric);
        Self {
            active: full.clone(),
            full,
            cursor: 0,
            metric,
            playing: false,
            scale_max,
        }
    }

    /// The full date range of the dataset.
    #[must_use]
    pub const fn full_window(&self) -> &DateWindow {
        &self.full
    }

    /// The active (possibly brushed) date window.
    #[must_use]
    pub const fn active_window(&self) -> &DateWindow {
        &self.active
    }

    /// Cursor position within the active window.
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// The currently displayed date, `None` when the active window is
    /// empty.
    #[must_use]
    pub fn current_date(&self) -> Option<NaiveDate> {
        self.active.date_at(self.cursor)
    }

    /// The selected metric.
    #[must_use]
    pub const fn metric(&self) -> Metric {
        self.metric
    }

    /// Whether playback is running.
    #[must_use]
    pub const fn playing(&self) -> bool {
        self.playing
    }

    /// Upper end of the color-scale domain for the current window and
    /// metric.
    #[must_use]
    pub const fn scale_max(&self) -> u64 {
        self.scale_max
    }

    /// Produce the successor snapshot for `msg`.
    ///
    /// Window and metric changes recompute the scale domain within the
    /// same call; brushing resets the cursor to 0 and stops playback;
    /// metric changes stop playback but keep the cursor (the window is
    /// unchanged, so the position stays valid). Ticks stop playback when
    /// the cursor reaches the final index instead of wrapping.
    #[must_use]
    pub fn update(&self, msg: ViewMsg, index: &CaseIndex) -> Self {
        let mut next = self.clone();
        match msg {
            ViewMsg::SetCursor(position) => {
                next.cursor = next.active.clamp_cursor(position);
            }
            ViewMsg::SetMetric(metric) => {
                next.metric = metric;
                next.playing = false;
                next.scale_max = max_in_window(index, &next.active, metric);
            }
            ViewMsg::Brush { start, end } => {
                next.active = next.full.brushed(start, end);
                next.cursor = 0;
                next.playing = false;
                next.scale_max = max_in_window(index, &next.active, next.metric);
            }
            ViewMsg::ClearBrush => {
                next.active = next.full.clone();
                next.cursor = 0;
                next.playing = false;
                next.scale_max = max_in_window(index, &next.active, next.metric);
            }
            ViewMsg::TogglePlay => {
                if next.playing {
                    next.playing = false;
                } else if !next.active.is_empty() {
                    next.playing = true;
                }
            }
            ViewMsg::Tick => {
                if next.playing {
                    match next.active.last_cursor() {
                        Some(last) if next.cursor < last => {
                            next.cursor += 1;
                            if next.cursor == last {
                                next.playing = false;
                            }
                        }
                        _ => next.playing = false,
                    }
                }
            }
        }
        next
    }
}
