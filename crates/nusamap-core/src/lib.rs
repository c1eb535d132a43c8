//! Core engine for the nusamap province choropleth.
//!
//! This crate owns the logic that drives the map's visual state:
//!
//! - [`CaseIndex`] — date → province → record lookup, built once at load
//! - [`DateWindow`] — the full timeline and brushed sub-ranges
//! - [`scale`] — color-scale domains and the national timeline series
//! - [`PlaybackClock`] — tick accumulation for auto-play
//! - [`ViewState`] — immutable snapshots updated by [`ViewMsg`] events
//!
//! Rendering, DOM wiring, and file fetching live with the host; nothing
//! in here draws.
//!
//! # Example
//!
//! ```
//! use nusamap_core::{CaseIndex, CaseRecord, DuplicatePolicy, Metric, ViewState};
//! use chrono::NaiveDate;
//!
//! let day = |d| NaiveDate::from_ymd_opt(2021, 7, d).unwrap();
//! let index = CaseIndex::build(
//!     vec![
//!         CaseRecord::new(day(1), "Jakarta", 100, 1, 100, 1),
//!         CaseRecord::new(day(2), "Jakarta", 200, 0, 300, 1),
//!     ],
//!     DuplicatePolicy::Reject,
//! )?;
//!
//! let state = ViewState::new(&index);
//! assert_eq!(state.scale_max(), 200);
//! assert_eq!(state.metric(), Metric::NewCases);
//! # Ok::<(), nusamap_core::IndexError>(())
//! ```

pub mod color;
pub mod index;
pub mod playback;
pub mod record;
pub mod scale;
pub mod state;
pub mod window;

pub use color::{Color, ColorParseError};
pub use index::{CaseIndex, DuplicatePolicy, IndexError};
pub use playback::{PlaybackClock, DEFAULT_TICK_INTERVAL};
pub use record::{CaseRecord, Metric, ParseMetricError};
pub use scale::{max_in_window, national_series, SequentialScale};
pub use state::{ViewMsg, ViewState};
pub use window::DateWindow;
