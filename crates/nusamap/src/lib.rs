//! Interactive province choropleth with a timeline scrubber.
//!
//! Loads a per-province case dataset and a boundary file, joins them by
//! province name and date, and drives a host rendering surface as the
//! user scrubs time, brushes the timeline, switches metrics, or lets
//! playback run.
//!
//! The facade re-exports the core engine ([`nusamap_core`]) and the
//! ingestion layer ([`nusamap_data`] as [`data`]); [`App`] wires them to
//! a [`MapSurface`] implementation.

pub use nusamap_core::*;
pub use nusamap_data as data;

pub mod app;
pub mod surface;

pub use app::App;
pub use surface::{MapSurface, RecordingSurface, SurfaceCall};
