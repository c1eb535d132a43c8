//! Dataset ingestion for nusamap.
//!
//! Two inputs feed the map: a CSV export of per-province case rows
//! ([`rows`]) and a JSON boundary file with one feature per province
//! ([`geo`]). Both loads are all-or-nothing — any parse failure aborts
//! the session rather than rendering from partial data.

pub mod error;
pub mod geo;
pub mod rows;

pub use error::DataError;
pub use geo::{reconcile, Feature, FeatureCollection, Reconciliation, DEFAULT_NAME_PROPERTY};
pub use rows::read_records;
