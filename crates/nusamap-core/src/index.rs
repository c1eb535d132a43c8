//! Two-level (date, province) lookup over case records.

use std::collections::hash_map::Entry;
use std::collections::{BTreeMap, BTreeSet, HashMap};

use chrono::NaiveDate;
use thiserror::Error;

use crate::record::CaseRecord;

/// How [`CaseIndex::build`] treats duplicate (date, province) rows.
///
/// The source dataset is supposed to carry at most one row per pair, but
/// real exports sometimes repeat rows. `KeepLast` reproduces the
/// last-write-wins behavior of naive map insertion; `Reject` surfaces the
/// duplicate as a build error instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// Fail the build on the first duplicate pair
    #[default]
    Reject,
    /// Later rows silently replace earlier ones
    KeepLast,
    /// Earlier rows win; later duplicates are dropped
    KeepFirst,
}

/// Errors from building a [`CaseIndex`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IndexError {
    /// Two rows share a (date, province) pair under `DuplicatePolicy::Reject`.
    #[error("duplicate record for `{province}` on {date}")]
    Duplicate {
        /// Date of the colliding rows
        date: NaiveDate,
        /// Province of the colliding rows
        province: String,
    },
}

/// Read-only date → province → record lookup.
///
/// Built once from the full record set at load time and never mutated
/// afterwards. Dates iterate in ascending order; point lookup within a
/// date is O(1) amortized. A missing (date, province) pair is an expected
/// outcome, not an error — the map renders it as the neutral fill.
#[derive(Debug, Clone, Default)]
pub struct CaseIndex {
    by_date: BTreeMap<NaiveDate, HashMap<String, CaseRecord>>,
    record_count: usize,
}

impl CaseIndex {
    /// Build the index from raw records.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::Duplicate`] when two records share a
    /// (date, province) pair and `policy` is [`DuplicatePolicy::Reject`].
    pub fn build(
        records: impl IntoIterator<Item = CaseRecord>,
        policy: DuplicatePolicy,
    ) -> Result<Self, IndexError> {
        let mut by_date: BTreeMap<NaiveDate, HashMap<String, CaseRecord>> = BTreeMap::new();
        let mut record_count = 0;

        for record in records {
            let provinces = by_date.entry(record.date).or_default();
            match provinces.entry(record.province.clone()) {
                Entry::Vacant(slot) => {
                    slot.insert(record);
                    record_count += 1;
                }
                Entry::Occupied(mut slot) => match policy {
                    DuplicatePolicy::Reject => {
                        return Err(IndexError::Duplicate {
                            date: record.date,
                            province: record.province,
                        });
                    }
                    DuplicatePolicy::KeepLast => {
                        slot.insert(record);
                    }
                    DuplicatePolicy::KeepFirst => {}
                },
            }
        }

        Ok(Self {
            by_date,
            record_count,
        })
    }

    /// Point lookup; `None` when the province has no row on that date.
    #[must_use]
    pub fn get(&self, date: NaiveDate, province: &str) -> Option<&CaseRecord> {
        self.by_date.get(&date)?.get(province)
    }

    /// All dates with at least one record, ascending and de-duplicated.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.by_date.keys().copied()
    }

    /// Records reported on a given date, in arbitrary province order.
    /// Empty when the date is absent.
    pub fn records_on(&self, date: NaiveDate) -> impl Iterator<Item = &CaseRecord> {
        self.by_date.get(&date).into_iter().flat_map(HashMap::values)
    }

    /// Province names reported on a given date.
    pub fn provinces_on(&self, date: NaiveDate) -> impl Iterator<Item = &str> {
        self.by_date
            .get(&date)
            .into_iter()
            .flat_map(|provinces| provinces.keys().map(String::as_str))
    }

    /// Every province name appearing anywhere in the dataset, sorted.
    #[must_use]
    pub fn provinces(&self) -> Vec<&str> {
        let unique: BTreeSet<&str> = self
            .by_date
            .values()
            .flat_map(|provinces| provinces.keys().map(String::as_str))
            .collect();
        unique.into_iter().collect()
    }

    /// Number of distinct (date, province) records kept.
    #[must_use]
    pub fn len(&self) -> usize {
        self.record_count
    }

    /// Whether the index holds no records at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.record_count == 0
    }
}
