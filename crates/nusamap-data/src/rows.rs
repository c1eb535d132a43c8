//! CSV case-row ingestion.
//!
//! The source export carries one row per (date, province) with the
//! columns `Date`, `Province`, `New Cases`, `New Deaths`, `Total Cases`,
//! `Total Deaths`. Dates are month/day/year; counters are numeric
//! strings. Province names are trimmed so they reconcile with the
//! boundary file's name property.

use std::io::Read;

use chrono::NaiveDate;
use nusamap_core::CaseRecord;
use serde::Deserialize;

use crate::error::DataError;

const DATE_FORMAT: &str = "%m/%d/%Y";

/// One raw row, column names exactly as in the source header.
#[derive(Debug, Clone, Deserialize)]
struct RawRow {
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Province")]
    province: String,
    #[serde(rename = "New Cases")]
    new_cases: String,
    #[serde(rename = "New Deaths")]
    new_deaths: String,
    #[serde(rename = "Total Cases")]
    total_cases: String,
    #[serde(rename = "Total Deaths")]
    total_deaths: String,
}

fn parse_date(raw: &str, line: u64) -> Result<NaiveDate, DataError> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).map_err(|_| DataError::BadDate {
        value: raw.trim().to_string(),
        line,
    })
}

fn parse_counter(raw: &str, column: &'static str, line: u64) -> Result<u64, DataError> {
    raw.trim().parse().map_err(|_| DataError::BadCounter {
        column,
        value: raw.trim().to_string(),
        line,
    })
}

/// Read all case records from CSV data.
///
/// # Errors
///
/// Fails on reader/header errors and on any row whose date or counters
/// do not parse; the error names the offending line. Whole-file failure
/// is deliberate — the map never renders from a partially parsed
/// dataset.
pub fn read_records<R: Read>(reader: R) -> Result<Vec<CaseRecord>, DataError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut records = Vec::new();

    for (row_index, row) in csv_reader.deserialize::<RawRow>().enumerate() {
        // line 1 is the header
        let line = row_index as u64 + 2;
        let row = row?;
        let date = parse_date(&row.date, line)?;
        records.push(CaseRecord::new(
            date,
            row.province,
            parse_counter(&row.new_cases, "New Cases", line)?,
            parse_counter(&row.new_deaths, "New Deaths", line)?,
            parse_counter(&row.total_cases, "Total Cases", line)?,
            parse_counter(&row.total_deaths, "Total Deaths", line)?,
        ));
    }

    Ok(records)
}
