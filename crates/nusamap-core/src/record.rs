//! Case observations and the selectable metrics that drive the map.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The four metrics a user can color the map by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Metric {
    /// Newly reported cases on the day
    #[default]
    NewCases,
    /// Newly reported deaths on the day
    NewDeaths,
    /// Cumulative cases up to the day
    TotalCases,
    /// Cumulative deaths up to the day
    TotalDeaths,
}

impl Metric {
    /// All metrics in dropdown order.
    pub const ALL: [Self; 4] = [
        Self::NewCases,
        Self::NewDeaths,
        Self::TotalCases,
        Self::TotalDeaths,
    ];

    /// Human-readable label, matching the source dataset's column names.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::NewCases => "New Cases",
            Self::NewDeaths => "New Deaths",
            Self::TotalCases => "Total Cases",
            Self::TotalDeaths => "Total Deaths",
        }
    }
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when a metric label is not one of the four options.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown metric label `{0}`")]
pub struct ParseMetricError(pub String);

impl std::str::FromStr for Metric {
    type Err = ParseMetricError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "New Cases" => Ok(Self::NewCases),
            "New Deaths" => Ok(Self::NewDeaths),
            "Total Cases" => Ok(Self::TotalCases),
            "Total Deaths" => Ok(Self::TotalDeaths),
            other => Err(ParseMetricError(other.to_string())),
        }
    }
}

/// One observation for one province on one calendar date.
///
/// Records are immutable after load; counters are non-negative by
/// construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseRecord {
    /// Calendar date of the observation (no time-of-day component)
    pub date: NaiveDate,
    /// Province name, trimmed, matching the boundary file's name property
    pub province: String,
    /// Newly reported cases
    pub new_cases: u64,
    /// Newly reported deaths
    pub new_deaths: u64,
    /// Cumulative cases
    pub total_cases: u64,
    /// Cumulative deaths
    pub total_deaths: u64,
}

impl CaseRecord {
    /// Create a record, trimming the province name.
    #[must_use]
    pub fn new(
        date: NaiveDate,
        province: impl Into<String>,
        new_cases: u64,
        new_deaths: u64,
        total_cases: u64,
        total_deaths: u64,
    ) -> Self {
        let province = province.into().trim().to_string();
        Self {
            date,
            province,
            new_cases,
            new_deaths,
            total_cases,
            total_deaths,
        }
    }

    /// Value of the given metric for this observation.
    #[must_use]
    pub const fn value(&self, metric: Metric) -> u64 {
        match metric {
            Metric::NewCases => self.new_cases,
            Metric::NewDeaths => self.new_deaths,
            Metric::TotalCases => self.total_cases,
            Metric::TotalDeaths => self.total_deaths,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_metric_labels_match_dataset_columns() {
        assert_eq!(Metric::NewCases.label(), "New Cases");
        assert_eq!(Metric::NewDeaths.label(), "New Deaths");
        assert_eq!(Metric::TotalCases.label(), "Total Cases");
        assert_eq!(Metric::TotalDeaths.label(), "Total Deaths");
    }

    #[test]
    fn test_metric_from_str_roundtrip() {
        for metric in Metric::ALL {
            let parsed: Metric = metric.label().parse().unwrap();
            assert_eq!(parsed, metric);
        }
    }

    #[test]
    fn test_metric_from_str_trims() {
        let parsed: Metric = "  New Deaths ".parse().unwrap();
        assert_eq!(parsed, Metric::NewDeaths);
    }

    #[test]
    fn test_metric_from_str_unknown() {
        let err = "Recoveries".parse::<Metric>().unwrap_err();
        assert_eq!(err, ParseMetricError("Recoveries".to_string()));
    }

    #[test]
    fn test_metric_default_is_new_cases() {
        assert_eq!(Metric::default(), Metric::NewCases);
    }

    #[test]
    fn test_record_trims_province() {
        let record = CaseRecord::new(date(2021, 7, 1), "  Jakarta ", 1, 2, 3, 4);
        assert_eq!(record.province, "Jakarta");
    }

    #[test]
    fn test_record_value_per_metric() {
        let record = CaseRecord::new(date(2021, 7, 1), "Jakarta", 10, 20, 30, 40);
        assert_eq!(record.value(Metric::NewCases), 10);
        assert_eq!(record.value(Metric::NewDeaths), 20);
        assert_eq!(record.value(Metric::TotalCases), 30);
        assert_eq!(record.value(Metric::TotalDeaths), 40);
    }
}
