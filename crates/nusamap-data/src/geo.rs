//! Boundary feature collection and province-name reconciliation.
//!
//! Only the parts of the boundary file the engine needs are modeled: one
//! feature per province with a string name property. Geometry is carried
//! opaquely for the host's shape drawing; projecting and rendering it is
//! out of scope here.

use nusamap_core::CaseIndex;
use serde::Deserialize;
use serde_json::Value;

use crate::error::DataError;

/// Property key carrying the province name in the source boundary file.
pub const DEFAULT_NAME_PROPERTY: &str = "NAME_1";

/// A boundary file: one feature per province.
#[derive(Debug, Clone, Deserialize)]
pub struct FeatureCollection {
    /// Province features
    pub features: Vec<Feature>,
}

/// One province feature.
#[derive(Debug, Clone, Deserialize)]
pub struct Feature {
    /// Feature properties; must include the province-name key
    #[serde(default)]
    pub properties: serde_json::Map<String, Value>,
    /// Opaque geometry, passed through to the host's shape drawing
    #[serde(default)]
    pub geometry: Option<Value>,
}

impl Feature {
    /// The trimmed province name under `property`, if present and a
    /// string.
    #[must_use]
    pub fn province_name(&self, property: &str) -> Option<&str> {
        self.properties.get(property)?.as_str().map(str::trim)
    }
}

impl FeatureCollection {
    /// Parse a boundary file from raw JSON.
    ///
    /// # Errors
    ///
    /// Returns [`DataError::Geo`] when the JSON does not have a
    /// `features` array of the expected shape.
    pub fn from_json(raw: &str) -> Result<Self, DataError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Trimmed province names in feature order; features missing the
    /// property are skipped.
    #[must_use]
    pub fn province_names(&self, property: &str) -> Vec<String> {
        self.features
            .iter()
            .filter_map(|feature| feature.province_name(property))
            .map(ToString::to_string)
            .collect()
    }
}

/// Name mismatches between the boundary file and the case data.
///
/// Neither direction is an error: unreported provinces render with the
/// neutral fill, unmapped provinces simply never get a shape. The report
/// exists so the host can surface the mismatch once at load time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reconciliation {
    /// Provinces drawn on the map that never appear in the case data
    pub unreported: Vec<String>,
    /// Provinces in the case data with no shape on the map
    pub unmapped: Vec<String>,
}

impl Reconciliation {
    /// Whether every name matched in both directions.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.unreported.is_empty() && self.unmapped.is_empty()
    }
}

/// Compare the boundary file's names against the indexed provinces.
#[must_use]
pub fn reconcile(
    features: &FeatureCollection,
    property: &str,
    index: &CaseIndex,
) -> Reconciliation {
    let mapped = features.province_names(property);
    let reported = index.provinces();

    let unreported = mapped
        .iter()
        .filter(|name| !reported.contains(&name.as_str()))
        .cloned()
        .collect();
    let unmapped = reported
        .iter()
        .filter(|name| !mapped.iter().any(|m| m == *name))
        .map(ToString::to_string)
        .collect();

    Reconciliation {
        unreported,
        unmapped,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use nusamap_core::{CaseRecord, DuplicatePolicy};

    const GEO: &str = r#"{
        "features": [
            {"properties": {"NAME_1": "Jakarta"}, "geometry": {"type": "Polygon"}},
            {"properties": {"NAME_1": " Bali "}},
            {"properties": {"OTHER": 1}}
        ]
    }"#;

    fn index(provinces: &[&str]) -> CaseIndex {
        let date = NaiveDate::from_ymd_opt(2021, 7, 1).unwrap();
        CaseIndex::build(
            provinces
                .iter()
                .map(|p| CaseRecord::new(date, *p, 1, 0, 1, 0))
                .collect::<Vec<_>>(),
            DuplicatePolicy::Reject,
        )
        .unwrap()
    }

    #[test]
    fn test_parse_and_names() {
        let features = FeatureCollection::from_json(GEO).unwrap();
        assert_eq!(features.features.len(), 3);
        assert_eq!(
            features.province_names(DEFAULT_NAME_PROPERTY),
            vec!["Jakarta", "Bali"]
        );
    }

    #[test]
    fn test_names_are_trimmed() {
        let features = FeatureCollection::from_json(GEO).unwrap();
        assert_eq!(features.features[1].province_name("NAME_1"), Some("Bali"));
    }

    #[test]
    fn test_invalid_json_is_geo_error() {
        let err = FeatureCollection::from_json("not json").unwrap_err();
        assert!(matches!(err, DataError::Geo(_)));
    }

    #[test]
    fn test_reconcile_clean() {
        let features = FeatureCollection::from_json(GEO).unwrap();
        let report = reconcile(
            &features,
            DEFAULT_NAME_PROPERTY,
            &index(&["Jakarta", "Bali"]),
        );
        assert!(report.is_clean());
    }

    #[test]
    fn test_reconcile_reports_both_directions() {
        let features = FeatureCollection::from_json(GEO).unwrap();
        let report = reconcile(
            &features,
            DEFAULT_NAME_PROPERTY,
            &index(&["Jakarta", "Papua"]),
        );
        assert_eq!(report.unreported, vec!["Bali"]);
        assert_eq!(report.unmapped, vec!["Papua"]);
        assert!(!report.is_clean());
    }
}
