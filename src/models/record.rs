// file: src/models/record.rs
// description: extracted feature record, the unit of tabular output
// reference: internal data structures

use serde::{Deserialize, Serialize};

/// One structured row of output. Only `feature` is guaranteed non-empty; every
/// other field is best-effort. The serde renames fix the CSV header row to
/// `Version, Release Date, Category, Feature, Developer, Funder`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureRecord {
    #[serde(rename = "Version")]
    pub version: String,
    #[serde(rename = "Release Date")]
    pub release_date: String,
    #[serde(rename = "Category")]
    pub category: String,
    #[serde(rename = "Feature")]
    pub feature: String,
    #[serde(rename = "Developer")]
    pub developer: String,
    #[serde(rename = "Funder")]
    pub funder: String,
}

impl FeatureRecord {
    pub fn new(version: impl Into<String>, feature: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            release_date: String::new(),
            category: String::new(),
            feature: feature.into(),
            developer: String::new(),
            funder: String::new(),
        }
    }
}
