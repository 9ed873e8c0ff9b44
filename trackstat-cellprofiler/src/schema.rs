//! Column schema of the exported table
//!
//! Four fixed columns (frame, spot id, track id, file location) are followed
//! by feature columns. Feature columns come from two parallel lists: display
//! headers and the session feature keys they read. The lists always have the
//! same length.

use trackstat_core::{features, ExportError};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

pub const FRAME_COLUMN: &str = "ImageNumber";
pub const SPOT_ID_COLUMN: &str = "ObjectNumber";
pub const TRACK_ID_COLUMN: &str = "TrackObjects_ParentObjectNumber_50";
pub const FILE_COLUMN: &str = "Metadata_FileLocation";

pub const FIXED_COLUMNS: [&str; 4] = [FRAME_COLUMN, SPOT_ID_COLUMN, TRACK_ID_COLUMN, FILE_COLUMN];

const CELLPROFILER_HEADERS: [&str; 5] = [
    "AreaShape_Center_X",
    "AreaShape_Center_Y",
    "AreaShape_MeanRadius",
    "Intensity_MeanIntensity_OrigGray",
    "Intensity_MedianIntensity_OrigGray",
];

const CELLPROFILER_FEATURES: [&str; 5] = [
    features::POSITION_X,
    features::POSITION_Y,
    features::RADIUS,
    features::MEAN_INTENSITY,
    features::MEDIAN_INTENSITY,
];

/// Feature columns of the table, as parallel header and feature-key lists
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnSchema {
    headers: Vec<String>,
    features: Vec<String>,
}

#[derive(Deserialize)]
struct RawSchema {
    headers: Vec<String>,
    features: Vec<String>,
}

impl ColumnSchema {
    /// Build a schema, validating that the lists line up
    pub fn new(headers: Vec<String>, features: Vec<String>) -> Result<Self, ExportError> {
        if headers.len() != features.len() {
            return Err(ExportError::schema_mismatch(format!(
                "{} headers but {} features",
                headers.len(),
                features.len()
            )));
        }

        let mut seen: HashSet<&str> = FIXED_COLUMNS.iter().copied().collect();
        for header in &headers {
            if header.is_empty() {
                return Err(ExportError::schema_mismatch("empty column header"));
            }
            if !seen.insert(header.as_str()) {
                return Err(ExportError::schema_mismatch(format!("duplicate column '{}'", header)));
            }
        }
        if let Some(i) = features.iter().position(|f| f.is_empty()) {
            return Err(ExportError::schema_mismatch(format!(
                "empty feature key for column '{}'",
                headers[i]
            )));
        }

        Ok(Self { headers, features })
    }

    /// The CellProfiler layout: center, mean radius, mean and median intensity
    pub fn cellprofiler() -> Self {
        Self {
            headers: CELLPROFILER_HEADERS.iter().map(|s| s.to_string()).collect(),
            features: CELLPROFILER_FEATURES.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Append one header/feature pair
    pub fn extended(self, header: impl Into<String>, feature: impl Into<String>) -> Result<Self, ExportError> {
        let Self { mut headers, mut features } = self;
        headers.push(header.into());
        features.push(feature.into());
        Self::new(headers, features)
    }

    /// Parse `{"headers": [...], "features": [...]}`
    pub fn from_json(json: &str) -> Result<Self, ExportError> {
        let raw: RawSchema = serde_json::from_str(json)?;
        Self::new(raw.headers, raw.features)
    }

    /// (header, feature key) pairs in column order
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.headers.iter().map(|h| h.as_str()).zip(self.features.iter().map(|f| f.as_str()))
    }

    /// Every column of the table, fixed columns first
    pub fn columns(&self) -> Vec<String> {
        FIXED_COLUMNS.iter()
            .map(|c| c.to_string())
            .chain(self.headers.iter().cloned())
            .collect()
    }

    pub fn width(&self) -> usize {
        FIXED_COLUMNS.len() + self.headers.len()
    }
}

impl Default for ColumnSchema {
    fn default() -> Self {
        Self::cellprofiler()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trackstat_core::codes;

    #[test]
    fn test_cellprofiler_columns() {
        let schema = ColumnSchema::cellprofiler();
        assert_eq!(schema.columns(), vec![
            "ImageNumber",
            "ObjectNumber",
            "TrackObjects_ParentObjectNumber_50",
            "Metadata_FileLocation",
            "AreaShape_Center_X",
            "AreaShape_Center_Y",
            "AreaShape_MeanRadius",
            "Intensity_MeanIntensity_OrigGray",
            "Intensity_MedianIntensity_OrigGray",
        ]);
        assert_eq!(schema.width(), 9);
    }

    #[test]
    fn test_pairs_line_up() {
        let schema = ColumnSchema::cellprofiler();
        let pairs: Vec<(&str, &str)> = schema.pairs().collect();
        assert_eq!(pairs[2], ("AreaShape_MeanRadius", "RADIUS"));
        assert_eq!(pairs[4], ("Intensity_MedianIntensity_OrigGray", "MEDIAN_INTENSITY"));
    }

    #[test]
    fn test_length_mismatch_rejected() {
        let err = ColumnSchema::new(vec!["A".into(), "B".into()], vec!["X".into()]).unwrap_err();
        assert_eq!(err.code, codes::SCHEMA_MISMATCH);
    }

    #[test]
    fn test_fixed_column_collision_rejected() {
        let err = ColumnSchema::cellprofiler().extended("ObjectNumber", "QUALITY").unwrap_err();
        assert!(err.message.contains("duplicate column 'ObjectNumber'"));
    }

    #[test]
    fn test_extended() {
        let schema = ColumnSchema::cellprofiler()
            .extended("Location_Center_Z", features::POSITION_Z)
            .unwrap();
        assert_eq!(schema.width(), 10);
        assert_eq!(schema.pairs().last(), Some(("Location_Center_Z", "POSITION_Z")));
    }

    #[test]
    fn test_from_json() {
        let schema = ColumnSchema::from_json(
            r#"{"headers": ["Quality"], "features": ["QUALITY"]}"#,
        ).unwrap();
        assert_eq!(schema.columns().len(), 5);

        let err = ColumnSchema::from_json(r#"{"headers": ["Quality"], "features": []}"#).unwrap_err();
        assert_eq!(err.code, codes::SCHEMA_MISMATCH);

        let err = ColumnSchema::from_json("not json").unwrap_err();
        assert_eq!(err.code, codes::CONFIG_ERROR);
    }

    #[test]
    fn test_serializes_both_lists() {
        let json = serde_json::to_value(ColumnSchema::cellprofiler()).unwrap();
        assert_eq!(json["headers"].as_array().map(|a| a.len()), Some(5));
        assert_eq!(json["features"][0], "POSITION_X");
    }
}
