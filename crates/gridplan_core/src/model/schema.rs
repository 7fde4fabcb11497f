//! Dataset schema and raw table types.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::DatasetError;

/// One row of the flat scenario table as loaded from CSV: every cell is the
/// raw string representation of a numeric fact.
pub type DataRow = FxHashMap<String, String>;

/// Schema for a scenario sweep dataset.
///
/// The ordering of `dimensions` is a contract, not a convention: the flat
/// scenario table is stored in row-major order with the last-listed dimension
/// varying fastest, and every lookup addresses rows by strides computed from
/// this ordering. Reordering dimensions without regenerating the table
/// returns wrong rows with no error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetSchema {
    /// Policy levers that vary across scenarios, in addressing order.
    pub dimensions: Vec<String>,
    /// Fact columns present on every row; either a bare metric (`cost`,
    /// `co2`) or a `<source>_<metric>` compound (`solar_energy`).
    pub facts: Vec<String>,
    /// Maps each dimension's ordinal levels to physical values (dollars,
    /// percent, ...). `scales[d].len()` is the number of levels of `d`.
    pub scales: FxHashMap<String, Vec<f64>>,
    /// Size of each dimension, in the same order as `dimensions`.
    pub shape: Vec<usize>,
    /// Reference outcome row for relative comparisons, when the dataset
    /// ships one.
    #[serde(default)]
    pub baseline: Option<FxHashMap<String, f64>>,
    /// Population of the modeled region, for per-household cost rollups.
    #[serde(default)]
    pub population: Option<f64>,
}

impl DatasetSchema {
    /// Check internal consistency of the schema.
    ///
    /// Every dimension must carry a scale whose length matches the shape
    /// entry at the same position.
    pub fn validate(&self) -> Result<(), DatasetError> {
        if self.shape.len() != self.dimensions.len() {
            return Err(DatasetError::InvalidSchema(format!(
                "shape has {} entries for {} dimensions",
                self.shape.len(),
                self.dimensions.len()
            )));
        }
        for (dimension, &size) in self.dimensions.iter().zip(&self.shape) {
            let Some(scale) = self.scales.get(dimension) else {
                return Err(DatasetError::InvalidSchema(format!(
                    "dimension {dimension:?} has no scale"
                )));
            };
            if scale.len() != size {
                return Err(DatasetError::InvalidSchema(format!(
                    "dimension {dimension:?} has {} scale levels but shape size {size}",
                    scale.len()
                )));
            }
            if size == 0 {
                return Err(DatasetError::InvalidSchema(format!(
                    "dimension {dimension:?} has zero levels"
                )));
            }
        }
        Ok(())
    }

    /// Number of rows the flat scenario table must contain.
    #[must_use]
    pub fn expected_rows(&self) -> usize {
        self.shape.iter().product()
    }

    /// Number of ordinal levels for the named dimension, if it exists.
    #[must_use]
    pub fn levels(&self, dimension: &str) -> Option<usize> {
        self.scales.get(dimension).map(Vec::len)
    }
}

/// A schema plus the flat scenario table it describes.
///
/// Rows are immutable once loaded; a fresh dataset load replaces the whole
/// value rather than mutating it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dataset {
    pub schema: DatasetSchema,
    /// One row per unique combination of dimension levels, in row-major
    /// order consistent with `schema.shape`.
    pub scenarios: Vec<DataRow>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_by_three_schema() -> DatasetSchema {
        let mut scales = FxHashMap::default();
        scales.insert("carbon_tax".to_string(), vec![0.0, 25.0]);
        scales.insert("rps".to_string(), vec![0.0, 0.3, 0.7]);
        DatasetSchema {
            dimensions: vec!["carbon_tax".to_string(), "rps".to_string()],
            facts: vec!["cost".to_string(), "co2".to_string()],
            scales,
            shape: vec![2, 3],
            baseline: None,
            population: None,
        }
    }

    #[test]
    fn test_valid_schema() {
        let schema = two_by_three_schema();
        assert!(schema.validate().is_ok());
        assert_eq!(schema.expected_rows(), 6);
        assert_eq!(schema.levels("rps"), Some(3));
        assert_eq!(schema.levels("nuclear_allowed"), None);
    }

    #[test]
    fn test_shape_dimension_disagreement() {
        let mut schema = two_by_three_schema();
        schema.shape.push(4);
        assert!(matches!(
            schema.validate(),
            Err(DatasetError::InvalidSchema(_))
        ));
    }

    #[test]
    fn test_scale_length_disagreement() {
        let mut schema = two_by_three_schema();
        schema.scales.insert("rps".to_string(), vec![0.0]);
        assert!(matches!(
            schema.validate(),
            Err(DatasetError::InvalidSchema(_))
        ));
    }

    #[test]
    fn test_missing_scale() {
        let mut schema = two_by_three_schema();
        schema.scales.remove("carbon_tax");
        assert!(matches!(
            schema.validate(),
            Err(DatasetError::InvalidSchema(_))
        ));
    }
}
