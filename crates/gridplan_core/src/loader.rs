//! Dataset materialization.
//!
//! A scenario dataset arrives as two artifacts produced by the sweep
//! pipeline: a schema JSON document and a scenario table CSV with one row
//! per unique dimension-level combination. The loader turns any pair of
//! readers holding those artifacts into a validated [`Dataset`]; fetching
//! the bytes (HTTP, file, embedded) is the caller's concern.

use std::io::Read;

use tracing::debug;

use crate::error::DatasetError;
use crate::model::{DataRow, Dataset, DatasetSchema};

/// Parse and validate a schema JSON document.
pub fn load_schema<R: Read>(reader: R) -> Result<DatasetSchema, DatasetError> {
    let schema: DatasetSchema = serde_json::from_reader(reader)?;
    schema.validate()?;
    Ok(schema)
}

/// Parse a scenario table CSV into raw string-valued rows.
///
/// Cells stay unparsed here; numeric interpretation happens against the
/// schema's fact list when the index is built.
pub fn load_scenarios<R: Read>(reader: R) -> Result<Vec<DataRow>, DatasetError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let headers = csv_reader.headers()?.clone();

    let mut rows = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        let row: DataRow = headers
            .iter()
            .zip(record.iter())
            .map(|(header, cell)| (header.to_string(), cell.to_string()))
            .collect();
        rows.push(row);
    }
    Ok(rows)
}

/// Load a complete dataset from its schema and scenario-table artifacts.
pub fn load_dataset<S: Read, T: Read>(
    schema_reader: S,
    scenarios_reader: T,
) -> Result<Dataset, DatasetError> {
    let schema = load_schema(schema_reader)?;
    let scenarios = load_scenarios(scenarios_reader)?;
    debug!(
        rows = scenarios.len(),
        dimensions = schema.dimensions.len(),
        facts = schema.facts.len(),
        "scenario dataset loaded"
    );
    Ok(Dataset { schema, scenarios })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCHEMA_JSON: &str = r#"{
        "dimensions": ["carbon_tax", "rps"],
        "facts": ["cost", "co2", "solar_energy"],
        "scales": {"carbon_tax": [0, 25], "rps": [0, 0.3, 0.7]},
        "shape": [2, 3],
        "population": 39100000
    }"#;

    const SCENARIOS_CSV: &str = "\
cost,co2,solar_energy
100,50,1
101,49,2
102,48,3
103,47,4
104,46,5
105,45,6
";

    #[test]
    fn test_load_schema() {
        let schema = load_schema(SCHEMA_JSON.as_bytes()).unwrap();
        assert_eq!(schema.dimensions, vec!["carbon_tax", "rps"]);
        assert_eq!(schema.expected_rows(), 6);
        assert_eq!(schema.population, Some(39.1e6));
        assert_eq!(schema.baseline, None);
    }

    #[test]
    fn test_invalid_schema_rejected() {
        let truncated = r#"{"dimensions": ["rps"], "facts": [], "scales": {}, "shape": [3]}"#;
        assert!(matches!(
            load_schema(truncated.as_bytes()),
            Err(DatasetError::InvalidSchema(_))
        ));
    }

    #[test]
    fn test_load_scenarios() {
        let rows = load_scenarios(SCENARIOS_CSV.as_bytes()).unwrap();
        assert_eq!(rows.len(), 6);
        assert_eq!(rows[0]["cost"], "100");
        assert_eq!(rows[5]["solar_energy"], "6");
    }

    #[test]
    fn test_load_dataset() {
        let dataset = load_dataset(SCHEMA_JSON.as_bytes(), SCENARIOS_CSV.as_bytes()).unwrap();
        assert_eq!(dataset.scenarios.len(), dataset.schema.expected_rows());
    }
}
