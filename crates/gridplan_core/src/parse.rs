//! Flat-row parsing.
//!
//! Converts one row of the scenario table into a structured outcome record.
//! Fact names are either a bare metric (`cost`, `co2`, `energy`) parsed as a
//! top-level scalar, or a `<source>_<metric>` compound (`solar_energy`,
//! `ng_cost`) attributed to the per-source breakdown. Anything with more
//! underscore-delimited tokens is rejected.
//!
//! Unlike the permissive original, malformed numeric cells and unknown
//! source or metric tokens fail the parse instead of producing silent NaN.

use rustc_hash::FxHashMap;

use crate::error::DatasetError;
use crate::model::{DatasetSchema, ScenarioOutcomeBreakdown, Source};

/// A raw fact cell that can be interpreted as a numeric metric.
///
/// Scenario CSV rows carry string cells; baseline rows embedded in the
/// schema JSON carry numbers. Both parse through the same path.
pub trait FactValue {
    /// The metric value, or the raw representation on failure.
    fn to_metric(&self) -> Result<f64, String>;
}

impl FactValue for String {
    fn to_metric(&self) -> Result<f64, String> {
        match self.trim().parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(value),
            _ => Err(self.clone()),
        }
    }
}

impl FactValue for f64 {
    fn to_metric(&self) -> Result<f64, String> {
        if self.is_finite() {
            Ok(*self)
        } else {
            Err(self.to_string())
        }
    }
}

/// Parse one flat row into an outcome-with-breakdown record.
///
/// Every fact declared by the schema must be present on the row with a
/// finite numeric value. Deterministic; no state, no side effects.
pub fn parse_row<V: FactValue>(
    row: &FxHashMap<String, V>,
    schema: &DatasetSchema,
) -> Result<ScenarioOutcomeBreakdown, DatasetError> {
    let mut outcome = ScenarioOutcomeBreakdown::default();

    for fact in &schema.facts {
        let value = match row.get(fact) {
            Some(cell) => cell.to_metric().map_err(|raw| DatasetError::MalformedValue {
                fact: fact.clone(),
                value: raw,
            })?,
            None => {
                return Err(DatasetError::MalformedValue {
                    fact: fact.clone(),
                    value: "<missing>".to_string(),
                });
            }
        };

        let tokens: Vec<&str> = fact.split('_').collect();
        match tokens.as_slice() {
            [metric] => match *metric {
                "cost" => outcome.cost = value,
                "co2" => outcome.co2 = value,
                "energy" => outcome.energy = value,
                _ => return Err(DatasetError::UnknownMetric { fact: fact.clone() }),
            },
            [source, metric] => {
                let source: Source = source.parse()?;
                let entry = outcome.breakdown.entry(source).or_default();
                match *metric {
                    "energy" => entry.energy = value,
                    "consumed" => entry.consumed = value,
                    "capacity" => entry.capacity = value,
                    "cost" => entry.cost = value,
                    "co2" => entry.co2 = value,
                    _ => return Err(DatasetError::UnknownMetric { fact: fact.clone() }),
                }
            }
            _ => {
                return Err(DatasetError::UnsupportedFieldShape { fact: fact.clone() });
            }
        }
    }

    Ok(outcome)
}
