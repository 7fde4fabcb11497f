//! Scenario outcome types.
//!
//! Plain data structs: every query against the index materializes a fresh
//! outcome value, and downstream view components read them immutably.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::Source;

/// Aggregate outcome of one scenario.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScenarioOutcome {
    /// Total cost of power generation over the infrastructure lifetime ($USD).
    pub cost: f64,
    /// CO2 emitted per year (metric tonnes).
    pub co2: f64,
    /// Energy consumed per year (MWh).
    pub energy: f64,
}

/// Per-source contribution to a scenario outcome.
///
/// Policy sweep rows populate `energy`/`cost`; profile summaries populate
/// `energy`/`capacity`/`fixed_cost`/`variable_cost`/`co2`/`consumed`. Fields
/// a given dataset does not carry stay zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SourceOutcome {
    /// Energy generated (MWh).
    pub energy: f64,
    /// Energy consumed toward demand, net of curtailed excess (MWh).
    pub consumed: f64,
    /// Peak generation capacity used (MW).
    pub capacity: f64,
    /// Total attributed cost when the dataset reports a single figure ($USD).
    pub cost: f64,
    /// Capital and fixed cost of the built capacity ($USD).
    pub fixed_cost: f64,
    /// Fuel and operating cost of the generated energy ($USD).
    pub variable_cost: f64,
    /// CO2 emitted (metric tonnes).
    pub co2: f64,
}

impl SourceOutcome {
    /// Total cost attributed to this source, whichever cost fields the
    /// dataset populated.
    #[must_use]
    pub fn total_cost(&self) -> f64 {
        self.cost + self.fixed_cost + self.variable_cost
    }
}

/// A scenario outcome with its per-source decomposition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScenarioOutcomeBreakdown {
    pub cost: f64,
    pub co2: f64,
    pub energy: f64,
    pub breakdown: FxHashMap<Source, SourceOutcome>,
}

impl ScenarioOutcomeBreakdown {
    /// The aggregate outcome without the per-source decomposition.
    #[must_use]
    pub fn outcome(&self) -> ScenarioOutcome {
        ScenarioOutcome {
            cost: self.cost,
            co2: self.co2,
            energy: self.energy,
        }
    }

    /// Per-source contribution, zero for sources the breakdown omits.
    #[must_use]
    pub fn source(&self, source: Source) -> SourceOutcome {
        self.breakdown.get(&source).copied().unwrap_or_default()
    }
}

/// Outcomes for every level of one dimension, all other dimensions held
/// fixed, ordered by ascending ordinal level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionSlice<T = ScenarioOutcomeBreakdown> {
    /// The dimension that varies among the scenarios.
    pub dimension: String,
    /// One outcome per ordinal level of `dimension`.
    pub scenarios: Vec<T>,
}

/// An exact scenario outcome plus one dimension-aligned slice per dimension,
/// used to preview the effect of moving any single policy lever.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetSelection<T = ScenarioOutcomeBreakdown> {
    pub scenario: T,
    pub slices: FxHashMap<String, DimensionSlice<T>>,
}

/// A scenario summary paired with the reference outcome it is compared
/// against; the view object the derived transforms operate on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryView {
    pub summary: ScenarioOutcomeBreakdown,
    pub baseline: ScenarioOutcome,
    /// Population of the modeled region.
    pub population: f64,
}
