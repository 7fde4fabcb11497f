//! Cost, emission, and comparison constants.
//!
//! These are external configuration consumed as named constants: per-source
//! cost and CO2 tables from EIA-derived utility data, amortization factors,
//! and the reference outcome used for relative comparisons.

use crate::model::{ScenarioOutcome, Source};
use crate::profiles::Allocations;

pub const MONTHS_PER_YEAR: f64 = 12.0;
pub const WEEKS_PER_YEAR: f64 = 52.0;
/// Rate of 6% over the 30-year infrastructure lifetime.
pub const DISCOUNT_RATE_YEARLY: f64 = 14.6;
pub const DISCOUNT_RATE_WEEKLY: f64 = DISCOUNT_RATE_YEARLY * WEEKS_PER_YEAR;
pub const POUNDS_PER_TONNE: f64 = 2204.62;

pub const PEOPLE_PER_HOUSEHOLD: f64 = 2.53;
pub(crate) const MONTHLY_COST_PER_HOUSEHOLD_FACTOR: f64 =
    PEOPLE_PER_HOUSEHOLD / (MONTHS_PER_YEAR * DISCOUNT_RATE_YEARLY);

/// Reference outcome for relative comparison: today's grid.
pub const BASELINE: ScenarioOutcome = ScenarioOutcome {
    cost: 104e9,   // $USD
    co2: 57.0e6,   // metric tonnes/year
    energy: 280e6, // MWh/year
};

/// California; source: 2015 US Census.
pub const POPULATION: f64 = 39.1e6;

/// Fixed cost (capital + fixed) per MW of built capacity ($USD/MW).
#[must_use]
pub fn fixed_cost(source: Source) -> f64 {
    match source {
        Source::Ng => 770_633.,
        Source::Solar => 1_356_035.,
        Source::Wind => 2_181_533.,
        Source::Nuclear => 4_667_258.,
        Source::Coal => 3_388_939.,
        Source::NgCcs => 1_505_159.,
        Source::CoalCcs => 4_559_261.,
        Source::Hydro | Source::Storage => 0.0,
    }
}

/// Variable cost (including fuel) per MWh generated ($USD/MWh).
#[must_use]
pub fn variable_cost(source: Source) -> f64 {
    match source {
        Source::Ng => 32.1,
        Source::Nuclear => 12.0,
        Source::Solar | Source::Wind => 0.0,
        Source::Coal => 23.3,
        Source::NgCcs => 47.7,
        Source::CoalCcs => 42.9,
        Source::Hydro | Source::Storage => 0.0,
    }
}

/// Rate of CO2 creation per MWh generated (tonnes/MWh).
#[must_use]
pub fn co2_rate(source: Source) -> f64 {
    match source {
        Source::Ng => 0.4538,
        Source::Coal => 0.8582,
        Source::NgCcs => 0.0549,
        Source::CoalCcs => 0.1013,
        Source::Nuclear | Source::Solar | Source::Wind | Source::Hydro | Source::Storage => 0.0,
    }
}

/// Pre-configured allocations backing the preset buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// Nuclear-heavy.
    Nuclear,
    /// Wind-heavy.
    Wind,
    /// Solar-heavy.
    Solar,
    /// Balanced mix of energy sources.
    Balanced,
}

#[must_use]
pub fn preset_allocations(preset: Preset) -> Allocations {
    let fractions: [(Source, f64); 5] = match preset {
        Preset::Nuclear => [
            (Source::Solar, 0.0),
            (Source::Wind, 0.0),
            (Source::Ng, 0.53),
            (Source::Nuclear, 0.71),
            (Source::Coal, 0.0),
        ],
        Preset::Wind => [
            (Source::Solar, 0.0),
            (Source::Wind, 0.66),
            (Source::Ng, 0.76),
            (Source::Nuclear, 0.0),
            (Source::Coal, 0.0),
        ],
        Preset::Solar => [
            (Source::Solar, 0.5),
            (Source::Wind, 0.0),
            (Source::Ng, 1.0),
            (Source::Nuclear, 0.0),
            (Source::Coal, 0.0),
        ],
        Preset::Balanced => [
            (Source::Solar, 0.19),
            (Source::Wind, 0.26),
            (Source::Ng, 0.50),
            (Source::Nuclear, 0.42),
            (Source::Coal, 0.1),
        ],
    };
    fractions.into_iter().collect()
}
