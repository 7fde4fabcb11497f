//! Derived metrics layered on scenario outcomes.
//!
//! Pure, stateless functions shared by the view components: per-MWh cost,
//! relative deltas versus a baseline, and per-resource cost/energy fractions.
//! Division by a zero baseline or zero total yields infinity/NaN; callers
//! that render these values handle the display themselves.

use serde::{Deserialize, Serialize};

use crate::config::{DISCOUNT_RATE_YEARLY, MONTHLY_COST_PER_HOUSEHOLD_FACTOR};
use crate::model::{ScenarioOutcome, Source, SummaryView};

/// Cost to fulfill a MWh of energy in $USD.
///
/// `cost` is the total cost of power generation over the infrastructure
/// lifetime; `yearly_consumed` is MWh consumed per year (excess generation
/// beyond demand is ignored due to curtailment). A MWh is roughly what a
/// typical household consumes each month.
#[must_use]
pub fn per_mwh_cost(cost: f64, yearly_consumed: f64) -> f64 {
    cost / DISCOUNT_RATE_YEARLY / yearly_consumed
}

/// Amortized monthly cost per household for a region of `population` people.
#[must_use]
pub fn as_monthly_per_household_cost(cost: f64, population: f64) -> f64 {
    cost / population * MONTHLY_COST_PER_HOUSEHOLD_FACTOR
}

/// Relative change of a scenario versus the baseline outcome.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Deltas {
    pub cost: f64,
    pub co2: f64,
}

/// Deviation of cost and CO2 emissions relative to the baseline,
/// as fractions of the baseline values.
#[must_use]
pub fn deltas(baseline: &ScenarioOutcome, current: &ScenarioOutcome) -> Deltas {
    let delta = |reference: f64, value: f64| (value - reference) / reference;
    Deltas {
        cost: delta(baseline.cost, current.cost),
        co2: delta(baseline.co2, current.co2),
    }
}

/// Total scenario cost ($USD/MWh).
#[must_use]
pub fn total_cost(view: &SummaryView) -> f64 {
    per_mwh_cost(view.summary.cost, view.summary.energy)
}

/// Baseline scenario cost ($USD/MWh).
#[must_use]
pub fn baseline_cost(view: &SummaryView) -> f64 {
    per_mwh_cost(view.baseline.cost, view.baseline.energy)
}

/// Cost difference between the scenario and the baseline ($USD/MWh).
#[must_use]
pub fn baseline_delta_cost(view: &SummaryView) -> f64 {
    total_cost(view) - baseline_cost(view)
}

/// Fraction of total scenario cost contributed by one resource.
#[must_use]
pub fn cost_fraction(view: &SummaryView, source: Source) -> f64 {
    view.summary.source(source).total_cost() / view.summary.cost
}

/// Fraction of total consumed energy contributed by one source.
#[must_use]
pub fn energy_fraction(view: &SummaryView, source: Source) -> f64 {
    view.summary.source(source).energy / view.summary.energy
}

/// Cost of a single resource ($USD/MWh).
#[must_use]
pub fn resource_cost(view: &SummaryView, source: Source) -> f64 {
    total_cost(view) * cost_fraction(view, source)
}
