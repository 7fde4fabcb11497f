//! Energy profile allocation and summarization.
//!
//! A [`ProfileSet`] holds one week of hourly per-source generation capacity
//! profiles plus the demand profile they are dispatched against. The
//! functions here scale those profiles by user-chosen allocation fractions,
//! run the dispatch rule for on-demand sources, and roll the result up into
//! cost/CO2 outcomes.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::config;
use crate::error::ProfileError;
use crate::model::{ScenarioOutcomeBreakdown, Source, SourceOutcome};

/// Per-source capacity allocation fractions, each in `[0, 1]`.
///
/// A source carried by the profile set but absent from the allocation map is
/// treated as allocated at zero (a disallowed source).
pub type Allocations = FxHashMap<Source, f64>;

/// A time-indexed set of per-source energy profiles and the demand profile
/// they serve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileSet {
    /// Time step labels (hour offsets).
    pub index: Vec<u32>,
    /// Unit of every series value (e.g. `"MW"`).
    pub units: String,
    /// Demand targeted for fulfillment at each time step.
    pub demand: Vec<f64>,
    /// Demand left unfulfilled at each time step.
    pub unmet: Vec<f64>,
    /// Per-source generation series, spanning the same time steps as demand.
    pub series: FxHashMap<Source, Vec<f64>>,
}

impl ProfileSet {
    /// Number of time steps covered.
    #[must_use]
    pub fn steps(&self) -> usize {
        self.demand.len()
    }

    fn validate(&self) -> Result<(), ProfileError> {
        let expected = self.steps();
        for (&source, series) in &self.series {
            if series.len() != expected {
                return Err(ProfileError::LengthMismatch {
                    source,
                    expected,
                    actual: series.len(),
                });
            }
        }
        Ok(())
    }
}

/// Scale an energy profile set by per-source allocations.
///
/// Non-dispatchable sources keep the shape of their profile with the
/// integral scaled by the allocation fraction. Dispatchable sources treat
/// the scaled profile as an upper bound of available capacity: at each time
/// step they supply only the residual demand left by non-dispatchable
/// generation, capped by that bound, drawing down the residual in
/// [`Source::DISPATCHABLE`] order. Whatever need remains is recorded in the
/// returned `unmet` profile.
pub fn allocate(
    allocations: &Allocations,
    profiles: &ProfileSet,
) -> Result<ProfileSet, ProfileError> {
    profiles.validate()?;
    let steps = profiles.steps();

    let fraction =
        |source: Source| -> f64 { allocations.get(&source).copied().unwrap_or(0.0) };

    // Scale every supply profile by its user-assigned capacity allocation.
    let mut scaled: FxHashMap<Source, Vec<f64>> = profiles
        .series
        .iter()
        .map(|(&source, series)| {
            let allocated = series.iter().map(|x| x * fraction(source)).collect();
            (source, allocated)
        })
        .collect();

    // The non-dispatchable supply is fixed; compute the dispatched supply
    // and remaining unmet demand at each time step.
    let mut unmet = vec![0.0; steps];
    for t in 0..steps {
        let supplied: f64 = Source::NON_DISPATCHABLE
            .iter()
            .filter_map(|source| scaled.get(source))
            .map(|series| series[t])
            .sum();

        // Any gap between demand and the non-dispatchable supply must be
        // covered by dispatch or it goes unfulfilled.
        let mut needed = (profiles.demand[t] - supplied).max(0.0);
        for source in Source::DISPATCHABLE {
            if let Some(series) = scaled.get_mut(&source) {
                let dispatched = series[t].min(needed);
                series[t] = dispatched;
                needed -= dispatched;
            }
        }
        unmet[t] = needed;
    }

    Ok(ProfileSet {
        index: profiles.index.clone(),
        units: profiles.units.clone(),
        demand: profiles.demand.clone(),
        unmet,
        series: scaled,
    })
}

/// Energy supplied toward demand by each source, net of curtailed excess.
///
/// Expects profiles for which dispatch has already been taken into account
/// (the output of [`allocate`]). When generation exceeds demand at a time
/// step, the excess is attributed pro-rata to the non-dispatchable sources
/// by their share of non-dispatchable generation at that step; dispatchable
/// output is credited in full since dispatch never exceeds residual need.
/// The aggregate supplied figures therefore never exceed demand.
#[must_use]
pub fn supplied_energy_breakdown(profiles: &ProfileSet) -> FxHashMap<Source, f64> {
    let mut supplied: FxHashMap<Source, f64> = FxHashMap::default();

    for t in 0..profiles.steps() {
        let series_at = |source: &Source| -> f64 {
            profiles.series.get(source).map_or(0.0, |series| series[t])
        };

        let non_dispatchable: f64 = Source::NON_DISPATCHABLE.iter().map(|s| series_at(s)).sum();
        let dispatched: f64 = Source::DISPATCHABLE.iter().map(|s| series_at(s)).sum();
        let excess = (non_dispatchable + dispatched - profiles.demand[t]).max(0.0);

        for (&source, series) in &profiles.series {
            let generated = series[t];
            let credited = if !source.is_dispatchable() && excess > 0.0 && non_dispatchable > 0.0
            {
                generated - generated * excess / non_dispatchable
            } else {
                generated
            };
            *supplied.entry(source).or_insert(0.0) += credited;
        }
    }

    supplied
}

/// Summarize a profile set into aggregated cost and CO2 outcomes by source.
///
/// Assumes profiles cover exactly 1 week in hour-sized steps: variable cost
/// carries the weekly discount rate, and CO2 and consumed energy are scaled
/// to the 1-year level for consistency with scenario outcome datasets.
#[must_use]
pub fn summarize(profiles: &ProfileSet) -> ScenarioOutcomeBreakdown {
    let supplied = supplied_energy_breakdown(profiles);

    let mut outcome = ScenarioOutcomeBreakdown::default();
    for (&source, series) in &profiles.series {
        // Total energy supplied by the profile (MWh) and the minimum
        // capacity required to support it (MW).
        let energy: f64 = series.iter().sum();
        let capacity = series.iter().fold(0.0, |peak: f64, &x| peak.max(x));
        let consumed = supplied.get(&source).copied().unwrap_or(0.0);

        let entry = SourceOutcome {
            energy,
            consumed,
            capacity,
            cost: 0.0,
            // MW * $USD/MW => $USD
            fixed_cost: capacity * config::fixed_cost(source),
            // MWh * $USD/MWh => $USD, amortized over the capacity lifetime
            variable_cost: energy * config::variable_cost(source) * config::DISCOUNT_RATE_WEEKLY,
            // MWh * tonnes/MWh => tonnes, scaled to the 1-year level
            co2: energy * config::co2_rate(source) * config::WEEKS_PER_YEAR,
        };

        outcome.cost += entry.total_cost();
        outcome.co2 += entry.co2;
        outcome.energy += consumed * config::WEEKS_PER_YEAR;
        outcome.breakdown.insert(source, entry);
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;

    fn week_profiles() -> ProfileSet {
        ProfileSet {
            index: vec![0, 1, 2],
            units: "MWh".to_string(),
            demand: vec![10.0, 0.0, 20.0],
            unmet: vec![0.0, 0.0, 0.0],
            series: [
                (Source::Nuclear, vec![8.0, 8.0, 8.0]),
                (Source::Solar, vec![6.0, 2.0, 0.0]),
                (Source::Wind, vec![4.0, 8.0, 0.0]),
                (Source::Ng, vec![10.0, 10.0, 10.0]),
                (Source::Coal, vec![1.0, 1.0, 1.0]),
            ]
            .into_iter()
            .collect(),
        }
    }

    fn uniform_allocations(fraction: f64) -> Allocations {
        [
            (Source::Nuclear, fraction),
            (Source::Solar, fraction),
            (Source::Wind, fraction),
            (Source::Ng, fraction),
            (Source::Coal, fraction),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_allocate_half() {
        let allocated = allocate(&uniform_allocations(0.5), &week_profiles()).unwrap();

        // Non-dispatchable supply profiles are halved.
        assert_eq!(allocated.series[&Source::Solar], vec![3.0, 1.0, 0.0]);
        assert_eq!(allocated.series[&Source::Wind], vec![2.0, 4.0, 0.0]);
        assert_eq!(allocated.series[&Source::Nuclear], vec![4.0, 4.0, 4.0]);
        assert_eq!(allocated.series[&Source::Coal], vec![0.5, 0.5, 0.5]);

        // Dispatch covers only the residual need, capped by the halved
        // capacity bound of 5.
        assert_eq!(allocated.series[&Source::Ng], vec![0.5, 0.0, 5.0]);

        // unmet[t] = demand[t] - non_dispatchables[t] - dispatched[t]
        assert_eq!(allocated.unmet, vec![0.0, 0.0, 20.0 - 4.0 - 5.0 - 0.5]);

        // Pass-through attributes are unchanged.
        assert_eq!(allocated.index, vec![0, 1, 2]);
        assert_eq!(allocated.units, "MWh");
        assert_eq!(allocated.demand, vec![10.0, 0.0, 20.0]);
    }

    #[test]
    fn test_allocate_zero() {
        let allocated = allocate(&uniform_allocations(0.0), &week_profiles()).unwrap();

        // The unmet profile matches the demand profile.
        assert_eq!(allocated.unmet, vec![10.0, 0.0, 20.0]);
        for source in [
            Source::Nuclear,
            Source::Solar,
            Source::Wind,
            Source::Ng,
            Source::Coal,
        ] {
            assert_eq!(allocated.series[&source], vec![0.0, 0.0, 0.0]);
        }
    }

    #[test]
    fn test_allocate_full() {
        let allocated = allocate(&uniform_allocations(1.0), &week_profiles()).unwrap();

        assert_eq!(allocated.series[&Source::Nuclear], vec![8.0, 8.0, 8.0]);
        assert_eq!(allocated.series[&Source::Solar], vec![6.0, 2.0, 0.0]);
        assert_eq!(allocated.series[&Source::Wind], vec![4.0, 8.0, 0.0]);
        assert_eq!(allocated.series[&Source::Ng], vec![0.0, 0.0, 10.0]);

        // Even with full allocation there is unmet demand at the last step.
        assert_eq!(allocated.unmet, vec![0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_allocate_dispatch_only() {
        let mut allocations = uniform_allocations(0.0);
        allocations.insert(Source::Ng, 1.0);
        let allocated = allocate(&allocations, &week_profiles()).unwrap();

        // ng[t] = min(capacity[t], demand[t])
        assert_eq!(allocated.series[&Source::Ng], vec![10.0, 0.0, 10.0]);
        assert_eq!(allocated.unmet, vec![0.0, 0.0, 10.0]);
    }

    #[test]
    fn test_allocate_never_over_dispatches() {
        let allocated = allocate(&uniform_allocations(0.5), &week_profiles()).unwrap();
        for t in 0..allocated.steps() {
            let dispatched = allocated.series[&Source::Ng][t];
            assert!(dispatched >= 0.0);
            assert!(dispatched <= 5.0); // allocated capacity bound
            let non_dispatchable: f64 = Source::NON_DISPATCHABLE
                .iter()
                .filter_map(|s| allocated.series.get(s))
                .map(|series| series[t])
                .sum();
            let residual =
                (allocated.demand[t] - non_dispatchable - dispatched).max(0.0);
            assert_eq!(allocated.unmet[t], residual);
        }
    }

    #[test]
    fn test_allocate_length_mismatch() {
        let mut profiles = week_profiles();
        profiles
            .series
            .insert(Source::Wind, vec![1.0, 2.0]);
        let err = allocate(&uniform_allocations(1.0), &profiles).unwrap_err();
        assert_eq!(
            err,
            ProfileError::LengthMismatch {
                source: Source::Wind,
                expected: 3,
                actual: 2
            }
        );
    }

    #[test]
    fn test_supplied_without_excess() {
        let profiles = ProfileSet {
            index: vec![0, 1, 2],
            units: "MWh".to_string(),
            demand: vec![100.0, 100.0, 100.0],
            unmet: vec![0.0, 0.0, 0.0],
            series: [
                (Source::Nuclear, vec![8.0, 8.0, 8.0]),
                (Source::Solar, vec![6.0, 2.0, 0.0]),
                (Source::Wind, vec![4.0, 8.0, 0.0]),
                // Dispatch has already been taken into account here.
                (Source::Ng, vec![10.0, 10.0, 10.0]),
            ]
            .into_iter()
            .collect(),
        };

        let supplied = supplied_energy_breakdown(&profiles);

        // No curtailment: the generation profile matches the supplied energy
        // for every source.
        assert_eq!(supplied[&Source::Ng], 30.0);
        assert_eq!(supplied[&Source::Nuclear], 24.0);
        assert_eq!(supplied[&Source::Wind], 12.0);
        assert_eq!(supplied[&Source::Solar], 8.0);
    }

    #[test]
    fn test_supplied_with_excess() {
        let profiles = ProfileSet {
            index: vec![0, 1, 2],
            units: "MWh".to_string(),
            demand: vec![10.0, 0.0, 20.0],
            unmet: vec![0.0, 0.0, 0.0],
            series: [
                (Source::Nuclear, vec![8.0, 8.0, 8.0]),
                (Source::Solar, vec![6.0, 2.0, 0.0]),
                (Source::Wind, vec![4.0, 8.0, 0.0]),
                (Source::Ng, vec![0.0, 0.0, 10.0]),
            ]
            .into_iter()
            .collect(),
        };

        let supplied = supplied_energy_breakdown(&profiles);

        // Dispatched energy is always fully consumed.
        assert!((supplied[&Source::Ng] - 10.0).abs() < 1e-9);

        // Excess generation series is [8, 18, 0]; each non-dispatchable
        // source is credited supplied[t] = gen[t] - gen[t] * excess[t] / total[t].
        let expected_nuclear = (8.0 - 8.0 * 8.0 / 18.0) + (8.0 - 8.0 * 18.0 / 18.0) + 8.0;
        let expected_wind = (4.0 - 4.0 * 8.0 / 18.0) + (8.0 - 8.0 * 18.0 / 18.0) + 0.0;
        let expected_solar = (6.0 - 6.0 * 8.0 / 18.0) + (2.0 - 2.0 * 18.0 / 18.0) + 0.0;
        assert!((supplied[&Source::Nuclear] - expected_nuclear).abs() < 1e-9);
        assert!((supplied[&Source::Wind] - expected_wind).abs() < 1e-9);
        assert!((supplied[&Source::Solar] - expected_solar).abs() < 1e-9);
    }

    #[test]
    fn test_summarize_energy_and_capacity() {
        let summarized = summarize(&week_profiles());

        let nuclear = summarized.source(Source::Nuclear);
        assert_eq!(nuclear.energy, 24.0);
        assert_eq!(nuclear.capacity, 8.0);
        assert_eq!(nuclear.fixed_cost, config::fixed_cost(Source::Nuclear) * 8.0);
        assert!(
            (nuclear.variable_cost
                - config::variable_cost(Source::Nuclear) * config::DISCOUNT_RATE_WEEKLY * 24.0)
                .abs()
                < 1e-6
        );
    }

    #[test]
    fn test_summarize_zeroed_profiles() {
        let zeroed_profiles = allocate(&uniform_allocations(0.0), &week_profiles()).unwrap();
        let zeroed = summarize(&zeroed_profiles);

        assert_eq!(zeroed.co2, 0.0);
        assert_eq!(zeroed.cost, 0.0);
        assert_eq!(zeroed.energy, 0.0);
        for entry in zeroed.breakdown.values() {
            assert_eq!(entry.energy, 0.0);
            assert_eq!(entry.capacity, 0.0);
            assert_eq!(entry.co2, 0.0);
            assert_eq!(entry.fixed_cost, 0.0);
            assert_eq!(entry.variable_cost, 0.0);
        }
    }
}
