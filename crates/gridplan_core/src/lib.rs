//! Scenario indexing and outcome aggregation for an energy-policy explorer.
//!
//! This crate is the data core behind an interactive "what-if" policy UI:
//! users move policy levers (carbon tax, renewable mandates, technology
//! prices, allow/disallow toggles) and the views redraw cost/CO2 outcomes.
//! It provides:
//! - A dense hypercube index over precomputed scenario sweeps with O(1)
//!   exact lookups and O(levels) single-dimension slices
//! - Row parsing from the sweep pipeline's CSV/JSON artifacts
//! - Profile allocation with demand-following dispatch, and cost/CO2 rollups
//! - Derived transforms (per-MWh cost, baseline deltas, resource fractions)
//!
//! Rendering, widgets, and routing live elsewhere; everything here is
//! side-effect-free data the view layer consumes.
//!
//! ```ignore
//! use gridplan_core::{ScenarioIndex, ScenarioSpec, loader};
//!
//! let dataset = loader::load_dataset(schema_json, scenarios_csv)?;
//! let index = ScenarioIndex::build(&dataset)?;
//!
//! let spec = ScenarioSpec::new()
//!     .bind("carbon_tax", 2)
//!     .bind("rps", 0)
//!     .bind("nuclear_allowed", 1);
//! let view = index.select_all(&spec)?;
//! ```

#![warn(clippy::all)]

pub mod coalesce;
pub mod config;
pub mod error;
pub mod index;
pub mod loader;
pub mod model;
pub mod parse;
pub mod profiles;
pub mod transforms;

#[cfg(test)]
mod tests;

pub use error::{DatasetError, ProfileError, SelectError};
pub use index::{Hypercube, ScenarioIndex};
pub use model::{
    Dataset, DatasetSchema, DatasetSelection, DimensionSlice, ScenarioOutcome,
    ScenarioOutcomeBreakdown, ScenarioSpec, Source, SourceOutcome, SummaryView,
};
