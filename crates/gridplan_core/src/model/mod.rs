mod outcome;
mod schema;
mod source;
mod spec;

pub use outcome::{
    DatasetSelection, DimensionSlice, ScenarioOutcome, ScenarioOutcomeBreakdown, SourceOutcome,
    SummaryView,
};
pub use schema::{DataRow, Dataset, DatasetSchema};
pub use source::Source;
pub use spec::ScenarioSpec;
