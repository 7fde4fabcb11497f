//! Energy source identifiers.
//!
//! Every per-source quantity in the crate (generation profiles, cost tables,
//! outcome breakdowns) is keyed by `Source` rather than a bare string, so a
//! typo in a dataset column is a parse error instead of a silently empty map
//! entry.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::UnknownSource;

/// An energy generation source, or a grid resource tracked alongside them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    Solar,
    Wind,
    Nuclear,
    Coal,
    CoalCcs,
    Ng,
    NgCcs,
    Hydro,
    /// Grid storage is a breakdown entry in policy datasets but does not
    /// generate energy itself.
    Storage,
}

impl Source {
    /// Every source that can appear in an outcome breakdown.
    pub const ALL: [Source; 9] = [
        Source::Solar,
        Source::Wind,
        Source::Nuclear,
        Source::Coal,
        Source::CoalCcs,
        Source::Ng,
        Source::NgCcs,
        Source::Hydro,
        Source::Storage,
    ];

    /// Sources whose output is fixed by allocation; they cannot ramp to meet
    /// residual demand.
    pub const NON_DISPATCHABLE: [Source; 5] = [
        Source::Solar,
        Source::Wind,
        Source::Nuclear,
        Source::Coal,
        Source::CoalCcs,
    ];

    /// Sources that ramp on demand, in dispatch order: each draws down the
    /// remaining residual need before the next is considered.
    pub const DISPATCHABLE: [Source; 2] = [Source::Ng, Source::NgCcs];

    #[must_use]
    pub fn is_dispatchable(self) -> bool {
        matches!(self, Source::Ng | Source::NgCcs)
    }

    /// The token used for this source in dataset fact names and series keys.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Source::Solar => "solar",
            Source::Wind => "wind",
            Source::Nuclear => "nuclear",
            Source::Coal => "coal",
            Source::CoalCcs => "coalccs",
            Source::Ng => "ng",
            Source::NgCcs => "ngccs",
            Source::Hydro => "hydro",
            Source::Storage => "storage",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Source {
    type Err = UnknownSource;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "solar" => Ok(Source::Solar),
            "wind" => Ok(Source::Wind),
            "nuclear" => Ok(Source::Nuclear),
            "coal" => Ok(Source::Coal),
            "coalccs" => Ok(Source::CoalCcs),
            "ng" => Ok(Source::Ng),
            "ngccs" => Ok(Source::NgCcs),
            "hydro" => Ok(Source::Hydro),
            "storage" => Ok(Source::Storage),
            other => Err(UnknownSource(other.to_string())),
        }
    }
}
