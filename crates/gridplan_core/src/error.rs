use std::fmt;

use crate::model::Source;

/// An energy-source token that does not name a known source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSource(pub String);

impl fmt::Display for UnknownSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown energy source {:?}", self.0)
    }
}

impl std::error::Error for UnknownSource {}

/// Errors raised while materializing or indexing a scenario dataset.
///
/// None of these are retryable; they indicate a malformed dataset artifact or
/// a schema that disagrees with the scenario table it describes.
#[derive(Debug)]
pub enum DatasetError {
    /// The scenario table length does not equal the product of the shape
    /// vector, so row-major addressing would silently return wrong rows.
    SchemaMismatch { expected: usize, actual: usize },
    /// The schema is internally inconsistent (dimension/scale/shape mismatch).
    InvalidSchema(String),
    /// A fact name has more than two underscore-delimited tokens.
    UnsupportedFieldShape { fact: String },
    /// A two-token fact attributes a value to a metric the breakdown
    /// does not carry.
    UnknownMetric { fact: String },
    /// A fact name references an energy source that is not recognized.
    Source(UnknownSource),
    /// A cell value failed numeric parsing.
    MalformedValue { fact: String, value: String },
    Io(std::io::Error),
    Json(serde_json::Error),
    Csv(csv::Error),
}

impl fmt::Display for DatasetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetError::SchemaMismatch { expected, actual } => write!(
                f,
                "scenario table has {actual} rows but the schema shape requires {expected}"
            ),
            DatasetError::InvalidSchema(msg) => write!(f, "invalid dataset schema: {msg}"),
            DatasetError::UnsupportedFieldShape { fact } => {
                write!(f, "fact {fact:?} has more than two underscore-delimited tokens")
            }
            DatasetError::UnknownMetric { fact } => {
                write!(f, "fact {fact:?} names an unsupported breakdown metric")
            }
            DatasetError::Source(e) => write!(f, "{e}"),
            DatasetError::MalformedValue { fact, value } => {
                write!(f, "fact {fact:?} has non-numeric value {value:?}")
            }
            DatasetError::Io(e) => write!(f, "dataset read failed: {e}"),
            DatasetError::Json(e) => write!(f, "schema parse failed: {e}"),
            DatasetError::Csv(e) => write!(f, "scenario table parse failed: {e}"),
        }
    }
}

impl std::error::Error for DatasetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DatasetError::Source(e) => Some(e),
            DatasetError::Io(e) => Some(e),
            DatasetError::Json(e) => Some(e),
            DatasetError::Csv(e) => Some(e),
            _ => None,
        }
    }
}

impl From<UnknownSource> for DatasetError {
    fn from(e: UnknownSource) -> Self {
        DatasetError::Source(e)
    }
}

impl From<std::io::Error> for DatasetError {
    fn from(e: std::io::Error) -> Self {
        DatasetError::Io(e)
    }
}

impl From<serde_json::Error> for DatasetError {
    fn from(e: serde_json::Error) -> Self {
        DatasetError::Json(e)
    }
}

impl From<csv::Error> for DatasetError {
    fn from(e: csv::Error) -> Self {
        DatasetError::Csv(e)
    }
}

/// Errors raised by index queries.
///
/// These indicate a programming error in the caller (an incomplete or
/// over-specified scenario key), never a transient condition; the caller
/// should propagate rather than retry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectError {
    /// An exact-lookup key omits a required dimension (or leaves it unbound).
    MissingDimension { dimension: String },
    /// A dimension level falls outside its ordinal scale.
    LevelOutOfRange {
        dimension: String,
        level: usize,
        scale: usize,
    },
    /// A slice-lookup key must leave exactly one dimension unbound.
    InvalidSliceKey { unbound: usize },
}

impl fmt::Display for SelectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectError::MissingDimension { dimension } => {
                write!(f, "scenario key is missing dimension {dimension:?}")
            }
            SelectError::LevelOutOfRange {
                dimension,
                level,
                scale,
            } => write!(
                f,
                "level {level} for dimension {dimension:?} is outside its scale of {scale} levels"
            ),
            SelectError::InvalidSliceKey { unbound } => write!(
                f,
                "slice key must leave exactly 1 dimension unbound; found {unbound}"
            ),
        }
    }
}

impl std::error::Error for SelectError {}

/// Errors raised by profile allocation arithmetic.
#[derive(Debug, Clone, PartialEq)]
pub enum ProfileError {
    /// A generation series does not span the same time steps as demand.
    LengthMismatch {
        source: Source,
        expected: usize,
        actual: usize,
    },
}

impl fmt::Display for ProfileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProfileError::LengthMismatch {
                source,
                expected,
                actual,
            } => write!(
                f,
                "profile for {source} has {actual} time steps; demand has {expected}"
            ),
        }
    }
}

impl std::error::Error for ProfileError {}
