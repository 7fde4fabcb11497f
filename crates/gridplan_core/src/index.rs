//! The multi-dimensional scenario index.
//!
//! A dense row-major index over the flat scenario table, keyed by the
//! ordinal levels of each policy dimension. Built once at dataset load;
//! every query afterward is a pure read — O(1) for an exact lookup, O(levels
//! of the swept dimension) for a slice.
//!
//! Addressing is plain stride arithmetic over the schema's shape vector
//! (offset = Σ level[i]·stride[i], strides by right-to-left running product
//! of trailing shape entries); no tensor library involved. The dimension
//! ordering declared by the schema is the addressing order — see
//! [`DatasetSchema`].

use crate::error::{DatasetError, SelectError};
use crate::model::{
    Dataset, DatasetSchema, DatasetSelection, DimensionSlice, ScenarioOutcomeBreakdown,
    ScenarioSpec,
};
use crate::parse::parse_row;

use rustc_hash::FxHashMap;

/// Dense row-major N-D addressing: a shape vector with precomputed strides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hypercube {
    shape: Vec<usize>,
    strides: Vec<usize>,
    len: usize,
}

impl Hypercube {
    #[must_use]
    pub fn new(shape: Vec<usize>) -> Self {
        let strides = compute_strides(&shape);
        let len = shape.iter().product();
        Self {
            shape,
            strides,
            len,
        }
    }

    #[must_use]
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    #[must_use]
    pub fn ndim(&self) -> usize {
        self.shape.len()
    }

    /// Total number of addressable cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Flat-offset step between adjacent levels of one dimension.
    #[must_use]
    pub fn stride(&self, dim: usize) -> usize {
        self.strides[dim]
    }

    /// Convert per-dimension levels to a flat row offset; `None` when the
    /// level count or any level is out of range.
    #[must_use]
    pub fn flat_index(&self, levels: &[usize]) -> Option<usize> {
        if levels.len() != self.shape.len() {
            return None;
        }
        let mut flat = 0;
        for (i, (&level, &size)) in levels.iter().zip(&self.shape).enumerate() {
            if level >= size {
                return None;
            }
            flat += level * self.strides[i];
        }
        Some(flat)
    }
}

/// Strides for row-major order: the last dimension varies fastest.
fn compute_strides(shape: &[usize]) -> Vec<usize> {
    if shape.is_empty() {
        return Vec::new();
    }
    let mut strides = vec![1; shape.len()];
    for i in (0..shape.len() - 1).rev() {
        strides[i] = strides[i + 1] * shape[i + 1];
    }
    strides
}

/// An indexed dataset of scenario outcomes supporting exact and
/// dimension-aligned slice selections.
///
/// Rows are parsed eagerly at construction so data-integrity errors surface
/// at load time; queries clone fresh outcome values out of the index.
/// Generic over the outcome type so datasets with different row formats can
/// share the addressing machinery (construct via [`ScenarioIndex::build_with`]
/// and a row-parsing strategy).
#[derive(Debug, Clone)]
pub struct ScenarioIndex<T = ScenarioOutcomeBreakdown> {
    schema: DatasetSchema,
    outcomes: Vec<T>,
    cube: Hypercube,
}

impl ScenarioIndex<ScenarioOutcomeBreakdown> {
    /// Index a loaded dataset, parsing every row through [`parse_row`].
    pub fn build(dataset: &Dataset) -> Result<Self, DatasetError> {
        Self::build_with(dataset.schema.clone(), &dataset.scenarios, parse_row)
    }
}

impl<T: Clone> ScenarioIndex<T> {
    /// Index a flat scenario table with a caller-supplied row parser.
    ///
    /// Validates the schema and that the table length equals the product of
    /// the shape vector before any row is parsed.
    pub fn build_with<R>(
        schema: DatasetSchema,
        rows: &[R],
        parser: impl Fn(&R, &DatasetSchema) -> Result<T, DatasetError>,
    ) -> Result<Self, DatasetError> {
        schema.validate()?;
        let expected = schema.expected_rows();
        if rows.len() != expected {
            return Err(DatasetError::SchemaMismatch {
                expected,
                actual: rows.len(),
            });
        }

        let outcomes = rows
            .iter()
            .map(|row| parser(row, &schema))
            .collect::<Result<Vec<_>, _>>()?;
        let cube = Hypercube::new(schema.shape.clone());

        Ok(Self {
            schema,
            outcomes,
            cube,
        })
    }

    #[must_use]
    pub fn schema(&self) -> &DatasetSchema {
        &self.schema
    }

    /// Number of indexed scenarios.
    #[must_use]
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// Exact lookup: every dimension must be bound to an in-range level.
    pub fn select(&self, spec: &ScenarioSpec) -> Result<T, SelectError> {
        let offset = self.locate(spec)?;
        Ok(self.outcomes[offset].clone())
    }

    /// Slice lookup: exactly one dimension swept, all others bound.
    ///
    /// Returns one outcome per ordinal level of the swept dimension, in
    /// ascending level order.
    pub fn select_slice(&self, spec: &ScenarioSpec) -> Result<DimensionSlice<T>, SelectError> {
        let mut swept: Option<(usize, &str)> = None;
        let mut unbound = 0;
        let mut base = 0;

        for (dim, dimension) in self.schema.dimensions.iter().enumerate() {
            match self.spec_level(spec, dim, dimension)? {
                Some(level) => base += level * self.cube.stride(dim),
                None => {
                    unbound += 1;
                    swept = Some((dim, dimension.as_str()));
                }
            }
        }

        let Some((dim, dimension)) = swept.filter(|_| unbound == 1) else {
            return Err(SelectError::InvalidSliceKey { unbound });
        };

        let stride = self.cube.stride(dim);
        let scenarios = (0..self.cube.shape()[dim])
            .map(|level| self.outcomes[base + level * stride].clone())
            .collect();

        Ok(DimensionSlice {
            dimension: dimension.to_string(),
            scenarios,
        })
    }

    /// Exact lookup plus one dimension-aligned slice per dimension: the full
    /// view a single UI interaction consumes.
    pub fn select_all(&self, spec: &ScenarioSpec) -> Result<DatasetSelection<T>, SelectError> {
        let scenario = self.select(spec)?;

        let mut slices = FxHashMap::default();
        for dimension in &self.schema.dimensions {
            let swept = spec.clone().sweep(dimension);
            slices.insert(dimension.clone(), self.select_slice(&swept)?);
        }

        Ok(DatasetSelection { scenario, slices })
    }

    /// Flat row offset for a fully-bound scenario key.
    fn locate(&self, spec: &ScenarioSpec) -> Result<usize, SelectError> {
        let mut offset = 0;
        for (dim, dimension) in self.schema.dimensions.iter().enumerate() {
            match self.spec_level(spec, dim, dimension)? {
                Some(level) => offset += level * self.cube.stride(dim),
                None => {
                    return Err(SelectError::MissingDimension {
                        dimension: dimension.clone(),
                    });
                }
            }
        }
        Ok(offset)
    }

    /// Level of one dimension in the key: `Ok(None)` marks an explicit sweep;
    /// an absent dimension or out-of-range level is an error.
    fn spec_level(
        &self,
        spec: &ScenarioSpec,
        dim: usize,
        dimension: &str,
    ) -> Result<Option<usize>, SelectError> {
        match spec.level(dimension) {
            None => Err(SelectError::MissingDimension {
                dimension: dimension.to_string(),
            }),
            Some(None) => Ok(None),
            Some(Some(level)) => {
                let scale = self.cube.shape()[dim];
                if level >= scale {
                    return Err(SelectError::LevelOutOfRange {
                        dimension: dimension.to_string(),
                        level,
                        scale,
                    });
                }
                Ok(Some(level))
            }
        }
    }
}
