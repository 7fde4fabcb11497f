//! Scenario lookup keys.

use rustc_hash::FxHashMap;

/// A scenario key mapping dimensions to chosen ordinal levels.
///
/// For an exact lookup every dimension must be bound to a level. For a slice
/// lookup exactly one dimension is marked as swept (`sweep`) while the rest
/// stay bound. A dimension that is absent from the key entirely is an error
/// for both kinds of lookup, never an implicit sweep.
///
/// ```
/// use gridplan_core::model::ScenarioSpec;
///
/// let spec = ScenarioSpec::new()
///     .bind("carbon_tax", 2)
///     .bind("rps", 0)
///     .sweep("solar_price");
/// assert_eq!(spec.level("carbon_tax"), Some(Some(2)));
/// assert_eq!(spec.level("solar_price"), Some(None));
/// assert_eq!(spec.level("nuclear_allowed"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScenarioSpec {
    levels: FxHashMap<String, Option<usize>>,
}

impl ScenarioSpec {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a dimension to an ordinal level.
    #[must_use]
    pub fn bind(mut self, dimension: &str, level: usize) -> Self {
        self.set(dimension, level);
        self
    }

    /// Mark a dimension as the one being swept by a slice lookup.
    #[must_use]
    pub fn sweep(mut self, dimension: &str) -> Self {
        self.levels.insert(dimension.to_string(), None);
        self
    }

    /// Rebind a dimension in place.
    pub fn set(&mut self, dimension: &str, level: usize) {
        self.levels.insert(dimension.to_string(), Some(level));
    }

    /// `Some(Some(level))` for a bound dimension, `Some(None)` for a swept
    /// one, `None` when the dimension is absent from the key.
    #[must_use]
    pub fn level(&self, dimension: &str) -> Option<Option<usize>> {
        self.levels.get(dimension).copied()
    }

    /// Dimensions explicitly marked as swept.
    pub fn swept(&self) -> impl Iterator<Item = &str> {
        self.levels
            .iter()
            .filter(|(_, level)| level.is_none())
            .map(|(dimension, _)| dimension.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_and_sweep() {
        let spec = ScenarioSpec::new().bind("rps", 1).sweep("carbon_tax");
        assert_eq!(spec.level("rps"), Some(Some(1)));
        assert_eq!(spec.level("carbon_tax"), Some(None));
        assert_eq!(spec.swept().collect::<Vec<_>>(), vec!["carbon_tax"]);
    }

    #[test]
    fn test_rebind_overwrites_sweep() {
        let mut spec = ScenarioSpec::new().sweep("rps");
        spec.set("rps", 3);
        assert_eq!(spec.level("rps"), Some(Some(3)));
        assert_eq!(spec.swept().count(), 0);
    }
}
