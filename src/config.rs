//! Construction options for a [`PowerGrid`](crate::PowerGrid).

use crate::{
    errors::GridGraphError,
    ids::{DEFAULT_MAX_SUFFIX, RandomSuffix},
};

/// Controls how entity suffixes are drawn.
///
/// ```rust
/// use gridgraph::GridConfig;
/// let config = GridConfig::default();
/// assert_eq!(config.max_suffix, 1_000_000);
/// assert!(config.seed.is_none());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridConfig {
    /// Upper bound (inclusive) of generated suffixes. Smaller values make
    /// collisions likelier.
    pub max_suffix: u32,
    /// Fixed RNG seed for reproducible identifiers.
    pub seed: Option<u64>,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            max_suffix: DEFAULT_MAX_SUFFIX,
            seed: None,
        }
    }
}

impl GridConfig {
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    pub fn with_max_suffix(mut self, max_suffix: u32) -> Self {
        self.max_suffix = max_suffix;
        self
    }

    pub fn validate(&self) -> Result<(), GridGraphError> {
        if self.max_suffix == 0 {
            return Err(GridGraphError::invalid_input("max_suffix must be at least 1"));
        }
        Ok(())
    }

    pub(crate) fn suffix_source(&self) -> RandomSuffix {
        match self.seed {
            Some(seed) => RandomSuffix::seeded(seed, self.max_suffix),
            None => RandomSuffix::new(self.max_suffix),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_max_suffix_is_rejected() {
        let err = GridConfig::default()
            .with_max_suffix(0)
            .validate()
            .expect_err("invalid");
        assert!(matches!(err, GridGraphError::InvalidInput(_)));
    }

    #[test]
    fn seeded_config_keeps_default_bound() {
        let config = GridConfig::seeded(3);
        assert_eq!(config.seed, Some(3));
        assert_eq!(config.max_suffix, DEFAULT_MAX_SUFFIX);
        assert!(config.validate().is_ok());
    }
}
