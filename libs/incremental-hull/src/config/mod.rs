//! Hull-level configuration built on the shared `config` crate.
//!
//! The module wraps the workspace [`GlobalConfig`] so the hull engine stays
//! decoupled from literal constants, and adds the seed-face search policy.

use config::constants::{ConfigError, GlobalConfig, EPSILON_TOLERANCE};
use serde::{Deserialize, Serialize};

/// Where the insertion step looks for the first face visible from a new point.
///
/// # Examples
/// ```
/// use incremental_hull::SeedSearch;
/// assert_eq!(SeedSearch::default(), SeedSearch::LastAdded);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeedSearch {
    /// Scan only the faces created by the previous successful insertion.
    ///
    /// Correct when points arrive in lexicographic order, since the newest
    /// point then always sees a face around the previous one. A point outside
    /// the hull that sees none of those faces is discarded.
    #[default]
    LastAdded,
    /// Scan every face of the mesh. Accepts points in any order.
    Exhaustive,
}

/// Hull configuration.
///
/// # Examples
/// ```
/// use incremental_hull::HullConfig;
/// let cfg = HullConfig::default();
/// assert!(cfg.tolerance > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HullConfig {
    /// Coordinate tolerance for point coincidence and seed flatness.
    pub tolerance: f64,
    /// Seed-face search policy used by insertion.
    pub seed_search: SeedSearch,
}

impl HullConfig {
    /// Creates a configuration from explicit values.
    ///
    /// # Examples
    /// ```
    /// use incremental_hull::{HullConfig, SeedSearch};
    /// let cfg = HullConfig::new(1.0e-7, SeedSearch::Exhaustive).unwrap();
    /// assert_eq!(cfg.seed_search, SeedSearch::Exhaustive);
    /// ```
    pub fn new(tolerance: f64, seed_search: SeedSearch) -> Result<Self, HullConfigError> {
        GlobalConfig::new(tolerance)
            .map(|cfg| Self {
                tolerance: cfg.tolerance,
                seed_search,
            })
            .map_err(HullConfigError)
    }

    /// Returns a copy with a different seed-face search policy.
    pub fn with_seed_search(self, seed_search: SeedSearch) -> Self {
        Self {
            seed_search,
            ..self
        }
    }

    /// Re-checks the tolerance, e.g. after deserialization bypassed [`HullConfig::new`].
    pub fn validate(&self) -> Result<(), HullConfigError> {
        GlobalConfig::new(self.tolerance)
            .map(|_| ())
            .map_err(HullConfigError)
    }
}

impl Default for HullConfig {
    fn default() -> Self {
        Self {
            tolerance: EPSILON_TOLERANCE,
            seed_search: SeedSearch::default(),
        }
    }
}

/// Error wrapper for invalid hull configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HullConfigError(ConfigError);

impl From<ConfigError> for HullConfigError {
    fn from(err: ConfigError) -> Self {
        Self(err)
    }
}

impl std::fmt::Display for HullConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::error::Error for HullConfigError {}

#[cfg(test)]
mod tests;
