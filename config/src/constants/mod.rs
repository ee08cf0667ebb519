//! Configuration values shared by the hull crates.
//!
//! Each public item documents its purpose and provides a minimal usage example
//! so downstream crates can stay declarative.

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Tolerance used when comparing point coordinates.
///
/// Applies to point coincidence and to the flatness check on the seed
/// tetrahedron. The visibility predicate is strict and does not use it.
///
/// # Examples
/// ```
/// use config::constants::EPSILON_TOLERANCE;
/// assert!(EPSILON_TOLERANCE < 1.0e-6);
/// ```
pub const EPSILON_TOLERANCE: f64 = 1.0e-9;

// =============================================================================
// TOPOLOGY CONSTANTS
// =============================================================================

/// Number of points consumed by the seed tetrahedron.
///
/// # Examples
/// ```
/// use config::constants::MIN_HULL_POINTS;
/// let points = [0usize; 5];
/// assert!(points.len() >= MIN_HULL_POINTS);
/// ```
pub const MIN_HULL_POINTS: usize = 4;

/// Number of faces of the seed tetrahedron.
///
/// # Examples
/// ```
/// use config::constants::TETRAHEDRON_FACE_COUNT;
/// assert_eq!(TETRAHEDRON_FACE_COUNT, 4);
/// ```
pub const TETRAHEDRON_FACE_COUNT: usize = 4;

/// Euler characteristic of a closed genus-0 polyhedron (`V - E + F`).
///
/// # Examples
/// ```
/// use config::constants::EULER_CHARACTERISTIC;
/// // tetrahedron: 4 - 6 + 4
/// assert_eq!(4 - 6 + 4, EULER_CHARACTERISTIC);
/// ```
pub const EULER_CHARACTERISTIC: i64 = 2;

// =============================================================================
// GLOBAL CONFIG
// =============================================================================

/// Immutable snapshot of global configuration settings that can be shared
/// between crates.
///
/// # Examples
/// ```
/// use config::constants::GlobalConfig;
/// let config = GlobalConfig::default();
/// assert!(config.tolerance > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobalConfig {
    /// Coordinate tolerance propagated into point comparisons.
    pub tolerance: f64,
}

impl GlobalConfig {
    /// Builds a configuration, rejecting tolerances that are not finite and
    /// strictly positive.
    ///
    /// # Examples
    /// ```
    /// use config::constants::GlobalConfig;
    /// let cfg = GlobalConfig::new(1.0e-6).expect("valid config");
    /// assert_eq!(cfg.tolerance, 1.0e-6);
    /// ```
    pub fn new(tolerance: f64) -> Result<Self, ConfigError> {
        if !tolerance.is_finite() || tolerance <= 0.0 {
            return Err(ConfigError::InvalidTolerance(tolerance));
        }
        Ok(Self { tolerance })
    }
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            tolerance: EPSILON_TOLERANCE,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// Raised when the tolerance is zero, negative or not finite.
    InvalidTolerance(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidTolerance(value) => {
                write!(f, "tolerance must be finite and positive: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
