//! # Error Types
//!
//! Errors surfaced by hull construction and validation.
//!
//! ## Error Policy
//!
//! - Building a hull from too few points or a misconfigured tolerance fails
//!   explicitly.
//! - Inserting a point never fails: a point that sees no face is discarded
//!   and reported through [`crate::Insertion::Discarded`].
//! - Topology problems are only reported by [`crate::ConvexHull::validate`].

use crate::config::HullConfigError;
use crate::core::point::PointId;
use config::constants::MIN_HULL_POINTS;
use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur while building or checking a hull.
///
/// ## Example
///
/// ```rust
/// use incremental_hull::{ConvexHull, HullConfig, HullError, Point};
///
/// let points = [Point::new(0.0, 0.0, 0.0, 0), Point::new(1.0, 0.0, 0.0, 1)];
/// match ConvexHull::build(&points, HullConfig::default()) {
///     Err(HullError::NotEnoughPoints { count }) => assert_eq!(count, 2),
///     other => panic!("unexpected result: {other:?}"),
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HullError {
    /// Fewer points than the seed tetrahedron needs.
    #[error("Not enough points: {count} (a hull needs at least {min})", min = MIN_HULL_POINTS)]
    NotEnoughPoints {
        /// Number of points supplied.
        count: usize,
    },

    /// Two seed points carry the same id.
    #[error("Duplicate point id in seed: {id}")]
    DuplicatePointId {
        /// The repeated id.
        id: PointId,
    },

    /// The mesh violates a closed 2-manifold invariant.
    #[error("Invalid topology: {message}")]
    InvalidTopology {
        /// Description of the first violation found.
        message: String,
    },

    /// The hull configuration is out of range.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] HullConfigError),
}

impl HullError {
    /// Creates an invalid topology error.
    pub fn invalid_topology(message: impl Into<String>) -> Self {
        Self::InvalidTopology {
            message: message.into(),
        }
    }
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for hull operations.
pub type HullResult<T> = Result<T, HullError>;

// =============================================================================
// TESTS
// =============================================================================
