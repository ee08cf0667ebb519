//! # Config Crate
//!
//! Centralized configuration constants for the incremental hull engine.
//! Numeric tolerances and combinatorial limits live here so the geometry
//! crates never scatter literals.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{EPSILON_TOLERANCE, MIN_HULL_POINTS};
//!
//! // Two coordinates closer than the tolerance are treated as equal
//! let a: f64 = 0.5;
//! let b: f64 = 0.5 + 1e-12;
//! assert!((a - b).abs() < EPSILON_TOLERANCE);
//!
//! // A hull needs a tetrahedron to start from
//! assert_eq!(MIN_HULL_POINTS, 4);
//! ```

pub mod constants;
