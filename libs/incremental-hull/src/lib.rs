//! # Incremental Hull
//!
//! Incremental 3D convex hull construction over points lifted onto the
//! paraboloid `z = x² + y²`.
//!
//! The hull is a closed triangulated polyhedron with explicit face adjacency.
//! Points are inserted one at a time: the faces visible from a new point are
//! found by a breadth-first walk over neighbor links, removed, and the horizon
//! left behind is re-triangulated as a fan around the new point.
//!
//! ## Architecture
//!
//! ```text
//! lift (2D → paraboloid, sorted)
//!       ↓
//! ConvexHull::from_seed (tetrahedron, explicit linkage)
//!       ↓
//! ConvexHull::insert (seed-face search → horizon walk → relink)
//!       ↓
//! ConvexHull::triangles (vertex id triples)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use glam::DVec2;
//! use incremental_hull::{lift_points, ConvexHull, HullConfig};
//!
//! let config = HullConfig::default();
//! let planar = [
//!     DVec2::new(0.0, 0.0),
//!     DVec2::new(1.0, 0.0),
//!     DVec2::new(0.0, 1.0),
//!     DVec2::new(1.0, 1.1),
//!     DVec2::new(0.4, 0.6),
//! ];
//! let points = lift_points(&planar);
//! let hull = ConvexHull::build(&points, config)?;
//!
//! assert!(hull.validate().is_ok());
//! assert_eq!(hull.vertex_ids().len(), 5);
//! # Ok::<(), incremental_hull::HullError>(())
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod hull;
pub mod lift;
pub mod mesh;

pub use crate::config::{HullConfig, HullConfigError, SeedSearch};
pub use crate::core::point::{Point, PointId};
pub use crate::core::vec3::Vec3;
pub use error::{HullError, HullResult};
pub use hull::{ConvexHull, Insertion};
pub use lift::{lexicographic_cmp, lift, lift_points};
pub use mesh::{Adjacency, Edge, Face, FaceId};
