//! # Convex Hull
//!
//! Incremental 3D convex hull with explicit face adjacency.
//!
//! ## Algorithm Overview
//!
//! 1. Build a tetrahedron from the first four points, sorted by id
//! 2. For every further point, find a face it can see among the faces created
//!    by the previous step (or the whole mesh, see [`crate::SeedSearch`])
//! 3. Walk breadth-first from that face to collect the visible region
//! 4. Replace each horizon edge by a face fanning to the new point, and stitch
//!    the fan faces to each other through the horizon table
//! 5. Remove the visible faces
//!
//! Points that see no face are discarded without touching the mesh.
//!
//! ## Known Limitations
//!
//! - Four coplanar seed points give a degenerate tetrahedron; the builder
//!   logs a warning but does not reject them.
//! - Visibility is strict with no tolerance band, so points on or within
//!   rounding distance of a face plane are decided by floating-point rounding.

mod insert;
mod seed;
mod validate;


use crate::config::HullConfig;
use crate::core::point::{Point, PointId};
use crate::error::{HullError, HullResult};
use crate::mesh::{Face, FaceArena, FaceId};
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Result of inserting one point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Insertion {
    /// The point was outside the hull and is now a vertex.
    Added {
        /// Visible faces removed from the mesh.
        removed: usize,
        /// Faces created around the horizon.
        created: usize,
    },
    /// No face was visible from the point; the mesh is unchanged.
    Discarded,
    /// The visible region was removed but some horizon edges could not be
    /// closed with a fan face. The mesh is open and
    /// [`ConvexHull::validate`] will fail.
    Incomplete {
        /// Visible faces removed from the mesh.
        removed: usize,
        /// Faces created around the horizon.
        created: usize,
        /// Horizon edges left without a linked fan face.
        unresolved: usize,
    },
}

impl Insertion {
    /// Returns true if the point became a hull vertex and the mesh is closed.
    pub fn is_added(&self) -> bool {
        matches!(self, Insertion::Added { .. })
    }
}

/// An incrementally built convex hull.
///
/// # Example
///
/// ```rust
/// use incremental_hull::{ConvexHull, HullConfig, Insertion, Point};
///
/// let seed = [
///     Point::new(0.0, 0.0, 0.0, 0),
///     Point::new(1.0, 0.0, 0.0, 1),
///     Point::new(0.0, 1.0, 0.0, 2),
///     Point::new(0.0, 0.0, 1.0, 3),
/// ];
/// let mut hull = ConvexHull::from_seed(seed, HullConfig::default())?;
/// assert_eq!(hull.face_count(), 4);
///
/// let outcome = hull.insert(Point::new(2.0, 2.0, 2.0, 4));
/// assert_eq!(outcome, Insertion::Added { removed: 1, created: 3 });
/// assert_eq!(hull.face_count(), 6);
/// # Ok::<(), incremental_hull::HullError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConvexHull {
    /// Face arena; removed faces free their slot.
    faces: FaceArena,
    /// Faces created by the most recent successful step.
    last_added: Vec<FaceId>,
    /// Horizon vertex id → new face waiting for its fan partner.
    horizon: HashMap<PointId, FaceId>,
    /// Six times the signed volume of the seed tetrahedron.
    seed_volume: f64,
    /// Seed flat relative to its edge lengths.
    seed_flat: bool,
    config: HullConfig,
}

impl ConvexHull {
    /// Builds a hull from a prepared point sequence.
    ///
    /// The first four points seed the hull; every following point is inserted
    /// in order. Points are expected lexicographically sorted when the
    /// configuration uses [`SeedSearch::LastAdded`](crate::SeedSearch::LastAdded).
    ///
    /// # Errors
    ///
    /// [`HullError::NotEnoughPoints`] below four points, plus the errors of
    /// [`ConvexHull::from_seed`].
    pub fn build(points: &[Point], config: HullConfig) -> HullResult<Self> {
        let (seed, rest) = match points {
            [a, b, c, d, rest @ ..] => ([*a, *b, *c, *d], rest),
            _ => {
                return Err(HullError::NotEnoughPoints {
                    count: points.len(),
                })
            }
        };

        let mut hull = Self::from_seed(seed, config)?;
        let (mut discarded, mut incomplete) = (0usize, 0usize);
        for point in rest {
            match hull.insert(*point) {
                Insertion::Added { .. } => {}
                Insertion::Discarded => discarded += 1,
                Insertion::Incomplete { .. } => incomplete += 1,
            }
        }
        if incomplete > 0 {
            log::warn!("{incomplete} insertions left the hull open");
        }
        log::debug!(
            "built hull from {} points: {} faces, {} points discarded",
            points.len(),
            hull.face_count(),
            discarded
        );
        Ok(hull)
    }

    /// Returns the configuration the hull was built with.
    #[inline]
    pub fn config(&self) -> &HullConfig {
        &self.config
    }

    /// Six times the signed volume of the seed tetrahedron, measured with its
    /// points sorted by id. Zero for a coplanar seed.
    #[inline]
    pub fn seed_volume(&self) -> f64 {
        self.seed_volume
    }

    /// Returns true if the seed tetrahedron is flat within the configured
    /// tolerance, measured relative to its edge lengths (see
    /// [`is_flat`](crate::core::predicates::is_flat)). A flat seed yields a
    /// degenerate hull.
    #[inline]
    pub fn is_seed_flat(&self) -> bool {
        self.seed_flat
    }

    /// Number of faces currently on the hull.
    #[inline]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Iterates over the current faces and their handles.
    pub fn faces(&self) -> impl Iterator<Item = (FaceId, &Face)> + '_ {
        self.faces.iter()
    }

    /// Looks up a face. Returns `None` for handles of removed faces.
    pub fn face(&self, id: FaceId) -> Option<&Face> {
        self.faces.get(id)
    }

    /// Faces created by the most recent successful insertion (the four seed
    /// faces before any insertion).
    ///
    /// This is where [`SeedSearch::LastAdded`](crate::SeedSearch::LastAdded)
    /// looks for the first visible face.
    pub fn last_added(&self) -> &[FaceId] {
        &self.last_added
    }

    /// Flattens the mesh into vertex id triples in winding order.
    ///
    /// The order of the triples is unspecified.
    pub fn triangles(&self) -> Vec<[PointId; 3]> {
        self.faces.values().map(Face::vertex_ids).collect()
    }

    /// Ids of the points that are hull vertices.
    pub fn vertex_ids(&self) -> BTreeSet<PointId> {
        self.faces
            .values()
            .flat_map(|face| face.vertex_ids())
            .collect()
    }

    /// Number of faces incident on each hull vertex.
    pub fn vertex_degrees(&self) -> BTreeMap<PointId, usize> {
        let mut degrees = BTreeMap::new();
        for id in self.faces.values().flat_map(|face| face.vertex_ids()) {
            *degrees.entry(id).or_insert(0) += 1;
        }
        degrees
    }

    /// Returns true if `point` coincides, within the configured tolerance,
    /// with a hull vertex.
    pub fn contains_vertex(&self, point: &Point) -> bool {
        let tolerance = self.config.tolerance;
        self.faces
            .values()
            .flat_map(|face| face.vertices().iter())
            .any(|vertex| vertex.coincides(point, tolerance))
    }
}
