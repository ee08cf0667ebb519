//! Seed tetrahedron construction.
//!
//! The four seed faces are linked by hand; the generic relinking used during
//! insertion is not involved.

use super::ConvexHull;
use crate::config::HullConfig;
use crate::core::point::Point;
use crate::core::predicates::{is_flat, signed_volume};
use crate::error::{HullError, HullResult};
use crate::mesh::{Adjacency, Edge, Face, FaceArena};
use config::constants::TETRAHEDRON_FACE_COUNT;
use std::collections::HashMap;

impl ConvexHull {
    /// Creates a hull holding the tetrahedron spanned by four points.
    ///
    /// The points are sorted by id. The base triangle `(s0, s1, s2)` is wound
    /// so that `s3` lies behind it, and one side face is built on each base
    /// edge.
    ///
    /// Coplanar seeds are accepted and produce a degenerate hull; check
    /// [`ConvexHull::is_seed_flat`] when the input may be flat.
    ///
    /// # Errors
    ///
    /// [`HullError::InvalidConfig`] for a bad tolerance and
    /// [`HullError::DuplicatePointId`] if two seed points share an id.
    pub fn from_seed(points: [Point; 4], config: HullConfig) -> HullResult<Self> {
        config.validate()?;

        let mut sorted = points;
        sorted.sort_by(Point::cmp_by_id);
        if let Some(pair) = sorted.windows(2).find(|pair| pair[0].id == pair[1].id) {
            return Err(HullError::DuplicatePointId { id: pair[0].id });
        }
        let [s0, s1, s2, apex] = sorted;

        let seed_volume = signed_volume(s0.position, s1.position, s2.position, apex.position);
        let seed_flat = is_flat(
            s0.position,
            s1.position,
            s2.position,
            apex.position,
            config.tolerance,
        );
        if seed_flat {
            log::warn!(
                "seed points {}, {}, {}, {} are (nearly) coplanar: volume {:e}",
                s0.id,
                s1.id,
                s2.id,
                apex.id,
                seed_volume
            );
        }

        // apex in front of (s0, s1, s2) means that winding faces inwards
        let [v1, v2, v3] = if seed_volume > 0.0 {
            [s0, s2, s1]
        } else {
            [s0, s1, s2]
        };

        let mut faces = FaceArena::with_capacity_and_key(TETRAHEDRON_FACE_COUNT);
        let base = faces.insert(Face::new(v1, v2, v3));
        let side12 = faces.insert(Face::from_edge(v1, v2, apex));
        let side23 = faces.insert(Face::from_edge(v2, v3, apex));
        let side31 = faces.insert(Face::from_edge(v3, v1, apex));

        let (a, b, c, p) = (v1.id, v2.id, v3.id, apex.id);
        let links = [
            (
                base,
                [
                    Adjacency::new(side12, Edge::new(a, b)),
                    Adjacency::new(side23, Edge::new(b, c)),
                    Adjacency::new(side31, Edge::new(c, a)),
                ],
            ),
            (
                side12,
                [
                    Adjacency::new(base, Edge::new(b, a)),
                    Adjacency::new(side31, Edge::new(a, p)),
                    Adjacency::new(side23, Edge::new(p, b)),
                ],
            ),
            (
                side23,
                [
                    Adjacency::new(base, Edge::new(c, b)),
                    Adjacency::new(side12, Edge::new(b, p)),
                    Adjacency::new(side31, Edge::new(p, c)),
                ],
            ),
            (
                side31,
                [
                    Adjacency::new(base, Edge::new(a, c)),
                    Adjacency::new(side23, Edge::new(c, p)),
                    Adjacency::new(side12, Edge::new(p, a)),
                ],
            ),
        ];
        for (id, slots) in links {
            if let Some(face) = faces.get_mut(id) {
                for (index, adjacency) in slots.into_iter().enumerate() {
                    face.set_slot(index, adjacency);
                }
            }
        }

        log::debug!(
            "seeded hull with points {}, {}, {}, {}",
            s0.id,
            s1.id,
            s2.id,
            apex.id
        );

        Ok(Self {
            last_added: vec![base, side12, side23, side31],
            faces,
            horizon: HashMap::new(),
            seed_volume,
            seed_flat,
            config,
        })
    }
}
