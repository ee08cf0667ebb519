//! # Hull Mesh
//!
//! Triangle faces with explicit adjacency, stored in a slot arena.
//!
//! ## Overview
//!
//! - Each face keeps its three vertices in outward winding order, with the
//!   smallest point id first.
//! - Each face has three neighbor slots. A filled slot holds the handle of the
//!   face across one edge and that edge, directed as this face winds it.
//! - Faces live in a [`SlotMap`]; a removed face's handle goes stale and can
//!   never alias a face created later in the same slot.
//!
//! ```text
//!        v3
//!       /  \        slot edges are directed along the winding:
//!      /    \       (v1, v2), (v2, v3), (v3, v1) in some slot order
//!    v1 ---- v2
//! ```

use crate::core::point::{Point, PointId};
use crate::core::predicates::is_visible;
use crate::core::vec3::{triangle_normal, Vec3};
use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Stable handle of a face in the hull arena.
    pub struct FaceId;
}

/// Arena holding the faces of a hull.
pub type FaceArena = SlotMap<FaceId, Face>;

// =============================================================================
// EDGE / ADJACENCY
// =============================================================================

/// A directed edge between two points, identified by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    /// Tail of the edge.
    pub start: PointId,
    /// Head of the edge.
    pub end: PointId,
}

impl Edge {
    /// Creates a directed edge.
    pub fn new(start: PointId, end: PointId) -> Self {
        Self { start, end }
    }

    /// The same edge walked the other way.
    pub fn reversed(self) -> Self {
        Self::new(self.end, self.start)
    }

    /// Endpoints ordered by id, used as an undirected key.
    pub fn undirected(self) -> (PointId, PointId) {
        if self.start <= self.end {
            (self.start, self.end)
        } else {
            (self.end, self.start)
        }
    }
}

/// A filled neighbor slot: the face across an edge and the shared edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Adjacency {
    /// Neighboring face.
    pub face: FaceId,
    /// Shared edge, directed as the owning face winds it.
    pub edge: Edge,
}

impl Adjacency {
    /// Creates a slot entry.
    pub fn new(face: FaceId, edge: Edge) -> Self {
        Self { face, edge }
    }
}

// =============================================================================
// FACE
// =============================================================================

/// A triangular hull face.
#[derive(Debug, Clone)]
pub struct Face {
    vertices: [Point; 3],
    slots: [Option<Adjacency>; 3],
}

impl Face {
    /// Creates an unlinked face from vertices in winding order.
    pub fn new(v1: Point, v2: Point, v3: Point) -> Self {
        Self {
            vertices: [v1, v2, v3],
            slots: [None; 3],
        }
    }

    /// Builds the face joining the directed edge `start → end` to `apex`.
    ///
    /// The winding is the cycle `(start, apex, end)`, so the new face walks the
    /// edge as `end → start`. The cycle is rotated to put the smallest id first.
    ///
    /// # Example
    ///
    /// ```rust
    /// use incremental_hull::{Face, Point};
    ///
    /// let a = Point::new(1.0, 0.0, 0.0, 5);
    /// let b = Point::new(0.0, 1.0, 0.0, 3);
    /// let apex = Point::new(0.0, 0.0, 1.0, 9);
    /// let face = Face::from_edge(a, b, apex);
    /// assert_eq!(face.vertex_ids(), [3, 5, 9]);
    /// ```
    pub fn from_edge(start: Point, end: Point, apex: Point) -> Self {
        let first = start.id.min(end.id).min(apex.id);
        if first == apex.id {
            Self::new(apex, end, start)
        } else if first == start.id {
            Self::new(start, apex, end)
        } else {
            Self::new(end, start, apex)
        }
    }

    /// Vertices in winding order.
    #[inline]
    pub fn vertices(&self) -> &[Point; 3] {
        &self.vertices
    }

    /// Vertex ids in winding order.
    pub fn vertex_ids(&self) -> [PointId; 3] {
        [self.vertices[0].id, self.vertices[1].id, self.vertices[2].id]
    }

    /// The three directed edges of the winding.
    pub fn edges(&self) -> [Edge; 3] {
        let [a, b, c] = self.vertex_ids();
        [Edge::new(a, b), Edge::new(b, c), Edge::new(c, a)]
    }

    /// Returns true if the face walks `edge` in the given direction.
    pub fn winds(&self, edge: Edge) -> bool {
        self.edges().contains(&edge)
    }

    /// The edge between `u` and `v`, directed as this face winds it.
    pub fn directed_edge(&self, u: PointId, v: PointId) -> Option<Edge> {
        let forward = Edge::new(u, v);
        if self.winds(forward) {
            Some(forward)
        } else if self.winds(forward.reversed()) {
            Some(forward.reversed())
        } else {
            None
        }
    }

    /// Outward normal `(v3 - v2) × (v1 - v2)`, not normalized.
    pub fn normal(&self) -> Vec3 {
        let [v1, v2, v3] = self.vertices;
        triangle_normal(v1.position, v2.position, v3.position)
    }

    /// Returns true if `point` is strictly in front of this face.
    pub fn is_visible_from(&self, point: &Point) -> bool {
        let [v1, v2, v3] = self.vertices;
        is_visible(point.position, v1.position, v2.position, v3.position)
    }

    /// Neighbor slots in fill order.
    #[inline]
    pub fn slots(&self) -> &[Option<Adjacency>; 3] {
        &self.slots
    }

    /// Filled neighbor slots.
    pub fn neighbors(&self) -> impl Iterator<Item = Adjacency> + '_ {
        self.slots.iter().flatten().copied()
    }

    /// The slot entry pointing at `face`, if any.
    pub fn adjacency_to(&self, face: FaceId) -> Option<Adjacency> {
        self.neighbors().find(|adjacency| adjacency.face == face)
    }

    /// Overwrites slot `index`.
    pub(crate) fn set_slot(&mut self, index: usize, adjacency: Adjacency) {
        self.slots[index] = Some(adjacency);
    }

    /// Fills the first empty slot. Returns false if all three are taken.
    pub(crate) fn attach(&mut self, adjacency: Adjacency) -> bool {
        match self.slots.iter_mut().find(|slot| slot.is_none()) {
            Some(slot) => {
                *slot = Some(adjacency);
                true
            }
            None => false,
        }
    }

    /// Points the slot that referenced `old` at `new`, keeping its edge.
    ///
    /// Returns false if no slot referenced `old`.
    pub(crate) fn replace_neighbor(&mut self, old: FaceId, new: FaceId) -> bool {
        for adjacency in self.slots.iter_mut().flatten() {
            if adjacency.face == old {
                adjacency.face = new;
                return true;
            }
        }
        false
    }
}
