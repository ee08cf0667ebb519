//! Point insertion: seed-face search, horizon walk and fan relinking.

use super::{ConvexHull, Insertion};
use crate::config::SeedSearch;
use crate::core::point::{Point, PointId};
use crate::mesh::{Adjacency, Edge, Face, FaceId};
use std::collections::VecDeque;

impl ConvexHull {
    /// Inserts a point, replacing the faces it can see by a fan around it.
    ///
    /// A point that sees no seed candidate face (see
    /// [`SeedSearch`](crate::SeedSearch)) is inside or on the hull and is
    /// discarded; the mesh is left untouched. [`Insertion::Incomplete`] reports
    /// a corrupted mesh whose horizon could not be fully closed.
    pub fn insert(&mut self, point: Point) -> Insertion {
        let Some(start) = self.find_visible_face(&point) else {
            log::debug!("point {} sees no face, discarded", point.id);
            return Insertion::Discarded;
        };

        self.last_added.clear();
        self.horizon.clear();

        let mut queue = VecDeque::from([start]);
        let (mut removed, mut unresolved) = (0usize, 0usize);
        while let Some(current) = queue.pop_front() {
            // faces can be queued more than once; the first visit removes them
            let Some(face) = self.faces.get(current) else {
                continue;
            };
            let slots = *face.slots();
            for adjacency in slots.into_iter().flatten() {
                if !self.visit_neighbor(&point, current, adjacency, &mut queue) {
                    unresolved += 1;
                }
            }
            self.faces.remove(current);
            removed += 1;
        }

        if !self.horizon.is_empty() {
            log::warn!(
                "point {}: {} horizon vertices left without a fan partner",
                point.id,
                self.horizon.len()
            );
            self.horizon.clear();
        }

        let created = self.last_added.len();
        if unresolved > 0 {
            log::warn!(
                "point {}: {unresolved} horizon edges left open, {removed} faces removed, {created} created",
                point.id
            );
            return Insertion::Incomplete {
                removed,
                created,
                unresolved,
            };
        }
        log::debug!(
            "point {} added: {} faces removed, {} created",
            point.id,
            removed,
            created
        );
        Insertion::Added { removed, created }
    }

    /// First seed candidate visible from `point`.
    fn find_visible_face(&self, point: &Point) -> Option<FaceId> {
        match self.config.seed_search {
            SeedSearch::LastAdded => self.last_added.iter().copied().find(|&id| {
                self.faces
                    .get(id)
                    .is_some_and(|face| face.is_visible_from(point))
            }),
            SeedSearch::Exhaustive => self
                .faces
                .iter()
                .find(|(_, face)| face.is_visible_from(point))
                .map(|(id, _)| id),
        }
    }

    /// Handles one neighbor of a visible face: queue it if visible too,
    /// otherwise build a fan face on the shared horizon edge.
    ///
    /// Returns false if a horizon edge could not be closed.
    fn visit_neighbor(
        &mut self,
        point: &Point,
        current: FaceId,
        adjacency: Adjacency,
        queue: &mut VecDeque<FaceId>,
    ) -> bool {
        let Some(neighbor) = self.faces.get(adjacency.face) else {
            return true;
        };
        if neighbor.is_visible_from(point) {
            queue.push_back(adjacency.face);
            true
        } else {
            self.add_fan_face(point, adjacency.edge, current, adjacency.face)
        }
    }

    /// Creates the face joining `point` to the horizon `edge` and links it to
    /// the invisible `neighbor`, in place of the visible face `replaced`.
    ///
    /// Returns false, creating nothing, when `replaced` does not own both
    /// endpoints of `edge`.
    fn add_fan_face(
        &mut self,
        point: &Point,
        edge: Edge,
        replaced: FaceId,
        neighbor: FaceId,
    ) -> bool {
        let (Some(start), Some(end)) = (
            self.vertex_of(replaced, edge.start),
            self.vertex_of(replaced, edge.end),
        ) else {
            log::warn!("face {replaced:?} lost horizon edge {edge:?}");
            return false;
        };

        // the fan face walks the horizon edge in the same direction as the
        // face it replaces
        let mut face = Face::from_edge(end, start, *point);
        face.set_slot(0, Adjacency::new(neighbor, edge));
        let created = self.faces.insert(face);

        let relinked = self
            .faces
            .get_mut(neighbor)
            .is_some_and(|face| face.replace_neighbor(replaced, created));
        if !relinked {
            log::warn!("face {neighbor:?} had no slot for {replaced:?}");
        }

        log::trace!(
            "point {}: fan face {created:?} on horizon edge {} -> {}",
            point.id,
            edge.start,
            edge.end
        );

        self.link_fan_at(created, edge.start, point.id);
        self.link_fan_at(created, edge.end, point.id);
        self.last_added.push(created);
        relinked
    }

    /// Pairs `created` with the fan face already waiting at `vertex`, or
    /// leaves it waiting there.
    ///
    /// Two fan faces meeting at a horizon vertex share the edge
    /// `vertex`–`apex`.
    fn link_fan_at(&mut self, created: FaceId, vertex: PointId, apex: PointId) {
        let Some(pending) = self.horizon.remove(&vertex) else {
            self.horizon.insert(vertex, created);
            return;
        };

        let pending_edge = self
            .faces
            .get(pending)
            .and_then(|face| face.directed_edge(vertex, apex));
        let created_edge = self
            .faces
            .get(created)
            .and_then(|face| face.directed_edge(vertex, apex));
        let (Some(pending_edge), Some(created_edge)) = (pending_edge, created_edge) else {
            log::warn!(
                "fan faces {pending:?} and {created:?} do not share edge {vertex} - {apex}"
            );
            return;
        };

        let mut attached = true;
        if let Some(face) = self.faces.get_mut(pending) {
            attached &= face.attach(Adjacency::new(created, pending_edge));
        }
        if let Some(face) = self.faces.get_mut(created) {
            attached &= face.attach(Adjacency::new(pending, created_edge));
        }
        if !attached {
            log::warn!("fan faces {pending:?} and {created:?} ran out of neighbor slots");
        }
    }

    fn vertex_of(&self, face: FaceId, id: PointId) -> Option<Point> {
        self.faces
            .get(face)?
            .vertices()
            .iter()
            .find(|vertex| vertex.id == id)
            .copied()
    }
}
