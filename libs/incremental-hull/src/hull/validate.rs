//! Topology validation.

use super::ConvexHull;
use crate::core::point::PointId;
use crate::error::{HullError, HullResult};
use config::constants::EULER_CHARACTERISTIC;
use std::collections::HashMap;

impl ConvexHull {
    /// Checks that the mesh is a closed, consistently oriented 2-manifold.
    ///
    /// Verified, in order:
    /// - every neighbor slot is filled and points at a live face
    /// - the slot edge is wound by the owning face
    /// - the neighbor points back through the reversed edge
    /// - every undirected edge is shared by exactly two faces
    /// - `V - E + F` equals the Euler characteristic of a sphere
    ///
    /// # Errors
    ///
    /// [`HullError::InvalidTopology`] describing the first violation.
    pub fn validate(&self) -> HullResult<()> {
        for (id, face) in self.faces.iter() {
            for (index, slot) in face.slots().iter().enumerate() {
                let adjacency = slot.ok_or_else(|| {
                    HullError::invalid_topology(format!("face {id:?} has empty slot {index}"))
                })?;
                if !face.winds(adjacency.edge) {
                    return Err(HullError::invalid_topology(format!(
                        "face {id:?} slot {index} edge {:?} is not on the face",
                        adjacency.edge
                    )));
                }
                let neighbor = self.faces.get(adjacency.face).ok_or_else(|| {
                    HullError::invalid_topology(format!(
                        "face {id:?} slot {index} points at removed face {:?}",
                        adjacency.face
                    ))
                })?;
                let back = neighbor.adjacency_to(id).ok_or_else(|| {
                    HullError::invalid_topology(format!(
                        "face {:?} does not link back to {id:?}",
                        adjacency.face
                    ))
                })?;
                if back.edge != adjacency.edge.reversed() {
                    return Err(HullError::invalid_topology(format!(
                        "faces {id:?} and {:?} disagree on their edge: {:?} vs {:?}",
                        adjacency.face, adjacency.edge, back.edge
                    )));
                }
            }
        }

        let mut edge_uses: HashMap<(PointId, PointId), usize> = HashMap::new();
        for face in self.faces.values() {
            for edge in face.edges() {
                *edge_uses.entry(edge.undirected()).or_insert(0) += 1;
            }
        }
        if let Some(((a, b), uses)) = edge_uses.iter().find(|(_, uses)| **uses != 2) {
            return Err(HullError::invalid_topology(format!(
                "edge ({a}, {b}) is used by {uses} faces"
            )));
        }

        let vertices = self.vertex_ids().len() as i64;
        let edges = edge_uses.len() as i64;
        let faces = self.faces.len() as i64;
        let euler = vertices - edges + faces;
        if euler != EULER_CHARACTERISTIC {
            return Err(HullError::invalid_topology(format!(
                "Euler characteristic is {euler} (V={vertices}, E={edges}, F={faces})"
            )));
        }

        Ok(())
    }
}
