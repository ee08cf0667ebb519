//! Geometric primitives shared by the mesh and hull modules.
//!
//! Includes the vector alias (`Vec3`), identified points and the visibility
//! predicate.

pub mod point;
pub mod predicates;
pub mod vec3;
