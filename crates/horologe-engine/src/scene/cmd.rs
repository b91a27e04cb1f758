use crate::coords::Transform;
use crate::paint::Material;

use super::Shape;

/// Renderer-agnostic mesh descriptor: what to draw, where, and how.
///
/// `transform` is relative to the scene root. Shapes are defined in their own local
/// frame (see [`Shape`]) and placed by this transform.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshCmd {
    pub shape: Shape,
    pub transform: Transform,
    pub material: Material,
}

impl MeshCmd {
    #[inline]
    pub fn new(shape: Shape, transform: Transform, material: Material) -> Self {
        Self { shape, transform, material }
    }
}
