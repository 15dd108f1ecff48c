use crate::geometry::GeometricObject;
use crate::Material;

/// A shape together with the material it is shaded with.
#[derive(Debug, Clone, PartialEq)]
pub struct Surface {
    pub geometry: GeometricObject,
    pub material: Material,
}

impl Surface {
    pub fn new(geometry: GeometricObject, material: Material) -> Self {
        Self { geometry, material }
    }
}
