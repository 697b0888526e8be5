//! Seam to the externally-owned reactive scene object.

use glam::Vec3;

/// A 3D object with a settable world position.
///
/// This is the object pointer reactivity nudges around its rest pose,
/// typically the hero model of the scene, owned by the rendering
/// collaborator. The host implements this as a thin proxy; the crate
/// never holds scene-graph knowledge beyond this trait.
pub trait ControlledObject {
    /// Current world position of the object.
    fn position(&self) -> Vec3;
    /// Move the object to a new world position.
    fn set_position(&mut self, position: Vec3);
}
