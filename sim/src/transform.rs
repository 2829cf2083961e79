use nalgebra as na;

/// World-space vector/position type used throughout the simulation.
pub type Vec3 = na::Vector3<f32>;

/// Rotation type used throughout the simulation.
pub type Quat = na::UnitQuaternion<f32>;

/// Position and orientation of a scene entity.
///
/// `translation` is relative to the scene origin; there is no parent
/// hierarchy, so "local frame" below means the frame defined by this
/// transform's own `rotation`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub translation: Vec3,
    pub rotation: Quat,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            translation: Vec3::zeros(),
            rotation: Quat::identity(),
        }
    }
}

impl Transform {
    /// Transform at the scene origin with identity rotation.
    pub fn identity() -> Self {
        Self::default()
    }

    /// Transform at `translation` with identity rotation.
    pub fn from_translation(translation: Vec3) -> Self {
        Self {
            translation,
            rotation: Quat::identity(),
        }
    }

    /// Applies a relative translation expressed in this transform's local
    /// frame: `delta` is rotated by the current rotation before being added
    /// to the translation.
    ///
    /// With identity rotation this degenerates to `translation += delta`.
    #[inline]
    pub fn translate_local(&mut self, delta: Vec3) {
        self.translation += self.rotation * delta;
    }
}
