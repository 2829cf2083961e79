//! Axis-driven movement: one pure `tick` that maps the current axis inputs to
//! a relative translation in the entity's local frame.

use crate::constants::DEFAULT_MOVE_SPEED;
use crate::input::InputState;
use crate::transform::{Transform, Vec3};

/// Translates an entity from analog axis input, once per tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mover {
    /// Linear speed in world units per second. Assumed non-negative;
    /// authoring-time configuration, not validated here.
    pub speed: f32,
}

impl Default for Mover {
    fn default() -> Self {
        Self {
            speed: DEFAULT_MOVE_SPEED,
        }
    }
}

impl Mover {
    pub fn new(speed: f32) -> Self {
        Self { speed }
    }

    /// Advances `transform` by one tick of axis-driven movement.
    ///
    /// The displacement is `(0, vertical, horizontal) * speed * dt`, applied
    /// in the transform's local frame: the X component is always zero, the
    /// vertical axis drives Y, and the horizontal axis drives Z. Zero axis
    /// input yields zero displacement for any `dt`; negative `dt` is treated
    /// as zero.
    #[inline]
    pub fn tick(&self, transform: &mut Transform, input: &InputState, dt_seconds: f32) {
        let dt = dt_seconds.max(0.0);

        let mut direction = Vec3::zeros();
        direction.y = input.vertical();
        direction.z = input.horizontal();

        transform.translate_local(direction * (self.speed * dt));
    }
}
