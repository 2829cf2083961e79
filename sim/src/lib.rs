pub mod constants;
pub mod input;
pub mod mover;
pub mod scene;
pub mod spawner;
pub mod transform;

pub use constants::{AXIS_LIMIT, DEFAULT_MOVE_SPEED, SPAWN_COORD_MAX, SPAWN_COORD_MIN};
pub use input::{ButtonBitmask, ButtonMask, InputState, MouseButton};
pub use mover::Mover;
pub use scene::{Entity, EntityId, Scene, SceneError};
pub use spawner::{Spawner, spawn_point};
pub use transform::{Quat, Transform, Vec3};
