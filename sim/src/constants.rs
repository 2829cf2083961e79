/// Default movement speed in world units per second for movers that don't
/// override it at authoring time.
pub const DEFAULT_MOVE_SPEED: f32 = 5.0;

/// Inclusive lower bound for randomly-spawned instance coordinates, per axis.
pub const SPAWN_COORD_MIN: i32 = -5;

/// Exclusive upper bound for randomly-spawned instance coordinates, per axis.
///
/// Spawn coordinates are integer draws from `[SPAWN_COORD_MIN, SPAWN_COORD_MAX)`.
/// The upper bound being exclusive is a deliberate choice; change both bounds
/// together if the spawn cube needs to grow.
pub const SPAWN_COORD_MAX: i32 = 5;

/// Axis inputs are clamped into `[-AXIS_LIMIT, AXIS_LIMIT]` when recorded.
pub const AXIS_LIMIT: f32 = 1.0;
