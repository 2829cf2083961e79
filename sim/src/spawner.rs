//! Template-cloning spawner: one clone at startup, one per left-mouse
//! release edge.
//!
//! The spawner holds only a template handle. Everything else — the scene the
//! clones land in, the input snapshot, and the random source — is passed in
//! by the caller's loop, so runs are reproducible from a seed and an input
//! script.

use crate::constants::{SPAWN_COORD_MAX, SPAWN_COORD_MIN};
use crate::input::{InputState, MouseButton};
use crate::scene::{EntityId, Scene, SceneError};
use crate::transform::Vec3;
use rand::Rng;

/// Draws a uniformly random spawn position inside the spawn cube.
///
/// Each coordinate is an independent integer draw from
/// `[SPAWN_COORD_MIN, SPAWN_COORD_MAX)`, in x, y, z order. Draw order is part
/// of the contract: reordering changes every seeded run.
pub fn spawn_point<R: Rng>(rng: &mut R) -> Vec3 {
    let x = rng.gen_range(SPAWN_COORD_MIN..SPAWN_COORD_MAX);
    let y = rng.gen_range(SPAWN_COORD_MIN..SPAWN_COORD_MAX);
    let z = rng.gen_range(SPAWN_COORD_MIN..SPAWN_COORD_MAX);

    Vec3::new(x as f32, y as f32, z as f32)
}

/// Clones a template entity into the scene at startup and on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spawner {
    template: EntityId,
}

impl Spawner {
    /// `template` must refer to an entity in the scene the spawner will be
    /// ticked against; a dangling handle surfaces as
    /// [`SceneError::UnknownEntity`] on first use.
    pub fn new(template: EntityId) -> Self {
        Self { template }
    }

    pub fn template(&self) -> EntityId {
        self.template
    }

    /// Startup path: logs one record identifying the owning entity by name,
    /// then clones the template once at the template's own transform.
    pub fn init(&self, scene: &mut Scene, owner: EntityId) -> Result<EntityId, SceneError> {
        let owner_name = &scene
            .get(owner)
            .ok_or(SceneError::UnknownEntity(owner))?
            .name;
        log::info!("spawner started by `{owner_name}`");

        scene.instantiate(self.template)
    }

    /// Per-tick path: if a left-mouse release edge was recorded this tick,
    /// clones the template at a random [`spawn_point`] using the template's
    /// rotation as it is *now* (the template may have rotated since startup).
    ///
    /// Returns `Ok(None)` when no release edge occurred; press and held
    /// states never spawn.
    pub fn tick<R: Rng>(
        &self,
        scene: &mut Scene,
        input: &InputState,
        rng: &mut R,
    ) -> Result<Option<EntityId>, SceneError> {
        if !input.released(MouseButton::Left) {
            return Ok(None);
        }

        let translation = spawn_point(rng);
        let rotation = scene
            .get(self.template)
            .ok_or(SceneError::UnknownEntity(self.template))?
            .transform
            .rotation;

        scene
            .instantiate_at(self.template, translation, rotation)
            .map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::Entity;
    use crate::transform::{Quat, Transform};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn scene_with_template() -> (Scene, EntityId, EntityId) {
        let mut scene = Scene::new();
        let template = scene.insert(Entity::new(
            "cube",
            Transform::from_translation(Vec3::new(0.0, 1.0, 0.0)),
        ));
        let owner = scene.insert(Entity::new("spawn controller", Transform::identity()));
        (scene, template, owner)
    }

    fn released_input() -> InputState {
        let mut input = InputState::new();
        input.begin_tick();
        input.release(MouseButton::Left);
        input
    }

    #[test]
    fn init_clones_the_template_exactly_once() {
        let (mut scene, template, owner) = scene_with_template();
        let spawner = Spawner::new(template);
        let before = scene.len();

        let id = spawner.init(&mut scene, owner).unwrap();

        assert_eq!(scene.len(), before + 1);
        let spawned = scene.get(id).unwrap();
        assert_eq!(spawned.transform.translation, Vec3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn init_with_unknown_owner_fails_without_spawning() {
        let (mut scene, template, _) = scene_with_template();
        let spawner = Spawner::new(template);
        let before = scene.len();

        // Mint a handle this scene has never issued by over-allocating in a
        // throwaway scene.
        let dangling = {
            let mut tmp = Scene::new();
            let mut last = tmp.insert(Entity::new("x", Transform::identity()));
            for _ in 0..16 {
                last = tmp.insert(Entity::new("x", Transform::identity()));
            }
            last
        };

        assert_eq!(
            spawner.init(&mut scene, dangling),
            Err(SceneError::UnknownEntity(dangling))
        );
        assert_eq!(scene.len(), before);
    }

    #[test]
    fn tick_without_release_edge_spawns_nothing() {
        let (mut scene, template, _) = scene_with_template();
        let spawner = Spawner::new(template);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let before = scene.len();

        // Idle tick.
        let mut input = InputState::new();
        input.begin_tick();
        assert_eq!(spawner.tick(&mut scene, &input, &mut rng), Ok(None));

        // Press without release.
        input.begin_tick();
        input.press(MouseButton::Left);
        assert_eq!(spawner.tick(&mut scene, &input, &mut rng), Ok(None));

        // Still held on the next tick.
        input.begin_tick();
        assert_eq!(spawner.tick(&mut scene, &input, &mut rng), Ok(None));

        assert_eq!(scene.len(), before);
    }

    #[test]
    fn each_release_edge_spawns_exactly_one_instance() {
        let (mut scene, template, _) = scene_with_template();
        let spawner = Spawner::new(template);
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let before = scene.len();

        let mut input = InputState::new();
        for _ in 0..3 {
            input.begin_tick();
            input.press(MouseButton::Left);
            input.release(MouseButton::Left);
            let spawned = spawner.tick(&mut scene, &input, &mut rng).unwrap();
            assert!(spawned.is_some());
        }

        assert_eq!(scene.len(), before + 3);
    }

    #[test]
    fn spawn_coordinates_are_integers_inside_the_cube() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);

        for _ in 0..1000 {
            let p = spawn_point(&mut rng);
            for coord in [p.x, p.y, p.z] {
                assert!(coord >= SPAWN_COORD_MIN as f32);
                // Upper bound is exclusive.
                assert!(coord < SPAWN_COORD_MAX as f32);
                assert_eq!(coord.fract(), 0.0);
            }
        }
    }

    #[test]
    fn spawned_rotation_tracks_the_template_at_spawn_time() {
        let (mut scene, template, owner) = scene_with_template();
        let spawner = Spawner::new(template);
        let mut rng = ChaCha8Rng::seed_from_u64(4);

        let startup_clone = spawner.init(&mut scene, owner).unwrap();
        let startup_rotation = scene.get(startup_clone).unwrap().transform.rotation;

        // Rotate the template after startup; later spawns must pick this up.
        let turned = Quat::from_euler_angles(0.0, 0.7, 0.0);
        scene.get_mut(template).unwrap().transform.rotation = turned;

        let id = spawner
            .tick(&mut scene, &released_input(), &mut rng)
            .unwrap()
            .unwrap();

        assert_eq!(scene.get(id).unwrap().transform.rotation, turned);
        assert_ne!(startup_rotation, turned);
    }

    #[test]
    fn seeded_runs_spawn_at_identical_positions() {
        let positions = |seed: u64| -> Vec<Vec3> {
            let (mut scene, template, _) = scene_with_template();
            let spawner = Spawner::new(template);
            let mut rng = ChaCha8Rng::seed_from_u64(seed);

            (0..5)
                .map(|_| {
                    let id = spawner
                        .tick(&mut scene, &released_input(), &mut rng)
                        .unwrap()
                        .unwrap();
                    scene.get(id).unwrap().transform.translation
                })
                .collect()
        };

        assert_eq!(positions(42), positions(42));
        assert_ne!(positions(42), positions(43));
    }
}
