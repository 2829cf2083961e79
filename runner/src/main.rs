//! Headless demo loop for the mover/spawner simulation.
//!
//! Owns everything the library deliberately does not: the scene, the input
//! state, the random source, and the tick loop itself. Input is scripted and
//! the RNG is seeded, so every run produces the same scene.

use anyhow::Result;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use sim::{Entity, InputState, MouseButton, Mover, Scene, Spawner, Transform, Vec3};
use tracing_subscriber::EnvFilter;

/// Fixed simulation rate in ticks per second.
const TICK_RATE_HZ: u32 = 60;

/// Total ticks to simulate (ten seconds at the fixed rate).
const RUN_TICKS: u32 = 600;

/// Seed for the spawn-position RNG.
const RNG_SEED: u64 = 0xC0FFEE;

/// Ticks on which the scripted user presses the left mouse button.
/// The matching release lands on the following tick.
const CLICK_TICKS: &[u32] = &[90, 240, 241, 402, 555];

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut scene = Scene::new();
    let template = scene.insert(Entity::new(
        "cube",
        Transform::from_translation(Vec3::new(0.0, 1.0, 0.0)),
    ));
    let player = scene.insert(Entity::new("player", Transform::identity()));
    let controller = scene.insert(Entity::new("spawn controller", Transform::identity()));

    let mover = Mover::default();
    let spawner = Spawner::new(template);

    spawner.init(&mut scene, controller)?;

    let mut input = InputState::new();
    let mut rng = ChaCha8Rng::seed_from_u64(RNG_SEED);
    let dt = 1.0 / TICK_RATE_HZ as f32;

    for tick in 0..RUN_TICKS {
        input.begin_tick();

        let (horizontal, vertical) = scripted_axes(tick);
        input.set_axes(horizontal, vertical);
        if CLICK_TICKS.contains(&tick) {
            input.press(MouseButton::Left);
        }
        if tick > 0 && CLICK_TICKS.contains(&(tick - 1)) {
            input.release(MouseButton::Left);
        }

        if let Some(entity) = scene.get_mut(player) {
            mover.tick(&mut entity.transform, &input, dt);
        }

        if let Some(id) = spawner.tick(&mut scene, &input, &mut rng)? {
            let translation = scene
                .get(id)
                .map(|entity| entity.transform.translation)
                .unwrap_or_else(Vec3::zeros);
            log::info!("tick {tick}: spawned {id:?} at {translation:?}");
        }
    }

    if let Some(entity) = scene.get(player) {
        log::info!(
            "player finished at {:?} after {RUN_TICKS} ticks",
            entity.transform.translation
        );
    }
    log::info!("scene holds {} entities", scene.len());
    for (id, entity) in scene.iter() {
        log::debug!("{id:?}: `{}` at {:?}", entity.name, entity.transform.translation);
    }

    Ok(())
}

/// Scripted axis input: a few phases of movement, then idle.
fn scripted_axes(tick: u32) -> (f32, f32) {
    match tick {
        0..=119 => (1.0, 0.0),
        120..=239 => (0.0, 1.0),
        240..=359 => (-0.5, -0.5),
        _ => (0.0, 0.0),
    }
}
