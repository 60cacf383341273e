pub mod components;
pub mod config;
pub mod game;
pub mod map;
pub mod params;
pub mod render;
pub mod resources;
pub mod schedule;
pub mod systems;

pub use components::*;
pub use config::*;
pub use game::*;
pub use map::*;
pub use params::*;
pub use render::{DrawSurface, TextStyle};
pub use resources::*;
pub use schedule::*;

use hecs::World;
use systems::*;

/// Run one fixed tick of the Pong simulation.
///
/// Velocities are in surface units per tick; `time` only counts ticks.
pub fn step(
    world: &mut World,
    time: &mut Time,
    map: &GameMap,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) {
    // Clear events at start of tick
    events.clear();

    // 1. Goal check, serving again from the center on a score
    check_scoring(world, map, config, score, events, rng);

    // 2. Move ball
    move_ball(world);

    // 3. Opponent follows the ball
    track_ball(world, config);

    // 4. Top/bottom reflection
    bounce_walls(world, map, events);

    // 5. Target paddle collision and deflection
    check_paddle_hit(world, map, config, events);

    time.advance();
}

/// Helper to create a paddle entity
pub fn create_paddle(world: &mut World, paddle: Paddle) -> hecs::Entity {
    world.spawn((paddle,))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, ball: Ball) -> hecs::Entity {
    world.spawn((ball,))
}
