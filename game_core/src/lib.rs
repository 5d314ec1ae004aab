pub mod components;
pub mod config;
pub mod geometry;
pub mod params;
pub mod resources;
pub mod state;
pub mod systems;

pub use components::*;
pub use config::*;
pub use geometry::{Aabb, Plane, Sphere};
pub use params::*;
pub use resources::*;
pub use state::*;

use systems::*;

/// Advance the locally simulated match by one frame.
///
/// Motion is a fixed step per call, independent of wall-clock time.
pub fn step(
    state: &mut GameState,
    commands: &[PaddleCommand],
    config: &TopologyConfig,
    events: &mut Events,
    rng: &mut GameRng,
) {
    // Clear events at start of frame
    events.clear();

    // 1. Paddles follow held input
    move_paddles(state, commands, config);

    // 2. Move ball
    move_ball(state);

    // 3. Walls, score lines, paddles
    check_collisions(state, config, events, rng);
}
