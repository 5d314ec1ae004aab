use glam::Vec3;

use crate::geometry::{normalize_or, sphere_intersects_box, sphere_intersects_plane, Plane};
use crate::systems::award_point;
use crate::{Events, GameRng, GameState, Player, TopologyConfig};

/// Bounce a heading off a surface with unit normal `normal`.
///
/// Only the magnitude of the incidence is used, so the result always has a
/// component along `normal`: a ball tested from the far side of a thin
/// boundary is still pushed back into the field.
pub fn reflect_off_plane(dir: Vec3, normal: Vec3, fallback: Vec3) -> Vec3 {
    let n = normalize_or(normal, Vec3::ZERO);
    let d = dir.dot(n).abs();
    let reflected = (dir + n * d) * 2.0 - dir;
    normalize_or(reflected, fallback)
}

/// Heading after a paddle hit: from the paddle center to the ball, pushed
/// along the paddle's outward normal. Off-center hits deflect the ball.
pub fn paddle_bounce(ball_pos: Vec3, paddle_center: Vec3, normal: Vec3, fallback: Vec3) -> Vec3 {
    normalize_or(ball_pos - paddle_center + normal, fallback)
}

fn bounce_off_wall(state: &mut GameState, wall: &Plane, config: &TopologyConfig, events: &mut Events) {
    if sphere_intersects_plane(&state.ball.bounds(), wall) {
        let dir = reflect_off_plane(state.ball.dir(), wall.normal, config.serve_dir);
        state.ball.set_dir(dir, config.serve_dir);
        events.ball_hit_wall = true;
    }
}

fn score_line(
    state: &mut GameState,
    scorer: Player,
    config: &TopologyConfig,
    events: &mut Events,
    rng: &mut GameRng,
) {
    let line = config.goal_of(scorer.opponent());
    if sphere_intersects_plane(&state.ball.bounds(), line) {
        award_point(state, scorer, config, events, rng);
    }
}

fn bounce_off_paddle(
    state: &mut GameState,
    player: Player,
    config: &TopologyConfig,
    events: &mut Events,
) {
    // Box comes from the live paddle center every call
    let paddle = *state.paddle(player);
    if !sphere_intersects_box(&state.ball.bounds(), &paddle.bounds()) {
        return;
    }

    let dir = paddle_bounce(
        state.ball.pos,
        paddle.center,
        config.paddle_normal(player),
        config.serve_dir,
    );
    state.ball.set_dir(dir, config.serve_dir);
    state.ball.speed = (state.ball.speed + config.ball_speed_increment).min(config.ball_speed_max);
    events.ball_hit_paddle = true;
}

/// Run every boundary and paddle test against the ball, in a fixed order.
///
/// Each check sees the ball as left by the previous one, and every check
/// that matches fires; nothing short-circuits.
pub fn check_collisions(
    state: &mut GameState,
    config: &TopologyConfig,
    events: &mut Events,
    rng: &mut GameRng,
) {
    // 1-2. Side walls
    bounce_off_wall(state, &config.top, config, events);
    bounce_off_wall(state, &config.bottom, config, events);

    // 3-4. Score lines: right line scores for player one, left for player two
    score_line(state, Player::One, config, events, rng);
    score_line(state, Player::Two, config, events, rng);

    // 5-6. Paddles
    bounce_off_paddle(state, Player::One, config, events);
    bounce_off_paddle(state, Player::Two, config, events);
}
