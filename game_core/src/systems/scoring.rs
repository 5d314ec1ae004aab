use rand::Rng;

use crate::{Ball, Events, GameRng, GameState, Player, TopologyConfig};

/// Re-center the ball and serve it toward `toward`'s paddle at a random angle
pub fn serve(ball: &mut Ball, toward: Player, config: &TopologyConfig, rng: &mut GameRng) {
    let base = -config.paddle_normal(toward);
    let angle = if config.serve_max_angle > 0.0 {
        rng.0
            .gen_range(-config.serve_max_angle..config.serve_max_angle)
    } else {
        0.0
    };
    let dir = base * angle.cos() + config.paddle_axis * angle.sin();
    ball.reset(
        config.field_center,
        dir,
        config.ball_speed_initial,
        config.serve_dir,
    );
}

/// Award a point: increment the scorer, re-center and serve toward the loser
pub fn award_point(
    state: &mut GameState,
    scorer: Player,
    config: &TopologyConfig,
    events: &mut Events,
    rng: &mut GameRng,
) {
    state.score.increment(scorer);
    events.record_score(scorer);
    serve(&mut state.ball, scorer.opponent(), config, rng);

    log::info!(
        "Player {} scored ({} - {})",
        scorer.number(),
        state.score.player_1,
        state.score.player_2
    );
}

/// Winner, once either score reaches the configured threshold
pub fn check_winner(state: &GameState, config: &TopologyConfig) -> Option<Player> {
    state.score.has_winner(config.win_score)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn test_award_point_resets_ball() {
        let config = TopologyConfig::new();
        let mut state = GameState::new(&config);
        let mut events = Events::new();
        let mut rng = GameRng::new(1);
        state.ball.pos = Vec3::new(2.97, 0.4, 0.0);
        state.ball.speed = config.ball_speed_max;

        award_point(&mut state, Player::One, &config, &mut events, &mut rng);

        assert_eq!(state.score.player_1, 1);
        assert_eq!(state.score.player_2, 0);
        assert_eq!(state.ball.pos, Vec3::ZERO);
        assert_eq!(state.ball.speed, config.ball_speed_initial, "Speed resets");
        assert!(events.player_1_scored);
        assert!(!events.player_2_scored);
    }

    #[test]
    fn test_serve_heads_toward_loser() {
        let config = TopologyConfig::new();
        let mut rng = GameRng::new(99);
        let mut ball = Ball::new(Vec3::ONE, Vec3::X, 0.05, 0.04);

        for _ in 0..50 {
            serve(&mut ball, Player::One, &config, &mut rng);
            assert!(ball.dir().x < 0.0, "Serve toward the left paddle");
            assert!((ball.dir().length() - 1.0).abs() < 1e-5);
            assert_eq!(ball.dir().z, 0.0);

            serve(&mut ball, Player::Two, &config, &mut rng);
            assert!(ball.dir().x > 0.0, "Serve toward the right paddle");
        }
    }

    #[test]
    fn test_serve_without_spread_is_straight() {
        let config = TopologyConfig {
            serve_max_angle: 0.0,
            ..TopologyConfig::new()
        };
        let mut ball = Ball::new(Vec3::ZERO, Vec3::Y, 0.03, 0.04);
        serve(&mut ball, Player::Two, &config, &mut GameRng::default());
        assert_eq!(ball.dir(), Vec3::X);
    }

    #[test]
    fn test_check_winner() {
        let config = TopologyConfig::new();
        let mut state = GameState::new(&config);
        state.score.set(9, 3);
        assert_eq!(check_winner(&state, &config), None);
        state.score.increment(Player::One);
        assert_eq!(check_winner(&state, &config), Some(Player::One));
    }
}
