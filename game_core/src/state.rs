use glam::Vec3;

use crate::{Ball, GameRng, Paddle, Player, Score, TopologyConfig};

/// Ball, both paddles and the score: everything one match mutates
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub ball: Ball,
    pub paddles: [Paddle; 2],
    pub score: Score,
}

impl GameState {
    /// Fresh match: ball centered heading along the default serve, paddles home
    pub fn new(config: &TopologyConfig) -> Self {
        Self {
            ball: Ball::new(
                config.field_center,
                config.serve_dir,
                config.ball_speed_initial,
                config.ball_radius,
            ),
            paddles: [
                Paddle::new(
                    Player::One,
                    config.paddle_start(Player::One),
                    config.paddle_half_extents,
                ),
                Paddle::new(
                    Player::Two,
                    config.paddle_start(Player::Two),
                    config.paddle_half_extents,
                ),
            ],
            score: Score::new(),
        }
    }

    /// Fresh match with a randomized opening serve
    pub fn with_serve(config: &TopologyConfig, rng: &mut GameRng) -> Self {
        use rand::Rng;
        let mut state = Self::new(config);
        let toward = if rng.0.gen_bool(0.5) {
            Player::One
        } else {
            Player::Two
        };
        crate::systems::serve(&mut state.ball, toward, config, rng);
        state
    }

    pub fn paddle(&self, player: Player) -> &Paddle {
        &self.paddles[player.index()]
    }

    pub fn paddle_mut(&mut self, player: Player) -> &mut Paddle {
        &mut self.paddles[player.index()]
    }

    /// Overwrite positions from a remote snapshot, verbatim
    pub fn apply_positions(&mut self, ball: Vec3, paddle_1: Vec3, paddle_2: Vec3) {
        self.ball.pos = ball;
        self.paddles[0].center = paddle_1;
        self.paddles[1].center = paddle_2;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_layout() {
        let config = TopologyConfig::new();
        let state = GameState::new(&config);
        assert_eq!(state.ball.pos, Vec3::ZERO);
        assert_eq!(state.paddle(Player::One).center, Vec3::new(-2.5, 0.0, 0.0));
        assert_eq!(state.paddle(Player::Two).center, Vec3::new(2.5, 0.0, 0.0));
        assert_eq!(state.score, Score::new());
    }

    #[test]
    fn test_with_serve_heads_toward_a_paddle() {
        let config = TopologyConfig::new();
        let mut rng = GameRng::new(7);
        let state = GameState::with_serve(&config, &mut rng);
        let dir = state.ball.dir();
        assert!((dir.length() - 1.0).abs() < 1e-5);
        assert!(dir.x.abs() >= (config.serve_max_angle).cos() - 1e-5);
    }

    #[test]
    fn test_apply_positions_is_verbatim() {
        let mut state = GameState::new(&TopologyConfig::new());
        state.apply_positions(
            Vec3::new(0.5, 0.1, 0.0),
            Vec3::new(-2.5, 0.3, 0.0),
            Vec3::new(2.5, -0.2, 0.0),
        );
        assert_eq!(state.ball.pos, Vec3::new(0.5, 0.1, 0.0));
        assert_eq!(state.paddle(Player::One).center.y, 0.3);
        assert_eq!(state.paddle(Player::Two).center.y, -0.2);
    }
}
