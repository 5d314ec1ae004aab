//! Rendering and score display seams

use game_core::{GameState, Player};
use glam::Vec3;

/// Objects the renderer draws
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SceneObject {
    Ball,
    Paddle(Player),
}

/// Receives object positions once per frame
pub trait SceneRenderer {
    fn set_position(&mut self, object: SceneObject, pos: Vec3);

    /// Called once when the local role becomes known
    fn orient_camera(&mut self, _viewer: Player) {}
}

pub trait ScoreDisplay {
    fn set_score_text(&mut self, player: Player, text: &str);
}

/// "P1 Score : 3"
pub fn score_text(player: Player, score: u32) -> String {
    format!("P{} Score : {}", player.number(), score)
}

/// Push every object position and both score labels
pub fn present<R: SceneRenderer, D: ScoreDisplay>(state: &GameState, renderer: &mut R, display: &mut D) {
    renderer.set_position(SceneObject::Ball, state.ball.pos);
    for paddle in &state.paddles {
        renderer.set_position(SceneObject::Paddle(paddle.owner), paddle.center);
    }
    for player in [Player::One, Player::Two] {
        display.set_score_text(player, &score_text(player, state.score.get(player)));
    }
}
