use crate::geometry::box_reaches_plane;
use crate::{GameState, PaddleCommand, PaddleDir, TopologyConfig};

/// Apply one paddle step along the paddle axis.
///
/// The step is refused when the paddle box, rebuilt from its live center,
/// already reaches the boundary it would move toward. Returns whether the
/// paddle moved.
pub fn move_paddle(state: &mut GameState, command: PaddleCommand, config: &TopologyConfig) -> bool {
    let paddle = state.paddle_mut(command.player);
    let boundary = match command.dir {
        PaddleDir::Positive => &config.top,
        PaddleDir::Negative => &config.bottom,
    };

    if box_reaches_plane(&paddle.bounds(), boundary) {
        return false;
    }

    paddle.center += config.paddle_axis * (command.dir.sign() * config.paddle_step);
    true
}

/// Apply every paddle command for this frame, in order
pub fn move_paddles(state: &mut GameState, commands: &[PaddleCommand], config: &TopologyConfig) {
    for command in commands {
        move_paddle(state, *command, config);
    }
}

/// Move ball one frame along its heading
pub fn move_ball(state: &mut GameState) {
    state.ball.advance();
}
