/// Game tuning parameters for the Pong playfield
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Playfield (client scene units)
    pub const FIELD_HALF_HEIGHT: f32 = 1.5;
    pub const FIELD_HALF_WIDTH: f32 = 3.0;

    // Paddle
    pub const PADDLE_OFFSET_X: f32 = 2.5;
    pub const PADDLE_HALF_WIDTH: f32 = 0.04;
    pub const PADDLE_HALF_HEIGHT: f32 = 0.35;
    pub const PADDLE_HALF_DEPTH: f32 = 0.05;
    pub const PADDLE_STEP: f32 = 0.05; // per frame while a key is held

    // Ball
    pub const BALL_RADIUS: f32 = 0.04;
    pub const BALL_SPEED_INITIAL: f32 = 0.03; // per frame
    pub const BALL_SPEED_MAX: f32 = 0.06;
    pub const BALL_SPEED_INCREMENT: f32 = 0.005; // added on paddle hit

    // Serve spread either side of the x axis, in radians (~45°)
    pub const SERVE_MAX_ANGLE: f32 = 0.785;

    // Score
    pub const WIN_SCORE: u32 = 10;
}
