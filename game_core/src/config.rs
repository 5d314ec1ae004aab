use glam::Vec3;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::geometry::Plane;
use crate::{Params, Player};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("plane `{0}` has a zero-length normal")]
    DegeneratePlane(&'static str),
    #[error("`{0}` must be a non-zero vector")]
    DegenerateVector(&'static str),
    #[error("`{0}` must be positive and finite")]
    NotPositive(&'static str),
    #[error("`{0}` must be finite")]
    NonFinite(&'static str),
    #[error("`{0}` must be finite and not negative")]
    Negative(&'static str),
    #[error("serve_max_angle must lie in [0, pi/2)")]
    ServeAngleOutOfRange,
    #[error("ball_speed_max is below ball_speed_initial")]
    SpeedRange,
    #[error("win score must be at least 1")]
    ZeroWinScore,
}

/// Playfield shape and physics tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TopologyConfig {
    pub top: Plane,
    pub bottom: Plane,
    /// Crossing it scores for player one
    pub right_goal: Plane,
    /// Crossing it scores for player two
    pub left_goal: Plane,

    /// Unit axis paddles slide along; positive movement heads toward `top`
    pub paddle_axis: Vec3,
    pub paddle_starts: [Vec3; 2],
    pub paddle_half_extents: Vec3,
    /// Outward offset added to the bounce vector, one per paddle
    pub paddle_normals: [Vec3; 2],
    pub paddle_step: f32,

    pub field_center: Vec3,
    pub ball_radius: f32,
    pub ball_speed_initial: f32,
    pub ball_speed_max: f32,
    pub ball_speed_increment: f32,
    /// Used at start-up and whenever a heading degenerates
    pub serve_dir: Vec3,
    pub serve_max_angle: f32,

    pub win_score: u32,
}

impl Default for TopologyConfig {
    fn default() -> Self {
        Self {
            top: Plane::new(Vec3::NEG_Y, Params::FIELD_HALF_HEIGHT),
            bottom: Plane::new(Vec3::Y, Params::FIELD_HALF_HEIGHT),
            right_goal: Plane::new(Vec3::NEG_X, Params::FIELD_HALF_WIDTH),
            left_goal: Plane::new(Vec3::X, Params::FIELD_HALF_WIDTH),
            paddle_axis: Vec3::Y,
            paddle_starts: [
                Vec3::new(-Params::PADDLE_OFFSET_X, 0.0, 0.0),
                Vec3::new(Params::PADDLE_OFFSET_X, 0.0, 0.0),
            ],
            paddle_half_extents: Vec3::new(
                Params::PADDLE_HALF_WIDTH,
                Params::PADDLE_HALF_HEIGHT,
                Params::PADDLE_HALF_DEPTH,
            ),
            paddle_normals: [Vec3::X, Vec3::NEG_X],
            paddle_step: Params::PADDLE_STEP,
            field_center: Vec3::ZERO,
            ball_radius: Params::BALL_RADIUS,
            ball_speed_initial: Params::BALL_SPEED_INITIAL,
            ball_speed_max: Params::BALL_SPEED_MAX,
            ball_speed_increment: Params::BALL_SPEED_INCREMENT,
            serve_dir: Vec3::X,
            serve_max_angle: Params::SERVE_MAX_ANGLE,
            win_score: Params::WIN_SCORE,
        }
    }
}

impl TopologyConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON document; absent keys keep their defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validated()
    }

    /// Check invariants and bring normals and axes to unit length
    pub fn validated(mut self) -> Result<Self, ConfigError> {
        for (name, plane) in [
            ("top", &self.top),
            ("bottom", &self.bottom),
            ("right_goal", &self.right_goal),
            ("left_goal", &self.left_goal),
        ] {
            if !plane.constant.is_finite() {
                return Err(ConfigError::NonFinite(name));
            }
        }
        self.top = self.top.normalized().ok_or(ConfigError::DegeneratePlane("top"))?;
        self.bottom = self
            .bottom
            .normalized()
            .ok_or(ConfigError::DegeneratePlane("bottom"))?;
        self.right_goal = self
            .right_goal
            .normalized()
            .ok_or(ConfigError::DegeneratePlane("right_goal"))?;
        self.left_goal = self
            .left_goal
            .normalized()
            .ok_or(ConfigError::DegeneratePlane("left_goal"))?;
        self.paddle_axis = self
            .paddle_axis
            .try_normalize()
            .ok_or(ConfigError::DegenerateVector("paddle_axis"))?;
        self.serve_dir = self
            .serve_dir
            .try_normalize()
            .ok_or(ConfigError::DegenerateVector("serve_dir"))?;

        for (name, value) in [
            ("ball_radius", self.ball_radius),
            ("ball_speed_initial", self.ball_speed_initial),
            ("ball_speed_max", self.ball_speed_max),
            ("paddle_step", self.paddle_step),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::NotPositive(name));
            }
        }
        if self.ball_speed_max < self.ball_speed_initial {
            return Err(ConfigError::SpeedRange);
        }
        if !(self.ball_speed_increment.is_finite() && self.ball_speed_increment >= 0.0) {
            return Err(ConfigError::Negative("ball_speed_increment"));
        }
        if !(0.0..std::f32::consts::FRAC_PI_2).contains(&self.serve_max_angle) {
            return Err(ConfigError::ServeAngleOutOfRange);
        }

        for (name, v) in [
            ("field_center", self.field_center),
            ("paddle_starts", self.paddle_starts[0]),
            ("paddle_starts", self.paddle_starts[1]),
            ("paddle_normals", self.paddle_normals[0]),
            ("paddle_normals", self.paddle_normals[1]),
        ] {
            if !v.is_finite() {
                return Err(ConfigError::NonFinite(name));
            }
        }
        let half = self.paddle_half_extents;
        if !(half.is_finite() && half.cmpge(Vec3::ZERO).all()) {
            return Err(ConfigError::Negative("paddle_half_extents"));
        }

        if self.win_score == 0 {
            return Err(ConfigError::ZeroWinScore);
        }
        Ok(self)
    }

    pub fn paddle_start(&self, player: Player) -> Vec3 {
        self.paddle_starts[player.index()]
    }

    pub fn paddle_normal(&self, player: Player) -> Vec3 {
        self.paddle_normals[player.index()]
    }

    /// Score line the given player defends
    pub fn goal_of(&self, player: Player) -> &Plane {
        match player {
            Player::One => &self.left_goal,
            Player::Two => &self.right_goal,
        }
    }
}
