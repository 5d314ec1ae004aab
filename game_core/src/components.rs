use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::geometry::{normalize_or, Aabb, Sphere};

/// One of the two players. Player one defends the left score line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// Wire number: 1 or 2
    pub fn number(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }

    pub fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(Player::One),
            2 => Some(Player::Two),
            _ => None,
        }
    }

    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }
}

/// Paddle - a player's bat, moving along a single axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub owner: Player,
    pub center: Vec3,
    pub half_extents: Vec3,
}

impl Paddle {
    pub fn new(owner: Player, center: Vec3, half_extents: Vec3) -> Self {
        Self {
            owner,
            center,
            half_extents,
        }
    }

    /// Bounding box around the live center
    pub fn bounds(&self) -> Aabb {
        Aabb::from_center_half_extents(self.center, self.half_extents)
    }
}

/// Ball - position, unit direction and per-frame speed
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec3,
    dir: Vec3,
    pub speed: f32,
    pub radius: f32,
}

impl Ball {
    pub fn new(pos: Vec3, dir: Vec3, speed: f32, radius: f32) -> Self {
        Self {
            pos,
            dir: normalize_or(dir, Vec3::X),
            speed,
            radius,
        }
    }

    pub fn dir(&self) -> Vec3 {
        self.dir
    }

    /// Set a new heading, re-normalized. A degenerate vector selects `fallback`.
    pub fn set_dir(&mut self, dir: Vec3, fallback: Vec3) {
        self.dir = normalize_or(dir, normalize_or(fallback, Vec3::X));
    }

    /// Move one frame along the current heading
    pub fn advance(&mut self) {
        self.pos += self.dir * self.speed;
    }

    pub fn bounds(&self) -> Sphere {
        Sphere::new(self.pos, self.radius)
    }

    /// Back to the field center, heading `dir` at `speed`
    pub fn reset(&mut self, center: Vec3, dir: Vec3, speed: f32, fallback: Vec3) {
        self.pos = center;
        self.speed = speed;
        self.set_dir(dir, fallback);
    }
}

/// Movement request for a paddle along its axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaddleDir {
    Negative,
    Positive,
}

impl PaddleDir {
    pub fn sign(self) -> f32 {
        match self {
            PaddleDir::Negative => -1.0,
            PaddleDir::Positive => 1.0,
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            PaddleDir::Negative => PaddleDir::Positive,
            PaddleDir::Positive => PaddleDir::Negative,
        }
    }
}

/// A paddle movement for this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaddleCommand {
    pub player: Player,
    pub dir: PaddleDir,
}
