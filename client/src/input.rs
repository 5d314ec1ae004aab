//! Keyboard input handling
//!
//! Only the instantaneous held state matters: a press and release that both
//! land between two frames is never seen.

use std::collections::HashMap;

use game_core::{PaddleCommand, PaddleDir, Player};
use serde::{Deserialize, Serialize};

/// Platform-independent key identifier (DOM `KeyboardEvent.code` names)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    KeyW,
    KeyA,
    KeyS,
    KeyD,
}

impl Key {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "ArrowUp" => Some(Key::ArrowUp),
            "ArrowDown" => Some(Key::ArrowDown),
            "ArrowLeft" => Some(Key::ArrowLeft),
            "ArrowRight" => Some(Key::ArrowRight),
            "KeyW" => Some(Key::KeyW),
            "KeyA" => Some(Key::KeyA),
            "KeyS" => Some(Key::KeyS),
            "KeyD" => Some(Key::KeyD),
            _ => None,
        }
    }
}

/// Which movement keys are down right now
#[derive(Debug, Clone, Default)]
pub struct InputState {
    held: HashMap<Key, bool>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle key down event. Returns false for keys the game ignores.
    pub fn handle_key_down(&mut self, code: &str) -> bool {
        match Key::from_code(code) {
            Some(key) => {
                self.held.insert(key, true);
                true
            }
            None => false,
        }
    }

    /// Handle key up event
    pub fn handle_key_up(&mut self, code: &str) -> bool {
        match Key::from_code(code) {
            Some(key) => {
                self.held.insert(key, false);
                true
            }
            None => false,
        }
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held.get(&key).copied().unwrap_or(false)
    }

    /// Drop all held keys, e.g. when the window loses focus
    pub fn clear(&mut self) {
        self.held.clear();
    }
}

/// Keys driving one paddle in each direction along its axis
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisBinding {
    pub negative: Vec<Key>,
    pub positive: Vec<Key>,
}

impl AxisBinding {
    /// Directions with at least one key held, negative first
    pub fn held(&self, input: &InputState) -> Vec<PaddleDir> {
        let mut dirs = Vec::with_capacity(2);
        if self.negative.iter().any(|k| input.is_held(*k)) {
            dirs.push(PaddleDir::Negative);
        }
        if self.positive.iter().any(|k| input.is_held(*k)) {
            dirs.push(PaddleDir::Positive);
        }
        dirs
    }
}

/// `primary` drives the local player's paddle. `secondary` drives the
/// opponent's paddle when both sides are simulated on this machine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBindings {
    pub primary: AxisBinding,
    pub secondary: Option<AxisBinding>,
}

impl KeyBindings {
    /// One player per machine, camera behind the player's own paddle
    pub fn networked() -> Self {
        Self {
            primary: AxisBinding {
                negative: vec![Key::ArrowLeft, Key::KeyA],
                positive: vec![Key::ArrowRight, Key::KeyD],
            },
            secondary: None,
        }
    }

    /// Both players at one keyboard, side-on camera
    pub fn shared_keyboard() -> Self {
        Self {
            primary: AxisBinding {
                negative: vec![Key::ArrowDown],
                positive: vec![Key::ArrowUp],
            },
            secondary: Some(AxisBinding {
                negative: vec![Key::KeyS],
                positive: vec![Key::KeyW],
            }),
        }
    }
}

/// Direction as the remote authority sees it. Player two faces the field
/// from the opposite end, so their left and right are swapped.
pub fn wire_dir(role: Player, dir: PaddleDir) -> PaddleDir {
    match role {
        Player::One => dir,
        Player::Two => dir.flipped(),
    }
}

/// Paddle commands for local simulation. `role` owns the primary binding.
pub fn paddle_commands(
    input: &InputState,
    bindings: &KeyBindings,
    role: Player,
) -> Vec<PaddleCommand> {
    let mut commands: Vec<PaddleCommand> = bindings
        .primary
        .held(input)
        .into_iter()
        .map(|dir| PaddleCommand { player: role, dir })
        .collect();

    if let Some(secondary) = &bindings.secondary {
        commands.extend(secondary.held(input).into_iter().map(|dir| PaddleCommand {
            player: role.opponent(),
            dir,
        }));
    }
    commands
}
