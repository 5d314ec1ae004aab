//! Network message handling
//!
//! Inbound frames are decoded once into [`ServerMessage`] and applied to the
//! [`GameState`] to completion before anything else reads it.

use game_core::{GameState, PaddleDir, Player};
use glam::Vec3;
use proto::{
    ClientMessage, GameOverDetail, ProtoError, ServerMessage, KEYCODE_NEGATIVE, KEYCODE_POSITIVE,
};
use thiserror::Error;

use crate::input::{wire_dir, AxisBinding, InputState};

#[derive(Debug, Error)]
pub enum NetError {
    #[error(transparent)]
    Proto(#[from] ProtoError),
    #[error("channel send failed: {0}")]
    Send(String),
    #[error("channel is closed")]
    Closed,
    #[error("player number {0} is not 1 or 2")]
    InvalidPlayer(u8),
}

/// Abstract connection to the peer or server
pub trait Channel {
    fn send_text(&self, text: &str) -> Result<(), NetError>;
    fn close(&self);
}

/// Which paddle this client controls. Assigned once per session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayerRole {
    #[default]
    Unassigned,
    Player1,
    Player2,
}

impl PlayerRole {
    pub fn player(self) -> Option<Player> {
        match self {
            PlayerRole::Unassigned => None,
            PlayerRole::Player1 => Some(Player::One),
            PlayerRole::Player2 => Some(Player::Two),
        }
    }
}

impl From<Player> for PlayerRole {
    fn from(player: Player) -> Self {
        match player {
            Player::One => PlayerRole::Player1,
            Player::Two => PlayerRole::Player2,
        }
    }
}

/// How the match ended, as reported by the remote side
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOutcome {
    pub winner: Option<Player>,
    pub detail: GameOverDetail,
}

/// Effect of one inbound message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    RoleAssigned(Player),
    Positions,
    Scores,
    GameOver(GameOutcome),
    Disconnected,
    Ignored,
}

/// Wire keycode for a direction along the paddle axis
pub fn keycode(dir: PaddleDir) -> &'static str {
    match dir {
        PaddleDir::Negative => KEYCODE_NEGATIVE,
        PaddleDir::Positive => KEYCODE_POSITIVE,
    }
}

pub struct NetworkSync<C: Channel> {
    channel: C,
    role: PlayerRole,
    open: bool,
    outcome: Option<GameOutcome>,
    // Off when the local simulation is the source of truth
    apply_snapshots: bool,
}

impl<C: Channel> NetworkSync<C> {
    pub fn new(channel: C, apply_snapshots: bool) -> Self {
        Self {
            channel,
            role: PlayerRole::Unassigned,
            open: true,
            outcome: None,
            apply_snapshots,
        }
    }

    pub fn role(&self) -> PlayerRole {
        self.role
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    pub fn channel(&self) -> &C {
        &self.channel
    }

    /// Set the role if none is set yet. Returns whether it was taken.
    pub fn assign_role(&mut self, player: Player) -> bool {
        if self.role != PlayerRole::Unassigned {
            log::warn!(
                "Ignoring role {} - already {:?}",
                player.number(),
                self.role
            );
            return false;
        }
        self.role = player.into();
        log::info!("Assigned player {}", player.number());
        true
    }

    /// Send one `keydown` per held direction. Inert until a role arrives.
    pub fn send_input(&self, input: &InputState, binding: &AxisBinding) -> Result<usize, NetError> {
        let Some(player) = self.role.player() else {
            return Ok(0);
        };
        if !self.open {
            return Ok(0);
        }

        let mut sent = 0;
        for dir in binding.held(input) {
            let msg = ClientMessage::Keydown {
                keycode: keycode(wire_dir(player, dir)).to_string(),
                player_num: player.number(),
            };
            self.channel.send_text(&msg.to_json()?)?;
            sent += 1;
        }
        Ok(sent)
    }

    /// Decode and apply one inbound frame
    pub fn handle_text(&mut self, text: &str, state: &mut GameState) -> Result<Applied, NetError> {
        if !self.open {
            log::debug!("Channel closed, dropping message");
            return Ok(Applied::Ignored);
        }
        let msg = ServerMessage::from_json(text)?;
        self.handle_message(msg, state)
    }

    pub fn handle_message(
        &mut self,
        msg: ServerMessage,
        state: &mut GameState,
    ) -> Result<Applied, NetError> {
        if !self.open {
            return Ok(Applied::Ignored);
        }

        match msg {
            ServerMessage::PlayerNum { player_num } => {
                let player =
                    Player::from_number(player_num).ok_or(NetError::InvalidPlayer(player_num))?;
                if self.assign_role(player) {
                    Ok(Applied::RoleAssigned(player))
                } else {
                    Ok(Applied::Ignored)
                }
            }
            ServerMessage::Positions {
                sphere_position,
                p1_bar_position,
                p2_bar_position,
            } => {
                if !self.apply_snapshots {
                    return Ok(Applied::Ignored);
                }
                state.apply_positions(
                    Vec3::from_array(sphere_position),
                    Vec3::from_array(p1_bar_position),
                    Vec3::from_array(p2_bar_position),
                );
                Ok(Applied::Positions)
            }
            ServerMessage::Scores {
                player_1_score,
                player_2_score,
            } => {
                if !self.apply_snapshots {
                    return Ok(Applied::Ignored);
                }
                state.score.set(player_1_score, player_2_score);
                Ok(Applied::Scores)
            }
            ServerMessage::GameOverDisconnected { detail, winner } => {
                let outcome = GameOutcome {
                    winner: Player::from_number(winner),
                    detail,
                };
                log::info!("Game over: {:?}, winner {}", detail, winner);
                self.outcome = Some(outcome);
                self.shutdown();
                Ok(Applied::GameOver(outcome))
            }
            ServerMessage::DisconnectMessage => {
                if let Err(e) = ClientMessage::Disconnect
                    .to_json()
                    .map_err(NetError::from)
                    .and_then(|text| self.channel.send_text(&text))
                {
                    log::warn!("Failed to acknowledge disconnect: {}", e);
                }
                log::info!("Peer disconnected");
                self.shutdown();
                Ok(Applied::Disconnected)
            }
            ServerMessage::Unknown => {
                log::debug!("Ignoring unknown message type");
                Ok(Applied::Ignored)
            }
        }
    }

    /// The transport reported closure. Returns true when nothing on this
    /// side asked for it.
    pub fn on_closed(&mut self) -> bool {
        if !self.open {
            return false;
        }
        log::warn!("Channel closed unexpectedly");
        self.open = false;
        true
    }

    // Close exactly once
    fn shutdown(&mut self) {
        if self.open {
            self.open = false;
            self.channel.close();
        }
    }
}
