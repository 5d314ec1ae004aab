//! Network protocol for the Pong client
//!
//! JSON objects discriminated by a `type` field, one message per channel frame.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProtoError {
    #[error("malformed message: {0}")]
    Json(#[from] serde_json::Error),
    #[error("non-finite coordinate in `{0}`")]
    NonFinite(&'static str),
}

/// Why a match ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameOverDetail {
    /// A player reached the winning score
    GameOver,
    /// The opponent left mid-match
    GameOverDisconnected,
}

// ============================================================================
// Server to client
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    /// Role assignment: 1 or 2
    PlayerNum { player_num: u8 },

    /// Authoritative positions, copied verbatim
    Positions {
        sphere_position: [f32; 3],
        p1_bar_position: [f32; 3],
        p2_bar_position: [f32; 3],
    },

    /// Authoritative scores
    Scores {
        player_1_score: u32,
        player_2_score: u32,
    },

    /// Match over; `winner` is a player number
    GameOverDisconnected { detail: GameOverDetail, winner: u8 },

    /// Peer is leaving; reply with `disconnect`
    DisconnectMessage,

    /// Any `type` this client does not know
    #[serde(other)]
    Unknown,
}

impl ServerMessage {
    /// Decode one inbound frame
    pub fn from_json(text: &str) -> Result<Self, ProtoError> {
        let msg: Self = serde_json::from_str(text)?;
        if let ServerMessage::Positions {
            sphere_position,
            p1_bar_position,
            p2_bar_position,
        } = &msg
        {
            for (name, v) in [
                ("sphere_position", sphere_position),
                ("p1_bar_position", p1_bar_position),
                ("p2_bar_position", p2_bar_position),
            ] {
                if v.iter().any(|c| !c.is_finite()) {
                    return Err(ProtoError::NonFinite(name));
                }
            }
        }
        Ok(msg)
    }

    pub fn to_json(&self) -> Result<String, ProtoError> {
        Ok(serde_json::to_string(self)?)
    }
}

// ============================================================================
// Client to server
// ============================================================================

/// Direction keycodes understood by the remote authority
pub const KEYCODE_NEGATIVE: &str = "ArrowLeft";
pub const KEYCODE_POSITIVE: &str = "ArrowRight";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    /// A movement key held this frame
    Keydown { keycode: String, player_num: u8 },

    /// Reply to `disconnect_message`
    Disconnect,
}

impl ClientMessage {
    pub fn to_json(&self) -> Result<String, ProtoError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(text: &str) -> Result<Self, ProtoError> {
        Ok(serde_json::from_str(text)?)
    }
}
