use game_core::{ConfigError, Player, TopologyConfig};
use serde::{Deserialize, Serialize};

use crate::input::KeyBindings;

/// Who owns the physics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SimulationMode {
    /// Collisions and scoring run here; both paddles can be driven locally
    Authoritative,
    /// Positions and scores are copied from the remote authority
    Mirrored,
}

impl SimulationMode {
    /// Mode selected by the `authoritative` cargo feature
    pub const fn from_build() -> Self {
        if cfg!(feature = "authoritative") {
            SimulationMode::Authoritative
        } else {
            SimulationMode::Mirrored
        }
    }
}

impl Default for SimulationMode {
    fn default() -> Self {
        Self::from_build()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub mode: SimulationMode,
    pub topology: TopologyConfig,
    /// Mode default when absent
    pub bindings: Option<KeyBindings>,
    /// Freeze after each point in authoritative mode
    pub score_pause_ms: f64,
    /// Keep requesting frames once the match is over
    pub keep_alive_after_end: bool,
    /// Play without waiting for a `player_num` message
    pub local_role: Option<Player>,
    pub server_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::for_mode(SimulationMode::from_build())
    }
}

impl ClientConfig {
    pub fn for_mode(mode: SimulationMode) -> Self {
        Self {
            mode,
            topology: TopologyConfig::new(),
            bindings: None,
            score_pause_ms: 1500.0,
            keep_alive_after_end: false,
            local_role: None,
            server_url: "ws://localhost:8000/pong/".to_string(),
        }
    }

    /// Parse a JSON document; absent keys keep their defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let mut config: Self = serde_json::from_str(json)?;
        config.topology = config.topology.validated()?;
        Ok(config)
    }

    pub fn bindings(&self) -> KeyBindings {
        match (&self.bindings, self.mode) {
            (Some(bindings), _) => bindings.clone(),
            (None, SimulationMode::Authoritative) => KeyBindings::shared_keyboard(),
            (None, SimulationMode::Mirrored) => KeyBindings::networked(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::for_mode(SimulationMode::Mirrored);
        assert_eq!(config.score_pause_ms, 1500.0);
        assert_eq!(config.server_url, "ws://localhost:8000/pong/");
        assert_eq!(config.bindings(), KeyBindings::networked());
        assert!(!config.keep_alive_after_end);
    }

    #[test]
    fn test_mode_picks_bindings() {
        let config = ClientConfig::for_mode(SimulationMode::Authoritative);
        assert_eq!(config.bindings(), KeyBindings::shared_keyboard());
    }

    #[test]
    fn test_from_json_partial() {
        let config = ClientConfig::from_json(
            r#"{"mode": "authoritative", "local_role": "Two", "topology": {"win_score": 3}}"#,
        )
        .unwrap();
        assert_eq!(config.mode, SimulationMode::Authoritative);
        assert_eq!(config.local_role, Some(Player::Two));
        assert_eq!(config.topology.win_score, 3);
        assert_eq!(config.score_pause_ms, 1500.0, "Absent keys keep defaults");
        assert_eq!(config.bindings(), KeyBindings::shared_keyboard());
    }

    #[test]
    fn test_from_json_validates_topology() {
        let result = ClientConfig::from_json(r#"{"topology": {"win_score": 0}}"#);
        assert!(matches!(result, Err(ConfigError::ZeroWinScore)));

        let result = ClientConfig::from_json(
            r#"{"mode": "authoritative", "topology": {"serve_max_angle": 1e39}}"#,
        );
        assert!(
            matches!(result, Err(ConfigError::ServeAngleOutOfRange)),
            "An infinite serve angle must not reach the serve RNG"
        );
    }
}
