//! Pong client
//!
//! Keyboard capture, JSON state sync and the per-frame driver. Physics lives in
//! `game_core`; the browser binding is compiled for `wasm32` only.

pub mod config;
pub mod driver;
pub mod fsm;
pub mod input;
pub mod network;
pub mod scene;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use config::{ClientConfig, SimulationMode};
pub use driver::{FrameControl, FrameDriver};
pub use fsm::{FrameAction, FrameFsm, FrameState};
pub use input::{InputState, Key, KeyBindings};
pub use network::{Applied, Channel, GameOutcome, NetError, NetworkSync, PlayerRole};
pub use scene::{score_text, SceneObject, SceneRenderer, ScoreDisplay};
