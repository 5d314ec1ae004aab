//! Per-frame driver
//!
//! Owns the game state and every collaborator. The host calls [`FrameDriver::tick`]
//! once per display refresh and forwards channel and keyboard events between
//! ticks; each event is applied to completion before the next tick reads state.

use game_core::{step, systems::check_winner, Events, GameRng, GameState, Player};

use crate::config::{ClientConfig, SimulationMode};
use crate::fsm::{FrameAction, FrameFsm, FrameState};
use crate::input::{paddle_commands, InputState, KeyBindings};
use crate::network::{Applied, Channel, GameOutcome, NetError, NetworkSync, PlayerRole};
use crate::scene::{present, SceneRenderer, ScoreDisplay};

/// Whether the host should request another frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameControl {
    Continue,
    Stop,
}

pub struct FrameDriver<C: Channel, R: SceneRenderer, D: ScoreDisplay> {
    config: ClientConfig,
    bindings: KeyBindings,
    state: GameState,
    input: InputState,
    net: NetworkSync<C>,
    renderer: R,
    display: D,
    fsm: FrameFsm,
    resume_at_ms: Option<f64>,
    events: Events,
    rng: GameRng,
    winner: Option<Player>,
}

impl<C: Channel, R: SceneRenderer, D: ScoreDisplay> FrameDriver<C, R, D> {
    pub fn new(config: ClientConfig, channel: C, renderer: R, display: D, seed: u64) -> Self {
        let mut rng = GameRng::new(seed);
        let state = match config.mode {
            SimulationMode::Authoritative => GameState::with_serve(&config.topology, &mut rng),
            SimulationMode::Mirrored => GameState::new(&config.topology),
        };
        let net = NetworkSync::new(channel, config.mode == SimulationMode::Mirrored);

        let mut driver = Self {
            bindings: config.bindings(),
            config,
            state,
            input: InputState::new(),
            net,
            renderer,
            display,
            fsm: FrameFsm::new(),
            resume_at_ms: None,
            events: Events::new(),
            rng,
            winner: None,
        };
        if let Some(player) = driver.config.local_role {
            if driver.net.assign_role(player) {
                driver.renderer.orient_camera(player);
            }
        }
        log::info!("Frame driver ready in {:?} mode", driver.config.mode);
        driver
    }

    pub fn mode(&self) -> SimulationMode {
        self.config.mode
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn frame_state(&self) -> FrameState {
        self.fsm.state()
    }

    pub fn role(&self) -> PlayerRole {
        self.net.role()
    }

    /// Winner of a locally decided match
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// Game-over report from the remote side
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.net.outcome()
    }

    pub fn channel(&self) -> &C {
        self.net.channel()
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn key_down(&mut self, code: &str) -> bool {
        self.input.handle_key_down(code)
    }

    pub fn key_up(&mut self, code: &str) -> bool {
        self.input.handle_key_up(code)
    }

    /// Release every held key
    pub fn clear_input(&mut self) {
        self.input.clear();
    }

    /// Apply one inbound frame from the channel
    pub fn handle_message(&mut self, text: &str) -> Result<Applied, NetError> {
        let applied = self.net.handle_text(text, &mut self.state).map_err(|e| {
            log::warn!("Dropping inbound message: {}", e);
            e
        })?;

        match applied {
            Applied::RoleAssigned(player) => self.renderer.orient_camera(player),
            Applied::GameOver(_) | Applied::Disconnected => {
                self.fsm.transition(FrameAction::ChannelClosed);
            }
            Applied::Positions | Applied::Scores | Applied::Ignored => {}
        }
        Ok(applied)
    }

    /// The transport closed. An unrequested close ends the match in either mode.
    pub fn channel_closed(&mut self) {
        if self.net.on_closed() {
            self.fsm.transition(FrameAction::ChannelClosed);
        }
    }

    /// One display refresh. `now_ms` is a monotonic timestamp.
    pub fn tick(&mut self, now_ms: f64) -> FrameControl {
        if self.fsm.is_ended() {
            return self.ended_control();
        }

        match self.config.mode {
            SimulationMode::Authoritative => self.tick_authoritative(now_ms),
            SimulationMode::Mirrored => self.tick_mirrored(),
        }

        present(&self.state, &mut self.renderer, &mut self.display);

        if self.fsm.is_ended() {
            self.ended_control()
        } else {
            FrameControl::Continue
        }
    }

    fn tick_authoritative(&mut self, now_ms: f64) {
        if let Some(winner) = check_winner(&self.state, &self.config.topology) {
            self.finish(winner);
            return;
        }

        if self.fsm.is_paused() {
            match self.resume_at_ms {
                Some(resume_at) if now_ms < resume_at => return,
                _ => {
                    self.fsm.transition(FrameAction::ResumeDue);
                    self.resume_at_ms = None;
                }
            }
        }

        self.send_input();

        let commands = match self.net.role().player() {
            Some(player) => paddle_commands(&self.input, &self.bindings, player),
            None => Vec::new(),
        };
        step(
            &mut self.state,
            &commands,
            &self.config.topology,
            &mut self.events,
            &mut self.rng,
        );

        if self.events.any_scored() {
            if let Some(winner) = check_winner(&self.state, &self.config.topology) {
                self.finish(winner);
            } else {
                self.fsm.transition(FrameAction::Scored);
                self.resume_at_ms = Some(now_ms + self.config.score_pause_ms);
            }
        }
    }

    fn tick_mirrored(&mut self) {
        if !self.net.is_open() {
            self.fsm.transition(FrameAction::ChannelClosed);
            return;
        }
        self.send_input();
    }

    fn send_input(&mut self) {
        if let Err(e) = self.net.send_input(&self.input, &self.bindings.primary) {
            log::warn!("Failed to send input: {}", e);
        }
    }

    fn finish(&mut self, winner: Player) {
        if self.fsm.transition(FrameAction::MatchWon).success {
            self.winner = Some(winner);
            log::info!(
                "Player {} wins {}-{}",
                winner.number(),
                self.state.score.player_1,
                self.state.score.player_2
            );
        }
    }

    fn ended_control(&self) -> FrameControl {
        if self.config.keep_alive_after_end {
            FrameControl::Continue
        } else {
            FrameControl::Stop
        }
    }
}
