//! Frame State Machine
//!
//! Tracks whether the frame loop is playing, paused after a point, or done.

/// Frame loop states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameState {
    Running,
    PausedAfterScore,
    Ended,
}

/// Actions that trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameAction {
    Scored,
    ResumeDue,
    MatchWon,
    ChannelClosed,
}

/// Result of a state transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionResult {
    pub success: bool,
    pub from_state: FrameState,
    pub to_state: FrameState,
    pub action: FrameAction,
}

#[derive(Debug)]
pub struct FrameFsm {
    state: FrameState,
}

impl FrameFsm {
    pub fn new() -> Self {
        Self {
            state: FrameState::Running,
        }
    }

    pub fn state(&self) -> FrameState {
        self.state
    }

    pub fn can_transition(&self, action: FrameAction) -> bool {
        self.get_next_state(action).is_some()
    }

    /// Attempt a transition
    pub fn transition(&mut self, action: FrameAction) -> TransitionResult {
        let from_state = self.state;

        if let Some(next_state) = self.get_next_state(action) {
            self.state = next_state;
            log::debug!("{:?} --{:?}--> {:?}", from_state, action, next_state);
            TransitionResult {
                success: true,
                from_state,
                to_state: next_state,
                action,
            }
        } else {
            TransitionResult {
                success: false,
                from_state,
                to_state: from_state,
                action,
            }
        }
    }

    fn get_next_state(&self, action: FrameAction) -> Option<FrameState> {
        match (self.state, action) {
            (FrameState::Running, FrameAction::Scored) => Some(FrameState::PausedAfterScore),
            (FrameState::PausedAfterScore, FrameAction::ResumeDue) => Some(FrameState::Running),

            (
                FrameState::Running | FrameState::PausedAfterScore,
                FrameAction::MatchWon | FrameAction::ChannelClosed,
            ) => Some(FrameState::Ended),

            // Ended is terminal
            _ => None,
        }
    }

    pub fn is_paused(&self) -> bool {
        self.state == FrameState::PausedAfterScore
    }

    pub fn is_ended(&self) -> bool {
        self.state == FrameState::Ended
    }
}

impl Default for FrameFsm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let fsm = FrameFsm::new();
        assert_eq!(fsm.state(), FrameState::Running);
    }

    #[test]
    fn test_score_pause_cycle() {
        let mut fsm = FrameFsm::new();
        assert!(fsm.transition(FrameAction::Scored).success);
        assert!(fsm.is_paused());
        assert!(!fsm.can_transition(FrameAction::Scored), "No double pause");
        assert!(fsm.transition(FrameAction::ResumeDue).success);
        assert_eq!(fsm.state(), FrameState::Running);
    }

    #[test]
    fn test_invalid_transition() {
        let mut fsm = FrameFsm::new();
        let result = fsm.transition(FrameAction::ResumeDue);
        assert!(!result.success);
        assert_eq!(result.to_state, FrameState::Running);
    }

    #[test]
    fn test_ended_is_terminal() {
        let mut fsm = FrameFsm::new();
        fsm.transition(FrameAction::Scored);
        assert!(fsm.transition(FrameAction::MatchWon).success);
        assert!(fsm.is_ended());

        for action in [
            FrameAction::Scored,
            FrameAction::ResumeDue,
            FrameAction::MatchWon,
            FrameAction::ChannelClosed,
        ] {
            assert!(!fsm.transition(action).success, "{action:?} left Ended");
        }
    }

    #[test]
    fn test_channel_close_ends() {
        let mut fsm = FrameFsm::new();
        let result = fsm.transition(FrameAction::ChannelClosed);
        assert_eq!(result.from_state, FrameState::Running);
        assert_eq!(result.to_state, FrameState::Ended);
    }
}
