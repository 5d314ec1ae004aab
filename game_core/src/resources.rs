use crate::Player;

/// Match score. Local play only ever increments it; snapshots from a remote
/// authority overwrite it wholesale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub player_1: u32,
    pub player_2: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, player: Player) -> u32 {
        match player {
            Player::One => self.player_1,
            Player::Two => self.player_2,
        }
    }

    pub fn increment(&mut self, player: Player) {
        match player {
            Player::One => self.player_1 += 1,
            Player::Two => self.player_2 += 1,
        }
    }

    /// Overwrite both values from an authoritative snapshot
    pub fn set(&mut self, player_1: u32, player_2: u32) {
        self.player_1 = player_1;
        self.player_2 = player_2;
    }

    pub fn has_winner(&self, win_score: u32) -> Option<Player> {
        if self.player_1 >= win_score {
            Some(Player::One)
        } else if self.player_2 >= win_score {
            Some(Player::Two)
        } else {
            None
        }
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Events that occurred during this frame
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Events {
    pub ball_hit_wall: bool,
    pub ball_hit_paddle: bool,
    pub player_1_scored: bool,
    pub player_2_scored: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.ball_hit_wall = false;
        self.ball_hit_paddle = false;
        self.player_1_scored = false;
        self.player_2_scored = false;
    }

    pub fn record_score(&mut self, player: Player) {
        match player {
            Player::One => self.player_1_scored = true,
            Player::Two => self.player_2_scored = true,
        }
    }

    pub fn any_scored(&self) -> bool {
        self.player_1_scored || self.player_2_scored
    }
}
