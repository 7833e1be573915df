use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::Player;

/// Time resource for tracking simulation time
#[derive(Debug, Clone, Copy, Default)]
pub struct Time {
    pub dt: f32,   // Delta time of the last tick
    pub now: f32,  // Total elapsed time
    pub tick: u64, // Ticks processed since the match was created
}

impl Time {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Game score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub player1: u8,
    pub player2: u8,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, player: Player) {
        match player {
            Player::One => self.player1 += 1,
            Player::Two => self.player2 += 1,
        }
    }

    pub fn get(&self, player: Player) -> u8 {
        match player {
            Player::One => self.player1,
            Player::Two => self.player2,
        }
    }

    pub fn has_winner(&self, win_score: u8) -> Option<Player> {
        if self.player1 >= win_score {
            Some(Player::One)
        } else if self.player2 >= win_score {
            Some(Player::Two)
        } else {
            None
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Lifecycle of a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchState {
    /// Ball parked above the server, waiting for `serve`
    Serving,
    /// Ball in flight
    InPlay,
    /// A player reached the win score; ticks are ignored until replay
    GameOver { winner: Player },
}

/// Events that occurred during a tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Events {
    pub player1_scored: bool,
    pub player2_scored: bool,
    pub ball_hit_paddle: bool,
    pub ball_hit_net: bool,
    pub ball_hit_wall: bool,
    pub served: bool,
    pub game_over: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn scored(&mut self, player: Player) {
        match player {
            Player::One => self.player1_scored = true,
            Player::Two => self.player2_scored = true,
        }
    }

    /// Fold a later tick's events into this frame's
    pub fn merge(&mut self, other: &Events) {
        self.player1_scored |= other.player1_scored;
        self.player2_scored |= other.player2_scored;
        self.ball_hit_paddle |= other.ball_hit_paddle;
        self.ball_hit_net |= other.ball_hit_net;
        self.ball_hit_wall |= other.ball_hit_wall;
        self.served |= other.served;
        self.game_over |= other.game_over;
    }
}

/// Logical movement keys, independent of any window system key codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Key {
    P1Jump,
    P1Left,
    P1Right,
    P2Jump,
    P2Left,
    P2Right,
}

/// What a held key asks of its paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Jump,
    Left,
    Right,
}

impl Key {
    pub fn owner(self) -> Player {
        match self {
            Key::P1Jump | Key::P1Left | Key::P1Right => Player::One,
            Key::P2Jump | Key::P2Left | Key::P2Right => Player::Two,
        }
    }

    pub fn action(self) -> Action {
        match self {
            Key::P1Jump | Key::P2Jump => Action::Jump,
            Key::P1Left | Key::P2Left => Action::Left,
            Key::P1Right | Key::P2Right => Action::Right,
        }
    }
}

/// Currently held keys; written by key events, read once per tick
#[derive(Debug, Clone, Default)]
pub struct InputState {
    held: BTreeSet<Key>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down(&mut self, key: Key) {
        self.held.insert(key);
    }

    pub fn key_up(&mut self, key: Key) {
        self.held.remove(&key);
    }

    /// Held keys in a stable order
    pub fn held(&self) -> impl Iterator<Item = Key> + '_ {
        self.held.iter().copied()
    }
}
