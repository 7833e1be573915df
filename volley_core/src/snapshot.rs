use serde::Serialize;

use crate::{Aabb, Match, MatchState, Player, Score, SimError};

/// Everything a renderer needs for one frame, copied out of the match
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub tick: u64,
    pub ball: Aabb,
    pub paddles: [Aabb; 2],
    pub net: Aabb,
    pub score: Score,
    pub state: MatchState,
    pub serving: Player,
    pub win_text: Option<String>,
}

impl Snapshot {
    pub fn capture(game: &Match) -> Self {
        let world = &game.world;
        Self {
            tick: game.time.tick,
            ball: world.ball.body.aabb(),
            paddles: [world.paddles[0].body.aabb(), world.paddles[1].body.aabb()],
            net: world.net.rect(),
            score: game.score,
            state: game.state,
            serving: game.serving,
            win_text: game.win_text.clone(),
        }
    }

    pub fn to_json(&self) -> Result<String, SimError> {
        Ok(serde_json::to_string(self)?)
    }
}
