//! Match lifecycle
//!
//! Owns the world and drives it one fixed tick at a time. The host feeds in
//! key events, elapsed time and court resizes, and reads back a snapshot.

use crate::systems::serve_ball;
use crate::{
    step, step_serving, Config, Events, InputState, Key, MatchState, Params, Player, Score,
    SimError, Snapshot, StepOutcome, Time, World,
};

pub struct Match {
    pub config: Config,
    pub world: World,
    pub score: Score,
    pub serving: Player, // Who serves next
    pub state: MatchState,
    pub input: InputState,
    pub time: Time,
    pub events: Events, // Events of the last tick
    pub win_text: Option<String>,
    accumulator: f32, // Leftover time not yet consumed by whole ticks
}

impl Match {
    /// New match waiting for player 1 to serve
    pub fn new(config: Config) -> Result<Self, SimError> {
        let world = World::new(&config)?;
        let mut game = Self {
            config,
            world,
            score: Score::new(),
            serving: Player::One,
            state: MatchState::Serving,
            input: InputState::new(),
            time: Time::new(),
            events: Events::new(),
            win_text: None,
            accumulator: 0.0,
        };
        game.park_ball();
        Ok(game)
    }

    pub fn state(&self) -> MatchState {
        self.state
    }

    pub fn winner(&self) -> Option<Player> {
        match self.state {
            MatchState::GameOver { winner } => Some(winner),
            _ => None,
        }
    }

    /// False once the match is over; ticks are ignored until replay
    pub fn is_running(&self) -> bool {
        !matches!(self.state, MatchState::GameOver { .. })
    }

    pub fn key_down(&mut self, key: Key) {
        self.input.key_down(key);
    }

    pub fn key_up(&mut self, key: Key) {
        self.input.key_up(key);
    }

    /// Launch the parked ball. Returns false unless the match was serving.
    pub fn serve(&mut self) -> bool {
        if self.state != MatchState::Serving {
            log::debug!("Ignoring serve in state {:?}", self.state);
            return false;
        }
        serve_ball(
            &mut self.world.ball,
            &self.world.paddles,
            &mut self.serving,
            &self.world.court,
            &self.config,
            &mut self.events,
        );
        self.state = MatchState::InPlay;
        true
    }

    /// Run exactly one tick covering `dt` seconds
    pub fn tick(&mut self, dt: f32) -> Result<Events, SimError> {
        check_dt(dt)?;
        if !self.is_running() {
            return Ok(Events::new());
        }

        self.events.clear();
        self.time.dt = dt;
        self.time.now += dt;
        self.time.tick += 1;

        match self.state {
            MatchState::Serving => {
                step_serving(&mut self.world, &self.config, self.serving, &self.input);
            }
            MatchState::InPlay => {
                let outcome = step(
                    &mut self.world,
                    &self.config,
                    &mut self.score,
                    &mut self.serving,
                    &self.input,
                    &mut self.events,
                );
                self.apply_outcome(outcome);
            }
            MatchState::GameOver { .. } => {}
        }

        Ok(self.events)
    }

    /// Consume wall-clock time in whole fixed ticks
    ///
    /// Time that does not fill a tick carries over to the next call. Returns
    /// the union of the events of every tick run.
    pub fn advance(&mut self, elapsed: f32) -> Result<Events, SimError> {
        check_dt(elapsed)?;
        let mut frame = Events::new();
        if !self.is_running() {
            return Ok(frame);
        }

        self.accumulator += elapsed.min(Params::MAX_DT);
        while self.accumulator >= Params::FIXED_DT {
            self.accumulator -= Params::FIXED_DT;
            frame.merge(&self.tick(Params::FIXED_DT)?);
            if !self.is_running() {
                self.accumulator = 0.0;
                break;
            }
        }
        Ok(frame)
    }

    /// Zero the score, clear the win text and park the ball with player 1
    ///
    /// Paddles are left where they are.
    pub fn reset(&mut self) {
        self.score.reset();
        self.win_text = None;
        self.serving = Player::One;
        self.state = MatchState::Serving;
        self.events.clear();
        self.accumulator = 0.0;
        self.park_ball();
        log::info!("Match reset");
    }

    /// Start a fresh match straight from the serve
    pub fn replay(&mut self) {
        self.reset();
        self.serve();
        log::info!("Replay started");
    }

    pub fn resize(&mut self, width: f32, height: f32) -> Result<(), SimError> {
        self.world.resize(width, height, &self.config)?;
        if self.state == MatchState::Serving {
            self.park_ball();
        }
        log::info!("Court resized to {}x{}", width, height);
        Ok(())
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(self)
    }

    fn apply_outcome(&mut self, outcome: StepOutcome) {
        match outcome {
            StepOutcome::Rally => {}
            StepOutcome::Point { .. } => {
                if !self.config.auto_serve {
                    self.state = MatchState::Serving;
                }
            }
            StepOutcome::Won { winner } => {
                self.state = MatchState::GameOver { winner };
                self.win_text = Some(format!("{} Wins!", winner.label()));
                log::info!(
                    "{} wins {} - {}",
                    winner.label(),
                    self.score.player1,
                    self.score.player2
                );
            }
        }
    }

    fn park_ball(&mut self) {
        let server = &self.world.paddles[self.serving.index()];
        self.world
            .ball
            .park_above(server, self.config.serve_gap, &self.world.court);
    }
}

fn check_dt(dt: f32) -> Result<(), SimError> {
    if !(dt.is_finite() && dt >= 0.0) {
        log::warn!("Rejecting dt {}", dt);
        return Err(SimError::NegativeDt(dt));
    }
    Ok(())
}
