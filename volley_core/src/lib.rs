pub mod components;
pub mod config;
pub mod court;
pub mod error;
pub mod game;
pub mod params;
pub mod resources;
pub mod snapshot;
pub mod systems;
pub mod world;

pub use components::*;
pub use config::*;
pub use court::*;
pub use error::*;
pub use game::*;
pub use params::*;
pub use resources::*;
pub use snapshot::*;
pub use world::*;

use systems::*;

/// What a single in-play tick ended with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Nobody scored
    Rally,
    /// A point was scored and the match goes on
    Point { scorer: Player },
    /// A point was scored and it won the match
    Won { winner: Player },
}

/// Run one fixed tick of a rally
///
/// The order of the stages is part of the contract: a ball that drops below
/// the floor is re-served before paddle and net checks run, so those act on
/// the freshly served ball.
pub fn step(
    world: &mut World,
    config: &Config,
    score: &mut Score,
    serving: &mut Player,
    input: &InputState,
    events: &mut Events,
) -> StepOutcome {
    // 1-2. Integrate bodies, then grow ball speed
    move_ball(&mut world.ball, config);
    move_paddles(&mut world.paddles, &world.court);

    // 3-4. Ceiling and side walls
    check_walls(&mut world.ball, &world.court, events);

    // 5. Ball below the floor scores
    let mut outcome = StepOutcome::Rally;
    if let Some(scorer) = check_scoring(&world.ball, &world.court, score, events) {
        outcome = StepOutcome::Point { scorer };

        if config.auto_serve {
            serve_ball(
                &mut world.ball,
                &world.paddles,
                serving,
                &world.court,
                config,
                events,
            );
        } else {
            let server = &world.paddles[serving.index()];
            world.ball.park_above(server, config.serve_gap, &world.court);
        }

        // 6. Win check stops the tick here
        if let Some(winner) = check_winner(score, config) {
            events.game_over = true;
            return StepOutcome::Won { winner };
        }
    }

    // 7-9. Ball vs paddles, ball vs net, paddles vs net
    check_paddle_collisions(&mut world.ball, &world.paddles, events);
    check_net_collision(&mut world.ball, &world.net, events);
    block_paddles_at_net(&mut world.paddles, &world.net, &world.court);

    // 10. Held keys
    apply_inputs(input, &mut world.paddles, &world.court);

    outcome
}

/// Run one fixed tick while the ball waits above the server
///
/// Paddles keep moving and the ball follows the server's paddle.
pub fn step_serving(world: &mut World, config: &Config, serving: Player, input: &InputState) {
    move_paddles(&mut world.paddles, &world.court);
    block_paddles_at_net(&mut world.paddles, &world.net, &world.court);
    apply_inputs(input, &mut world.paddles, &world.court);

    let server = &world.paddles[serving.index()];
    world.ball.park_above(server, config.serve_gap, &world.court);
}
