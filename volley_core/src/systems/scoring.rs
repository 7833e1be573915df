use crate::{Ball, Config, Court, Events, Paddle, Player, Score};

/// Award a point when the ball drops below the floor
///
/// The player on the far side from where the ball landed scores.
pub fn check_scoring(
    ball: &Ball,
    court: &Court,
    score: &mut Score,
    events: &mut Events,
) -> Option<Player> {
    if ball.body.bottom() >= 0.0 {
        return None;
    }

    let scorer = if ball.body.center().x < court.mid_x() {
        Player::Two
    } else {
        Player::One
    };
    score.increment(scorer);
    events.scored(scorer);

    log::info!(
        "{} scored ({} - {})",
        scorer.label(),
        score.player1,
        score.player2
    );
    Some(scorer)
}

/// Launch the ball from the current server and hand the next serve over
pub fn serve_ball(
    ball: &mut Ball,
    paddles: &[Paddle; 2],
    serving: &mut Player,
    court: &Court,
    config: &Config,
    events: &mut Events,
) {
    let server = *serving;
    ball.serve(
        &paddles[server.index()],
        config.serve_velocity,
        config.serve_gap,
        court,
    );
    *serving = server.other();
    events.served = true;
    log::info!("{} serves", server.label());
}

/// Winner, if either score has reached the threshold
pub fn check_winner(score: &Score, config: &Config) -> Option<Player> {
    score.has_winner(config.win_score)
}
