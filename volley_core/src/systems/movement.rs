use crate::{Ball, Config, Court, Paddle};

/// Apply gravity and ground clamp to both paddles, keeping them on the court
pub fn move_paddles(paddles: &mut [Paddle; 2], court: &Court) {
    for paddle in paddles.iter_mut() {
        paddle.integrate();
        // A resize may have shrunk the court under the paddle
        paddle.body.clamp_x(court.width);
    }
}

/// Move ball by its per-tick velocity, then grow its speed
pub fn move_ball(ball: &mut Ball, config: &Config) {
    ball.integrate();
    ball.increase_speed(config.ball_speed_cap);
}
