use crate::{Ball, Court, Events, Net, Paddle, Player};

/// Bounce the ball off the ceiling and both side walls
///
/// The reflected component always points back into the court, so a ball
/// still past the wall on the next tick is not flipped outward again.
pub fn check_walls(ball: &mut Ball, court: &Court, events: &mut Events) {
    let body = &mut ball.body;

    if body.top() > court.height {
        body.vel.y = -body.vel.y.abs();
        events.ball_hit_wall = true;
    }

    if body.left() < 0.0 {
        body.vel.x = body.vel.x.abs();
        events.ball_hit_wall = true;
    } else if body.right() > court.width {
        body.vel.x = -body.vel.x.abs();
        events.ball_hit_wall = true;
    }
}

/// Resolve ball/paddle overlap for each paddle in turn
///
/// The ball is snapped flush against the paddle side its center is on,
/// sent upward, and sent horizontally away from the paddle.
pub fn check_paddle_collisions(ball: &mut Ball, paddles: &[Paddle; 2], events: &mut Events) {
    for paddle in paddles {
        let paddle_box = paddle.body.aabb();
        if !ball.body.aabb().overlaps(&paddle_box) {
            continue;
        }

        let body = &mut ball.body;
        if body.center().x < paddle_box.center().x {
            body.pos.x = paddle_box.min.x - body.size.x;
            body.vel.x = -body.vel.x.abs();
        } else {
            body.pos.x = paddle_box.max.x;
            body.vel.x = body.vel.x.abs();
        }
        body.vel.y = body.vel.y.abs();

        log::debug!("Ball hit {} paddle", paddle.player.label());
        events.ball_hit_paddle = true;
    }
}

/// Reflect the ball's horizontal velocity when it runs into the net
///
/// No positional correction is applied. Only a ball moving toward the net's
/// center line is reflected, so re-running the check on an unmoved ball is
/// a no-op.
pub fn check_net_collision(ball: &mut Ball, net: &Net, events: &mut Events) {
    let net_box = net.rect();
    if !ball.body.aabb().overlaps(&net_box) {
        return;
    }

    let body = &mut ball.body;
    let approaching = if body.center().x < net_box.center().x {
        body.vel.x > 0.0
    } else {
        body.vel.x < 0.0
    };

    if approaching {
        body.vel.x = -body.vel.x;
        log::debug!("Ball hit net");
        events.ball_hit_net = true;
    }
}

/// Keep each paddle inside its own half, between the wall and the net
///
/// Runs every tick, so a paddle stranded on the far side by a resize is
/// pulled back to its own half.
pub fn block_paddles_at_net(paddles: &mut [Paddle; 2], net: &Net, court: &Court) {
    let net_box = net.rect();
    for paddle in paddles.iter_mut() {
        let width = paddle.body.size.x;
        let (min_x, max_x) = match paddle.player {
            Player::One => (0.0, net_box.min.x - width),
            Player::Two => (net_box.max.x, court.width - width),
        };
        paddle.body.pos.x = paddle.body.pos.x.clamp(min_x, max_x.max(min_x));
    }
}
