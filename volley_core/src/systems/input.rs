use crate::{Action, Court, InputState, Paddle};

/// Apply every held key to the paddle that owns it
pub fn apply_inputs(input: &InputState, paddles: &mut [Paddle; 2], court: &Court) {
    for key in input.held() {
        let paddle = &mut paddles[key.owner().index()];
        match key.action() {
            Action::Jump => {
                paddle.jump();
            }
            Action::Left => paddle.move_left(court.width),
            Action::Right => paddle.move_right(court.width),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Config, Key, Player, World};

    #[test]
    fn test_held_keys_move_only_their_paddle() {
        let config = Config::new();
        let mut world = World::new(&config).unwrap();
        let p1_x = world.paddle(Player::One).body.pos.x;
        let p2_x = world.paddle(Player::Two).body.pos.x;

        let mut input = InputState::new();
        input.key_down(Key::P1Right);
        input.key_down(Key::P2Jump);
        apply_inputs(&input, &mut world.paddles, &world.court);

        assert_eq!(world.paddle(Player::One).body.pos.x, p1_x + config.paddle_speed);
        assert_eq!(world.paddle(Player::One).body.vel.y, 0.0);
        assert_eq!(world.paddle(Player::Two).body.pos.x, p2_x);
        assert_eq!(world.paddle(Player::Two).body.vel.y, config.paddle_jump);
    }

    #[test]
    fn test_opposite_keys_cancel() {
        let config = Config::new();
        let mut world = World::new(&config).unwrap();
        let p1_x = world.paddle(Player::One).body.pos.x;

        let mut input = InputState::new();
        input.key_down(Key::P1Left);
        input.key_down(Key::P1Right);
        apply_inputs(&input, &mut world.paddles, &world.court);

        assert_eq!(world.paddle(Player::One).body.pos.x, p1_x);
    }
}
