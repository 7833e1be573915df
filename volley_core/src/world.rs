use glam::Vec2;

use crate::systems::block_paddles_at_net;
use crate::{Ball, Config, Court, Net, Paddle, Player, SimError};

/// Everything that occupies the court
#[derive(Debug, Clone)]
pub struct World {
    pub court: Court,
    pub net: Net,
    pub ball: Ball,
    pub paddles: [Paddle; 2], // indexed by Player::index
}

impl World {
    pub fn new(config: &Config) -> Result<Self, SimError> {
        config.validate()?;
        let court = Court::new(config.court_width, config.court_height)?;
        let net = Net::new(&court, config.net_thickness, config.net_height(court.height))?;

        Ok(Self {
            court,
            net,
            ball: Ball::new(config.ball_size, config.ball_speed_growth),
            paddles: [
                create_paddle(config, Player::One),
                create_paddle(config, Player::Two),
            ],
        })
    }

    pub fn paddle(&self, player: Player) -> &Paddle {
        &self.paddles[player.index()]
    }

    pub fn paddle_mut(&mut self, player: Player) -> &mut Paddle {
        &mut self.paddles[player.index()]
    }

    /// Adopt new court dimensions; the net keeps its height ratio and stays centered
    ///
    /// Paddles are kept on their own half of the resized court.
    pub fn resize(&mut self, width: f32, height: f32, config: &Config) -> Result<(), SimError> {
        let court = Court::new(width, height)?;
        let paddle_width = self.paddles[0].body.size.x + self.paddles[1].body.size.x;
        if paddle_width + self.net.thickness() > court.width {
            return Err(SimError::InvalidConfig(format!(
                "court width {} cannot hold two paddles and the net",
                court.width
            )));
        }
        let tallest = self.paddles[0]
            .body
            .size
            .y
            .max(self.paddles[1].body.size.y)
            .max(self.ball.body.size.y);
        if tallest >= court.height {
            return Err(SimError::InvalidConfig(format!(
                "court height {} cannot hold paddles and ball",
                court.height
            )));
        }

        self.net.set_height(config.net_height(court.height))?;
        self.net.recenter(&court);
        self.court = court;
        block_paddles_at_net(&mut self.paddles, &self.net, &self.court);
        Ok(())
    }
}

/// Helper to create a paddle standing on the floor in the middle of its half
pub fn create_paddle(config: &Config, player: Player) -> Paddle {
    Paddle::new(
        player,
        Vec2::new(config.paddle_spawn_x(player), 0.0),
        Vec2::new(config.paddle_width, config.paddle_height),
        config.paddle_gravity,
        config.paddle_jump,
        config.paddle_speed,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_world_layout() {
        let config = Config::new();
        let world = World::new(&config).unwrap();

        assert_eq!(world.paddle(Player::One).player, Player::One);
        assert_eq!(world.paddle(Player::Two).player, Player::Two);
        assert!(world.paddle(Player::One).on_ground);
        assert!(world.paddle(Player::One).body.right() < world.net.rect().min.x);
        assert!(world.paddle(Player::Two).body.left() > world.net.rect().max.x);
        assert_eq!(world.net.height(), 240.0);
    }

    #[test]
    fn test_resize_recomputes_net() {
        let config = Config::new();
        let mut world = World::new(&config).unwrap();

        world.resize(1000.0, 500.0, &config).unwrap();

        assert_eq!(world.net.height(), 200.0);
        assert_eq!(world.net.rect().center().x, 500.0);
        assert_eq!(world.net.rect().min.x, 500.0 - config.net_thickness / 2.0);
    }

    #[test]
    fn test_resize_rejects_degenerate_court() {
        let config = Config::new();
        let mut world = World::new(&config).unwrap();

        assert!(matches!(
            world.resize(0.0, 500.0, &config),
            Err(SimError::InvalidCourt { .. })
        ));
        assert_eq!(world.court.width, 800.0, "Failed resize leaves court unchanged");
    }

    #[test]
    fn test_resize_rejects_court_too_narrow() {
        let config = Config::new();
        let mut world = World::new(&config).unwrap();

        // 2 * 40 paddle + 10 net > 85
        assert!(matches!(
            world.resize(85.0, 600.0, &config),
            Err(SimError::InvalidConfig(_))
        ));
        assert!(world.resize(90.0, 600.0, &config).is_ok());
        assert!(world.resize(800.0, 100.0, &config).is_err(), "Paddle taller than court");
    }

    #[test]
    fn test_resize_grow_keeps_player2_on_right() {
        let config = Config::new();
        let mut world = World::new(&config).unwrap();

        world.resize(1600.0, 1200.0, &config).unwrap();

        let net = world.net.rect();
        assert_eq!(net.min.x, 795.0);
        assert!(world.paddle(Player::Two).body.left() >= net.max.x);
        assert!(world.paddle(Player::One).body.right() <= net.min.x);
    }

    #[test]
    fn test_resize_shrink_keeps_player1_on_left() {
        let config = Config::new();
        let mut world = World::new(&config).unwrap();

        world.resize(300.0, 600.0, &config).unwrap();

        let net = world.net.rect();
        assert_eq!(net.min.x, 145.0);
        assert_eq!(world.paddle(Player::One).body.right(), net.min.x);
        assert!(world.paddle(Player::Two).body.left() >= net.max.x);
        assert!(world.paddle(Player::Two).body.right() <= 300.0);
    }
}
