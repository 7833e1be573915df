use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::{Aabb, Court, SimError};

/// One of the two players; player one defends the left half
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub fn other(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Horizontal sign pointing from this player's half towards the opponent
    pub fn toward_opponent(self) -> f32 {
        match self {
            Player::One => 1.0,
            Player::Two => -1.0,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Player::One => "Player 1",
            Player::Two => "Player 2",
        }
    }
}

/// Shared motion primitive: bottom-left position, size and per-tick velocity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub pos: Vec2,
    pub size: Vec2,
    pub vel: Vec2,
}

impl Body {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self {
            pos,
            size,
            vel: Vec2::ZERO,
        }
    }

    pub fn left(&self) -> f32 {
        self.pos.x
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y
    }

    pub fn top(&self) -> f32 {
        self.pos.y + self.size.y
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, self.size)
    }

    /// Keep the whole box inside [0, width] horizontally
    pub fn clamp_x(&mut self, width: f32) {
        self.pos.x = self.pos.x.clamp(0.0, (width - self.size.x).max(0.0));
    }
}

/// A player's paddle: jumps, falls under gravity, walks left and right
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub player: Player,
    pub body: Body,
    pub gravity: f32,
    pub jump_strength: f32,
    pub speed: f32,
    pub on_ground: bool,
}

impl Paddle {
    pub fn new(player: Player, pos: Vec2, size: Vec2, gravity: f32, jump: f32, speed: f32) -> Self {
        Self {
            player,
            body: Body::new(pos, size),
            gravity,
            jump_strength: jump,
            speed,
            on_ground: pos.y <= 0.0,
        }
    }

    /// Integrate gravity into velocity, then velocity into position, landing on y = 0
    pub fn integrate(&mut self) {
        self.body.vel.y += self.gravity;
        self.body.pos += self.body.vel;

        if self.body.pos.y <= 0.0 {
            self.body.pos.y = 0.0;
            self.body.vel.y = 0.0;
            self.on_ground = true;
        }
    }

    /// Returns false (and does nothing) while airborne
    pub fn jump(&mut self) -> bool {
        if !self.on_ground {
            return false;
        }
        self.body.vel.y = self.jump_strength;
        self.on_ground = false;
        true
    }

    pub fn move_left(&mut self, court_width: f32) {
        self.body.pos.x -= self.speed;
        self.body.clamp_x(court_width);
    }

    pub fn move_right(&mut self, court_width: f32) {
        self.body.pos.x += self.speed;
        self.body.clamp_x(court_width);
    }
}

/// The ball; velocity grows multiplicatively every tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub body: Body,
    pub speed_growth: f32,
}

impl Ball {
    pub fn new(size: f32, speed_growth: f32) -> Self {
        Self {
            body: Body::new(Vec2::ZERO, Vec2::splat(size)),
            speed_growth,
        }
    }

    pub fn integrate(&mut self) {
        self.body.pos += self.body.vel;
    }

    /// Scale velocity by the growth factor, optionally bounded by `cap`
    pub fn increase_speed(&mut self, cap: Option<f32>) {
        self.body.vel *= self.speed_growth;
        if let Some(cap) = cap {
            self.body.vel = self.body.vel.clamp_length_max(cap);
        }
    }

    /// Rest the ball just above a paddle, kept inside the court
    pub fn park_above(&mut self, paddle: &Paddle, gap: f32, court: &Court) {
        let size = self.body.size;
        let x = paddle.body.center().x - size.x / 2.0;
        let y = paddle.body.top() + gap;
        self.body.pos = Vec2::new(
            x.clamp(0.0, (court.width - size.x).max(0.0)),
            y.min(court.height - size.y).max(0.0),
        );
        self.body.vel = Vec2::ZERO;
    }

    /// Launch from above the server's paddle, upward and toward the opponent
    pub fn serve(&mut self, paddle: &Paddle, velocity: Vec2, gap: f32, court: &Court) {
        self.park_above(paddle, gap, court);
        self.body.vel = Vec2::new(
            velocity.x.abs() * paddle.player.toward_opponent(),
            velocity.y.abs(),
        );
    }
}

/// Static net standing on the floor at the court midpoint
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Net {
    thickness: f32,
    height: f32,
    mid_x: f32,
    rect: Aabb,
}

impl Net {
    pub fn new(court: &Court, thickness: f32, height: f32) -> Result<Self, SimError> {
        if !(thickness > 0.0 && height > 0.0) {
            return Err(SimError::InvalidNet { thickness, height });
        }
        let mut net = Self {
            thickness,
            height,
            mid_x: court.mid_x(),
            rect: Aabb::new(Vec2::ZERO, Vec2::ZERO),
        };
        net.rebuild();
        Ok(net)
    }

    pub fn thickness(&self) -> f32 {
        self.thickness
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn rect(&self) -> Aabb {
        self.rect
    }

    pub fn set_height(&mut self, height: f32) -> Result<(), SimError> {
        if !(height > 0.0) {
            return Err(SimError::InvalidNet {
                thickness: self.thickness,
                height,
            });
        }
        self.height = height;
        self.rebuild();
        Ok(())
    }

    pub fn set_thickness(&mut self, thickness: f32) -> Result<(), SimError> {
        if !(thickness > 0.0) {
            return Err(SimError::InvalidNet {
                thickness,
                height: self.height,
            });
        }
        self.thickness = thickness;
        self.rebuild();
        Ok(())
    }

    /// Re-center on a resized court
    pub fn recenter(&mut self, court: &Court) {
        self.mid_x = court.mid_x();
        self.rebuild();
    }

    fn rebuild(&mut self) {
        let pos = Vec2::new(self.mid_x - self.thickness / 2.0, 0.0);
        self.rect = Aabb::from_pos_size(pos, Vec2::new(self.thickness, self.height));
    }
}
