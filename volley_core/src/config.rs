use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::{Params, Player, SimError};

/// Game configuration
///
/// Deserializes with every field optional, so a host can override a single
/// tuning value without restating the rest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub court_width: f32,
    pub court_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_speed: f32,
    pub paddle_gravity: f32,
    pub paddle_jump: f32,
    pub ball_size: f32,
    pub serve_velocity: Vec2,
    pub serve_gap: f32,
    pub ball_speed_growth: f32,
    /// Upper bound on ball speed; `None` keeps growth unbounded
    pub ball_speed_cap: Option<f32>,
    pub net_thickness: f32,
    pub net_height_ratio: f32,
    pub win_score: u8,
    /// Re-serve in the same tick a point is scored
    pub auto_serve: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            court_width: Params::COURT_WIDTH,
            court_height: Params::COURT_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_speed: Params::PADDLE_SPEED,
            paddle_gravity: Params::PADDLE_GRAVITY,
            paddle_jump: Params::PADDLE_JUMP,
            ball_size: Params::BALL_SIZE,
            serve_velocity: Vec2::new(Params::BALL_SERVE_VX, Params::BALL_SERVE_VY),
            serve_gap: Params::BALL_SERVE_GAP,
            ball_speed_growth: Params::BALL_SPEED_GROWTH,
            ball_speed_cap: None,
            net_thickness: Params::NET_THICKNESS,
            net_height_ratio: Params::NET_HEIGHT_RATIO,
            win_score: Params::WIN_SCORE,
            auto_serve: true,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a (possibly partial) JSON document and validate the result
    pub fn from_json(json: &str) -> Result<Self, SimError> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Starting X (left edge) for a player's paddle: the middle of their half
    pub fn paddle_spawn_x(&self, player: Player) -> f32 {
        let quarter = self.court_width / 4.0;
        let center = match player {
            Player::One => quarter,
            Player::Two => self.court_width - quarter,
        };
        center - self.paddle_width / 2.0
    }

    /// Net height for a given court height
    pub fn net_height(&self, court_height: f32) -> f32 {
        court_height * self.net_height_ratio
    }

    pub fn validate(&self) -> Result<(), SimError> {
        if !(self.court_width > 0.0 && self.court_height > 0.0) {
            return Err(SimError::InvalidCourt {
                width: self.court_width,
                height: self.court_height,
            });
        }
        if !(self.net_thickness > 0.0 && self.net_height_ratio > 0.0) {
            return Err(SimError::InvalidNet {
                thickness: self.net_thickness,
                height: self.net_height(self.court_height),
            });
        }
        if self.net_height_ratio > 1.0 {
            return Err(SimError::InvalidConfig(
                "net_height_ratio must be <= 1".to_string(),
            ));
        }
        if !(self.paddle_width > 0.0 && self.paddle_height > 0.0 && self.ball_size > 0.0) {
            return Err(SimError::InvalidConfig(
                "paddle and ball sizes must be > 0".to_string(),
            ));
        }
        if self.paddle_height >= self.court_height || self.ball_size >= self.court_height {
            return Err(SimError::InvalidConfig(
                "paddle and ball must fit under the court ceiling".to_string(),
            ));
        }
        if 2.0 * self.paddle_width + self.net_thickness > self.court_width {
            return Err(SimError::InvalidConfig(
                "two paddles and the net must fit across the court".to_string(),
            ));
        }
        if !(self.paddle_gravity < 0.0) {
            return Err(SimError::InvalidConfig(
                "paddle_gravity must be < 0".to_string(),
            ));
        }
        if !(self.paddle_jump > 0.0 && self.paddle_speed >= 0.0) {
            return Err(SimError::InvalidConfig(
                "paddle_jump must be > 0 and paddle_speed >= 0".to_string(),
            ));
        }
        if !(self.ball_speed_growth.is_finite() && self.ball_speed_growth >= 1.0) {
            return Err(SimError::InvalidConfig(
                "ball_speed_growth must be finite and >= 1".to_string(),
            ));
        }
        if let Some(cap) = self.ball_speed_cap {
            if !(cap > 0.0) {
                return Err(SimError::InvalidConfig(
                    "ball_speed_cap must be > 0".to_string(),
                ));
            }
        }
        if !self.serve_velocity.is_finite() || !(self.serve_gap >= 0.0) {
            return Err(SimError::InvalidConfig(
                "serve_velocity must be finite and serve_gap >= 0".to_string(),
            ));
        }
        if self.win_score == 0 {
            return Err(SimError::InvalidConfig("win_score must be >= 1".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::new().validate().is_ok());
    }

    #[test]
    fn test_config_paddle_spawn_x() {
        let config = Config::new();
        assert_eq!(config.paddle_spawn_x(Player::One), 180.0, "Left paddle X");
        assert_eq!(config.paddle_spawn_x(Player::Two), 580.0, "Right paddle X");
    }

    #[test]
    fn test_zero_court_is_rejected() {
        let mut config = Config::new();
        config.court_height = 0.0;
        assert!(matches!(
            config.validate(),
            Err(SimError::InvalidCourt { .. })
        ));
    }

    #[test]
    fn test_positive_gravity_is_rejected() {
        let mut config = Config::new();
        config.paddle_gravity = 0.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_json_overrides_single_field() {
        let config = Config::from_json(r#"{ "win_score": 11, "auto_serve": false }"#).unwrap();
        assert_eq!(config.win_score, 11);
        assert!(!config.auto_serve);
        assert_eq!(config.court_width, Params::COURT_WIDTH);
    }

    #[test]
    fn test_from_json_validates() {
        let err = Config::from_json(r#"{ "court_width": -5.0 }"#).unwrap_err();
        assert!(matches!(err, SimError::InvalidCourt { .. }));

        let err = Config::from_json("not json").unwrap_err();
        assert!(matches!(err, SimError::InvalidConfig(_)));
    }
}
