use std::fmt;

/// Errors surfaced by the simulation to its host
#[derive(Debug, Clone, PartialEq)]
pub enum SimError {
    /// Elapsed time was negative or not finite
    NegativeDt(f32),
    /// Court dimensions must both be positive
    InvalidCourt { width: f32, height: f32 },
    /// Net thickness and height must both be positive
    InvalidNet { thickness: f32, height: f32 },
    /// Tuning values that make the geometry meaningless
    InvalidConfig(String),
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::NegativeDt(dt) => write!(f, "dt must be finite and >= 0, got {}", dt),
            SimError::InvalidCourt { width, height } => {
                write!(f, "court must be positive, got {}x{}", width, height)
            }
            SimError::InvalidNet { thickness, height } => write!(
                f,
                "net must be positive, got thickness {} height {}",
                thickness, height
            ),
            SimError::InvalidConfig(msg) => write!(f, "invalid config: {}", msg),
        }
    }
}

impl std::error::Error for SimError {}

impl From<serde_json::Error> for SimError {
    fn from(err: serde_json::Error) -> Self {
        SimError::InvalidConfig(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_mentions_values() {
        let err = SimError::InvalidCourt {
            width: 0.0,
            height: 600.0,
        };
        assert_eq!(err.to_string(), "court must be positive, got 0x600");

        let err = SimError::NegativeDt(-1.0);
        assert!(err.to_string().contains("-1"));
    }
}
