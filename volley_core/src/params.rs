/// Game tuning parameters for the volley court
///
/// Velocities and accelerations are in court units per tick, not per second:
/// the simulation is coupled to the fixed tick rate.
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Court
    pub const COURT_WIDTH: f32 = 800.0;
    pub const COURT_HEIGHT: f32 = 600.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 40.0;
    pub const PADDLE_HEIGHT: f32 = 120.0;
    pub const PADDLE_SPEED: f32 = 8.0;
    pub const PADDLE_GRAVITY: f32 = -0.5;
    pub const PADDLE_JUMP: f32 = 10.0;

    // Ball
    pub const BALL_SIZE: f32 = 40.0;
    pub const BALL_SERVE_VX: f32 = 4.0;
    pub const BALL_SERVE_VY: f32 = 6.0;
    pub const BALL_SERVE_GAP: f32 = 10.0;
    pub const BALL_SPEED_GROWTH: f32 = 1.001; // Applied every tick, uncapped

    // Net
    pub const NET_THICKNESS: f32 = 10.0;
    pub const NET_HEIGHT_RATIO: f32 = 0.4; // 2/5 of court height

    // Score
    pub const WIN_SCORE: u8 = 7;

    // Timing
    pub const FIXED_DT: f32 = 1.0 / 60.0; // 60 Hz
    pub const MAX_DT: f32 = 0.25; // Clamp to prevent spiral of death
}
