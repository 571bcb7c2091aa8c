use glam::Vec2;

/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Court (matches the 200x200 window)
    pub const COURT_WIDTH: f32 = 200.0;
    pub const COURT_HEIGHT: f32 = 200.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 50.0;

    // Ball
    pub const BALL_SIZE: f32 = 10.0;
    pub const SERVE_SPEED: f32 = 4.0; // units per frame
    pub const BOUNCE_SPEEDUP: f32 = 1.1; // Multiply velocity on paddle hit

    // Frame clock
    pub const FRAME_DT: f32 = 1.0 / 60.0; // 60 Hz

    /// Serve toward the right, used at match start and after player 2 scores
    pub const SERVE_RIGHT: Vec2 = Vec2::new(Self::SERVE_SPEED, 0.0);
    /// Serve toward the left, used after player 1 scores
    pub const SERVE_LEFT: Vec2 = Vec2::new(-Self::SERVE_SPEED, 0.0);
}
