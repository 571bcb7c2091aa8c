use glam::Vec2;

use crate::components::Side;
use crate::error::Error;
use crate::params::Params;

/// Match configuration, fixed for the lifetime of a match
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub court_width: f32,
    pub court_height: f32,
    pub ball_size: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            court_width: Params::COURT_WIDTH,
            court_height: Params::COURT_HEIGHT,
            ball_size: Params::BALL_SIZE,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Default config on a court of the given size (the host's window size)
    pub fn with_court(width: f32, height: f32) -> Self {
        Self {
            court_width: width,
            court_height: height,
            ..Self::default()
        }
    }

    /// Check every dimension is a positive finite number and that paddles
    /// fit inside their pointer zones.
    pub fn validate(&self) -> Result<(), Error> {
        let fields = [
            ("court_width", self.court_width),
            ("court_height", self.court_height),
            ("ball_size", self.ball_size),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
        ];
        for (field, value) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::InvalidConfig { field, value });
            }
        }
        if self.paddle_width > self.court_width / 3.0 {
            return Err(Error::InvalidConfig {
                field: "paddle_width",
                value: self.paddle_width,
            });
        }
        Ok(())
    }

    /// Center of the court, where the ball is served from
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.court_width / 2.0, self.court_height / 2.0)
    }

    /// Get X position of a paddle's center; paddles sit flush against their edge
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.paddle_width / 2.0,
            Side::Right => self.court_width - self.paddle_width / 2.0,
        }
    }

    pub fn ball_extent(&self) -> Vec2 {
        Vec2::splat(self.ball_size)
    }

    pub fn paddle_extent(&self) -> Vec2 {
        Vec2::new(self.paddle_width, self.paddle_height)
    }
}
