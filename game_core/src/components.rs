use std::fmt;

use glam::Vec2;

use crate::geometry::Aabb;
use crate::params::Params;

/// Which end of the court a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Player 1
    Left,
    /// Player 2
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => write!(f, "player 1"),
            Side::Right => write!(f, "player 2"),
        }
    }
}

/// The pong ball. Velocity is expressed in court units per frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2, // Center
    pub vel: Vec2,
    size: Vec2,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, size: Vec2) -> Self {
        Self { pos, vel, size }
    }

    /// Move the ball one step along its velocity
    pub fn advance(&mut self) {
        self.pos += self.vel;
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn left(&self) -> f32 {
        self.pos.x - self.size.x / 2.0
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x / 2.0
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y - self.size.y / 2.0
    }

    pub fn top(&self) -> f32 {
        self.pos.y + self.size.y / 2.0
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::from_center_size(self.pos, self.size)
    }
}

/// Paddle - a player's bat and their score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub side: Side,
    pub pos: Vec2, // Center; y follows the pointer, unclamped
    pub score: u32,
    size: Vec2,
}

impl Paddle {
    pub fn new(side: Side, pos: Vec2, size: Vec2) -> Self {
        Self {
            side,
            pos,
            score: 0,
            size,
        }
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::from_center_size(self.pos, self.size)
    }

    /// Send the ball back if it touches this paddle. Returns whether it bounced.
    ///
    /// The x velocity is reflected and the whole vector sped up, then the y
    /// velocity is nudged by where the ball struck: -1 at the paddle's bottom
    /// edge, 0 at its center, 1 at its top edge.
    pub fn bounce_ball(&self, ball: &mut Ball) -> bool {
        if !self.aabb().intersects(&ball.aabb()) {
            return false;
        }

        let offset = (ball.pos.y - self.pos.y) / (self.size.y / 2.0);
        let bounced = Vec2::new(-ball.vel.x, ball.vel.y) * Params::BOUNCE_SPEEDUP;
        ball.vel = Vec2::new(bounced.x, bounced.y + offset);

        log::trace!(
            "Ball bounced off {} at offset {offset:.3}, velocity now {}",
            self.side,
            ball.vel
        );
        true
    }
}
