use glam::Vec2;

use crate::error::ensure_finite;
use crate::systems::*;
use crate::{Ball, Config, Error, Events, Paddle, Params, Score, Side, Time};

/// One match: a ball, two paddles and the court they play on.
///
/// The host drives it with [`MatchState::update`] once per frame and
/// [`MatchState::handle_pointer_move`] on each drag, then reads positions
/// and scores back for rendering.
#[derive(Debug, Clone)]
pub struct MatchState {
    ball: Ball,
    player1: Paddle,
    player2: Paddle,
    config: Config,
    time: Time,
    events: Events,
}

impl MatchState {
    /// Set up paddles against their edges and serve toward player 2
    pub fn new(config: Config) -> Result<Self, Error> {
        config.validate()?;

        let center = config.center();
        let paddle = |side: Side| {
            Paddle::new(
                side,
                Vec2::new(config.paddle_x(side), center.y),
                config.paddle_extent(),
            )
        };
        let player1 = paddle(Side::Left);
        let player2 = paddle(Side::Right);
        let ball = Ball::new(center, Vec2::ZERO, config.ball_extent());

        let mut state = Self {
            ball,
            player1,
            player2,
            config,
            time: Time::new(),
            events: Events::new(),
        };
        serve(&mut state.ball, &state.config, Params::SERVE_RIGHT);
        Ok(state)
    }

    /// Re-center the ball and launch it with `vel`
    pub fn serve_ball(&mut self, vel: Vec2) -> Result<(), Error> {
        ensure_finite("serve velocity", vel.x, vel.y)?;
        serve(&mut self.ball, &self.config, vel);
        Ok(())
    }

    /// Run the deterministic per-frame step.
    ///
    /// Order is fixed: move, paddle bounces (player 1 then player 2), wall
    /// bounce, then scoring. Ball movement is per frame; `dt` only advances
    /// the match clock.
    pub fn update(&mut self, dt: f32) -> Result<&Events, Error> {
        // The clock must stay finite too
        if !dt.is_finite() || dt < 0.0 || !(self.time.now + dt).is_finite() {
            log::warn!("Rejected frame delta {dt}");
            return Err(Error::InvalidDelta(dt));
        }

        // Clear events at start of frame
        self.events.clear();

        // 1. Move ball
        move_ball(&mut self.ball);

        // 2. Paddles
        bounce_paddles(
            &mut self.ball,
            &self.player1,
            &self.player2,
            &mut self.events,
        );

        // 3. Top and bottom walls
        bounce_walls(&mut self.ball, &self.config, &mut self.events);

        // 4. Ball left the court
        check_scoring(
            &mut self.ball,
            &mut self.player1,
            &mut self.player2,
            &self.config,
            &mut self.events,
        );

        self.time.tick(dt);
        Ok(&self.events)
    }

    /// Move whichever paddle owns the pointer's third of the court
    pub fn handle_pointer_move(&mut self, x: f32, y: f32) -> Result<(), Error> {
        ensure_finite("pointer", x, y)?;
        apply_pointer(&mut self.player1, &mut self.player2, &self.config, x, y);
        Ok(())
    }

    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    /// Direct ball access for hosts that stage positions (replays, tests)
    pub fn ball_mut(&mut self) -> &mut Ball {
        &mut self.ball
    }

    pub fn player1(&self) -> &Paddle {
        &self.player1
    }

    pub fn player2(&self) -> &Paddle {
        &self.player2
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Left => &self.player1,
            Side::Right => &self.player2,
        }
    }

    pub fn score(&self) -> Score {
        Score {
            left: self.player1.score,
            right: self.player2.score,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn time(&self) -> &Time {
        &self.time
    }

    /// Events from the most recent update
    pub fn events(&self) -> &Events {
        &self.events
    }

    pub fn center(&self) -> Vec2 {
        self.config.center()
    }
}
