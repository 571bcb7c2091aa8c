use glam::Vec2;

use crate::{Ball, Config, Events, Paddle, Params};

/// Put the ball back in the middle of the court with the given velocity
pub fn serve(ball: &mut Ball, config: &Config, vel: Vec2) {
    ball.pos = config.center();
    ball.vel = vel;
    log::debug!("Served from {} with velocity {vel}", ball.pos);
}

/// Award a point when the ball's left edge leaves the court, then re-serve.
///
/// Leaving on the left scores for player 2 and serves right; leaving on the
/// right scores for player 1 and serves left. Both checks run every frame.
pub fn check_scoring(
    ball: &mut Ball,
    player1: &mut Paddle,
    player2: &mut Paddle,
    config: &Config,
    events: &mut Events,
) {
    if ball.left() < 0.0 {
        award_point(player2);
        events.right_scored = true;
        serve(ball, config, Params::SERVE_RIGHT);
    }

    if ball.left() > config.court_width {
        award_point(player1);
        events.left_scored = true;
        serve(ball, config, Params::SERVE_LEFT);
    }
}

fn award_point(paddle: &mut Paddle) {
    paddle.score += 1;
    log::debug!("Point to {}, now on {}", paddle.side, paddle.score);
}
