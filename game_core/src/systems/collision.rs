use crate::{Ball, Config, Events, Paddle};

/// Let each paddle bounce the ball, player 1 first.
///
/// Both paddles are checked every frame; each bounce recomputes the velocity
/// from whatever the previous one left behind.
pub fn bounce_paddles(
    ball: &mut Ball,
    player1: &Paddle,
    player2: &Paddle,
    events: &mut Events,
) {
    if player1.bounce_ball(ball) {
        events.left_paddle_hit = true;
    }
    if player2.bounce_ball(ball) {
        events.right_paddle_hit = true;
    }
}

/// Flip vertical velocity when the ball pokes past the bottom or top wall.
///
/// Only the sign changes; the ball is not pushed back inside.
pub fn bounce_walls(ball: &mut Ball, config: &Config, events: &mut Events) {
    if ball.bottom() < 0.0 || ball.top() > config.court_height {
        ball.vel.y = -ball.vel.y;
        events.wall_hit = true;
        log::trace!("Ball hit a wall at {}, velocity now {}", ball.pos, ball.vel);
    }
}
