use crate::Ball;

/// Move ball one frame along its velocity
pub fn move_ball(ball: &mut Ball) {
    ball.advance();
}
