use crate::{Config, Paddle};

/// Move paddles to follow a pointer drag.
///
/// The left third of the court drives player 1 and the right third drives
/// player 2; the middle third does nothing. The paddle's center snaps to the
/// pointer's y with no clamping, so a paddle can be dragged off the court.
pub fn apply_pointer(
    player1: &mut Paddle,
    player2: &mut Paddle,
    config: &Config,
    x: f32,
    y: f32,
) {
    let zone = config.court_width / 3.0;

    if x < zone {
        player1.pos.y = y;
    }
    if x > config.court_width - zone {
        player2.pos.y = y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Side;
    use glam::Vec2;

    fn setup_paddles() -> (Config, Paddle, Paddle) {
        let config = Config::new();
        let player1 = Paddle::new(
            Side::Left,
            Vec2::new(config.paddle_x(Side::Left), 100.0),
            config.paddle_extent(),
        );
        let player2 = Paddle::new(
            Side::Right,
            Vec2::new(config.paddle_x(Side::Right), 100.0),
            config.paddle_extent(),
        );
        (config, player1, player2)
    }

    #[test]
    fn test_left_zone_moves_player1() {
        let (config, mut player1, mut player2) = setup_paddles();

        apply_pointer(&mut player1, &mut player2, &config, 10.0, 42.0);

        assert_eq!(player1.pos.y, 42.0);
        assert_eq!(player2.pos.y, 100.0, "Player 2 unaffected");
        assert_eq!(player1.pos.x, 5.0, "Only the y coordinate follows");
    }

    #[test]
    fn test_right_zone_moves_player2() {
        let (config, mut player1, mut player2) = setup_paddles();

        apply_pointer(&mut player1, &mut player2, &config, 190.0, 150.0);

        assert_eq!(player2.pos.y, 150.0);
        assert_eq!(player1.pos.y, 100.0, "Player 1 unaffected");
    }

    #[test]
    fn test_middle_zone_moves_nothing() {
        let (config, mut player1, mut player2) = setup_paddles();

        apply_pointer(&mut player1, &mut player2, &config, 100.0, 10.0);
        // Zone boundaries are exclusive
        apply_pointer(&mut player1, &mut player2, &config, 200.0 / 3.0, 10.0);
        apply_pointer(&mut player1, &mut player2, &config, 200.0 - 200.0 / 3.0, 10.0);

        assert_eq!(player1.pos.y, 100.0);
        assert_eq!(player2.pos.y, 100.0);
    }

    #[test]
    fn test_paddle_is_not_clamped_to_court() {
        let (config, mut player1, mut player2) = setup_paddles();

        apply_pointer(&mut player1, &mut player2, &config, 0.0, -80.0);
        apply_pointer(&mut player1, &mut player2, &config, 199.0, 500.0);

        assert_eq!(player1.pos.y, -80.0);
        assert_eq!(player2.pos.y, 500.0);
    }
}
