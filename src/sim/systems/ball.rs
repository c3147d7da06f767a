//! Ball movement and collision systems

use bevy::prelude::*;
use tracing::debug;

use crate::config::arena::SCREEN_HEIGHT;
use crate::config::ball::{ACCELERATION, RADIUS};
use crate::sim::components::{Ball, Paddle, Side};

/// Move the ball by one tick of velocity
pub fn advance_ball(mut balls: Query<&mut Ball>) {
    for mut ball in balls.iter_mut() {
        let velocity = ball.velocity;
        ball.position += velocity;
    }
}

/// Ball edge has reached the paddle's front edge within its vertical span
///
/// Only counts while the ball is still moving toward the paddle, so a ball
/// that was just reflected cannot be caught a second time.
pub fn touches_paddle(ball: &Ball, paddle: &Paddle) -> bool {
    if !paddle.spans(ball.position.y) {
        return false;
    }
    match paddle.side {
        Side::Left => ball.velocity.x < 0.0 && ball.position.x - RADIUS <= paddle.front_edge(),
        Side::Right => ball.velocity.x > 0.0 && ball.position.x + RADIUS >= paddle.front_edge(),
    }
}

/// Reflect horizontally and speed up both components
pub fn bounce_off_paddle(velocity: Vec2) -> Vec2 {
    Vec2::new(-velocity.x * ACCELERATION, velocity.y * ACCELERATION)
}

pub fn resolve_paddle_collisions(mut balls: Query<&mut Ball>, paddles: Query<&Paddle>) {
    for mut ball in balls.iter_mut() {
        let hit = paddles
            .iter()
            .find(|paddle| touches_paddle(&ball, paddle))
            .map(|paddle| paddle.side);
        if let Some(side) = hit {
            ball.velocity = bounce_off_paddle(ball.velocity);
            debug!(?side, speed_x = ball.velocity.x, "paddle hit");
        }
    }
}

/// Ball edge has crossed the top or bottom wall while heading into it
pub fn touches_wall(ball: &Ball) -> bool {
    let y = ball.position.y;
    (ball.velocity.y < 0.0 && y - RADIUS <= 0.0)
        || (ball.velocity.y > 0.0 && y + RADIUS >= SCREEN_HEIGHT)
}

pub fn resolve_wall_collisions(mut balls: Query<&mut Ball>) {
    for mut ball in balls.iter_mut() {
        if touches_wall(&ball) {
            ball.velocity.y = -ball.velocity.y;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ball(position: (f32, f32), velocity: (f32, f32)) -> Ball {
        Ball {
            position: Vec2::new(position.0, position.1),
            velocity: Vec2::new(velocity.0, velocity.1),
        }
    }

    fn left_paddle() -> Paddle {
        Paddle::new(Side::Left, Vec2::new(20.0, 200.0))
    }

    fn right_paddle() -> Paddle {
        Paddle::new(Side::Right, Vec2::new(610.0, 200.0))
    }

    #[test]
    fn left_paddle_contact_requires_span_and_approach() {
        let paddle = left_paddle();
        assert!(touches_paddle(&ball((35.0, 240.0), (-2.0, 0.0)), &paddle));
        assert!(touches_paddle(&ball((35.0, 200.0), (-2.0, 0.0)), &paddle));
        assert!(touches_paddle(&ball((35.0, 280.0), (-2.0, 0.0)), &paddle));
        // outside the vertical span
        assert!(!touches_paddle(&ball((35.0, 199.0), (-2.0, 0.0)), &paddle));
        // not yet at the front edge
        assert!(!touches_paddle(&ball((36.0, 240.0), (-2.0, 0.0)), &paddle));
        // already heading away
        assert!(!touches_paddle(&ball((35.0, 240.0), (2.0, 0.0)), &paddle));
    }

    #[test]
    fn right_paddle_contact_requires_span_and_approach() {
        let paddle = right_paddle();
        assert!(touches_paddle(&ball((605.0, 240.0), (2.0, 1.0)), &paddle));
        assert!(!touches_paddle(&ball((604.0, 240.0), (2.0, 1.0)), &paddle));
        assert!(!touches_paddle(&ball((605.0, 300.0), (2.0, 1.0)), &paddle));
        assert!(!touches_paddle(&ball((605.0, 240.0), (-2.0, 1.0)), &paddle));
    }

    #[test]
    fn bounce_flips_and_accelerates() {
        let after = bounce_off_paddle(Vec2::new(-2.0, 0.5));
        assert!(after.x > 0.0);
        assert!((after.x - 2.4).abs() < 1e-6);
        assert!((after.y - 0.6).abs() < 1e-6);
    }

    #[test]
    fn rally_speed_grows_monotonically_and_stays_finite() {
        let mut velocity = Vec2::new(2.0, 1.0);
        let mut previous_speed = velocity.length();
        for rally in 0..60 {
            let before = velocity.x.signum();
            velocity = bounce_off_paddle(velocity);
            assert_eq!(velocity.x.signum(), -before, "rally {rally}");
            let speed = velocity.length();
            assert!(speed > previous_speed, "rally {rally}");
            assert!(speed.is_finite(), "rally {rally}");
            previous_speed = speed;
        }
    }

    #[test]
    fn walls_reflect_only_when_heading_into_them() {
        assert!(touches_wall(&ball((100.0, 4.0), (1.0, -2.0))));
        assert!(touches_wall(&ball((100.0, 476.0), (1.0, 2.0))));
        assert!(!touches_wall(&ball((100.0, 4.0), (1.0, 2.0))));
        assert!(!touches_wall(&ball((100.0, 240.0), (1.0, -2.0))));
    }
}
