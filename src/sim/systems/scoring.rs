//! Scoring system
//!
//! A ball leaving the court on either side is an ordinary transition: the
//! other player scores and the ball is served again from the centre.

use bevy::prelude::*;
use rand::Rng;
use tracing::info;

use crate::config::arena::SCREEN_WIDTH;
use crate::config::ball::{RADIUS, SERVE_SPEED, SERVE_SPREAD};
use crate::sim::components::{Ball, Paddle, Side};
use crate::sim::resources::ServeRng;
use crate::sim::systems::setup::court_centre;

/// The side whose wall the ball has reached, if any
pub fn conceding_side(ball: &Ball) -> Option<Side> {
    if ball.position.x - RADIUS <= 0.0 {
        Some(Side::Left)
    } else if ball.position.x + RADIUS >= SCREEN_WIDTH {
        Some(Side::Right)
    } else {
        None
    }
}

/// Centred ball heading toward the side that just conceded
pub fn serve_towards(side: Side, rng: &mut impl Rng) -> Ball {
    let speed_x = match side {
        Side::Left => -SERVE_SPEED,
        Side::Right => SERVE_SPEED,
    };
    Ball {
        position: court_centre(),
        velocity: Vec2::new(speed_x, rng.gen_range(-SERVE_SPREAD..SERVE_SPREAD)),
    }
}

pub fn resolve_scoring(
    mut balls: Query<&mut Ball>,
    mut paddles: Query<&mut Paddle>,
    mut rng: ResMut<ServeRng>,
) {
    for mut ball in balls.iter_mut() {
        let Some(conceded) = conceding_side(&ball) else {
            continue;
        };

        let scorer = conceded.opponent();
        for mut paddle in paddles.iter_mut().filter(|paddle| paddle.side == scorer) {
            paddle.score += 1;
            info!(?scorer, score = paddle.score, "point scored");
        }

        *ball = serve_towards(conceded, &mut rng.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn ball_at(x: f32) -> Ball {
        Ball {
            position: Vec2::new(x, 240.0),
            velocity: Vec2::new(-3.0, 0.0),
        }
    }

    #[test]
    fn detects_both_walls() {
        assert_eq!(conceding_side(&ball_at(5.0)), Some(Side::Left));
        assert_eq!(conceding_side(&ball_at(-20.0)), Some(Side::Left));
        assert_eq!(conceding_side(&ball_at(635.0)), Some(Side::Right));
        assert_eq!(conceding_side(&ball_at(6.0)), None);
        assert_eq!(conceding_side(&ball_at(320.0)), None);
    }

    #[test]
    fn serve_heads_to_conceding_side_with_small_vertical_speed() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let left = serve_towards(Side::Left, &mut rng);
            assert_eq!(left.position, Vec2::new(320.0, 240.0));
            assert_eq!(left.velocity.x, -SERVE_SPEED);
            assert!((-1.0..1.0).contains(&left.velocity.y));

            let right = serve_towards(Side::Right, &mut rng);
            assert_eq!(right.velocity.x, SERVE_SPEED);
            assert!((-1.0..1.0).contains(&right.velocity.y));
        }
    }
}
