//! Court setup system
//!
//! Spawns the ball and both paddles in their opening positions.

use bevy::prelude::*;
use rand::Rng;
use tracing::info;

use crate::config::arena::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::config::ball::{OPENING_VERTICAL_MAX, OPENING_VERTICAL_MIN, SERVE_SPEED};
use crate::config::paddle::{HEIGHT, INSET, WIDTH};
use crate::sim::components::{Autopilot, Ball, Paddle, Side, VolumeControlled};
use crate::sim::resources::ServeRng;

/// Spawn the ball and paddles
pub fn setup_court(mut commands: Commands, mut rng: ResMut<ServeRng>) {
    let ball = opening_serve(&mut rng.0);
    info!(velocity = ?ball.velocity, "setting up court");

    commands.spawn(ball);

    // Both paddles start resting on the bottom wall
    commands.spawn((
        Paddle::new(Side::Left, Vec2::new(INSET, SCREEN_HEIGHT - HEIGHT)),
        VolumeControlled,
    ));
    commands.spawn((
        Paddle::new(
            Side::Right,
            Vec2::new(SCREEN_WIDTH - WIDTH - INSET, SCREEN_HEIGHT - HEIGHT),
        ),
        Autopilot,
    ));
}

/// Centred ball heading right and downwards
pub fn opening_serve(rng: &mut impl Rng) -> Ball {
    Ball {
        position: court_centre(),
        velocity: Vec2::new(
            SERVE_SPEED,
            rng.gen_range(OPENING_VERTICAL_MIN..OPENING_VERTICAL_MAX),
        ),
    }
}

pub fn court_centre() -> Vec2 {
    Vec2::new(SCREEN_WIDTH / 2.0, SCREEN_HEIGHT / 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn opening_serve_is_centred_and_heads_right() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..100 {
            let ball = opening_serve(&mut rng);
            assert_eq!(ball.position, Vec2::new(320.0, 240.0));
            assert_eq!(ball.velocity.x, SERVE_SPEED);
            assert!((1.0..3.0).contains(&ball.velocity.y));
        }
    }
}
