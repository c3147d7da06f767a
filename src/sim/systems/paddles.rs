//! Paddle systems
//!
//! The left paddle is placed straight from the latest volume sample; the
//! right paddle chases the ball once it crosses the midline.

use bevy::prelude::*;

use crate::bridge::Volume;
use crate::config::arena::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::config::paddle::{AUTOPILOT_STEP, HEIGHT};
use crate::config::volume::MAX;
use crate::sim::components::{Autopilot, Ball, Paddle, VolumeControlled};
use crate::sim::resources::{LatestVolume, TickCount, VolumeReaderRes};

/// Lowest y a paddle's top edge can take
pub const TRAVEL: f32 = SCREEN_HEIGHT - HEIGHT;

/// Advance the tick counter and sample the volume cell
pub fn begin_tick(
    reader: Res<VolumeReaderRes>,
    mut latest: ResMut<LatestVolume>,
    mut tick: ResMut<TickCount>,
) {
    tick.0 += 1;
    latest.0 = reader.0.load();
}

/// Linear map of `0..=127` onto `0..=TRAVEL`
///
/// No smoothing: a jump in volume is a jump in position.
pub fn paddle_y_for_volume(volume: Volume) -> f32 {
    TRAVEL * (f32::from(volume.get()) / f32::from(MAX))
}

/// Place the volume-controlled paddle
pub fn apply_volume_to_paddle(
    latest: Res<LatestVolume>,
    mut paddles: Query<&mut Paddle, With<VolumeControlled>>,
) {
    let y = paddle_y_for_volume(latest.0);
    for mut paddle in paddles.iter_mut() {
        paddle.position.y = y;
    }
}

/// Next y for the autopilot paddle, one fixed step toward the ball
///
/// Holds while the ball is in the left half of the court.
pub fn autopilot_step(paddle: &Paddle, ball: &Ball) -> f32 {
    let y = paddle.position.y;
    if ball.position.x <= SCREEN_WIDTH / 2.0 {
        return y;
    }

    let centre = paddle.centre_y();
    let next = if ball.position.y > centre {
        y + AUTOPILOT_STEP
    } else if ball.position.y < centre {
        y - AUTOPILOT_STEP
    } else {
        y
    };
    next.clamp(0.0, TRAVEL)
}

/// Move the computer paddle
pub fn drive_autopilot(balls: Query<&Ball>, mut paddles: Query<&mut Paddle, With<Autopilot>>) {
    let Ok(ball) = balls.single() else {
        return;
    };
    for mut paddle in paddles.iter_mut() {
        let y = autopilot_step(&paddle, ball);
        paddle.position.y = y;
    }
}
