//! Scene publishing and shutdown systems
//!
//! The last system of every tick packs the court into a [`SceneSnapshot`]
//! for the renderer. A closed render target ends the loop.

use bevy::prelude::*;
use tracing::{info, warn};

use crate::bridge::scene::{BallView, PaddleView, SceneSnapshot};
use crate::bridge::Volume;
use crate::config::ball::RADIUS;
use crate::config::paddle::{HEIGHT, WIDTH};
use crate::sim::components::{Ball, Paddle, Side};
use crate::sim::resources::{LatestVolume, SceneSinkRes, SimPhase, TickCount};

/// Build this tick's snapshot; `None` until the court is spawned
pub fn snapshot(
    tick: u64,
    volume: Volume,
    ball: &Ball,
    paddles: &[&Paddle],
) -> Option<SceneSnapshot> {
    let view = |side: Side| {
        paddles
            .iter()
            .find(|paddle| paddle.side == side)
            .map(|paddle| PaddleView {
                x: paddle.position.x,
                y: paddle.position.y,
                width: WIDTH,
                height: HEIGHT,
                score: paddle.score,
            })
    };

    Some(SceneSnapshot {
        tick,
        volume,
        ball: BallView {
            x: ball.position.x,
            y: ball.position.y,
            radius: RADIUS,
            speed_x: ball.velocity.x,
            speed_y: ball.velocity.y,
        },
        player1: view(Side::Left)?,
        player2: view(Side::Right)?,
    })
}

/// Hand the finished tick to the renderer
pub fn publish_scene(
    tick: Res<TickCount>,
    latest: Res<LatestVolume>,
    balls: Query<&Ball>,
    paddles: Query<&Paddle>,
    mut sink: ResMut<SceneSinkRes>,
    mut next_phase: ResMut<NextState<SimPhase>>,
) {
    let Ok(ball) = balls.single() else {
        return;
    };
    let paddles: Vec<&Paddle> = paddles.iter().collect();
    let Some(scene) = snapshot(tick.0, latest.0, ball, &paddles) else {
        return;
    };

    if let Err(err) = sink.0.present(&scene) {
        warn!(tick = tick.0, error = %err, "stopping simulation");
        next_phase.set(SimPhase::Terminated);
    }
}

/// Runs once on entering [`SimPhase::Terminated`]
pub fn request_exit(tick: Res<TickCount>, mut exit: MessageWriter<AppExit>) {
    info!(ticks = tick.0, "simulation terminated");
    exit.write(AppExit::Success);
}
