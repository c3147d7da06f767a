//! Scene hand-off to the external renderer
//!
//! Every tick the simulation publishes a [`SceneSnapshot`] through a
//! [`SceneSink`]. Drawing is the renderer's job; this crate only promises a
//! consistent snapshot per tick.

use crossbeam_channel::{Receiver, Sender, TrySendError};
use serde::{Deserialize, Serialize};
use tracing::{info, trace};

use crate::bridge::shared_state::Volume;
use crate::error::RenderTargetClosed;

// =============================================================================
// Snapshot
// =============================================================================

/// Ball as the renderer needs it: a filled disc
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BallView {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub speed_x: f32,
    pub speed_y: f32,
}

/// Paddle as the renderer needs it: a filled rectangle plus its score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaddleView {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub score: u32,
}

/// Everything needed to draw one tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneSnapshot {
    pub tick: u64,
    /// Volume step the left paddle was placed from this tick
    pub volume: Volume,
    pub ball: BallView,
    /// Left (volume-controlled) paddle
    pub player1: PaddleView,
    /// Right (autopilot) paddle
    pub player2: PaddleView,
}

impl SceneSnapshot {
    /// Text overlay drawn in the top-left corner
    pub fn overlay_lines(&self) -> [String; 4] {
        [
            format!("Volume: {}", self.volume.get()),
            format!("Player 1: {}", self.player1.score),
            format!("Player 2: {}", self.player2.score),
            format!("Ball Speed: {:.6}", self.ball.speed_x),
        ]
    }
}

// =============================================================================
// Sinks
// =============================================================================

/// Receiving end of the per-tick scene stream
pub trait SceneSink: Send + Sync + 'static {
    /// Err means the render target is gone and the loop should stop
    fn present(&mut self, scene: &SceneSnapshot) -> Result<(), RenderTargetClosed>;
}

/// Forwards scenes to a renderer on another thread
///
/// A full channel drops the frame: a lagging renderer catches up on the
/// next tick instead of stalling the loop.
pub struct ChannelSink {
    sender: Sender<SceneSnapshot>,
}

impl ChannelSink {
    pub fn bounded(capacity: usize) -> (Self, Receiver<SceneSnapshot>) {
        let (sender, receiver) = crossbeam_channel::bounded(capacity);
        (Self { sender }, receiver)
    }
}

impl SceneSink for ChannelSink {
    fn present(&mut self, scene: &SceneSnapshot) -> Result<(), RenderTargetClosed> {
        match self.sender.try_send(scene.clone()) {
            Ok(()) => Ok(()),
            Err(TrySendError::Full(_)) => {
                trace!(tick = scene.tick, "renderer busy, frame dropped");
                Ok(())
            }
            Err(TrySendError::Disconnected(_)) => Err(RenderTargetClosed),
        }
    }
}

/// Logs the overlay text periodically; used when no renderer is attached
pub struct OverlayLogSink {
    interval_ticks: u64,
}

impl OverlayLogSink {
    pub fn new(interval_ticks: u64) -> Self {
        Self {
            interval_ticks: interval_ticks.max(1),
        }
    }
}

impl SceneSink for OverlayLogSink {
    fn present(&mut self, scene: &SceneSnapshot) -> Result<(), RenderTargetClosed> {
        if scene.tick % self.interval_ticks == 0 {
            let [volume, player1, player2, speed] = scene.overlay_lines();
            info!(tick = scene.tick, "{volume} | {player1} | {player2} | {speed}");
        }
        Ok(())
    }
}
