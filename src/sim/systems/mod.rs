//! Simulation systems
//!
//! Every tick runs these in order: sample volume, place the volume paddle,
//! move the ball, resolve collisions, drive the autopilot, score, publish.

pub mod ball;
pub mod paddles;
pub mod publish;
pub mod scoring;
pub mod setup;

pub use ball::{advance_ball, resolve_paddle_collisions, resolve_wall_collisions};
pub use paddles::{apply_volume_to_paddle, begin_tick, drive_autopilot, paddle_y_for_volume};
pub use publish::{publish_scene, request_exit};
pub use scoring::resolve_scoring;
pub use setup::setup_court;
