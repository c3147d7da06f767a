//! Fixed-tick pong simulation
//!
//! Components, resources, systems and the plugin that ties them together.
//! The loop only ever reads the volume bridge; it never waits on the bus.

pub mod app;
pub mod components;
pub mod plugins;
pub mod resources;
pub mod systems;

// Re-export commonly used items
pub use app::{attach_simulation, create_app, run_simulation};
pub use components::{Autopilot, Ball, Paddle, Side, VolumeControlled};
pub use resources::{ServeRng, SimPhase};
