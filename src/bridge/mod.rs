//! Bridge layer between the bus listener and the simulation loop
//!
//! `shared_state` carries the volume from the listener thread into the loop,
//! `scene` carries finished frames from the loop out to a renderer.

pub mod scene;
pub mod shared_state;

// Re-export commonly used types
pub use scene::{ChannelSink, OverlayLogSink, SceneSink, SceneSnapshot};
pub use shared_state::{Volume, VolumeBridge, VolumeReader};
