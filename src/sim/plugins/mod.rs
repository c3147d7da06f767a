//! Bevy plugins
//!
//! `PongPlugin` wires the court, the per-tick system chain, and the
//! Running/Terminated lifecycle into an app.

use bevy::prelude::*;
use bevy::state::app::StatesPlugin;

use crate::sim::resources::{LatestVolume, SimPhase, TickCount};
use crate::sim::systems::*;

/// Registers the simulation systems
///
/// Expects `VolumeReaderRes`, `SceneSinkRes` and `ServeRng` to be inserted
/// by the caller.
pub struct PongPlugin;

impl Plugin for PongPlugin {
    fn build(&self, app: &mut App) {
        if !app.is_plugin_added::<StatesPlugin>() {
            app.add_plugins(StatesPlugin);
        }

        app.init_state::<SimPhase>()
            .init_resource::<TickCount>()
            .init_resource::<LatestVolume>()
            .add_systems(Startup, setup_court)
            .add_systems(
                Update,
                (
                    begin_tick,
                    apply_volume_to_paddle,
                    advance_ball,
                    resolve_paddle_collisions,
                    resolve_wall_collisions,
                    drive_autopilot,
                    resolve_scoring,
                    publish_scene,
                )
                    .chain()
                    .run_if(in_state(SimPhase::Running)),
            )
            .add_systems(OnEnter(SimPhase::Terminated), request_exit);
    }
}
