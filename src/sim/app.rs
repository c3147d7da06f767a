//! Simulation app setup and execution
//!
//! This module handles the creation and configuration of the Bevy app that
//! runs the court at a fixed tick rate.

use bevy::{
    app::{App, ScheduleRunnerPlugin},
    prelude::*,
};
use std::time::Duration;
use tracing::info;

use crate::bridge::{SceneSink, VolumeReader};
use crate::config::TARGET_TICK_HZ;
use crate::sim::plugins::PongPlugin;
use crate::sim::resources::{SceneSinkRes, ServeRng, VolumeReaderRes};

/// Create the headless app ticking at [`TARGET_TICK_HZ`]
pub fn create_app(volume: VolumeReader, sink: Box<dyn SceneSink>) -> App {
    let mut app = App::new();

    // No window and no renderer: only the task pools, time and the runner
    app.add_plugins(MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(
        Duration::from_secs_f64(1.0 / TARGET_TICK_HZ),
    )));

    attach_simulation(&mut app, volume, sink, ServeRng::from_entropy());

    info!(tick_hz = TARGET_TICK_HZ, "simulation configured");
    app
}

/// Install the simulation into an existing app
///
/// Tests use this with a bare `App` and drive ticks with `app.update()`.
pub fn attach_simulation(
    app: &mut App,
    volume: VolumeReader,
    sink: Box<dyn SceneSink>,
    rng: ServeRng,
) {
    app.insert_resource(VolumeReaderRes(volume));
    app.insert_resource(SceneSinkRes(sink));
    app.insert_resource(rng);
    app.add_plugins(PongPlugin);
}

/// Run the loop on the calling thread until the render target closes
pub fn run_simulation(volume: VolumeReader, sink: Box<dyn SceneSink>) -> AppExit {
    let mut app = create_app(volume, sink);
    info!("running simulation loop");
    app.run()
}
