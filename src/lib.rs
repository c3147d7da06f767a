//! Volume Pong: a pong loop steered by Bluetooth headset volume
//!
//! Volume notifications arrive on the system bus whenever they like; the
//! game ticks at a fixed 60 Hz and must never wait for them.
//!
//! Architecture:
//! - Bus setup (connect + match rule) runs on the main thread and fails fast
//! - A background listener thread blocks on the bus, decodes
//!   `PropertiesChanged` signals and stores the volume in an atomic cell
//! - Bevy runs headless on the main thread, reads the cell every tick and
//!   hands a scene snapshot to the renderer
//!
//! # Module Structure
//!
//! - `config`: Configuration constants
//! - `error`: Startup and render-target errors
//! - `bridge`: Data crossing thread boundaries
//!   - `shared_state`: Lock-free volume cell
//!   - `scene`: Scene snapshots and sinks
//! - `bus`: System bus integration
//!   - `connection`, `filter`: One-time setup
//!   - `message`, `decoder`: Signal to volume
//!   - `listener`: Background thread
//! - `sim`: Bevy simulation
//!   - `components`, `resources`, `plugins`, `systems`, `app`

pub mod bridge;
pub mod bus;
pub mod config;
pub mod error;
pub mod sim;

use tracing::info;
use tracing_subscriber::EnvFilter;

use bridge::{OverlayLogSink, VolumeBridge};
use config::overlay::LOG_INTERVAL_TICKS;
use error::BridgeError;

/// Main entry point
///
/// Returns only on a fatal startup error or once the simulation stops.
pub fn run() -> Result<(), BridgeError> {
    init_tracing();
    info!("starting");

    let bridge = VolumeBridge::new();
    let reader = bridge.reader();

    // Fail fast: no bus, no bridge
    let connection = bus::open_session()?;
    bus::spawn_listener(connection, bridge)?;

    let exit = sim::run_simulation(reader, Box::new(OverlayLogSink::new(LOG_INTERVAL_TICKS)));
    info!(?exit, "stopped");
    Ok(())
}

/// `RUST_LOG` if set, `info` otherwise
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // A subscriber may already be installed by an embedding application.
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
