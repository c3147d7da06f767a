//! Configuration constants for the bus bridge and the pong loop
//!
//! This module contains all tunable parameters such as court size, paddle
//! and ball dimensions, tick rate, and the bus identities we listen to.

/// Target ticks per second for the simulation loop
pub const TARGET_TICK_HZ: f64 = 60.0;

/// Court dimensions
pub mod arena {
    /// Width of the court in logical pixels
    pub const SCREEN_WIDTH: f32 = 640.0;

    /// Height of the court in logical pixels
    pub const SCREEN_HEIGHT: f32 = 480.0;
}

/// Paddle settings
pub mod paddle {
    pub const WIDTH: f32 = 10.0;

    pub const HEIGHT: f32 = 80.0;

    /// Horizontal gap between a paddle and its side wall
    pub const INSET: f32 = 20.0;

    /// Distance the autopilot paddle travels per tick
    pub const AUTOPILOT_STEP: f32 = 1.8;
}

/// Ball settings
pub mod ball {
    pub const RADIUS: f32 = 5.0;

    /// Velocity multiplier applied on every paddle hit (compounds per rally)
    pub const ACCELERATION: f32 = 1.2;

    /// Horizontal speed after a serve
    pub const SERVE_SPEED: f32 = 2.0;

    /// Half-width of the random vertical speed range after a point
    pub const SERVE_SPREAD: f32 = 1.0;

    /// Vertical speed range of the opening serve
    pub const OPENING_VERTICAL_MIN: f32 = 1.0;
    pub const OPENING_VERTICAL_MAX: f32 = 3.0;
}

/// Volume range reported by the headset
pub mod volume {
    /// Highest volume step the device reports
    pub const MAX: u8 = 127;

    /// Value served before the first notification arrives (mid-range)
    pub const DEFAULT: u8 = 63;
}

/// Bus identities
pub mod bus {
    /// Well-known name of the Bluetooth daemon publishing volume changes
    pub const PUBLISHER: &str = "org.bluez";

    /// Full name of the standard properties-changed signal
    pub const PROPERTIES_CHANGED: &str = "org.freedesktop.DBus.Properties.PropertiesChanged";

    /// Interface carrying the `Volume` property
    pub const MEDIA_TRANSPORT_INTERFACE: &str = "org.bluez.MediaTransport1";

    pub const VOLUME_PROPERTY: &str = "Volume";

    /// Name of the background thread that owns the bus connection
    pub const LISTENER_THREAD: &str = "bus-listener";
}

/// Overlay logging settings
pub mod overlay {
    /// Ticks between two overlay log lines (two seconds at 60 Hz)
    pub const LOG_INTERVAL_TICKS: u64 = 120;
}
