//! Error types
//!
//! Startup failures are fatal and surface as [`BridgeError`]. Per-message
//! problems never become errors; the decoder simply skips them.

use thiserror::Error;

/// Unrecoverable failure while bringing up the bus side of the bridge
#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("failed to connect to system bus: {0}")]
    Connect(#[source] zbus::Error),

    #[error("invalid match rule for sender '{sender}': {source}")]
    MatchRule {
        sender: String,
        #[source]
        source: zbus::Error,
    },

    #[error("failed to add match rule: {0}")]
    InstallFilter(#[source] zbus::Error),

    #[error("failed to spawn listener thread: {0}")]
    Spawn(#[source] std::io::Error),
}

/// The renderer consuming scenes has gone away
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("render target closed")]
pub struct RenderTargetClosed;
