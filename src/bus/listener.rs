//! Background bus listener
//!
//! One dedicated thread owns the connection, parks on the message iterator,
//! and writes every decoded volume into the [`VolumeBridge`]. It is the only
//! writer, and the only place in the process that blocks on the bus.

use std::thread::{self, JoinHandle};

use tracing::{debug, info, warn};
use zbus::blocking::{Connection, MessageIterator};
use zbus::message::Type as MessageType;

use super::decoder::{decode, RawSignal};
use crate::bridge::{Volume, VolumeBridge};
use crate::config::bus::{LISTENER_THREAD, PUBLISHER};
use crate::error::BridgeError;

/// Start the listener in a background thread
///
/// `connection` must already carry the publisher match rule.
pub fn spawn_listener(
    connection: Connection,
    bridge: VolumeBridge,
) -> Result<JoinHandle<()>, BridgeError> {
    thread::Builder::new()
        .name(LISTENER_THREAD.to_string())
        .spawn(move || {
            info!(publisher = PUBLISHER, "listening for signals");
            listen(&connection, &bridge);
            warn!("bus message stream ended; volume stays at last value");
        })
        .map_err(BridgeError::Spawn)
}

/// Pump messages until the connection's stream ends
fn listen(connection: &Connection, bridge: &VolumeBridge) {
    for message in MessageIterator::from(connection) {
        let message = match message {
            Ok(message) => message,
            Err(err) => {
                debug!(error = %err, "skipping unreadable message");
                continue;
            }
        };

        if message.message_type() != MessageType::Signal {
            continue;
        }

        let signal = RawSignal::from(&message);
        if let Some(volume) = apply(&signal, bridge) {
            debug!(volume = volume.get(), "volume changed");
        }
    }
}

/// Decode one signal and store the result, if any
fn apply(signal: &RawSignal, bridge: &VolumeBridge) -> Option<Volume> {
    let volume = decode(signal)?;
    bridge.store(volume);
    Some(volume)
}
