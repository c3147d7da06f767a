//! System bus side of the bridge
//!
//! Setup (`connection`, `filter`) runs once on the calling thread and fails
//! fast. After that, `listener` owns the connection on its own thread and
//! feeds `decoder` output into the volume bridge.

pub mod connection;
pub mod decoder;
pub mod filter;
pub mod listener;
pub mod message;

pub use connection::connect;
pub use decoder::{decode, Field, PropertyMap, RawSignal};
pub use listener::spawn_listener;

use zbus::blocking::Connection;

use crate::config::bus::PUBLISHER;
use crate::error::BridgeError;

/// Connect and install the publisher filter, ready for [`spawn_listener`]
pub fn open_session() -> Result<Connection, BridgeError> {
    let connection = connect()?;
    filter::install(&connection, filter::publisher_rule(PUBLISHER)?)?;
    Ok(connection)
}
