//! System bus session

use tracing::info;
use zbus::blocking::Connection;

use crate::error::BridgeError;

/// Opens a session on the system bus
///
/// There is no retry: without the bus the bridge has nothing to do, so the
/// caller is expected to abort startup on error.
pub fn connect() -> Result<Connection, BridgeError> {
    let connection = Connection::system().map_err(BridgeError::Connect)?;
    info!(
        unique_name = ?connection.unique_name().map(|name| name.to_string()),
        "connected to system bus"
    );
    Ok(connection)
}
