//! Server-side match rule for the volume publisher
//!
//! The rule is installed through the bus daemon's own `AddMatch` so only
//! signals from the publisher are routed to this process.

use tracing::info;
use zbus::blocking::{fdo::DBusProxy, Connection};
use zbus::message::Type as MessageType;
use zbus::MatchRule;

use crate::error::BridgeError;

/// `type='signal',sender='<sender>'`
pub fn publisher_rule(sender: &'static str) -> Result<MatchRule<'static>, BridgeError> {
    let rule = MatchRule::builder()
        .msg_type(MessageType::Signal)
        .sender(sender)
        .map_err(|source| BridgeError::MatchRule {
            sender: sender.to_string(),
            source,
        })?
        .build();
    Ok(rule)
}

/// Installs `rule` and waits for the daemon to acknowledge it
///
/// Must run exactly once, before any message iterator is created on
/// `connection`.
pub fn install(connection: &Connection, rule: MatchRule<'_>) -> Result<(), BridgeError> {
    let rule_text = rule.to_string();
    let proxy = DBusProxy::new(connection).map_err(BridgeError::InstallFilter)?;
    proxy
        .add_match_rule(rule)
        .map_err(|err| BridgeError::InstallFilter(err.into()))?;
    info!(rule = %rule_text, "match rule installed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::bus::PUBLISHER;

    #[test]
    fn rule_selects_publisher_signals_only() {
        let rule = publisher_rule(PUBLISHER).unwrap();
        assert_eq!(rule.msg_type(), Some(MessageType::Signal));
        assert_eq!(rule.sender().map(|s| s.as_str()), Some(PUBLISHER));
        assert!(rule.interface().is_none());
        assert!(rule.member().is_none());

        let text = rule.to_string();
        assert!(text.contains("type='signal'"), "{text}");
        assert!(text.contains("sender='org.bluez'"), "{text}");
    }

    #[test]
    fn rejects_invalid_sender() {
        let err = publisher_rule("not a bus name").unwrap_err();
        assert!(matches!(err, BridgeError::MatchRule { .. }));
    }
}
