//! Conversion from wire messages to [`RawSignal`]
//!
//! Conversion never fails. Values the decoder has no tag for become
//! [`Field::Other`], and a body that cannot be read at all becomes empty.

use std::collections::HashMap;

use zbus::zvariant::{Dict, OwnedValue, Structure, Value};
use zbus::Message;

use super::decoder::{Field, PropertyMap, RawSignal};

impl From<&Message> for RawSignal {
    fn from(message: &Message) -> Self {
        let header = message.header();
        let name = match (header.interface(), header.member()) {
            (Some(interface), Some(member)) => format!("{interface}.{member}"),
            (None, Some(member)) => member.to_string(),
            _ => String::new(),
        };

        RawSignal::new(name, body_fields(message))
    }
}

fn body_fields(message: &Message) -> Vec<Field> {
    let body = message.body();
    match body.deserialize::<Structure<'_>>() {
        Ok(structure) => structure.fields().iter().map(field_from_value).collect(),
        Err(_) => Vec::new(),
    }
}

fn field_from_value(value: &Value<'_>) -> Field {
    match value {
        Value::Str(s) => Field::Str(s.as_str().to_owned()),
        Value::U16(n) => Field::U16(*n),
        // Variants are transparent: `a{sv}` values arrive wrapped.
        Value::Value(inner) => field_from_value(inner),
        Value::Dict(dict) => property_map(dict)
            .map(Field::Map)
            .unwrap_or_else(|| other(value)),
        _ => other(value),
    }
}

/// String-keyed dictionaries only; `a{ov}` and friends are "other"
fn property_map(dict: &Dict<'_, '_>) -> Option<PropertyMap> {
    let entries = HashMap::<String, OwnedValue>::try_from(dict.try_clone().ok()?).ok()?;
    Some(
        entries
            .iter()
            .map(|(key, value)| (key.clone(), field_from_value(value)))
            .collect(),
    )
}

fn other(value: &Value<'_>) -> Field {
    Field::Other(value.value_signature().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge::Volume;
    use crate::bus::decoder::decode;
    use crate::config::bus::{MEDIA_TRANSPORT_INTERFACE, PROPERTIES_CHANGED};

    const TRANSPORT_PATH: &str = "/org/bluez/hci0/dev_00_11_22_33_44_55/fd0";

    fn properties_changed(props: HashMap<&str, Value<'_>>) -> Message {
        Message::signal(
            TRANSPORT_PATH,
            "org.freedesktop.DBus.Properties",
            "PropertiesChanged",
        )
        .unwrap()
        .build(&(MEDIA_TRANSPORT_INTERFACE, props, Vec::<&str>::new()))
        .unwrap()
    }

    #[test]
    fn converts_properties_changed_signal() {
        let mut props = HashMap::new();
        props.insert("Volume", Value::from(42u16));
        props.insert("State", Value::from("active"));

        let signal = RawSignal::from(&properties_changed(props));

        assert_eq!(signal.name, PROPERTIES_CHANGED);
        assert_eq!(signal.body.len(), 3);
        assert_eq!(
            signal.body[0],
            Field::Str(MEDIA_TRANSPORT_INTERFACE.to_string())
        );
        let Field::Map(changed) = &signal.body[1] else {
            panic!("expected property map, got {:?}", signal.body[1]);
        };
        assert_eq!(changed.get("Volume"), Some(&Field::U16(42)));
        assert_eq!(changed.get("State"), Some(&Field::Str("active".to_string())));
        assert_eq!(decode(&signal), Volume::new(42));
    }

    #[test]
    fn wrong_wire_type_becomes_other() {
        let mut props = HashMap::new();
        props.insert("Volume", Value::from(42u32));

        let signal = RawSignal::from(&properties_changed(props));

        let Field::Map(changed) = &signal.body[1] else {
            panic!("expected property map, got {:?}", signal.body[1]);
        };
        assert!(matches!(changed.get("Volume"), Some(Field::Other(_))));
        assert_eq!(decode(&signal), None);
    }

    #[test]
    fn signal_without_body_converts_to_empty_body() {
        let message = Message::signal(TRANSPORT_PATH, "org.bluez.Device1", "Ping")
            .unwrap()
            .build(&())
            .unwrap();

        let signal = RawSignal::from(&message);

        assert_eq!(signal.name, "org.bluez.Device1.Ping");
        assert!(signal.body.is_empty());
        assert_eq!(decode(&signal), None);
    }
}
