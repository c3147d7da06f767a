//! Volume extraction from properties-changed signals
//!
//! The decoder works on [`RawSignal`], a tagged-variant view of a bus
//! message. Every step checks the tag before looking inside, so an
//! unexpected shape yields `None` instead of a panic. The bus carries
//! third-party traffic we do not control; nothing here may fail.

use std::collections::HashMap;

use crate::bridge::Volume;
use crate::config::bus::{MEDIA_TRANSPORT_INTERFACE, PROPERTIES_CHANGED, VOLUME_PROPERTY};

/// Changed-property mapping carried in body field 1
pub type PropertyMap = HashMap<String, Field>;

/// One body field, tagged by the wire type the decoder cares about
#[derive(Debug, Clone, PartialEq)]
pub enum Field {
    Str(String),
    U16(u16),
    Map(PropertyMap),
    /// Anything else, identified by its wire signature
    Other(String),
}

/// A received signal: dotted `interface.member` name plus its body
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawSignal {
    pub name: String,
    pub body: Vec<Field>,
}

impl RawSignal {
    pub fn new(name: impl Into<String>, body: Vec<Field>) -> Self {
        Self {
            name: name.into(),
            body,
        }
    }
}

/// Returns the new volume if `signal` announces one, `None` otherwise
pub fn decode(signal: &RawSignal) -> Option<Volume> {
    if signal.name != PROPERTIES_CHANGED {
        return None;
    }

    let Some(Field::Str(interface)) = signal.body.first() else {
        return None;
    };
    if interface != MEDIA_TRANSPORT_INTERFACE {
        return None;
    }

    let Some(Field::Map(changed)) = signal.body.get(1) else {
        return None;
    };

    // Declared as `q` on the wire; anything else is skipped.
    match changed.get(VOLUME_PROPERTY)? {
        Field::U16(raw) => Some(Volume::clamped(*raw)),
        _ => None,
    }
}
