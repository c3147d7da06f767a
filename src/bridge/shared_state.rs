//! Shared state between the bus listener and the simulation loop
//!
//! The only value crossing threads is the latest headset volume. It lives in
//! a single atomic cell: the listener thread owns the [`VolumeBridge`] and is
//! the only writer, the simulation loop holds [`VolumeReader`] handles.

use serde::{Deserialize, Serialize};
use std::sync::{
    atomic::{AtomicU8, Ordering},
    Arc,
};

use crate::config::volume::{DEFAULT, MAX};

// =============================================================================
// Volume Value
// =============================================================================

/// Headset volume step, always within `0..=127`
///
/// Serializes as a bare number; deserializing clamps like the bus decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub struct Volume(u8);

impl Volume {
    pub const MIN: Volume = Volume(0);
    pub const MAX: Volume = Volume(MAX);
    pub const DEFAULT: Volume = Volume(DEFAULT);

    /// Returns `None` when `raw` is above the device range
    #[cfg(test)]
    pub fn new(raw: u8) -> Option<Self> {
        (raw <= MAX).then_some(Volume(raw))
    }

    /// Narrows a wire value into range, saturating at [`Volume::MAX`]
    pub fn clamped(raw: u16) -> Self {
        Volume(raw.min(u16::from(MAX)) as u8)
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl From<u8> for Volume {
    fn from(raw: u8) -> Self {
        Volume::clamped(u16::from(raw))
    }
}

impl From<Volume> for u8 {
    fn from(volume: Volume) -> Self {
        volume.0
    }
}

impl Default for Volume {
    fn default() -> Self {
        Volume::DEFAULT
    }
}

// =============================================================================
// Volume Bridge
// =============================================================================

/// Single-writer side of the volume cell
///
/// Not `Clone`: whoever owns this value is the one writer. Hand out
/// [`VolumeReader`]s to anything that only needs to look.
#[derive(Debug)]
pub struct VolumeBridge {
    cell: Arc<AtomicU8>,
}

impl VolumeBridge {
    pub fn new() -> Self {
        Self {
            cell: Arc::new(AtomicU8::new(DEFAULT)),
        }
    }

    /// Overwrites the current value; never blocks
    pub fn store(&self, volume: Volume) {
        self.cell.store(volume.get(), Ordering::Release);
    }

    /// Most recently stored value, or the default if nothing was stored yet
    pub fn load(&self) -> Volume {
        load_cell(&self.cell)
    }

    pub fn reader(&self) -> VolumeReader {
        VolumeReader {
            cell: Arc::clone(&self.cell),
        }
    }
}

impl Default for VolumeBridge {
    fn default() -> Self {
        Self::new()
    }
}

/// Read-only handle to the volume cell
#[derive(Debug, Clone)]
pub struct VolumeReader {
    cell: Arc<AtomicU8>,
}

impl VolumeReader {
    /// Never blocks and never fails
    pub fn load(&self) -> Volume {
        load_cell(&self.cell)
    }
}

// The writer only ever stores clamped values, so this is in range.
fn load_cell(cell: &AtomicU8) -> Volume {
    Volume(cell.load(Ordering::Acquire))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn fresh_bridge_loads_default() {
        let bridge = VolumeBridge::new();
        assert_eq!(bridge.load(), Volume::DEFAULT);
        assert_eq!(bridge.reader().load().get(), 63);
    }

    #[test]
    fn store_is_sticky_across_loads() {
        let bridge = VolumeBridge::new();
        let reader = bridge.reader();
        bridge.store(Volume::clamped(42));
        for _ in 0..10 {
            assert_eq!(reader.load().get(), 42);
        }
    }

    #[test]
    fn later_store_supersedes_earlier() {
        let bridge = VolumeBridge::new();
        bridge.store(Volume::clamped(10));
        bridge.store(Volume::clamped(99));
        assert_eq!(bridge.load().get(), 99);
    }

    #[test]
    fn clamps_out_of_range_reports() {
        assert_eq!(Volume::clamped(127), Volume::MAX);
        assert_eq!(Volume::clamped(128), Volume::MAX);
        assert_eq!(Volume::clamped(u16::MAX), Volume::MAX);
        assert_eq!(Volume::new(128), None);
        assert_eq!(Volume::new(0), Some(Volume::MIN));
    }

    #[test]
    fn wire_form_is_a_clamped_number() {
        assert_eq!(serde_json::to_string(&Volume::DEFAULT).unwrap(), "63");
        assert_eq!(serde_json::from_str::<Volume>("42").unwrap().get(), 42);
        assert_eq!(serde_json::from_str::<Volume>("200").unwrap(), Volume::MAX);
    }

    #[test]
    fn reader_on_another_thread_sees_final_store() {
        let bridge = VolumeBridge::new();
        let reader = bridge.reader();
        let writer = thread::spawn(move || {
            for raw in 0..=127u16 {
                bridge.store(Volume::clamped(raw));
            }
        });
        writer.join().unwrap();
        assert_eq!(reader.load(), Volume::MAX);
    }
}
