//! Global resources and loop state
//!
//! Resources are singleton data shared by the simulation systems.

use bevy::prelude::*;
use rand::{rngs::StdRng, SeedableRng};

use crate::bridge::{SceneSink, Volume, VolumeReader};

// =============================================================================
// Bridge Handles
// =============================================================================

/// Read side of the volume cell written by the bus listener
#[derive(Resource)]
pub struct VolumeReaderRes(pub VolumeReader);

/// Volume sampled at the start of the current tick
#[derive(Resource, Default, Debug, Clone, Copy)]
pub struct LatestVolume(pub Volume);

/// Where finished scenes go
#[derive(Resource)]
pub struct SceneSinkRes(pub Box<dyn SceneSink>);

// =============================================================================
// Tick Management
// =============================================================================

/// Number of ticks processed so far
#[derive(Resource, Default, Debug, Clone, Copy)]
pub struct TickCount(pub u64);

/// Random source for serve angles
#[derive(Resource)]
pub struct ServeRng(pub StdRng);

impl ServeRng {
    pub fn from_entropy() -> Self {
        Self(StdRng::from_entropy())
    }

    /// Reproducible serves
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

// =============================================================================
// Lifecycle
// =============================================================================

/// Loop lifecycle; Running -> Terminated is one-way
#[derive(States, Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SimPhase {
    #[default]
    Running,
    Terminated,
}
