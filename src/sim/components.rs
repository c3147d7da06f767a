//! ECS components for the court
//!
//! Positions are in court pixels with the origin at the top-left corner and
//! y growing downwards.

use bevy::prelude::*;

use crate::config::paddle::{HEIGHT, WIDTH};

/// Which half of the court an entity defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// The ball: centre position and per-tick velocity
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub position: Vec2,
    pub velocity: Vec2,
}

/// A paddle and the points its player has scored
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub side: Side,
    /// Top-left corner
    pub position: Vec2,
    pub score: u32,
}

impl Paddle {
    pub fn new(side: Side, position: Vec2) -> Self {
        Self {
            side,
            position,
            score: 0,
        }
    }

    /// x coordinate of the edge facing the court centre
    pub fn front_edge(&self) -> f32 {
        match self.side {
            Side::Left => self.position.x + WIDTH,
            Side::Right => self.position.x,
        }
    }

    /// Whether `y` lies within the paddle's vertical extent (inclusive)
    pub fn spans(&self, y: f32) -> bool {
        y >= self.position.y && y <= self.position.y + HEIGHT
    }

    pub fn centre_y(&self) -> f32 {
        self.position.y + HEIGHT / 2.0
    }
}

/// Marker for the paddle steered by the headset volume
#[derive(Component)]
pub struct VolumeControlled;

/// Marker for the computer-driven paddle
#[derive(Component)]
pub struct Autopilot;
