use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::CoreError;

/// Travel cost between stops, measured in Manhattan-distance units.
pub type Cost = u32;

/// Sentinel cost for a destination with no known route.
pub const INFINITY: Cost = Cost::MAX;

/// Stable identifier of a stop within a network arena.
///
/// Stops refer to each other by id rather than by owning pointer, so the
/// (cyclic) stop graph never turns into a cyclic ownership graph.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct StopId(pub u32);

impl StopId {
    /// Position of this stop in the arena's backing storage.
    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "stop#{}", self.0)
    }
}

/// A stop in the transport network: a named node on an integer grid.
///
/// Two stops with the same name are the same stop; names are unique within a
/// network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stop {
    name: String,
    x: i32,
    y: i32,
}

impl Stop {
    /// Create a new stop. The name must not be empty or all whitespace.
    pub fn new(name: &str, x: i32, y: i32) -> Result<Self, CoreError> {
        if name.trim().is_empty() {
            return Err(CoreError::InvalidStopName(name.to_string()));
        }
        Ok(Self {
            name: name.to_string(),
            x,
            y,
        })
    }

    /// The stop's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Grid x coordinate.
    pub fn x(&self) -> i32 {
        self.x
    }

    /// Grid y coordinate.
    pub fn y(&self) -> i32 {
        self.y
    }

    /// Manhattan distance to another stop. This is the cost of a direct edge.
    pub fn distance_to(&self, other: &Stop) -> Cost {
        self.x
            .abs_diff(other.x)
            .saturating_add(self.y.abs_diff(other.y))
    }
}

impl fmt::Display for Stop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {})", self.name, self.x, self.y)
    }
}
