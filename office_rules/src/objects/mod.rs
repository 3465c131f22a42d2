//! Interactive office objects: doors, lights and the regions that trigger them.

mod door;
mod light;

pub use door::*;
pub use light::*;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for one interactive screen region instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RegionId(pub Uuid);

impl RegionId {
    /// Create a new random region ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RegionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RegionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Re-entrancy guard for objects whose toggles play an animation.
///
/// A toggle moves the object to `Transitioning`; the animation finishing moves
/// it back to `Idle`. Toggle requests are only honoured while `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Transition {
    #[default]
    Idle,
    Transitioning,
}

/// The lamp on an object's button, mirroring the object's active state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ButtonLamp {
    pub is_on: bool,
}
