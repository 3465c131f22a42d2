//! Fixed office mechanics: scenes, audio channels and toxicity limits.

use serde::{Deserialize, Serialize};

/// Scenes the office can switch between without losing its state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SceneKind {
    Office,
    Cameras,
}

impl SceneKind {
    /// The scene a camera toggle leads to from this one.
    pub fn toggled(self) -> Self {
        match self {
            SceneKind::Office => SceneKind::Cameras,
            SceneKind::Cameras => SceneKind::Office,
        }
    }
}

/// An audio mixer channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Channel(pub u8);

impl Channel {
    /// Camera up/down cues.
    pub const CAMERA: Channel = Channel(2);
    /// Mask on/off and forced-removal cues.
    pub const MASK: Channel = Channel(3);
    /// Breathing loop while the mask is worn.
    pub const BREATHING: Channel = Channel(8);
    /// Office ambience, muted on every camera switch.
    pub const AMBIENCE: Channel = Channel(10);
    /// Hum of the active light.
    pub const LIGHT: Channel = Channel(12);
    /// Door open/close cues.
    pub const DOOR: Channel = Channel(13);
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "channel {}", self.0)
    }
}

/// Toxicity ceiling. Reaching it with the mask on forces the mask off.
pub const TOXIC_CEILING: f32 = 280.0;

/// Highest usage bar the HUD can show.
pub const MAX_USAGE_BARS: i32 = 4;

/// What one frame of toxicity accrual asks the caller to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToxicityOutcome {
    Steady,
    /// The ceiling was reached with the mask on; take it off.
    ForceMaskOff,
}
