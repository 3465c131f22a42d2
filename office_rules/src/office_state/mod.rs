//! Office state - the central structure an office session mutates.

mod player;

pub use player::*;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

use crate::definitions::{OfficeDefinition, UiButtonDefinition};
use crate::mechanics::MAX_USAGE_BARS;
use crate::objects::{DoorState, LightPath, LightState};

/// Unique identifier for one loaded office session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Remaining power and the number of active draws on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PowerModel {
    /// Remaining budget in percent. Drained elsewhere in the engine.
    pub level: i32,
    /// Active draws: closed doors, lit lights, the raised camera panel.
    pub usage: i32,
}

impl Default for PowerModel {
    fn default() -> Self {
        Self {
            level: 100,
            usage: 0,
        }
    }
}

impl PowerModel {
    pub fn new(level: i32) -> Self {
        Self { level, usage: 0 }
    }

    /// A draw was switched on.
    pub fn add_draw(&mut self) {
        self.usage += 1;
    }

    /// A draw was switched off.
    pub fn remove_draw(&mut self) {
        self.usage -= 1;
    }

    /// Apply a signed usage change of one draw.
    pub fn adjust(&mut self, delta: i32) {
        self.usage += delta;
    }

    /// Usage clamped to the bars the HUD can show.
    pub fn usage_bars(&self) -> i32 {
        self.usage.clamp(0, MAX_USAGE_BARS)
    }
}

/// Per-night rule toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OfficeSettings {
    /// Enable the mask-exposure (toxicity) rule.
    pub toxic: bool,
}

/// In-game clock reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ClockTime {
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

impl ClockTime {
    pub fn new(hours: u32, minutes: u32, seconds: u32) -> Self {
        Self {
            hours,
            minutes,
            seconds,
        }
    }

    /// Check if the clock still reads midnight.
    pub fn is_midnight(&self) -> bool {
        self.hours == 0
    }

    /// The HUD clock label. Hour zero reads as twelve.
    pub fn hud_label(&self) -> String {
        if self.is_midnight() {
            " 12 AM".to_string()
        } else {
            format!("{} AM", self.hours)
        }
    }
}

/// The complete state of an office during a night.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OfficeState {
    pub night: u32,
    pub power: PowerModel,
    pub doors: BTreeMap<String, DoorState>,
    pub lights: BTreeMap<String, LightState>,
    /// Which light on the shared path is active, and what rotates in next.
    pub light_path: LightPath,
    pub player: Player,
    pub settings: OfficeSettings,
    pub ui_buttons: BTreeMap<String, UiButtonDefinition>,
    pub animatronics: Vec<String>,
    pub cameras: Vec<String>,
}

impl OfficeState {
    /// Build the starting state for a night in the given office.
    pub fn from_definition(
        definition: &OfficeDefinition,
        night: u32,
        settings: OfficeSettings,
        power_level: i32,
    ) -> Self {
        Self {
            night,
            power: PowerModel::new(power_level),
            doors: definition
                .doors
                .iter()
                .map(|(id, door)| (id.clone(), DoorState::from_definition(door)))
                .collect(),
            lights: definition
                .lights
                .iter()
                .map(|(id, light)| (id.clone(), LightState::from_definition(light)))
                .collect(),
            light_path: LightPath::parse(&definition.light_state),
            player: Player::new(),
            settings,
            ui_buttons: definition.ui_buttons.clone(),
            animatronics: definition.animatronics.clone(),
            cameras: definition.cameras.clone(),
        }
    }

    /// Check if a light is currently lit.
    pub fn is_light_on(&self, id: &str) -> bool {
        self.lights.get(id).is_some_and(|light| light.is_on)
    }
}
