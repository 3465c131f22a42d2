//! Door state.

use serde::{Deserialize, Serialize};

use super::{ButtonLamp, Transition};
use crate::definitions::DoorDefinition;

/// Direction a door moved in on a completed toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DoorMotion {
    Closing,
    Opening,
}

/// A door in the office and the button that drives it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DoorState {
    pub is_closed: bool,
    /// Button lamp; lit while the door is closed.
    pub button: ButtonLamp,
    pub transition: Transition,
    pub open_sound: Option<String>,
    pub close_sound: Option<String>,
}

impl DoorState {
    /// Create an open, idle door.
    pub fn new(open_sound: Option<String>, close_sound: Option<String>) -> Self {
        Self {
            is_closed: false,
            button: ButtonLamp::default(),
            transition: Transition::Idle,
            open_sound,
            close_sound,
        }
    }

    /// Build the door described by a project definition.
    pub fn from_definition(definition: &DoorDefinition) -> Self {
        Self::new(definition.open_sound.clone(), definition.close_sound.clone())
    }

    /// Check if a toggle is still playing out.
    pub fn is_transitioning(&self) -> bool {
        self.transition == Transition::Transitioning
    }

    /// Flip the door and its lamp together and enter `Transitioning`.
    ///
    /// Returns `None` without touching anything while a previous toggle is
    /// still transitioning.
    pub fn begin_toggle(&mut self) -> Option<DoorMotion> {
        if self.is_transitioning() {
            return None;
        }

        self.is_closed = !self.is_closed;
        self.button.is_on = !self.button.is_on;
        self.transition = Transition::Transitioning;

        Some(if self.is_closed {
            DoorMotion::Closing
        } else {
            DoorMotion::Opening
        })
    }

    /// Mark the running transition as done.
    pub fn settle(&mut self) {
        self.transition = Transition::Idle;
    }

    /// The cue matching a motion, if the door has one.
    pub fn sound_for(&self, motion: DoorMotion) -> Option<&str> {
        match motion {
            DoorMotion::Closing => self.close_sound.as_deref(),
            DoorMotion::Opening => self.open_sound.as_deref(),
        }
    }
}
