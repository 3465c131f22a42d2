//! Lights and the rotating light path.
//!
//! Lights in an office share one path: at most one light on the path is lit at
//! a time. The path remembers the active light plus an ordered remainder of ids
//! that rotates one step every time the active light changes hands. Its string
//! form, `"<active>:<id>,<id>,..."`, is what project files store and what the
//! rest of the engine expects to read back.

use serde::{Deserialize, Serialize};

use crate::definitions::OfficeObject;

/// Placeholder that fills the remainder once rotation has consumed it.
pub const EMPTY_PATH_PLACEHOLDER: &str = "Default";

/// A light in the office.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LightState {
    pub is_on: bool,
    /// Loop played while the light is on.
    pub sound: Option<String>,
    /// Also toggle on pointer release, not only on press.
    pub clickstyle: bool,
}

impl LightState {
    /// Build the (unlit) light described by a project definition.
    pub fn from_definition(object: &OfficeObject) -> Self {
        Self {
            is_on: false,
            sound: object.sound.clone(),
            clickstyle: object.clickstyle,
        }
    }
}

/// The active light and the ordered remainder of a light path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LightPath {
    /// `None` when the stored form had no single `:` separator.
    pub active: Option<String>,
    pub remainder: Vec<String>,
}

/// The changes a single light click makes to the path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LightTogglePlan {
    /// The path after the click.
    pub next: LightPath,
    /// Previously active light to switch off before the clicked one comes on.
    pub displaced: Option<String>,
    /// Id handed to pathing when the clicked light goes off.
    pub off_notice: Option<String>,
}

impl LightPath {
    /// Parse the stored `"<active>:<csv>"` form.
    ///
    /// Anything other than exactly one `:` is treated as a bare remainder.
    pub fn parse(encoded: &str) -> Self {
        let mut parts = encoded.split(':');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(active), Some(rest), None) => Self {
                active: Some(active.to_string()),
                remainder: split_ids(rest),
            },
            _ => Self {
                active: None,
                remainder: split_ids(encoded),
            },
        }
    }

    /// The remainder advanced one step: head dropped, placeholder if emptied.
    pub fn rotated_tail(&self) -> Vec<String> {
        let tail: Vec<String> = self.remainder.iter().skip(1).cloned().collect();
        if tail.is_empty() {
            vec![EMPTY_PATH_PLACEHOLDER.to_string()]
        } else {
            tail
        }
    }

    /// First id of the remainder, only meaningful when a light is active.
    pub fn remainder_head(&self) -> Option<&str> {
        self.active
            .as_ref()
            .and_then(|_| self.remainder.first())
            .map(String::as_str)
    }

    /// Plan a click on `clicked`, whose current lit state is `clicked_is_on`.
    ///
    /// - Active path, clicked light off: the active light is displaced, the
    ///   clicked light becomes active, the remainder rotates.
    /// - Active path, clicked light on: the path loses its active light and the
    ///   remainder rotates. Pathing hears about the remainder's head going
    ///   dark, not the clicked light.
    /// - No active light: the clicked light becomes active over the whole
    ///   previous path.
    pub fn plan_toggle(&self, clicked: &str, clicked_is_on: bool) -> LightTogglePlan {
        match (&self.active, clicked_is_on) {
            (Some(active), false) => LightTogglePlan {
                next: LightPath {
                    active: Some(clicked.to_string()),
                    remainder: self.rotated_tail(),
                },
                displaced: Some(active.clone()),
                off_notice: None,
            },
            (Some(_), true) => LightTogglePlan {
                next: LightPath {
                    active: None,
                    remainder: self.rotated_tail(),
                },
                displaced: None,
                off_notice: self.remainder_head().map(str::to_string),
            },
            (None, _) => LightTogglePlan {
                next: LightPath {
                    active: Some(clicked.to_string()),
                    remainder: self.remainder.clone(),
                },
                displaced: None,
                off_notice: clicked_is_on.then(|| clicked.to_string()),
            },
        }
    }
}

impl Default for LightPath {
    fn default() -> Self {
        Self::parse("")
    }
}

impl std::fmt::Display for LightPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(active) = &self.active {
            write!(f, "{}:", active)?;
        }
        write!(f, "{}", self.remainder.join(","))
    }
}

fn split_ids(csv: &str) -> Vec<String> {
    csv.split(',').map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        let path = LightPath::parse("A:B,C");
        assert_eq!(path.active.as_deref(), Some("A"));
        assert_eq!(path.remainder, vec!["B", "C"]);
        assert_eq!(path.to_string(), "A:B,C");

        let bare = LightPath::parse("B,C");
        assert!(bare.active.is_none());
        assert_eq!(bare.to_string(), "B,C");

        // More than one separator is kept verbatim as a bare remainder.
        let odd = LightPath::parse("a:b:c");
        assert!(odd.active.is_none());
        assert_eq!(odd.to_string(), "a:b:c");
    }

    #[test]
    fn test_switching_lights_rotates_remainder() {
        let path = LightPath::parse("A:B,C");
        let plan = path.plan_toggle("B", false);

        assert_eq!(plan.next.to_string(), "B:C");
        assert_eq!(plan.displaced.as_deref(), Some("A"));
        assert!(plan.off_notice.is_none());
    }

    #[test]
    fn test_rotation_falls_back_to_placeholder() {
        let path = LightPath::parse("A:B");
        let plan = path.plan_toggle("B", false);

        assert_eq!(plan.next.to_string(), "B:Default");
    }

    #[test]
    fn test_bootstrap_wraps_previous_state() {
        let path = LightPath::parse("");
        let plan = path.plan_toggle("Left", false);

        assert_eq!(plan.next.to_string(), "Left:");
        assert!(plan.displaced.is_none());

        let path = LightPath::parse("C,D");
        assert_eq!(path.plan_toggle("X", false).next.to_string(), "X:C,D");
    }

    #[test]
    fn test_turning_off_notifies_remainder_head() {
        let path = LightPath::parse("B:C,D");
        let plan = path.plan_toggle("B", true);

        assert_eq!(plan.next.to_string(), "D");
        assert_eq!(plan.off_notice.as_deref(), Some("C"));
        assert!(plan.displaced.is_none());
    }
}
