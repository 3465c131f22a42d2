//! Project definitions - the JSON project file an office is loaded from.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// Errors raised while reading project definitions.
#[derive(Debug, Error)]
pub enum DefinitionError {
    #[error("failed to read project file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse project definition: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("office not defined in project: {0}")]
    UnknownOffice(String),
}

/// A clickable office object: door button, light button, or anything similar.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OfficeObject {
    #[serde(default)]
    pub id: Option<String>,
    /// Unscaled screen position `[x, y]`.
    #[serde(default)]
    pub position: Option<[f32; 2]>,
    #[serde(default)]
    pub sprite: Option<String>,
    #[serde(default)]
    pub sound: Option<String>,
    /// Toggle on release as well as on press.
    #[serde(default)]
    pub clickstyle: bool,
}

impl OfficeObject {
    /// Sprite id, treating an empty string as absent.
    pub fn sprite(&self) -> Option<&str> {
        self.sprite.as_deref().filter(|s| !s.is_empty())
    }
}

/// A door: its button plus animation and cues.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DoorDefinition {
    #[serde(default)]
    pub button: OfficeObject,
    /// Animation id for the open/close transition.
    #[serde(default)]
    pub animation: Option<String>,
    #[serde(default)]
    pub open_sound: Option<String>,
    #[serde(default)]
    pub close_sound: Option<String>,
}

/// Pointer input area of a HUD button.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UiButtonInput {
    #[serde(default)]
    pub position: Option<[f32; 2]>,
    #[serde(default)]
    pub image: String,
}

/// A HUD button (camera toggle, mask toggle, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UiButtonDefinition {
    #[serde(default)]
    pub input: Option<UiButtonInput>,
}

impl UiButtonDefinition {
    /// View the input area as a generic office object for region creation.
    pub fn as_object(&self, id: &str) -> Option<OfficeObject> {
        let input = self.input.as_ref()?;
        Some(OfficeObject {
            id: Some(id.to_string()),
            position: input.position,
            sprite: Some(input.image.clone()),
            ..Default::default()
        })
    }
}

/// Everything placed in one office.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OfficeDefinition {
    #[serde(default)]
    pub text_font: Option<String>,
    #[serde(default)]
    pub doors: BTreeMap<String, DoorDefinition>,
    #[serde(default)]
    pub lights: BTreeMap<String, OfficeObject>,
    #[serde(default)]
    pub ui_buttons: BTreeMap<String, UiButtonDefinition>,
    /// Initial light path, in `"<active>:<csv>"` form.
    #[serde(default)]
    pub light_state: String,
    #[serde(default)]
    pub animatronics: Vec<String>,
    #[serde(default)]
    pub cameras: Vec<String>,
}

/// Project-wide sound cues. A missing cue plays nothing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SoundCues {
    #[serde(default)]
    pub camup: Option<String>,
    #[serde(default)]
    pub camdown: Option<String>,
    #[serde(default)]
    pub maskon: Option<String>,
    #[serde(default)]
    pub maskoff: Option<String>,
    #[serde(default)]
    pub mask_breathing: Option<String>,
    #[serde(default)]
    pub mask_toxic: Option<String>,
}

/// Animation ids of the two full-screen HUD overlays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HudAnimations {
    #[serde(default = "default_camera_animation")]
    pub camera: String,
    #[serde(default = "default_mask_animation")]
    pub mask: String,
}

fn default_camera_animation() -> String {
    "e.camera".to_string()
}

fn default_mask_animation() -> String {
    "e.mask".to_string()
}

impl Default for HudAnimations {
    fn default() -> Self {
        Self {
            camera: default_camera_animation(),
            mask: default_mask_animation(),
        }
    }
}

/// The parts of a project file the office needs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectDefinition {
    #[serde(default)]
    pub offices: BTreeMap<String, OfficeDefinition>,
    #[serde(default)]
    pub sounds: SoundCues,
    #[serde(default)]
    pub hud: HudAnimations,
}

impl ProjectDefinition {
    /// Parse a project definition from JSON.
    pub fn from_json_str(json: &str) -> Result<Self, DefinitionError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a project file.
    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self, DefinitionError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let project = Self::from_json_str(&json)?;
        tracing::debug!(path = %path.display(), offices = project.offices.len(), "loaded project definition");
        Ok(project)
    }

    /// Look up an office by name.
    pub fn office(&self, name: &str) -> Result<&OfficeDefinition, DefinitionError> {
        self.offices
            .get(name)
            .ok_or_else(|| DefinitionError::UnknownOffice(name.to_string()))
    }
}
