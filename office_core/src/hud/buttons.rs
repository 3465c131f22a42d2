//! The UI-button pass: the camera and mask toggles and any other HUD buttons.

use glam::Vec2;
use office_rules::{OfficeState, Player};

use crate::collaborators::{AssetCache, Canvas, Color};
use crate::registry::{ButtonAction, ButtonRegion, ButtonRegistry};

pub const CAMERA_BUTTON: &str = "camera";
pub const MASK_BUTTON: &str = "mask";

/// Create (once), update visibility of, and draw every UI button.
///
/// Buttons without an input position are skipped.
pub fn draw_ui_buttons<E>(registry: &mut ButtonRegistry, state: &OfficeState, engine: &mut E, scale: Vec2)
where
    E: AssetCache + Canvas + ?Sized,
{
    for (key, button) in &state.ui_buttons {
        let Some(object) = button.as_object(key) else {
            continue;
        };
        if object.position.is_none() {
            continue;
        }

        let Some(region) = registry.get_or_create(key, &object, scale, engine, bind_ui_button) else {
            continue;
        };
        region.visible = ui_button_visible(key, &state.player);
        if region.visible {
            engine.draw_texture(&region.texture, region.position, Color::WHITE);
        }
    }
}

/// The toggles fire when the pointer leaves them.
fn bind_ui_button(region: &mut ButtonRegion) {
    region.movable = false;
    match region.id.as_str() {
        CAMERA_BUTTON => region.on_unhover(ButtonAction::RaiseCamera),
        MASK_BUTTON => region.on_unhover(ButtonAction::ToggleMask),
        _ => {}
    }
}

/// Check if a UI button should show this frame.
pub fn ui_button_visible(key: &str, player: &Player) -> bool {
    match key {
        CAMERA_BUTTON => player.camera_button_visible(),
        MASK_BUTTON => player.mask_button_visible(),
        _ => true,
    }
}
