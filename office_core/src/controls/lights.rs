//! Light toggles on the shared light path.

use office_rules::{Channel, OfficeState};

use crate::collaborators::{PathFinder, SoundPlayer};

/// Handle a press (or, for click-style lights, a release) on a light button.
/// Returns whether the light toggled.
///
/// Turning a light on displaces the path's active light (one draw off, one
/// on) and rotates the path. Turning the active light off rotates the path
/// and reports the remainder's head to pathing as the light that went dark.
pub fn on_light_click<E>(state: &mut OfficeState, light_id: &str, engine: &mut E) -> bool
where
    E: SoundPlayer + PathFinder + ?Sized,
{
    let Some(light) = state.lights.get(light_id) else {
        tracing::trace!(light = light_id, "unknown light; click ignored");
        return false;
    };
    let was_on = light.is_on;
    let sound = light.sound.clone();
    let plan = state.light_path.plan_toggle(light_id, was_on);

    if let Some(active) = plan.displaced.as_deref() {
        match state.lights.get_mut(active) {
            Some(previous) if previous.is_on => {
                previous.is_on = false;
                state.power.remove_draw();
                engine.on_light_turned_off(active);
            }
            _ => tracing::trace!(light = active, "displaced light was not lit"),
        }
    }
    state.light_path = plan.next;

    if was_on {
        engine.stop_channel(Channel::LIGHT);
        state.power.remove_draw();
        engine.on_light_turned_off(plan.off_notice.as_deref().unwrap_or(light_id));
    } else {
        engine.play_cue(sound.as_deref(), true, Channel::LIGHT);
        state.power.add_draw();
        engine.on_light_turned_on(light_id);
    }

    if let Some(light) = state.lights.get_mut(light_id) {
        light.is_on = !was_on;
    }

    tracing::debug!(
        light = light_id,
        on = !was_on,
        path = %state.light_path,
        usage = state.power.usage,
        "light toggled"
    );
    true
}
