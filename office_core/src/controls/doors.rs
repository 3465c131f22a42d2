//! Door toggles.

use office_rules::{Channel, DoorMotion, OfficeState};
use std::collections::BTreeMap;

use crate::animation::{Animation, Lifecycle};
use crate::collaborators::SoundPlayer;

/// Door animations keyed by door id.
pub type DoorAnimations = BTreeMap<String, Box<dyn Animation>>;

/// Settle a freshly loaded door animation at the open pose.
///
/// The parking playback has no length and is completed here, so the door
/// accepts its first click before any frame is drawn. The next
/// [`Animation::reverse`] then plays the closing transition.
pub fn park_door_animation(animation: &mut dyn Animation) {
    animation.show();
    animation.reset();
    animation.reverse();
    animation.advance(0.0);
}

/// Handle a click on a door button. Returns whether the door toggled.
///
/// Ignored while the door's previous toggle is still animating, and for doors
/// without an animation.
pub fn on_door_click<S>(
    state: &mut OfficeState,
    animations: &mut DoorAnimations,
    door_id: &str,
    sound: &mut S,
) -> bool
where
    S: SoundPlayer + ?Sized,
{
    let Some(animation) = animations.get_mut(door_id) else {
        tracing::trace!(door = door_id, "door has no animation; click ignored");
        return false;
    };
    let Some(door) = state.doors.get_mut(door_id) else {
        tracing::trace!(door = door_id, "unknown door; click ignored");
        return false;
    };
    if animation.has_frames_left() {
        tracing::trace!(door = door_id, "door animation still playing; click ignored");
        return false;
    }
    let Some(motion) = door.begin_toggle() else {
        tracing::trace!(door = door_id, "door still moving; click ignored");
        return false;
    };

    sound.play_cue(door.sound_for(motion), false, Channel::DOOR);
    match motion {
        DoorMotion::Closing => state.power.add_draw(),
        DoorMotion::Opening => state.power.remove_draw(),
    }
    animation.reverse();

    tracing::debug!(door = door_id, ?motion, usage = state.power.usage, "door toggled");
    true
}

/// Advance every door animation and settle doors whose transition finished.
pub fn advance_door_animations(
    state: &mut OfficeState,
    animations: &mut DoorAnimations,
    delta_seconds: f32,
) {
    for (door_id, animation) in animations.iter_mut() {
        let finished = animation
            .advance(delta_seconds)
            .iter()
            .any(|event| event.lifecycle == Lifecycle::Finish);

        if finished {
            if let Some(door) = state.doors.get_mut(door_id) {
                door.settle();
            }
        }
    }
}
